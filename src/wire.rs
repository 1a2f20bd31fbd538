//! The recursive transform from a module configuration to a wired view tree.

use std::rc::Rc;

use indexmap::IndexMap;
use tracing::trace;

use crate::Host;
use crate::config::ModuleConfig;
use crate::error::{ModulePath, WireError};
use crate::tree::{ViewNode, ViewTree, WiredTree};
use crate::view::{Scope, WiredView};

/// Wires a module configuration into a tree of views, each pre-bound to its
/// module's state and actions slices.
///
/// Nested modules are wired first, depth-first, against the slices the
/// [`Host`] selectors locate in the parent's state and actions; a missing
/// slice fails fast with the full module path, before anything renders.
/// Local views are then bound against a namespace holding every nested
/// module tree and every sibling view, sealed once complete.
///
/// Wiring is a pure derivation of the current state and actions: every call
/// allocates a fresh tree and nothing is cached between calls. Callers that
/// re-render should wire again so views observe the new state.
///
/// # Errors
///
/// Returns [`WireError::MissingState`] or [`WireError::MissingActions`] when
/// the state or actions shape does not mirror the module declaration, and
/// [`WireError::DuplicateName`] when a scope declares a module and a view
/// under the same name.
pub fn wire<H: Host>(
    state: &H::State,
    actions: &H::Actions,
    config: &ModuleConfig<H>,
) -> Result<WiredTree<H>, WireError> {
    let mut scopes = Vec::new();
    let root = wire_scope(
        state.clone(),
        actions.clone(),
        config,
        ModulePath::root(),
        &mut scopes,
    )?;
    Ok(WiredTree::new(root, scopes))
}

fn wire_scope<H: Host>(
    state: H::State,
    actions: H::Actions,
    config: &ModuleConfig<H>,
    path: ModulePath,
    scopes: &mut Vec<Rc<Scope<H>>>,
) -> Result<ViewTree<H>, WireError> {
    let mut entries = IndexMap::new();

    // Children first: by the time any local view is bound, every nested
    // module tree is already present in the namespace.
    for (name, sub) in config.modules() {
        let child = path.child(name);
        let sub_state = H::state_slice(&state, name)
            .ok_or_else(|| WireError::MissingState { path: child.clone() })?;
        let sub_actions = H::actions_slice(&actions, name)
            .ok_or_else(|| WireError::MissingActions { path: child.clone() })?;
        let tree = wire_scope(sub_state, sub_actions, sub, child, scopes)?;
        entries.insert(name.to_owned(), ViewNode::Tree(tree));
    }

    let scope = Scope::new(state, actions);
    for (name, raw) in config.views() {
        if entries.contains_key(name) {
            return Err(WireError::DuplicateName {
                path,
                name: name.to_owned(),
            });
        }
        entries.insert(
            name.to_owned(),
            ViewNode::View(WiredView::bind(&scope, raw.clone())),
        );
    }

    let tree = ViewTree::from_entries(entries);
    trace!(scope = %path, entries = tree.len(), "wired module scope");
    scope.seal(tree.clone());
    scopes.push(scope);
    Ok(tree)
}
