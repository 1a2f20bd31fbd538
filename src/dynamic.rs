//! A ready-made dynamic [`Host`]: JSON state, a nested action registry, and
//! hyperscript-style JSON nodes.
//!
//! This is the out-of-the-box way to use the crate with runtimes that keep
//! their application state as a dynamic value tree: a module's state slice is
//! the same-named member of its parent's state object, and its actions slice
//! is the same-named nested registry. Statically typed hosts implement
//! [`Host`] over their own types instead.

use core::fmt;
use std::rc::Rc;

use indexmap::IndexMap;
use serde_json::{Map, Value, json};

use crate::Host;

/// Marker type implementing [`Host`] over JSON values.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dynamic;

impl Host for Dynamic {
    type State = Value;
    type Actions = Actions;
    type Node = Value;
    type Props = Map<String, Value>;
    type Children = Vec<Value>;

    fn state_slice(state: &Value, name: &str) -> Option<Value> {
        state.get(name).cloned()
    }

    fn actions_slice(actions: &Actions, name: &str) -> Option<Actions> {
        match actions.get(name) {
            Some(ActionEntry::Module(nested)) => Some(nested.clone()),
            _ => None,
        }
    }
}

/// An action function: receives the module's current state slice and returns
/// a patch for the host runtime to merge over it.
pub type ActionFn = dyn Fn(&Value) -> Value;

/// One entry of an action registry.
#[derive(Clone)]
pub enum ActionEntry {
    /// A callable action.
    Action(Rc<ActionFn>),
    /// The registry of a nested module.
    Module(Actions),
}

impl fmt::Debug for ActionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Action(_) => f.write_str("Action"),
            Self::Module(actions) => fmt::Debug::fmt(actions, f),
        }
    }
}

/// A nested, ordered registry of actions mirroring the module tree.
///
/// Only its shape matters to wiring: slicing descends into [`ActionEntry::Module`]
/// entries by name. What an action does with state is between the author and
/// the host runtime.
#[derive(Clone, Default)]
pub struct Actions {
    entries: IndexMap<String, ActionEntry>,
}

impl Actions {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Registers an action under `name`.
    #[must_use]
    pub fn action(mut self, name: impl Into<String>, f: impl Fn(&Value) -> Value + 'static) -> Self {
        self.entries
            .insert(name.into(), ActionEntry::Action(Rc::new(f)));
        self
    }

    /// Registers a nested module's registry under `name`.
    #[must_use]
    pub fn module(mut self, name: impl Into<String>, actions: Self) -> Self {
        self.entries.insert(name.into(), ActionEntry::Module(actions));
        self
    }

    /// Looks up an entry by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ActionEntry> {
        self.entries.get(name)
    }

    /// Registered names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of entries directly in this registry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is registered here.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Actions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

/// Builds a hyperscript-style element node.
#[must_use]
pub fn element(tag: &str, props: Map<String, Value>, children: Vec<Value>) -> Value {
    json!({ "tag": tag, "props": props, "children": children })
}

/// Builds a text node.
#[must_use]
pub fn text(content: &str) -> Value {
    Value::String(content.to_owned())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn state_slices_are_same_named_members() {
        let state = json!({ "foo": { "val": 1 }, "other": 2 });
        assert_eq!(Dynamic::state_slice(&state, "foo"), Some(json!({ "val": 1 })));
        assert_eq!(Dynamic::state_slice(&state, "other"), Some(json!(2)));
        assert_eq!(Dynamic::state_slice(&state, "missing"), None);
    }

    #[test]
    fn actions_only_slice_into_nested_registries() {
        let actions = Actions::new()
            .action("change", |_| json!({ "val": "changed" }))
            .module("foo", Actions::new().action("go", |_| json!({})));

        assert!(Dynamic::actions_slice(&actions, "foo").is_some());
        // An action is not a module; slicing into it is a shape mismatch.
        assert!(Dynamic::actions_slice(&actions, "change").is_none());
        assert!(Dynamic::actions_slice(&actions, "missing").is_none());
    }

    #[test]
    fn element_builds_hyperscript_nodes() {
        let mut props = Map::new();
        props.insert("id".to_owned(), json!("x"));
        let node = element("div", props, vec![text("y")]);
        assert_eq!(
            node,
            json!({ "tag": "div", "props": { "id": "x" }, "children": ["y"] })
        );
    }
}
