//! View binding: closing raw view functions over a module scope.

use core::any::type_name;
use core::fmt;
use std::cell::OnceCell;
use std::rc::{Rc, Weak};

use crate::Host;
use crate::tree::ViewTree;

/// The function signature authors write: the module's full context followed
/// by the call-site input.
pub type RawViewFn<H> = dyn Fn(
    &<H as Host>::State,
    &<H as Host>::Actions,
    &ViewTree<H>,
    <H as Host>::Props,
    <H as Host>::Children,
) -> <H as Host>::Node;

/// A named view function as declared in a module configuration.
///
/// Raw views are authored once and shared by reference; wiring never clones
/// the function itself, only the handle.
pub struct RawView<H: Host>(Rc<RawViewFn<H>>);

impl<H: Host> RawView<H> {
    /// Wraps a view function.
    pub fn new(
        f: impl Fn(&H::State, &H::Actions, &ViewTree<H>, H::Props, H::Children) -> H::Node + 'static,
    ) -> Self {
        Self(Rc::new(f))
    }
}

impl<H: Host> Clone for RawView<H> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<H: Host> fmt::Debug for RawView<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(type_name::<Self>())
    }
}

/// One module's binding context: its state and actions slices plus the
/// namespace its views observe.
///
/// The namespace cell stays empty while the wirer is still building the
/// scope's tree, so a partially built namespace can never be observed; it is
/// sealed exactly once, complete, and from then on every view bound to the
/// scope sees all sub-module trees and all of its siblings.
pub(crate) struct Scope<H: Host> {
    state: H::State,
    actions: H::Actions,
    views: OnceCell<ViewTree<H>>,
}

impl<H: Host> Scope<H> {
    pub(crate) fn new(state: H::State, actions: H::Actions) -> Rc<Self> {
        Rc::new(Self {
            state,
            actions,
            views: OnceCell::new(),
        })
    }

    pub(crate) fn seal(&self, views: ViewTree<H>) {
        let sealed = self.views.set(views).is_ok();
        debug_assert!(sealed, "module scope sealed twice");
    }

    fn views(&self) -> &ViewTree<H> {
        self.views
            .get()
            .expect("module scope used before it was sealed")
    }
}

/// A view pre-bound to its module scope, callable with only props and
/// children.
///
/// Wired views are produced fresh on every wiring pass, so each render's
/// views observe that render's state and actions, never a stale snapshot.
/// They borrow their scope from the [`crate::WiredTree`] that produced them
/// and are only meant to be called while that tree is alive.
pub struct WiredView<H: Host> {
    scope: Weak<Scope<H>>,
    raw: RawView<H>,
}

impl<H: Host> WiredView<H> {
    pub(crate) fn bind(scope: &Rc<Scope<H>>, raw: RawView<H>) -> Self {
        Self {
            scope: Rc::downgrade(scope),
            raw,
        }
    }

    /// Invokes the underlying raw view with this module's state, actions and
    /// view namespace prepended to `props` and `children`, returning its
    /// result unchanged.
    ///
    /// Failures inside the raw view propagate unchanged to the caller.
    ///
    /// # Panics
    ///
    /// Panics if the wired tree this view belongs to has already been
    /// dropped.
    pub fn call(&self, props: H::Props, children: H::Children) -> H::Node {
        let scope = self
            .scope
            .upgrade()
            .expect("wired view invoked after its tree was dropped");
        (self.raw.0)(&scope.state, &scope.actions, scope.views(), props, children)
    }

    /// Invokes the view with default (empty) props and children.
    pub fn call_default(&self) -> H::Node {
        self.call(H::Props::default(), H::Children::default())
    }
}

impl<H: Host> Clone for WiredView<H> {
    fn clone(&self) -> Self {
        Self {
            scope: Weak::clone(&self.scope),
            raw: self.raw.clone(),
        }
    }
}

impl<H: Host> fmt::Debug for WiredView<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(type_name::<Self>())
    }
}
