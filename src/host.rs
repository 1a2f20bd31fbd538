//! The seam between this crate and a host rendering runtime.

/// Describes the value types a host rendering runtime works with and how
/// module slices are located inside them.
///
/// State, actions, nodes, props and children are all opaque to this crate;
/// the only structure it requires is the pair of *selectors* that locate a
/// nested module's state and actions inside its parent's. Making the
/// selectors part of the seam (instead of indexing parent values by name at
/// first access) lets the wirer fail fast with a named error when the
/// state or actions shape does not mirror the module declaration.
///
/// Slices are returned by value, so `State` and `Actions` should be cheap to
/// clone (reference-counted handles, or value trees whose slices are small).
/// See [`crate::dynamic`] for a ready-made implementation over JSON values.
pub trait Host: 'static {
    /// Application state, or one module's slice of it.
    type State: Clone + 'static;

    /// Action namespace, or one module's slice of it.
    type Actions: Clone + 'static;

    /// Whatever the host runtime renders.
    type Node: 'static;

    /// The attribute bag handed to a wired view at call time.
    type Props: Default + 'static;

    /// The renderable payload handed to a wired view at call time.
    type Children: Default + 'static;

    /// Selects the state slice belonging to the sub-module `name`, or `None`
    /// when the state shape has no such slice.
    fn state_slice(state: &Self::State, name: &str) -> Option<Self::State>;

    /// Selects the actions slice belonging to the sub-module `name`, or
    /// `None` when the actions shape has no such slice.
    fn actions_slice(actions: &Self::Actions, name: &str) -> Option<Self::Actions>;
}
