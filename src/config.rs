//! Module configuration: the pure-data declaration a wiring pass reads.

use core::fmt;

use indexmap::IndexMap;

use crate::Host;
use crate::tree::ViewTree;
use crate::view::RawView;

/// Declares one module: its nested modules and its named views.
///
/// Both containers default to empty; a module may declare views without
/// children, children without views, or neither. The matching state and
/// actions slices live on the host side and are located by name through the
/// [`Host`] selectors when the configuration is wired.
///
/// A configuration is authored once and never mutated by wiring; cloning it
/// is cheap because view functions are shared by reference.
pub struct ModuleConfig<H: Host> {
    modules: IndexMap<String, ModuleConfig<H>>,
    views: IndexMap<String, RawView<H>>,
}

impl<H: Host> ModuleConfig<H> {
    /// An empty module declaration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            modules: IndexMap::new(),
            views: IndexMap::new(),
        }
    }

    /// Declares a nested module under `name`.
    #[must_use]
    pub fn module(mut self, name: impl Into<String>, config: Self) -> Self {
        self.modules.insert(name.into(), config);
        self
    }

    /// Declares a view under `name`.
    ///
    /// The function receives the module's state and actions slices, the view
    /// namespace visible to it (all sibling views plus all nested module
    /// trees), and the props and children supplied at the call site.
    #[must_use]
    pub fn view(
        mut self,
        name: impl Into<String>,
        view: impl Fn(&H::State, &H::Actions, &ViewTree<H>, H::Props, H::Children) -> H::Node
        + 'static,
    ) -> Self {
        self.views.insert(name.into(), RawView::new(view));
        self
    }

    /// Nested module declarations, in declaration order.
    pub fn modules(&self) -> impl Iterator<Item = (&str, &Self)> {
        self.modules.iter().map(|(name, sub)| (name.as_str(), sub))
    }

    /// View declarations, in declaration order.
    pub fn views(&self) -> impl Iterator<Item = (&str, &RawView<H>)> {
        self.views.iter().map(|(name, view)| (name.as_str(), view))
    }

    /// Returns `true` if this module declares neither views nor children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty() && self.views.is_empty()
    }
}

impl<H: Host> Default for ModuleConfig<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Host> Clone for ModuleConfig<H> {
    fn clone(&self) -> Self {
        Self {
            modules: self.modules.clone(),
            views: self.views.clone(),
        }
    }
}

impl<H: Host> fmt::Debug for ModuleConfig<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleConfig")
            .field("modules", &self.modules.keys().collect::<Vec<_>>())
            .field("views", &self.views.keys().collect::<Vec<_>>())
            .finish()
    }
}
