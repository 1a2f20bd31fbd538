//! The wired view tree handed to views, and the root handle that owns every
//! module scope for the duration of a render pass.

use core::any::type_name;
use core::fmt;
use core::ops::Deref;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::Host;
use crate::view::{Scope, WiredView};

/// A single entry of a [`ViewTree`]: a bound view or a nested module tree.
pub enum ViewNode<H: Host> {
    /// A wired view declared directly in this module.
    View(WiredView<H>),
    /// The wired tree of a nested module.
    Tree(ViewTree<H>),
}

impl<H: Host> ViewNode<H> {
    /// Returns the wired view if this entry is a leaf.
    #[must_use]
    pub const fn as_view(&self) -> Option<&WiredView<H>> {
        match self {
            Self::View(view) => Some(view),
            Self::Tree(_) => None,
        }
    }

    /// Returns the nested tree if this entry is a sub-module.
    #[must_use]
    pub const fn as_tree(&self) -> Option<&ViewTree<H>> {
        match self {
            Self::Tree(tree) => Some(tree),
            Self::View(_) => None,
        }
    }
}

impl<H: Host> Clone for ViewNode<H> {
    fn clone(&self) -> Self {
        match self {
            Self::View(view) => Self::View(view.clone()),
            Self::Tree(tree) => Self::Tree(tree.clone()),
        }
    }
}

impl<H: Host> fmt::Debug for ViewNode<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::View(_) => f.write_str("View"),
            Self::Tree(tree) => fmt::Debug::fmt(tree, f),
        }
    }
}

/// An ordered mapping from names to wired views and nested module trees.
///
/// A tree is rebuilt from scratch on every wiring pass and carries no
/// identity or cache across renders. Entries keep the declaration order of
/// the configuration they were wired from.
pub struct ViewTree<H: Host> {
    entries: IndexMap<String, ViewNode<H>>,
}

impl<H: Host> ViewTree<H> {
    pub(crate) const fn from_entries(entries: IndexMap<String, ViewNode<H>>) -> Self {
        Self { entries }
    }

    /// Looks up an entry by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ViewNode<H>> {
        self.entries.get(name)
    }

    /// Looks up a wired view declared directly in this tree.
    #[must_use]
    pub fn view(&self, name: &str) -> Option<&WiredView<H>> {
        self.get(name).and_then(ViewNode::as_view)
    }

    /// Looks up the tree of a nested module.
    #[must_use]
    pub fn subtree(&self, name: &str) -> Option<&ViewTree<H>> {
        self.get(name).and_then(ViewNode::as_tree)
    }

    /// Looks up an entry by dotted path, e.g. `"foo.bar.v1"`.
    #[must_use]
    pub fn at(&self, path: &str) -> Option<&ViewNode<H>> {
        let mut segments = path.split('.');
        let mut node = self.get(segments.next()?)?;
        for segment in segments {
            node = node.as_tree()?.get(segment)?;
        }
        Some(node)
    }

    /// Looks up a wired view by dotted path, e.g. `"foo.bar.v1"`.
    #[must_use]
    pub fn view_at(&self, path: &str) -> Option<&WiredView<H>> {
        self.at(path).and_then(ViewNode::as_view)
    }

    /// Number of entries directly in this tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if this tree has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ViewNode<H>)> {
        self.entries.iter().map(|(name, node)| (name.as_str(), node))
    }
}

impl<H: Host> Default for ViewTree<H> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}

impl<H: Host> Clone for ViewTree<H> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<H: Host> fmt::Debug for ViewTree<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

/// The result of a wiring pass: the root namespace plus ownership of every
/// module scope created along the way.
///
/// Wired views reference their scope weakly while each scope holds the tree
/// its views observe, so the structure contains no strong reference cycles:
/// dropping this handle at the end of a render pass reclaims every scope and
/// every tree built from it.
pub struct WiredTree<H: Host> {
    root: ViewTree<H>,
    scopes: Vec<Rc<Scope<H>>>,
}

impl<H: Host> WiredTree<H> {
    pub(crate) const fn new(root: ViewTree<H>, scopes: Vec<Rc<Scope<H>>>) -> Self {
        Self { root, scopes }
    }

    /// The top-level view namespace.
    #[must_use]
    pub const fn root(&self) -> &ViewTree<H> {
        &self.root
    }

    /// Number of module scopes kept alive by this handle.
    #[must_use]
    pub fn scope_count(&self) -> usize {
        self.scopes.len()
    }
}

impl<H: Host> Deref for WiredTree<H> {
    type Target = ViewTree<H>;

    fn deref(&self) -> &Self::Target {
        &self.root
    }
}

impl<H: Host> fmt::Debug for WiredTree<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(type_name::<Self>())
    }
}
