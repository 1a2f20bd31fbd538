#![doc = include_str!("../README.md")]
//!
//! # Structure
//!
//! - [`Host`] — the seam to a host rendering runtime: opaque state, actions,
//!   node, props and children types, plus the selectors locating a module's
//!   state and actions slices by name.
//! - [`ModuleConfig`] — the pure-data module declaration (nested modules and
//!   named views, both defaulting to empty).
//! - [`wire`] — the recursive transform producing a [`WiredTree`] of
//!   [`WiredView`]s, children first, namespaces sealed complete.
//! - [`with_module_views`] — wraps a runtime entry point, rewriting a
//!   composed root view into a plain one that rewires the tree per render.
//! - [`dynamic`] — a ready-made [`Host`] over JSON state and a nested action
//!   registry.

pub mod app;
mod config;
pub mod dynamic;
mod error;
mod host;
mod tree;
mod view;
mod wire;

pub use app::{AppConfig, RootView, with_module_views};
pub use config::ModuleConfig;
pub use error::{ModulePath, WireError};
pub use host::Host;
pub use tree::{ViewNode, ViewTree, WiredTree};
pub use view::{RawView, RawViewFn, WiredView};
pub use wire::wire;
