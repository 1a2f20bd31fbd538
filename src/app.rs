//! The application-configuration seam and the entry-point adapter.

use core::fmt;
use std::rc::Rc;

use tracing::debug;

use crate::Host;
use crate::config::ModuleConfig;
use crate::error::WireError;
use crate::tree::ViewTree;
use crate::wire::wire;

/// The root rendering entry point carried by an application configuration.
///
/// Host runtimes invoke the [`RootView::Plain`] form with the current state
/// and actions. Authors who want module views write the [`RootView::Composed`]
/// form and wrap their runtime's entry point with [`with_module_views`],
/// which rewrites it into a plain view that wires the whole tree fresh on
/// every invocation.
pub enum RootView<H: Host> {
    /// What the host runtime invokes. Wiring failures surface here as `Err`,
    /// before anything renders.
    #[allow(clippy::type_complexity)]
    Plain(Rc<dyn Fn(&H::State, &H::Actions) -> Result<H::Node, WireError>>),
    /// A root view that additionally receives the wired view tree.
    #[allow(clippy::type_complexity)]
    Composed(Rc<dyn Fn(&H::State, &H::Actions, &ViewTree<H>) -> H::Node>),
}

impl<H: Host> RootView<H> {
    /// Wraps a plain root view.
    pub fn plain(
        f: impl Fn(&H::State, &H::Actions) -> Result<H::Node, WireError> + 'static,
    ) -> Self {
        Self::Plain(Rc::new(f))
    }

    /// Wraps a root view that receives the wired view tree as its third
    /// argument.
    pub fn composed(
        f: impl Fn(&H::State, &H::Actions, &ViewTree<H>) -> H::Node + 'static,
    ) -> Self {
        Self::Composed(Rc::new(f))
    }
}

impl<H: Host> Clone for RootView<H> {
    fn clone(&self) -> Self {
        match self {
            Self::Plain(f) => Self::Plain(Rc::clone(f)),
            Self::Composed(f) => Self::Composed(Rc::clone(f)),
        }
    }
}

impl<H: Host> fmt::Debug for RootView<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain(_) => f.write_str("Plain"),
            Self::Composed(_) => f.write_str("Composed"),
        }
    }
}

/// Access to the parts of a host runtime's application configuration that
/// this crate rewires.
///
/// The configuration's own module and view declarations double as the root
/// module of the wired tree. Everything else the runtime keeps in its
/// configuration is invisible here and passes through the adapter untouched.
pub trait AppConfig {
    /// The host runtime this configuration belongs to.
    type Host: Host;

    /// The root module declaration.
    fn module(&self) -> &ModuleConfig<Self::Host>;

    /// The replaceable root-view slot.
    fn view_mut(&mut self) -> &mut Option<RootView<Self::Host>>;
}

/// Wraps a runtime entry point so that configurations carrying a composed
/// root view have it rewired before the runtime sees them.
///
/// The returned function is a drop-in replacement for `entry`. When a
/// configuration's root view is [`RootView::Composed`], it is replaced by a
/// plain view that recomputes the entire wired view tree from the *current*
/// state and actions and the *static* configuration on every invocation,
/// then delegates to the composed view. Configurations with a plain root
/// view, or none at all, pass through completely unmodified. In every case
/// the configuration is handed on to `entry` and its result returned
/// unchanged.
pub fn with_module_views<C, R>(entry: impl Fn(C) -> R) -> impl Fn(C) -> R
where
    C: AppConfig,
{
    move |mut config: C| {
        match config.view_mut().take() {
            Some(RootView::Composed(compose)) => {
                let module = config.module().clone();
                debug!("rewiring composed root view");
                *config.view_mut() = Some(RootView::plain(move |state, actions| {
                    let tree = wire(state, actions, &module)?;
                    Ok(compose(state, actions, tree.root()))
                }));
            }
            other => *config.view_mut() = other,
        }
        entry(config)
    }
}
