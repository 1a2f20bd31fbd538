//! Failures surfaced while wiring a module configuration.

use core::fmt;

use thiserror::Error;

/// A dotted path locating one module scope inside the configuration tree.
///
/// The top-level application scope has an empty path and displays as
/// `<root>`; nested scopes display as `foo.bar`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModulePath(Vec<String>);

impl ModulePath {
    /// The path of the top-level application scope.
    #[must_use]
    pub const fn root() -> Self {
        Self(Vec::new())
    }

    /// The path of the module named `name` nested under this scope.
    #[must_use]
    pub fn child(&self, name: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(name.to_owned());
        Self(segments)
    }

    /// Returns `true` for the top-level application scope.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// The path segments, outermost module first.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for ModulePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("<root>")
        } else {
            f.write_str(&self.0.join("."))
        }
    }
}

/// Errors raised while wiring a module configuration into a view tree.
///
/// Every variant surfaces before any view renders. Failures inside a raw
/// view function are never caught or translated here; they propagate
/// unchanged to whoever invoked the wired view.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WireError {
    /// A module was declared but the parent state has no matching slice.
    #[error("missing state slice for module `{path}`")]
    MissingState {
        /// Full path of the module whose state slice could not be located.
        path: ModulePath,
    },

    /// A module was declared but the parent actions have no matching slice.
    #[error("missing actions slice for module `{path}`")]
    MissingActions {
        /// Full path of the module whose actions slice could not be located.
        path: ModulePath,
    },

    /// A name is declared both as a module and as a view in the same scope.
    #[error("`{name}` is declared as both a module and a view in `{path}`")]
    DuplicateName {
        /// Path of the scope containing the colliding declarations.
        path: ModulePath,
        /// The colliding name.
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_path_displays_as_placeholder() {
        assert_eq!(ModulePath::root().to_string(), "<root>");
        assert!(ModulePath::root().is_root());
    }

    #[test]
    fn nested_paths_display_dotted() {
        let path = ModulePath::root().child("foo").child("bar");
        assert_eq!(path.to_string(), "foo.bar");
        assert_eq!(path.segments(), ["foo", "bar"]);
        assert!(!path.is_root());
    }

    #[test]
    fn errors_name_the_offending_module() {
        let err = WireError::MissingState {
            path: ModulePath::root().child("foo"),
        };
        assert_eq!(err.to_string(), "missing state slice for module `foo`");

        let err = WireError::DuplicateName {
            path: ModulePath::root(),
            name: "foo".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "`foo` is declared as both a module and a view in `<root>`"
        );
    }
}
