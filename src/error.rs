//! Error types shared across the menu engine, collaborators, and config loader.

use std::fmt;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

// ---------------------------------------------------------------------------
// CollaboratorError
// ---------------------------------------------------------------------------

/// Errors raised by cloud-provider collaborators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollaboratorError {
    /// Client setup failed; fatal at startup.
    Init(String),
    /// A provider request failed.
    Request {
        operation: &'static str,
        message: String,
    },
    /// The provider answered but the expected data was absent.
    Missing(String),
}

impl CollaboratorError {
    pub fn request(operation: &'static str, message: impl Into<String>) -> Self {
        Self::Request {
            operation,
            message: message.into(),
        }
    }
}

impl fmt::Display for CollaboratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init(msg) => write!(f, "client initialization failed: {msg}"),
            Self::Request { operation, message } => write!(f, "{operation}: {message}"),
            Self::Missing(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for CollaboratorError {}

// ---------------------------------------------------------------------------
// Input / action / menu errors
// ---------------------------------------------------------------------------

/// The operator's input stream ended (or could no longer be read).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputClosed;

impl fmt::Display for InputClosed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("input closed")
    }
}

impl std::error::Error for InputClosed {}

/// Failure of one leaf action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// A collaborator call failed; reported by the menu and non-fatal.
    Collaborator(CollaboratorError),
    /// Input ended during a chained selection; unwinds the menu stack.
    InputClosed,
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Collaborator(e) => write!(f, "{e}"),
            Self::InputClosed => write!(f, "{InputClosed}"),
        }
    }
}

impl std::error::Error for ActionError {}

impl From<CollaboratorError> for ActionError {
    fn from(e: CollaboratorError) -> Self {
        Self::Collaborator(e)
    }
}

impl From<InputClosed> for ActionError {
    fn from(_: InputClosed) -> Self {
        Self::InputClosed
    }
}

/// Reasons a menu loop stops other than the operator choosing Back/Exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuError {
    InputClosed,
}

impl fmt::Display for MenuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputClosed => write!(f, "{InputClosed}"),
        }
    }
}

impl std::error::Error for MenuError {}

impl From<InputClosed> for MenuError {
    fn from(_: InputClosed) -> Self {
        Self::InputClosed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let e = ConfigError::from(io_err);
        let s = e.to_string();
        assert!(s.starts_with("io:"), "got: {s}");
        assert!(s.contains("file not found"));
    }

    #[test]
    fn config_error_from_toml() {
        let toml_err: toml::de::Error = toml::from_str::<toml::Value>("x = [unclosed").unwrap_err();
        assert!(ConfigError::from(toml_err).to_string().starts_with("toml:"));
    }

    #[test]
    fn collaborator_request_names_operation() {
        let e = CollaboratorError::request("DescribeLoadBalancers", "access denied");
        assert_eq!(e.to_string(), "DescribeLoadBalancers: access denied");
    }

    #[test]
    fn collaborator_missing_is_bare_message() {
        let e = CollaboratorError::Missing("no service deployments found".into());
        assert_eq!(e.to_string(), "no service deployments found");
    }

    #[test]
    fn action_error_keeps_collaborator_message_unmodified() {
        let inner = CollaboratorError::request("ListServices", "throttled");
        let e = ActionError::from(inner.clone());
        assert_eq!(e, ActionError::Collaborator(inner));
        assert_eq!(e.to_string(), "ListServices: throttled");
    }

    #[test]
    fn input_closed_converts_into_action_and_menu_errors() {
        assert_eq!(ActionError::from(InputClosed), ActionError::InputClosed);
        assert_eq!(MenuError::from(InputClosed), MenuError::InputClosed);
        assert_eq!(MenuError::InputClosed.to_string(), "input closed");
    }
}
