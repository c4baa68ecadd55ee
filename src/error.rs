//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ReactorError: Issues with loading the reactor descriptor
//! - ScmError: Issues with SCM repository handles and changelog queries
//! - ConfigError: Issues with CLI configuration
//!
//! All SCM failures are fatal: a single failed changelog query aborts the
//! entire analysis, wrapped in `AppError::Classification` so the failing
//! module is named in the message.

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Reactor descriptor related errors
    #[error(transparent)]
    Reactor(#[from] ReactorError),

    /// SCM related errors
    #[error(transparent)]
    Scm(#[from] ScmError),

    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Classification failed for a specific module
    #[error("failed to classify module {module}: {source}")]
    Classification {
        module: String,
        #[source]
        source: ScmError,
    },
}

impl AppError {
    /// Creates a Classification error naming the failing module
    pub fn classification(module: impl Into<String>, source: ScmError) -> Self {
        AppError::Classification {
            module: module.into(),
            source,
        }
    }
}

/// Errors related to loading the reactor descriptor
#[derive(Error, Debug)]
pub enum ReactorError {
    /// Reactor descriptor file not found
    #[error("reactor descriptor not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read the descriptor file
    #[error("failed to read reactor descriptor {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing error
    #[error("failed to parse TOML in {path}: {message}")]
    TomlParseError { path: PathBuf, message: String },

    /// Malformed dependency coordinate string
    #[error(
        "invalid coordinate '{coordinate}' in module {module}: expected group:artifact:version"
    )]
    InvalidCoordinate { module: String, coordinate: String },

    /// The descriptor declares no modules
    #[error("reactor descriptor {path} declares no modules")]
    EmptyReactor { path: PathBuf },
}

/// Errors related to SCM repository handles and changelog queries
#[derive(Error, Debug)]
pub enum ScmError {
    /// The connection string cannot be parsed into a repository handle
    #[error("invalid SCM connection '{connection}': {message}")]
    InvalidDescriptor { connection: String, message: String },

    /// The connection string names a provider with no registered implementation
    #[error("no SCM provider registered for prefix '{prefix}'")]
    UnsupportedProvider { prefix: String },

    /// The changelog round-trip failed
    #[error("changelog query failed in {working_copy}: {message}")]
    Changelog {
        working_copy: PathBuf,
        message: String,
    },

    /// The changelog round-trip exceeded the configured timeout
    #[error("changelog query timed out in {working_copy}")]
    Timeout { working_copy: PathBuf },
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Provider override names an unknown implementation
    #[error("unknown SCM provider implementation '{name}': expected 'git' or 'hg'")]
    UnknownImplementation { name: String },

    /// Provider override is not a key=value pair
    #[error("invalid provider override '{value}': expected PREFIX=IMPLEMENTATION")]
    InvalidProviderOverride { value: String },
}

impl ReactorError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        ReactorError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ReactorError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new TomlParseError
    pub fn toml_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ReactorError::TomlParseError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new InvalidCoordinate error
    pub fn invalid_coordinate(module: impl Into<String>, coordinate: impl Into<String>) -> Self {
        ReactorError::InvalidCoordinate {
            module: module.into(),
            coordinate: coordinate.into(),
        }
    }
}

impl ScmError {
    /// Creates a new InvalidDescriptor error
    pub fn invalid_descriptor(connection: impl Into<String>, message: impl Into<String>) -> Self {
        ScmError::InvalidDescriptor {
            connection: connection.into(),
            message: message.into(),
        }
    }

    /// Creates a new UnsupportedProvider error
    pub fn unsupported_provider(prefix: impl Into<String>) -> Self {
        ScmError::UnsupportedProvider {
            prefix: prefix.into(),
        }
    }

    /// Creates a new Changelog error
    pub fn changelog(working_copy: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ScmError::Changelog {
            working_copy: working_copy.into(),
            message: message.into(),
        }
    }

    /// Creates a new Timeout error
    pub fn timeout(working_copy: impl Into<PathBuf>) -> Self {
        ScmError::Timeout {
            working_copy: working_copy.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reactor_error_not_found() {
        let err = ReactorError::not_found("/path/to/reactor.toml");
        let msg = format!("{}", err);
        assert!(msg.contains("reactor descriptor not found"));
        assert!(msg.contains("reactor.toml"));
    }

    #[test]
    fn test_reactor_error_toml_parse() {
        let err = ReactorError::toml_parse_error("/path/to/reactor.toml", "unexpected key");
        let msg = format!("{}", err);
        assert!(msg.contains("failed to parse TOML"));
        assert!(msg.contains("unexpected key"));
    }

    #[test]
    fn test_reactor_error_invalid_coordinate() {
        let err = ReactorError::invalid_coordinate("com.example:app:1.0", "com.example/util");
        let msg = format!("{}", err);
        assert!(msg.contains("invalid coordinate"));
        assert!(msg.contains("com.example/util"));
        assert!(msg.contains("com.example:app:1.0"));
    }

    #[test]
    fn test_scm_error_invalid_descriptor() {
        let err = ScmError::invalid_descriptor("git:foo", "missing 'scm:' prefix");
        let msg = format!("{}", err);
        assert!(msg.contains("invalid SCM connection"));
        assert!(msg.contains("missing 'scm:' prefix"));
    }

    #[test]
    fn test_scm_error_unsupported_provider() {
        let err = ScmError::unsupported_provider("svn");
        let msg = format!("{}", err);
        assert!(msg.contains("no SCM provider registered"));
        assert!(msg.contains("svn"));
    }

    #[test]
    fn test_scm_error_changelog() {
        let err = ScmError::changelog("/work/core", "exit status 128");
        let msg = format!("{}", err);
        assert!(msg.contains("changelog query failed"));
        assert!(msg.contains("exit status 128"));
    }

    #[test]
    fn test_scm_error_timeout() {
        let err = ScmError::timeout("/work/core");
        let msg = format!("{}", err);
        assert!(msg.contains("timed out"));
    }

    #[test]
    fn test_config_error_unknown_implementation() {
        let err = ConfigError::UnknownImplementation {
            name: "cvs".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("unknown SCM provider implementation"));
        assert!(msg.contains("cvs"));
    }

    #[test]
    fn test_classification_error_names_module() {
        let err = AppError::classification(
            "com.example:core:1.0.0",
            ScmError::unsupported_provider("svn"),
        );
        let msg = format!("{}", err);
        assert!(msg.contains("failed to classify module com.example:core:1.0.0"));
        assert!(msg.contains("svn"));
    }

    #[test]
    fn test_app_error_from_reactor_error() {
        let reactor_err = ReactorError::not_found("/path");
        let app_err: AppError = reactor_err.into();
        let msg = format!("{}", app_err);
        assert!(msg.contains("reactor descriptor not found"));
    }

    #[test]
    fn test_app_error_from_scm_error() {
        let scm_err = ScmError::unsupported_provider("svn");
        let app_err: AppError = scm_err.into();
        let msg = format!("{}", app_err);
        assert!(msg.contains("no SCM provider registered"));
    }

    #[test]
    fn test_app_error_from_config_error() {
        let config_err = ConfigError::InvalidProviderOverride {
            value: "bad".to_string(),
        };
        let app_err: AppError = config_err.into();
        let msg = format!("{}", app_err);
        assert!(msg.contains("invalid provider override"));
    }
}
