//! Errors raised while loading `seokit.toml`.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("cannot read config file `{}`", .0.display())]
    Io(PathBuf, #[source] std::io::Error),

    /// Not valid TOML, or a key/type the site does not know.
    #[error("seokit.toml: {0}")]
    Toml(#[from] toml::de::Error),

    /// Parsed fine, but a value is unusable (bad URL, colliding paths, ...).
    #[error("seokit.toml: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_io_error_names_file() {
        let err = ConfigError::Io(
            PathBuf::from("/site/seokit.toml"),
            Error::new(ErrorKind::PermissionDenied, "denied"),
        );

        assert_eq!(err.to_string(), "cannot read config file `/site/seokit.toml`");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_toml_error_keeps_parser_message() {
        let err: ConfigError = toml::from_str::<toml::Table>("[base").unwrap_err().into();
        let message = err.to_string();

        assert!(matches!(err, ConfigError::Toml(_)));
        assert!(message.starts_with("seokit.toml: "));
        assert!(message.len() > "seokit.toml: ".len());
    }

    #[test]
    fn test_validation_message() {
        let err = ConfigError::Validation("[base.url] must start with http:// or https://".into());
        assert_eq!(err.to_string(), "seokit.toml: [base.url] must start with http:// or https://");
    }
}
