use std::borrow::Cow;

/// An error around column configuration, and the reason.
///
/// These can end up in front of whoever maintains the config file, so word
/// the reason like an explanation and not like a stack trace.
///
/// For stylistic and consistency reasons, use _single quotes_ (e.g. `'bad'`)
/// for highlighting error values.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    Config(Cow<'static, str>),
    Other(Cow<'static, str>),
}

impl ConfigError {
    /// Create a new [`ConfigError::Config`].
    pub fn config<R: Into<Cow<'static, str>>>(reason: R) -> Self {
        ConfigError::Config(reason.into())
    }

    /// Create a new [`ConfigError::Other`].
    pub fn other<R: Into<Cow<'static, str>>>(reason: R) -> Self {
        ConfigError::Other(reason.into())
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Config(reason) => write!(f, "Column configuration error: {reason}"),
            ConfigError::Other(reason) => {
                write!(f, "Error with the column configuration: {reason}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<toml_edit::de::Error> for ConfigError {
    fn from(err: toml_edit::de::Error) -> Self {
        ConfigError::Config(err.to_string().into())
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Other(err.to_string().into())
    }
}
