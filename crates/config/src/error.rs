use std::fmt;

#[derive(Debug)]
pub enum ConfigError {
    /// File read/write error.
    Io(String),
    /// JSON / TOML parse or deserialization error.
    Parse(String),
    /// Parsed fine but makes no sense (empty action name, duplicates, etc.).
    Validation(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "IO error: {msg}"),
            Self::Parse(msg) => write!(f, "config parse error: {msg}"),
            Self::Validation(msg) => write!(f, "config validation error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
