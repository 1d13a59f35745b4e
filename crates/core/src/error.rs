use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration parse error: {0}")]
    ConfigParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Two source entries share a slug. The later one would be unreachable,
    /// so loading stops instead of picking a winner.
    #[error(
        "Configuration error: duplicate slug '{slug}' (entries {first} and {second})"
    )]
    DuplicateSlug {
        slug: String,
        first: usize,
        second: usize,
    },
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::ConfigParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
