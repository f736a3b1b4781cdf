#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Generic {0}")]
    Generic(String),

    #[error("invalid argument `{parameter}`: {reason}")]
    InvalidArgument {
        parameter: &'static str,
        reason: String,
    },

    #[error("geocoding provider {provider} failed: {reason}")]
    GeocodeProvider {
        provider: &'static str,
        reason: String,
    },

    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Template(#[from] askama::Error),
}

pub type Result<T> = core::result::Result<T, Error>;
