use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocationError {
    #[error("location '{raw}' does not start with routing prefix '{prefix}'")]
    MissingScheme { raw: String, prefix: String },
}

pub type LocationResult<T> = Result<T, LocationError>;
