use crate::location::LocationError;
use crate::pattern::PatternError;
use crate::router::RouterOptionsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouterError {
    #[error("no route matched location '{location}'")]
    RouteNotFound { location: String },
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error(transparent)]
    Location(#[from] LocationError),
    #[error(transparent)]
    Options(#[from] RouterOptionsError),
}

pub type RouterResult<T> = Result<T, RouterError>;
