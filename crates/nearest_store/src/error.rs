use thiserror::Error;

use crate::constants::CityId;

#[derive(Debug, Error)]
pub enum Error {
    /// No store can reach the destination.
    #[error("{0}: path not found")]
    PathNotFound(CityId),

    #[error("unknown city `{0}`")]
    UnknownCity(CityId),

    #[error("city `{0}` is listed more than once")]
    DuplicateCity(CityId),

    #[error("destination `{0}` is not a known city")]
    UnknownDestination(CityId),

    #[error("destination `{0}` is listed more than once")]
    DuplicateDestination(CityId),
}
