//! Allocation-subsystem error type.

use thiserror::Error;

use lot_core::LotError;
use lot_route::RouteError;

#[derive(Debug, Error)]
pub enum AllocError {
    #[error("lot configuration error: {0}")]
    Config(String),

    #[error("grid error: {0}")]
    Grid(#[from] LotError),

    #[error("parking request failed: {0}")]
    Route(#[from] RouteError),
}

pub type AllocResult<T> = Result<T, AllocError>;
