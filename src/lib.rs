//! Current versus prior period energy usage comparison for meters and groups of meters.

pub mod compare;
pub mod error;
mod prelude;
pub mod quantity;
pub mod snapshot;

pub use self::error::{Error, Result};
