//! Port traits for infrastructure boundaries.
//!
//! The upstream cat image service is the only external system the engine
//! talks to, so there is a single port. Use cases depend on the trait; the
//! reqwest-backed `Dispatcher` implements it.

mod error;
mod external;

pub use error::DispatchError;
pub use external::{DispatchRequest, UpstreamPort};

#[cfg(test)]
pub use external::MockUpstreamPort;
