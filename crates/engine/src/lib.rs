//! Catbridge Engine library.
//!
//! An HTTP front for the cat image service. Every inbound call becomes one
//! upstream dispatch, raced against a deadline.
//!
//! ## Structure
//!
//! - `infrastructure/` - Configuration and the upstream dispatcher (port + adapter)
//! - `use_cases/` - One use case per upstream operation
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

/// Stub upstream servers and settings for tests.
#[cfg(test)]
pub(crate) mod test_fixtures;


pub use app::App;
