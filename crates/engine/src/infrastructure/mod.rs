//! Infrastructure implementations.
//!
//! Contains configuration loading and the port implementation for the
//! upstream cat image service.

pub mod config;
pub mod dispatcher;
pub mod ports;
