//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{config::AppConfig, dispatcher::Dispatcher, ports::UpstreamPort};
use crate::use_cases::{self, UpstreamSettings};

/// Main application state.
///
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub cats: use_cases::CatUseCases,
    pub favorites: use_cases::FavoriteUseCases,
    pub votes: use_cases::VoteUseCases,
}

impl App {
    /// Wire every use case to the same upstream port.
    pub fn new(upstream: Arc<dyn UpstreamPort>, settings: UpstreamSettings) -> Self {
        Self {
            use_cases: UseCases {
                cats: use_cases::CatUseCases::new(upstream.clone(), settings.clone()),
                favorites: use_cases::FavoriteUseCases::new(upstream.clone(), settings.clone()),
                votes: use_cases::VoteUseCases::new(upstream, settings),
            },
        }
    }

    /// Build the application with a reqwest dispatcher from `config`.
    pub fn from_config(config: &AppConfig) -> Self {
        let dispatcher: Arc<dyn UpstreamPort> = Arc::new(Dispatcher::new(config.upstream_timeout));
        Self::new(dispatcher, UpstreamSettings::from_config(config))
    }
}
