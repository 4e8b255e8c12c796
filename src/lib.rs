//! Booking pricing service for the hotel marketplace.

pub mod booking;
pub mod config;
pub mod error;
pub mod pricing;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::Config;
use crate::error::{AppError, Result};

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Currency for a response: the caller's override, else the configured one
    pub fn currency(&self, requested: Option<&str>) -> Result<String> {
        match requested {
            None => Ok(self.config.currency.clone()),
            Some(code) if code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic()) => {
                Ok(code.to_uppercase())
            }
            Some(code) => Err(AppError::BadRequest(format!(
                "currency must be a three-letter code, got '{}'",
                code
            ))),
        }
    }
}

async fn health() -> &'static str {
    "ok"
}

/// Build the full application router
pub fn create_router(state: AppState) -> Router {
    let cors_allow_any = state.config.cors_allow_any;

    let router = Router::new()
        .route("/health", get(health))
        .nest("/api/pricing", pricing::router())
        .nest("/api/booking-draft", booking::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if cors_allow_any {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_override() {
        let state = AppState::new(Config::default());
        assert_eq!(state.currency(None).unwrap(), "INR");
        assert_eq!(state.currency(Some("eur")).unwrap(), "EUR");
        assert!(matches!(state.currency(Some("euro")), Err(AppError::BadRequest(_))));
    }
}
