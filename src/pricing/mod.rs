//! Pricing engine module for the hotel marketplace.
//!
//! Prices stays (rooms, per-guest extras, offers, taxes) and derives owner
//! revenue from transactions. The listing pages, checkout flow and revenue
//! dashboards call it via HTTP/JSON.

pub mod calculators;
pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;

// Re-export commonly used items
pub use calculators::{compute_booking_total, compute_net_revenue, round_money, PricingResult};
pub use routes::router;
pub use services::{PricingError, RevenueSummary};
