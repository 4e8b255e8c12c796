//! Request DTOs for pricing API endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use super::models::{ExtraSelection, Offer, PaymentMethod, RoomSelection, TaxRate, Transaction};

/// Request to price a stay
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteRequest {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
    pub rooms: Vec<RoomSelection>,
    #[serde(default)]
    pub extras: Vec<ExtraSelection>,
    #[serde(default)]
    pub taxes: Vec<TaxRate>,
    #[serde(default)]
    pub offer: Option<Offer>,
    /// Overrides the configured currency in the response
    #[serde(default)]
    pub currency: Option<String>,
}

/// Request to derive net revenue from one transaction
#[derive(Debug, Deserialize)]
pub struct NetRevenueRequest {
    #[serde(with = "rust_decimal::serde::str")]
    pub total_cost: Decimal,
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub currency: Option<String>,
}

impl NetRevenueRequest {
    pub fn transaction(&self) -> Transaction {
        Transaction {
            total_cost: self.total_cost,
            payment_method: self.payment_method,
        }
    }
}

/// Request to aggregate revenue across transactions
#[derive(Debug, Deserialize)]
pub struct RevenueSummaryRequest {
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub currency: Option<String>,
}
