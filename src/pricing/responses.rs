//! Response DTOs for pricing API endpoints.
//!
//! Money leaves the service rounded to two places; everything before this
//! point is exact.

use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::booking::status::StatusDescriptor;

use super::calculators::{round_money, OfferOutcome, PricingResult};
use super::models::{PaymentMethod, StayParameters};
use super::services::{MethodRevenue, NetRevenueResult, RevenueSummary};

/// Money value for JSON responses
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoneyResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
}

impl MoneyResponse {
    pub fn new(amount: Decimal, currency: &str) -> Self {
        let mut amount = round_money(amount, 2);
        amount.rescale(2);
        Self {
            amount,
            currency: currency.to_string(),
        }
    }
}

/// One tax line of a quote
#[derive(Debug, Serialize)]
pub struct TaxLineResponse {
    pub name: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub rate: Decimal,
    pub amount: MoneyResponse,
}

/// Response for a booking quote
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub quote_id: Uuid,
    pub nights: u32,
    pub guests: u32,
    pub rooms_total: MoneyResponse,
    pub extras_total: MoneyResponse,
    pub gross_total: MoneyResponse,
    pub is_offer_applied: bool,
    pub offer: OfferOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub perk: Option<String>,
    pub discount: MoneyResponse,
    pub total_without_taxes: MoneyResponse,
    pub taxes: Vec<TaxLineResponse>,
    pub total_tax: MoneyResponse,
    pub total_payable: MoneyResponse,
}

impl QuoteResponse {
    pub fn new(stay: &StayParameters, result: PricingResult, currency: &str) -> Self {
        Self {
            quote_id: Uuid::new_v4(),
            nights: stay.nights,
            guests: stay.guests,
            rooms_total: MoneyResponse::new(result.rooms_total, currency),
            extras_total: MoneyResponse::new(result.extras_total, currency),
            gross_total: MoneyResponse::new(result.gross_total, currency),
            is_offer_applied: result.is_offer_applied,
            offer: result.offer_outcome,
            perk: result.perk,
            discount: MoneyResponse::new(result.discount, currency),
            total_without_taxes: MoneyResponse::new(result.total_without_taxes, currency),
            taxes: result
                .per_tax_amounts
                .into_iter()
                .map(|tax| TaxLineResponse {
                    name: tax.name,
                    rate: tax.rate,
                    amount: MoneyResponse::new(tax.amount, currency),
                })
                .collect(),
            total_tax: MoneyResponse::new(result.total_tax, currency),
            total_payable: MoneyResponse::new(result.total_payable, currency),
        }
    }
}

/// Response for net revenue of a single transaction
#[derive(Debug, Serialize)]
pub struct NetRevenueResponse {
    pub payment_method: PaymentMethod,
    pub payment_label: &'static str,
    pub gross: MoneyResponse,
    pub platform_fee: MoneyResponse,
    pub net_revenue: MoneyResponse,
}

impl NetRevenueResponse {
    pub fn new(result: NetRevenueResult, currency: &str) -> Self {
        Self {
            payment_method: result.payment_method,
            payment_label: result.payment_method.descriptor().label,
            gross: MoneyResponse::new(result.gross, currency),
            platform_fee: MoneyResponse::new(result.platform_fee, currency),
            net_revenue: MoneyResponse::new(result.net_revenue, currency),
        }
    }
}

/// Revenue for one payment method
#[derive(Debug, Serialize)]
pub struct MethodRevenueResponse {
    pub payment_method: PaymentMethod,
    pub badge: StatusDescriptor,
    pub transaction_count: usize,
    pub gross: MoneyResponse,
    pub platform_fees: MoneyResponse,
    pub net_revenue: MoneyResponse,
}

impl MethodRevenueResponse {
    fn new(method: MethodRevenue, currency: &str) -> Self {
        Self {
            payment_method: method.payment_method,
            badge: method.payment_method.descriptor(),
            transaction_count: method.transaction_count,
            gross: MoneyResponse::new(method.gross, currency),
            platform_fees: MoneyResponse::new(method.platform_fees, currency),
            net_revenue: MoneyResponse::new(method.net_revenue, currency),
        }
    }
}

/// Response for aggregated revenue
#[derive(Debug, Serialize)]
pub struct RevenueSummaryResponse {
    pub transaction_count: usize,
    pub gross: MoneyResponse,
    pub platform_fees: MoneyResponse,
    pub net_revenue: MoneyResponse,
    pub by_payment_method: Vec<MethodRevenueResponse>,
}

impl RevenueSummaryResponse {
    pub fn new(summary: RevenueSummary, currency: &str) -> Self {
        Self {
            transaction_count: summary.transaction_count,
            gross: MoneyResponse::new(summary.gross, currency),
            platform_fees: MoneyResponse::new(summary.platform_fees, currency),
            net_revenue: MoneyResponse::new(summary.net_revenue, currency),
            by_payment_method: summary
                .by_payment_method
                .into_iter()
                .map(|method| MethodRevenueResponse::new(method, currency))
                .collect(),
        }
    }
}

/// Generic pricing error response
#[derive(Debug, Serialize)]
pub struct PricingErrorResponse {
    pub error_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_response_rounds_half_even() {
        assert_eq!(MoneyResponse::new(dec!(10.125), "INR").amount, dec!(10.12));
        assert_eq!(MoneyResponse::new(dec!(10.135), "INR").amount, dec!(10.14));
    }

    #[test]
    fn test_money_response_serializes_amount_as_string() {
        let json = serde_json::to_value(MoneyResponse::new(dec!(2059.2), "INR")).unwrap();
        assert_eq!(json["amount"], "2059.20");
        assert_eq!(json["currency"], "INR");
    }

    #[test]
    fn test_offer_outcome_serialization() {
        let json = serde_json::to_value(OfferOutcome::BelowMinimum {
            shortfall: dec!(500),
        })
        .unwrap();
        assert_eq!(json["status"], "below_minimum");
        assert_eq!(json["shortfall"], "500");
    }
}
