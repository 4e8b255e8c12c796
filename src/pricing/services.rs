//! Pricing service functions.
//!
//! Validate incoming requests, resolve the stay, and hand off to the pure
//! calculators. Revenue aggregation for the owner dashboards lives here too.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::calculators::{
    compute_booking_total, compute_net_revenue, nights_between, platform_fee, PricingResult,
};
use super::models::{
    ExtraSelection, Offer, PaymentMethod, RoomSelection, StayParameters, TaxRate, Transaction,
};
use super::requests::QuoteRequest;

/// Pricing validation error types
#[derive(Debug, Clone, PartialEq)]
pub enum PricingError {
    InvalidStay {
        message: String,
    },
    InvalidAmount {
        field: String,
        value: Decimal,
    },
    InvalidRate {
        field: String,
        value: Decimal,
    },
    AmountOverflow {
        context: String,
    },
}

impl PricingError {
    /// Stable identifier used in error responses
    pub fn error_type(&self) -> &'static str {
        match self {
            PricingError::InvalidStay { .. } => "invalid_stay",
            PricingError::InvalidAmount { .. } => "invalid_amount",
            PricingError::InvalidRate { .. } => "invalid_rate",
            PricingError::AmountOverflow { .. } => "amount_overflow",
        }
    }
}

impl std::fmt::Display for PricingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PricingError::InvalidStay { message } => write!(f, "Invalid stay: {}", message),
            PricingError::InvalidAmount { field, value } => {
                write!(f, "Amount for {} must not be negative (got {})", field, value)
            }
            PricingError::InvalidRate { field, value } => {
                write!(f, "Rate for {} must be between 0 and 100 (got {})", field, value)
            }
            PricingError::AmountOverflow { context } => {
                write!(f, "Amount too large to compute {}", context)
            }
        }
    }
}

impl std::error::Error for PricingError {}

fn overflow(context: &str) -> PricingError {
    PricingError::AmountOverflow {
        context: context.to_string(),
    }
}

fn ensure_non_negative(field: impl Into<String>, value: Decimal) -> Result<(), PricingError> {
    if value < Decimal::ZERO {
        return Err(PricingError::InvalidAmount {
            field: field.into(),
            value,
        });
    }
    Ok(())
}

fn ensure_percentage(field: impl Into<String>, value: Decimal) -> Result<(), PricingError> {
    if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
        return Err(PricingError::InvalidRate {
            field: field.into(),
            value,
        });
    }
    Ok(())
}

/// Build stay parameters from raw dates, enforcing check-out after check-in.
pub fn resolve_stay(
    check_in: NaiveDate,
    check_out: NaiveDate,
    guests: u32,
) -> Result<StayParameters, PricingError> {
    if check_out <= check_in {
        return Err(PricingError::InvalidStay {
            message: format!(
                "check-out {} must be after check-in {}",
                check_out, check_in
            ),
        });
    }
    if guests == 0 {
        return Err(PricingError::InvalidStay {
            message: "at least one guest is required".to_string(),
        });
    }

    Ok(StayParameters {
        check_in,
        check_out,
        nights: nights_between(check_in, check_out),
        guests,
    })
}

/// Reject negative prices and out-of-range percentages before pricing.
pub fn validate_selection(
    rooms: &[RoomSelection],
    extras: &[ExtraSelection],
    taxes: &[TaxRate],
    offer: Option<&Offer>,
) -> Result<(), PricingError> {
    for room in rooms {
        ensure_non_negative(format!("room {}", room.room_id), room.rate)?;
    }
    for extra in extras {
        ensure_non_negative(format!("extra {}", extra.name), extra.cost)?;
    }
    for tax in taxes {
        ensure_percentage(format!("tax {}", tax.name), tax.rate)?;
    }
    if let Some(offer) = offer {
        ensure_non_negative("flat_discount", offer.flat_discount)?;
        ensure_non_negative("max_discount_amount", offer.max_discount_amount)?;
        ensure_non_negative("minimum_booking_amount", offer.minimum_booking_amount)?;
        ensure_percentage("percentage_discount", offer.percentage_discount)?;
    }
    Ok(())
}

/// Validate a quote request and price it.
///
/// # Returns
/// The resolved stay alongside its `PricingResult`
pub fn quote_booking(
    request: &QuoteRequest,
) -> Result<(StayParameters, PricingResult), PricingError> {
    let stay = resolve_stay(request.check_in, request.check_out, request.guests)?;
    validate_selection(
        &request.rooms,
        &request.extras,
        &request.taxes,
        request.offer.as_ref(),
    )?;

    let result = compute_booking_total(
        &stay,
        &request.rooms,
        &request.extras,
        &request.taxes,
        request.offer.as_ref(),
    )
    .ok_or_else(|| overflow("booking total"))?;

    tracing::debug!(
        nights = stay.nights,
        guests = stay.guests,
        gross = %result.gross_total,
        payable = %result.total_payable,
        offer_applied = result.is_offer_applied,
        "Priced booking"
    );

    Ok((stay, result))
}

/// Net revenue breakdown of a single transaction
#[derive(Debug, Clone, PartialEq)]
pub struct NetRevenueResult {
    pub gross: Decimal,
    pub platform_fee: Decimal,
    pub net_revenue: Decimal,
    pub payment_method: PaymentMethod,
}

/// Derive owner revenue from one transaction.
pub fn net_revenue(transaction: &Transaction) -> Result<NetRevenueResult, PricingError> {
    ensure_non_negative("total_cost", transaction.total_cost)?;

    Ok(NetRevenueResult {
        gross: transaction.total_cost,
        platform_fee: platform_fee(transaction).ok_or_else(|| overflow("platform fee"))?,
        net_revenue: compute_net_revenue(transaction).ok_or_else(|| overflow("net revenue"))?,
        payment_method: transaction.payment_method,
    })
}

/// Revenue totals for one payment method
#[derive(Debug, Clone, PartialEq)]
pub struct MethodRevenue {
    pub payment_method: PaymentMethod,
    pub transaction_count: usize,
    pub gross: Decimal,
    pub platform_fees: Decimal,
    pub net_revenue: Decimal,
}

impl MethodRevenue {
    fn empty(payment_method: PaymentMethod) -> Self {
        Self {
            payment_method,
            transaction_count: 0,
            gross: Decimal::ZERO,
            platform_fees: Decimal::ZERO,
            net_revenue: Decimal::ZERO,
        }
    }

    fn add(&mut self, transaction: &Transaction) -> Result<(), PricingError> {
        let revenue = net_revenue(transaction)?;
        self.gross = checked_total(self.gross, revenue.gross)?;
        self.platform_fees = checked_total(self.platform_fees, revenue.platform_fee)?;
        self.net_revenue = checked_total(self.net_revenue, revenue.net_revenue)?;
        self.transaction_count += 1;
        Ok(())
    }
}

fn checked_total(total: Decimal, amount: Decimal) -> Result<Decimal, PricingError> {
    total
        .checked_add(amount)
        .ok_or_else(|| overflow("revenue total"))
}

/// Aggregated owner earnings across transactions
#[derive(Debug, Clone, PartialEq)]
pub struct RevenueSummary {
    pub transaction_count: usize,
    pub gross: Decimal,
    pub platform_fees: Decimal,
    pub net_revenue: Decimal,
    /// Always online first, then at check-in
    pub by_payment_method: Vec<MethodRevenue>,
}

/// Aggregate net revenue for a revenue dashboard.
pub fn summarize_revenue(transactions: &[Transaction]) -> Result<RevenueSummary, PricingError> {
    let mut online = MethodRevenue::empty(PaymentMethod::OnlinePayment);
    let mut at_check_in = MethodRevenue::empty(PaymentMethod::AtCheckIn);

    for transaction in transactions {
        match transaction.payment_method {
            PaymentMethod::OnlinePayment => online.add(transaction)?,
            PaymentMethod::AtCheckIn => at_check_in.add(transaction)?,
        }
    }

    let summary = RevenueSummary {
        transaction_count: online.transaction_count + at_check_in.transaction_count,
        gross: checked_total(online.gross, at_check_in.gross)?,
        platform_fees: checked_total(online.platform_fees, at_check_in.platform_fees)?,
        net_revenue: checked_total(online.net_revenue, at_check_in.net_revenue)?,
        by_payment_method: vec![online, at_check_in],
    };

    tracing::info!(
        transactions = summary.transaction_count,
        net = %summary.net_revenue,
        "Summarized revenue"
    );

    Ok(summary)
}
