//! Core pricing calculation functions.
//!
//! Pure functions for booking math - no I/O, no shared state.
//! Amounts stay at full `Decimal` precision; rounding happens only when a
//! response is built (see `round_money`).
//!
//! All arithmetic is checked. A result that does not fit in a `Decimal`
//! comes back as `None` instead of panicking.

use chrono::NaiveDate;
use rust_decimal::prelude::*;
use rust_decimal_macros::dec;
use serde::Serialize;

use super::models::{
    ExtraSelection, Offer, OfferType, PaymentMethod, RoomSelection, StayParameters, TaxRate,
    Transaction,
};

/// Platform fee retained on online payments, in percent.
pub const PLATFORM_FEE_PERCENT: Decimal = dec!(5);

/// Round a display amount to `places` decimals, half to even.
///
/// Quotes show every tax line and dashboards add up many transactions.
/// Half-even keeps those rounded figures from drifting upward as a group,
/// the way always rounding .5 up would. The engine itself never rounds.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use hotel_pricing::pricing::round_money;
///
/// assert_eq!(round_money(dec!(114.405), 2), dec!(114.40));
/// assert_eq!(round_money(dec!(114.415), 2), dec!(114.42));
/// assert_eq!(round_money(dec!(2059.2), 2), dec!(2059.20));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// Number of billable nights between two dates, never less than one.
pub fn nights_between(check_in: NaiveDate, check_out: NaiveDate) -> u32 {
    let days = (check_out - check_in).num_days();
    u32::try_from(days).unwrap_or(0).max(1)
}

fn checked_sum(amounts: impl IntoIterator<Item = Option<Decimal>>) -> Option<Decimal> {
    amounts
        .into_iter()
        .try_fold(Decimal::ZERO, |total, amount| total.checked_add(amount?))
}

/// `amount * rate / 100`
fn percent_of(amount: Decimal, rate: Decimal) -> Option<Decimal> {
    amount.checked_mul(rate)?.checked_div(Decimal::ONE_HUNDRED)
}

/// Sum of `rate * no_of_rooms * nights` over the selected rooms.
pub fn rooms_total(rooms: &[RoomSelection], nights: u32) -> Option<Decimal> {
    let nights = Decimal::from(nights);
    checked_sum(
        rooms
            .iter()
            .filter(|room| room.is_selected())
            .map(|room| room.rate.checked_mul(Decimal::from(room.no_of_rooms))?.checked_mul(nights)),
    )
}

/// Sum of `cost * guests * nights` over all extras.
pub fn extras_total(extras: &[ExtraSelection], guests: u32, nights: u32) -> Option<Decimal> {
    let multiplier = Decimal::from(guests).checked_mul(Decimal::from(nights))?;
    checked_sum(extras.iter().map(|extra| extra.cost.checked_mul(multiplier)))
}

/// Discount an eligible offer grants on `gross_total`.
///
/// Does not check `minimum_booking_amount`; callers decide eligibility first.
pub fn offer_discount(offer: &Offer, gross_total: Decimal) -> Option<Decimal> {
    let discount = match offer.offer_type {
        OfferType::FlatDiscount => offer.flat_discount.min(gross_total),
        OfferType::PercentageDiscount => {
            let discount = percent_of(gross_total, offer.percentage_discount)?;
            if offer.max_discount_amount > Decimal::ZERO {
                discount.min(offer.max_discount_amount)
            } else {
                discount
            }
        }
        OfferType::ExtraPerks => Decimal::ZERO,
    };
    Some(discount)
}

/// Why an offer did or did not change the price
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OfferOutcome {
    NotProvided,
    BelowMinimum {
        #[serde(with = "rust_decimal::serde::str")]
        shortfall: Decimal,
    },
    Applied {
        offer_type: OfferType,
        coupon_code: String,
    },
}

/// One tax line, applied to the post-discount subtotal
#[derive(Debug, Clone, PartialEq)]
pub struct TaxAmount {
    pub name: String,
    pub rate: Decimal,
    pub amount: Decimal,
}

/// Full price breakdown of a stay
#[derive(Debug, Clone, PartialEq)]
pub struct PricingResult {
    pub rooms_total: Decimal,
    pub extras_total: Decimal,
    pub gross_total: Decimal,
    pub is_offer_applied: bool,
    pub offer_outcome: OfferOutcome,
    /// Perk text of an applied `Extra_Perks` offer
    pub perk: Option<String>,
    pub discount: Decimal,
    pub total_without_taxes: Decimal,
    pub per_tax_amounts: Vec<TaxAmount>,
    pub total_tax: Decimal,
    pub total_payable: Decimal,
}

/// Price a stay.
///
/// Taxes are applied independently to the discounted subtotal and summed,
/// not compounded. An offer whose `minimum_booking_amount` exceeds the gross
/// total is reported as not applied.
///
/// Input is assumed validated (`nights >= 1`, non-negative amounts).
/// Returns `None` when an intermediate amount overflows.
pub fn compute_booking_total(
    stay: &StayParameters,
    rooms: &[RoomSelection],
    extras: &[ExtraSelection],
    taxes: &[TaxRate],
    offer: Option<&Offer>,
) -> Option<PricingResult> {
    let rooms_total = rooms_total(rooms, stay.nights)?;
    let extras_total = extras_total(extras, stay.guests, stay.nights)?;
    let gross_total = rooms_total.checked_add(extras_total)?;

    let (discount, offer_outcome, perk) = match offer {
        None => (Decimal::ZERO, OfferOutcome::NotProvided, None),
        Some(offer) if !offer.is_eligible(gross_total) => (
            Decimal::ZERO,
            OfferOutcome::BelowMinimum {
                shortfall: offer.minimum_booking_amount - gross_total,
            },
            None,
        ),
        Some(offer) => {
            let perk = match offer.offer_type {
                OfferType::ExtraPerks => Some(offer.description.clone()),
                _ => None,
            };
            (
                offer_discount(offer, gross_total)?,
                OfferOutcome::Applied {
                    offer_type: offer.offer_type,
                    coupon_code: offer.coupon_code.clone(),
                },
                perk,
            )
        }
    };

    let total_without_taxes = (gross_total - discount).max(Decimal::ZERO);

    let per_tax_amounts = taxes
        .iter()
        .map(|tax| {
            Some(TaxAmount {
                name: tax.name.clone(),
                rate: tax.rate,
                amount: percent_of(total_without_taxes, tax.rate)?,
            })
        })
        .collect::<Option<Vec<TaxAmount>>>()?;
    let total_tax = checked_sum(per_tax_amounts.iter().map(|t| Some(t.amount)))?;

    Some(PricingResult {
        rooms_total,
        extras_total,
        gross_total,
        is_offer_applied: matches!(offer_outcome, OfferOutcome::Applied { .. }),
        offer_outcome,
        perk,
        discount,
        total_without_taxes,
        per_tax_amounts,
        total_tax,
        total_payable: total_without_taxes.checked_add(total_tax)?,
    })
}

/// Platform fee withheld from a transaction.
pub fn platform_fee(transaction: &Transaction) -> Option<Decimal> {
    match transaction.payment_method {
        PaymentMethod::OnlinePayment => percent_of(transaction.total_cost, PLATFORM_FEE_PERCENT),
        // Pay-later bookings settle fees through the cancellation-charge flow
        PaymentMethod::AtCheckIn => Some(Decimal::ZERO),
    }
}

/// Owner's net revenue from a completed transaction.
pub fn compute_net_revenue(transaction: &Transaction) -> Option<Decimal> {
    Some(transaction.total_cost - platform_fee(transaction)?)
}
