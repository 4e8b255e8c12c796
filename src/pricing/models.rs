//! Value records consumed by the pricing engine.
//!
//! Everything here is plain data: the upstream storage layer fetches rooms,
//! extras, tax rates and offers, and the engine prices them without looking
//! anything up itself.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Dates and party size of a stay.
///
/// `nights` is resolved by the caller (see `calculators::nights_between`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StayParameters {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub nights: u32,
    pub guests: u32,
}

/// A room type on the listing and how many of it the guest picked.
///
/// Rows with `no_of_rooms == 0` are rooms shown but not yet selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomSelection {
    pub room_id: String,
    pub name: String,
    pub rate: Decimal,
    pub no_of_rooms: u32,
}

impl RoomSelection {
    pub fn is_selected(&self) -> bool {
        self.no_of_rooms > 0
    }
}

/// Paid add-on, charged per guest per night.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraSelection {
    pub name: String,
    pub cost: Decimal,
}

/// Named tax expressed as a percentage (0-100).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxRate {
    pub name: String,
    pub rate: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OfferType {
    #[serde(rename = "Percentage_Discount")]
    PercentageDiscount,
    #[serde(rename = "Flat_Discount")]
    FlatDiscount,
    #[serde(rename = "Extra_Perks")]
    ExtraPerks,
}

/// Coupon-style offer, scoped to a listing or app-wide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub offer_type: OfferType,
    pub coupon_code: String,
    #[serde(default)]
    pub flat_discount: Decimal,
    #[serde(default)]
    pub percentage_discount: Decimal,
    /// Cap on percentage discounts. Zero means uncapped.
    #[serde(default)]
    pub max_discount_amount: Decimal,
    /// Gross total below which the offer does not apply.
    #[serde(default)]
    pub minimum_booking_amount: Decimal,
    #[serde(default)]
    pub description: String,
}

impl Offer {
    /// Whether a booking with this gross total qualifies for the offer
    pub fn is_eligible(&self, gross_total: Decimal) -> bool {
        gross_total >= self.minimum_booking_amount
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    OnlinePayment,
    AtCheckIn,
}

/// Completed booking payment, as needed for revenue derivation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub total_cost: Decimal,
    pub payment_method: PaymentMethod,
}
