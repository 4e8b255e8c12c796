//! Display descriptors for booking and payment states.
//!
//! Each enum maps to its descriptor through an exhaustive `match`, so adding a
//! variant without a descriptor fails to compile.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::pricing::models::PaymentMethod;

/// Visual weight a dashboard gives a badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Info,
    Success,
    Neutral,
    Danger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusDescriptor {
    pub label: &'static str,
    pub tone: Tone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Upcoming,
    Ongoing,
    Completed,
    Cancelled,
}

impl BookingStatus {
    /// Status of a non-cancelled stay as seen on `today`.
    ///
    /// The guest is in-house from check-in up to, but not including, check-out.
    pub fn for_dates(check_in: NaiveDate, check_out: NaiveDate, today: NaiveDate) -> Self {
        if today < check_in {
            BookingStatus::Upcoming
        } else if today < check_out {
            BookingStatus::Ongoing
        } else {
            BookingStatus::Completed
        }
    }

    pub fn descriptor(self) -> StatusDescriptor {
        match self {
            BookingStatus::Upcoming => StatusDescriptor {
                label: "Upcoming",
                tone: Tone::Info,
            },
            BookingStatus::Ongoing => StatusDescriptor {
                label: "Ongoing",
                tone: Tone::Success,
            },
            BookingStatus::Completed => StatusDescriptor {
                label: "Completed",
                tone: Tone::Neutral,
            },
            BookingStatus::Cancelled => StatusDescriptor {
                label: "Cancelled",
                tone: Tone::Danger,
            },
        }
    }
}

impl PaymentMethod {
    pub fn descriptor(self) -> StatusDescriptor {
        match self {
            PaymentMethod::OnlinePayment => StatusDescriptor {
                label: "Paid online",
                tone: Tone::Success,
            },
            PaymentMethod::AtCheckIn => StatusDescriptor {
                label: "Pay at check-in",
                tone: Tone::Info,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    #[test]
    fn test_status_for_dates() {
        assert_eq!(BookingStatus::for_dates(date(10), date(12), date(9)), BookingStatus::Upcoming);
        assert_eq!(BookingStatus::for_dates(date(10), date(12), date(10)), BookingStatus::Ongoing);
        assert_eq!(BookingStatus::for_dates(date(10), date(12), date(11)), BookingStatus::Ongoing);
        assert_eq!(BookingStatus::for_dates(date(10), date(12), date(12)), BookingStatus::Completed);
    }

    #[test]
    fn test_descriptors() {
        assert_eq!(BookingStatus::Cancelled.descriptor().tone, Tone::Danger);
        assert_eq!(BookingStatus::Upcoming.descriptor().label, "Upcoming");
        assert_eq!(PaymentMethod::AtCheckIn.descriptor().label, "Pay at check-in");
    }

    #[test]
    fn test_status_wire_names() {
        let status: BookingStatus = serde_json::from_str("\"ongoing\"").unwrap();
        assert_eq!(status, BookingStatus::Ongoing);
        assert_eq!(serde_json::to_string(&Tone::Danger).unwrap(), "\"danger\"");
    }
}
