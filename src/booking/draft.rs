//! In-progress booking state.
//!
//! A `BookingDraft` is a plain serializable value. The booking form sends the
//! current draft plus the actions it wants applied and gets the new draft back;
//! `reduce` never touches anything outside its arguments.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::pricing::calculators::{compute_booking_total, PricingResult};
use crate::pricing::models::{ExtraSelection, Offer, RoomSelection, StayParameters, TaxRate};
use crate::pricing::services::{resolve_stay, validate_selection, PricingError};

use super::status::BookingStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingDraft {
    #[serde(default)]
    pub check_in: Option<NaiveDate>,
    #[serde(default)]
    pub check_out: Option<NaiveDate>,
    #[serde(default = "default_guests")]
    pub guests: u32,
    #[serde(default)]
    pub rooms: Vec<RoomSelection>,
    #[serde(default)]
    pub extras: Vec<ExtraSelection>,
    #[serde(default)]
    pub taxes: Vec<TaxRate>,
    #[serde(default)]
    pub offer: Option<Offer>,
}

fn default_guests() -> u32 {
    1
}

impl Default for BookingDraft {
    fn default() -> Self {
        Self {
            check_in: None,
            check_out: None,
            guests: default_guests(),
            rooms: Vec::new(),
            extras: Vec::new(),
            taxes: Vec::new(),
            offer: None,
        }
    }
}

/// Edits the booking form can make to a draft
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum BookingAction {
    SetDates {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },
    SetGuests(u32),
    /// Upserts by `room_id`; a zero count keeps the row as not selected.
    SelectRoom(RoomSelection),
    /// Replaces an extra of the same name.
    AddExtra(ExtraSelection),
    RemoveExtra {
        name: String,
    },
    SetTaxes(Vec<TaxRate>),
    ApplyOffer(Offer),
    RemoveOffer,
    Reset,
}

/// Apply one action to a draft, returning the new draft.
pub fn reduce(mut draft: BookingDraft, action: BookingAction) -> BookingDraft {
    match action {
        BookingAction::SetDates {
            check_in,
            check_out,
        } => {
            draft.check_in = Some(check_in);
            draft.check_out = Some(check_out);
        }
        BookingAction::SetGuests(guests) => draft.guests = guests.max(1),
        BookingAction::SelectRoom(room) => {
            match draft.rooms.iter_mut().find(|r| r.room_id == room.room_id) {
                Some(existing) => *existing = room,
                None => draft.rooms.push(room),
            }
        }
        BookingAction::AddExtra(extra) => {
            match draft.extras.iter_mut().find(|e| e.name == extra.name) {
                Some(existing) => *existing = extra,
                None => draft.extras.push(extra),
            }
        }
        BookingAction::RemoveExtra { name } => draft.extras.retain(|e| e.name != name),
        BookingAction::SetTaxes(taxes) => draft.taxes = taxes,
        BookingAction::ApplyOffer(offer) => draft.offer = Some(offer),
        BookingAction::RemoveOffer => draft.offer = None,
        BookingAction::Reset => return BookingDraft::default(),
    }
    draft
}

/// Fold a batch of actions over a draft, in order.
pub fn reduce_all(draft: BookingDraft, actions: impl IntoIterator<Item = BookingAction>) -> BookingDraft {
    actions.into_iter().fold(draft, reduce)
}

impl BookingDraft {
    /// Stay parameters, once both dates are chosen.
    pub fn stay(&self) -> Option<Result<StayParameters, PricingError>> {
        match (self.check_in, self.check_out) {
            (Some(check_in), Some(check_out)) => Some(resolve_stay(check_in, check_out, self.guests)),
            _ => None,
        }
    }

    pub fn has_selected_rooms(&self) -> bool {
        self.rooms.iter().any(RoomSelection::is_selected)
    }

    /// Price the draft.
    ///
    /// `None` while dates are missing; the offer is reported as not applied
    /// when the stay falls under its minimum even though the guest applied it.
    pub fn quote(&self) -> Option<Result<(StayParameters, PricingResult), PricingError>> {
        let stay = match self.stay()? {
            Ok(stay) => stay,
            Err(e) => return Some(Err(e)),
        };
        if let Err(e) = validate_selection(&self.rooms, &self.extras, &self.taxes, self.offer.as_ref()) {
            return Some(Err(e));
        }

        let result = compute_booking_total(
            &stay,
            &self.rooms,
            &self.extras,
            &self.taxes,
            self.offer.as_ref(),
        )
        .ok_or_else(|| PricingError::AmountOverflow {
            context: "booking total".to_string(),
        });
        Some(result.map(|result| (stay, result)))
    }

    /// Where the stay stands relative to `today`, once it has valid dates.
    pub fn status_on(&self, today: NaiveDate) -> Option<BookingStatus> {
        match (self.check_in, self.check_out) {
            (Some(check_in), Some(check_out)) if check_in < check_out => {
                Some(BookingStatus::for_dates(check_in, check_out, today))
            }
            _ => None,
        }
    }
}
