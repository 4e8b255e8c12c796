//! HTTP handlers for booking drafts.

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::pricing::responses::QuoteResponse;
use crate::AppState;

use super::draft::{reduce_all, BookingAction, BookingDraft};
use super::status::{BookingStatus, StatusDescriptor};

/// Largest action batch accepted in one call
const MAX_ACTIONS: usize = 64;

/// Booking draft routes, nested under `/api/booking-draft`
pub fn router() -> Router<AppState> {
    Router::new().route("/apply", post(apply))
}

#[derive(Debug, Deserialize)]
pub struct ApplyActionsRequest {
    #[serde(default)]
    pub draft: BookingDraft,
    pub actions: Vec<BookingAction>,
}

#[derive(Debug, Serialize)]
pub struct ApplyActionsResponse {
    pub draft: BookingDraft,
    /// Present once the draft has dates and at least one selected room
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote: Option<QuoteResponse>,
    /// Present once the draft has valid dates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StayStatusResponse>,
}

/// Where the stay stands today, with its dashboard badge
#[derive(Debug, Serialize)]
pub struct StayStatusResponse {
    pub status: BookingStatus,
    pub badge: StatusDescriptor,
}

impl From<BookingStatus> for StayStatusResponse {
    fn from(status: BookingStatus) -> Self {
        Self {
            status,
            badge: status.descriptor(),
        }
    }
}

/// Apply form actions to a draft and re-price it
pub async fn apply(
    State(state): State<AppState>,
    Json(request): Json<ApplyActionsRequest>,
) -> Result<Json<ApplyActionsResponse>> {
    if request.actions.len() > MAX_ACTIONS {
        return Err(AppError::BadRequest(format!(
            "at most {} actions per request, got {}",
            MAX_ACTIONS,
            request.actions.len()
        )));
    }

    tracing::debug!(actions = request.actions.len(), "Applying booking draft actions");
    let draft = reduce_all(request.draft, request.actions);

    let quote = if draft.has_selected_rooms() {
        match draft.quote() {
            Some(priced) => {
                let (stay, result) = priced?;
                Some(QuoteResponse::new(&stay, result, &state.config.currency))
            }
            None => None,
        }
    } else {
        None
    };

    let status = draft
        .status_on(chrono::Utc::now().date_naive())
        .map(StayStatusResponse::from);

    Ok(Json(ApplyActionsResponse {
        draft,
        quote,
        status,
    }))
}
