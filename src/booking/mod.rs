//! Booking-in-progress state and status presentation.

pub mod draft;
pub mod routes;
pub mod status;

pub use draft::{reduce, reduce_all, BookingAction, BookingDraft};
pub use routes::router;
pub use status::{BookingStatus, StatusDescriptor, Tone};
