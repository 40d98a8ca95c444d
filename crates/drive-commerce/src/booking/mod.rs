//! Booking submission and the checkout context it leaves behind.

mod draft;
mod flow;

pub use draft::{iso_timestamp, BookingDraft, CheckoutContext, CreateBooking, CHECKOUT_CONTEXT};
pub use flow::{BookingFlow, BookingOutcome, BookingState};
