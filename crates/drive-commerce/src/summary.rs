//! Booking summary: read-only view of the stored checkout context.

use drive_cache::Cache;

use crate::booking::CheckoutContext;
use crate::money::format_inr;
use crate::nav::Route;
use crate::CommerceError;

/// What the summary page shows.
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryView {
    /// No checkout context is stored.
    Loading,
    Ready(BookingSummary),
}

#[derive(Debug, Clone, PartialEq)]
pub struct BookingSummary {
    context: CheckoutContext,
}

impl BookingSummary {
    /// Read the checkout context once.
    pub fn load(cache: &Cache) -> Result<SummaryView, CommerceError> {
        Ok(match CheckoutContext::load(cache)? {
            Some(context) => SummaryView::Ready(Self { context }),
            None => SummaryView::Loading,
        })
    }

    pub fn context(&self) -> &CheckoutContext {
        &self.context
    }

    /// Label/value lines of the summary card.
    pub fn lines(&self) -> Vec<(&'static str, String)> {
        let draft = &self.context.draft;
        vec![
            ("Booking", self.context.booking_id.to_string()),
            ("Vehicle", draft.vehicle_name.clone()),
            ("Model", draft.vehicle_type_name.clone()),
            ("Date", draft.booking_date.format("%Y-%m-%d").to_string()),
            ("Booked by", draft.user_name.clone()),
            ("Total", format_inr(draft.total_price)),
        ]
    }

    /// Route to the payment page carrying the draft total.
    pub fn proceed_to_payment(&self) -> Route {
        Route::Payment {
            amount: self.context.total(),
        }
    }
}
