use drive_cache::Cache;
use tracing::{debug, error, info};

use crate::api::BookingApi;
use crate::booking::{CheckoutContext, CreateBooking};
use crate::catalog::VariantSelector;
use crate::ids::BookingId;
use crate::nav::Route;
use crate::session::SessionStore;
use crate::CommerceError;

/// Submission state of the Book action.
#[derive(Debug, Clone, PartialEq)]
pub enum BookingState {
    Idle,
    /// Mutation in flight; the Book action is disabled.
    Submitting,
    Succeeded(BookingId),
}

impl BookingState {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingState::Idle => "idle",
            BookingState::Submitting => "submitting",
            BookingState::Succeeded(_) => "succeeded",
        }
    }
}

/// Result of pressing Book.
#[derive(Debug, Clone, PartialEq)]
pub enum BookingOutcome {
    /// Booking created and the checkout context stored.
    Booked(CheckoutContext),
    /// Nobody is signed in. Nothing was sent and nothing was stored.
    RedirectToLogin,
}

impl BookingOutcome {
    /// Where the storefront goes next.
    pub fn route(&self) -> Route {
        match self {
            BookingOutcome::Booked(_) => Route::Summary,
            BookingOutcome::RedirectToLogin => Route::Login,
        }
    }
}

/// Turns a detail-page selection into a server-side booking.
///
/// ```text
/// Idle --submit--> Submitting --ok--> Succeeded
///                             \--err-> Idle
/// ```
///
/// A failed attempt is logged and handed back to the caller. The flow
/// returns to Idle so Book can be pressed again.
pub struct BookingFlow<A> {
    api: A,
    cache: Cache,
    state: BookingState,
}

impl<A: BookingApi> BookingFlow<A> {
    pub fn new(api: A, cache: Cache) -> Self {
        Self {
            api,
            cache,
            state: BookingState::Idle,
        }
    }

    pub fn state(&self) -> &BookingState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == BookingState::Submitting
    }

    /// Return to Idle, e.g. after an abandoned submission.
    pub fn reset(&mut self) {
        self.transition(BookingState::Idle);
    }

    fn transition(&mut self, next: BookingState) {
        debug!(from = self.state.as_str(), to = next.as_str(), "booking state");
        self.state = next;
    }

    /// Submit the selection.
    ///
    /// Input checks run before the session lookup, and the session lookup
    /// before any network call. The checkout context is written only after
    /// the server returned a booking id.
    pub async fn submit(
        &mut self,
        selector: &VariantSelector,
    ) -> Result<BookingOutcome, CommerceError> {
        if self.is_submitting() {
            return Err(CommerceError::AlreadySubmitting);
        }

        let selection = selector.to_selection()?;

        let Some(user) = SessionStore::new(self.cache.clone()).current_user()? else {
            info!(vehicle = %selection.vehicle.id, "no signed-in user, redirecting to login");
            return Ok(BookingOutcome::RedirectToLogin);
        };

        self.transition(BookingState::Submitting);
        let request = CreateBooking::new(&selection, &user);

        let booking_id = match self.api.create_booking(&request).await {
            Ok(id) => id,
            Err(err) => {
                error!(error = %err, vehicle = %request.vehicle_id, "error creating booking");
                self.transition(BookingState::Idle);
                return Err(err.into());
            }
        };

        let context = CheckoutContext::new(booking_id.clone(), &user, selection);
        if let Err(err) = context.persist(&self.cache) {
            error!(error = %err, booking = %booking_id, "booking created but checkout context not stored");
            self.transition(BookingState::Idle);
            return Err(err);
        }

        info!(booking = %booking_id, total = context.total(), "booking created");
        self.transition(BookingState::Succeeded(booking_id));
        Ok(BookingOutcome::Booked(context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::booking::CHECKOUT_CONTEXT;
    use crate::fixtures::{asha, sedan};
    use crate::session::SESSION_USER;
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct RecordingApi {
        calls: Mutex<Vec<CreateBooking>>,
        fail: bool,
    }

    #[async_trait]
    impl BookingApi for RecordingApi {
        async fn create_booking(&self, request: &CreateBooking) -> Result<BookingId, ApiError> {
            self.calls.lock().unwrap().push(request.clone());
            if self.fail {
                Err(ApiError::Network("connection refused".into()))
            } else {
                Ok(BookingId::new("B77"))
            }
        }
    }

    fn selector() -> VariantSelector {
        let mut selector = VariantSelector::new(sedan(), Utc::now());
        selector.select_variant(Some("t1".into()));
        selector
    }

    #[tokio::test]
    async fn test_submit_stores_context_and_routes_to_summary() {
        let cache = Cache::in_memory();
        cache.store(&SESSION_USER, &asha()).unwrap();
        let api = Arc::new(RecordingApi::default());
        let mut flow = BookingFlow::new(api.clone(), cache.clone());

        let outcome = flow.submit(&selector()).await.unwrap();
        assert_eq!(outcome.route(), Route::Summary);
        assert_eq!(flow.state(), &BookingState::Succeeded(BookingId::new("B77")));

        let stored = cache.load(&CHECKOUT_CONTEXT).unwrap().unwrap();
        assert_eq!(stored.booking_id.as_str(), "B77");
        assert_eq!(stored.draft.total_price, 500000.0);
        assert_eq!(api.calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_submit_without_session_redirects_without_calling_api() {
        let cache = Cache::in_memory();
        let api = Arc::new(RecordingApi::default());
        let mut flow = BookingFlow::new(api.clone(), cache.clone());

        let outcome = flow.submit(&selector()).await.unwrap();
        assert_eq!(outcome, BookingOutcome::RedirectToLogin);
        assert_eq!(outcome.route(), Route::Login);
        assert!(api.calls.lock().unwrap().is_empty());
        assert!(cache.load(&CHECKOUT_CONTEXT).unwrap().is_none());
        assert_eq!(flow.state(), &BookingState::Idle);
    }

    #[tokio::test]
    async fn test_incomplete_selection_rejected_before_session_check() {
        let cache = Cache::in_memory();
        let api = Arc::new(RecordingApi::default());
        let mut flow = BookingFlow::new(api.clone(), cache);

        let empty = VariantSelector::new(sedan(), Utc::now());
        let err = flow.submit(&empty).await.unwrap_err();
        assert!(matches!(err, CommerceError::IncompleteSelection(_)));
        assert!(api.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failed_mutation_leaves_storage_untouched_and_allows_retry() {
        let cache = Cache::in_memory();
        cache.store(&SESSION_USER, &asha()).unwrap();
        let api = Arc::new(RecordingApi {
            fail: true,
            ..Default::default()
        });
        let mut flow = BookingFlow::new(api.clone(), cache.clone());

        let err = flow.submit(&selector()).await.unwrap_err();
        assert!(matches!(err, CommerceError::Api(ApiError::Network(_))));
        assert_eq!(flow.state(), &BookingState::Idle);
        assert!(!flow.is_submitting());
        assert!(cache.load(&CHECKOUT_CONTEXT).unwrap().is_none());

        assert!(flow.submit(&selector()).await.is_err());
        assert_eq!(api.calls.lock().unwrap().len(), 2);
        assert_eq!(flow.state(), &BookingState::Idle);
    }
}
