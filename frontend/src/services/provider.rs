//! Data loading for the reservation calendar.
//!
//! The calendar only needs two lists. Both come from a `ReservationProvider`;
//! `CalendarLoader` pairs a provider with a `FetchTracker` so that a result is
//! dropped when a newer request for the same list has been issued or the view
//! has gone away.

use async_trait::async_trait;
use shared::{Accommodation, FetchResource, FetchTicket, FetchTracker, Reservation};
use std::cell::RefCell;
use std::future::Future;
use yew::Callback;

use super::api::ApiClient;

/// Remote source of reservations and accommodations
#[async_trait(?Send)]
pub trait ReservationProvider {
    async fn get_reservations(&self) -> Result<Vec<Reservation>, String>;
    async fn get_accommodations(&self) -> Result<Vec<Accommodation>, String>;
}

#[async_trait(?Send)]
impl ReservationProvider for ApiClient {
    async fn get_reservations(&self) -> Result<Vec<Reservation>, String> {
        ApiClient::get_reservations(self).await
    }

    async fn get_accommodations(&self) -> Result<Vec<Accommodation>, String> {
        ApiClient::get_accommodations(self).await
    }
}

/// What became of a fetch once it settled
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<T> {
    /// Newest result for its list, apply it
    Fresh(T),
    /// Superseded or arrived after teardown
    Stale,
    /// The provider failed; the current list stays as it is
    Failed(String),
}

/// State setters a settled fetch writes into
#[derive(Clone)]
pub struct LoadSink<T: 'static> {
    pub apply: Callback<T>,
    pub failed: Callback<String>,
    pub loading: Callback<bool>,
}

pub struct CalendarLoader<P> {
    provider: P,
    tracker: RefCell<FetchTracker>,
}

impl<P: ReservationProvider> CalendarLoader<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            tracker: RefCell::new(FetchTracker::new()),
        }
    }

    /// Register a request before it is spawned so the loading flag is
    /// accurate from the first render
    pub fn issue(&self, resource: FetchResource) -> FetchTicket {
        self.tracker.borrow_mut().issue(resource)
    }

    /// Issue a ticket and raise the loading flag before the request is spawned
    pub fn start<T>(&self, resource: FetchResource, sink: &LoadSink<T>) -> FetchTicket {
        let ticket = self.issue(resource);
        sink.loading.emit(true);
        ticket
    }

    /// Run the reservations request behind `ticket` and write the outcome into `sink`
    pub async fn finish_reservations(&self, ticket: FetchTicket, sink: &LoadSink<Vec<Reservation>>) {
        let outcome = self.fetch_reservations(ticket).await;
        self.deliver(outcome, sink);
    }

    pub async fn finish_accommodations(&self, ticket: FetchTicket, sink: &LoadSink<Vec<Accommodation>>) {
        let outcome = self.fetch_accommodations(ticket).await;
        self.deliver(outcome, sink);
    }

    pub async fn fetch_reservations(&self, ticket: FetchTicket) -> FetchOutcome<Vec<Reservation>> {
        self.settle(ticket, self.provider.get_reservations()).await
    }

    pub async fn fetch_accommodations(&self, ticket: FetchTicket) -> FetchOutcome<Vec<Accommodation>> {
        self.settle(ticket, self.provider.get_accommodations()).await
    }

    pub fn is_loading(&self) -> bool {
        self.tracker.borrow().is_loading()
    }

    pub fn dispose(&self) {
        self.tracker.borrow_mut().dispose();
    }

    pub fn is_disposed(&self) -> bool {
        self.tracker.borrow().is_disposed()
    }

    /// Every settled ticket refreshes the loading flag, stale ones included,
    /// until the view is gone
    fn deliver<T>(&self, outcome: FetchOutcome<T>, sink: &LoadSink<T>) {
        if self.is_disposed() {
            return;
        }
        match outcome {
            FetchOutcome::Fresh(value) => sink.apply.emit(value),
            FetchOutcome::Failed(e) => sink.failed.emit(e),
            FetchOutcome::Stale => {}
        }
        sink.loading.emit(self.is_loading());
    }

    async fn settle<T, F>(&self, ticket: FetchTicket, request: F) -> FetchOutcome<T>
    where
        F: Future<Output = Result<T, String>>,
    {
        let result = request.await;
        if !self.tracker.borrow_mut().settle(ticket) {
            return FetchOutcome::Stale;
        }
        match result {
            Ok(value) => FetchOutcome::Fresh(value),
            Err(e) => FetchOutcome::Failed(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::ReservationStatus;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    /// Serves whatever list it currently holds and counts the calls
    #[derive(Clone, Default)]
    struct MockProvider {
        reservations: Rc<RefCell<Vec<Reservation>>>,
        reservation_calls: Rc<Cell<usize>>,
        accommodation_calls: Rc<Cell<usize>>,
        fail_accommodations: bool,
    }

    #[async_trait(?Send)]
    impl ReservationProvider for MockProvider {
        async fn get_reservations(&self) -> Result<Vec<Reservation>, String> {
            self.reservation_calls.set(self.reservation_calls.get() + 1);
            Ok(self.reservations.borrow().clone())
        }

        async fn get_accommodations(&self) -> Result<Vec<Accommodation>, String> {
            self.accommodation_calls.set(self.accommodation_calls.get() + 1);
            if self.fail_accommodations {
                Err("offline".to_string())
            } else {
                Ok(vec![Accommodation {
                    id: "A1".to_string(),
                    name: "Cabin".to_string(),
                }])
            }
        }
    }

    fn reservation(id: i64, guest: &str) -> Reservation {
        Reservation {
            id,
            guest_name: guest.to_string(),
            accommodation_id: "A1".to_string(),
            accommodation_name: "Cabin".to_string(),
            check_in: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            check_out: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            status: ReservationStatus::Confirmed,
        }
    }

    #[wasm_bindgen_test]
    async fn test_initial_load_settles_both_lists() {
        let provider = MockProvider::default();
        provider.reservations.borrow_mut().push(reservation(1, "Ana Ruiz"));
        let loader = CalendarLoader::new(provider.clone());

        let reservations_ticket = loader.issue(FetchResource::Reservations);
        let accommodations_ticket = loader.issue(FetchResource::Accommodations);
        assert!(loader.is_loading());

        let accommodations = loader.fetch_accommodations(accommodations_ticket).await;
        assert!(matches!(accommodations, FetchOutcome::Fresh(ref list) if list.len() == 1));
        assert!(loader.is_loading());

        let reservations = loader.fetch_reservations(reservations_ticket).await;
        assert_eq!(reservations, FetchOutcome::Fresh(vec![reservation(1, "Ana Ruiz")]));
        assert!(!loader.is_loading());
    }

    #[wasm_bindgen_test]
    async fn test_failure_still_settles() {
        let provider = MockProvider {
            fail_accommodations: true,
            ..Default::default()
        };
        let loader = CalendarLoader::new(provider);

        let ticket = loader.issue(FetchResource::Accommodations);
        let outcome = loader.fetch_accommodations(ticket).await;
        assert_eq!(outcome, FetchOutcome::Failed("offline".to_string()));
        assert!(!loader.is_loading());
    }

    #[wasm_bindgen_test]
    async fn test_reload_fetches_the_full_list_again() {
        let provider = MockProvider::default();
        provider.reservations.borrow_mut().push(reservation(1, "Ana Ruiz"));
        let loader = CalendarLoader::new(provider.clone());

        let ticket = loader.issue(FetchResource::Reservations);
        loader.fetch_reservations(ticket).await;

        // A reservation created elsewhere shows up only through the provider
        provider.reservations.borrow_mut().push(reservation(2, "John Doe"));
        let ticket = loader.issue(FetchResource::Reservations);
        let outcome = loader.fetch_reservations(ticket).await;

        assert_eq!(provider.reservation_calls.get(), 2);
        assert_eq!(
            outcome,
            FetchOutcome::Fresh(vec![reservation(1, "Ana Ruiz"), reservation(2, "John Doe")])
        );
    }

    #[wasm_bindgen_test]
    async fn test_superseded_fetch_is_stale() {
        let loader = CalendarLoader::new(MockProvider::default());

        let first = loader.issue(FetchResource::Reservations);
        let second = loader.issue(FetchResource::Reservations);

        assert!(matches!(loader.fetch_reservations(second).await, FetchOutcome::Fresh(_)));
        assert_eq!(loader.fetch_reservations(first).await, FetchOutcome::Stale);
    }

    /// Records everything a loader writes back, the way the hook's state would see it
    struct Recorder<T: 'static> {
        applied: Rc<RefCell<Vec<T>>>,
        failures: Rc<RefCell<Vec<String>>>,
        loading: Rc<Cell<bool>>,
    }

    impl<T: 'static> Recorder<T> {
        fn new() -> Self {
            Self {
                applied: Rc::new(RefCell::new(Vec::new())),
                failures: Rc::new(RefCell::new(Vec::new())),
                loading: Rc::new(Cell::new(false)),
            }
        }

        fn sink(&self) -> LoadSink<T> {
            let applied = self.applied.clone();
            let failures = self.failures.clone();
            let loading = self.loading.clone();
            LoadSink {
                apply: Callback::from(move |value: T| applied.borrow_mut().push(value)),
                failed: Callback::from(move |e: String| failures.borrow_mut().push(e)),
                loading: Callback::from(move |flag: bool| loading.set(flag)),
            }
        }
    }

    #[wasm_bindgen_test]
    async fn test_reload_after_creation_applies_full_list_and_clears_loading() {
        let provider = MockProvider::default();
        provider.reservations.borrow_mut().push(reservation(1, "Ana Ruiz"));
        let loader = CalendarLoader::new(provider.clone());
        let reservations = Recorder::new();
        let accommodations = Recorder::new();

        let initial = loader.start(FetchResource::Reservations, &reservations.sink());
        let accommodations_ticket = loader.start(FetchResource::Accommodations, &accommodations.sink());
        loader.finish_reservations(initial, &reservations.sink()).await;
        loader.finish_accommodations(accommodations_ticket, &accommodations.sink()).await;
        assert!(!reservations.loading.get());

        // Saved by the creation form, then the calendar asks for the list again
        provider.reservations.borrow_mut().push(reservation(2, "John Doe"));
        let reload = loader.start(FetchResource::Reservations, &reservations.sink());
        assert!(reservations.loading.get());
        loader.finish_reservations(reload, &reservations.sink()).await;

        assert_eq!(provider.reservation_calls.get(), 2);
        assert_eq!(
            reservations.applied.borrow().last(),
            Some(&vec![reservation(1, "Ana Ruiz"), reservation(2, "John Doe")])
        );
        assert!(!reservations.loading.get());
    }

    #[wasm_bindgen_test]
    async fn test_stale_initial_fetch_still_clears_loading() {
        let provider = MockProvider::default();
        provider.reservations.borrow_mut().push(reservation(1, "Ana Ruiz"));
        let loader = CalendarLoader::new(provider);
        let reservations = Recorder::new();
        let accommodations = Recorder::new();

        let initial = loader.start(FetchResource::Reservations, &reservations.sink());
        let accommodations_ticket = loader.start(FetchResource::Accommodations, &accommodations.sink());
        let reload = loader.start(FetchResource::Reservations, &reservations.sink());

        loader.finish_accommodations(accommodations_ticket, &accommodations.sink()).await;
        loader.finish_reservations(reload, &reservations.sink()).await;
        assert!(reservations.loading.get());

        loader.finish_reservations(initial, &reservations.sink()).await;

        assert!(!loader.is_loading());
        assert!(!reservations.loading.get());
        assert_eq!(reservations.applied.borrow().len(), 1);
    }

    #[wasm_bindgen_test]
    async fn test_failed_fetch_reports_and_keeps_list() {
        let provider = MockProvider {
            fail_accommodations: true,
            ..Default::default()
        };
        let loader = CalendarLoader::new(provider);
        let accommodations = Recorder::new();

        let ticket = loader.start(FetchResource::Accommodations, &accommodations.sink());
        loader.finish_accommodations(ticket, &accommodations.sink()).await;

        assert!(accommodations.applied.borrow().is_empty());
        assert_eq!(*accommodations.failures.borrow(), vec!["offline".to_string()]);
        assert!(!accommodations.loading.get());
    }

    #[wasm_bindgen_test]
    async fn test_disposed_loader_writes_nothing_back() {
        let loader = CalendarLoader::new(MockProvider::default());
        let reservations = Recorder::new();

        let ticket = loader.start(FetchResource::Reservations, &reservations.sink());
        loader.dispose();
        loader.finish_reservations(ticket, &reservations.sink()).await;

        assert!(reservations.applied.borrow().is_empty());
        assert!(reservations.loading.get());
    }

    #[wasm_bindgen_test]
    async fn test_disposed_loader_drops_results() {
        let loader = CalendarLoader::new(MockProvider::default());
        let ticket = loader.issue(FetchResource::Accommodations);
        loader.dispose();

        assert_eq!(loader.fetch_accommodations(ticket).await, FetchOutcome::Stale);
        assert!(loader.is_disposed());
    }
}
