use yew::prelude::*;
use shared::{Accommodation, FetchResource, Reservation};
use wasm_bindgen_futures::spawn_local;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::services::provider::{CalendarLoader, LoadSink};

const COMPONENT: &str = "ReservationCalendar";

#[derive(Clone, PartialEq)]
pub struct ReservationsState {
    pub reservations: Vec<Reservation>,
    pub accommodations: Vec<Accommodation>,
    pub loading: bool,
}

pub struct UseReservationsResult {
    pub state: ReservationsState,
    pub actions: UseReservationsActions,
}

#[derive(Clone)]
pub struct UseReservationsActions {
    /// Fetch the full reservation list again, replacing the current one
    pub reload_reservations: Callback<()>,
    pub reload_accommodations: Callback<()>,
}

fn sink_for<T: 'static>(
    list: UseStateHandle<T>,
    loading: UseStateHandle<bool>,
    logger: Logger,
    what: &'static str,
) -> LoadSink<T> {
    LoadSink {
        apply: Callback::from(move |value: T| list.set(value)),
        failed: Callback::from(move |error: String| {
            let message = format!("Failed to load {}: {}", what, error);
            gloo::console::error!(message.clone());
            logger.error_with_component(COMPONENT, &message);
        }),
        loading: Callback::from(move |flag: bool| loading.set(flag)),
    }
}

/// Loads reservations and accommodations on mount.
///
/// Both requests start together; `loading` stays true until both settled.
/// Results of requests that were superseded, or that land after unmount,
/// are dropped.
#[hook]
pub fn use_reservations(api_client: &ApiClient) -> UseReservationsResult {
    let reservations = use_state(Vec::<Reservation>::new);
    let accommodations = use_state(Vec::<Accommodation>::new);
    let loading = use_state(|| true);

    let loader = {
        let api_client = api_client.clone();
        use_memo((), move |_| CalendarLoader::new(api_client))
    };

    let reservations_sink = {
        let logger = Logger::new(api_client.clone());
        let reservations = reservations.clone();
        let loading = loading.clone();
        use_memo((), move |_| sink_for(reservations, loading, logger, "reservations"))
    };

    let accommodations_sink = {
        let logger = Logger::new(api_client.clone());
        let accommodations = accommodations.clone();
        let loading = loading.clone();
        use_memo((), move |_| sink_for(accommodations, loading, logger, "accommodations"))
    };

    let reload_reservations = {
        let loader = loader.clone();
        let sink = reservations_sink.clone();

        use_callback((), move |_, _| {
            let ticket = loader.start(FetchResource::Reservations, &*sink);
            let loader = loader.clone();
            let sink = sink.clone();
            spawn_local(async move {
                loader.finish_reservations(ticket, &*sink).await;
            });
        })
    };

    let reload_accommodations = {
        let loader = loader.clone();
        let sink = accommodations_sink.clone();

        use_callback((), move |_, _| {
            let ticket = loader.start(FetchResource::Accommodations, &*sink);
            let loader = loader.clone();
            let sink = sink.clone();
            spawn_local(async move {
                loader.finish_accommodations(ticket, &*sink).await;
            });
        })
    };

    // Load both lists once on mount, stop applying results on unmount
    use_effect_with((), {
        let loader = loader.clone();
        let reload_reservations = reload_reservations.clone();
        let reload_accommodations = reload_accommodations.clone();

        move |_| {
            reload_reservations.emit(());
            reload_accommodations.emit(());

            move || loader.dispose()
        }
    });

    let state = ReservationsState {
        reservations: (*reservations).clone(),
        accommodations: (*accommodations).clone(),
        loading: *loading,
    };

    let actions = UseReservationsActions {
        reload_reservations,
        reload_accommodations,
    };

    UseReservationsResult { state, actions }
}
