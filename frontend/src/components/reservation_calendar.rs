use yew::prelude::*;
use web_sys::MouseEvent;
use shared::{project_events, status_style, CalendarEvent, Reservation, ReservationFilter};
use crate::components::filter_panel::FilterPanel;
use crate::components::modal::{Modal, ModalSize};
use crate::components::month_grid::MonthGrid;
use crate::components::reservation_details::ReservationDetails;
use crate::components::reservation_form::ReservationForm;
use crate::components::status_legend::StatusLegend;
use crate::hooks::use_calendar::use_calendar;
use crate::hooks::use_reservations::use_reservations;
use crate::services::api::ApiClient;
use crate::services::date_utils::today;

#[derive(Properties, PartialEq)]
pub struct ReservationCalendarProps {
    #[prop_or_default]
    pub api_client: ApiClient,
}

/// Chip body: guest name over accommodation, coloured by status
fn event_content(event: CalendarEvent) -> Html {
    let style = status_style(&event.status.to_uppercase());
    let (guest, accommodation) = event.title_parts();

    html! {
        <div class={classes!("event-chip", style.classes())}>
            <div class="event-guest">{guest}</div>
            <div class="event-accommodation">{accommodation}</div>
        </div>
    }
}

#[function_component(ReservationCalendar)]
pub fn reservation_calendar(props: &ReservationCalendarProps) -> Html {
    let reservations_hook = use_reservations(&props.api_client);
    let calendar_hook = use_calendar(today());

    let filter = use_state(ReservationFilter::default);
    let show_filters = use_state(|| true);
    let show_create_modal = use_state(|| false);
    let selected_reservation = use_state(|| Option::<Reservation>::None);

    let events = use_memo(
        (reservations_hook.state.reservations.clone(), (*filter).clone()),
        |(reservations, filter)| project_events(reservations, filter),
    );

    let render_event = use_callback((), |event: CalendarEvent, _| event_content(event));

    let on_filter_change = {
        let filter = filter.clone();
        Callback::from(move |next: ReservationFilter| filter.set(next))
    };

    let on_toggle_filters = {
        let show_filters = show_filters.clone();
        Callback::from(move |_: MouseEvent| show_filters.set(!*show_filters))
    };

    let on_open_create = {
        let show_create_modal = show_create_modal.clone();
        Callback::from(move |_: MouseEvent| show_create_modal.set(true))
    };

    let on_close_create = {
        let show_create_modal = show_create_modal.clone();
        Callback::from(move |_: ()| show_create_modal.set(false))
    };

    let on_created = {
        let show_create_modal = show_create_modal.clone();
        let reload_reservations = reservations_hook.actions.reload_reservations.clone();
        Callback::from(move |_: Reservation| {
            show_create_modal.set(false);
            reload_reservations.emit(());
        })
    };

    let on_event_click = {
        let selected_reservation = selected_reservation.clone();
        let reservations = reservations_hook.state.reservations.clone();
        Callback::from(move |id: String| {
            let found = reservations
                .iter()
                .find(|reservation| reservation.id.to_string() == id)
                .cloned();
            selected_reservation.set(found);
        })
    };

    let on_close_details = {
        let selected_reservation = selected_reservation.clone();
        Callback::from(move |_: ()| selected_reservation.set(None))
    };

    html! {
        <div class="reservation-calendar">
            <div class="calendar-toolbar">
                <div class="calendar-nav">
                    <button class="nav-button" onclick={calendar_hook.actions.prev_month.clone()} aria-label="Mes anterior">
                        {"‹"}
                    </button>
                    <h2 class="calendar-title">{calendar_hook.state.title()}</h2>
                    <button class="nav-button" onclick={calendar_hook.actions.next_month.clone()} aria-label="Mes siguiente">
                        {"›"}
                    </button>
                </div>
                <div class="calendar-actions">
                    <button class="btn btn-secondary" onclick={on_toggle_filters}>
                        {if *show_filters { "Ocultar filtros" } else { "Mostrar filtros" }}
                    </button>
                    <button class="btn btn-primary" onclick={on_open_create}>
                        {"Nueva Reservación"}
                    </button>
                </div>
            </div>

            {if *show_filters {
                html! {
                    <FilterPanel
                        accommodations={reservations_hook.state.accommodations.clone()}
                        filter={(*filter).clone()}
                        on_change={on_filter_change}
                    />
                }
            } else {
                html! {}
            }}

            {if reservations_hook.state.loading {
                html! { <div class="loading">{"Cargando reservaciones..."}</div> }
            } else {
                html! {}
            }}

            <MonthGrid
                view={calendar_hook.state.view}
                events={events}
                render_event={render_event}
                on_dates_set={calendar_hook.actions.on_dates_set.clone()}
                on_event_click={on_event_click}
            />

            <StatusLegend />

            <Modal
                is_open={*show_create_modal}
                title="Nueva Reservación"
                size={ModalSize::Lg}
                on_close={on_close_create.clone()}
            >
                <ReservationForm
                    accommodations={reservations_hook.state.accommodations.clone()}
                    on_close={on_close_create}
                    on_created={on_created}
                    api_client={props.api_client.clone()}
                />
            </Modal>

            <Modal
                is_open={selected_reservation.is_some()}
                title="Detalle de la reservación"
                size={ModalSize::Md}
                on_close={on_close_details}
            >
                {if let Some(reservation) = (*selected_reservation).clone() {
                    html! { <ReservationDetails {reservation} /> }
                } else {
                    html! {}
                }}
            </Modal>
        </div>
    }
}
