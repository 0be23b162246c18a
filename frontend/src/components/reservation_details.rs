use yew::prelude::*;
use shared::{status_style, Reservation};
use crate::services::date_utils::format_date_for_display;

#[derive(Properties, PartialEq)]
pub struct ReservationDetailsProps {
    pub reservation: Reservation,
}

/// Read-only summary of one reservation
#[function_component(ReservationDetails)]
pub fn reservation_details(props: &ReservationDetailsProps) -> Html {
    let reservation = &props.reservation;
    let style = status_style(&reservation.status.as_str().to_uppercase());

    html! {
        <dl class="reservation-details">
            <dt>{"Huésped"}</dt>
            <dd>{&reservation.guest_name}</dd>

            <dt>{"Alojamiento"}</dt>
            <dd>{&reservation.accommodation_name}</dd>

            <dt>{"Entrada"}</dt>
            <dd>{format_date_for_display(reservation.check_in)}</dd>

            <dt>{"Salida"}</dt>
            <dd>{format_date_for_display(reservation.check_out)}</dd>

            <dt>{"Estado"}</dt>
            <dd>
                <span class={classes!("status-badge", style.classes())}>
                    {reservation.status.label()}
                </span>
            </dd>
        </dl>
    }
}
