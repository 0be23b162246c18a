use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use shared::projection::ALL;
use shared::{Accommodation, AccommodationFilter, ReservationFilter, ReservationStatus, StatusFilter};

#[derive(Properties, PartialEq)]
pub struct FilterPanelProps {
    pub accommodations: Vec<Accommodation>,
    pub filter: ReservationFilter,
    pub on_change: Callback<ReservationFilter>,
}

#[function_component(FilterPanel)]
pub fn filter_panel(props: &FilterPanelProps) -> Html {
    let on_accommodation_change = {
        let filter = props.filter.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(ReservationFilter {
                accommodation: AccommodationFilter::from_select_value(&select.value()),
                ..filter.clone()
            });
        })
    };

    let on_status_change = {
        let filter = props.filter.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(ReservationFilter {
                status: StatusFilter::from_select_value(&select.value()),
                ..filter.clone()
            });
        })
    };

    let on_guest_input = {
        let filter = props.filter.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(ReservationFilter {
                guest_query: input.value(),
                ..filter.clone()
            });
        })
    };

    let selected_accommodation = props.filter.accommodation.select_value().to_string();
    let selected_status = props.filter.status.select_value().to_string();

    html! {
        <div class="filter-panel">
            <div class="form-group">
                <label for="filter-accommodation">{"Alojamiento"}</label>
                <select id="filter-accommodation" class="filter-select" onchange={on_accommodation_change}>
                    <option value={ALL} selected={selected_accommodation == ALL}>
                        {"Todos los alojamientos"}
                    </option>
                    {for props.accommodations.iter().map(|accommodation| html! {
                        <option
                            key={accommodation.id.clone()}
                            value={accommodation.id.clone()}
                            selected={selected_accommodation == accommodation.id}
                        >
                            {&accommodation.name}
                        </option>
                    })}
                </select>
            </div>

            <div class="form-group">
                <label for="filter-status">{"Estado"}</label>
                <select id="filter-status" class="filter-select" onchange={on_status_change}>
                    <option value={ALL} selected={selected_status == ALL}>
                        {"Todos los estados"}
                    </option>
                    {for ReservationStatus::KNOWN.iter().map(|status| html! {
                        <option
                            key={status.as_str().to_string()}
                            value={status.as_str().to_string()}
                            selected={selected_status.eq_ignore_ascii_case(status.as_str())}
                        >
                            {status.label()}
                        </option>
                    })}
                </select>
            </div>

            <div class="form-group">
                <label for="filter-guest">{"Buscar huésped"}</label>
                <input
                    id="filter-guest"
                    type="text"
                    class="filter-input"
                    placeholder="Nombre del huésped..."
                    value={props.filter.guest_query.clone()}
                    oninput={on_guest_input}
                />
            </div>
        </div>
    }
}
