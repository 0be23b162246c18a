use yew::prelude::*;
use chrono::Days;
use web_sys::{HtmlInputElement, HtmlSelectElement, MouseEvent};
use wasm_bindgen_futures::spawn_local;
use shared::{Accommodation, CreateReservationRequest, Reservation, ReservationStatus};
use crate::services::api::ApiClient;
use crate::services::date_utils::{format_input_date, parse_input_date, today};
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct ReservationFormProps {
    pub accommodations: Vec<Accommodation>,
    pub on_close: Callback<()>,
    pub on_created: Callback<Reservation>,
    #[prop_or_default]
    pub api_client: ApiClient,
}

/// Build a request from the raw form values, or say which date is unreadable
fn build_request(
    guest_name: &str,
    accommodation_id: &str,
    check_in: &str,
    check_out: &str,
    status: &str,
) -> Result<CreateReservationRequest, String> {
    let check_in = parse_input_date(check_in).ok_or_else(|| "Fecha de entrada no válida".to_string())?;
    let check_out = parse_input_date(check_out).ok_or_else(|| "Fecha de salida no válida".to_string())?;

    Ok(CreateReservationRequest {
        guest_name: guest_name.trim().to_string(),
        accommodation_id: accommodation_id.to_string(),
        check_in,
        check_out,
        status: ReservationStatus::from(status.to_string()),
    })
}

#[function_component(ReservationForm)]
pub fn reservation_form(props: &ReservationFormProps) -> Html {
    let guest_name = use_state(String::new);
    let accommodation_id = use_state(String::new);
    let check_in = use_state(|| format_input_date(today()));
    let check_out = use_state(|| {
        let start = today();
        format_input_date(start.checked_add_days(Days::new(1)).unwrap_or(start))
    });
    let status = use_state(|| ReservationStatus::default().as_str().to_string());
    let is_submitting = use_state(|| false);
    let errors = use_state(Vec::<String>::new);

    let on_guest_change = {
        let guest_name = guest_name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            guest_name.set(input.value());
        })
    };

    let on_accommodation_change = {
        let accommodation_id = accommodation_id.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            accommodation_id.set(select.value());
        })
    };

    let on_check_in_change = {
        let check_in = check_in.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            check_in.set(input.value());
        })
    };

    let on_check_out_change = {
        let check_out = check_out.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            check_out.set(input.value());
        })
    };

    let on_status_change = {
        let status = status.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            status.set(select.value());
        })
    };

    let on_submit = {
        let guest_name = guest_name.clone();
        let accommodation_id = accommodation_id.clone();
        let check_in = check_in.clone();
        let check_out = check_out.clone();
        let status = status.clone();
        let is_submitting = is_submitting.clone();
        let errors = errors.clone();
        let on_created = props.on_created.clone();
        let api_client = props.api_client.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting {
                return;
            }

            let request = match build_request(&guest_name, &accommodation_id, &check_in, &check_out, &status) {
                Ok(request) => request,
                Err(message) => {
                    errors.set(vec![message]);
                    return;
                }
            };

            let validation = request.validate();
            if !validation.is_valid {
                errors.set(validation.errors.iter().map(ToString::to_string).collect());
                return;
            }

            is_submitting.set(true);
            errors.set(Vec::new());

            let is_submitting = is_submitting.clone();
            let errors = errors.clone();
            let on_created = on_created.clone();
            let api_client = api_client.clone();

            spawn_local(async move {
                match api_client.create_reservation(request).await {
                    Ok(reservation) => {
                        Logger::new(api_client.clone()).info_with_component(
                            "ReservationForm",
                            &format!("Created reservation {} for {}", reservation.id, reservation.guest_name),
                        );
                        is_submitting.set(false);
                        on_created.emit(reservation);
                    }
                    Err(e) => {
                        gloo::console::error!(format!("Failed to create reservation: {}", e));
                        is_submitting.set(false);
                        errors.set(vec![e]);
                    }
                }
            });
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    html! {
        <form class="reservation-form" onsubmit={on_submit}>
            {if errors.is_empty() {
                html! {}
            } else {
                html! {
                    <ul class="form-errors">
                        {for errors.iter().map(|error| html! { <li>{error}</li> })}
                    </ul>
                }
            }}

            <div class="form-group">
                <label for="reservation-guest">{"Huésped"}</label>
                <input
                    id="reservation-guest"
                    type="text"
                    class="form-input"
                    placeholder="Nombre del huésped"
                    value={(*guest_name).clone()}
                    oninput={on_guest_change}
                    disabled={*is_submitting}
                    autofocus=true
                />
            </div>

            <div class="form-group">
                <label for="reservation-accommodation">{"Alojamiento"}</label>
                <select
                    id="reservation-accommodation"
                    class="form-input"
                    onchange={on_accommodation_change}
                    disabled={*is_submitting}
                >
                    <option value="" selected={accommodation_id.is_empty()}>
                        {"Selecciona un alojamiento"}
                    </option>
                    {for props.accommodations.iter().map(|accommodation| html! {
                        <option
                            key={accommodation.id.clone()}
                            value={accommodation.id.clone()}
                            selected={*accommodation_id == accommodation.id}
                        >
                            {&accommodation.name}
                        </option>
                    })}
                </select>
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label for="reservation-check-in">{"Entrada"}</label>
                    <input
                        id="reservation-check-in"
                        type="date"
                        class="form-input"
                        value={(*check_in).clone()}
                        onchange={on_check_in_change}
                        disabled={*is_submitting}
                    />
                </div>
                <div class="form-group">
                    <label for="reservation-check-out">{"Salida"}</label>
                    <input
                        id="reservation-check-out"
                        type="date"
                        class="form-input"
                        value={(*check_out).clone()}
                        onchange={on_check_out_change}
                        disabled={*is_submitting}
                    />
                </div>
            </div>

            <div class="form-group">
                <label for="reservation-status">{"Estado"}</label>
                <select
                    id="reservation-status"
                    class="form-input"
                    onchange={on_status_change}
                    disabled={*is_submitting}
                >
                    {for ReservationStatus::KNOWN.iter().map(|known| html! {
                        <option
                            key={known.as_str().to_string()}
                            value={known.as_str().to_string()}
                            selected={*status == known.as_str()}
                        >
                            {known.label()}
                        </option>
                    })}
                </select>
            </div>

            <div class="form-buttons">
                <button type="button" class="btn btn-secondary" onclick={on_cancel} disabled={*is_submitting}>
                    {"Cancelar"}
                </button>
                <button type="submit" class="btn btn-primary" disabled={*is_submitting}>
                    {if *is_submitting { "Guardando..." } else { "Crear reservación" }}
                </button>
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::ReservationValidationError;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_build_request_trims_and_parses() {
        let request = build_request("  Ana Ruiz ", "A1", "2024-06-01", "2024-06-03", "CONFIRMED").unwrap();
        assert_eq!(request.guest_name, "Ana Ruiz");
        assert_eq!(request.check_in, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(request.check_out, NaiveDate::from_ymd_opt(2024, 6, 3).unwrap());
        assert_eq!(request.status, ReservationStatus::Confirmed);
        assert!(request.validate().is_valid);
    }

    #[wasm_bindgen_test]
    fn test_build_request_rejects_unreadable_dates() {
        let result = build_request("Ana Ruiz", "A1", "", "2024-06-03", "PENDING");
        assert_eq!(result, Err("Fecha de entrada no válida".to_string()));
    }

    #[wasm_bindgen_test]
    fn test_missing_accommodation_is_caught_before_submit() {
        let request = build_request("Ana Ruiz", "", "2024-06-01", "2024-06-03", "PENDING").unwrap();
        let validation = request.validate();
        assert!(!validation.is_valid);
        assert_eq!(validation.errors, vec![ReservationValidationError::MissingAccommodation]);
    }
}
