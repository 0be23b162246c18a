use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::reservation_calendar::ReservationCalendar;
use services::api::ApiClient;
use services::logging::Logger;

#[function_component(App)]
fn app() -> Html {
    let api_client = use_memo((), |_| ApiClient::from_build_env());

    use_effect_with((), {
        let api_client = (*api_client).clone();
        move |_| {
            Logger::new(api_client.clone()).info_with_component(
                "App",
                &format!("Reservation calendar started against {}", api_client.base_url()),
            );
            || ()
        }
    });

    html! {
        <div class="app">
            <header class="app-header">
                <h1>{"Calendario de Reservaciones"}</h1>
            </header>
            <main class="app-main">
                <ReservationCalendar api_client={(*api_client).clone()} />
            </main>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
