use yew::prelude::*;
use shared::{status_style, ReservationStatus};

#[function_component(StatusLegend)]
pub fn status_legend() -> Html {
    html! {
        <div class="status-legend">
            {for ReservationStatus::KNOWN.iter().map(|status| {
                let style = status_style(status.as_str());
                html! {
                    <div class="legend-item" key={status.as_str().to_string()}>
                        <span class={classes!("legend-swatch", style.background, style.border)}></span>
                        <span class="legend-label">{status.label()}</span>
                    </div>
                }
            })}
        </div>
    }
}
