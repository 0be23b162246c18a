use yew::prelude::*;
use chrono::{Datelike, NaiveDate};
use shared::{CalendarEvent, CalendarNavigator, GridDay, MonthView};
use std::rc::Rc;
use crate::services::date_utils::today;

#[derive(Properties, PartialEq)]
pub struct MonthGridProps {
    pub view: MonthView,
    pub events: Rc<Vec<CalendarEvent>>,
    /// Renders the body of one event chip
    pub render_event: Callback<CalendarEvent, Html>,
    /// Called with the anchor date each time the visible month changes
    #[prop_or_default]
    pub on_dates_set: Callback<NaiveDate>,
    /// Called with the event id
    #[prop_or_default]
    pub on_event_click: Callback<String>,
}

/// Six-week month grid with all-day event chips
#[function_component(MonthGrid)]
pub fn month_grid(props: &MonthGridProps) -> Html {
    use_effect_with(props.view, {
        let on_dates_set = props.on_dates_set.clone();
        move |view| {
            on_dates_set.emit(view.get_date());
            || ()
        }
    });

    let days = use_memo((props.view, props.events.clone()), |(view, events)| {
        view.grid(events)
    });

    let today = today();

    let render_day = |day: &GridDay| {
        let mut day_class = classes!("calendar-day");
        if !day.in_month {
            day_class.push("other-month");
        }
        if day.date == today {
            day_class.push("today");
        }

        html! {
            <div class={day_class} key={day.date.to_string()}>
                <div class="day-header">
                    <div class="day-number">{day.date.day()}</div>
                </div>
                <div class="day-events">
                    {for day.events.iter().map(|event| {
                        let onclick = {
                            let on_event_click = props.on_event_click.clone();
                            let id = event.id.clone();
                            Callback::from(move |_: MouseEvent| on_event_click.emit(id.clone()))
                        };
                        html! {
                            <div
                                class={classes!("calendar-event", event.class_names.clone())}
                                title={event.title.clone()}
                                {onclick}
                            >
                                {props.render_event.emit(event.clone())}
                            </div>
                        }
                    })}
                </div>
            </div>
        }
    };

    html! {
        <div class="calendar">
            <div class="calendar-weekdays">
                {for props.view.locale().weekday_headers().into_iter().map(|name| html! {
                    <div class="weekday">{name}</div>
                })}
            </div>
            <div class="calendar-grid">
                {for days.iter().map(render_day)}
            </div>
        </div>
    }
}
