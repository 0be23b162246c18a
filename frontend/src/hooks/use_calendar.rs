use yew::prelude::*;
use chrono::NaiveDate;
use shared::{CalendarNavigator, MonthView, ES};
use web_sys::MouseEvent;

#[derive(Clone, Copy, PartialEq)]
pub struct CalendarState {
    /// The renderer's month window
    pub view: MonthView,
    /// Date read back from the renderer, used for the header label only
    pub current_date: NaiveDate,
}

impl CalendarState {
    /// "<Month> <Year>" of `current_date` in the view's locale
    pub fn title(&self) -> String {
        MonthView::new(self.current_date, *self.view.locale()).title()
    }
}

pub struct UseCalendarResult {
    pub state: CalendarState,
    pub actions: UseCalendarActions,
}

#[derive(Clone)]
pub struct UseCalendarActions {
    pub prev_month: Callback<MouseEvent>,
    pub next_month: Callback<MouseEvent>,
    /// Fired by the renderer whenever its visible range changes
    pub on_dates_set: Callback<NaiveDate>,
}

#[derive(Clone, Copy, PartialEq)]
enum Direction {
    Prev,
    Next,
}

fn navigate_month(view: &MonthView, direction: Direction) -> MonthView {
    let mut navigated = *view;
    match direction {
        Direction::Prev => navigated.prev(),
        Direction::Next => navigated.next(),
    }
    navigated
}

#[hook]
pub fn use_calendar(initial_date: NaiveDate) -> UseCalendarResult {
    let view = use_state(|| MonthView::new(initial_date, ES));
    let current_date = use_state(|| initial_date);

    let prev_month = {
        let view_handle = view.clone();
        let current_date = current_date.clone();
        use_callback(*view, move |_: MouseEvent, view| {
            let navigated = navigate_month(view, Direction::Prev);
            current_date.set(navigated.get_date());
            view_handle.set(navigated);
        })
    };

    let next_month = {
        let view_handle = view.clone();
        let current_date = current_date.clone();
        use_callback(*view, move |_: MouseEvent, view| {
            let navigated = navigate_month(view, Direction::Next);
            current_date.set(navigated.get_date());
            view_handle.set(navigated);
        })
    };

    let on_dates_set = {
        let current_date = current_date.clone();
        use_callback((), move |date: NaiveDate, _| {
            current_date.set(date);
        })
    };

    let state = CalendarState {
        view: *view,
        current_date: *current_date,
    };

    let actions = UseCalendarActions {
        prev_month,
        next_month,
        on_dates_set,
    };

    UseCalendarResult { state, actions }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Locale;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[wasm_bindgen_test]
    fn test_title_follows_current_date() {
        let state = CalendarState {
            view: MonthView::new(date(2024, 6, 15), ES),
            current_date: date(2024, 7, 1),
        };
        assert_eq!(state.title(), "Julio 2024");
    }

    #[wasm_bindgen_test]
    fn test_title_uses_the_view_locale() {
        let english = Locale {
            code: "en",
            month_names: [
                "January", "February", "March", "April", "May", "June",
                "July", "August", "September", "October", "November", "December",
            ],
            ..ES
        };
        let state = CalendarState {
            view: MonthView::new(date(2024, 6, 1), english),
            current_date: date(2024, 6, 1),
        };
        assert_eq!(state.title(), "June 2024");
    }
}
