//! Month navigation and grid layout for the reservation calendar.
//!
//! `MonthView` plays the part of the calendar widget's imperative handle: the
//! host calls `prev()`/`next()` and reads back `get_date()` for its label.
//! The grid is always six weeks long so that the layout does not jump
//! between months.

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::locale::Locale;
use crate::projection::CalendarEvent;

/// Number of days shown by the month grid (six weeks)
pub const GRID_DAYS: usize = 42;

/// Navigation capability exposed by a calendar renderer
pub trait CalendarNavigator {
    /// Move to the previous month
    fn prev(&mut self);
    /// Move to the next month
    fn next(&mut self);
    /// Current anchor date of the view
    fn get_date(&self) -> NaiveDate;
}

/// A month-sized window anchored on the first day of a month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthView {
    anchor: NaiveDate,
    locale: Locale,
}

/// One cell of the month grid
#[derive(Debug, Clone, PartialEq)]
pub struct GridDay {
    pub date: NaiveDate,
    /// False for the padding days of the neighbouring months
    pub in_month: bool,
    pub events: Vec<CalendarEvent>,
}

impl MonthView {
    /// View of the month containing `date`
    pub fn new(date: NaiveDate, locale: Locale) -> Self {
        Self {
            anchor: first_of_month(date),
            locale,
        }
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn month(&self) -> u32 {
        self.anchor.month()
    }

    pub fn year(&self) -> i32 {
        self.anchor.year()
    }

    /// "<Month> <Year>" using the locale's month names
    pub fn title(&self) -> String {
        format!("{} {}", self.locale.month_name(self.month()), self.year())
    }

    /// First visible day: the locale's first weekday on or before the 1st
    pub fn range_start(&self) -> NaiveDate {
        let offset = (7 + self.anchor.weekday().num_days_from_monday()
            - self.locale.first_day_of_week.num_days_from_monday())
            % 7;
        self.anchor - Days::new(offset as u64)
    }

    /// Exclusive end of the visible range
    pub fn range_end(&self) -> NaiveDate {
        self.range_start() + Days::new(GRID_DAYS as u64)
    }

    /// Lay out `events` on the visible grid, keeping event order per day
    pub fn grid(&self, events: &[CalendarEvent]) -> Vec<GridDay> {
        let start = self.range_start();
        (0..GRID_DAYS as u64)
            .map(|offset| {
                let date = start + Days::new(offset);
                GridDay {
                    date,
                    in_month: date.month() == self.anchor.month() && date.year() == self.anchor.year(),
                    events: events
                        .iter()
                        .filter(|event| event.occupies(date))
                        .cloned()
                        .collect(),
                }
            })
            .collect()
    }
}

impl CalendarNavigator for MonthView {
    fn prev(&mut self) {
        if let Some(date) = self.anchor.checked_sub_months(Months::new(1)) {
            self.anchor = date;
        }
    }

    fn next(&mut self) {
        if let Some(date) = self.anchor.checked_add_months(Months::new(1)) {
            self.anchor = date;
        }
    }

    fn get_date(&self) -> NaiveDate {
        self.anchor
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}
