//! Fixed locale tables for the calendar.

use chrono::Weekday;

/// Month and weekday names plus the first day of the week
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    pub code: &'static str,
    pub month_names: [&'static str; 12],
    /// Short weekday names, Monday first
    pub weekday_short_names: [&'static str; 7],
    pub first_day_of_week: Weekday,
}

/// Spanish
pub const ES: Locale = Locale {
    code: "es",
    month_names: [
        "Enero", "Febrero", "Marzo", "Abril", "Mayo", "Junio",
        "Julio", "Agosto", "Septiembre", "Octubre", "Noviembre", "Diciembre",
    ],
    weekday_short_names: ["lun", "mar", "mié", "jue", "vie", "sáb", "dom"],
    first_day_of_week: Weekday::Mon,
};

impl Locale {
    /// Month name for a 1-based month number
    pub fn month_name(&self, month: u32) -> &'static str {
        match month {
            1..=12 => self.month_names[(month - 1) as usize],
            _ => "",
        }
    }

    pub fn weekday_short_name(&self, weekday: Weekday) -> &'static str {
        self.weekday_short_names[weekday.num_days_from_monday() as usize]
    }

    /// Weekday headers in display order, starting at `first_day_of_week`
    pub fn weekday_headers(&self) -> Vec<&'static str> {
        let mut weekday = self.first_day_of_week;
        let mut headers = Vec::with_capacity(7);
        for _ in 0..7 {
            headers.push(self.weekday_short_name(weekday));
            weekday = weekday.succ();
        }
        headers
    }
}
