use chrono::{Datelike, NaiveDate};
use shared::ES;

/// Today's date in the browser's local time zone
pub fn today() -> NaiveDate {
    use js_sys::Date;
    let now = Date::new_0();
    let year = now.get_full_year() as i32;
    let month = now.get_month() + 1; // JavaScript months are 0-indexed
    let day = now.get_date();

    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Parse the value of an `<input type="date">` (YYYY-MM-DD)
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Format a date as an `<input type="date">` value
pub fn format_input_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Long Spanish form, e.g. "1 de junio de 2024"
pub fn format_date_for_display(date: NaiveDate) -> String {
    format!(
        "{} de {} de {}",
        date.day(),
        ES.month_name(date.month()).to_lowercase(),
        date.year()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_today_is_a_real_date() {
        let date = today();
        assert!(date.year() >= 2024);
    }

    #[wasm_bindgen_test]
    fn test_parse_input_date() {
        assert_eq!(parse_input_date("2024-06-01"), NaiveDate::from_ymd_opt(2024, 6, 1));
        assert_eq!(parse_input_date(""), None);
        assert_eq!(parse_input_date("2024-02-30"), None);
    }

    #[wasm_bindgen_test]
    fn test_format_dates() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(format_input_date(date), "2024-06-01");
        assert_eq!(format_date_for_display(date), "1 de junio de 2024");
    }
}
