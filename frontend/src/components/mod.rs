pub mod filter_panel;
pub mod modal;
pub mod month_grid;
pub mod reservation_calendar;
pub mod reservation_details;
pub mod reservation_form;
pub mod status_legend;
