//! Reservation filtering and projection into calendar events.
//!
//! The projection is a pure function of the reservation list and the three
//! filter criteria. Callers recompute it whenever any input changes; there is
//! no partial state to invalidate.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::Reservation;

/// Select value meaning "no restriction"
pub const ALL: &str = "all";

/// Accommodation selector
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AccommodationFilter {
    #[default]
    All,
    Only(String),
}

impl AccommodationFilter {
    /// Build from a `<select>` value where `"all"` means no restriction
    pub fn from_select_value(value: &str) -> Self {
        if value == ALL {
            AccommodationFilter::All
        } else {
            AccommodationFilter::Only(value.to_string())
        }
    }

    pub fn select_value(&self) -> &str {
        match self {
            AccommodationFilter::All => ALL,
            AccommodationFilter::Only(id) => id,
        }
    }

    /// Exact match on the accommodation id
    pub fn matches(&self, reservation: &Reservation) -> bool {
        match self {
            AccommodationFilter::All => true,
            AccommodationFilter::Only(id) => reservation.accommodation_id == *id,
        }
    }
}

/// Status selector
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(String),
}

impl StatusFilter {
    pub fn from_select_value(value: &str) -> Self {
        if value == ALL {
            StatusFilter::All
        } else {
            StatusFilter::Only(value.to_string())
        }
    }

    pub fn select_value(&self) -> &str {
        match self {
            StatusFilter::All => ALL,
            StatusFilter::Only(status) => status,
        }
    }

    /// Case-insensitive match on the raw status value
    pub fn matches(&self, reservation: &Reservation) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => {
                reservation.status.as_str().to_lowercase() == status.to_lowercase()
            }
        }
    }
}

/// The three filter criteria of the calendar view
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReservationFilter {
    pub accommodation: AccommodationFilter,
    pub status: StatusFilter,
    /// Case-insensitive substring of the guest name; empty matches everyone
    pub guest_query: String,
}

impl ReservationFilter {
    pub fn matches_guest(&self, reservation: &Reservation) -> bool {
        self.guest_query.is_empty()
            || reservation
                .guest_name
                .to_lowercase()
                .contains(&self.guest_query.to_lowercase())
    }

    pub fn matches(&self, reservation: &Reservation) -> bool {
        self.accommodation.matches(reservation)
            && self.status.matches(reservation)
            && self.matches_guest(reservation)
    }
}

/// A display-ready event for the month grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub start: NaiveDate,
    /// Exclusive: the event does not occupy this day
    pub end: NaiveDate,
    pub all_day: bool,
    /// Raw status of the source reservation
    pub status: String,
    pub class_names: Vec<String>,
}

impl CalendarEvent {
    pub fn from_reservation(reservation: &Reservation) -> Self {
        let status = reservation.status.as_str().to_string();
        Self {
            id: reservation.id.to_string(),
            title: format!("{} - {}", reservation.guest_name, reservation.accommodation_name),
            start: reservation.check_in,
            end: exclusive_end(reservation.check_out),
            all_day: true,
            class_names: vec![format!("event-{}", status.to_lowercase())],
            status,
        }
    }

    /// Whether the event covers `day`, honouring the exclusive end
    pub fn occupies(&self, day: NaiveDate) -> bool {
        self.start <= day && day < self.end
    }

    /// Guest and accommodation halves of the title
    pub fn title_parts(&self) -> (&str, &str) {
        let mut parts = self.title.split(" - ");
        let guest = parts.next().unwrap_or_default();
        let accommodation = parts.next().unwrap_or_default();
        (guest, accommodation)
    }
}

/// Check-out plus one calendar day. Saturates at the last representable date.
pub fn exclusive_end(check_out: NaiveDate) -> NaiveDate {
    check_out.checked_add_days(Days::new(1)).unwrap_or(check_out)
}

/// Filter `reservations` and map the survivors into calendar events, keeping
/// source order.
pub fn project_events(reservations: &[Reservation], filter: &ReservationFilter) -> Vec<CalendarEvent> {
    reservations
        .iter()
        .filter(|reservation| filter.matches(reservation))
        .map(CalendarEvent::from_reservation)
        .collect()
}
