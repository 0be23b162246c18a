use serde::{Deserialize, Serialize};
use std::fmt;
use chrono::NaiveDate;

pub mod calendar;
pub mod fetch;
pub mod locale;
pub mod projection;
pub mod styling;

pub use calendar::{CalendarNavigator, GridDay, MonthView};
pub use fetch::{FetchResource, FetchTicket, FetchTracker};
pub use locale::{Locale, ES};
pub use projection::{project_events, AccommodationFilter, CalendarEvent, ReservationFilter, StatusFilter};
pub use styling::{status_style, StatusStyle};

/// Maximum length of a guest name, in characters, after trimming
pub const MAX_GUEST_NAME_LENGTH: usize = 120;

/// A booking linking a guest to an accommodation for a date range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: i64,
    pub guest_name: String,
    pub accommodation_id: String,
    /// Display name of the accommodation, joined in by the provider
    pub accommodation_name: String,
    pub check_in: NaiveDate,
    /// Last night is the day before; the guest leaves on this date
    pub check_out: NaiveDate,
    pub status: ReservationStatus,
}

/// A bookable property or unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Accommodation {
    pub id: String,
    pub name: String,
}

/// Reservation status as sent by the provider.
///
/// Unknown values are preserved verbatim in `Other` so that a newer
/// provider never breaks the calendar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReservationStatus {
    Confirmed,
    Pending,
    Cancelled,
    Other(String),
}

impl ReservationStatus {
    /// Statuses a user can pick from, in display order
    pub const KNOWN: [ReservationStatus; 3] = [
        ReservationStatus::Confirmed,
        ReservationStatus::Pending,
        ReservationStatus::Cancelled,
    ];

    /// Raw wire value of the status
    pub fn as_str(&self) -> &str {
        match self {
            ReservationStatus::Confirmed => "CONFIRMED",
            ReservationStatus::Pending => "PENDING",
            ReservationStatus::Cancelled => "CANCELLED",
            ReservationStatus::Other(raw) => raw,
        }
    }

    /// Spanish label used by filters and the legend
    pub fn label(&self) -> &str {
        match self {
            ReservationStatus::Confirmed => "Confirmada",
            ReservationStatus::Pending => "Pendiente",
            ReservationStatus::Cancelled => "Cancelada",
            ReservationStatus::Other(raw) => raw,
        }
    }
}

impl Default for ReservationStatus {
    fn default() -> Self {
        ReservationStatus::Pending
    }
}

impl From<String> for ReservationStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "CONFIRMED" => ReservationStatus::Confirmed,
            "PENDING" => ReservationStatus::Pending,
            "CANCELLED" => ReservationStatus::Cancelled,
            _ => ReservationStatus::Other(raw),
        }
    }
}

impl From<&str> for ReservationStatus {
    fn from(raw: &str) -> Self {
        ReservationStatus::from(raw.to_string())
    }
}

impl From<ReservationStatus> for String {
    fn from(status: ReservationStatus) -> Self {
        match status {
            ReservationStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request for creating a new reservation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
    pub guest_name: String,
    pub accommodation_id: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    #[serde(default)]
    pub status: ReservationStatus,
}

impl CreateReservationRequest {
    /// Check the request the same way on both sides of the wire
    pub fn validate(&self) -> ReservationFormValidation {
        let mut errors = Vec::new();

        let guest_name = self.guest_name.trim();
        if guest_name.is_empty() {
            errors.push(ReservationValidationError::EmptyGuestName);
        } else if guest_name.chars().count() > MAX_GUEST_NAME_LENGTH {
            errors.push(ReservationValidationError::GuestNameTooLong(MAX_GUEST_NAME_LENGTH));
        }

        if self.accommodation_id.trim().is_empty() {
            errors.push(ReservationValidationError::MissingAccommodation);
        }

        if self.check_out <= self.check_in {
            errors.push(ReservationValidationError::CheckOutNotAfterCheckIn);
        }

        ReservationFormValidation {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

/// Validation result for the reservation creation form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationFormValidation {
    pub is_valid: bool,
    pub errors: Vec<ReservationValidationError>,
}

/// Specific validation errors for the reservation creation form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ReservationValidationError {
    EmptyGuestName,
    GuestNameTooLong(usize),
    MissingAccommodation,
    CheckOutNotAfterCheckIn,
}

impl fmt::Display for ReservationValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReservationValidationError::EmptyGuestName => {
                write!(f, "El nombre del huésped es obligatorio")
            }
            ReservationValidationError::GuestNameTooLong(max) => {
                write!(f, "El nombre del huésped no puede superar {} caracteres", max)
            }
            ReservationValidationError::MissingAccommodation => {
                write!(f, "Selecciona un alojamiento")
            }
            ReservationValidationError::CheckOutNotAfterCheckIn => {
                write!(f, "La salida debe ser posterior a la entrada")
            }
        }
    }
}

impl std::error::Error for ReservationValidationError {}

/// A log line forwarded by the browser to the server log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub level: String,
    pub message: String,
    pub component: Option<String>,
}
