use crate::db::{DbConnection, NewReservation};
use shared::{Accommodation, CreateReservationRequest, Reservation, ReservationValidationError};
use tracing::info;

/// Errors surfaced by the reservation service
#[derive(Debug, thiserror::Error)]
pub enum ReservationError {
    #[error("{}", join_errors(.0))]
    Invalid(Vec<ReservationValidationError>),
    #[error("Accommodation {0} does not exist")]
    UnknownAccommodation(String),
    #[error("Reservation {0} disappeared after being stored")]
    Missing(i64),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

fn join_errors(errors: &[ReservationValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Reads and writes reservations and accommodations
#[derive(Clone)]
pub struct ReservationService {
    db: DbConnection,
}

impl ReservationService {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    pub async fn list_reservations(&self) -> anyhow::Result<Vec<Reservation>> {
        let reservations = self.db.list_reservations().await?;
        info!("Returning {} reservations", reservations.len());
        Ok(reservations)
    }

    pub async fn list_accommodations(&self) -> anyhow::Result<Vec<Accommodation>> {
        let accommodations = self.db.list_accommodations().await?;
        info!("Returning {} accommodations", accommodations.len());
        Ok(accommodations)
    }

    /// Validate and store a new reservation, returning it with the
    /// accommodation name joined in
    pub async fn create_reservation(
        &self,
        request: CreateReservationRequest,
    ) -> Result<Reservation, ReservationError> {
        info!("Creating reservation: {:?}", request);

        let validation = request.validate();
        if !validation.is_valid {
            return Err(ReservationError::Invalid(validation.errors));
        }

        let accommodation_id = request.accommodation_id.trim().to_string();
        if self.db.get_accommodation(&accommodation_id).await?.is_none() {
            return Err(ReservationError::UnknownAccommodation(accommodation_id));
        }

        let id = self
            .db
            .insert_reservation(&NewReservation {
                guest_name: request.guest_name.trim().to_string(),
                accommodation_id,
                check_in: request.check_in,
                check_out: request.check_out,
                status: request.status,
            })
            .await?;

        let reservation = self
            .db
            .get_reservation(id)
            .await?
            .ok_or(ReservationError::Missing(id))?;

        info!("Created reservation {} for {}", reservation.id, reservation.guest_name);
        Ok(reservation)
    }
}
