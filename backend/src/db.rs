use anyhow::Result;
use chrono::{Days, NaiveDate};
use shared::{Accommodation, Reservation, ReservationStatus};
use sqlx::{migrate::MigrateDatabase, sqlite::SqliteRow, Row, Sqlite, SqlitePool};
use std::sync::Arc;
use tracing::info;

const RESERVATION_COLUMNS: &str = r#"
    SELECT r.id, r.guest_name, r.accommodation_id, a.name AS accommodation_name,
           r.check_in, r.check_out, r.status
    FROM reservations r
    JOIN accommodations a ON a.id = r.accommodation_id
"#;

/// Reservation fields as stored, before the accommodation name is joined in
#[derive(Debug, Clone, PartialEq)]
pub struct NewReservation {
    pub guest_name: String,
    pub accommodation_id: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub status: ReservationStatus,
}

/// DbConnection manages database operations
#[derive(Clone)]
pub struct DbConnection {
    pool: Arc<SqlitePool>,
}

impl DbConnection {
    /// Create a new database connection
    pub async fn new(url: &str) -> Result<Self> {
        // Create database if it doesn't exist
        if !Sqlite::database_exists(url).await.unwrap_or(false) {
            Sqlite::create_database(url).await?
        }

        let pool = SqlitePool::connect(url).await?;
        Self::setup_schema(&pool).await?;

        Ok(Self { pool: Arc::new(pool) })
    }

    /// Initialize a test database with a unique name
    #[cfg(test)]
    pub async fn init_test() -> Result<Self> {
        let test_id = uuid::Uuid::new_v4().to_string();
        let db_url = format!("sqlite:file:memdb_{}?mode=memory&cache=shared", test_id);

        Self::new(&db_url).await
    }

    async fn setup_schema(pool: &SqlitePool) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS accommodations (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL
            );
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS reservations (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                guest_name TEXT NOT NULL,
                accommodation_id TEXT NOT NULL REFERENCES accommodations(id),
                check_in TEXT NOT NULL,
                check_out TEXT NOT NULL,
                status TEXT NOT NULL
            );
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    /// All accommodations, ordered by name
    pub async fn list_accommodations(&self) -> Result<Vec<Accommodation>> {
        let rows = sqlx::query("SELECT id, name FROM accommodations ORDER BY name, id")
            .fetch_all(&*self.pool)
            .await?;

        rows.iter()
            .map(|row| -> Result<Accommodation> {
                Ok(Accommodation {
                    id: row.try_get("id")?,
                    name: row.try_get("name")?,
                })
            })
            .collect()
    }

    pub async fn get_accommodation(&self, id: &str) -> Result<Option<Accommodation>> {
        let row = sqlx::query("SELECT id, name FROM accommodations WHERE id = ?")
            .bind(id)
            .fetch_optional(&*self.pool)
            .await?;

        match row {
            Some(r) => Ok(Some(Accommodation {
                id: r.try_get("id")?,
                name: r.try_get("name")?,
            })),
            None => Ok(None),
        }
    }

    /// Insert or rename an accommodation
    pub async fn put_accommodation(&self, accommodation: &Accommodation) -> Result<()> {
        sqlx::query("INSERT OR REPLACE INTO accommodations (id, name) VALUES (?, ?)")
            .bind(&accommodation.id)
            .bind(&accommodation.name)
            .execute(&*self.pool)
            .await?;
        Ok(())
    }

    /// All reservations with their accommodation names, ordered by check-in
    pub async fn list_reservations(&self) -> Result<Vec<Reservation>> {
        let query = format!("{} ORDER BY r.check_in, r.id", RESERVATION_COLUMNS);
        let rows = sqlx::query(&query).fetch_all(&*self.pool).await?;

        rows.iter().map(reservation_from_row).collect()
    }

    pub async fn get_reservation(&self, id: i64) -> Result<Option<Reservation>> {
        let query = format!("{} WHERE r.id = ?", RESERVATION_COLUMNS);
        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&*self.pool)
            .await?;

        row.as_ref().map(reservation_from_row).transpose()
    }

    /// Store a reservation and return its new id
    pub async fn insert_reservation(&self, reservation: &NewReservation) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO reservations (guest_name, accommodation_id, check_in, check_out, status)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&reservation.guest_name)
        .bind(&reservation.accommodation_id)
        .bind(reservation.check_in)
        .bind(reservation.check_out)
        .bind(reservation.status.as_str())
        .execute(&*self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Fill an empty database with a few accommodations and bookings around
    /// `today`. Returns false if there was already data.
    pub async fn seed_demo_data(&self, today: NaiveDate) -> Result<bool> {
        let count: i64 = sqlx::query("SELECT COUNT(*) AS count FROM accommodations")
            .fetch_one(&*self.pool)
            .await?
            .try_get("count")?;
        if count > 0 {
            return Ok(false);
        }

        info!("Seeding demo accommodations and reservations");
        let accommodations = [
            ("A1", "Cabaña del Lago"),
            ("A2", "Suite Vista al Mar"),
            ("A3", "Casa del Bosque"),
        ];
        for (id, name) in accommodations {
            self.put_accommodation(&Accommodation {
                id: id.to_string(),
                name: name.to_string(),
            })
            .await?;
        }

        let bookings = [
            ("Ana Ruiz", "A1", 1, 3, ReservationStatus::Confirmed),
            ("Carlos Méndez", "A2", 4, 8, ReservationStatus::Pending),
            ("Lucía Fernández", "A3", 6, 7, ReservationStatus::Confirmed),
            ("John Doe", "A1", 10, 14, ReservationStatus::Cancelled),
            ("Marta Gómez", "A2", 15, 20, ReservationStatus::Confirmed),
        ];
        for (guest_name, accommodation_id, from, to, status) in bookings {
            self.insert_reservation(&NewReservation {
                guest_name: guest_name.to_string(),
                accommodation_id: accommodation_id.to_string(),
                check_in: today + Days::new(from),
                check_out: today + Days::new(to),
                status,
            })
            .await?;
        }

        Ok(true)
    }
}

fn reservation_from_row(row: &SqliteRow) -> Result<Reservation> {
    let status: String = row.try_get("status")?;
    Ok(Reservation {
        id: row.try_get("id")?,
        guest_name: row.try_get("guest_name")?,
        accommodation_id: row.try_get("accommodation_id")?,
        accommodation_name: row.try_get("accommodation_name")?,
        check_in: row.try_get("check_in")?,
        check_out: row.try_get("check_out")?,
        status: ReservationStatus::from(status),
    })
}
