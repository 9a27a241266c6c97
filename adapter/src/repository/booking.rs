use super::check::{ensure_property_exists, ensure_user_exists};
use crate::database::{model::booking::BookingRow, update::UpdateBuilder, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    booking::{
        event::{CreateBooking, UpdateBooking},
        Booking, BookingListFilter,
    },
    id::BookingId,
    list::ListOptions,
};
use kernel::repository::booking::BookingRepository;
use shared::error::{AppError, AppResult};
use sqlx::{PgConnection, Postgres, QueryBuilder};

const SELECT_BOOKING: &str = r#"
    SELECT booking_id, property_id, guest_id, check_in_date, check_out_date,
           num_guests, total_nights, base_price, cleaning_fee, service_fee,
           taxes, total_amount, booking_status, payment_status,
           special_requests, cancellation_reason, cancelled_at,
           created_at, updated_at
    FROM bookings
"#;

#[derive(new)]
pub struct BookingRepositoryImpl {
    db: ConnectionPool,
}

impl BookingRepositoryImpl {
    async fn fetch(conn: &mut PgConnection, booking_id: BookingId) -> AppResult<Option<Booking>> {
        sqlx::query_as::<_, BookingRow>(&format!("{SELECT_BOOKING} WHERE booking_id = $1"))
            .bind(booking_id)
            .fetch_optional(conn)
            .await
            .map_err(AppError::SpecificOperationError)?
            .map(Booking::try_from)
            .transpose()
    }
}

#[async_trait]
impl BookingRepository for BookingRepositoryImpl {
    async fn create(&self, event: CreateBooking) -> AppResult<Booking> {
        let mut tx = self.db.begin().await?;

        ensure_property_exists(&mut tx, event.property_id).await?;
        match ensure_user_exists(&mut tx, event.guest_id).await {
            Err(AppError::EntityNotFound(_)) => {
                return Err(AppError::EntityNotFound("Guest user not found".into()))
            }
            other => other?,
        }

        let booking_id = sqlx::query_scalar::<_, BookingId>(
            r#"
                INSERT INTO bookings
                (property_id, guest_id, check_in_date, check_out_date, num_guests,
                 total_nights, base_price, cleaning_fee, service_fee, taxes,
                 total_amount, booking_status, payment_status, special_requests)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
                RETURNING booking_id
            "#,
        )
        .bind(event.property_id)
        .bind(event.guest_id)
        .bind(event.check_in_date)
        .bind(event.check_out_date)
        .bind(event.num_guests)
        .bind(event.total_nights)
        .bind(event.base_price)
        .bind(event.cleaning_fee)
        .bind(event.service_fee)
        .bind(event.taxes)
        .bind(event.total_amount)
        .bind(event.booking_status.as_ref())
        .bind(event.payment_status.as_ref())
        .bind(&event.special_requests)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        let booking = Self::fetch(&mut tx, booking_id).await?.ok_or_else(|| {
            AppError::NoRowsAffectedError("No booking record has been created".into())
        })?;

        tx.commit().await.map_err(AppError::TransactionError)?;
        tracing::info!(
            booking.id = %booking_id,
            property.id = %booking.property_id,
            guest.id = %booking.guest_id,
            nights = booking.total_nights,
            "booking created"
        );
        Ok(booking)
    }

    async fn find_all(
        &self,
        filter: BookingListFilter,
        options: ListOptions,
    ) -> AppResult<Vec<Booking>> {
        let mut query: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("{SELECT_BOOKING} WHERE TRUE"));
        if let Some(property_id) = filter.property_id {
            query.push(" AND property_id = ").push_bind(property_id);
        }
        if let Some(guest_id) = filter.guest_id {
            query.push(" AND guest_id = ").push_bind(guest_id);
        }
        if let Some(status) = filter.status {
            query
                .push(" AND booking_status = ")
                .push_bind(status.to_string());
        }
        query
            .push(" ORDER BY created_at DESC, booking_id DESC LIMIT ")
            .push_bind(options.limit)
            .push(" OFFSET ")
            .push_bind(options.skip);

        query
            .build_query_as::<BookingRow>()
            .fetch_all(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?
            .into_iter()
            .map(Booking::try_from)
            .collect()
    }

    async fn find_by_id(&self, booking_id: BookingId) -> AppResult<Option<Booking>> {
        let mut conn = self
            .db
            .inner_ref()
            .acquire()
            .await
            .map_err(AppError::SpecificOperationError)?;
        Self::fetch(&mut conn, booking_id).await
    }

    async fn update(&self, event: UpdateBooking) -> AppResult<Booking> {
        let mut tx = self.db.begin().await?;

        if Self::fetch(&mut tx, event.booking_id).await?.is_none() {
            return Err(AppError::EntityNotFound("Booking not found".into()));
        }

        let stamps_cancellation = event.stamps_cancellation();
        let UpdateBooking {
            booking_id,
            check_in_date,
            check_out_date,
            num_guests,
            base_price,
            cleaning_fee,
            service_fee,
            taxes,
            total_amount,
            booking_status,
            payment_status,
            special_requests,
            cancellation_reason,
        } = event;

        let mut builder = UpdateBuilder::new("bookings");
        builder
            .set("check_in_date", check_in_date)
            .set("check_out_date", check_out_date)
            .set("num_guests", num_guests)
            .set("base_price", base_price)
            .set("cleaning_fee", cleaning_fee)
            .set("service_fee", service_fee)
            .set("taxes", taxes)
            .set("total_amount", total_amount)
            .set("booking_status", booking_status.map(|s| s.to_string()))
            .set("payment_status", payment_status.map(|s| s.to_string()))
            .set("special_requests", special_requests)
            .set("cancellation_reason", cancellation_reason);
        if stamps_cancellation {
            builder.set_raw("cancelled_at", "now()");
        }
        if builder.is_empty() {
            return Err(AppError::NoFieldsToUpdate);
        }

        builder
            .finish("booking_id", booking_id)
            .build()
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

        let booking = Self::fetch(&mut tx, booking_id)
            .await?
            .ok_or_else(|| AppError::EntityNotFound("Booking not found".into()))?;

        tx.commit().await.map_err(AppError::TransactionError)?;
        tracing::debug!(booking.id = %booking_id, status = %booking.booking_status, "booking updated");
        Ok(booking)
    }

    async fn delete(&self, booking_id: BookingId) -> AppResult<()> {
        let res = sqlx::query("DELETE FROM bookings WHERE booking_id = $1")
            .bind(booking_id)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("Booking not found".into()));
        }
        tracing::info!(booking.id = %booking_id, "booking deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use kernel::model::{
        booking::{total_nights, BookingStatus, PaymentStatus},
        id::{PropertyId, UserId},
    };
    use rust_decimal::Decimal;

    async fn seed(pool: &sqlx::PgPool) -> anyhow::Result<(PropertyId, UserId)> {
        let property_id = sqlx::query_scalar::<_, PropertyId>(
            r#"
                WITH host AS (
                    INSERT INTO users (email, password_hash, first_name, last_name, is_host)
                    VALUES ('b-host@example.com', 'x', 'Hana', 'Kato', TRUE)
                    RETURNING user_id
                ), category AS (
                    INSERT INTO property_categories (category_name) VALUES ('Villa')
                    RETURNING category_id
                )
                INSERT INTO properties (host_id, category_id, title, description, property_type, price_per_night)
                SELECT host.user_id, category.category_id, 'Villa', 'Sunny', 'entire_place', 200
                FROM host, category
                RETURNING property_id
            "#,
        )
        .fetch_one(pool)
        .await?;
        let guest_id = sqlx::query_scalar::<_, UserId>(
            r#"
                INSERT INTO users (email, password_hash, first_name, last_name)
                VALUES ('guest@example.com', 'x', 'Taro', 'Ueda')
                RETURNING user_id
            "#,
        )
        .fetch_one(pool)
        .await?;
        Ok((property_id, guest_id))
    }

    fn stay(property_id: PropertyId, guest_id: UserId) -> CreateBooking {
        let check_in_date = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        let check_out_date = NaiveDate::from_ymd_opt(2024, 7, 4).unwrap();
        CreateBooking {
            property_id,
            guest_id,
            check_in_date,
            check_out_date,
            num_guests: 2,
            total_nights: total_nights(check_in_date, check_out_date).unwrap(),
            base_price: Decimal::new(60000, 2),
            cleaning_fee: Decimal::ZERO,
            service_fee: Decimal::new(1800, 2),
            taxes: Decimal::ZERO,
            total_amount: Decimal::new(61800, 2),
            booking_status: BookingStatus::Pending,
            payment_status: PaymentStatus::Pending,
            special_requests: None,
        }
    }

    #[sqlx::test]
    #[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
    async fn cancellation_reason_stamps_cancelled_at(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let (property_id, guest_id) = seed(&pool).await?;
        let repo = BookingRepositoryImpl::new(ConnectionPool::new(pool));

        let booking = repo.create(stay(property_id, guest_id)).await?;
        assert_eq!(booking.total_nights, 3);
        assert!(booking.cancelled_at.is_none());
        assert_eq!(booking.cleaning_fee.to_string(), "0.00");
        assert_eq!(booking.taxes.to_string(), "0.00");

        let updated = repo
            .update(UpdateBooking {
                booking_id: booking.booking_id,
                check_out_date: NaiveDate::from_ymd_opt(2024, 7, 10),
                cancellation_reason: Some("Flight cancelled".into()),
                ..Default::default()
            })
            .await?;
        assert!(updated.cancelled_at.is_some());
        // fixed at creation
        assert_eq!(updated.total_nights, 3);
        Ok(())
    }

    #[sqlx::test]
    #[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
    async fn unknown_guest_is_not_found(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let (property_id, _) = seed(&pool).await?;
        let repo = BookingRepositoryImpl::new(ConnectionPool::new(pool));

        let res = repo.create(stay(property_id, UserId::new(4242))).await;
        assert!(matches!(res, Err(AppError::EntityNotFound(msg)) if msg == "Guest user not found"));
        Ok(())
    }
}
