use super::{parse_enum, with_scale, MONEY_SCALE};
use chrono::{DateTime, NaiveDate, Utc};
use kernel::model::{
    booking::Booking,
    id::{BookingId, PropertyId, UserId},
};
use rust_decimal::Decimal;
use shared::error::AppError;
use sqlx::FromRow;

#[derive(FromRow)]
pub struct BookingRow {
    pub booking_id: BookingId,
    pub property_id: PropertyId,
    pub guest_id: UserId,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub num_guests: i32,
    pub total_nights: i32,
    pub base_price: Decimal,
    pub cleaning_fee: Decimal,
    pub service_fee: Decimal,
    pub taxes: Decimal,
    pub total_amount: Decimal,
    pub booking_status: String,
    pub payment_status: String,
    pub special_requests: Option<String>,
    pub cancellation_reason: Option<String>,
    pub cancelled_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<BookingRow> for Booking {
    type Error = AppError;

    fn try_from(value: BookingRow) -> Result<Self, Self::Error> {
        let BookingRow {
            booking_id,
            property_id,
            guest_id,
            check_in_date,
            check_out_date,
            num_guests,
            total_nights,
            base_price,
            cleaning_fee,
            service_fee,
            taxes,
            total_amount,
            booking_status,
            payment_status,
            special_requests,
            cancellation_reason,
            cancelled_at,
            created_at,
            updated_at,
        } = value;
        Ok(Booking {
            booking_id,
            property_id,
            guest_id,
            check_in_date,
            check_out_date,
            num_guests,
            total_nights,
            base_price: with_scale(base_price, MONEY_SCALE),
            cleaning_fee: with_scale(cleaning_fee, MONEY_SCALE),
            service_fee: with_scale(service_fee, MONEY_SCALE),
            taxes: with_scale(taxes, MONEY_SCALE),
            total_amount: with_scale(total_amount, MONEY_SCALE),
            booking_status: parse_enum("booking_status", &booking_status)?,
            payment_status: parse_enum("payment_status", &payment_status)?,
            special_requests,
            cancellation_reason,
            cancelled_at,
            created_at,
            updated_at,
        })
    }
}
