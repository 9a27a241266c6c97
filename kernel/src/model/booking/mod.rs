use crate::model::id::{BookingId, PropertyId, UserId};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult};
use strum::{AsRefStr, Display, EnumString};

pub mod event;

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    EnumString,
    AsRefStr,
    Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
    Completed,
    InProgress,
}

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    EnumString,
    AsRefStr,
    Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    PartiallyPaid,
    Refunded,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
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
    pub booking_status: BookingStatus,
    pub payment_status: PaymentStatus,
    pub special_requests: Option<String>,
    pub cancellation_reason: Option<String>,
    pub cancelled_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct BookingListFilter {
    pub property_id: Option<PropertyId>,
    pub guest_id: Option<UserId>,
    pub status: Option<BookingStatus>,
}

/// Number of nights between check-in and check-out. The stay must cover at least one night.
pub fn total_nights(check_in_date: NaiveDate, check_out_date: NaiveDate) -> AppResult<i32> {
    let nights = (check_out_date - check_in_date).num_days();
    if nights <= 0 {
        return Err(AppError::InvalidInput(
            "check_out_date must be after check_in_date".into(),
        ));
    }
    i32::try_from(nights)
        .map_err(|_| AppError::InvalidInput("Booking covers too many nights".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn nights_are_counted_between_dates() {
        assert_eq!(total_nights(date(2024, 6, 1), date(2024, 6, 5)).unwrap(), 4);
        assert_eq!(total_nights(date(2024, 2, 28), date(2024, 3, 1)).unwrap(), 2);
    }

    #[test]
    fn same_day_or_reversed_stay_is_rejected() {
        assert!(matches!(
            total_nights(date(2024, 6, 1), date(2024, 6, 1)),
            Err(AppError::InvalidInput(_))
        ));
        assert!(matches!(
            total_nights(date(2024, 6, 5), date(2024, 6, 1)),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn statuses_round_trip_through_text() {
        assert_eq!(BookingStatus::InProgress.as_ref(), "in_progress");
        assert_eq!(
            "partially_paid".parse::<PaymentStatus>().unwrap(),
            PaymentStatus::PartiallyPaid
        );
        assert!("archived".parse::<BookingStatus>().is_err());
    }
}
