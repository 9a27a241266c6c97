use super::{
    default_limit, default_skip,
    validate::{amount, opt_amount, opt_positive_amount, positive_amount},
};
use chrono::{DateTime, NaiveDate, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    booking::{
        event::{CreateBooking, UpdateBooking},
        total_nights, Booking, BookingListFilter, BookingStatus, PaymentStatus,
    },
    id::{BookingId, PropertyId, UserId},
    list::ListOptions,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::error::AppResult;

fn default_amount() -> Decimal {
    Decimal::new(0, 2)
}

#[derive(Debug, Deserialize, Validate)]
pub struct BookingListQuery {
    #[garde(range(min = 0))]
    #[serde(default = "default_skip")]
    pub skip: i64,
    #[garde(range(min = 0))]
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[garde(skip)]
    pub property_id: Option<PropertyId>,
    #[garde(skip)]
    pub guest_id: Option<UserId>,
    #[garde(skip)]
    pub status: Option<BookingStatus>,
}

impl BookingListQuery {
    pub fn into_parts(self) -> (BookingListFilter, ListOptions) {
        let BookingListQuery {
            skip,
            limit,
            property_id,
            guest_id,
            status,
        } = self;
        (
            BookingListFilter {
                property_id,
                guest_id,
                status,
            },
            ListOptions { skip, limit },
        )
    }
}

/// `total_nights` is accepted for compatibility but always recomputed from the dates.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBookingRequest {
    #[garde(skip)]
    pub property_id: PropertyId,
    #[garde(skip)]
    pub guest_id: UserId,
    #[garde(skip)]
    pub check_in_date: NaiveDate,
    #[garde(skip)]
    pub check_out_date: NaiveDate,
    #[garde(range(min = 1))]
    pub num_guests: i32,
    #[garde(range(min = 1))]
    pub total_nights: Option<i32>,
    #[garde(custom(positive_amount))]
    pub base_price: Decimal,
    #[garde(custom(amount))]
    #[serde(default = "default_amount")]
    pub cleaning_fee: Decimal,
    #[garde(custom(amount))]
    pub service_fee: Decimal,
    #[garde(custom(amount))]
    #[serde(default = "default_amount")]
    pub taxes: Decimal,
    #[garde(custom(positive_amount))]
    pub total_amount: Decimal,
    #[garde(skip)]
    #[serde(default)]
    pub booking_status: BookingStatus,
    #[garde(skip)]
    #[serde(default)]
    pub payment_status: PaymentStatus,
    #[garde(length(chars, max = 1000))]
    pub special_requests: Option<String>,
    #[garde(length(chars, max = 500))]
    pub cancellation_reason: Option<String>,
}

impl CreateBookingRequest {
    pub fn into_event(self) -> AppResult<CreateBooking> {
        let CreateBookingRequest {
            property_id,
            guest_id,
            check_in_date,
            check_out_date,
            num_guests,
            total_nights: _,
            base_price,
            cleaning_fee,
            service_fee,
            taxes,
            total_amount,
            booking_status,
            payment_status,
            special_requests,
            cancellation_reason: _,
        } = self;
        Ok(CreateBooking {
            property_id,
            guest_id,
            check_in_date,
            check_out_date,
            num_guests,
            total_nights: total_nights(check_in_date, check_out_date)?,
            base_price,
            cleaning_fee,
            service_fee,
            taxes,
            total_amount,
            booking_status,
            payment_status,
            special_requests,
        })
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateBookingRequest {
    #[garde(skip)]
    pub check_in_date: Option<NaiveDate>,
    #[garde(skip)]
    pub check_out_date: Option<NaiveDate>,
    #[garde(range(min = 1))]
    pub num_guests: Option<i32>,
    #[garde(custom(opt_positive_amount))]
    pub base_price: Option<Decimal>,
    #[garde(custom(opt_amount))]
    pub cleaning_fee: Option<Decimal>,
    #[garde(custom(opt_amount))]
    pub service_fee: Option<Decimal>,
    #[garde(custom(opt_amount))]
    pub taxes: Option<Decimal>,
    #[garde(custom(opt_positive_amount))]
    pub total_amount: Option<Decimal>,
    #[garde(skip)]
    pub booking_status: Option<BookingStatus>,
    #[garde(skip)]
    pub payment_status: Option<PaymentStatus>,
    #[garde(length(chars, max = 1000))]
    pub special_requests: Option<String>,
    #[garde(length(chars, max = 500))]
    pub cancellation_reason: Option<String>,
}

#[derive(new)]
pub struct UpdateBookingRequestWithId(BookingId, UpdateBookingRequest);

impl From<UpdateBookingRequestWithId> for UpdateBooking {
    fn from(value: UpdateBookingRequestWithId) -> Self {
        let UpdateBookingRequestWithId(
            booking_id,
            UpdateBookingRequest {
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
            },
        ) = value;
        UpdateBooking {
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
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BookingResponse {
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

impl From<Booking> for BookingResponse {
    fn from(value: Booking) -> Self {
        let Booking {
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
        Self {
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
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::AppError;

    fn request(check_in: &str, check_out: &str) -> CreateBookingRequest {
        serde_json::from_value(serde_json::json!({
            "property_id": 1,
            "guest_id": 2,
            "check_in_date": check_in,
            "check_out_date": check_out,
            "num_guests": 2,
            "total_nights": 99,
            "base_price": "300.00",
            "service_fee": "9.00",
            "total_amount": "309.00",
        }))
        .unwrap()
    }

    #[test]
    fn nights_come_from_the_dates() {
        let req = request("2024-08-10", "2024-08-13");
        assert!(req.validate(&()).is_ok());
        let event = req.into_event().unwrap();
        assert_eq!(event.total_nights, 3);
        assert_eq!(event.booking_status, BookingStatus::Pending);
        assert_eq!(event.payment_status, PaymentStatus::Pending);
        assert_eq!(event.taxes, Decimal::ZERO);
    }

    #[test]
    fn check_out_must_follow_check_in() {
        let req = request("2024-08-13", "2024-08-13");
        assert!(matches!(req.into_event(), Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn zero_guests_fail_validation() {
        let mut req = request("2024-08-10", "2024-08-13");
        req.num_guests = 0;
        assert!(req.validate(&()).is_err());
    }

    #[test]
    fn status_filter_parses_snake_case() {
        let query: BookingListQuery =
            serde_json::from_value(serde_json::json!({ "status": "in_progress" })).unwrap();
        let (filter, options) = query.into_parts();
        assert_eq!(filter.status, Some(BookingStatus::InProgress));
        assert_eq!(options, ListOptions::default());
    }
}
