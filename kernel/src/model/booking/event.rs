use super::{BookingStatus, PaymentStatus};
use crate::model::id::{BookingId, PropertyId, UserId};
use chrono::NaiveDate;
use rust_decimal::Decimal;

#[derive(Debug)]
pub struct CreateBooking {
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
}

/// Partial booking change. `total_nights` is fixed at creation and is not part of it.
#[derive(Debug, Default)]
pub struct UpdateBooking {
    pub booking_id: BookingId,
    pub check_in_date: Option<NaiveDate>,
    pub check_out_date: Option<NaiveDate>,
    pub num_guests: Option<i32>,
    pub base_price: Option<Decimal>,
    pub cleaning_fee: Option<Decimal>,
    pub service_fee: Option<Decimal>,
    pub taxes: Option<Decimal>,
    pub total_amount: Option<Decimal>,
    pub booking_status: Option<BookingStatus>,
    pub payment_status: Option<PaymentStatus>,
    pub special_requests: Option<String>,
    pub cancellation_reason: Option<String>,
}

impl UpdateBooking {
    pub fn is_empty(&self) -> bool {
        self.check_in_date.is_none()
            && self.check_out_date.is_none()
            && self.num_guests.is_none()
            && self.base_price.is_none()
            && self.cleaning_fee.is_none()
            && self.service_fee.is_none()
            && self.taxes.is_none()
            && self.total_amount.is_none()
            && self.booking_status.is_none()
            && self.payment_status.is_none()
            && self.special_requests.is_none()
            && self.cancellation_reason.is_none()
    }

    /// A cancellation reason always stamps the cancellation time.
    pub fn stamps_cancellation(&self) -> bool {
        self.cancellation_reason.is_some()
    }
}
