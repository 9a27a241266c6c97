use crate::model::{
    booking::{
        event::{CreateBooking, UpdateBooking},
        Booking, BookingListFilter,
    },
    id::BookingId,
    list::ListOptions,
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn create(&self, event: CreateBooking) -> AppResult<Booking>;
    // Newest first.
    async fn find_all(
        &self,
        filter: BookingListFilter,
        options: ListOptions,
    ) -> AppResult<Vec<Booking>>;
    async fn find_by_id(&self, booking_id: BookingId) -> AppResult<Option<Booking>>;
    async fn update(&self, event: UpdateBooking) -> AppResult<Booking>;
    async fn delete(&self, booking_id: BookingId) -> AppResult<()>;
}
