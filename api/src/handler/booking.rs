use crate::{
    extractor::{AppJson, AppPath, AppQuery, AuthorizedClient},
    model::{
        booking::{
            BookingListQuery, BookingResponse, CreateBookingRequest, UpdateBookingRequest,
            UpdateBookingRequestWithId,
        },
        MessageResponse,
    },
};
use axum::{extract::State, http::StatusCode, Json};
use garde::Validate;
use kernel::model::{booking::event::UpdateBooking, id::BookingId};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn register_booking(
    _client: AuthorizedClient,
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<CreateBookingRequest>,
) -> AppResult<(StatusCode, Json<BookingResponse>)> {
    req.validate(&())?;

    let create_booking = req.into_event()?;
    registry
        .booking_repository()
        .create(create_booking)
        .await
        .map(|booking| (StatusCode::CREATED, Json(booking.into())))
}

/// Newest bookings first.
pub async fn show_booking_list(
    _client: AuthorizedClient,
    AppQuery(query): AppQuery<BookingListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<BookingResponse>>> {
    query.validate(&())?;

    let (filter, options) = query.into_parts();
    registry
        .booking_repository()
        .find_all(filter, options)
        .await
        .map(|bookings| bookings.into_iter().map(BookingResponse::from).collect())
        .map(Json)
}

pub async fn show_booking(
    _client: AuthorizedClient,
    AppPath(booking_id): AppPath<BookingId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingResponse>> {
    registry
        .booking_repository()
        .find_by_id(booking_id)
        .await
        .and_then(|booking| match booking {
            Some(booking) => Ok(Json(booking.into())),
            None => Err(AppError::EntityNotFound("Booking not found".into())),
        })
}

pub async fn update_booking(
    _client: AuthorizedClient,
    AppPath(booking_id): AppPath<BookingId>,
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<UpdateBookingRequest>,
) -> AppResult<Json<BookingResponse>> {
    req.validate(&())?;

    let update_booking: UpdateBooking = UpdateBookingRequestWithId::new(booking_id, req).into();
    if update_booking.is_empty() {
        return Err(AppError::NoFieldsToUpdate);
    }

    registry
        .booking_repository()
        .update(update_booking)
        .await
        .map(|booking| Json(booking.into()))
}

pub async fn delete_booking(
    _client: AuthorizedClient,
    AppPath(booking_id): AppPath<BookingId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<MessageResponse>> {
    registry
        .booking_repository()
        .delete(booking_id)
        .await
        .map(|_| Json(MessageResponse::new("Booking deleted successfully")))
}
