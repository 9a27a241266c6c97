use rust_decimal::Decimal;
use shared::error::{AppError, AppResult};
use std::str::FromStr;

pub mod amenity;
pub mod booking;
pub mod category;
pub mod house_rule;
pub mod photo;
pub mod property;
pub mod property_address;
pub mod property_amenity;
pub mod user;
pub mod user_address;

/// Enum columns are stored as text; anything unknown means the row cannot be trusted.
pub(crate) fn parse_enum<T: FromStr>(column: &str, raw: &str) -> AppResult<T> {
    raw.parse().map_err(|_| {
        AppError::ConversionEntityError(format!("unexpected {column} value: {raw}"))
    })
}

pub(crate) const MONEY_SCALE: u32 = 2;
pub(crate) const BATHROOM_SCALE: u32 = 1;
pub(crate) const COORDINATE_SCALE: u32 = 8;

/// Zero NUMERIC values decode without their scale; put the column scale back.
pub(crate) fn with_scale(mut value: Decimal, scale: u32) -> Decimal {
    value.rescale(scale);
    value
}

#[cfg(test)]
mod tests {
    use super::{parse_enum, with_scale, MONEY_SCALE};
    use rust_decimal::Decimal;
    use kernel::model::booking::BookingStatus;
    use shared::error::AppError;

    #[test]
    fn unknown_enum_text_is_a_conversion_error() {
        assert_eq!(
            parse_enum::<BookingStatus>("booking_status", "confirmed").unwrap(),
            BookingStatus::Confirmed
        );
        assert!(matches!(
            parse_enum::<BookingStatus>("booking_status", "archived"),
            Err(AppError::ConversionEntityError(_))
        ));
    }

    #[test]
    fn zero_amount_keeps_two_decimal_places() {
        let zero = with_scale(Decimal::ZERO, MONEY_SCALE);
        assert_eq!(zero.to_string(), "0.00");
        assert_eq!(serde_json::to_value(zero).unwrap(), serde_json::json!("0.00"));
        assert_eq!(with_scale(Decimal::new(105, 1), MONEY_SCALE).to_string(), "10.50");
    }
}
