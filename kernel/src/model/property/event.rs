use super::PropertyType;
use crate::model::id::{CategoryId, PropertyId, UserId};
use chrono::NaiveTime;
use rust_decimal::Decimal;

#[derive(Debug)]
pub struct CreateProperty {
    pub host_id: UserId,
    pub category_id: CategoryId,
    pub title: String,
    pub description: String,
    pub property_type: PropertyType,
    pub max_guests: i32,
    pub bedrooms: i32,
    pub beds: i32,
    pub bathrooms: Decimal,
    pub price_per_night: Decimal,
    pub cleaning_fee: Decimal,
    pub service_fee_percentage: Decimal,
    pub minimum_nights: i32,
    pub maximum_nights: i32,
    pub check_in_time: NaiveTime,
    pub check_out_time: NaiveTime,
    pub instant_book: bool,
    pub is_active: bool,
}

#[derive(Debug, Default)]
pub struct UpdateProperty {
    pub property_id: PropertyId,
    pub host_id: Option<UserId>,
    pub category_id: Option<CategoryId>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub property_type: Option<PropertyType>,
    pub max_guests: Option<i32>,
    pub bedrooms: Option<i32>,
    pub beds: Option<i32>,
    pub bathrooms: Option<Decimal>,
    pub price_per_night: Option<Decimal>,
    pub cleaning_fee: Option<Decimal>,
    pub service_fee_percentage: Option<Decimal>,
    pub minimum_nights: Option<i32>,
    pub maximum_nights: Option<i32>,
    pub check_in_time: Option<NaiveTime>,
    pub check_out_time: Option<NaiveTime>,
    pub instant_book: Option<bool>,
    pub is_active: Option<bool>,
}

impl UpdateProperty {
    pub fn is_empty(&self) -> bool {
        self.host_id.is_none()
            && self.category_id.is_none()
            && self.title.is_none()
            && self.description.is_none()
            && self.property_type.is_none()
            && self.max_guests.is_none()
            && self.bedrooms.is_none()
            && self.beds.is_none()
            && self.bathrooms.is_none()
            && self.price_per_night.is_none()
            && self.cleaning_fee.is_none()
            && self.service_fee_percentage.is_none()
            && self.minimum_nights.is_none()
            && self.maximum_nights.is_none()
            && self.check_in_time.is_none()
            && self.check_out_time.is_none()
            && self.instant_book.is_none()
            && self.is_active.is_none()
    }

    pub fn touches_night_range(&self) -> bool {
        self.minimum_nights.is_some() || self.maximum_nights.is_some()
    }

    /// The `(minimum_nights, maximum_nights)` pair the row will hold once applied.
    pub fn merged_night_range(&self, stored_minimum: i32, stored_maximum: i32) -> (i32, i32) {
        (
            self.minimum_nights.unwrap_or(stored_minimum),
            self.maximum_nights.unwrap_or(stored_maximum),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_update_is_detected() {
        let update = UpdateProperty {
            property_id: PropertyId::new(1),
            ..Default::default()
        };
        assert!(update.is_empty());
        assert!(!update.touches_night_range());
    }

    #[test]
    fn single_sided_night_update_merges_with_stored_value() {
        let update = UpdateProperty {
            property_id: PropertyId::new(1),
            maximum_nights: Some(2),
            ..Default::default()
        };
        assert!(!update.is_empty());
        assert!(update.touches_night_range());
        assert_eq!(update.merged_night_range(5, 30), (5, 2));
    }
}
