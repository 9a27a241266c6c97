use super::{
    default_limit, default_skip, default_true, time,
    validate::{
        amount, bathroom_count, fee_percentage, opt_amount, opt_bathrooms, opt_fee_percentage,
        opt_positive_amount, positive_amount,
    },
};
use chrono::{DateTime, NaiveTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::{CategoryId, PropertyId, UserId},
    list::ListOptions,
    property::{
        ensure_night_range,
        event::{CreateProperty, UpdateProperty},
        Property, PropertyListFilter, PropertyType,
    },
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::error::AppResult;

fn default_one() -> i32 {
    1
}

fn default_maximum_nights() -> i32 {
    365
}

fn default_bathrooms() -> Decimal {
    Decimal::new(10, 1)
}

fn default_cleaning_fee() -> Decimal {
    Decimal::new(0, 2)
}

fn default_service_fee_percentage() -> Decimal {
    Decimal::new(300, 2)
}

fn default_check_in_time() -> NaiveTime {
    NaiveTime::from_hms_opt(15, 0, 0).unwrap_or_default()
}

fn default_check_out_time() -> NaiveTime {
    NaiveTime::from_hms_opt(11, 0, 0).unwrap_or_default()
}

#[derive(Debug, Deserialize, Validate)]
pub struct PropertyListQuery {
    #[garde(range(min = 0))]
    #[serde(default = "default_skip")]
    pub skip: i64,
    #[garde(range(min = 0))]
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[garde(skip)]
    pub min_price: Option<Decimal>,
    #[garde(skip)]
    pub max_price: Option<Decimal>,
    #[garde(skip)]
    pub property_type: Option<PropertyType>,
    #[garde(skip)]
    pub category_id: Option<CategoryId>,
}

impl PropertyListQuery {
    pub fn into_parts(self) -> (PropertyListFilter, ListOptions) {
        let PropertyListQuery {
            skip,
            limit,
            min_price,
            max_price,
            property_type,
            category_id,
        } = self;
        (
            PropertyListFilter {
                min_price,
                max_price,
                property_type,
                category_id,
            },
            ListOptions { skip, limit },
        )
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePropertyRequest {
    #[garde(skip)]
    pub host_id: UserId,
    #[garde(skip)]
    pub category_id: CategoryId,
    #[garde(length(chars, min = 1, max = 255))]
    pub title: String,
    #[garde(skip)]
    pub description: String,
    #[garde(skip)]
    pub property_type: PropertyType,
    #[garde(range(min = 1))]
    #[serde(default = "default_one")]
    pub max_guests: i32,
    #[garde(range(min = 0))]
    #[serde(default)]
    pub bedrooms: i32,
    #[garde(range(min = 1))]
    #[serde(default = "default_one")]
    pub beds: i32,
    #[garde(custom(bathroom_count))]
    #[serde(default = "default_bathrooms")]
    pub bathrooms: Decimal,
    #[garde(custom(positive_amount))]
    pub price_per_night: Decimal,
    #[garde(custom(amount))]
    #[serde(default = "default_cleaning_fee")]
    pub cleaning_fee: Decimal,
    #[garde(custom(fee_percentage))]
    #[serde(default = "default_service_fee_percentage")]
    pub service_fee_percentage: Decimal,
    #[garde(range(min = 1))]
    #[serde(default = "default_one")]
    pub minimum_nights: i32,
    #[garde(range(min = 1))]
    #[serde(default = "default_maximum_nights")]
    pub maximum_nights: i32,
    #[garde(skip)]
    #[serde(default = "default_check_in_time", with = "time")]
    pub check_in_time: NaiveTime,
    #[garde(skip)]
    #[serde(default = "default_check_out_time", with = "time")]
    pub check_out_time: NaiveTime,
    #[garde(skip)]
    #[serde(default)]
    pub instant_book: bool,
    #[garde(skip)]
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl CreatePropertyRequest {
    pub fn check_night_range(&self) -> AppResult<()> {
        ensure_night_range(self.minimum_nights, self.maximum_nights)
    }
}

impl From<CreatePropertyRequest> for CreateProperty {
    fn from(value: CreatePropertyRequest) -> Self {
        let CreatePropertyRequest {
            host_id,
            category_id,
            title,
            description,
            property_type,
            max_guests,
            bedrooms,
            beds,
            bathrooms,
            price_per_night,
            cleaning_fee,
            service_fee_percentage,
            minimum_nights,
            maximum_nights,
            check_in_time,
            check_out_time,
            instant_book,
            is_active,
        } = value;
        CreateProperty {
            host_id,
            category_id,
            title,
            description,
            property_type,
            max_guests,
            bedrooms,
            beds,
            bathrooms,
            price_per_night,
            cleaning_fee,
            service_fee_percentage,
            minimum_nights,
            maximum_nights,
            check_in_time,
            check_out_time,
            instant_book,
            is_active,
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdatePropertyRequest {
    #[garde(skip)]
    pub host_id: Option<UserId>,
    #[garde(skip)]
    pub category_id: Option<CategoryId>,
    #[garde(length(chars, min = 1, max = 255))]
    pub title: Option<String>,
    #[garde(skip)]
    pub description: Option<String>,
    #[garde(skip)]
    pub property_type: Option<PropertyType>,
    #[garde(range(min = 1))]
    pub max_guests: Option<i32>,
    #[garde(range(min = 0))]
    pub bedrooms: Option<i32>,
    #[garde(range(min = 1))]
    pub beds: Option<i32>,
    #[garde(custom(opt_bathrooms))]
    pub bathrooms: Option<Decimal>,
    #[garde(custom(opt_positive_amount))]
    pub price_per_night: Option<Decimal>,
    #[garde(custom(opt_amount))]
    pub cleaning_fee: Option<Decimal>,
    #[garde(custom(opt_fee_percentage))]
    pub service_fee_percentage: Option<Decimal>,
    #[garde(range(min = 1))]
    pub minimum_nights: Option<i32>,
    #[garde(range(min = 1))]
    pub maximum_nights: Option<i32>,
    #[garde(skip)]
    #[serde(default, deserialize_with = "time::option::deserialize")]
    pub check_in_time: Option<NaiveTime>,
    #[garde(skip)]
    #[serde(default, deserialize_with = "time::option::deserialize")]
    pub check_out_time: Option<NaiveTime>,
    #[garde(skip)]
    pub instant_book: Option<bool>,
    #[garde(skip)]
    pub is_active: Option<bool>,
}

impl UpdatePropertyRequest {
    /// Only decidable here when both bounds arrive together; the repository handles the rest.
    pub fn check_night_range(&self) -> AppResult<()> {
        match (self.minimum_nights, self.maximum_nights) {
            (Some(minimum), Some(maximum)) => ensure_night_range(minimum, maximum),
            _ => Ok(()),
        }
    }
}

#[derive(new)]
pub struct UpdatePropertyRequestWithId(PropertyId, UpdatePropertyRequest);

impl From<UpdatePropertyRequestWithId> for UpdateProperty {
    fn from(value: UpdatePropertyRequestWithId) -> Self {
        let UpdatePropertyRequestWithId(
            property_id,
            UpdatePropertyRequest {
                host_id,
                category_id,
                title,
                description,
                property_type,
                max_guests,
                bedrooms,
                beds,
                bathrooms,
                price_per_night,
                cleaning_fee,
                service_fee_percentage,
                minimum_nights,
                maximum_nights,
                check_in_time,
                check_out_time,
                instant_book,
                is_active,
            },
        ) = value;
        UpdateProperty {
            property_id,
            host_id,
            category_id,
            title,
            description,
            property_type,
            max_guests,
            bedrooms,
            beds,
            bathrooms,
            price_per_night,
            cleaning_fee,
            service_fee_percentage,
            minimum_nights,
            maximum_nights,
            check_in_time,
            check_out_time,
            instant_book,
            is_active,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PropertyResponse {
    pub property_id: PropertyId,
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
    #[serde(serialize_with = "time::serialize")]
    pub check_in_time: NaiveTime,
    #[serde(serialize_with = "time::serialize")]
    pub check_out_time: NaiveTime,
    pub instant_book: bool,
    pub is_active: bool,
    pub host_first_name: String,
    pub host_last_name: String,
    pub category_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Property> for PropertyResponse {
    fn from(value: Property) -> Self {
        let Property {
            property_id,
            host_id,
            category_id,
            title,
            description,
            property_type,
            max_guests,
            bedrooms,
            beds,
            bathrooms,
            price_per_night,
            cleaning_fee,
            service_fee_percentage,
            minimum_nights,
            maximum_nights,
            check_in_time,
            check_out_time,
            instant_book,
            is_active,
            host,
            category_name,
            created_at,
            updated_at,
        } = value;
        Self {
            property_id,
            host_id,
            category_id,
            title,
            description,
            property_type,
            max_guests,
            bedrooms,
            beds,
            bathrooms,
            price_per_night,
            cleaning_fee,
            service_fee_percentage,
            minimum_nights,
            maximum_nights,
            check_in_time,
            check_out_time,
            instant_book,
            is_active,
            host_first_name: host.first_name,
            host_last_name: host.last_name,
            category_name,
            created_at,
            updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::model::property::PropertyHost;
    use shared::error::AppError;

    fn minimal() -> serde_json::Value {
        serde_json::json!({
            "host_id": 1,
            "category_id": 2,
            "title": "Seaside flat",
            "description": "Two minutes to the beach",
            "property_type": "entire_place",
            "price_per_night": "85.00",
        })
    }

    #[test]
    fn create_request_fills_defaults() {
        let req: CreatePropertyRequest = serde_json::from_value(minimal()).unwrap();
        assert_eq!(req.max_guests, 1);
        assert_eq!(req.bedrooms, 0);
        assert_eq!(req.beds, 1);
        assert_eq!(req.bathrooms, Decimal::new(10, 1));
        assert_eq!(req.cleaning_fee, Decimal::ZERO);
        assert_eq!(req.service_fee_percentage, Decimal::new(3, 0));
        assert_eq!((req.minimum_nights, req.maximum_nights), (1, 365));
        assert_eq!(req.check_in_time, NaiveTime::from_hms_opt(15, 0, 0).unwrap());
        assert_eq!(req.check_out_time, NaiveTime::from_hms_opt(11, 0, 0).unwrap());
        assert!(!req.instant_book);
        assert!(req.is_active);
        assert!(req.validate(&()).is_ok());
        assert!(req.check_night_range().is_ok());
    }

    #[test]
    fn inverted_night_range_is_rejected_on_create() {
        let mut body = minimal();
        body["minimum_nights"] = 5.into();
        body["maximum_nights"] = 3.into();
        let req: CreatePropertyRequest = serde_json::from_value(body).unwrap();
        assert!(matches!(
            req.check_night_range(),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn update_checks_night_range_only_when_both_present() {
        let one_sided = UpdatePropertyRequest {
            maximum_nights: Some(2),
            ..Default::default()
        };
        assert!(one_sided.check_night_range().is_ok());

        let both = UpdatePropertyRequest {
            minimum_nights: Some(4),
            maximum_nights: Some(2),
            ..Default::default()
        };
        assert!(both.check_night_range().is_err());
    }

    #[test]
    fn unknown_property_type_does_not_parse() {
        let mut body = minimal();
        body["property_type"] = "castle".into();
        assert!(serde_json::from_value::<CreatePropertyRequest>(body).is_err());
    }

    #[test]
    fn response_writes_times_as_hours_and_minutes_and_money_as_text() {
        let now = Utc::now();
        let response = PropertyResponse::from(Property {
            property_id: PropertyId::new(9),
            host_id: UserId::new(1),
            category_id: CategoryId::new(2),
            title: "Seaside flat".into(),
            description: "Two minutes to the beach".into(),
            property_type: PropertyType::PrivateRoom,
            max_guests: 2,
            bedrooms: 1,
            beds: 1,
            bathrooms: Decimal::new(10, 1),
            price_per_night: Decimal::new(8500, 2),
            cleaning_fee: Decimal::new(0, 2),
            service_fee_percentage: Decimal::new(300, 2),
            minimum_nights: 1,
            maximum_nights: 365,
            check_in_time: NaiveTime::from_hms_opt(15, 0, 0).unwrap(),
            check_out_time: NaiveTime::from_hms_opt(11, 30, 0).unwrap(),
            instant_book: false,
            is_active: true,
            host: PropertyHost {
                first_name: "Rin".into(),
                last_name: "Ono".into(),
            },
            category_name: "Apartment".into(),
            created_at: now,
            updated_at: now,
        });
        let json = serde_json::to_value(response).unwrap();
        assert_eq!(json["check_in_time"], "15:00");
        assert_eq!(json["check_out_time"], "11:30");
        assert_eq!(json["price_per_night"], "85.00");
        assert_eq!(json["property_type"], "private_room");
        assert_eq!(json["host_first_name"], "Rin");
    }
}
