use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($id_type:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            Default,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            Serialize,
            Deserialize,
            sqlx::Type,
        )]
        #[serde(transparent)]
        #[sqlx(transparent)]
        pub struct $id_type(i64);

        impl $id_type {
            pub fn new(raw: i64) -> Self {
                Self(raw)
            }

            pub fn raw(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $id_type {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$id_type> for i64 {
            fn from(value: $id_type) -> Self {
                value.0
            }
        }

        impl std::fmt::Display for $id_type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

define_id!(UserId);
define_id!(UserAddressId);
define_id!(CategoryId);
define_id!(PropertyId);
define_id!(PropertyAddressId);
define_id!(AmenityId);
define_id!(PhotoId);
define_id!(HouseRuleId);
define_id!(BookingId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_serialize_as_plain_integers() {
        let id = PropertyId::new(42);
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");
        let back: PropertyId = serde_json::from_str("42").unwrap();
        assert_eq!(back, id);
        assert_eq!(id.to_string(), "42");
    }
}
