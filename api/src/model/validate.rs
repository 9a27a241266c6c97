//! Field rules shared by the request models, in the shape `garde(custom(..))` expects.

use rust_decimal::Decimal;

fn check_digits(value: &Decimal, precision: u32, scale: u32) -> garde::Result {
    let normalized = value.normalize();
    if normalized.scale() > scale {
        return Err(garde::Error::new(format!(
            "must have at most {scale} decimal places"
        )));
    }
    let integer_part = normalized.trunc().abs();
    let integer_digits = if integer_part.is_zero() {
        0
    } else {
        integer_part.to_string().len() as u32
    };
    if integer_digits > precision - scale {
        return Err(garde::Error::new(format!(
            "must have at most {} digits before the decimal point",
            precision - scale
        )));
    }
    Ok(())
}

fn check_range(value: &Decimal, min: Decimal, max: Decimal) -> garde::Result {
    if *value < min || *value > max {
        return Err(garde::Error::new(format!("must be between {min} and {max}")));
    }
    Ok(())
}

/// NUMERIC(10,2), strictly positive.
pub fn positive_amount(value: &Decimal, _: &()) -> garde::Result {
    if *value <= Decimal::ZERO {
        return Err(garde::Error::new("must be greater than 0"));
    }
    check_digits(value, 10, 2)
}

/// NUMERIC(10,2), zero allowed.
pub fn amount(value: &Decimal, _: &()) -> garde::Result {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(garde::Error::new("must be greater than or equal to 0"));
    }
    check_digits(value, 10, 2)
}

pub fn bathroom_count(value: &Decimal, _: &()) -> garde::Result {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(garde::Error::new("must be greater than or equal to 0"));
    }
    check_digits(value, 3, 1)
}

pub fn fee_percentage(value: &Decimal, _: &()) -> garde::Result {
    check_range(value, Decimal::ZERO, Decimal::ONE_HUNDRED)?;
    check_digits(value, 5, 2)
}

pub fn latitude(value: &Decimal, _: &()) -> garde::Result {
    check_range(value, Decimal::from(-90), Decimal::from(90))?;
    check_digits(value, 10, 8)
}

pub fn longitude(value: &Decimal, _: &()) -> garde::Result {
    check_range(value, Decimal::from(-180), Decimal::from(180))?;
    check_digits(value, 11, 8)
}

pub fn http_url(value: &str, _: &()) -> garde::Result {
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(())
    } else {
        Err(garde::Error::new("must be an http or https URL"))
    }
}

macro_rules! optional {
    ($($name:ident => $rule:ident : $ty:ty),* $(,)?) => {
        $(
            pub fn $name(value: &Option<$ty>, ctx: &()) -> garde::Result {
                match value {
                    Some(v) => $rule(v, ctx),
                    None => Ok(()),
                }
            }
        )*
    };
}

optional! {
    opt_positive_amount => positive_amount: Decimal,
    opt_amount => amount: Decimal,
    opt_bathrooms => bathroom_count: Decimal,
    opt_fee_percentage => fee_percentage: Decimal,
    opt_latitude => latitude: Decimal,
    opt_longitude => longitude: Decimal,
    opt_http_url => http_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn amounts_respect_sign_and_scale() {
        assert!(positive_amount(&dec("120.50"), &()).is_ok());
        assert!(positive_amount(&dec("0"), &()).is_err());
        assert!(positive_amount(&dec("1.005"), &()).is_err());
        assert!(amount(&dec("0.00"), &()).is_ok());
        assert!(amount(&dec("-0.01"), &()).is_err());
        // trailing zeros do not count against the scale
        assert!(amount(&dec("3.1000"), &()).is_ok());
    }

    #[test]
    fn precision_limits_integer_digits() {
        assert!(amount(&dec("99999999.99"), &()).is_ok());
        assert!(amount(&dec("100000000"), &()).is_err());
        assert!(bathroom_count(&dec("99.5"), &()).is_ok());
        assert!(bathroom_count(&dec("100"), &()).is_err());
        assert!(bathroom_count(&dec("1.25"), &()).is_err());
    }

    #[test]
    fn fee_percentage_is_bounded() {
        assert!(fee_percentage(&dec("100"), &()).is_ok());
        assert!(fee_percentage(&dec("100.01"), &()).is_err());
        assert!(fee_percentage(&dec("-1"), &()).is_err());
    }

    #[test]
    fn coordinates_are_bounded() {
        assert!(latitude(&dec("35.68123456"), &()).is_ok());
        assert!(latitude(&dec("90.00000001"), &()).is_err());
        assert!(latitude(&dec("12.123456789"), &()).is_err());
        assert!(longitude(&dec("-180"), &()).is_ok());
        assert!(longitude(&dec("180.5"), &()).is_err());
    }

    #[test]
    fn optional_rules_skip_missing_values() {
        assert!(opt_latitude(&None, &()).is_ok());
        assert!(opt_latitude(&Some(dec("91")), &()).is_err());
        assert!(opt_http_url(&Some("ftp://icons".into()), &()).is_err());
        assert!(opt_http_url(&Some("https://cdn.example.com/a.svg".into()), &()).is_ok());
    }
}
