//! Deserialization of Decimal.
//! Accepts a string literal or a number.

use core::fmt::Formatter;
use core::str::FromStr;

use crate::ext::Decimal;
use serde::de::Error;
use serde::de::Visitor;
use serde::{Deserialize, Deserializer};

pub struct DecimalVisitor {}

impl<'de> Deserialize<'de> for Decimal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DecimalVisitor {})
    }
}

impl<'de> Visitor<'de> for DecimalVisitor {
    type Value = Decimal;

    fn expecting(&self, formatter: &mut Formatter) -> core::fmt::Result {
        write!(formatter, "a decimal literal string or a number")
    }

    fn visit_u64<E: Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Decimal::from_u64(v))
    }

    fn visit_i64<E: Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Decimal::from_i64(v))
    }

    fn visit_f64<E: Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(Decimal::from_f64(v))
    }

    fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
        Decimal::from_str(v).map_err(|e| Error::custom(format!("{e:?}")))
    }

    fn visit_string<E: Error>(self, v: String) -> Result<Self::Value, E> {
        self.visit_str(&v)
    }
}

#[cfg(test)]
mod tests {

    use core::str::FromStr;

    use serde_json::from_str;

    use crate::ext::Decimal;

    #[test]
    fn from_json() {
        let x = from_str::<Decimal>("\"-0\"").unwrap();
        assert!(x.is_zero() && x.is_neg());

        assert_eq!(Decimal::from_u8(7), from_str::<Decimal>("7").unwrap());
        assert_eq!(Decimal::from_i8(-7), from_str::<Decimal>("-7").unwrap());

        let x = Decimal::from_str("0.3").unwrap();
        assert_eq!(x, from_str::<Decimal>("0.3").unwrap());
        assert_eq!(x, from_str::<Decimal>("\"0.3\"").unwrap());

        let x = Decimal::from_str("-1.5e-300").unwrap();
        assert_eq!(x, from_str::<Decimal>("\"-1.5e-300\"").unwrap());

        assert!(from_str::<Decimal>("\"NaN\"").unwrap().is_nan());
        assert!(from_str::<Decimal>("\"abc\"").is_err());
        assert!(from_str::<Decimal>("true").is_err());
    }
}
