//! Serialization of Decimal.
//! A value is serialized as a string in the same form as `to_json`.

use crate::ctx::default_context;
use crate::ext::Decimal;
use serde::{Serialize, Serializer};

impl Serialize for Decimal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_json(&default_context()))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::to_string;

    use crate::ext::Decimal;
    use crate::ext::NAN;
    use crate::ext::NEG_ZERO;

    #[test]
    fn to_json() {
        assert_eq!(to_string(&Decimal::from_i32(-42)).unwrap(), "\"-42\"");
        assert_eq!(to_string(&"0.3".parse::<Decimal>().unwrap()).unwrap(), "\"0.3\"");
        assert_eq!(to_string(&"1e-30".parse::<Decimal>().unwrap()).unwrap(), "\"1e-30\"");
        assert_eq!(to_string(&NEG_ZERO).unwrap(), "\"-0\"");
        assert_eq!(to_string(&NAN).unwrap(), "\"NaN\"");
    }
}
