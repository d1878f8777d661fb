//! Serde support: integers as decimal strings, rationals as `"n/d"`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::integer::Integer;
use crate::rational::Rational;

impl Serialize for Integer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Integer {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer)?
            .parse()
            .map_err(serde::de::Error::custom)
    }
}

impl Serialize for Rational {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rational {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer)?
            .parse()
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_json() {
        let n = Integer::new(10).pow(30).unwrap() * Integer::new(-7);
        let json = serde_json::to_string(&n).unwrap();
        assert_eq!(json, format!("\"-7{}\"", "0".repeat(30)));
        assert_eq!(serde_json::from_str::<Integer>(&json).unwrap(), n);
    }

    #[test]
    fn test_rational_json() {
        let r = Rational::new(Integer::new(-6), Integer::new(8)).unwrap();
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, "\"-3/4\"");
        assert_eq!(serde_json::from_str::<Rational>(&json).unwrap(), r);
        assert_eq!(serde_json::from_str::<Rational>("\"5\"").unwrap(), Rational::from(5));
    }

    #[test]
    fn test_rejects_malformed() {
        let err = serde_json::from_str::<Rational>("\"1/-2\"").unwrap_err();
        assert!(err.to_string().contains("malformed denominator"));
        assert!(serde_json::from_str::<Integer>("\"12x\"").is_err());
        assert!(serde_json::from_str::<Integer>("12").is_err());
    }
}
