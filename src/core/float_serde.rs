//! Serde adapters that carry NaN and ±∞ through text formats.
//!
//! Finite values are written as plain numbers. Non-finite values are written
//! as the strings `"NaN"`, `"inf"` and `"-inf"`, and `null` reads back as NaN.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum Repr {
    Number(f64),
    Special(String),
    Missing(()),
}

impl From<f64> for Repr {
    fn from(value: f64) -> Self {
        if value.is_finite() {
            Repr::Number(value)
        } else if value.is_nan() {
            Repr::Special("NaN".to_string())
        } else if value > 0.0 {
            Repr::Special("inf".to_string())
        } else {
            Repr::Special("-inf".to_string())
        }
    }
}

impl Repr {
    fn into_f64<E: serde::de::Error>(self) -> Result<f64, E> {
        match self {
            Repr::Number(v) => Ok(v),
            Repr::Missing(()) => Ok(f64::NAN),
            Repr::Special(s) => match s.as_str() {
                "NaN" | "nan" => Ok(f64::NAN),
                "inf" | "+inf" | "Infinity" => Ok(f64::INFINITY),
                "-inf" | "-Infinity" => Ok(f64::NEG_INFINITY),
                other => Err(E::custom(format!("invalid float literal {:?}", other))),
            },
        }
    }
}

pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    Repr::from(*value).serialize(serializer)
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Repr::deserialize(deserializer)?.into_f64()
}

/// Same encoding for every element of a `Vec<f64>`.
pub mod vec {
    use super::Repr;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(values: &[f64], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(values.iter().map(|&v| Repr::from(v)))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<f64>, D::Error> {
        Vec::<Repr>::deserialize(deserializer)?
            .into_iter()
            .map(Repr::into_f64)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize)]
    struct Sample {
        #[serde(with = "crate::core::float_serde")]
        scalar: f64,
        #[serde(with = "crate::core::float_serde::vec")]
        values: Vec<f64>,
    }

    #[test]
    fn test_non_finite_values_survive_json() {
        let sample = Sample {
            scalar: f64::NEG_INFINITY,
            values: vec![f64::NAN, 1.5, f64::INFINITY, -0.25],
        };
        let json = serde_json::to_string(&sample).unwrap();
        assert_eq!(json, r#"{"scalar":"-inf","values":["NaN",1.5,"inf",-0.25]}"#);

        let back: Sample = serde_json::from_str(&json).unwrap();
        assert_eq!(back.scalar, f64::NEG_INFINITY);
        assert!(back.values[0].is_nan());
        assert_eq!(back.values[1], 1.5);
        assert_eq!(back.values[2], f64::INFINITY);
        assert_eq!(back.values[3], -0.25);
    }

    #[test]
    fn test_null_and_integers_read_back() {
        let back: Sample = serde_json::from_str(r#"{"scalar":null,"values":[3,null]}"#).unwrap();
        assert!(back.scalar.is_nan());
        assert_eq!(back.values[0], 3.0);
        assert!(back.values[1].is_nan());
    }

    #[test]
    fn test_unknown_literal_rejected() {
        let parsed: Result<Sample, _> = serde_json::from_str(r#"{"scalar":"huge","values":[]}"#);
        assert!(parsed.is_err());
    }
}
