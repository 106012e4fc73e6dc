//! Serde adapter for flags stored and transferred as `0` / `1`.

use serde::de::Error;
use serde::{Deserialize, Deserializer, Serializer};

pub fn serialize<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u8(u8::from(*value))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match i64::deserialize(deserializer)? {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(D::Error::custom(format!("expected 0 or 1, got {}", other))),
    }
}

/// Преобразовать числовой флаг из DTO в bool
pub fn from_int(field: &str, value: i64) -> Result<bool, String> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        _ => Err(format!("{} must be 0 or 1", field)),
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize)]
    struct Holder {
        #[serde(with = "super")]
        flag: bool,
    }

    #[test]
    fn test_flag_serializes_as_int() {
        let json = serde_json::to_string(&Holder { flag: true }).unwrap();
        assert_eq!(json, r#"{"flag":1}"#);
    }

    #[test]
    fn test_flag_rejects_other_values() {
        assert!(serde_json::from_str::<Holder>(r#"{"flag":2}"#).is_err());
        let h: Holder = serde_json::from_str(r#"{"flag":0}"#).unwrap();
        assert!(!h.flag);
    }

    #[test]
    fn test_from_int() {
        assert_eq!(super::from_int("descontinuado", 1), Ok(true));
        assert!(super::from_int("descontinuado", -1).is_err());
    }
}
