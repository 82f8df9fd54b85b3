use serde::de::DeserializeOwned;

pub type SerdePathError = serde_path_to_error::Error<serde_json::Error>;

/// JSON deserialization that reports the path to the offending field,
/// so that API response mismatches are debuggable from the error alone.
pub trait SerdeResponseParse {
    fn serde_parse_custom<T>(&self) -> Result<T, SerdePathError>
    where
        T: DeserializeOwned;
}

impl SerdeResponseParse for str {
    fn serde_parse_custom<T>(&self) -> Result<T, SerdePathError>
    where
        T: DeserializeOwned,
    {
        serde_path_to_error::deserialize(&mut serde_json::Deserializer::from_str(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, serde::Deserialize)]
    struct Outer {
        #[allow(dead_code)]
        inner: Inner,
    }

    #[derive(Debug, serde::Deserialize)]
    struct Inner {
        #[allow(dead_code)]
        value: u64,
    }

    #[test]
    fn error_carries_path() {
        let result = r#"{"inner": {"value": "not a number"}}"#.serde_parse_custom::<Outer>();
        let err = result.unwrap_err();
        assert_eq!(err.path().to_string(), "inner.value");
    }

    #[test]
    fn parses_valid_json() {
        let outer = r#"{"inner": {"value": 3}}"#.serde_parse_custom::<Outer>();
        assert!(outer.is_ok());
    }
}
