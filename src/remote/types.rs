// Remote authority response types.
// Defines structs for deserializing documentation service responses.

use serde::Deserialize;

/// A permitted value as returned by the values-list query: title plus
/// unrendered description markup. Order within the response is significant.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawValueEntry {
    #[serde(rename = "TITLE")]
    pub title: String,
    #[serde(rename = "DESCRIPTION", default)]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_raw_value() {
        let json = r#"{"TITLE": "inherit", "DESCRIPTION": "''Inherited'' value."}"#;
        let value: RawValueEntry = serde_json::from_str(json).unwrap();
        assert_eq!(value.title, "inherit");
        assert_eq!(value.description, "''Inherited'' value.");
    }

    #[test]
    fn test_description_defaults_empty() {
        let json = r#"{"TITLE": "auto"}"#;
        let value: RawValueEntry = serde_json::from_str(json).unwrap();
        assert_eq!(value.title, "auto");
        assert!(value.description.is_empty());
    }
}
