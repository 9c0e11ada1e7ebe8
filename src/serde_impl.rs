//! String-form serde support, enabled with the `serde` feature.
//!
//! Both media type models serialize as their canonical header value and
//! deserialize through the header parser.

use crate::immutable::ImmutableMediaType;
use crate::model::MediaType;
use crate::mutable::MutableMediaType;
use ::serde::de::{self, Deserialize, Deserializer};
use ::serde::ser::{self, Serialize, Serializer};

fn serialize_media_type<M, S>(mt: &M, serializer: S) -> Result<S::Ok, S::Error>
where
    M: MediaType,
    S: Serializer,
{
    let value = mt.format().map_err(<S::Error as ser::Error>::custom)?;
    serializer.serialize_str(&value)
}

impl Serialize for MutableMediaType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_media_type(self, serializer)
    }
}

impl Serialize for ImmutableMediaType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_media_type(self, serializer)
    }
}

impl<'de> Deserialize<'de> for MutableMediaType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        MutableMediaType::parse(&value).map_err(<D::Error as de::Error>::custom)
    }
}

impl<'de> Deserialize<'de> for ImmutableMediaType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        MutableMediaType::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_as_header_value() {
        let mt = ImmutableMediaType::parse("application/vnd.api+json; charset=utf-8").unwrap();
        let json = serde_json::to_string(&mt).unwrap();
        assert_eq!(json, "\"application/vnd.api+json; charset=utf-8\"");
    }

    #[test]
    fn test_deserialize_from_header_value() {
        let mt: MutableMediaType = serde_json::from_str("\"text/html; charset=UTF-8\"").unwrap();
        assert_eq!(mt.sub, "html");
        assert_eq!(mt.charset(), Some("UTF-8"));

        let snapshot: ImmutableMediaType = serde_json::from_str("\"image/svg+xml\"").unwrap();
        assert_eq!(snapshot.suffix(), "xml");
    }

    #[test]
    fn test_errors_surface() {
        assert!(serde_json::from_str::<ImmutableMediaType>("\"text/plain; x\"").is_err());

        let mt = MutableMediaType::new().with_main("text").with_parameter("a b", "c");
        assert!(serde_json::to_string(&mt).is_err());
    }
}
