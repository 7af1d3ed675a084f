/// Building blocks shared by every request, result and value type.
///
/// A shape is a struct of optional fields. The [`shape!`] macro declares the
/// struct and generates its accessors, fluent setters, map-entry helpers and
/// `Display`; equality and hashing come from derives, so an unset field is
/// always a distinct state from any concrete value.

use base64::{engine::general_purpose, Engine as _};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::domain::errors::ModelError;

/// How a field value is rendered inside a shape's `Display` output.
pub trait FieldDisplay {
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    fn fmt_field(&self, name: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", name)?;
        self.fmt_value(f)
    }
}

impl FieldDisplay for String {
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

impl FieldDisplay for bool {
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl FieldDisplay for i32 {
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl FieldDisplay for DateTime<Utc> {
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rfc3339_opts(SecondsFormat::Secs, true))
    }
}

impl<T: FieldDisplay> FieldDisplay for Vec<T> {
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            item.fmt_value(f)?;
        }
        f.write_str("]")
    }
}

impl<V: FieldDisplay> FieldDisplay for BTreeMap<String, V> {
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}=", key)?;
            value.fmt_value(f)?;
        }
        f.write_str("}")
    }
}

/// Writes `{Name: value,Other: value}` while skipping unset fields.
pub struct FieldWriter<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    wrote_any: bool,
}

impl<'a, 'b> FieldWriter<'a, 'b> {
    pub fn begin(f: &'a mut fmt::Formatter<'b>) -> Result<Self, fmt::Error> {
        f.write_str("{")?;
        Ok(Self { f, wrote_any: false })
    }

    pub fn field<T: FieldDisplay>(mut self, field: &str, value: Option<&T>) -> Result<Self, fmt::Error> {
        if let Some(value) = value {
            if self.wrote_any {
                self.f.write_str(",")?;
            }
            value.fmt_field(&display_name(field), self.f)?;
            self.wrote_any = true;
        }
        Ok(self)
    }

    pub fn finish(self) -> fmt::Result {
        self.f.write_str("}")
    }
}

/// `api_gateway_managed` -> `ApiGatewayManaged`.
pub fn display_name(field: &str) -> String {
    field
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

/// Map-valued fields: keys are always strings, `Value` is the entry type.
pub trait EntryMap {
    type Value;
}

impl<V> EntryMap for BTreeMap<String, V> {
    type Value = V;
}

/// Inserts one entry, creating the map when unset. An existing key is left
/// untouched and reported.
pub fn insert_entry<V>(
    map: &mut Option<BTreeMap<String, V>>,
    key: String,
    value: V,
) -> Result<(), ModelError> {
    let entries = map.get_or_insert_with(BTreeMap::new);
    if entries.contains_key(&key) {
        return Err(ModelError::DuplicateKey { key });
    }
    entries.insert(key, value);
    Ok(())
}

/// Requests-per-second rate. Compared and hashed by bit pattern so shapes
/// holding it stay `Eq + Hash`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RateLimit(f64);

impl RateLimit {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl From<f64> for RateLimit {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl PartialEq for RateLimit {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for RateLimit {}

impl Hash for RateLimit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl FieldDisplay for RateLimit {
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque binary payload. Rendered as base64 in JSON and never dumped by
/// `Display`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Blob(Vec<u8>);

impl Blob {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

impl From<Vec<u8>> for Blob {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for Blob {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl Serialize for Blob {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&general_purpose::STANDARD.encode(&self.0))
    }
}

impl<'de> Deserialize<'de> for Blob {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        general_purpose::STANDARD
            .decode(encoded.as_bytes())
            .map(Blob)
            .map_err(serde::de::Error::custom)
    }
}

impl FieldDisplay for Blob {
    fn fmt_value(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Ok(())
    }

    fn fmt_field(&self, name: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(name)
    }
}

/// Declares one or more shapes with the same field list.
///
/// ```ignore
/// shape! {
///     /// Represents a data model for an API.
///     pub struct Model, CreateModelResult {
///         content_type / set_content_type / with_content_type: String,
///         request_models / set_request_models / with_request_models: BTreeMap<String, String>
///             => add_request_models_entry / clear_request_models_entries,
///     }
/// }
/// ```
macro_rules! shape {
    (
        $(#[$meta:meta])*
        pub struct $($name:ident),+ { $($body:tt)* }
    ) => {
        $crate::domain::shape::shape!(@each [$($name),+] [$(#[$meta])*] { $($body)* });
    };

    (@each [] $attrs:tt $fields:tt) => {};

    (@each [$name:ident $(, $rest:ident)*] $attrs:tt $fields:tt) => {
        $crate::domain::shape::shape!(@one $attrs $name $fields);
        $crate::domain::shape::shape!(@each [$($rest),*] $attrs $fields);
    };

    (
        @one
        [$(#[$meta:meta])*]
        $name:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident / $set:ident / $with:ident : $ty:ty
                $(=> $add:ident / $clear:ident)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Default, PartialEq, Eq, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            $(
                #[serde(default, skip_serializing_if = "Option::is_none")]
                $field: Option<$ty>,
            )*
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }

            $(
                $(#[$fmeta])*
                pub fn $field(&self) -> Option<&$ty> {
                    self.$field.as_ref()
                }

                pub fn $set(&mut self, value: Option<$ty>) {
                    self.$field = value;
                }

                pub fn $with(mut self, value: impl Into<$ty>) -> Self {
                    self.$field = Some(value.into());
                    self
                }

                $(
                    pub fn $add(
                        &mut self,
                        key: impl Into<String>,
                        value: <$ty as $crate::domain::shape::EntryMap>::Value,
                    ) -> Result<&mut Self, $crate::domain::errors::ModelError> {
                        $crate::domain::shape::insert_entry(&mut self.$field, key.into(), value)?;
                        Ok(self)
                    }

                    pub fn $clear(&mut self) -> &mut Self {
                        self.$field = None;
                        self
                    }
                )?
            )*
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let writer = $crate::domain::shape::FieldWriter::begin(f)?;
                $(
                    let writer = writer.field(stringify!($field), self.$field.as_ref())?;
                )*
                writer.finish()
            }
        }

        impl $crate::domain::shape::FieldDisplay for $name {
            fn fmt_value(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(self, f)
            }
        }
    };
}

pub(crate) use shape;

/// Declares a string-backed enum. `from_value` only accepts the listed
/// tokens; decoding keeps any other non-empty token in `Unknown`.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => $token:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $($variant,)+
            /// A token this crate does not know, as received from the service.
            Unknown(String),
        }

        impl $name {
            pub const VALUES: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $token,)+
                    $name::Unknown(token) => token,
                }
            }

            pub fn is_unknown(&self) -> bool {
                matches!(self, $name::Unknown(_))
            }

            pub fn from_value(value: &str) -> Result<Self, $crate::domain::errors::ModelError> {
                if value.is_empty() {
                    return Err($crate::domain::errors::ModelError::EmptyValue);
                }
                match value {
                    $($token => Ok($name::$variant),)+
                    _ => Err($crate::domain::errors::ModelError::UnknownValue {
                        value: value.to_string(),
                    }),
                }
            }

            /// Absent input is rejected like empty input.
            pub fn from_optional_value(
                value: Option<&str>,
            ) -> Result<Self, $crate::domain::errors::ModelError> {
                match value {
                    Some(value) => Self::from_value(value),
                    None => Err($crate::domain::errors::ModelError::EmptyValue),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::domain::errors::ModelError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                Self::from_value(value)
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let token = <String as serde::Deserialize>::deserialize(deserializer)?;
                match Self::from_value(&token) {
                    Ok(value) => Ok(value),
                    Err($crate::domain::errors::ModelError::UnknownValue { value }) => {
                        Ok($name::Unknown(value))
                    }
                    Err(err) => Err(serde::de::Error::custom(err)),
                }
            }
        }

        impl $crate::domain::shape::FieldDisplay for $name {
            fn fmt_value(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub(crate) use string_enum;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    shape! {
        pub struct Sample, SampleResult {
            name / set_name / with_name: String,
            size / set_size / with_size: i32,
            labels / set_labels / with_labels: BTreeMap<String, String>
                => add_labels_entry / clear_labels_entries,
            payload / set_payload / with_payload: Blob,
        }
    }

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_one_declaration_yields_independent_types() {
        let sample = Sample::new().with_name("pets").with_size(2);
        let result = SampleResult::new().with_name("pets").with_size(2);
        assert_eq!(sample.to_string(), result.to_string());
        assert_eq!(SampleResult::new().to_string(), "{}");
    }

    #[test]
    fn test_display_name_conversion() {
        assert_eq!(display_name("api_id"), "ApiId");
        assert_eq!(display_name("authorizer_result_ttl_in_seconds"), "AuthorizerResultTtlInSeconds");
        assert_eq!(display_name("name"), "Name");
    }

    #[test]
    fn test_display_skips_unset_fields() {
        assert_eq!(Sample::new().to_string(), "{}");
        let sample = Sample::new().with_name("pets").with_size(3);
        assert_eq!(sample.to_string(), "{Name: pets,Size: 3}");
    }

    #[test]
    fn test_display_renders_blob_as_name_only() {
        let sample = Sample::new().with_payload(Blob::new(b"secret".to_vec())).with_size(1);
        assert_eq!(sample.to_string(), "{Size: 1,Payload}");
    }

    #[test]
    fn test_unset_differs_from_zero() {
        let unset = Sample::new();
        let zero = Sample::new().with_size(0);
        assert_ne!(unset, zero);
    }

    #[test]
    fn test_equal_shapes_hash_equal() {
        let a = Sample::new().with_name("x").with_size(7);
        let b = Sample::new().with_size(7).with_name("x");
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_add_entry_rejects_duplicate_and_keeps_original() {
        let mut sample = Sample::new();
        sample.add_labels_entry("stage", "prod".to_string()).unwrap();

        let err = sample.add_labels_entry("stage", "dev".to_string()).unwrap_err();
        assert_eq!(err, ModelError::DuplicateKey { key: "stage".to_string() });
        assert_eq!(sample.labels().unwrap().get("stage").map(String::as_str), Some("prod"));
    }

    #[test]
    fn test_clear_then_add_yields_single_entry() {
        let mut sample = Sample::new();
        sample
            .add_labels_entry("a", "1".to_string())
            .unwrap()
            .add_labels_entry("b", "2".to_string())
            .unwrap();
        sample.clear_labels_entries();
        assert!(sample.labels().is_none());

        sample.add_labels_entry("a", "3".to_string()).unwrap();
        assert_eq!(sample.labels().unwrap().len(), 1);
    }

    #[test]
    fn test_rate_limit_compares_by_bits() {
        assert_eq!(RateLimit::new(1.5), RateLimit::from(1.5));
        assert_ne!(RateLimit::new(0.0), RateLimit::new(-0.0));
        assert_eq!(hash_of(&RateLimit::new(2.0)), hash_of(&RateLimit::new(2.0)));
    }

    #[test]
    fn test_blob_serializes_as_base64() {
        let json = serde_json::to_string(&Blob::new(b"hi".to_vec())).unwrap();
        assert_eq!(json, "\"aGk=\"");
        let back: Blob = serde_json::from_str(&json).unwrap();
        assert_eq!(back.as_bytes(), b"hi");
    }
}
