//! Record machinery shared by every MediaLive shape.
//!
//! Every API shape is declared through [`shape!`], which produces:
//! - a struct of public `Option<T>` fields, all absent by default
//! - consuming `with_*` setters and, for sequences, appenders
//! - structural equality and a stable 31-based hash over the fields
//! - a compact `Display` that only lists populated fields
//! - opt-in range checks for fields that declare bounds
//!
//! Union settings are declared through [`settings_union!`] and become plain
//! enums whose variant tags are the wire member names.

use std::collections::BTreeMap;
use std::fmt::{self, Write as _};

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::{ConstraintViolation, ModelError, ModelResult};

/// Multiplier used when folding field hashes into a record hash.
pub const HASH_PRIME: u64 = 31;

/// A value that can be stored in a record field.
pub trait FieldValue {
    /// When set, a field holding `{}` (or only null members) reads as absent.
    const ABSENT_WHEN_EMPTY: bool = false;

    /// Structural comparison used by record equality.
    fn same_value(&self, other: &Self) -> bool;

    /// Deterministic hash folded into the owning record's hash.
    fn value_hash(&self) -> u64;

    /// Writes the value the way it appears inside a record rendering.
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    /// Numeric view used by range checks.
    fn as_number(&self) -> Option<f64> {
        None
    }

    /// Collects range violations of nested records.
    fn collect_violations(&self, _path: &str, _out: &mut Vec<ConstraintViolation>) {}
}

/// Behaviour shared by every generated record.
pub trait Shape:
    FieldValue + fmt::Display + Clone + Default + PartialEq + Serialize + DeserializeOwned
{
    /// Shape name as it appears in the MediaLive API model.
    const NAME: &'static str;

    /// Returns true when no field is populated.
    fn is_empty(&self) -> bool;

    /// 31-based hash over the fields in declaration order.
    fn hash_code(&self) -> u64 {
        self.value_hash()
    }

    /// Checks documented numeric ranges on this record and every nested one.
    ///
    /// Setters never call this; the service stays the authority on what it
    /// accepts.
    fn validate(&self) -> ModelResult<()> {
        let mut violations = Vec::new();
        self.collect_violations("", &mut violations);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(ModelError::ConstraintViolations(violations))
        }
    }

    /// Serializes to the JSON wire format.
    fn to_json(&self) -> ModelResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes to indented JSON.
    fn to_json_pretty(&self) -> ModelResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses the JSON wire format. Unknown members are ignored.
    fn from_json(json: &str) -> ModelResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Absent only equals absent; present values compare structurally.
pub fn option_eq<T: FieldValue>(a: &Option<T>, b: &Option<T>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a.same_value(b),
        _ => false,
    }
}

/// Reads an optional record field, treating an empty union object as absent.
pub fn deserialize_field<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FieldValue + DeserializeOwned,
{
    if !T::ABSENT_WHEN_EMPTY {
        return Option::<T>::deserialize(deserializer);
    }
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(members)) if members.values().all(Value::is_null) => Ok(None),
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(D::Error::custom),
    }
}

/// Reads a union object and returns its one populated member.
pub fn single_member<'de, D: Deserializer<'de>>(
    union: &str,
    deserializer: D,
) -> Result<(String, Value), D::Error> {
    let members = Map::<String, Value>::deserialize(deserializer)?;
    let mut populated = members.into_iter().filter(|(_, value)| !value.is_null());
    let (member, value) = populated
        .next()
        .ok_or_else(|| D::Error::custom(format!("{} has no member set", union)))?;
    if let Some((other, _)) = populated.next() {
        return Err(D::Error::custom(format!(
            "{} has more than one member set: {}, {}",
            union, member, other
        )));
    }
    Ok((member, value))
}

/// A union member this version of the model does not know.
///
/// The member's JSON is kept as received and written back unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownMember {
    member: String,
    value: Value,
}

impl UnknownMember {
    pub fn new(member: impl Into<String>, value: Value) -> Self {
        Self {
            member: member.into(),
            value,
        }
    }

    /// Wire name of the member.
    pub fn member(&self) -> &str {
        &self.member
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub(crate) fn value_hash(&self) -> u64 {
        str_hash(&self.member)
            .wrapping_mul(HASH_PRIME)
            .wrapping_add(str_hash(&self.value.to_string()))
    }
}

impl Eq for UnknownMember {}

impl std::hash::Hash for UnknownMember {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_u64(self.value_hash());
    }
}

/// Absent fields contribute zero.
pub fn option_hash<T: FieldValue>(value: &Option<T>) -> u64 {
    value.as_ref().map_or(0, FieldValue::value_hash)
}

/// Polynomial hash over the UTF-8 bytes of a string.
pub fn str_hash(value: &str) -> u64 {
    value
        .bytes()
        .fold(0u64, |hash, byte| hash.wrapping_mul(HASH_PRIME).wrapping_add(byte as u64))
}

/// Converts a Rust field name (`language_code`, `r#type`) to its wire name
/// (`languageCode`, `type`).
pub fn wire_name(field: &str) -> String {
    let field = field.strip_prefix("r#").unwrap_or(field);
    let mut name = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            name.push(c.to_ascii_uppercase());
            upper = false;
        } else {
            name.push(c);
        }
    }
    name
}

/// Path of a nested field, used in constraint violation reports.
pub fn child_path(parent: &str, field: &str) -> String {
    let name = wire_name(field);
    if parent.is_empty() {
        name
    } else {
        format!("{}.{}", parent, name)
    }
}

/// Records a violation when `value` falls outside `[min, max]`.
pub fn check_range<T: FieldValue>(
    value: &T,
    path: &str,
    min: Option<f64>,
    max: Option<f64>,
    out: &mut Vec<ConstraintViolation>,
) {
    let Some(number) = value.as_number() else {
        return;
    };
    let below = min.is_some_and(|min| number < min);
    let above = max.is_some_and(|max| number > max);
    if below || above {
        out.push(ConstraintViolation {
            path: path.to_string(),
            value: number,
            min,
            max,
        });
    }
}

/// Writes `{Name: value,Name: value}`, skipping absent fields.
pub struct RecordWriter<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    empty: bool,
}

impl<'a, 'b> RecordWriter<'a, 'b> {
    pub fn new(f: &'a mut fmt::Formatter<'b>) -> Result<Self, fmt::Error> {
        f.write_char('{')?;
        Ok(Self { f, empty: true })
    }

    pub fn field<T: FieldValue>(&mut self, field: &str, value: &Option<T>) -> fmt::Result {
        let Some(value) = value else {
            return Ok(());
        };
        if !self.empty {
            self.f.write_char(',')?;
        }
        self.empty = false;
        write_display_name(self.f, field)?;
        self.f.write_str(": ")?;
        value.render(self.f)
    }

    pub fn finish(self) -> fmt::Result {
        self.f.write_char('}')
    }
}

/// `x_position` renders as `XPosition`.
fn write_display_name(f: &mut fmt::Formatter<'_>, field: &str) -> fmt::Result {
    let field = field.strip_prefix("r#").unwrap_or(field);
    let mut upper = true;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            f.write_char(c.to_ascii_uppercase())?;
            upper = false;
        } else {
            f.write_char(c)?;
        }
    }
    Ok(())
}

impl FieldValue for String {
    fn same_value(&self, other: &Self) -> bool {
        self == other
    }

    fn value_hash(&self) -> u64 {
        str_hash(self)
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

impl FieldValue for bool {
    fn same_value(&self, other: &Self) -> bool {
        self == other
    }

    fn value_hash(&self) -> u64 {
        if *self {
            1
        } else {
            2
        }
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl FieldValue for i32 {
    fn same_value(&self, other: &Self) -> bool {
        self == other
    }

    fn value_hash(&self) -> u64 {
        *self as i64 as u64
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }

    fn as_number(&self) -> Option<f64> {
        Some(*self as f64)
    }
}

impl FieldValue for i64 {
    fn same_value(&self, other: &Self) -> bool {
        self == other
    }

    fn value_hash(&self) -> u64 {
        *self as u64
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }

    fn as_number(&self) -> Option<f64> {
        Some(*self as f64)
    }
}

// NaN equals NaN and -0.0 equals 0.0 so that equality stays an equivalence
// relation and agrees with the hash.
impl FieldValue for f64 {
    fn same_value(&self, other: &Self) -> bool {
        self == other || (self.is_nan() && other.is_nan())
    }

    fn value_hash(&self) -> u64 {
        if self.is_nan() {
            f64::NAN.to_bits()
        } else if *self == 0.0 {
            0
        } else {
            self.to_bits()
        }
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }

    fn as_number(&self) -> Option<f64> {
        Some(*self)
    }
}

impl<T: FieldValue> FieldValue for Vec<T> {
    fn same_value(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.same_value(b))
    }

    fn value_hash(&self) -> u64 {
        self.iter().fold(1u64, |hash, item| {
            hash.wrapping_mul(HASH_PRIME).wrapping_add(item.value_hash())
        })
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('[')?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            item.render(f)?;
        }
        f.write_char(']')
    }

    fn collect_violations(&self, path: &str, out: &mut Vec<ConstraintViolation>) {
        for (i, item) in self.iter().enumerate() {
            item.collect_violations(&format!("{}[{}]", path, i), out);
        }
    }
}

impl<T: FieldValue> FieldValue for BTreeMap<String, T> {
    fn same_value(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|((ka, va), (kb, vb))| ka == kb && va.same_value(vb))
    }

    fn value_hash(&self) -> u64 {
        self.iter().fold(1u64, |hash, (key, value)| {
            hash.wrapping_mul(HASH_PRIME)
                .wrapping_add(str_hash(key) ^ value.value_hash())
        })
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('{')?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(key)?;
            f.write_char('=')?;
            value.render(f)?;
        }
        f.write_char('}')
    }

    fn collect_violations(&self, path: &str, out: &mut Vec<ConstraintViolation>) {
        for (key, value) in self {
            value.collect_violations(&format!("{}.{}", path, key), out);
        }
    }
}

/// Declares a MediaLive record.
///
/// ```text
/// shape! {
///     /// Doc comment.
///     pub struct BurnInDestinationSettings {
///         /// Field doc.
///         pub background_opacity: i32 where min = 0, max = 255 => with_background_opacity,
///         pub font: InputLocation => with_font,
///         pub ad_markers: Vec<HlsAdMarkers> => with_ad_markers + push_ad_marker(HlsAdMarkers),
///     }
/// }
/// ```
macro_rules! shape {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                pub $field:ident : $ty:ty
                $(where min = $min:literal $(, max = $max:literal)?)?
                => $with:ident
                $(+ $push:ident($elem:ty))?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, ::serde::Serialize, ::serde::Deserialize, ::schemars::JsonSchema)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            $(
                $(#[$fmeta])*
                #[serde(
                    default,
                    skip_serializing_if = "Option::is_none",
                    deserialize_with = "crate::shape::deserialize_field"
                )]
                pub $field: Option<$ty>,
            )*
        }

        impl $name {
            /// Creates a record with every field absent.
            pub fn new() -> Self {
                Self::default()
            }

            $(
                #[doc = concat!("Sets `", stringify!($field), "` and returns the record.")]
                pub fn $with(mut self, value: impl Into<$ty>) -> Self {
                    self.$field = Some(value.into());
                    self
                }

                $(
                    #[doc = concat!("Appends one element to `", stringify!($field), "`.")]
                    pub fn $push(mut self, item: impl Into<$elem>) -> Self {
                        self.$field.get_or_insert_with(Vec::new).push(item.into());
                        self
                    }
                )?
            )*
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                true $(&& $crate::shape::option_eq(&self.$field, &other.$field))*
            }
        }

        impl Eq for $name {}

        impl ::std::hash::Hash for $name {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                state.write_u64($crate::shape::FieldValue::value_hash(self));
            }
        }

        impl $crate::shape::FieldValue for $name {
            fn same_value(&self, other: &Self) -> bool {
                self == other
            }

            fn value_hash(&self) -> u64 {
                let hash: u64 = 1;
                $(
                    let hash = hash
                        .wrapping_mul($crate::shape::HASH_PRIME)
                        .wrapping_add($crate::shape::option_hash(&self.$field));
                )*
                hash
            }

            fn render(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(self, f)
            }

            #[allow(unused_variables)]
            fn collect_violations(
                &self,
                path: &str,
                out: &mut Vec<$crate::error::ConstraintViolation>,
            ) {
                $(
                    if let Some(value) = &self.$field {
                        let field_path = $crate::shape::child_path(path, stringify!($field));
                        $(
                            $crate::shape::check_range(
                                value,
                                &field_path,
                                Some($min as f64),
                                None $(.or(Some($max as f64)))?,
                                out,
                            );
                        )?
                        $crate::shape::FieldValue::collect_violations(value, &field_path, out);
                    }
                )*
            }
        }

        impl ::std::fmt::Display for $name {
            #[allow(unused_mut)]
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let mut record = $crate::shape::RecordWriter::new(f)?;
                $( record.field(stringify!($field), &self.$field)?; )*
                record.finish()
            }
        }

        impl $crate::shape::Shape for $name {
            const NAME: &'static str = stringify!($name);

            fn is_empty(&self) -> bool {
                true $(&& self.$field.is_none())*
            }
        }
    };
}

/// Declares a one-of settings record as an enum.
///
/// Each variant carries the nested record and serializes under its wire
/// member name, so `{"hlsOutputSettings": {...}}` maps to one variant. A
/// member this model does not know lands in `Unknown` and is written back
/// unchanged.
macro_rules! settings_union {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident($inner:ty) = $tag:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, ::schemars::JsonSchema)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $tag)]
                $variant($inner),
            )*
            /// A member newer than this model.
            #[schemars(skip)]
            Unknown($crate::shape::UnknownMember),
        }

        impl $name {
            /// Wire name of the populated member.
            pub fn member_name(&self) -> &str {
                match self {
                    $( Self::$variant(_) => $tag, )*
                    Self::Unknown(unknown) => unknown.member(),
                }
            }

            /// Returns true when the populated member is not known to this model.
            pub fn is_unknown(&self) -> bool {
                matches!(self, Self::Unknown(_))
            }
        }

        $(
            impl From<$inner> for $name {
                fn from(value: $inner) -> Self {
                    Self::$variant(value)
                }
            }
        )*

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                use ::serde::ser::SerializeMap;

                let mut map = serializer.serialize_map(Some(1))?;
                match self {
                    $( Self::$variant(inner) => map.serialize_entry($tag, inner)?, )*
                    Self::Unknown(unknown) => map.serialize_entry(unknown.member(), unknown.value())?,
                }
                map.end()
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                use ::serde::de::Error as _;

                let (member, value) = $crate::shape::single_member(stringify!($name), deserializer)?;
                match member.as_str() {
                    $(
                        $tag => ::serde_json::from_value(value)
                            .map(Self::$variant)
                            .map_err(D::Error::custom),
                    )*
                    _ => Ok(Self::Unknown($crate::shape::UnknownMember::new(member, value))),
                }
            }
        }

        impl $crate::shape::FieldValue for $name {
            const ABSENT_WHEN_EMPTY: bool = true;

            fn same_value(&self, other: &Self) -> bool {
                self == other
            }

            fn value_hash(&self) -> u64 {
                match self {
                    $(
                        Self::$variant(inner) => $crate::shape::str_hash($tag)
                            .wrapping_mul($crate::shape::HASH_PRIME)
                            .wrapping_add($crate::shape::FieldValue::value_hash(inner)),
                    )*
                    Self::Unknown(unknown) => unknown.value_hash(),
                }
            }

            fn render(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                match self {
                    $(
                        Self::$variant(inner) => {
                            f.write_str(concat!("{", stringify!($variant), ": "))?;
                            $crate::shape::FieldValue::render(inner, f)?;
                            f.write_str("}")
                        }
                    )*
                    Self::Unknown(unknown) => write!(f, "{{{}: {}}}", unknown.member(), unknown.value()),
                }
            }

            fn collect_violations(
                &self,
                path: &str,
                out: &mut Vec<$crate::error::ConstraintViolation>,
            ) {
                match self {
                    $(
                        Self::$variant(inner) => $crate::shape::FieldValue::collect_violations(
                            inner,
                            &$crate::shape::child_path(path, $tag),
                            out,
                        ),
                    )*
                    Self::Unknown(_) => {}
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                $crate::shape::FieldValue::render(self, f)
            }
        }
    };
}

pub(crate) use settings_union;
pub(crate) use shape;

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, HashSet};

    use super::*;

    shape! {
        pub struct Gauge {
            pub name: String => with_name,
            pub count: i32 where min = 0, max = 10 => with_count,
            pub ratio: f64 => with_ratio,
            pub items: Vec<String> => with_items + push_item(String),
            pub labels: BTreeMap<String, String> => with_labels,
        }
    }

    settings_union! {
        pub enum GaugeSource {
            Fixed(Gauge) = "fixedGauge",
        }
    }

    shape! {
        pub struct Panel {
            pub source: GaugeSource => with_source,
            pub title: String => with_title,
        }
    }

    shape! {
        pub struct Outer {
            pub gauge: Gauge => with_gauge,
            pub gauges: Vec<Gauge> => with_gauges + push_gauge(Gauge),
            pub r#type: String => with_type,
        }
    }

    #[test]
    fn test_new_record_is_empty() {
        let gauge = Gauge::new();
        assert!(gauge.is_empty());
        assert!(gauge.name.is_none());
        assert!(gauge.count.is_none());
        assert_eq!(gauge.to_string(), "{}");
    }

    #[test]
    fn test_rendering_skips_absent_fields() {
        let gauge = Gauge::new().with_name("a").with_ratio(0.5);
        assert_eq!(gauge.to_string(), "{Name: a,Ratio: 0.5}");

        let gauge = Gauge::new().with_count(3).with_items(vec!["x".to_string(), "y".to_string()]);
        assert_eq!(gauge.to_string(), "{Count: 3,Items: [x, y]}");
    }

    #[test]
    fn test_nested_rendering_and_raw_identifiers() {
        let outer = Outer::new()
            .with_gauge(Gauge::new().with_name("inner"))
            .with_type("HD");
        assert_eq!(outer.to_string(), "{Gauge: {Name: inner},Type: HD}");
    }

    #[test]
    fn test_push_allocates_and_appends() {
        let gauge = Gauge::new().push_item("a").push_item("b").push_item("a");
        assert_eq!(
            gauge.items,
            Some(vec!["a".to_string(), "b".to_string(), "a".to_string()])
        );
    }

    #[test]
    fn test_with_replaces_sequence() {
        let gauge = Gauge::new().push_item("a").with_items(vec!["z".to_string()]);
        assert_eq!(gauge.items, Some(vec!["z".to_string()]));
    }

    #[test]
    fn test_equality_treats_absent_as_distinct() {
        let a = Gauge::new().with_name("a");
        let b = Gauge::new().with_name("a").with_count(0);
        assert_ne!(a, b);
        assert_ne!(b, a);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn test_float_equality_agrees_with_hash() {
        let nan_a = Gauge::new().with_ratio(f64::NAN);
        let nan_b = Gauge::new().with_ratio(f64::NAN);
        assert_eq!(nan_a, nan_b);
        assert_eq!(nan_a.hash_code(), nan_b.hash_code());

        let zero = Gauge::new().with_ratio(0.0);
        let negative_zero = Gauge::new().with_ratio(-0.0);
        assert_eq!(zero, negative_zero);
        assert_eq!(zero.hash_code(), negative_zero.hash_code());
    }

    #[test]
    fn test_hash_follows_declaration_order() {
        let gauge = Gauge::new().with_name("a");
        let expected = [option_hash(&gauge.name), 0, 0, 0, 0]
            .iter()
            .fold(1u64, |hash, field| hash.wrapping_mul(HASH_PRIME).wrapping_add(*field));
        assert_eq!(gauge.hash_code(), expected);
        assert_ne!(Gauge::new().hash_code(), gauge.hash_code());
    }

    #[test]
    fn test_records_deduplicate_in_hash_sets() {
        let mut set = HashSet::new();
        set.insert(Gauge::new().with_name("a").with_count(1));
        set.insert(Gauge::new().with_count(1).with_name("a"));
        set.insert(Gauge::new().with_name("b"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_map_fields() {
        let gauge = Gauge::new().with_labels([
            ("env".to_string(), "prod".to_string()),
            ("app".to_string(), "live".to_string()),
        ]);
        assert_eq!(gauge.to_string(), "{Labels: {app=live, env=prod}}");
    }

    #[test]
    fn test_validation_reports_nested_paths() {
        let outer = Outer::new()
            .with_gauge(Gauge::new().with_count(11))
            .push_gauge(Gauge::new().with_count(5))
            .push_gauge(Gauge::new().with_count(-1));

        let err = outer.validate().unwrap_err();
        let violations = err.violations();
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].path, "gauge.count");
        assert_eq!(violations[1].path, "gauges[1].count");
        assert_eq!(violations[1].min, Some(0.0));
        assert_eq!(violations[1].max, Some(10.0));
    }

    #[test]
    fn test_setters_never_validate() {
        let gauge = Gauge::new().with_count(1000);
        assert_eq!(gauge.count, Some(1000));
        assert!(gauge.validate().is_err());
        assert!(Gauge::new().with_count(10).validate().is_ok());
    }

    #[test]
    fn test_json_uses_camel_case_and_skips_absent() {
        let outer = Outer::new()
            .with_gauge(Gauge::new().with_name("p"))
            .with_type("HD");
        let json = outer.to_json().unwrap();
        assert_eq!(json, r#"{"gauge":{"name":"p"},"type":"HD"}"#);

        let parsed = Outer::from_json(r#"{"type":"HD","gauge":{"name":"p"},"extra":1}"#).unwrap();
        assert_eq!(parsed, outer);
    }

    #[test]
    fn test_wire_name() {
        assert_eq!(wire_name("language_selection_policy"), "languageSelectionPolicy");
        assert_eq!(wire_name("x_position"), "xPosition");
        assert_eq!(wire_name("scte35_pid"), "scte35Pid");
        assert_eq!(wire_name("r#type"), "type");
        assert_eq!(wire_name("hlsOutputSettings"), "hlsOutputSettings");
    }

    #[test]
    fn test_union_unknown_member_round_trips() {
        let json = r#"{"source":{"laterGauge":{"count":2,"unit":"ms"}},"title":"t"}"#;
        let panel = Panel::from_json(json).unwrap();

        let source = panel.source.as_ref().unwrap();
        assert!(source.is_unknown());
        assert_eq!(source.member_name(), "laterGauge");
        assert_eq!(panel.to_json().unwrap(), json);
        assert_eq!(
            panel.to_string(),
            r#"{Source: {laterGauge: {"count":2,"unit":"ms"}},Title: t}"#
        );
        assert!(panel.validate().is_ok());
    }

    #[test]
    fn test_union_unknown_members_compare_by_value() {
        let a = Panel::from_json(r#"{"source":{"laterGauge":{"count":2,"unit":"ms"}}}"#).unwrap();
        let b = Panel::from_json(r#"{"source":{"laterGauge":{"unit":"ms","count":2}}}"#).unwrap();
        let c = Panel::from_json(r#"{"source":{"laterGauge":{"count":3}}}"#).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.hash_code(), b.hash_code());
        assert_ne!(a, c);
    }

    #[test]
    fn test_union_known_member_still_typed() {
        let panel = Panel::from_json(r#"{"source":{"fixedGauge":{"count":4}}}"#).unwrap();
        assert_eq!(
            panel.source,
            Some(GaugeSource::Fixed(Gauge::new().with_count(4)))
        );
        assert_eq!(panel.source.as_ref().map(|s| s.member_name()), Some("fixedGauge"));
    }

    #[test]
    fn test_empty_union_reads_as_absent() {
        let panel = Panel::from_json(r#"{"source":{},"title":"t"}"#).unwrap();
        assert!(panel.source.is_none());
        assert_eq!(panel.title.as_deref(), Some("t"));

        let panel = Panel::from_json(r#"{"source":{"fixedGauge":null}}"#).unwrap();
        assert!(panel.is_empty());

        let panel = Panel::from_json(r#"{"source":null}"#).unwrap();
        assert!(panel.is_empty());
    }

    #[test]
    fn test_union_with_two_members_is_rejected() {
        let json = r#"{"source":{"fixedGauge":{},"laterGauge":{}}}"#;
        let err = Panel::from_json(json).unwrap_err();
        assert!(err.to_string().contains("more than one member"));
    }
}
