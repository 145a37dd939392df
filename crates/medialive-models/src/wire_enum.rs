//! String-backed enums that tolerate values newer than the model.

use thiserror::Error;

/// A wire value that is not one of the known variants.
///
/// Only the enum conversions construct this, so an unknown value never holds a
/// string that a known variant already covers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UnknownVariant(String);

impl UnknownVariant {
    pub(crate) fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Error returned by a strict `FromStr` parse of a MediaLive enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {type_name} value: {value}")]
pub struct EnumParseError {
    type_name: &'static str,
    value: String,
}

impl EnumParseError {
    pub fn new(type_name: &'static str, value: impl Into<String>) -> Self {
        Self {
            type_name,
            value: value.into(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Declares a MediaLive enum.
///
/// Generated conversions:
/// - `From<&str>`/`From<String>` accept anything; unrecognized text becomes
///   `Unknown`.
/// - `FromStr` accepts only the known wire values.
/// - Serde reads and writes the wire value, keeping unknown text unchanged.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $value:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[non_exhaustive]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )*
            /// A value this version of the model does not recognize.
            Unknown($crate::wire_enum::UnknownVariant),
        }

        impl $name {
            /// Every wire value known to this version of the model.
            pub const ALL_VALUES: &'static [&'static str] = &[$($value),*];

            /// Every wire value known to this version of the model.
            pub fn values() -> &'static [&'static str] {
                Self::ALL_VALUES
            }

            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $value, )*
                    Self::Unknown(value) => value.as_str(),
                }
            }

            pub fn is_unknown(&self) -> bool {
                matches!(self, Self::Unknown(_))
            }

            fn known(value: &str) -> Option<Self> {
                match value {
                    $( $value => Some(Self::$variant), )*
                    _ => None,
                }
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::known(value)
                    .unwrap_or_else(|| Self::Unknown($crate::wire_enum::UnknownVariant::new(value)))
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                match Self::known(&value) {
                    Some(known) => known,
                    None => Self::Unknown($crate::wire_enum::UnknownVariant::new(value)),
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::wire_enum::EnumParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::known(s)
                    .ok_or_else(|| $crate::wire_enum::EnumParseError::new(stringify!($name), s))
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                Ok(Self::from(value))
            }
        }

        impl ::schemars::JsonSchema for $name {
            fn schema_name() -> String {
                stringify!($name).to_string()
            }

            fn json_schema(gen: &mut ::schemars::gen::SchemaGenerator) -> ::schemars::schema::Schema {
                <String as ::schemars::JsonSchema>::json_schema(gen)
            }
        }

        impl $crate::shape::FieldValue for $name {
            fn same_value(&self, other: &Self) -> bool {
                self == other
            }

            fn value_hash(&self) -> u64 {
                $crate::shape::str_hash(self.as_str())
            }

            fn render(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub(crate) use wire_enum;

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    wire_enum! {
        /// Test enum.
        pub enum Scheme {
            Static = "STATIC",
            Dhcp = "DHCP",
        }
    }

    #[test]
    fn test_as_str() {
        assert_eq!(Scheme::Static.as_str(), "STATIC");
        assert_eq!(Scheme::Dhcp.to_string(), "DHCP");
        assert_eq!(Scheme::values(), &["STATIC", "DHCP"]);
    }

    #[test]
    fn test_lenient_conversion_prefers_known_variants() {
        assert_eq!(Scheme::from("DHCP"), Scheme::Dhcp);
        assert_eq!(Scheme::from("DHCP".to_string()), Scheme::Dhcp);

        let future = Scheme::from("LINK_LOCAL");
        assert!(future.is_unknown());
        assert_eq!(future.as_str(), "LINK_LOCAL");
        assert_ne!(future, Scheme::Static);
    }

    #[test]
    fn test_strict_parse() {
        assert_eq!(Scheme::from_str("STATIC").unwrap(), Scheme::Static);

        let err = Scheme::from_str("static").unwrap_err();
        assert_eq!(err.type_name(), "Scheme");
        assert_eq!(err.value(), "static");
        assert_eq!(err.to_string(), "Unknown Scheme value: static");
    }

    #[test]
    fn test_serde_keeps_unknown_text() {
        assert_eq!(serde_json::to_string(&Scheme::Dhcp).unwrap(), "\"DHCP\"");

        let parsed: Scheme = serde_json::from_str("\"LINK_LOCAL\"").unwrap();
        assert!(parsed.is_unknown());
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"LINK_LOCAL\"");

        let known: Scheme = serde_json::from_str("\"STATIC\"").unwrap();
        assert_eq!(known, Scheme::Static);
    }
}
