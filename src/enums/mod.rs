//! Open enums
//!
//! Enumerated fields accept a closed set of known values, but the service may
//! add new ones before this crate learns about them. An open enum keeps the
//! known values as variants and anything else in `Unknown(String)`, so a raw
//! string and the matching variant always end up in the same state:
//!
//! ```
//! use glue_model::types::WorkerType;
//!
//! assert_eq!(WorkerType::from("G.1X"), WorkerType::G1X);
//! assert_eq!(WorkerType::from("G.8X"), WorkerType::Unknown("G.8X".to_string()));
//! assert!("G.8X".parse::<WorkerType>().is_err());
//! ```

use crate::error::{Error, Result};

/// Behavior shared by every open enum
pub trait OpenEnum: Sized {
    /// Name of the enum type (e.g. `WorkerType`)
    const TYPE_NAME: &'static str;

    /// Canonical strings of the known variants, in declaration order
    const KNOWN_VALUES: &'static [&'static str];

    /// Canonical string form
    fn as_str(&self) -> &str;

    /// Convert from a wire string; never fails, unrecognized values are kept
    /// as `Unknown`
    fn from_wire_string(value: &str) -> Self;

    /// Check whether this is one of the known variants
    fn is_known(&self) -> bool;

    /// Canonical strings of the known variants
    fn known_values() -> &'static [&'static str] {
        Self::KNOWN_VALUES
    }

    /// The same value with a known string held in `Unknown` turned into its
    /// variant
    fn normalized(&self) -> Self {
        Self::from_wire_string(self.as_str())
    }

    /// Canonical string form, owned
    fn to_wire_string(&self) -> String {
        self.as_str().to_string()
    }

    /// Strict conversion: empty and unrecognized strings are errors
    fn parse_known(value: &str) -> Result<Self> {
        if value.is_empty() {
            return Err(Error::EmptyEnumValue {
                type_name: Self::TYPE_NAME,
            });
        }
        let parsed = Self::from_wire_string(value);
        if parsed.is_known() {
            Ok(parsed)
        } else {
            Err(Error::unknown_enum(Self::TYPE_NAME, value))
        }
    }
}

/// Define an open enum
///
/// ```
/// use glue_model::open_enum;
/// use glue_model::enums::OpenEnum;
///
/// open_enum! {
///     /// Traffic light color
///     pub enum Light {
///         Red => "RED",
///         Green => "GREEN",
///     }
/// }
///
/// assert_eq!(Light::Red.as_str(), "RED");
/// assert_eq!(Light::from("AMBER").as_str(), "AMBER");
/// assert!(!Light::from("AMBER").is_known());
/// ```
#[macro_export]
macro_rules! open_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $wire:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )*
            /// A value this crate does not know about yet
            Unknown(::std::string::String),
        }

        impl $crate::enums::OpenEnum for $name {
            const TYPE_NAME: &'static str = stringify!($name);
            const KNOWN_VALUES: &'static [&'static str] = &[$($wire),*];

            fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $wire,)*
                    $name::Unknown(value) => value.as_str(),
                }
            }

            fn from_wire_string(value: &str) -> Self {
                match value {
                    $($wire => $name::$variant,)*
                    other => $name::Unknown(other.to_string()),
                }
            }

            fn is_known(&self) -> bool {
                match self {
                    $name::Unknown(value) => Self::KNOWN_VALUES.contains(&value.as_str()),
                    _ => true,
                }
            }
        }

        /// Values compare by canonical string, so `Unknown("X")` equals the
        /// variant whose wire string is `X`
        impl ::std::cmp::PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                $crate::enums::OpenEnum::as_str(self) == $crate::enums::OpenEnum::as_str(other)
            }
        }

        impl ::std::cmp::Eq for $name {}

        impl ::std::hash::Hash for $name {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                ::std::hash::Hash::hash($crate::enums::OpenEnum::as_str(self), state);
            }
        }

        impl ::std::convert::From<&str> for $name {
            fn from(value: &str) -> Self {
                <$name as $crate::enums::OpenEnum>::from_wire_string(value)
            }
        }

        impl ::std::convert::From<::std::string::String> for $name {
            fn from(value: ::std::string::String) -> Self {
                match <$name as $crate::enums::OpenEnum>::from_wire_string(&value) {
                    $name::Unknown(_) => $name::Unknown(value),
                    known => known,
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::Error;

            fn from_str(value: &str) -> ::std::result::Result<Self, Self::Err> {
                <$name as $crate::enums::OpenEnum>::parse_known(value)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::enums::OpenEnum::as_str(self))
            }
        }

        impl $crate::record::FieldEq for $name {
            fn field_eq(&self, other: &Self) -> bool {
                self == other
            }
        }

        impl $crate::record::StructuralHash for $name {
            fn structural_hash(&self) -> u64 {
                $crate::record::leaf_hash($crate::enums::OpenEnum::as_str(self))
            }
        }

        impl $crate::record::DisplayValue for $name {
            fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(self, f)
            }
        }

        impl $crate::record::FieldType for $name {
            const KIND: $crate::record::FieldKind =
                $crate::record::FieldKind::Enum(stringify!($name));
            const TYPE_LABEL: &'static str = stringify!($name);
        }

        impl $crate::validate::CheckValue for $name {
            fn check(
                &self,
                constraint: &$crate::validate::Constraint,
                options: &$crate::config::ValidationOptions,
            ) -> ::std::option::Option<::std::string::String> {
                $crate::validate::check_enum(self, constraint, options)
            }
        }

        impl $crate::validate::NestedValidate for $name {}
    };
}

#[cfg(test)]
mod tests;
