//! The `model_record!` generator

/// Define a model record
///
/// Each field is declared as `name: kind => "Label"`, optionally followed by
/// a bracketed list of [`Constraint`](crate::validate::Constraint)s. Kinds:
///
/// | kind            | storage            | extra accessors                         |
/// |-----------------|--------------------|-----------------------------------------|
/// | `string`        | `String`           |                                         |
/// | `value(T)`      | `T: Copy`          |                                         |
/// | `record(R)`     | nested record `R`  |                                         |
/// | `list(T)`       | `Vec<T>`           | `extend_*` appends                      |
/// | `map`           | [`StringMap`](crate::record::StringMap) | `add_*_entry`, `clear_*_entries` |
/// | `open_enum(E)`  | open enum `E`      | `get_*_str`; `with_*` takes `E` or a raw string |
///
/// Every field gets `get_*`, `set_*` (takes an `Option`, `None` clears),
/// `with_*` (mutates, returns `&mut Self`) and a consuming `*` builder that
/// returns the updated value.
///
/// ```
/// use glue_model::model_record;
/// use glue_model::record::ModelRecord;
///
/// model_record! {
///     /// A pair of coordinates
///     pub struct Point {
///         x: value(i32) => "X",
///         label: string => "Label",
///     }
/// }
///
/// let mut p = Point::new();
/// p.with_x(3).with_label("origin");
/// assert_eq!(p.to_string(), "{X: 3,Label: origin}");
/// assert_eq!(Point::FIELDS.len(), 2);
/// ```
#[macro_export]
macro_rules! model_record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident : $kind:ident $(($ty:ty))? => $label:literal
                    $([$($constraint:expr),* $(,)?])?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default)]
        $vis struct $name {
            $(
                $field: ::std::option::Option<$crate::model_record!(@storage $kind $(($ty))?)>,
            )*
        }

        impl $name {
            /// Create an empty record with every field absent
            pub fn new() -> Self {
                Self::default()
            }

            $(
                $crate::model_record!(
                    @accessors $name, $field, $label, $kind $(($ty))?, [$(#[$fmeta])*]
                );
            )*
        }

        impl ::std::cmp::PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                true $(&& $crate::record::FieldEq::field_eq(&self.$field, &other.$field))*
            }
        }

        impl ::std::cmp::Eq for $name {}

        impl $crate::record::FieldEq for $name {
            fn field_eq(&self, other: &Self) -> bool {
                self == other
            }
        }

        impl $crate::record::StructuralHash for $name {
            fn structural_hash(&self) -> u64 {
                $crate::record::HashFold::new()
                    $(.field(&self.$field))*
                    .finish()
            }
        }

        impl ::std::hash::Hash for $name {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                state.write_u64($crate::record::StructuralHash::structural_hash(self));
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                $crate::record::RecordRenderer::new(f)
                    $(.field($label, &self.$field))*
                    .finish()
            }
        }

        impl $crate::record::DisplayValue for $name {
            fn fmt_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(self, f)
            }
        }

        impl $crate::record::FieldType for $name {
            const KIND: $crate::record::FieldKind =
                $crate::record::FieldKind::Record(stringify!($name));
            const TYPE_LABEL: &'static str = stringify!($name);
        }

        impl $crate::validate::CheckValue for $name {}

        impl $crate::validate::NestedValidate for $name {
            fn validate_nested(
                &self,
                path: &str,
                options: &$crate::config::ValidationOptions,
                out: &mut ::std::vec::Vec<$crate::validate::ConstraintViolation>,
            ) {
                $crate::record::ModelRecord::collect_violations(self, path, options, out);
            }
        }

        impl $crate::record::ModelRecord for $name {
            const TYPE_NAME: &'static str = stringify!($name);

            const FIELDS: &'static [$crate::record::FieldDescriptor] = &[
                $(
                    $crate::record::FieldDescriptor {
                        name: stringify!($field),
                        label: $label,
                        kind: $crate::model_record!(@kind $kind $(($ty))?),
                        constraints: &[$($($constraint),*)?],
                    },
                )*
            ];

            fn present_fields(&self) -> ::std::vec::Vec<&'static str> {
                let mut present = ::std::vec::Vec::new();
                $(
                    if self.$field.is_some() {
                        present.push($label);
                    }
                )*
                present
            }

            fn collect_violations(
                &self,
                prefix: &str,
                options: &$crate::config::ValidationOptions,
                out: &mut ::std::vec::Vec<$crate::validate::ConstraintViolation>,
            ) {
                $(
                    let path = $crate::validate::field_path(prefix, $label);
                    $crate::validate::check_field(
                        &self.$field,
                        &path,
                        &[$($($constraint),*)?],
                        options,
                        out,
                    );
                    if options.validate_nested {
                        $crate::validate::NestedValidate::validate_nested(
                            &self.$field,
                            &path,
                            options,
                            out,
                        );
                    }
                )*
            }
        }
    };

    // ------------------------------------------------------------------------
    // Storage types
    // ------------------------------------------------------------------------
    (@storage string) => { ::std::string::String };
    (@storage value($ty:ty)) => { $ty };
    (@storage record($ty:ty)) => { $ty };
    (@storage list($ty:ty)) => { ::std::vec::Vec<$ty> };
    (@storage map) => { $crate::record::StringMap };
    (@storage open_enum($ty:ty)) => { $ty };

    // ------------------------------------------------------------------------
    // Field kinds
    // ------------------------------------------------------------------------
    (@kind string) => { $crate::record::FieldKind::String };
    (@kind value($ty:ty)) => { <$ty as $crate::record::FieldType>::KIND };
    (@kind record($ty:ty)) => { <$ty as $crate::record::FieldType>::KIND };
    (@kind list($ty:ty)) => {
        $crate::record::FieldKind::List(<$ty as $crate::record::FieldType>::TYPE_LABEL)
    };
    (@kind map) => { $crate::record::FieldKind::Map };
    (@kind open_enum($ty:ty)) => {
        $crate::record::FieldKind::Enum(<$ty as $crate::enums::OpenEnum>::TYPE_NAME)
    };

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------
    (@accessors $name:ident, $field:ident, $label:literal, string, [$(#[$doc:meta])*]) => {
        $crate::paste::paste! {
            $(#[$doc])*
            pub fn [<get_ $field>](&self) -> ::std::option::Option<&str> {
                self.$field.as_deref()
            }

            #[doc = concat!("Set `", $label, "`; `None` marks it absent")]
            pub fn [<set_ $field>](&mut self, value: ::std::option::Option<::std::string::String>) {
                self.$field = value;
            }

            #[doc = concat!("Set `", $label, "` and return `self` for chaining")]
            pub fn [<with_ $field>](
                &mut self,
                value: impl ::std::convert::Into<::std::string::String>,
            ) -> &mut Self {
                self.$field = ::std::option::Option::Some(value.into());
                self
            }

            #[doc = concat!("Return this record with `", $label, "` set")]
            pub fn $field(
                mut self,
                value: impl ::std::convert::Into<::std::string::String>,
            ) -> Self {
                self.$field = ::std::option::Option::Some(value.into());
                self
            }
        }
    };

    (@accessors $name:ident, $field:ident, $label:literal, value($ty:ty), [$(#[$doc:meta])*]) => {
        $crate::paste::paste! {
            $(#[$doc])*
            pub fn [<get_ $field>](&self) -> ::std::option::Option<$ty> {
                self.$field
            }

            #[doc = concat!("Set `", $label, "`; `None` marks it absent")]
            pub fn [<set_ $field>](&mut self, value: ::std::option::Option<$ty>) {
                self.$field = value;
            }

            #[doc = concat!("Set `", $label, "` and return `self` for chaining")]
            pub fn [<with_ $field>](&mut self, value: $ty) -> &mut Self {
                self.$field = ::std::option::Option::Some(value);
                self
            }

            #[doc = concat!("Return this record with `", $label, "` set")]
            pub fn $field(mut self, value: $ty) -> Self {
                self.$field = ::std::option::Option::Some(value);
                self
            }
        }
    };

    (@accessors $name:ident, $field:ident, $label:literal, record($ty:ty), [$(#[$doc:meta])*]) => {
        $crate::paste::paste! {
            $(#[$doc])*
            pub fn [<get_ $field>](&self) -> ::std::option::Option<&$ty> {
                self.$field.as_ref()
            }

            #[doc = concat!("Set `", $label, "`; `None` marks it absent")]
            pub fn [<set_ $field>](&mut self, value: ::std::option::Option<$ty>) {
                self.$field = value;
            }

            #[doc = concat!("Set `", $label, "` and return `self` for chaining")]
            pub fn [<with_ $field>](&mut self, value: $ty) -> &mut Self {
                self.$field = ::std::option::Option::Some(value);
                self
            }

            #[doc = concat!("Return this record with `", $label, "` set")]
            pub fn $field(mut self, value: $ty) -> Self {
                self.$field = ::std::option::Option::Some(value);
                self
            }
        }
    };

    (@accessors $name:ident, $field:ident, $label:literal, list($ty:ty), [$(#[$doc:meta])*]) => {
        $crate::paste::paste! {
            $(#[$doc])*
            pub fn [<get_ $field>](&self) -> ::std::option::Option<&[$ty]> {
                self.$field.as_deref()
            }

            #[doc = concat!("Replace `", $label, "` wholesale; `None` marks it absent")]
            pub fn [<set_ $field>](&mut self, value: ::std::option::Option<::std::vec::Vec<$ty>>) {
                self.$field = value;
            }

            #[doc = concat!("Replace `", $label, "` wholesale and return `self` for chaining")]
            pub fn [<with_ $field>](&mut self, values: ::std::vec::Vec<$ty>) -> &mut Self {
                self.$field = ::std::option::Option::Some(values);
                self
            }

            #[doc = concat!(
                "Append to `", $label, "`, starting a new list when absent, ",
                "and return `self` for chaining"
            )]
            pub fn [<extend_ $field>]<I>(&mut self, values: I) -> &mut Self
            where
                I: ::std::iter::IntoIterator,
                I::Item: ::std::convert::Into<$ty>,
            {
                self.$field
                    .get_or_insert_with(::std::vec::Vec::new)
                    .extend(values.into_iter().map(::std::convert::Into::into));
                self
            }

            #[doc = concat!("Return this record with `", $label, "` replaced")]
            pub fn $field(mut self, values: ::std::vec::Vec<$ty>) -> Self {
                self.$field = ::std::option::Option::Some(values);
                self
            }
        }
    };

    (@accessors $name:ident, $field:ident, $label:literal, map, [$(#[$doc:meta])*]) => {
        $crate::paste::paste! {
            $(#[$doc])*
            pub fn [<get_ $field>](&self) -> ::std::option::Option<&$crate::record::StringMap> {
                self.$field.as_ref()
            }

            #[doc = concat!("Replace `", $label, "` wholesale; `None` marks it absent")]
            pub fn [<set_ $field>](
                &mut self,
                value: ::std::option::Option<$crate::record::StringMap>,
            ) {
                self.$field = value;
            }

            #[doc = concat!("Replace `", $label, "` wholesale and return `self` for chaining")]
            pub fn [<with_ $field>](&mut self, value: $crate::record::StringMap) -> &mut Self {
                self.$field = ::std::option::Option::Some(value);
                self
            }

            #[doc = concat!(
                "Add one entry to `", $label, "`, starting a new map when absent. ",
                "Fails if the key is already present; the map is left unchanged."
            )]
            pub fn [<add_ $field _entry>](
                &mut self,
                key: impl ::std::convert::Into<::std::string::String>,
                value: impl ::std::convert::Into<::std::string::String>,
            ) -> ::std::result::Result<&mut Self, $crate::error::DuplicateKeyError> {
                $crate::record::insert_entry(
                    &mut self.$field,
                    stringify!($name),
                    $label,
                    key.into(),
                    value.into(),
                )?;
                ::std::result::Result::Ok(self)
            }

            #[doc = concat!("Reset `", $label, "` to absent and return `self` for chaining")]
            pub fn [<clear_ $field _entries>](&mut self) -> &mut Self {
                $crate::record::clear_entries(&mut self.$field, stringify!($name), $label);
                self
            }

            #[doc = concat!("Return this record with `", $label, "` replaced")]
            pub fn $field(mut self, value: $crate::record::StringMap) -> Self {
                self.$field = ::std::option::Option::Some(value);
                self
            }
        }
    };

    (@accessors $name:ident, $field:ident, $label:literal, open_enum($ty:ty), [$(#[$doc:meta])*]) => {
        $crate::paste::paste! {
            $(#[$doc])*
            pub fn [<get_ $field>](&self) -> ::std::option::Option<&$ty> {
                self.$field.as_ref()
            }

            #[doc = concat!("Canonical string form of `", $label, "`")]
            pub fn [<get_ $field _str>](&self) -> ::std::option::Option<&str> {
                self.$field.as_ref().map($crate::enums::OpenEnum::as_str)
            }

            #[doc = concat!("Set `", $label, "`; `None` marks it absent")]
            pub fn [<set_ $field>](&mut self, value: ::std::option::Option<$ty>) {
                self.$field = value;
            }

            #[doc = concat!(
                "Set `", $label, "` from a variant or a raw string ",
                "and return `self` for chaining"
            )]
            pub fn [<with_ $field>](&mut self, value: impl ::std::convert::Into<$ty>) -> &mut Self {
                self.$field = ::std::option::Option::Some(value.into());
                self
            }

            #[doc = concat!("Return this record with `", $label, "` set")]
            pub fn $field(mut self, value: impl ::std::convert::Into<$ty>) -> Self {
                self.$field = ::std::option::Option::Some(value.into());
                self
            }
        }
    };
}
