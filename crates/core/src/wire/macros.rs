//! Declaration macros for entities and enumerated wire values.

/// Declare an entity struct together with its field table and wire code.
///
/// Generates:
/// - the struct, deriving `Debug`, `Clone`, `Default`, `PartialEq`
/// - a [`Fields`](crate::wire::Fields) impl backed by a static
///   [`FieldTable`](crate::wire::FieldTable)
/// - a [`WireField`](crate::wire::WireField) impl so the entity can be nested
///   inside other entities
///
/// The [`Entity`](crate::wire::Entity) impl is written separately so entities
/// can override parts of the conversion contract.
///
/// ```rust
/// use shipstation_core::wire::Entity;
///
/// shipstation_core::wire_entity! {
///     /// A parcel locker.
///     pub struct Locker {
///         pub locker_id: Option<i64>,
///         pub postal_code: Option<String>,
///     }
/// }
///
/// impl Entity for Locker {}
///
/// let locker = Locker { locker_id: Some(7), postal_code: None };
/// assert_eq!(
///     locker.to_wire_json().unwrap(),
///     r#"{"lockerId":"7","postalCode":null}"#
/// );
/// ```
#[macro_export]
macro_rules! wire_entity {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $ty,
            )*
        }

        impl $crate::wire::Fields for $name {
            fn field_table() -> &'static $crate::wire::FieldTable {
                static TABLE: ::std::sync::LazyLock<$crate::wire::FieldTable> =
                    ::std::sync::LazyLock::new(|| {
                        $crate::wire::FieldTable::new(
                            stringify!($name),
                            &[$(stringify!($field)),*],
                        )
                    });
                &TABLE
            }

            fn write_fields_except(
                &self,
                out: &mut $crate::wire::WireObject,
                skip: &[&str],
            ) -> ::core::result::Result<(), $crate::MappingError> {
                let table = <Self as $crate::wire::Fields>::field_table();
                $(
                    if !skip.contains(&stringify!($field)) {
                        out.insert(
                            table
                                .wire_name(stringify!($field))
                                .unwrap_or(stringify!($field))
                                .to_owned(),
                            $crate::wire::WireField::to_wire(&self.$field)?,
                        );
                    }
                )*
                Ok(())
            }

            fn read_field(
                &mut self,
                field: &str,
                value: ::serde_json::Value,
            ) -> $crate::wire::FieldRead {
                match field {
                    $(
                        stringify!($field) => match $crate::wire::WireField::from_wire(value) {
                            Some(parsed) => {
                                self.$field = parsed;
                                $crate::wire::FieldRead::Set
                            }
                            None => $crate::wire::FieldRead::Mismatch,
                        },
                    )*
                    _ => $crate::wire::FieldRead::Unknown,
                }
            }

            fn field_truthy(&self, field: &str) -> Option<bool> {
                match field {
                    $(
                        stringify!($field) => Some($crate::wire::WireField::is_truthy(&self.$field)),
                    )*
                    _ => None,
                }
            }
        }

        impl $crate::wire::WireField for $name {
            fn to_wire(&self) -> ::core::result::Result<::serde_json::Value, $crate::MappingError> {
                $crate::wire::Entity::to_wire_object(self).map(::serde_json::Value::Object)
            }

            fn from_wire(value: ::serde_json::Value) -> Option<Self> {
                <Self as $crate::wire::Entity>::from_wire_object(value).ok()
            }

            fn is_truthy(&self) -> bool {
                true
            }
        }
    };
}

/// Declare an enumerated wire value.
///
/// Generates the enum with its serde renames, the list of allowed wire
/// strings (`VALUES`), `as_str`/`parse`, `Display`/`FromStr`, and a
/// [`WireField`](crate::wire::WireField) impl that writes the wire string and
/// only accepts in-set strings on the way in.
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident as $field:literal {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Every allowed wire value, in declaration order.
            pub const VALUES: &'static [&'static str] = &[$($wire),+];

            /// The wire string for this value.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }

            /// Parse a wire string.
            ///
            /// # Errors
            ///
            /// Returns `MappingError::InvalidEnumValue` if `value` is not one
            /// of [`Self::VALUES`].
            pub fn parse(value: &str) -> ::core::result::Result<Self, $crate::MappingError> {
                match value {
                    $($wire => Ok(Self::$variant),)+
                    _ => Err($crate::MappingError::InvalidEnumValue {
                        field: $field,
                        value: value.to_owned(),
                        allowed: Self::VALUES.join(", "),
                    }),
                }
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::MappingError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl $crate::wire::WireField for $name {
            fn to_wire(&self) -> ::core::result::Result<::serde_json::Value, $crate::MappingError> {
                Ok(::serde_json::Value::String(self.as_str().to_owned()))
            }

            fn from_wire(value: ::serde_json::Value) -> Option<Self> {
                value.as_str().and_then(|s| Self::parse(s).ok())
            }

            fn is_truthy(&self) -> bool {
                true
            }
        }
    };
}
