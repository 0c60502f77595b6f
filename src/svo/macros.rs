//! Standard trait glue shared by all value objects.

/// Implements `Display`, `FromStr`, `TryFrom<&str>`, `Serialize` and
/// `Deserialize` in terms of the value object traits.
///
/// `Display` and `FromStr` use the ambient culture; serde goes through the
/// wire protocol of [`WireConvertible`](crate::svo::WireConvertible).
macro_rules! impl_svo {
    ($type:ty) => {
        impl ::std::fmt::Display for $type {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let text = $crate::svo::Formattable::to_string_with_provider(
                    self,
                    None,
                    $crate::formatting::FormatProvider::current(),
                )
                .map_err(|_| ::std::fmt::Error)?;
                f.write_str(&text)
            }
        }

        impl ::std::str::FromStr for $type {
            type Err = $crate::error::SvoError;

            fn from_str(text: &str) -> ::std::result::Result<Self, Self::Err> {
                <$type as $crate::svo::Parsable>::parse(text)
            }
        }

        impl ::std::convert::TryFrom<&str> for $type {
            type Error = $crate::error::SvoError;

            fn try_from(text: &str) -> ::std::result::Result<Self, Self::Error> {
                <$type as $crate::svo::Parsable>::parse(text)
            }
        }

        impl ::serde::Serialize for $type {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                $crate::svo::serialize_wire(
                    &$crate::svo::WireConvertible::to_wire(self),
                    serializer,
                )
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $type {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                $crate::svo::deserialize_wire(deserializer)
            }
        }
    };
}

pub(crate) use impl_svo;
