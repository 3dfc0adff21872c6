use std::ops::Deref;

use serde::Deserialize;
use serde::de::{DeserializeOwned, Deserializer};

/// Deserializes an optional field, mapping absent, `null` and mistyped
/// values to `None`.
///
/// The raw value is buffered as a [`serde_json::Value`] first so a type
/// mismatch is contained to this one field.
pub(crate) fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// A JSON array whose malformed elements are dropped one by one.
///
/// A `null` or mistyped entry costs only that entry, so counts and the
/// remaining items survive. A value that is not an array at all is still
/// rejected, which the enclosing lenient field turns into `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct List<T>(pub Vec<T>);

impl<T> Default for List<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> Deref for List<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.0
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for List<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<serde_json::Value>::deserialize(deserializer)?;
        Ok(Self(
            items
                .into_iter()
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
        ))
    }
}

/// Declares a payload record whose fields are all lenient `Option`s.
///
/// ```ignore
/// payload! {
///     pub struct User {
///         login: String,
///         html_url: String,
///     }
/// }
/// ```
macro_rules! payload {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
        pub struct $name {
            $(
                $(#[$field_meta])*
                #[serde(default, deserialize_with = "crate::lenient::deserialize")]
                pub $field: Option<$ty>,
            )*
        }
    };
}

pub(crate) use payload;
