use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Tri-state wrapper distinguishing a field that was never present in a JSON
/// payload (`Unset`) from one that was present as an explicit `null` (`Null`).
///
/// Sonarr omits untouched optional fields from its payloads but sends explicit
/// nulls for nullable ones, and expects the same on the way back. A plain
/// `Option<T>` collapses the two cases, so every optional model field is a
/// `Field<T>` combined with `#[serde(default, skip_serializing_if = "Field::is_unset")]`:
/// an absent key deserializes to `Unset` and an `Unset` field is omitted
/// entirely on serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field<T> {
    Unset,
    Null,
    Value(T),
}

impl<T> Field<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, Field::Unset)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Field::Null)
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Field::Value(_))
    }

    /// Borrow the inner value if one is present.
    pub fn value(&self) -> Option<&T> {
        match self {
            Field::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Consume the field, keeping only a concrete value.
    pub fn into_value(self) -> Option<T> {
        match self {
            Field::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_ref(&self) -> Field<&T> {
        match self {
            Field::Unset => Field::Unset,
            Field::Null => Field::Null,
            Field::Value(v) => Field::Value(v),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Field<U> {
        match self {
            Field::Unset => Field::Unset,
            Field::Null => Field::Null,
            Field::Value(v) => Field::Value(f(v)),
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Field::Value(v) => v,
            _ => default,
        }
    }
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Field::Unset
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Field::Value(value)
    }
}

/// `None` maps to an explicit null, not to `Unset`; absence is only ever
/// produced by leaving the field at its default.
impl<T> From<Option<T>> for Field<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Field::Value(v),
            None => Field::Null,
        }
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Field::Value(v) => v.serialize(serializer),
            // Unset never reaches here when paired with skip_serializing_if.
            _ => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Field::from)
    }
}
