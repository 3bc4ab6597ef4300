use serde::de::{self, Deserializer, Unexpected};
use serde::{Deserialize, Serialize};

/// A destination on the wishlist.
///
/// The `id` is assigned by the store when the place is created and never
/// changes. `visited` only ever moves from `false` to `true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    pub id: i64,
    pub name: String,
    pub visited: bool,
}

/// Input for creating a new place, submitted as an HTML form.
///
/// Names are stored as given, including the empty string.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlaceInput {
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub visited: bool,
}

impl CreatePlaceInput {
    /// A new wishlist entry.
    pub fn unvisited(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visited: false,
        }
    }
}

/// Parse a form boolean.
///
/// Browsers send `on` for a ticked checkbox and omit the field otherwise;
/// other clients send `true`/`false` in whatever case their language prints.
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Some(true),
        "false" | "off" | "no" | "0" | "" => Some(false),
        _ => None,
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFlag {
    Bool(bool),
    Text(String),
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match RawFlag::deserialize(deserializer)? {
        RawFlag::Bool(flag) => Ok(flag),
        RawFlag::Text(raw) => parse_flag(&raw)
            .ok_or_else(|| de::Error::invalid_value(Unexpected::Str(&raw), &"a boolean")),
    }
}
