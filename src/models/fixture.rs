use serde::Deserialize;

/// One record of a seed-data file.
///
/// Fixture files are JSON arrays in the usual dump layout:
///
/// ```json
/// [{ "model": "travel_wishlist.place", "pk": 1, "fields": { "name": "Tokyo", "visited": false } }]
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct FixtureRecord {
    pub model: String,
    pub pk: i64,
    pub fields: PlaceFields,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaceFields {
    pub name: String,
    #[serde(default)]
    pub visited: bool,
}

impl FixtureRecord {
    /// Whether this record describes a place. Only the last dotted segment of
    /// `model` is checked, so `place` and `travel_wishlist.place` both match.
    pub fn is_place(&self) -> bool {
        self.model
            .rsplit('.')
            .next()
            .is_some_and(|m| m.eq_ignore_ascii_case("place"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(model: &str) -> FixtureRecord {
        FixtureRecord {
            model: model.to_string(),
            pk: 1,
            fields: PlaceFields {
                name: "Tokyo".to_string(),
                visited: false,
            },
        }
    }

    #[test]
    fn recognises_place_models() {
        assert!(record("travel_wishlist.place").is_place());
        assert!(record("place").is_place());
        assert!(record("app.Place").is_place());
    }

    #[test]
    fn rejects_other_models() {
        assert!(!record("auth.user").is_place());
        assert!(!record("travel_wishlist.placement").is_place());
    }
}
