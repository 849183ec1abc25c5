//! The fixed beach catalog behind the map section.
use serde::{Deserialize, Serialize};

/// One of the beaches the squad covers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beach {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub blurb: String,
    /// Embed URL for the third-party map iframe.
    #[serde(default)]
    pub map_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BeachCatalog {
    #[serde(default)]
    pub beaches: Vec<Beach>,
}

impl BeachCatalog {
    /// Load a catalog from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed or if validation fails.
    pub fn from_json(json_str: &str) -> Result<Self, String> {
        let catalog: Self =
            serde_json::from_str(json_str).map_err(|e| format!("JSON parse error: {e}"))?;
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), String> {
        for beach in &self.beaches {
            if beach.id.trim().is_empty() {
                return Err(format!("beach '{}' has an empty id", beach.name));
            }
        }
        for (i, beach) in self.beaches.iter().enumerate() {
            if self.beaches[..i].iter().any(|other| other.id == beach.id) {
                return Err(format!("duplicate beach id '{}'", beach.id));
            }
        }
        Ok(())
    }

    /// Load the shipped catalog from static assets, falling back to an
    /// empty catalog if the asset fails to parse.
    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_json(include_str!(
            "../../shoresquad-web/static/assets/data/beaches.json"
        ))
        .unwrap_or_default()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Beach> {
        self.beaches.iter().find(|beach| beach.id == id)
    }

    /// The default map selection.
    #[must_use]
    pub fn first(&self) -> Option<&Beach> {
        self.beaches.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_catalog_has_the_four_beaches() {
        let catalog = BeachCatalog::load_from_static();
        assert_eq!(catalog.beaches.len(), 4);
        for id in ["pasir-ris", "sentosa", "east-coast", "changi"] {
            assert!(catalog.get(id).is_some(), "missing beach {id}");
        }
        assert_eq!(catalog.first().map(|b| b.id.as_str()), Some("pasir-ris"));
    }

    #[test]
    fn lookup_by_unknown_id_is_none() {
        let catalog = BeachCatalog::load_from_static();
        assert!(catalog.get("punggol").is_none());
    }

    #[test]
    fn from_json_rejects_duplicate_ids() {
        let json = r#"{"beaches": [
            {"id": "sentosa", "name": "Sentosa Beach", "lat": 1.2485, "lng": 103.8294},
            {"id": "sentosa", "name": "Sentosa Again", "lat": 1.2485, "lng": 103.8294}
        ]}"#;
        assert!(BeachCatalog::from_json(json).is_err());
    }

    #[test]
    fn from_json_rejects_blank_ids() {
        let json = r#"{"beaches": [{"id": " ", "name": "Nowhere", "lat": 0.0, "lng": 0.0}]}"#;
        assert!(BeachCatalog::from_json(json).is_err());
    }
}
