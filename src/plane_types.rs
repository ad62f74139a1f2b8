//! Static type-code to aircraft-name lookup

use std::collections::HashMap;
use std::path::Path;

use tracing::{info, warn};

const UNKNOWN_TYPE: &str = "(unknown)";

/// Code->name table loaded once at startup; an absent or broken file just
/// means every lookup resolves to "(unknown)".
#[derive(Debug, Default)]
pub struct PlaneTypes {
    names: HashMap<String, String>,
}

impl PlaneTypes {
    /// Load from a JSON object of {"B738": "Boeing 737-800", ...}.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(body) => match Self::from_json(&body) {
                Ok(table) => {
                    info!("Loaded {} aircraft type names from {:?}", table.len(), path);
                    table
                }
                Err(e) => {
                    warn!("Ignoring malformed type table {:?}: {}", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("No aircraft type table at {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        let names: HashMap<String, String> = serde_json::from_str(body)?;
        Ok(Self { names })
    }

    pub fn name_of(&self, code: &str) -> &str {
        self.names.get(code).map(String::as_str).unwrap_or(UNKNOWN_TYPE)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_and_fallback() {
        let table = PlaneTypes::from_json(r#"{"B738":"Boeing 737-800"}"#).unwrap();
        assert_eq!(table.name_of("B738"), "Boeing 737-800");
        assert_eq!(table.name_of("A320"), "(unknown)");
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(PlaneTypes::from_json("[1,2,3]").is_err());
    }

    #[test]
    fn test_missing_file_yields_empty_table() {
        let table = PlaneTypes::load(Path::new("/nonexistent/plane_types.json"));
        assert!(table.is_empty());
        assert_eq!(table.name_of("B738"), "(unknown)");
    }
}
