use crate::domain::model::{Character, CharacterId, MAX_RARITY, MIN_RARITY};
use crate::utils::error::{Result, TeamError};
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use std::collections::HashSet;
use std::path::Path;

const BUILTIN_CATALOG: &str = include_str!("../../data/characters.json");

/// Read-only, ordered list of every selectable character.
#[derive(Debug, Clone)]
pub struct Catalog {
    characters: Vec<Character>,
}

impl Catalog {
    pub fn new(characters: Vec<Character>) -> Result<Self> {
        let catalog = Self { characters };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_CATALOG)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let characters: Vec<Character> =
            serde_json::from_str(content).map_err(|e| TeamError::CatalogError {
                message: format!("catalog is not a valid character list: {}", e),
            })?;
        Self::new(characters)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        let catalog = Self::from_json_str(&content)?;
        tracing::info!(
            "Loaded {} characters from {}",
            catalog.len(),
            path.as_ref().display()
        );
        Ok(catalog)
    }

    pub fn get(&self, id: CharacterId) -> Option<&Character> {
        self.characters.iter().find(|c| c.id == id)
    }

    pub fn lookup(&self, id: CharacterId) -> Result<&Character> {
        self.get(id).ok_or(TeamError::UnknownCharacter { id })
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}

impl Validate for Catalog {
    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for character in &self.characters {
            if !seen.insert(character.id) {
                return Err(TeamError::CatalogError {
                    message: format!("duplicate character id {}", character.id),
                });
            }

            let field = format!("character {}", character.id);
            let checked = validate_non_empty_string(&format!("{}.name", field), &character.name)
                .and_then(|_| match character.rarity {
                    Some(rarity) => validate_range(
                        &format!("{}.rarity", field),
                        rarity,
                        MIN_RARITY,
                        MAX_RARITY,
                    ),
                    None => Ok(()),
                });
            if let Err(e) = checked {
                return Err(TeamError::CatalogError {
                    message: e.to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = Catalog::builtin().unwrap();
        assert!(!catalog.is_empty());
        assert_eq!(catalog.lookup(4).unwrap().name, "Bennett");
    }

    #[test]
    fn test_unknown_id() {
        let catalog = Catalog::builtin().unwrap();
        assert!(matches!(
            catalog.lookup(999),
            Err(TeamError::UnknownCharacter { id: 999 })
        ));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let content = r#"[
            {"id":1,"name":"Amber","element":"Pyro","weapon":"Bow","image":"/a.png","rarity":4},
            {"id":1,"name":"Kaeya","element":"Cryo","weapon":"Sword","image":"/k.png","rarity":4}
        ]"#;
        assert!(matches!(
            Catalog::from_json_str(content),
            Err(TeamError::CatalogError { .. })
        ));
    }

    #[test]
    fn test_rejects_out_of_range_rarity() {
        let content = r#"[{"id":1,"name":"Amber","element":"Pyro","weapon":"Bow","image":"/a.png","rarity":7}]"#;
        let err = Catalog::from_json_str(content).unwrap_err();
        assert!(err.to_string().contains("rarity"));
    }
}
