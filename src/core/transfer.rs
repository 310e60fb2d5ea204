//! Transfer documents: the portable JSON form of a team.
//!
//! A document is a bare JSON array of character objects in team order, with no
//! envelope. Import checks structure only; team rules (capacity, unique ids)
//! are enforced by [`SelectionStore::replace`](crate::core::selection::SelectionStore::replace).

use crate::domain::model::{Character, Team};
use crate::utils::error::{Result, TeamError};
use serde_json::Value;

/// File name offered for exported teams.
pub const EXPORT_FILE_NAME: &str = "genshin-team.json";

pub const TRANSFER_EXTENSION: &str = "json";

/// Keys every imported element must carry. `rarity` is optional.
pub const REQUIRED_KEYS: [&str; 5] = ["id", "name", "element", "weapon", "image"];

pub fn export(team: &Team) -> Result<String> {
    Ok(serde_json::to_string_pretty(team)?)
}

pub fn import(raw: &[u8]) -> Result<Vec<Character>> {
    let document: Value = serde_json::from_slice(raw).map_err(TeamError::MalformedEncoding)?;

    let elements = match document {
        Value::Array(elements) => elements,
        other => {
            return Err(TeamError::invalid_shape(
                "document",
                format!("expected an array of characters, found {}", json_kind(&other)),
            ))
        }
    };

    elements
        .into_iter()
        .enumerate()
        .map(|(index, element)| decode_character(index, element))
        .collect()
}

fn decode_character(index: usize, element: Value) -> Result<Character> {
    let location = format!("element {}", index);

    let Some(record) = element.as_object() else {
        return Err(TeamError::invalid_shape(
            location,
            format!("expected an object, found {}", json_kind(&element)),
        ));
    };

    let missing: Vec<&str> = REQUIRED_KEYS
        .iter()
        .copied()
        .filter(|key| !record.contains_key(*key))
        .collect();
    if !missing.is_empty() {
        return Err(TeamError::invalid_shape(
            location,
            format!("missing keys: {}", missing.join(", ")),
        ));
    }

    serde_json::from_value(element).map_err(|e| TeamError::invalid_shape(location, e.to_string()))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_without_rarity() {
        let raw = br#"[{"id":3,"name":"Kaeya","element":"Cryo","weapon":"Sword","image":"/k.png"}]"#;
        let members = import(raw).unwrap();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].rarity, None);
    }

    #[test]
    fn test_export_writes_null_rarity() {
        let catalog = crate::core::catalog::Catalog::from_json_str(
            r#"[{"id":1,"name":"Amber","element":"Pyro","weapon":"Bow","image":"/a.png"}]"#,
        )
        .unwrap();
        let mut team = Team::new();
        team.toggle(catalog.lookup(1).unwrap());

        let value: Value = serde_json::from_str(&export(&team).unwrap()).unwrap();
        assert_eq!(value[0].get("rarity"), Some(&Value::Null));

        let members = import(export(&team).unwrap().as_bytes()).unwrap();
        assert_eq!(members[0].rarity, None);
    }

    #[test]
    fn test_import_ignores_extra_keys() {
        let raw = br#"[{"id":3,"name":"Kaeya","element":"Cryo","weapon":"Sword","image":"/k.png","rarity":4,"level":90}]"#;
        let members = import(raw).unwrap();
        assert_eq!(members[0].rarity, Some(4));
    }

    #[test]
    fn test_import_rejects_non_array() {
        let err = import(br#"{"id":1}"#).unwrap_err();
        match err {
            TeamError::InvalidShape { location, reason } => {
                assert_eq!(location, "document");
                assert!(reason.contains("an object"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_import_rejects_wrong_field_type() {
        let raw = br#"[{"id":"one","name":"Amber","element":"Pyro","weapon":"Bow","image":"/a.png"}]"#;
        assert!(matches!(import(raw), Err(TeamError::InvalidShape { .. })));
    }

    #[test]
    fn test_import_reports_missing_keys() {
        let err = import(br#"[{"id":1,"name":"Amber"}]"#).unwrap_err();
        match err {
            TeamError::InvalidShape { location, reason } => {
                assert_eq!(location, "element 0");
                assert_eq!(reason, "missing keys: element, weapon, image");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_import_empty_array() {
        assert!(import(b"[]").unwrap().is_empty());
    }

    #[test]
    fn test_export_empty_team() {
        let document = export(&Team::new()).unwrap();
        assert_eq!(document, "[]");
    }
}
