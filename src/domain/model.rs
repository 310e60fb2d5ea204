use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub type CharacterId = u32;

/// Maximum number of characters in a team.
pub const TEAM_CAPACITY: usize = 4;

pub const MIN_RARITY: u8 = 1;
pub const MAX_RARITY: u8 = 5;

/// A catalog entry. Owned by the catalog and never mutated by the team logic;
/// only `id` takes part in identity comparisons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub element: String,
    pub weapon: String,
    pub image: String,
    /// Absent on import reads as `None`; always written back, as `null` if unset.
    #[serde(default)]
    pub rarity: Option<u8>,
}

impl Character {
    pub fn element_kind(&self) -> Option<Element> {
        self.element.parse().ok()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Pyro,
    Hydro,
    Anemo,
    Electro,
    Dendro,
    Cryo,
    Geo,
}

impl FromStr for Element {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pyro" => Ok(Self::Pyro),
            "hydro" => Ok(Self::Hydro),
            "anemo" => Ok(Self::Anemo),
            "electro" => Ok(Self::Electro),
            "dendro" => Ok(Self::Dendro),
            "cryo" => Ok(Self::Cryo),
            "geo" => Ok(Self::Geo),
            _ => Err(()),
        }
    }
}

/// Result of toggling a character in a [`Team`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    /// Team was full and the character absent; nothing changed.
    Saturated,
}

/// Ordered, deduplicated selection of at most [`TEAM_CAPACITY`] characters.
///
/// The only ways to change a team are [`Team::toggle`], [`Team::remove`] and
/// the validating constructors, so `len() <= TEAM_CAPACITY` and id uniqueness
/// hold for every value of this type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Team {
    members: Vec<Character>,
}

impl Team {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.members.len() >= TEAM_CAPACITY
    }

    pub fn open_slots(&self) -> usize {
        TEAM_CAPACITY - self.members.len()
    }

    pub fn contains(&self, id: CharacterId) -> bool {
        self.members.iter().any(|c| c.id == id)
    }

    pub fn members(&self) -> &[Character] {
        &self.members
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Character> {
        self.members.iter()
    }

    pub fn ids(&self) -> Vec<CharacterId> {
        self.members.iter().map(|c| c.id).collect()
    }

    pub fn toggle(&mut self, character: &Character) -> ToggleOutcome {
        if self.contains(character.id) {
            self.members.retain(|c| c.id != character.id);
            ToggleOutcome::Removed
        } else if !self.is_full() {
            self.members.push(character.clone());
            ToggleOutcome::Added
        } else {
            ToggleOutcome::Saturated
        }
    }

    pub fn remove(&mut self, id: CharacterId) -> Option<Character> {
        let position = self.members.iter().position(|c| c.id == id)?;
        Some(self.members.remove(position))
    }

    /// Builds a team from an already-ordered member list, rejecting lists
    /// that break the capacity or uniqueness rules.
    pub fn try_from_members(members: Vec<Character>) -> crate::utils::error::Result<Self> {
        use crate::utils::error::TeamError;

        if members.len() > TEAM_CAPACITY {
            return Err(TeamError::CapacityExceeded {
                len: members.len(),
                capacity: TEAM_CAPACITY,
            });
        }
        for (i, member) in members.iter().enumerate() {
            if members[..i].iter().any(|c| c.id == member.id) {
                return Err(TeamError::DuplicateId { id: member.id });
            }
        }
        Ok(Self { members })
    }

    /// Builds a team keeping the first occurrence of each id and at most
    /// [`TEAM_CAPACITY`] members, in input order.
    pub fn truncating(members: Vec<Character>) -> Self {
        let mut team = Self::new();
        for member in members {
            if team.is_full() {
                break;
            }
            if !team.contains(member.id) {
                team.members.push(member);
            }
        }
        team
    }
}

impl<'a> IntoIterator for &'a Team {
    type Item = &'a Character;
    type IntoIter = std::slice::Iter<'a, Character>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

/// What `replace` does with an imported member list that breaks team rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ImportPolicy {
    /// Refuse the import and keep the current team.
    #[default]
    Reject,
    /// Drop repeated ids and everything past the fourth member.
    Truncate,
}

impl fmt::Display for ImportPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reject => write!(f, "reject"),
            Self::Truncate => write!(f, "truncate"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn character(id: CharacterId) -> Character {
        Character {
            id,
            name: format!("Character {}", id),
            element: "Pyro".to_string(),
            weapon: "Sword".to_string(),
            image: format!("/images/{}.png", id),
            rarity: Some(4),
        }
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut team = Team::new();
        assert_eq!(team.toggle(&character(1)), ToggleOutcome::Added);
        assert_eq!(team.ids(), vec![1]);
        assert_eq!(team.toggle(&character(1)), ToggleOutcome::Removed);
        assert!(team.is_empty());
    }

    #[test]
    fn test_toggle_saturates_at_capacity() {
        let mut team = Team::new();
        for id in 1..=4 {
            team.toggle(&character(id));
        }
        assert_eq!(team.toggle(&character(5)), ToggleOutcome::Saturated);
        assert_eq!(team.ids(), vec![1, 2, 3, 4]);
        assert_eq!(team.open_slots(), 0);
    }

    #[test]
    fn test_toggle_removal_keeps_order() {
        let mut team = Team::new();
        for id in [7, 3, 9] {
            team.toggle(&character(id));
        }
        team.toggle(&character(3));
        assert_eq!(team.ids(), vec![7, 9]);
    }

    #[test]
    fn test_try_from_members_rejects_duplicates() {
        let err = Team::try_from_members(vec![character(1), character(2), character(1)]).unwrap_err();
        assert!(matches!(err, crate::utils::error::TeamError::DuplicateId { id: 1 }));
    }

    #[test]
    fn test_truncating_dedups_and_caps() {
        let team = Team::truncating(vec![
            character(1),
            character(1),
            character(2),
            character(3),
            character(4),
            character(5),
        ]);
        assert_eq!(team.ids(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_element_parsing_is_lenient() {
        assert_eq!("Cryo".parse::<Element>(), Ok(Element::Cryo));
        assert_eq!(" geo ".parse::<Element>(), Ok(Element::Geo));
        assert!("Quantum".parse::<Element>().is_err());
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::default(), Theme::Light);
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle().toggle(), Theme::Dark);
    }
}
