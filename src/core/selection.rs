use crate::domain::model::{Character, CharacterId, ImportPolicy, Team, ToggleOutcome};
use crate::utils::error::Result;

/// Owns the current [`Team`] and applies the UI's selection events to it.
#[derive(Debug, Clone, Default)]
pub struct SelectionStore {
    team: Team,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn team(&self) -> &Team {
        &self.team
    }

    /// Adds `character` if absent and there is room, removes it if present.
    /// A full team silently ignores new characters.
    pub fn toggle(&mut self, character: &Character) -> &Team {
        match self.team.toggle(character) {
            ToggleOutcome::Added => {
                tracing::debug!("Added {} (id {}) to team", character.name, character.id)
            }
            ToggleOutcome::Removed => {
                tracing::debug!("Removed {} (id {}) from team", character.name, character.id)
            }
            ToggleOutcome::Saturated => {
                tracing::debug!("Team full, ignoring {} (id {})", character.name, character.id)
            }
        }
        &self.team
    }

    pub fn remove(&mut self, id: CharacterId) -> &Team {
        match self.team.remove(id) {
            Some(removed) => tracing::debug!("Removed {} (id {}) from team", removed.name, id),
            None => tracing::debug!("Id {} not in team, nothing removed", id),
        }
        &self.team
    }

    /// Replaces the whole team. The member list is re-checked against the
    /// team rules according to `policy`; on error the current team is kept.
    pub fn replace(&mut self, members: Vec<Character>, policy: ImportPolicy) -> Result<&Team> {
        let incoming = members.len();
        let team = match policy {
            ImportPolicy::Reject => Team::try_from_members(members)?,
            ImportPolicy::Truncate => Team::truncating(members),
        };

        if team.len() < incoming {
            tracing::warn!(
                "Import trimmed from {} to {} members (policy: {})",
                incoming,
                team.len(),
                policy
            );
        }

        self.team = team;
        Ok(&self.team)
    }
}
