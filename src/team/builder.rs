//! Team assembly: toggling characters into a provisional trio.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::characters::{CharacterDefinition, CharacterId};
use crate::core::{TeamError, TEAM_SIZE};

/// A confirmed team: exactly three distinct character IDs, in slot order.
///
/// Serializes as a plain JSON array of IDs. Deserializing anything else
/// (wrong length, duplicates) fails.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<CharacterId>", into = "Vec<CharacterId>")]
pub struct TeamSelection {
    ids: Vec<CharacterId>,
}

impl TeamSelection {
    /// Validate a list of IDs as a team.
    pub fn new(ids: Vec<CharacterId>) -> Result<Self, TeamError> {
        if ids.len() < TEAM_SIZE {
            return Err(TeamError::IncompleteTeam {
                selected: ids.len(),
                required: TEAM_SIZE,
            });
        }
        if ids.len() > TEAM_SIZE {
            return Err(TeamError::TeamFull { capacity: TEAM_SIZE });
        }
        for (i, id) in ids.iter().enumerate() {
            if ids[..i].contains(id) {
                return Err(TeamError::Duplicate(id.clone()));
            }
        }
        Ok(Self { ids })
    }

    #[must_use]
    pub fn ids(&self) -> &[CharacterId] {
        &self.ids
    }

    pub fn iter(&self) -> impl Iterator<Item = &CharacterId> {
        self.ids.iter()
    }
}

impl TryFrom<Vec<CharacterId>> for TeamSelection {
    type Error = TeamError;

    fn try_from(ids: Vec<CharacterId>) -> Result<Self, Self::Error> {
        Self::new(ids)
    }
}

impl From<TeamSelection> for Vec<CharacterId> {
    fn from(selection: TeamSelection) -> Self {
        selection.ids
    }
}

/// Result of a successful toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggle {
    Added,
    Removed,
}

/// Provisional selection built up from roster clicks.
///
/// ## Example
///
/// ```
/// use strategy_arena::characters::Catalog;
/// use strategy_arena::team::{TeamBuilder, Toggle};
///
/// let catalog = Catalog::builtin().unwrap();
/// let mut builder = TeamBuilder::new();
///
/// for character in catalog.unlocked().take(3) {
///     assert_eq!(builder.toggle(character), Ok(Toggle::Added));
/// }
/// let team = builder.confirm().unwrap();
/// assert_eq!(team.ids().len(), 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TeamBuilder {
    selected: SmallVec<[CharacterId; TEAM_SIZE]>,
}

impl TeamBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start editing from a previously confirmed team.
    #[must_use]
    pub fn from_selection(selection: &TeamSelection) -> Self {
        Self {
            selected: selection.iter().cloned().collect(),
        }
    }

    /// Add the character, or remove it if already selected.
    ///
    /// Adding a fourth character is rejected with `TeamFull` and leaves
    /// the selection unchanged. Locked characters are rejected too.
    pub fn toggle(&mut self, character: &CharacterDefinition) -> Result<Toggle, TeamError> {
        if let Some(pos) = self.selected.iter().position(|id| *id == character.id) {
            self.selected.remove(pos);
            tracing::debug!(character = %character.id, "Removed from team");
            return Ok(Toggle::Removed);
        }
        if !character.unlocked {
            return Err(TeamError::Locked(character.id.clone()));
        }
        if self.is_full() {
            tracing::debug!(character = %character.id, "Team full, selection unchanged");
            return Err(TeamError::TeamFull { capacity: TEAM_SIZE });
        }
        self.selected.push(character.id.clone());
        tracing::debug!(character = %character.id, size = self.selected.len(), "Added to team");
        Ok(Toggle::Added)
    }

    #[must_use]
    pub fn is_selected(&self, id: &CharacterId) -> bool {
        self.selected.contains(id)
    }

    #[must_use]
    pub fn selected(&self) -> &[CharacterId] {
        &self.selected
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.selected.len() >= TEAM_SIZE
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Finalize the selection. Requires exactly three characters.
    pub fn confirm(&self) -> Result<TeamSelection, TeamError> {
        TeamSelection::new(self.selected.to_vec())
    }
}
