//! Pending player selection.
//!
//! The presentation layer builds an action in three clicks: a combatant,
//! one of its abilities, then a target. `PendingSelection` holds the first
//! two until the third arrives. The engine clears it whenever the turn
//! changes.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingSelection {
    pub character: Option<usize>,
    pub ability: Option<usize>,
}

impl PendingSelection {
    /// Select a combatant, dropping any chosen ability.
    pub(crate) fn set_character(&mut self, index: usize) {
        self.character = Some(index);
        self.ability = None;
    }

    pub(crate) fn set_ability(&mut self, index: usize) {
        self.ability = Some(index);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Combatant and ability, once both are chosen.
    #[must_use]
    pub fn ready(&self) -> Option<(usize, usize)> {
        self.character.zip(self.ability)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.character.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_resets_ability() {
        let mut selection = PendingSelection::default();
        selection.set_character(1);
        selection.set_ability(2);
        assert_eq!(selection.ready(), Some((1, 2)));

        selection.set_character(0);
        assert_eq!(selection.ability, None);
        assert_eq!(selection.ready(), None);

        selection.clear();
        assert!(selection.is_empty());
    }
}
