//! A side's live combatants.

use serde::{Deserialize, Serialize};

use crate::characters::{Catalog, CharacterId, Combatant};
use crate::core::BattleError;

/// Ordered combatants of one side.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    members: Vec<Combatant>,
}

impl Team {
    /// Project every ID through the catalog.
    ///
    /// Unknown IDs are skipped; if fewer than `size` combatants resolve the
    /// team is refused with `IncompleteTeam`.
    pub fn resolve<'a>(
        catalog: &Catalog,
        ids: impl IntoIterator<Item = &'a CharacterId>,
        size: usize,
    ) -> Result<Self, BattleError> {
        let members: Vec<Combatant> = ids
            .into_iter()
            .filter_map(|id| {
                let found = catalog.get(id);
                if found.is_none() {
                    tracing::warn!(character = %id, "Unknown character in team");
                }
                found
            })
            .map(Combatant::from_definition)
            .take(size)
            .collect();

        if members.len() < size {
            return Err(BattleError::IncompleteTeam {
                resolved: members.len(),
                required: size,
            });
        }
        Ok(Self { members })
    }

    #[must_use]
    pub fn from_members(members: Vec<Combatant>) -> Self {
        Self { members }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Combatant> {
        self.members.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Combatant> {
        self.members.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Combatant> {
        self.members.iter()
    }

    /// Lowest index with health above 0.
    #[must_use]
    pub fn first_active(&self) -> Option<usize> {
        self.members.iter().position(Combatant::is_active)
    }

    #[must_use]
    pub fn has_active(&self) -> bool {
        self.first_active().is_some()
    }

    /// True for an empty team too.
    #[must_use]
    pub fn all_defeated(&self) -> bool {
        !self.has_active()
    }

    /// Count down every cooldown and restore Ki on every member.
    ///
    /// `skip` names one `(member, ability)` whose cooldown was set in this
    /// same step and must not be counted down.
    pub(crate) fn end_of_turn(&mut self, ki: u32, skip: Option<(usize, usize)>) {
        for (i, member) in self.members.iter_mut().enumerate() {
            let held = match skip {
                Some((m, a)) if m == i => member.ability(a).map(|ab| ab.current_cooldown),
                _ => None,
            };
            member.tick_cooldowns();
            if let (Some(value), Some((_, a))) = (held, skip) {
                if let Some(ability) = member.ability_mut(a) {
                    ability.current_cooldown = value;
                }
            }
            member.restore_ki(ki);
        }
        tracing::debug!(ki, exempt = ?skip, "End of turn tick");
    }
}

impl std::ops::Index<usize> for Team {
    type Output = Combatant;

    fn index(&self, index: usize) -> &Combatant {
        &self.members[index]
    }
}
