//! Character catalog for definition lookup.
//!
//! The `Catalog` stores every playable character. It is loaded once and
//! never mutated afterwards. Lookup is by `CharacterId`; iteration keeps
//! the authoring order so rosters render in a stable order.

use rustc_hash::FxHashMap;

use super::definition::{CharacterDefinition, CharacterId, Rarity, Role};
use crate::core::CatalogError;

const BUILTIN_CHARACTERS: &str = include_str!("../../data/characters.json");

/// Read-only registry of character definitions.
///
/// ## Example
///
/// ```
/// use strategy_arena::characters::{Catalog, CharacterId};
///
/// let catalog = Catalog::builtin().unwrap();
/// let goku = catalog.get(&CharacterId::new("goku")).unwrap();
/// assert_eq!(goku.name, "Goku");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    characters: Vec<CharacterDefinition>,
    index: FxHashMap<CharacterId, usize>,
}

impl Catalog {
    /// Load the built-in roster.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CHARACTERS)
    }

    /// Parse a JSON array of character definitions.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let characters: Vec<CharacterDefinition> = serde_json::from_str(json)?;
        Self::from_definitions(characters)
    }

    /// Build a catalog from definitions, rejecting duplicates and
    /// characters without abilities.
    pub fn from_definitions(
        characters: impl IntoIterator<Item = CharacterDefinition>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::default();
        for character in characters {
            catalog.insert(character)?;
        }
        tracing::debug!(characters = catalog.len(), "Loaded character catalog");
        Ok(catalog)
    }

    fn insert(&mut self, character: CharacterDefinition) -> Result<(), CatalogError> {
        if self.index.contains_key(&character.id) {
            return Err(CatalogError::DuplicateId(character.id));
        }
        if character.abilities.is_empty() {
            return Err(CatalogError::NoAbilities(character.id));
        }
        self.index.insert(character.id.clone(), self.characters.len());
        self.characters.push(character);
        Ok(())
    }

    /// Get a character definition by ID.
    #[must_use]
    pub fn get(&self, id: &CharacterId) -> Option<&CharacterDefinition> {
        self.index.get(id).map(|&i| &self.characters[i])
    }

    /// Check if a character ID is known.
    #[must_use]
    pub fn contains(&self, id: &CharacterId) -> bool {
        self.index.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Iterate in authoring order.
    pub fn iter(&self) -> impl Iterator<Item = &CharacterDefinition> {
        self.characters.iter()
    }

    /// Characters available for team selection.
    pub fn unlocked(&self) -> impl Iterator<Item = &CharacterDefinition> {
        self.characters.iter().filter(|c| c.unlocked)
    }

    /// Characters still gated behind unlocks.
    pub fn locked(&self) -> impl Iterator<Item = &CharacterDefinition> {
        self.characters.iter().filter(|c| !c.unlocked)
    }

    pub fn by_role(&self, role: Role) -> impl Iterator<Item = &CharacterDefinition> {
        self.characters.iter().filter(move |c| c.role == role)
    }

    pub fn by_rarity(&self, rarity: Rarity) -> impl Iterator<Item = &CharacterDefinition> {
        self.characters.iter().filter(move |c| c.rarity == rarity)
    }
}
