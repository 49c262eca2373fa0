//! The creature record returned by the lookup service.

use serde::{Deserialize, Serialize};

/// A named reference to another resource on the lookup service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    /// Resource name (e.g. "static", "electric")
    pub name: String,

    /// Resource URL, when the service provides one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl NamedResource {
    /// Creates a reference with no URL.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: None,
        }
    }
}

/// One of a creature's abilities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilitySlot {
    /// The ability itself
    pub ability: NamedResource,

    /// Whether this is a hidden ability
    #[serde(default)]
    pub is_hidden: bool,

    /// Display slot (1-based)
    #[serde(default)]
    pub slot: u8,
}

/// One of a creature's elemental types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSlot {
    /// Display slot (1-based); slot 1 is the primary type
    #[serde(default)]
    pub slot: u8,

    /// The type itself
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

/// Creature attributes as returned by the lookup service.
///
/// Field names follow the remote JSON. Anything the service omits defaults to
/// empty or zero, so partial records are still representable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creature {
    /// Numeric identifier on the lookup service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,

    /// Lowercase creature name (e.g. "pikachu")
    #[serde(default)]
    pub name: String,

    /// Height in decimetres
    #[serde(default)]
    pub height: u32,

    /// Weight in hectograms
    #[serde(default)]
    pub weight: u32,

    /// Elemental types in slot order
    #[serde(default)]
    pub types: Vec<TypeSlot>,

    /// Abilities in slot order
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
}

impl Creature {
    /// Creates an otherwise empty record with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets height (decimetres) and weight (hectograms).
    pub fn with_measurements(mut self, height: u32, weight: u32) -> Self {
        self.height = height;
        self.weight = weight;
        self
    }

    /// Appends a type in the next slot.
    pub fn with_type(mut self, name: impl Into<String>) -> Self {
        let slot = self.types.len() as u8 + 1;
        self.types.push(TypeSlot {
            slot,
            kind: NamedResource::named(name),
        });
        self
    }

    /// Appends a non-hidden ability in the next slot.
    pub fn with_ability(mut self, name: impl Into<String>) -> Self {
        let slot = self.abilities.len() as u8 + 1;
        self.abilities.push(AbilitySlot {
            ability: NamedResource::named(name),
            is_hidden: false,
            slot,
        });
        self
    }

    /// The first listed type, if any.
    pub fn primary_type(&self) -> Option<&str> {
        self.types.first().map(|t| t.kind.name.as_str())
    }

    /// Type names in slot order.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(|t| t.kind.name.as_str())
    }

    /// Ability names in slot order.
    pub fn ability_names(&self) -> impl Iterator<Item = &str> {
        self.abilities.iter().map(|a| a.ability.name.as_str())
    }
}
