//! Core types for pokereport.

mod creature;
mod ids;

pub use creature::{AbilitySlot, Creature, NamedResource, TypeSlot};
pub use ids::RunId;
