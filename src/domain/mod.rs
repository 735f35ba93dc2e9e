//! Domain layer - Character data, menu tree and action identifiers
//!
//! This layer contains:
//! - Entities: Character, Item, Encounter, MenuTree, Layout
//! - Value Objects: ids, action kinds, the identifier codec, settings

pub mod entities;
pub mod value_objects;
