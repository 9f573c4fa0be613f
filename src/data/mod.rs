//! Snapshot data consumed by the sheet session.
//!
//! The session renders a point-in-time snapshot of the character and the
//! environment around them; nothing in here is re-queried mid-session.

pub mod character;
pub mod environment;

pub use character::{
    BodyRegion, CharacterSheet, Effect, PainPenalty, RegionEncumbrance, Skill, StatBlock, Stats,
    Trait, TraitKind,
};
pub use environment::EnvironmentSnapshot;
