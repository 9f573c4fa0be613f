//! Character snapshot types.
//!
//! A `CharacterSheet` is produced by the host once, at session start, and is
//! immutable for the session's lifetime (the skills panel keeps its own
//! working copy for the training toggle). Loaded from JSON so hosts in any
//! language can hand one over.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A current/maximum pair for one attribute.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StatBlock {
    pub cur: i32,
    pub max: i32,
}

/// The four primary attributes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Stats {
    pub strength: StatBlock,
    pub dexterity: StatBlock,
    pub intelligence: StatBlock,
    pub perception: StatBlock,
}

/// Body regions that can carry equipment. Symmetric regions name their
/// counterpart through [`BodyRegion::paired`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyRegion {
    Torso,
    Head,
    Eyes,
    Mouth,
    ArmLeft,
    ArmRight,
    HandLeft,
    HandRight,
    LegLeft,
    LegRight,
    FootLeft,
    FootRight,
}

impl BodyRegion {
    /// The symmetric counterpart, if this region has one.
    pub fn paired(self) -> Option<BodyRegion> {
        use BodyRegion::*;
        match self {
            ArmLeft => Some(ArmRight),
            ArmRight => Some(ArmLeft),
            HandLeft => Some(HandRight),
            HandRight => Some(HandLeft),
            LegLeft => Some(LegRight),
            LegRight => Some(LegLeft),
            FootLeft => Some(FootRight),
            FootRight => Some(FootLeft),
            Torso | Head | Eyes | Mouth => None,
        }
    }

    /// Display heading; `merged` selects the plural form used when a row
    /// stands for both halves of a pair.
    pub fn heading(self, merged: bool) -> &'static str {
        use BodyRegion::*;
        match (self, merged) {
            (Torso, _) => "Torso",
            (Head, _) => "Head",
            (Eyes, _) => "Eyes",
            (Mouth, _) => "Mouth",
            (ArmLeft, true) | (ArmRight, true) => "Arms",
            (ArmLeft, false) => "L. Arm",
            (ArmRight, false) => "R. Arm",
            (HandLeft, true) | (HandRight, true) => "Hands",
            (HandLeft, false) => "L. Hand",
            (HandRight, false) => "R. Hand",
            (LegLeft, true) | (LegRight, true) => "Legs",
            (LegLeft, false) => "L. Leg",
            (LegRight, false) => "R. Leg",
            (FootLeft, true) | (FootRight, true) => "Feet",
            (FootLeft, false) => "L. Foot",
            (FootRight, false) => "R. Foot",
        }
    }
}

/// Encumbrance and warmth readings for one body region.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RegionEncumbrance {
    pub region: BodyRegion,
    /// Encumbrance accumulated from worn equipment.
    pub armor: i32,
    /// Extra encumbrance from layering.
    pub layer_penalty: i32,
    /// Raw body warmth in internal units; rescaled for display.
    pub warmth: i32,
}

impl RegionEncumbrance {
    pub fn total(&self) -> i32 {
        self.armor + self.layer_penalty
    }
}

/// One learnable skill.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u32,
    /// Progress toward the next level, in percent.
    pub exercise: i32,
    /// Whether practice currently advances this skill.
    pub training: bool,
    /// Whether the skill is decaying from disuse.
    #[serde(default)]
    pub rusting: bool,
    /// Whether the skill has hit its cap and can no longer be trained.
    #[serde(default)]
    pub capped: bool,
    pub description: String,
}

/// Broad quality of a trait, used for ordering and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraitKind {
    Good,
    Neutral,
    Bad,
}

/// An innate trait or mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trait {
    pub name: String,
    pub kind: TraitKind,
    pub description: String,
    /// Behavior markers consulted by derived rows (e.g. "sunlight_sensitive",
    /// "cold_blooded", "quick", "sunlight_dependent").
    #[serde(default)]
    pub flags: Vec<String>,
}

/// A temporary condition affecting the character.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Effect {
    pub name: String,
    pub description: String,
}

/// Attribute penalties caused by current pain.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PainPenalty {
    pub strength: i32,
    pub dexterity: i32,
    pub intelligence: i32,
    pub perception: i32,
    /// Speed penalty, in percent.
    pub speed: i32,
}

impl PainPenalty {
    pub fn is_zero(&self) -> bool {
        self.strength == 0
            && self.dexterity == 0
            && self.intelligence == 0
            && self.perception == 0
            && self.speed == 0
    }
}

/// Complete character snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterSheet {
    pub name: String,
    pub gender: String,
    pub profession: String,
    pub stats: Stats,
    pub body: Vec<RegionEncumbrance>,
    pub skills: Vec<Skill>,
    pub traits: Vec<Trait>,
    pub effects: Vec<Effect>,
    /// Kilograms currently carried.
    pub weight_carried: f64,
    /// Kilograms the character can carry comfortably.
    pub weight_capacity: f64,
    #[serde(default)]
    pub pain: PainPenalty,
    /// Movement points granted per turn before modifiers.
    pub base_speed: i32,
    /// Cost of one step at current encumbrance, in movement points.
    pub run_cost: i32,
    #[serde(default)]
    pub thirst: i32,
    #[serde(default)]
    pub hunger: i32,
}

impl CharacterSheet {
    /// Load a snapshot from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read character sheet {}", path.display()))?;
        let sheet: CharacterSheet = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse character sheet {}", path.display()))?;
        Ok(sheet)
    }

    /// Whether any trait carries the given behavior flag.
    pub fn has_trait_flag(&self, flag: &str) -> bool {
        self.traits
            .iter()
            .any(|t| t.flags.iter().any(|f| f.eq_ignore_ascii_case(flag)))
    }

    /// Built-in sheet used when no snapshot path is given, and by tests.
    pub fn sample() -> Self {
        use BodyRegion::*;

        let region = |region, armor, layer_penalty, warmth| RegionEncumbrance {
            region,
            armor,
            layer_penalty,
            warmth,
        };

        let skill = |name: &str, level, exercise, training, rusting| Skill {
            name: name.to_string(),
            level,
            exercise,
            training,
            rusting,
            capped: false,
            description: format!("Covers everything that falls under {}.", name.to_lowercase()),
        };

        Self {
            name: "Mara Voss".to_string(),
            gender: "Female".to_string(),
            profession: "Scavenger".to_string(),
            stats: Stats {
                strength: StatBlock { cur: 9, max: 10 },
                dexterity: StatBlock { cur: 8, max: 8 },
                intelligence: StatBlock { cur: 11, max: 11 },
                perception: StatBlock { cur: 6, max: 9 },
            },
            body: vec![
                region(Torso, 12, 3, 5200),
                region(Head, 6, 0, 5100),
                region(Eyes, 2, 0, 5000),
                region(Mouth, 4, 0, 5000),
                region(ArmLeft, 8, 2, 5150),
                region(ArmRight, 8, 2, 5150),
                region(HandLeft, 5, 0, 4900),
                region(HandRight, 5, 0, 4950),
                region(LegLeft, 10, 1, 5250),
                region(LegRight, 10, 1, 5250),
                region(FootLeft, 7, 0, 5300),
                region(FootRight, 7, 0, 5300),
            ],
            skills: vec![
                skill("Fabrication", 4, 61, true, false),
                skill("Mechanics", 3, 12, true, false),
                skill("Melee", 3, 45, false, true),
                skill("Dodging", 2, 88, true, false),
                skill("First Aid", 1, 5, false, false),
                skill("Cooking", 1, 30, false, true),
            ],
            traits: vec![
                Trait {
                    name: "Quick".to_string(),
                    kind: TraitKind::Good,
                    description: "You move a little faster than most.".to_string(),
                    flags: vec!["quick".to_string()],
                },
                Trait {
                    name: "Night Vision".to_string(),
                    kind: TraitKind::Good,
                    description: "You see better than most in the dark.".to_string(),
                    flags: Vec::new(),
                },
                Trait {
                    name: "Light Sensitive".to_string(),
                    kind: TraitKind::Bad,
                    description: "Direct sunlight irritates you.".to_string(),
                    flags: vec!["sunlight_sensitive".to_string()],
                },
                Trait {
                    name: "Heavy Sleeper".to_string(),
                    kind: TraitKind::Neutral,
                    description: "You could sleep through a siege.".to_string(),
                    flags: Vec::new(),
                },
            ],
            effects: vec![
                Effect {
                    name: "Tired".to_string(),
                    description: "You need some rest. Intelligence - 1; Perception - 1".to_string(),
                },
                Effect {
                    name: "Bandaged".to_string(),
                    description: "The wound on your left arm is dressed and healing.".to_string(),
                },
            ],
            weight_carried: 31.4,
            weight_capacity: 36.0,
            pain: PainPenalty {
                strength: 1,
                dexterity: 0,
                intelligence: 0,
                perception: 1,
                speed: 5,
            },
            base_speed: 100,
            run_cost: 116,
            thirst: 12,
            hunger: 64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_sheet_round_trips_through_json() {
        let sheet = CharacterSheet::sample();
        let raw = serde_json::to_string(&sheet).unwrap();
        let back: CharacterSheet = serde_json::from_str(&raw).unwrap();
        assert_eq!(back.name, sheet.name);
        assert_eq!(back.body.len(), 12);
        assert_eq!(back.skills.len(), sheet.skills.len());
    }

    #[test]
    fn optional_fields_default_when_missing() {
        let raw = r#"{
            "name": "Test", "gender": "Male", "profession": "Drifter",
            "stats": {
                "strength": {"cur": 8, "max": 8},
                "dexterity": {"cur": 8, "max": 8},
                "intelligence": {"cur": 8, "max": 8},
                "perception": {"cur": 8, "max": 8}
            },
            "body": [], "skills": [], "traits": [], "effects": [],
            "weight_carried": 10.0, "weight_capacity": 30.0,
            "base_speed": 100, "run_cost": 100
        }"#;
        let sheet: CharacterSheet = serde_json::from_str(raw).unwrap();
        assert!(sheet.pain.is_zero());
        assert_eq!(sheet.thirst, 0);
        assert_eq!(sheet.hunger, 0);
    }

    #[test]
    fn paired_regions_point_at_each_other() {
        for region in [
            BodyRegion::ArmLeft,
            BodyRegion::HandRight,
            BodyRegion::LegLeft,
            BodyRegion::FootRight,
        ] {
            let partner = region.paired().unwrap();
            assert_eq!(partner.paired(), Some(region));
        }
        assert_eq!(BodyRegion::Torso.paired(), None);
    }

    #[test]
    fn trait_flags_match_case_insensitively() {
        let sheet = CharacterSheet::sample();
        assert!(sheet.has_trait_flag("QUICK"));
        assert!(sheet.has_trait_flag("sunlight_sensitive"));
        assert!(!sheet.has_trait_flag("cold_blooded"));
    }
}
