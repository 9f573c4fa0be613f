//! Row source for active effects.
//!
//! Snapshot effects come first, followed by rows derived at construction
//! time: a Pain entry built from the pain penalty block, and an In Sunlight
//! entry for sunlight-sensitive characters. The environment is consulted
//! only here, through the snapshot passed in.

use super::{Emphasis, RowLine, RowSource};
use crate::data::{CharacterSheet, EnvironmentSnapshot};

struct EffectRow {
    name: String,
    description: String,
    emphasis: Emphasis,
}

pub struct EffectsSource {
    rows: Vec<EffectRow>,
}

impl EffectsSource {
    pub fn new(sheet: &CharacterSheet, env: &EnvironmentSnapshot) -> Self {
        let mut rows: Vec<EffectRow> = sheet
            .effects
            .iter()
            .map(|e| EffectRow {
                name: e.name.clone(),
                description: e.description.clone(),
                emphasis: Emphasis::Normal,
            })
            .collect();

        if !sheet.pain.is_zero() {
            rows.push(EffectRow {
                name: "Pain".to_string(),
                description: pain_text(sheet),
                emphasis: Emphasis::Bad,
            });
        }

        if env.in_sunlight && sheet.has_trait_flag("sunlight_sensitive") {
            rows.push(EffectRow {
                name: "In Sunlight".to_string(),
                description: "The sunlight irritates you.\n\
                              Strength - 1;    Dexterity - 1;    \
                              Intelligence - 1;    Perception - 1"
                    .to_string(),
                emphasis: Emphasis::Bad,
            });
        }

        Self { rows }
    }
}

fn pain_text(sheet: &CharacterSheet) -> String {
    let p = &sheet.pain;
    let mut parts = Vec::new();
    if p.strength > 0 {
        parts.push(format!("Strength -{}", p.strength));
    }
    if p.dexterity > 0 {
        parts.push(format!("Dexterity -{}", p.dexterity));
    }
    if p.intelligence > 0 {
        parts.push(format!("Intelligence -{}", p.intelligence));
    }
    if p.perception > 0 {
        parts.push(format!("Perception -{}", p.perception));
    }
    if p.speed > 0 {
        parts.push(format!("Speed -{}%", p.speed));
    }
    parts.join("   ")
}

impl RowSource for EffectsSource {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn row(&self, index: usize) -> RowLine {
        let row = &self.rows[index];
        RowLine::new(row.name.clone(), String::new(), row.emphasis)
    }

    fn detail(&self, index: usize) -> String {
        self.rows[index].description.clone()
    }
}
