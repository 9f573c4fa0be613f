//! Row source for innate traits.

use super::{Emphasis, RowLine, RowSource};
use crate::data::{CharacterSheet, Trait, TraitKind};

/// Traits sorted good first, then neutral, then bad, alphabetical within
/// each group.
pub struct TraitsSource {
    traits: Vec<Trait>,
}

impl TraitsSource {
    pub fn new(sheet: &CharacterSheet) -> Self {
        let mut traits = sheet.traits.clone();
        traits.sort_by(|a, b| a.kind.cmp(&b.kind).then_with(|| a.name.cmp(&b.name)));
        Self { traits }
    }

    fn emphasis(kind: TraitKind) -> Emphasis {
        match kind {
            TraitKind::Good => Emphasis::Good,
            TraitKind::Neutral => Emphasis::Accent,
            TraitKind::Bad => Emphasis::Bad,
        }
    }
}

impl RowSource for TraitsSource {
    fn row_count(&self) -> usize {
        self.traits.len()
    }

    fn row(&self, index: usize) -> RowLine {
        let t = &self.traits[index];
        RowLine::new(t.name.clone(), String::new(), Self::emphasis(t.kind))
    }

    fn detail(&self, index: usize) -> String {
        let t = &self.traits[index];
        format!("{}: {}", t.name, t.description)
    }
}
