//! Row source for learnable skills, the one actionable panel.

use super::{Emphasis, RowLine, RowSource};
use crate::data::{CharacterSheet, Skill};

/// Skills sorted by practiced level (highest first), then name. Holds its
/// own working copy so the training toggle stays session-local.
pub struct SkillsSource {
    skills: Vec<Skill>,
}

impl SkillsSource {
    pub fn new(sheet: &CharacterSheet) -> Self {
        let mut skills = sheet.skills.clone();
        skills.sort_by(|a, b| b.level.cmp(&a.level).then_with(|| a.name.cmp(&b.name)));
        Self { skills }
    }

    fn emphasis(skill: &Skill) -> Emphasis {
        if skill.capped {
            Emphasis::Normal
        } else if skill.training && skill.rusting {
            Emphasis::Bad
        } else if skill.rusting {
            Emphasis::VeryBad
        } else if skill.training {
            Emphasis::Good
        } else {
            Emphasis::Info
        }
    }
}

impl RowSource for SkillsSource {
    fn row_count(&self) -> usize {
        self.skills.len()
    }

    fn row(&self, index: usize) -> RowLine {
        let skill = &self.skills[index];
        RowLine::new(
            format!("{}:", skill.name),
            format!("{:>2}({:>3}%)", skill.level, skill.exercise.max(0)),
            Self::emphasis(skill),
        )
    }

    fn detail(&self, index: usize) -> String {
        self.skills[index].description.clone()
    }

    fn supports_confirm(&self) -> bool {
        true
    }

    /// Toggle whether practice advances this skill.
    fn confirm(&mut self, index: usize) {
        let skill = &mut self.skills[index];
        skill.training = !skill.training;
        tracing::debug!(skill = %skill.name, training = skill.training, "Toggled skill training");
    }
}
