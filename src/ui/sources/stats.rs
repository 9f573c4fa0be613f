//! Row source for the four primary attributes.

use super::{Emphasis, RowLine, RowSource};
use crate::data::{CharacterSheet, StatBlock};

/// Fixed four-row source: Strength, Dexterity, Intelligence, Perception.
pub struct StatsSource {
    rows: [(&'static str, StatBlock); 4],
    weight_capacity: f64,
}

impl StatsSource {
    pub fn new(sheet: &CharacterSheet) -> Self {
        let s = &sheet.stats;
        Self {
            rows: [
                ("Strength", s.strength),
                ("Dexterity", s.dexterity),
                ("Intelligence", s.intelligence),
                ("Perception", s.perception),
            ],
            weight_capacity: sheet.weight_capacity,
        }
    }

    /// Condition scale relative to the unmodified maximum.
    fn emphasis(stat: StatBlock) -> Emphasis {
        if stat.cur <= 0 {
            Emphasis::Muted
        } else if stat.cur < stat.max / 2 {
            Emphasis::VeryBad
        } else if stat.cur < stat.max {
            Emphasis::Bad
        } else if stat.cur == stat.max {
            Emphasis::Normal
        } else if (stat.cur as f64) < stat.max as f64 * 1.5 {
            Emphasis::Good
        } else {
            Emphasis::VeryGood
        }
    }
}

impl RowSource for StatsSource {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn row(&self, index: usize) -> RowLine {
        let (name, stat) = self.rows[index];
        RowLine::new(
            format!("{}:", name),
            format!("{:2} ({:2})", stat.cur, stat.max),
            Self::emphasis(stat),
        )
    }

    fn detail(&self, index: usize) -> String {
        let (_, stat) = self.rows[index];
        let cur = stat.cur;
        match index {
            0 => format!(
                "Strength drives melee damage, carrying capacity, total hit \
                 points, and any action that comes down to brute force.\n\
                 Base HP: {}\nCarry weight (kg): {:.1}\nMelee damage bonus: {:+.1}",
                40 + 4 * stat.max,
                self.weight_capacity,
                0.75 * (cur - 8) as f64
            ),
            1 => format!(
                "Dexterity governs your chance to hit in melee, steadies your \
                 aim at range, and sharpens actions that need finesse.\n\
                 Melee to-hit bonus: {:+.1}\nRanged penalty: {:+}\n\
                 Throwing penalty per target dodge: {:+}",
                0.5 * (cur - 8) as f64,
                -(12 - cur).max(0),
                -(10 - cur).max(0)
            ),
            2 => format!(
                "Intelligence matters most for complex tasks like electronics \
                 and crafting, and decides how much you absorb from reading.\n\
                 Read time: {}%\nSkill rust: {}%\nCrafting bonus: {}%",
                (160 - 5 * cur).max(50),
                (100 - 10 * cur).max(0),
                cur
            ),
            _ => format!(
                "Perception is the key stat for ranged combat, and helps you \
                 notice traps and other details worth noticing.\n\
                 Trap detection level: {:2}\nAiming penalty: {:+}",
                cur,
                -(10 - cur).max(0)
            ),
        }
    }
}
