//! Row source for per-region encumbrance and warmth.
//!
//! Symmetric regions (arms, hands, legs, feet) collapse into one row when
//! both halves read the same on everything the row shows; the reduction is
//! computed once at construction through `core::pairing`.

use super::{Emphasis, RowLine, RowSource};
use crate::core::pairing::{self, PairedRow};
use crate::data::{BodyRegion, CharacterSheet, RegionEncumbrance};

/// Rescale raw warmth units to the signed figure the player sees.
fn display_warmth(warmth: i32) -> i32 {
    (warmth as f64 / 100.0 * 2.0) as i32 - 100
}

/// Two regions merge only when every displayed figure matches exactly:
/// armor encumbrance, layer penalty, and rescaled warmth.
fn equal_for_display(a: &RegionEncumbrance, b: &RegionEncumbrance) -> bool {
    a.armor == b.armor
        && a.layer_penalty == b.layer_penalty
        && display_warmth(a.warmth) == display_warmth(b.warmth)
}

pub struct EncumbranceSource {
    regions: Vec<RegionEncumbrance>,
    rows: Vec<PairedRow>,
}

impl EncumbranceSource {
    pub fn new(sheet: &CharacterSheet) -> Self {
        let regions = sheet.body.clone();
        let rows = pairing::reduce(
            regions.len(),
            |i| {
                regions[i]
                    .region
                    .paired()
                    .and_then(|p| regions.iter().position(|r| r.region == p))
            },
            |i, j| equal_for_display(&regions[i], &regions[j]),
        );
        Self { regions, rows }
    }

    fn emphasis(total: i32) -> Emphasis {
        if total <= 0 {
            Emphasis::Muted
        } else if total < 10 {
            Emphasis::Normal
        } else if total < 40 {
            Emphasis::Bad
        } else {
            Emphasis::VeryBad
        }
    }

    /// Region-specific consequences of the effective encumbrance. Merged
    /// rows report the pair's combined magnitude.
    fn describe(region: BodyRegion, eff: i32) -> String {
        use BodyRegion::*;
        match region {
            Torso => format!(
                "Melee attack rolls {:+}%; Dodge skill {:+.1}; \
                 melee and thrown attacks cost {:+} movement points.",
                (-eff).max(-80),
                -(eff / 10) as f64,
                eff
            ),
            Head => "Head encumbrance has no effect; it simply limits how much \
                     you can wear up there."
                .to_string(),
            Eyes => format!(
                "Perception {:+} when checking traps or firing ranged weapons;\n\
                 Dispersion {:+} when throwing items.",
                -(eff / 10),
                eff * 10
            ),
            Mouth => "Covering your mouth makes it harder to breathe and to \
                      catch your breath."
                .to_string(),
            ArmLeft | ArmRight => "Arm encumbrance raises the stamina cost of \
                                   melee attacks and hurts accuracy with ranged \
                                   weapons."
                .to_string(),
            HandLeft | HandRight => format!(
                "Slows down anything done with the hands.\n\
                 Reloading costs {:+} movement points; Dexterity {:+.1} when \
                 throwing items; melee attacks cost {:+} movement points.",
                (eff / 10) * 15,
                -(eff as f64 / 10.0),
                eff / 2
            ),
            LegLeft | LegRight => format!(
                "Running costs {:+} movement points; Dodge skill {:+.1}.",
                (eff as f64 * 0.15) as i32,
                -(eff as f64 / 40.0)
            ),
            FootLeft | FootRight => format!(
                "Running costs {:+} movement points.",
                (eff as f64 * 0.25) as i32
            ),
        }
    }
}

impl RowSource for EncumbranceSource {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn row(&self, index: usize) -> RowLine {
        let row = self.rows[index];
        let entry = &self.regions[row.primary];
        RowLine::new(
            entry.region.heading(row.merged),
            format!(
                "{:>3}+{:<2} ({:>4})",
                entry.armor,
                entry.layer_penalty,
                display_warmth(entry.warmth)
            ),
            Self::emphasis(entry.total()),
        )
    }

    fn detail(&self, index: usize) -> String {
        let row = self.rows[index];
        let entry = &self.regions[row.primary];
        // A merged row speaks for both halves, so its magnitude doubles.
        let eff = entry.total() * if row.merged { 2 } else { 1 };
        Self::describe(entry.region, eff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::BodyRegion::*;

    fn region(region: BodyRegion, armor: i32, layer_penalty: i32, warmth: i32) -> RegionEncumbrance {
        RegionEncumbrance {
            region,
            armor,
            layer_penalty,
            warmth,
        }
    }

    fn sheet_with_body(body: Vec<RegionEncumbrance>) -> CharacterSheet {
        let mut sheet = CharacterSheet::sample();
        sheet.body = body;
        sheet
    }

    #[test]
    fn equal_arms_merge_into_a_plural_row() {
        let source = EncumbranceSource::new(&sheet_with_body(vec![
            region(ArmLeft, 8, 2, 5000),
            region(ArmRight, 8, 2, 5000),
        ]));
        assert_eq!(source.row_count(), 1);
        assert_eq!(source.row(0).label, "Arms");
    }

    #[test]
    fn unequal_feet_stay_separate() {
        let source = EncumbranceSource::new(&sheet_with_body(vec![
            region(FootLeft, 7, 0, 5000),
            region(FootRight, 9, 0, 5000),
        ]));
        assert_eq!(source.row_count(), 2);
        assert_eq!(source.row(0).label, "L. Foot");
        assert_eq!(source.row(1).label, "R. Foot");
    }

    #[test]
    fn warmth_difference_blocks_a_merge_only_when_visible() {
        // Raw warmth differs but rescales to the same display value.
        let source = EncumbranceSource::new(&sheet_with_body(vec![
            region(HandLeft, 5, 0, 5000),
            region(HandRight, 5, 0, 5020),
        ]));
        assert_eq!(source.row_count(), 1);

        // A visible warmth difference keeps the rows apart.
        let source = EncumbranceSource::new(&sheet_with_body(vec![
            region(HandLeft, 5, 0, 5000),
            region(HandRight, 5, 0, 5600),
        ]));
        assert_eq!(source.row_count(), 2);
    }

    #[test]
    fn sample_sheet_merges_all_but_the_hands() {
        // The sample's hands differ in warmth; arms, legs, and feet match.
        let source = EncumbranceSource::new(&CharacterSheet::sample());
        assert_eq!(source.row_count(), 12 - 3);
    }

    #[test]
    fn merged_detail_doubles_the_magnitude() {
        let merged = EncumbranceSource::new(&sheet_with_body(vec![
            region(LegLeft, 20, 0, 5000),
            region(LegRight, 20, 0, 5000),
        ]));
        let single = EncumbranceSource::new(&sheet_with_body(vec![region(LegLeft, 40, 0, 5000)]));
        assert_eq!(merged.detail(0), single.detail(0));
    }

    #[test]
    fn empty_body_is_a_valid_empty_panel() {
        let source = EncumbranceSource::new(&sheet_with_body(Vec::new()));
        assert_eq!(source.row_count(), 0);
    }
}
