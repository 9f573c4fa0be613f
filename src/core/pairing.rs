//! Reduction of symmetric entity pairs into single display rows.
//!
//! Some categories list entities that come in left/right pairs (arms, hands,
//! legs, feet). When both halves of a pair are indistinguishable on the
//! attributes the panel displays, the pair collapses to one row; otherwise
//! each half keeps its own row. The reduced row list is computed once at
//! panel construction and indexes it for the lifetime of the session.

/// One displayable row after reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairedRow {
    /// Index of the entity this row was emitted for.
    pub primary: usize,
    /// Index of the absorbed partner, when this row stands for a pair.
    pub absorbed: Option<usize>,
    /// True when this row stands for two entities judged equal for display.
    pub merged: bool,
}

impl PairedRow {
    fn single(primary: usize) -> Self {
        Self {
            primary,
            absorbed: None,
            merged: false,
        }
    }
}

/// Reduce `len` entities to display rows.
///
/// `partner(i)` names the symmetric counterpart of entity `i`, if any.
/// `equal_for_merge(i, j)` compares the display attributes of two entities;
/// it is only ever called with two valid indices that declare each other
/// reachable through `partner`.
///
/// Entities are visited in index order. An entity whose partner precedes it
/// and compares equal is absorbed into the partner's already-emitted row;
/// everything else gets its own row. A partner index outside `[0, len)` is
/// treated as absent.
pub fn reduce<P, E>(len: usize, partner: P, equal_for_merge: E) -> Vec<PairedRow>
where
    P: Fn(usize) -> Option<usize>,
    E: Fn(usize, usize) -> bool,
{
    let mut rows: Vec<PairedRow> = Vec::with_capacity(len);
    // Row slot each entity was emitted into; usize::MAX marks "absorbed".
    let mut row_of = vec![usize::MAX; len];

    for i in 0..len {
        if let Some(j) = partner(i) {
            if j < i && row_of[j] != usize::MAX && equal_for_merge(i, j) {
                let row = &mut rows[row_of[j]];
                row.merged = true;
                row.absorbed = Some(i);
                continue;
            }
        }
        row_of[i] = rows.len();
        rows.push(PairedRow::single(i));
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_pair_collapses_to_one_merged_row() {
        // Entities 0 and 1 are partners with equal display attributes.
        let rows = reduce(2, |i| Some(1 - i), |_, _| true);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].primary, 0);
        assert_eq!(rows[0].absorbed, Some(1));
        assert!(rows[0].merged);
    }

    #[test]
    fn unequal_pair_keeps_both_rows() {
        let rows = reduce(2, |i| Some(1 - i), |_, _| false);
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| !r.merged && r.absorbed.is_none()));
    }

    #[test]
    fn unpaired_entity_is_always_emitted() {
        let rows = reduce(3, |_| None, |_, _| true);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].primary, 1);
        assert!(!rows[1].merged);
    }

    #[test]
    fn missing_partner_never_merges() {
        // Entity 1 claims partner 7, which is not in the sequence. The
        // predicate must not even be consulted for it.
        let rows = reduce(
            2,
            |i| if i == 1 { Some(7) } else { None },
            |_, _| panic!("predicate called for missing partner"),
        );
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn twelve_regions_with_five_equal_pairs_reduce_to_seven() {
        // Six pairs (0,1) (2,3) ... (10,11); all but the last compare equal.
        let rows = reduce(
            12,
            |i| Some(i ^ 1),
            |i, j| (i.min(j), i.max(j)) != (10, 11),
        );
        assert_eq!(rows.len(), 7);
        assert_eq!(rows.iter().filter(|r| r.merged).count(), 5);
    }

    #[test]
    fn merged_rows_preserve_emission_order() {
        let rows = reduce(4, |i| Some(i ^ 1), |_, _| true);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].primary, 0);
        assert_eq!(rows[1].primary, 2);
    }
}
