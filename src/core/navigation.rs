//! Navigation state machine over the sheet's panels.
//!
//! Tracks which panel holds focus and which row is selected in it, and maps
//! input events to transitions. Movement wraps within a panel; tab events
//! cycle focus across panels and reset the cursor. Confirm is only routed to
//! panels whose row source declares the actionable capability.

use crate::core::events::SheetEvent;

/// What the session loop should do after an event was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// The slice of panel behavior navigation needs to see.
///
/// `ListPanel` implements this by delegating to its row source; tests use
/// stub implementations.
pub trait NavTarget {
    fn row_count(&self) -> usize;
    fn supports_confirm(&self) -> bool;
    fn confirm(&mut self, line: usize);
}

/// Focus + cursor state for one display session.
#[derive(Debug, Clone, Copy)]
pub struct Navigator {
    active: usize,
    line: usize,
}

impl Navigator {
    pub fn new() -> Self {
        Self { active: 0, line: 0 }
    }

    /// Index of the focused panel.
    pub fn active(&self) -> usize {
        self.active
    }

    /// Selected line of the focused panel, clamped into `[0, count)`.
    /// `None` when the panel has no rows.
    pub fn selected_line(&self, count: usize) -> Option<usize> {
        if count == 0 {
            None
        } else {
            Some(self.line.min(count - 1))
        }
    }

    /// Apply one event against the panel set. Panels must be non-empty.
    pub fn apply<T: NavTarget>(&mut self, event: SheetEvent, panels: &mut [T]) -> Flow {
        debug_assert!(!panels.is_empty());
        debug_assert!(self.active < panels.len());

        match event {
            SheetEvent::MoveDown => {
                let count = panels[self.active].row_count();
                if count > 0 {
                    self.line = (self.line + 1) % count;
                }
            }
            SheetEvent::MoveUp => {
                let count = panels[self.active].row_count();
                if count > 0 {
                    self.line = if self.line == 0 {
                        count - 1
                    } else {
                        self.line - 1
                    };
                }
            }
            SheetEvent::NextTab => {
                self.active = (self.active + 1) % panels.len();
                self.line = 0;
            }
            SheetEvent::PrevTab => {
                self.active = (self.active + panels.len() - 1) % panels.len();
                self.line = 0;
            }
            SheetEvent::Confirm => {
                let panel = &mut panels[self.active];
                let count = panel.row_count();
                if panel.supports_confirm() && count > 0 {
                    panel.confirm(self.line.min(count - 1));
                }
            }
            SheetEvent::Help => {}
            SheetEvent::Quit => return Flow::Quit,
        }

        Flow::Continue
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Stub {
        rows: usize,
        actionable: bool,
        confirmed: Vec<usize>,
    }

    impl Stub {
        fn new(rows: usize) -> Self {
            Self {
                rows,
                actionable: false,
                confirmed: Vec::new(),
            }
        }

        fn actionable(rows: usize) -> Self {
            Self {
                rows,
                actionable: true,
                confirmed: Vec::new(),
            }
        }
    }

    impl NavTarget for Stub {
        fn row_count(&self) -> usize {
            self.rows
        }
        fn supports_confirm(&self) -> bool {
            self.actionable
        }
        fn confirm(&mut self, line: usize) {
            self.confirmed.push(line);
        }
    }

    #[test]
    fn movement_wraps_both_directions() {
        let mut panels = vec![Stub::new(3)];
        let mut nav = Navigator::new();

        nav.apply(SheetEvent::MoveUp, &mut panels);
        assert_eq!(nav.selected_line(3), Some(2));

        nav.apply(SheetEvent::MoveDown, &mut panels);
        assert_eq!(nav.selected_line(3), Some(0));

        nav.apply(SheetEvent::MoveDown, &mut panels);
        nav.apply(SheetEvent::MoveDown, &mut panels);
        nav.apply(SheetEvent::MoveDown, &mut panels);
        assert_eq!(nav.selected_line(3), Some(0));
    }

    #[test]
    fn movement_is_a_noop_on_empty_panel() {
        let mut panels = vec![Stub::new(0)];
        let mut nav = Navigator::new();

        nav.apply(SheetEvent::MoveDown, &mut panels);
        nav.apply(SheetEvent::MoveUp, &mut panels);
        assert_eq!(nav.selected_line(0), None);
        assert_eq!(nav.active(), 0);
    }

    #[test]
    fn tab_cycle_closes_and_resets_cursor() {
        let mut panels = vec![Stub::new(4), Stub::new(2), Stub::new(9)];
        let mut nav = Navigator::new();
        nav.apply(SheetEvent::MoveDown, &mut panels);
        nav.apply(SheetEvent::MoveDown, &mut panels);

        let start = nav.active();
        for _ in 0..panels.len() {
            nav.apply(SheetEvent::NextTab, &mut panels);
            assert_eq!(nav.selected_line(panels[nav.active()].rows), Some(0));
        }
        assert_eq!(nav.active(), start);
    }

    #[test]
    fn prev_tab_wraps_backwards() {
        let mut panels = vec![Stub::new(1), Stub::new(1), Stub::new(1)];
        let mut nav = Navigator::new();

        nav.apply(SheetEvent::PrevTab, &mut panels);
        assert_eq!(nav.active(), 2);
        nav.apply(SheetEvent::NextTab, &mut panels);
        assert_eq!(nav.active(), 0);
    }

    #[test]
    fn confirm_only_reaches_actionable_panels() {
        let mut panels = vec![Stub::new(3), Stub::actionable(3)];
        let mut nav = Navigator::new();

        nav.apply(SheetEvent::Confirm, &mut panels);
        assert!(panels[0].confirmed.is_empty());

        nav.apply(SheetEvent::NextTab, &mut panels);
        nav.apply(SheetEvent::MoveDown, &mut panels);
        nav.apply(SheetEvent::Confirm, &mut panels);
        assert_eq!(panels[1].confirmed, vec![1]);

        // Confirm never changes navigation state.
        assert_eq!(nav.active(), 1);
        assert_eq!(nav.selected_line(3), Some(1));
    }

    #[test]
    fn confirm_on_empty_actionable_panel_is_a_noop() {
        let mut panels = vec![Stub::actionable(0)];
        let mut nav = Navigator::new();
        nav.apply(SheetEvent::Confirm, &mut panels);
        assert!(panels[0].confirmed.is_empty());
    }

    #[test]
    fn quit_is_terminal() {
        let mut panels = vec![Stub::new(1)];
        let mut nav = Navigator::new();
        assert_eq!(nav.apply(SheetEvent::Quit, &mut panels), Flow::Quit);
        assert_eq!(nav.apply(SheetEvent::MoveDown, &mut panels), Flow::Continue);
    }
}
