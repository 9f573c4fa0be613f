//! Terminal rendering: panels, detail pane, and the interactive session.

pub mod detail_pane;
pub mod list_panel;
pub mod session;
pub mod sources;
pub mod speed_panel;

pub use detail_pane::DetailPane;
pub use list_panel::ListPanel;
pub use session::SheetSession;
pub use speed_panel::SpeedPanel;

/// Compose one row of fixed `width`: label on the left, value pinned to the
/// right edge, at least one space between them, padded so highlights span
/// the full row.
pub(crate) fn pin_right(label: &str, value: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let value_len = value.chars().count();
    if value.is_empty() {
        let mut out: String = label.chars().take(width).collect();
        let pad = width - out.chars().count();
        out.extend(std::iter::repeat(' ').take(pad));
        return out;
    }
    if width <= value_len {
        return value.chars().take(width).collect();
    }

    let label_space = width - value_len - 1;
    let label: String = label.chars().take(label_space).collect();
    let pad = width - label.chars().count() - value_len;
    format!("{}{}{}", label, " ".repeat(pad), value)
}
