//! Generic scrollable, selectable list panel.
//!
//! A panel owns its row source and draws the visible window of rows into a
//! `Buffer`, highlighting the selected row and forwarding its detail text to
//! the shared detail pane. Rendering is a pure function of the selection and
//! the source; it never touches navigation state.

use super::sources::RowSource;
use super::{pin_right, DetailPane};
use crate::core::navigation::NavTarget;
use crate::theme::AppTheme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget},
};

pub struct ListPanel {
    title: String,
    source: Box<dyn RowSource>,
}

impl ListPanel {
    pub fn new(title: &str, source: Box<dyn RowSource>) -> Self {
        Self {
            title: title.to_string(),
            source,
        }
    }

    pub fn row_count(&self) -> usize {
        self.source.row_count()
    }

    /// Visible window `[min, max)` over `count` rows for a viewport of
    /// `height` rows, keeping `display_line` in view and centered once the
    /// list scrolls.
    pub fn window(height: usize, count: usize, display_line: usize) -> (usize, usize) {
        if count == 0 || height == 0 {
            return (0, 0);
        }
        let half = height / 2;
        if display_line <= half {
            (0, height.min(count))
        } else if display_line + half >= count {
            (count.saturating_sub(height), count)
        } else {
            let min = display_line - half;
            (min, (min + height).min(count))
        }
    }

    /// Draw the panel. `selected` highlights that row and routes its detail
    /// text to `detail`; `None` draws the unselected preview window from the
    /// top. `focused` only affects the title and border tone.
    pub fn render(
        &self,
        selected: Option<usize>,
        focused: bool,
        area: Rect,
        buf: &mut Buffer,
        detail: Option<&DetailPane>,
        theme: &AppTheme,
    ) {
        if area.width < 3 || area.height < 3 {
            return;
        }

        let mut title_style = Style::default().fg(theme.panel_title);
        if focused {
            title_style = title_style.bg(theme.highlight_bg);
        }
        let border = if focused {
            theme.border_focused
        } else {
            theme.border
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(self.title.as_str())
            .title_alignment(Alignment::Center)
            .title_style(title_style);

        let inner = block.inner(area);
        block.render(area, buf);

        let height = inner.height as usize;
        let count = self.source.row_count();
        if height == 0 || inner.width == 0 {
            return;
        }

        let display_line = selected.unwrap_or(0).min(count.saturating_sub(1));
        let (min, max) = Self::window(height, count, display_line);

        for index in min..max {
            let row = self.source.row(index);
            let y = inner.y + (index - min) as u16;
            let mut style = Style::default().fg(theme.emphasis(row.emphasis));
            if selected == Some(index) {
                style = style.bg(theme.highlight_bg);
            }
            let line = pin_right(&row.label, &row.value, inner.width as usize);
            buf.set_string(inner.x, y, line, style);
        }

        if count > height {
            let mut state = ScrollbarState::new(count - height).position(min);
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .style(Style::default().fg(theme.scrollbar))
                .render(inner, buf, &mut state);
        }

        if let (Some(line), Some(detail)) = (selected, detail) {
            if line < count {
                detail.render(&self.source.detail(line), buf, theme);
            }
        }
    }
}

impl NavTarget for ListPanel {
    fn row_count(&self) -> usize {
        self.source.row_count()
    }

    fn supports_confirm(&self) -> bool {
        self.source.supports_confirm()
    }

    fn confirm(&mut self, line: usize) {
        self.source.confirm(line);
    }
}
