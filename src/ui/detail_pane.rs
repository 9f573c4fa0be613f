//! Shared detail surface.
//!
//! One pane, owned by the session, written by whichever panel holds focus.
//! Text is folded to the pane's width.

use crate::theme::AppTheme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct DetailPane {
    area: Rect,
}

impl DetailPane {
    pub fn new(area: Rect) -> Self {
        Self { area }
    }

    fn block(&self, theme: &AppTheme) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
    }

    /// Draw the empty frame. Called once per frame before panels render, so
    /// stale text never survives a selection change.
    pub fn render_frame(&self, buf: &mut Buffer, theme: &AppTheme) {
        let block = self.block(theme);
        let inner = block.inner(self.area);
        block.render(self.area, buf);
        for y in inner.top()..inner.bottom() {
            for x in inner.left()..inner.right() {
                buf[(x, y)].reset();
            }
        }
    }

    /// Draw `text` into the pane, folded to its width.
    pub fn render(&self, text: &str, buf: &mut Buffer, theme: &AppTheme) {
        let block = self.block(theme);
        let inner = block.inner(self.area);
        block.render(self.area, buf);

        Paragraph::new(text.to_string())
            .style(Style::default().fg(theme.detail_text))
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_text_folds_to_the_pane_width() {
        let theme = AppTheme::dark();
        let area = Rect::new(0, 0, 12, 5);
        let pane = DetailPane::new(area);
        let mut buf = Buffer::empty(area);

        pane.render("alpha beta gamma", &mut buf, &theme);

        // "alpha beta" fits on the first inner line, "gamma" wraps.
        let first: String = (1..11).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        let second: String = (1..11).map(|x| buf[(x, 2)].symbol().to_string()).collect();
        assert_eq!(first.trim(), "alpha beta");
        assert_eq!(second.trim(), "gamma");
    }

    #[test]
    fn empty_text_renders_an_empty_pane() {
        let theme = AppTheme::dark();
        let area = Rect::new(0, 0, 10, 4);
        let pane = DetailPane::new(area);
        let mut buf = Buffer::empty(area);

        pane.render("", &mut buf, &theme);
        assert_eq!(buf[(1, 1)].symbol(), " ");
    }
}
