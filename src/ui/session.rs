//! The interactive sheet session.
//!
//! Owns the terminal for its lifetime: raw mode and the alternate screen are
//! entered at construction and restored on every exit path, including drops
//! from a propagated error. The loop is synchronous; one blocking event
//! read per iteration is the only suspension point.

use super::sources::{
    EffectsSource, EncumbranceSource, SkillsSource, StatsSource, TraitsSource,
};
use super::{DetailPane, ListPanel, SpeedPanel};
use crate::config::{Config, KeyConfig};
use crate::core::{Flow, Navigator, SheetEvent};
use crate::data::{CharacterSheet, EnvironmentSnapshot};
use crate::theme::AppTheme;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Widget},
    Frame, Terminal,
};
use std::io;

pub struct SheetSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    panels: Vec<ListPanel>,
    speed: SpeedPanel,
    nav: Navigator,
    header: String,
    keys: KeyConfig,
    theme: AppTheme,
    help_visible: bool,
}

impl SheetSession {
    /// Build the panels from the snapshots and take over the terminal.
    pub fn new(
        sheet: &CharacterSheet,
        env: &EnvironmentSnapshot,
        config: &Config,
    ) -> Result<Self> {
        let panels = vec![
            ListPanel::new("STATS", Box::new(StatsSource::new(sheet))),
            ListPanel::new("ENCUMBRANCE", Box::new(EncumbranceSource::new(sheet))),
            ListPanel::new("SKILLS", Box::new(SkillsSource::new(sheet))),
            ListPanel::new("TRAITS", Box::new(TraitsSource::new(sheet))),
            ListPanel::new("EFFECTS", Box::new(EffectsSource::new(sheet, env))),
        ];

        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor()?;

        Ok(Self {
            terminal,
            panels,
            speed: SpeedPanel::new(sheet, env),
            nav: Navigator::new(),
            header: format!("{} | {} | {}", sheet.name, sheet.gender, sheet.profession),
            keys: config.keys.clone(),
            theme: AppTheme::resolve(&config.theme),
            help_visible: false,
        })
    }

    /// Run until the quit event. Redraws after every input; resize events
    /// simply fall through to the next draw.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let Self {
                terminal,
                panels,
                speed,
                nav,
                header,
                keys,
                theme,
                help_visible,
            } = self;
            terminal
                .draw(|frame| {
                    draw_ui(frame, panels, speed, nav, header, keys, theme, *help_visible)
                })
                .context("Failed to draw frame")?;

            match event::read().context("Failed to read terminal event")? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    let Some(sheet_event) = self.keys.resolve(key) else {
                        continue;
                    };
                    if self.help_visible
                        && !matches!(sheet_event, SheetEvent::Help | SheetEvent::Quit)
                    {
                        self.help_visible = false;
                        continue;
                    }
                    match sheet_event {
                        SheetEvent::Help => self.help_visible = !self.help_visible,
                        other => {
                            if self.nav.apply(other, &mut self.panels) == Flow::Quit {
                                tracing::info!("Sheet session closed");
                                break;
                            }
                        }
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for SheetSession {
    fn drop(&mut self) {
        // Restore the terminal even when run() never completed.
        let _ = self.cleanup();
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_ui(
    frame: &mut Frame,
    panels: &[ListPanel],
    speed: &SpeedPanel,
    nav: &Navigator,
    header: &str,
    keys: &KeyConfig,
    theme: &AppTheme,
    help_visible: bool,
) {
    debug_assert_eq!(panels.len(), 5);
    let area = frame.area();
    let buf = frame.buffer_mut();

    let [tip, top, info, bottom] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(9),
        Constraint::Length(8),
        Constraint::Min(6),
    ])
    .areas(area);

    draw_header(tip, buf, header, theme);

    let thirds = [Constraint::Ratio(1, 3); 3];
    let [stats_area, enc_area, speed_area] = Layout::horizontal(thirds).areas(top);
    let [skills_area, traits_area, effects_area] = Layout::horizontal(thirds).areas(bottom);

    let detail = DetailPane::new(info);
    detail.render_frame(buf, theme);

    let panel_areas = [stats_area, enc_area, skills_area, traits_area, effects_area];
    for (index, (panel, rect)) in panels.iter().zip(panel_areas).enumerate() {
        let focused = index == nav.active();
        let selected = if focused {
            nav.selected_line(panel.row_count())
        } else {
            None
        };
        let detail_target = if focused { Some(&detail) } else { None };
        panel.render(selected, focused, rect, buf, detail_target, theme);
    }

    speed.render(speed_area, buf, theme);

    if help_visible {
        draw_help_overlay(area, buf, keys, theme);
    }
}

fn draw_header(area: Rect, buf: &mut Buffer, header: &str, theme: &AppTheme) {
    if area.height == 0 {
        return;
    }
    buf.set_string(area.x, area.y, header, Style::default().fg(theme.header));

    let hint = "Press ? for help";
    let hint_len = hint.chars().count() as u16;
    if area.width > hint_len + header.chars().count() as u16 + 2 {
        buf.set_string(
            area.x + area.width - hint_len,
            area.y,
            hint,
            Style::default().fg(theme.header_hint),
        );
    }
}

/// Centered popup listing the effective keybinds. Any key dismisses it.
fn draw_help_overlay(area: Rect, buf: &mut Buffer, keys: &KeyConfig, theme: &AppTheme) {
    let bindings = keys.bindings();
    let width = 44u16.min(area.width);
    let height = (bindings.len() as u16 + 2).min(area.height);
    if width < 4 || height < 3 {
        return;
    }
    let popup = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    );

    Clear.render(popup, buf);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .title("KEYS");
    let inner = block.inner(popup);
    block.render(popup, buf);

    for (offset, (action, chords)) in bindings.iter().take(inner.height as usize).enumerate() {
        let line = format!("{:<22} {}", action, chords);
        let line: String = line.chars().take(inner.width as usize).collect();
        buf.set_string(
            inner.x,
            inner.y + offset as u16,
            line,
            Style::default().fg(theme.text),
        );
    }
}
