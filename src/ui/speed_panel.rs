//! Non-navigable speed summary.
//!
//! Shows the step cost and effective speed, then every active percentage
//! modifier with its sign. Not part of the tab cycle; it has no rows to
//! select and no detail text.

use super::pin_right;
use crate::data::{CharacterSheet, EnvironmentSnapshot};
use crate::theme::AppTheme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Widget},
};

pub struct SpeedPanel {
    run_cost: i32,
    current_speed: i32,
    /// `(label, signed percent)` in display order.
    modifiers: Vec<(String, i32)>,
}

impl SpeedPanel {
    pub fn new(sheet: &CharacterSheet, env: &EnvironmentSnapshot) -> Self {
        let mut modifiers: Vec<(String, i32)> = Vec::new();

        if sheet.weight_carried > sheet.weight_capacity && sheet.weight_capacity > 0.0 {
            let over = sheet.weight_carried - sheet.weight_capacity;
            let pen = (25.0 * over / sheet.weight_capacity) as i32;
            modifiers.push(("Overburdened".to_string(), -pen.max(1)));
        }
        if sheet.pain.speed > 0 {
            modifiers.push(("Pain".to_string(), -sheet.pain.speed));
        }
        if sheet.thirst > 40 {
            modifiers.push(("Thirst".to_string(), -(sheet.thirst / 20).clamp(1, 30)));
        }
        if sheet.hunger > 100 {
            modifiers.push(("Hunger".to_string(), -(sheet.hunger / 50).clamp(1, 20)));
        }
        if sheet.has_trait_flag("sunlight_dependent") && !env.in_sunlight {
            let pen = if env.light_level >= 60 { 5 } else { 10 };
            modifiers.push(("Out of Sunlight".to_string(), -pen));
        }
        if sheet.has_trait_flag("cold_blooded") && env.temperature < 65 {
            modifiers.push(("Cold-Blooded".to_string(), -((65 - env.temperature) / 5).max(1)));
        }
        if sheet.has_trait_flag("quick") {
            modifiers.push(("Quick".to_string(), 10));
        }

        let total: i32 = modifiers.iter().map(|(_, pct)| pct).sum();
        let current_speed = sheet.base_speed * (100 + total) / 100;

        Self {
            run_cost: sheet.run_cost,
            current_speed,
            modifiers,
        }
    }

    pub fn current_speed(&self) -> i32 {
        self.current_speed
    }

    pub fn modifiers(&self) -> &[(String, i32)] {
        &self.modifiers
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &AppTheme) {
        if area.width < 3 || area.height < 3 {
            return;
        }
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title("SPEED")
            .title_alignment(Alignment::Center)
            .title_style(Style::default().fg(theme.panel_title));
        let inner = block.inner(area);
        block.render(area, buf);

        let width = inner.width as usize;
        let mut lines: Vec<(String, Style)> = Vec::new();

        let cost_color = if self.run_cost <= 100 {
            theme.good
        } else {
            theme.bad
        };
        lines.push((
            pin_right("Base Move Cost:", &self.run_cost.to_string(), width),
            Style::default().fg(cost_color),
        ));
        let speed_color = if self.current_speed >= 100 {
            theme.good
        } else {
            theme.bad
        };
        lines.push((
            pin_right("Current Speed:", &self.current_speed.to_string(), width),
            Style::default().fg(speed_color),
        ));

        for (label, pct) in &self.modifiers {
            let color = if *pct > 0 { theme.good } else { theme.bad };
            lines.push((
                pin_right(label, &format!("{:+}%", pct), width),
                Style::default().fg(color),
            ));
        }

        for (offset, (line, style)) in lines.iter().take(inner.height as usize).enumerate() {
            buf.set_string(inner.x, inner.y + offset as u16, line, *style);
        }
    }
}
