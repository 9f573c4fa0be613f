//! Configuration loader plus strongly typed settings structures.
//!
//! Deserializes the optional `config.toml` (keybinds and theme), resolves
//! textual key chords against incoming `KeyEvent`s, and falls back to
//! compiled-in defaults when no file exists.

use crate::core::events::SheetEvent;
use anyhow::{Context, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Top-level configuration object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub keys: KeyConfig,
    pub theme: ThemeConfig,
}

/// Theme selection: a base variant plus per-key hex overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// "dark" or "light".
    pub variant: String,
    /// Overrides keyed by theme field name, values as `#rrggbb`.
    pub colors: HashMap<String, String>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            variant: "dark".to_string(),
            colors: HashMap::new(),
        }
    }
}

/// Keybinds per semantic event. Each entry is a list of chords such as
/// `"Up"`, `"k"`, `"Ctrl+n"`, or `"BackTab"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyConfig {
    pub move_up: Vec<String>,
    pub move_down: Vec<String>,
    pub next_tab: Vec<String>,
    pub prev_tab: Vec<String>,
    pub confirm: Vec<String>,
    pub help: Vec<String>,
    pub quit: Vec<String>,
}

impl Default for KeyConfig {
    fn default() -> Self {
        let chords = |list: &[&str]| list.iter().map(|s| s.to_string()).collect();
        Self {
            move_up: chords(&["Up", "k"]),
            move_down: chords(&["Down", "j"]),
            next_tab: chords(&["Tab", "Right"]),
            prev_tab: chords(&["BackTab", "Left"]),
            confirm: chords(&["Enter"]),
            help: chords(&["?"]),
            quit: chords(&["q", "Esc"]),
        }
    }
}

impl KeyConfig {
    /// Map a raw key event to a semantic event, if any chord matches.
    pub fn resolve(&self, key: KeyEvent) -> Option<SheetEvent> {
        let name = key_event_name(key)?;
        let name = normalize_chord(&name);

        let table: [(&[String], SheetEvent); 7] = [
            (self.move_up.as_slice(), SheetEvent::MoveUp),
            (self.move_down.as_slice(), SheetEvent::MoveDown),
            (self.next_tab.as_slice(), SheetEvent::NextTab),
            (self.prev_tab.as_slice(), SheetEvent::PrevTab),
            (self.confirm.as_slice(), SheetEvent::Confirm),
            (self.help.as_slice(), SheetEvent::Help),
            (self.quit.as_slice(), SheetEvent::Quit),
        ];

        for (chords, event) in table {
            if chords.iter().any(|c| normalize_chord(c) == name) {
                return Some(event);
            }
        }
        None
    }

    /// Human-readable binding list for the help overlay.
    pub fn bindings(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Move up", self.move_up.join(", ")),
            ("Move down", self.move_down.join(", ")),
            ("Next category", self.next_tab.join(", ")),
            ("Previous category", self.prev_tab.join(", ")),
            ("Toggle skill training", self.confirm.join(", ")),
            ("Help", self.help.join(", ")),
            ("Quit", self.quit.join(", ")),
        ]
    }
}

impl Config {
    /// Load configuration. An explicit path must exist; the default path is
    /// optional and silently falls back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Some(p) if p.exists() => p,
                _ => {
                    tracing::debug!("No config file, using defaults");
                    return Ok(Config::default());
                }
            },
        };

        let raw = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        tracing::info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// `<config dir>/dossier/config.toml`, when a config dir exists.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("dossier").join("config.toml"))
    }
}

/// Convert a key event to its chord name, e.g. `Ctrl+n` or `PageUp`.
///
/// Shift is folded into the character for `Char` keys, so `?` is just `?`.
/// Returns `None` for keys the sheet never binds.
pub fn key_event_name(key: KeyEvent) -> Option<String> {
    let mut parts: Vec<String> = Vec::new();

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl".to_string());
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt".to_string());
    }

    let key_str = match key.code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        // BackTab already implies Shift; the modifier is dropped.
        KeyCode::BackTab => "BackTab".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        _ => return None,
    };

    parts.push(key_str);
    Some(parts.join("+"))
}

/// Normalize a chord for comparison: canonical modifier order, lowercase key.
fn normalize_chord(chord: &str) -> String {
    let mut ctrl = false;
    let mut alt = false;
    let mut key = String::new();

    for part in chord.split('+') {
        match part.trim() {
            "Ctrl" | "Control" | "ctrl" => ctrl = true,
            "Alt" | "alt" => alt = true,
            // Shift is representational only; chars already carry it.
            "Shift" | "shift" => {}
            k => key = k.to_lowercase(),
        }
    }

    let mut out = String::new();
    if ctrl {
        out.push_str("ctrl+");
    }
    if alt {
        out.push_str("alt+");
    }
    out.push_str(&key);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn default_binds_cover_every_event() {
        let keys = KeyConfig::default();
        assert_eq!(keys.resolve(key(KeyCode::Up)), Some(SheetEvent::MoveUp));
        assert_eq!(keys.resolve(key(KeyCode::Char('j'))), Some(SheetEvent::MoveDown));
        assert_eq!(keys.resolve(key(KeyCode::Tab)), Some(SheetEvent::NextTab));
        assert_eq!(keys.resolve(key(KeyCode::BackTab)), Some(SheetEvent::PrevTab));
        assert_eq!(keys.resolve(key(KeyCode::Enter)), Some(SheetEvent::Confirm));
        assert_eq!(keys.resolve(key(KeyCode::Char('?'))), Some(SheetEvent::Help));
        assert_eq!(keys.resolve(key(KeyCode::Esc)), Some(SheetEvent::Quit));
    }

    #[test]
    fn unbound_keys_resolve_to_nothing() {
        let keys = KeyConfig::default();
        assert_eq!(keys.resolve(key(KeyCode::Char('x'))), None);
        assert_eq!(keys.resolve(key(KeyCode::F(5))), None);
    }

    #[test]
    fn shifted_backtab_still_matches() {
        let keys = KeyConfig::default();
        let shifted = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(keys.resolve(shifted), Some(SheetEvent::PrevTab));
    }

    #[test]
    fn chord_normalization_is_case_and_order_insensitive() {
        assert_eq!(normalize_chord("Ctrl+N"), normalize_chord("ctrl+n"));
        assert_eq!(normalize_chord("Shift+Tab"), normalize_chord("Tab"));
    }

    #[test]
    fn config_round_trips_through_toml() {
        let mut config = Config::default();
        config.keys.quit = vec!["Ctrl+c".to_string()];
        config.theme.variant = "light".to_string();

        let raw = toml::to_string(&config).unwrap();
        let back: Config = toml::from_str(&raw).unwrap();
        assert_eq!(back.keys.quit, vec!["Ctrl+c".to_string()]);
        assert_eq!(back.theme.variant, "light");

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(back.keys.resolve(ctrl_c), Some(SheetEvent::Quit));
    }

    #[test]
    fn partial_toml_keeps_remaining_defaults() {
        let raw = r#"
            [keys]
            quit = ["x"]
        "#;
        let config: Config = toml::from_str(raw).unwrap();
        assert_eq!(config.keys.quit, vec!["x".to_string()]);
        assert_eq!(config.keys.move_up, KeyConfig::default().move_up);
        assert_eq!(config.theme.variant, "dark");
    }
}
