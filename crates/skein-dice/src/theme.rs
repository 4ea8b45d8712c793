//! Cosmetic dice themes.
//!
//! A theme picks the artwork and symbol font used to render dice; it never
//! changes the symbols a face produces. Two themes ship built in, and the
//! host may register more.

use serde::{Deserialize, Serialize};

use crate::die::Die;
use crate::error::{DiceError, DiceResult};

/// The theme used when none is configured or the requested one is missing.
pub const DEFAULT_THEME: &str = "starwars";

/// Cosmetic identity for a set of dice: icon art and symbol font.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Theme name, as selected in configuration.
    pub name: String,
    /// Font family used to render symbol glyphs.
    pub symbol_font: String,
}

impl Theme {
    /// The icon stem (artwork base name) for a die under this theme.
    ///
    /// The host resolves this against its own asset layout, e.g.
    /// `images/dice/<theme>/<stem>.png`.
    pub fn icon_stem(&self, die: Die) -> &'static str {
        match die {
            Die::Ability => "green",
            Die::Proficiency => "yellow",
            Die::Boost => "blue",
            Die::Setback => "black",
            Die::Difficulty => "purple",
            Die::Challenge => "red",
            Die::Force => "whiteHex",
        }
    }
}

/// Registry of available themes.
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    themes: Vec<Theme>,
}

impl ThemeRegistry {
    /// Registry with the two built-in themes, `starwars` and `genesys`.
    pub fn builtin() -> Self {
        Self {
            themes: vec![
                Theme {
                    name: "starwars".to_string(),
                    symbol_font: "SWRPG-Symbol-Regular".to_string(),
                },
                Theme {
                    name: "genesys".to_string(),
                    symbol_font: "Genesys-Symbol-Regular".to_string(),
                },
            ],
        }
    }

    /// Register an additional theme, replacing any existing one of the same
    /// name.
    pub fn register(&mut self, theme: Theme) {
        self.themes.retain(|t| t.name != theme.name);
        self.themes.push(theme);
    }

    /// Look up a theme by name.
    pub fn load(&self, name: &str) -> DiceResult<&Theme> {
        self.themes
            .iter()
            .find(|t| t.name == name)
            .ok_or_else(|| DiceError::UnknownTheme(name.to_string()))
    }

    /// Look up a theme by name, falling back to [`DEFAULT_THEME`] with a
    /// logged warning if it is not registered.
    pub fn load_or_default(&self, name: &str) -> &Theme {
        match self.load(name) {
            Ok(theme) => theme,
            Err(_) => {
                tracing::warn!(theme = name, "unknown dice theme, using default");
                // The default theme is always present in a builtin registry;
                // fall back to the first registered theme otherwise.
                self.themes
                    .iter()
                    .find(|t| t.name == DEFAULT_THEME)
                    .unwrap_or(&self.themes[0])
            }
        }
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Engine configuration fixed at startup.
///
/// Created once by the host and passed into construction; there is no
/// ambient global configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Selected dice theme name.
    pub theme: String,
}

impl EngineConfig {
    /// Set the dice theme.
    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = theme.into();
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
        }
    }
}
