//! Narrative dice resolution engine for Skein.
//!
//! Implements the symbol-dice system used by narrative tabletop RPGs: seven
//! die types whose faces show symbols (success, failure, advantage, threat,
//! triumph, despair, light/dark Force points) rather than numbers. Provides
//! the canonical face tables, pool composition (add, remove, upgrade,
//! downgrade), roll execution with injectable randomness, and the
//! cancellation algorithm that reduces raw symbols to a net outcome.

pub mod aggregate;
pub mod die;
pub mod error;
pub mod pool;
pub mod roll;
pub mod symbol;
mod table;
pub mod theme;

pub use aggregate::{NetResult, aggregate, raw_totals};
pub use die::Die;
pub use error::{DiceError, DiceResult};
pub use pool::Pool;
pub use roll::{FaceRoll, FaceSource, FixedFaces, RngFaces, RollResult};
pub use symbol::Symbols;
pub use theme::{DEFAULT_THEME, EngineConfig, Theme, ThemeRegistry};
