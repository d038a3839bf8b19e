//! Script-aware typesetting support for the report pages.
//!
//! Chooses between a script font and a default font per text run, keeps the
//! registry of embedded TrueType fonts, measures standard-font text with AFM
//! widths and shapes embedded-font text with rustybuzz.

pub mod error;
pub mod font;
pub mod metrics;
pub mod script;
pub mod shaper;

pub use error::FontError;
pub use font::{EmbeddedFont, FontId, FontRegistry, StandardFont};
pub use metrics::{encode_win_ansi, text_width};
pub use script::{DEVANAGARI, ScriptRange, select_font};
pub use shaper::{PositionedGlyph, ShapedText, shape_text};
