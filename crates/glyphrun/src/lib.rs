//! glyphrun - Complex Text Shaping
//!
//! This crate turns a paragraph of text into positioned glyphs:
//! - Bidi analysis and visual run ordering (unicode-bidi, UAX #9)
//! - Script itemization with paired-punctuation matching (unicode-script)
//! - Per-run shaping (rustybuzz - HarfBuzz port)
//! - Flat glyph output with UTF-8 or UTF-32 cluster indices

pub mod bidi;
pub mod glyph;
pub mod script;
pub mod shaper;

pub use bidi::{BidiRun, ParagraphInfo};
pub use glyph::GlyphInfo;
pub use script::ScriptRun;
pub use shaper::{Direction, TextShaper};

/// Text shaping error types
#[derive(Debug, thiserror::Error)]
pub enum ShapeError {
    #[error("Failed to parse font: {0}")]
    FontParsing(String),

    #[error("Invalid font feature: {0}")]
    InvalidFeature(String),
}

pub type Result<T> = std::result::Result<T, ShapeError>;
