//! Text shaper using rustybuzz
//!
//! Drives the full pipeline: bidi analysis, visual run ordering, script
//! itemization, then one shaping-engine call per final run, collecting the
//! glyphs into a single flat array in visual run order.

use std::str::FromStr;

use rustybuzz::{Face, UnicodeBuffer, shape};
use unicode_bidi::Level;

use crate::bidi::ParagraphInfo;
use crate::glyph::{GlyphInfo, remap_clusters_to_bytes};
use crate::script::{self, ScriptRun};
use crate::{Result, ShapeError};

/// Requested paragraph direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    /// Detect from the first strong character
    #[default]
    Auto,
    LeftToRight,
    RightToLeft,
}

/// Text shaper using HarfBuzz (via rustybuzz)
///
/// Configured with the builder methods, then reused across any number of
/// shaping calls; each call owns all of its intermediate state.
pub struct TextShaper {
    /// Requested paragraph direction
    direction: Direction,
    /// Language passed to the shaping engine, if any
    language: Option<rustybuzz::Language>,
    /// OpenType features applied to every run
    features: Vec<rustybuzz::Feature>,
}

impl TextShaper {
    /// Create a new text shaper
    pub fn new() -> Self {
        Self {
            direction: Direction::Auto,
            language: None,
            features: Vec::new(),
        }
    }

    /// Set the paragraph direction
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Set the language (for automatic feature selection)
    pub fn language(mut self, language: &str) -> Self {
        self.language = rustybuzz::Language::from_str(language).ok();
        self
    }

    /// Add OpenType features from a comma-separated list
    ///
    /// Each entry uses the HarfBuzz feature syntax, e.g. `"liga=0,smcp"`.
    pub fn features(mut self, features: &str) -> Result<Self> {
        for spec in features.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            let feature = rustybuzz::Feature::from_str(spec)
                .map_err(|_| ShapeError::InvalidFeature(spec.to_string()))?;
            self.features.push(feature);
        }
        Ok(self)
    }

    /// Shape UTF-8 text
    ///
    /// Glyph clusters are UTF-8 byte offsets into `text`.
    pub fn shape(&self, face: &Face, text: &str) -> Vec<GlyphInfo> {
        let chars: Vec<char> = text.chars().collect();
        let mut glyphs = self.shape_codepoints(face, &chars);
        remap_clusters_to_bytes(&mut glyphs, text);
        glyphs
    }

    /// Shape a codepoint array
    ///
    /// Glyph clusters are codepoint offsets into `text`.
    pub fn shape_codepoints(&self, face: &Face, text: &[char]) -> Vec<GlyphInfo> {
        if text.is_empty() {
            return Vec::new();
        }

        let base_level = match self.direction {
            Direction::Auto => None,
            Direction::LeftToRight => Some(Level::ltr()),
            Direction::RightToLeft => Some(Level::rtl()),
        };
        let para = ParagraphInfo::new(text, base_level);
        let bidi_runs = para.visual_runs();
        let runs = script::itemize(text, &bidi_runs);

        let mut glyphs = Vec::new();
        for run in &runs {
            self.shape_run(face, text, run, &mut glyphs);
        }

        tracing::debug!("{} glyphs from {} runs", glyphs.len(), runs.len());
        glyphs
    }

    /// Shape UTF-8 text with raw font data
    pub fn shape_font_data(
        &self,
        font_data: &[u8],
        face_index: u32,
        text: &str,
    ) -> Result<Vec<GlyphInfo>> {
        let face = Face::from_slice(font_data, face_index)
            .ok_or_else(|| ShapeError::FontParsing("Failed to parse font".into()))?;
        Ok(self.shape(&face, text))
    }

    /// Shape one script run and append its glyphs to `glyphs`
    ///
    /// The shaping buffer lives only for this run, so peak memory is one
    /// run's buffer plus the growing output array.
    fn shape_run(&self, face: &Face, text: &[char], run: &ScriptRun, glyphs: &mut Vec<GlyphInfo>) {
        let mut buffer = UnicodeBuffer::new();
        for (i, &ch) in text[run.pos..run.pos + run.len].iter().enumerate() {
            buffer.add(ch, (run.pos + i) as u32);
        }
        // Surrounding text as context, so contextual forms survive the run
        // split
        let pre: String = text[..run.pos].iter().collect();
        let post: String = text[run.pos + run.len..].iter().collect();
        buffer.set_pre_context(&pre);
        buffer.set_post_context(&post);

        buffer.set_script(script::shaping_script(run.script));
        if let Some(language) = &self.language {
            buffer.set_language(language.clone());
        }
        let direction = if run.level.is_rtl() {
            rustybuzz::Direction::RightToLeft
        } else {
            rustybuzz::Direction::LeftToRight
        };
        buffer.set_direction(direction);

        tracing::trace!(
            pos = run.pos,
            len = run.len,
            script = run.script.short_name(),
            ?direction,
            "shaping run"
        );

        let output = shape(face, &self.features, buffer);
        let infos = output.glyph_infos();
        let positions = output.glyph_positions();
        glyphs.extend(infos.iter().zip(positions.iter()).map(|(info, pos)| GlyphInfo {
            index: info.glyph_id,
            x_offset: pos.x_offset,
            y_offset: pos.y_offset,
            x_advance: pos.x_advance,
            cluster: info.cluster,
        }));
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}
