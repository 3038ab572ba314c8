//! Bidi paragraph analysis and visual run ordering (UAX #9)
//!
//! Character classes and embedding levels come from `unicode-bidi`; this
//! module applies the line rules on top of them: the trailing-level reset
//! (L1) and the per-level run reversal (L2), producing runs in visual order.

use unicode_bidi::{BidiClass, Level, ParagraphBidiInfo};

/// Bidi analysis of one paragraph, indexed by codepoint
#[derive(Debug)]
pub struct ParagraphInfo {
    /// Paragraph embedding level (detected or forced)
    pub base_level: Level,
    /// Resolved embedding levels per codepoint
    pub levels: Vec<Level>,
    /// Original bidi classes per codepoint
    pub classes: Vec<BidiClass>,
}

/// Bidi run (contiguous codepoints at one embedding level)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BidiRun {
    /// Start index in the codepoint array
    pub pos: usize,
    /// Number of codepoints
    pub len: usize,
    /// Embedding level
    pub level: Level,
}

impl ParagraphInfo {
    /// Analyze one paragraph of codepoints.
    ///
    /// `base_level` forces the paragraph direction; `None` detects it from
    /// the first strong character (P2/P3).
    pub fn new(chars: &[char], base_level: Option<Level>) -> Self {
        let text: String = chars.iter().collect();
        let info = ParagraphBidiInfo::new(&text, base_level);

        // unicode-bidi indexes levels and classes by byte; the pipeline
        // works per codepoint.
        let levels: Vec<Level> = text.char_indices().map(|(i, _)| info.levels[i]).collect();
        let classes: Vec<BidiClass> =
            text.char_indices().map(|(i, _)| info.original_classes[i]).collect();

        Self {
            base_level: info.paragraph_level,
            levels,
            classes,
        }
    }

    /// Split the paragraph into visually ordered runs of constant level.
    ///
    /// Trailing whitespace and formatting characters are reset to the
    /// paragraph level first (L1), then contiguous same-level groups are
    /// reversed per level from the innermost out (L2).
    pub fn visual_runs(&self) -> Vec<BidiRun> {
        if self.levels.is_empty() {
            return Vec::new();
        }

        let mut levels = self.levels.clone();
        reset_trailing_levels(&mut levels, &self.classes, self.base_level);

        let max_level = levels.iter().map(|l| l.number()).max().unwrap_or(0);

        // Contiguous same-level groups, logical order
        let mut runs = Vec::new();
        let mut start = 0;
        for i in 1..levels.len() {
            if levels[i] != levels[start] {
                runs.push(BidiRun { pos: start, len: i - start, level: levels[start] });
                start = i;
            }
        }
        runs.push(BidiRun {
            pos: start,
            len: levels.len() - start,
            level: levels[start],
        });

        // L2: from the highest level down to 1, scan right-to-left and
        // reverse every maximal block of runs at or above that level
        for level in (1..=max_level).rev() {
            let mut i = runs.len();
            while i > 0 {
                i -= 1;
                if runs[i].level.number() >= level {
                    let end = i + 1;
                    while i > 0 && runs[i - 1].level.number() >= level {
                        i -= 1;
                    }
                    runs[i..end].reverse();
                }
            }
        }

        tracing::debug!("{} bidi runs after reordering", runs.len());
        runs
    }
}

/// L1 (trailing part): whitespace, explicit formatting characters and
/// boundary neutrals at the end of the line take the paragraph level
fn reset_trailing_levels(levels: &mut [Level], classes: &[BidiClass], base_level: Level) {
    for i in (0..levels.len()).rev() {
        if !is_trailing_class(classes[i]) {
            break;
        }
        levels[i] = base_level;
    }
}

fn is_trailing_class(class: BidiClass) -> bool {
    matches!(
        class,
        BidiClass::WS
            | BidiClass::BN
            | BidiClass::LRE
            | BidiClass::RLE
            | BidiClass::LRO
            | BidiClass::RLO
            | BidiClass::PDF
            | BidiClass::LRI
            | BidiClass::RLI
            | BidiClass::FSI
            | BidiClass::PDI
    )
}
