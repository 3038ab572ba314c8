//! Shaped glyph records and cluster index remapping

/// A shaped glyph with position, advance and source cluster
///
/// Layout matches the common shaping-engine glyph record, so slices of
/// these can cross an FFI boundary unchanged.
#[derive(Debug, Clone, Copy)]
#[repr(C)]
pub struct GlyphInfo {
    /// Glyph index in the font
    pub index: u32,
    /// X offset from the current position (in font units)
    pub x_offset: i32,
    /// Y offset from the current position (in font units)
    pub y_offset: i32,
    /// Horizontal advance (in font units)
    pub x_advance: i32,
    /// Index of the source character this glyph maps back to
    pub cluster: u32,
}

/// UTF-8 byte offset of every codepoint in `text`
pub(crate) fn byte_offsets(text: &str) -> Vec<u32> {
    text.char_indices().map(|(i, _)| i as u32).collect()
}

/// Remap glyph clusters from codepoint offsets to UTF-8 byte offsets
pub(crate) fn remap_clusters_to_bytes(glyphs: &mut [GlyphInfo], text: &str) {
    let offsets = byte_offsets(text);
    for glyph in glyphs.iter_mut() {
        glyph.cluster = offsets[glyph.cluster as usize];
    }
}
