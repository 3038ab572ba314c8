//! Shared test helpers: a minimal in-memory TrueType face
//!
//! The font maps ASCII, Greek and Hebrew to distinct glyph ids through a
//! cmap format 4 subtable, with empty outlines and a fixed 500-unit advance
//! for every glyph, so shaping output is deterministic without binary
//! fixtures.

/// Horizontal advance of every glyph, in font units
pub const ADVANCE: i32 = 500;

const NUM_GLYPHS: u16 = 187;

/// Character ranges mapped by the cmap: (first, last, first glyph id)
const RANGES: [(u16, u16, u16); 3] = [
    (0x0020, 0x007E, 1),   // ASCII
    (0x0391, 0x03C9, 100), // Greek
    (0x05D0, 0x05EA, 160), // Hebrew
];

fn push_u16(out: &mut Vec<u8>, v: u16) {
    out.extend_from_slice(&v.to_be_bytes());
}

fn push_i16(out: &mut Vec<u8>, v: i16) {
    out.extend_from_slice(&v.to_be_bytes());
}

fn push_u32(out: &mut Vec<u8>, v: u32) {
    out.extend_from_slice(&v.to_be_bytes());
}

fn cmap_table() -> Vec<u8> {
    let seg_count = (RANGES.len() + 1) as u16; // ranges plus the 0xFFFF sentinel
    let mut t = Vec::new();

    // Header: one encoding record, Windows Unicode BMP
    push_u16(&mut t, 0); // version
    push_u16(&mut t, 1); // numTables
    push_u16(&mut t, 3); // platformID
    push_u16(&mut t, 1); // encodingID
    push_u32(&mut t, 12); // subtable offset

    // Format 4 subtable
    let length = 16 + 8 * seg_count;
    push_u16(&mut t, 4); // format
    push_u16(&mut t, length);
    push_u16(&mut t, 0); // language
    push_u16(&mut t, seg_count * 2);
    push_u16(&mut t, 8); // searchRange: 2 * 2^floor(log2(4))
    push_u16(&mut t, 2); // entrySelector
    push_u16(&mut t, 0); // rangeShift
    for &(_, last, _) in &RANGES {
        push_u16(&mut t, last);
    }
    push_u16(&mut t, 0xFFFF);
    push_u16(&mut t, 0); // reservedPad
    for &(first, _, _) in &RANGES {
        push_u16(&mut t, first);
    }
    push_u16(&mut t, 0xFFFF);
    for &(first, _, glyph) in &RANGES {
        push_u16(&mut t, glyph.wrapping_sub(first)); // idDelta, mod 65536
    }
    push_u16(&mut t, 1); // sentinel maps 0xFFFF to glyph 0
    for _ in 0..seg_count {
        push_u16(&mut t, 0); // idRangeOffset
    }
    t
}

fn head_table() -> Vec<u8> {
    let mut t = Vec::new();
    push_u32(&mut t, 0x0001_0000); // version
    push_u32(&mut t, 0x0001_0000); // fontRevision
    push_u32(&mut t, 0); // checkSumAdjustment
    push_u32(&mut t, 0x5F0F_3CF5); // magicNumber
    push_u16(&mut t, 0); // flags
    push_u16(&mut t, 1000); // unitsPerEm
    t.extend_from_slice(&[0u8; 16]); // created, modified
    push_i16(&mut t, 0); // xMin
    push_i16(&mut t, 0); // yMin
    push_i16(&mut t, 0); // xMax
    push_i16(&mut t, 0); // yMax
    push_u16(&mut t, 0); // macStyle
    push_u16(&mut t, 8); // lowestRecPPEM
    push_i16(&mut t, 2); // fontDirectionHint
    push_i16(&mut t, 0); // indexToLocFormat: short loca
    push_i16(&mut t, 0); // glyphDataFormat
    t
}

fn hhea_table() -> Vec<u8> {
    let mut t = Vec::new();
    push_u32(&mut t, 0x0001_0000); // version
    push_i16(&mut t, 800); // ascender
    push_i16(&mut t, -200); // descender
    push_i16(&mut t, 0); // lineGap
    push_u16(&mut t, ADVANCE as u16); // advanceWidthMax
    push_i16(&mut t, 0); // minLeftSideBearing
    push_i16(&mut t, 0); // minRightSideBearing
    push_i16(&mut t, 0); // xMaxExtent
    push_i16(&mut t, 1); // caretSlopeRise
    push_i16(&mut t, 0); // caretSlopeRun
    push_i16(&mut t, 0); // caretOffset
    for _ in 0..4 {
        push_i16(&mut t, 0); // reserved
    }
    push_i16(&mut t, 0); // metricDataFormat
    push_u16(&mut t, NUM_GLYPHS); // numberOfHMetrics
    t
}

fn maxp_table() -> Vec<u8> {
    let mut t = Vec::new();
    push_u32(&mut t, 0x0001_0000); // version
    push_u16(&mut t, NUM_GLYPHS);
    for _ in 0..13 {
        push_u16(&mut t, 0); // maxPoints .. maxComponentDepth
    }
    t
}

fn hmtx_table() -> Vec<u8> {
    let mut t = Vec::new();
    for _ in 0..NUM_GLYPHS {
        push_u16(&mut t, ADVANCE as u16);
        push_i16(&mut t, 0); // lsb
    }
    t
}

fn loca_table() -> Vec<u8> {
    // All offsets zero: every glyph has an empty outline
    let mut t = Vec::new();
    for _ in 0..=NUM_GLYPHS {
        push_u16(&mut t, 0);
    }
    t
}

/// Build the test font as a TrueType byte blob
pub fn test_font() -> Vec<u8> {
    // Directory entries must be sorted by tag
    let tables: [(&[u8; 4], Vec<u8>); 7] = [
        (b"cmap", cmap_table()),
        (b"glyf", vec![0; 4]),
        (b"head", head_table()),
        (b"hhea", hhea_table()),
        (b"hmtx", hmtx_table()),
        (b"loca", loca_table()),
        (b"maxp", maxp_table()),
    ];

    let num_tables = tables.len() as u16;
    let mut font = Vec::new();
    push_u32(&mut font, 0x0001_0000); // sfntVersion
    push_u16(&mut font, num_tables);
    push_u16(&mut font, 64); // searchRange: 16 * 2^floor(log2(7))
    push_u16(&mut font, 2); // entrySelector
    push_u16(&mut font, 48); // rangeShift

    let mut offset = 12 + 16 * tables.len() as u32;
    let mut records = Vec::new();
    let mut data = Vec::new();
    for (tag, table) in &tables {
        records.extend_from_slice(*tag);
        push_u32(&mut records, 0); // checksum, not validated
        push_u32(&mut records, offset);
        push_u32(&mut records, table.len() as u32);
        data.extend_from_slice(table);
        let padded = table.len().next_multiple_of(4);
        data.resize(data.len() + (padded - table.len()), 0);
        offset += padded as u32;
    }
    font.extend_from_slice(&records);
    font.extend_from_slice(&data);
    font
}
