//! Example: shape a string with a font file and print the glyphs
//!
//! Usage: shape <font.ttf> [text]

use glyphrun::{Direction, TextShaper};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let font_path = args
        .next()
        .ok_or_else(|| anyhow::anyhow!("usage: shape <font.ttf> [text]"))?;
    let text = args.next().unwrap_or_else(|| "hello שלום".to_string());

    let font_data = std::fs::read(&font_path)?;
    let shaper = TextShaper::new().direction(Direction::Auto);
    let glyphs = shaper.shape_font_data(&font_data, 0, &text)?;

    println!("{} glyphs for {:?}:", glyphs.len(), text);
    for glyph in &glyphs {
        println!(
            "glyph {:5}  offset ({:5}, {:5})  advance {:5}  cluster {:3}",
            glyph.index, glyph.x_offset, glyph.y_offset, glyph.x_advance, glyph.cluster
        );
    }
    Ok(())
}
