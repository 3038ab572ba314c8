//! Script itemization (UAX #24)
//!
//! Resolves a concrete script for every codepoint (Common and Inherited
//! characters take the script of the surrounding text, with paired
//! punctuation matched across a stack) and splits the bidi runs on script
//! boundaries.

use unicode_bidi::Level;
use unicode_script::{Script, UnicodeScript};

use crate::bidi::BidiRun;

/// A bidi run further split to a single script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptRun {
    /// Start index in the codepoint array
    pub pos: usize,
    /// Number of codepoints
    pub len: usize,
    /// Embedding level inherited from the parent bidi run
    pub level: Level,
    /// Resolved script of every codepoint in the run
    pub script: Script,
}

/// Paired punctuation whose members should resolve to the same script.
///
/// Sorted by codepoint for binary search; even indices are opening members,
/// odd indices their closers.
const PAIRED_CHARS: [char; 34] = [
    '\u{0028}', '\u{0029}', // ascii paired punctuation
    '\u{003C}', '\u{003E}',
    '\u{005B}', '\u{005D}',
    '\u{007B}', '\u{007D}',
    '\u{00AB}', '\u{00BB}', // guillemets
    '\u{2018}', '\u{2019}', // general punctuation quotes
    '\u{201C}', '\u{201D}',
    '\u{2039}', '\u{203A}',
    '\u{3008}', '\u{3009}', // CJK paired punctuation
    '\u{300A}', '\u{300B}',
    '\u{300C}', '\u{300D}',
    '\u{300E}', '\u{300F}',
    '\u{3010}', '\u{3011}',
    '\u{3014}', '\u{3015}',
    '\u{3016}', '\u{3017}',
    '\u{3018}', '\u{3019}',
    '\u{301A}', '\u{301B}',
];

fn pair_index(ch: char) -> Option<usize> {
    PAIRED_CHARS.binary_search(&ch).ok()
}

fn is_open(pair_index: usize) -> bool {
    pair_index % 2 == 0
}

/// Resolve a concrete script for every codepoint.
///
/// Single left-to-right scan: Common and Inherited characters take the last
/// resolved script; an opening paired character additionally pushes that
/// script so its closer resolves to the same script even if the text between
/// them switched scripts. Common/Inherited characters before any real script
/// are back-filled with the first real script found.
fn resolve_scripts(chars: &[char]) -> Vec<Script> {
    let mut scripts: Vec<Script> = chars.iter().map(|ch| ch.script()).collect();

    let mut last_script: Option<Script> = None;
    // First index not yet explicitly assigned; everything in
    // backfill_from..i is pending when a real script shows up at i.
    let mut backfill_from = 0;
    let mut stack: Vec<(Script, usize)> = Vec::new();

    for i in 0..chars.len() {
        match (scripts[i], last_script) {
            (Script::Common, Some(script)) => {
                match pair_index(chars[i]) {
                    Some(pair) if is_open(pair) => {
                        scripts[i] = script;
                        stack.push((script, pair));
                    }
                    Some(pair) => {
                        // Closing member: unwind to the matching opener
                        let opener = pair - 1;
                        while let Some(&(_, open_pair)) = stack.last() {
                            if open_pair == opener {
                                break;
                            }
                            stack.pop();
                        }
                        match stack.last() {
                            Some(&(paired_script, _)) => {
                                scripts[i] = paired_script;
                                last_script = Some(paired_script);
                            }
                            // Unmatched closer: lenient fallback to the
                            // last resolved script
                            None => scripts[i] = script,
                        }
                    }
                    None => scripts[i] = script,
                }
                backfill_from = i + 1;
            }
            (Script::Inherited, Some(script)) => {
                scripts[i] = script;
                backfill_from = i + 1;
            }
            (Script::Common | Script::Inherited, None) => {
                // No real script seen yet; resolved by back-fill below
            }
            (script, _) => {
                for j in backfill_from..i {
                    scripts[j] = script;
                }
                last_script = Some(script);
                backfill_from = i + 1;
            }
        }
    }

    scripts
}

/// Split visually ordered bidi runs into script-homogeneous sub-runs.
///
/// LTR runs are scanned left-to-right, RTL runs right-to-left, so sub-runs
/// come out in visual order within each parent run. Each sub-run keeps its
/// parent's embedding level.
pub fn itemize(chars: &[char], bidi_runs: &[BidiRun]) -> Vec<ScriptRun> {
    let scripts = resolve_scripts(chars);

    let mut runs = Vec::new();
    for bidi in bidi_runs {
        if bidi.level.is_rtl() {
            let mut end = bidi.pos + bidi.len;
            let mut script = scripts[end - 1];
            for j in (bidi.pos..bidi.pos + bidi.len - 1).rev() {
                if scripts[j] != script {
                    runs.push(ScriptRun { pos: j + 1, len: end - (j + 1), level: bidi.level, script });
                    end = j + 1;
                    script = scripts[j];
                }
            }
            runs.push(ScriptRun { pos: bidi.pos, len: end - bidi.pos, level: bidi.level, script });
        } else {
            let mut start = bidi.pos;
            for j in bidi.pos + 1..bidi.pos + bidi.len {
                if scripts[j] != scripts[start] {
                    runs.push(ScriptRun {
                        pos: start,
                        len: j - start,
                        level: bidi.level,
                        script: scripts[start],
                    });
                    start = j;
                }
            }
            runs.push(ScriptRun {
                pos: start,
                len: bidi.pos + bidi.len - start,
                level: bidi.level,
                script: scripts[start],
            });
        }
    }

    tracing::debug!("{} script runs after itemization", runs.len());
    runs
}

/// Map a Unicode script to the shaping engine's script type
pub(crate) fn shaping_script(script: Script) -> rustybuzz::Script {
    let name = script.short_name().as_bytes();
    match name {
        [a, b, c, d] => {
            let tag = rustybuzz::ttf_parser::Tag::from_bytes(&[*a, *b, *c, *d]);
            rustybuzz::Script::from_iso15924_tag(tag).unwrap_or(rustybuzz::script::UNKNOWN)
        }
        _ => rustybuzz::script::UNKNOWN,
    }
}
