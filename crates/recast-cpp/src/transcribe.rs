//! Verbatim transcription of source whitespace, comments, and unchanged
//! tokens.
//!
//! The only rewriting that happens here is tab handling: a source tab is
//! expanded, against the writer's tracked column, to spaces reaching the
//! next multiple of the source tab stop. The writer then re-collapses
//! leading indentation to destination-width tabs when the profile asks
//! for tabs. Everything else, comments included, is copied unchanged.

use crate::context::Context;

/// Copy source text from the cursor up to (not including) `upto` and
/// advance the cursor. Cursor regression is a programming error.
pub(crate) fn transcribe(ctx: &mut Context, upto: u32) {
    debug_assert!(
        upto >= ctx.position,
        "transcribe would move the read cursor backward: {} -> {}",
        ctx.position,
        upto
    );
    debug_assert!(upto as usize <= ctx.source.content.len());

    let text = &ctx.source.content[ctx.position as usize..upto as usize];
    for c in text.chars() {
        if c == '\t' {
            let stop = ctx.source_tab_stop;
            let column = ctx.writer.column();
            let target = (column / stop + 1) * stop;
            for _ in column..target {
                ctx.writer.write_char(' ');
            }
        } else {
            ctx.writer.write_char(c);
        }
    }
    ctx.position = upto;
}

/// Advance the cursor past whitespace and `//`/`/* */` comments without
/// emitting anything. Used where Java tokens are dropped entirely.
pub(crate) fn skip_space_and_comments(ctx: &mut Context) {
    let bytes = ctx.source.content.as_bytes();
    let len = bytes.len();
    let mut pos = ctx.position as usize;

    while pos < len {
        match bytes[pos] {
            b' ' | b'\t' | b'\r' | b'\n' => pos += 1,
            b'/' if pos + 1 < len && bytes[pos + 1] == b'/' => {
                while pos < len && bytes[pos] != b'\n' {
                    pos += 1;
                }
            }
            b'/' if pos + 1 < len && bytes[pos + 1] == b'*' => {
                pos += 2;
                while pos + 1 < len && !(bytes[pos] == b'*' && bytes[pos + 1] == b'/') {
                    pos += 1;
                }
                pos = (pos + 2).min(len);
            }
            _ => break,
        }
    }

    ctx.position = pos as u32;
}
