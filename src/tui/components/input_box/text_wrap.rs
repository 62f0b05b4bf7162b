//! Pure text helpers and dimensional constants for the InputBox.
//!
//! Drafts are single-line (pastes are flattened before they get here), so
//! wrapping only ever comes from the box being narrower than the text.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Border (2) + padding (2) consumed horizontally by the bordered block
pub(super) const HORIZONTAL_OVERHEAD: u16 = 4;
/// Top + bottom borders consumed vertically
pub(super) const VERTICAL_OVERHEAD: u16 = 2;
/// Maximum visible content lines before internal scrolling kicks in
pub(super) const MAX_VISIBLE_LINES: u16 = 3;
/// Offset from area edge to content (border + left padding)
pub(super) const CONTENT_OFFSET: u16 = 2;

/// Build textwrap options configured for the input box inner width.
pub(super) fn wrap_options(inner_width: u16) -> textwrap::Options<'static> {
    textwrap::Options::new(inner_width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

/// Inner content width after borders and padding. 0 if the area is too narrow.
pub(super) fn inner_width(content_width: u16) -> u16 {
    content_width.saturating_sub(HORIZONTAL_OVERHEAD)
}

/// Wrap `text` into display lines. Always at least one (possibly empty) line.
pub(super) fn wrap_lines(text: &str, width: u16) -> Vec<String> {
    if width == 0 || text.is_empty() {
        return vec![String::new()];
    }
    let lines: Vec<String> = textwrap::wrap(text, wrap_options(width))
        .into_iter()
        .map(|line| line.into_owned())
        .collect();
    if lines.is_empty() {
        vec![String::new()]
    } else {
        lines
    }
}

pub(super) fn wrap_line_count(text: &str, width: u16) -> u16 {
    wrap_lines(text, width).len() as u16
}

/// Display width of the text, counting wide glyphs as two columns.
pub(super) fn display_width(text: &str) -> u16 {
    UnicodeWidthStr::width(text) as u16
}

/// Byte offset of the last char boundary whose display width from the start
/// of `text` does not exceed `column`. Never splits a wide glyph.
pub(super) fn byte_at_column(text: &str, column: u16) -> usize {
    let mut width = 0u16;
    for (i, c) in text.char_indices() {
        let next = width + UnicodeWidthChar::width(c).unwrap_or(0) as u16;
        if next > column {
            return i;
        }
        width = next;
    }
    text.len()
}

/// Largest char boundary `<= pos`, clamped to the text length.
pub(super) fn floor_char_boundary(text: &str, pos: usize) -> usize {
    let mut pos = pos.min(text.len());
    while !text.is_char_boundary(pos) {
        pos -= 1;
    }
    pos
}

pub(super) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

pub(super) fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .chars()
        .next()
        .map(|c| pos + c.len_utf8())
        .unwrap_or(text.len())
}

/// Start of the word before `pos` (readline `backward-word`): skip
/// separators, then the word itself.
pub(super) fn prev_word_boundary(text: &str, pos: usize) -> usize {
    let before = text[..pos].trim_end_matches(|c: char| !is_word_char(c));
    before
        .char_indices()
        .rev()
        .find(|&(_, c)| !is_word_char(c))
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0)
}

/// End of the word after `pos` (readline `forward-word`).
pub(super) fn next_word_boundary(text: &str, pos: usize) -> usize {
    let after = &text[pos..];
    let word_start = after
        .find(is_word_char)
        .unwrap_or(after.len());
    let word_len = after[word_start..]
        .find(|c: char| !is_word_char(c))
        .unwrap_or(after.len() - word_start);
    pos + word_start + word_len
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
