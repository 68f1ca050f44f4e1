//! Cosmetic reformatting of model output before it is logged and returned.
//!
//! [`clean_response`] is an ordered list of rewrite rules; each rule runs on the output
//! of the previous one, so the order matters. Removing one marker can expose another
//! (`*__*` leaves `**`), so the whole list is reapplied until the text stops changing.
//! It is not a markdown parser and gives no round-trip guarantee. It is idempotent on
//! its own output and never leaves more than one consecutive blank line.

use once_cell::sync::Lazy;
use regex::Regex;

static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?:\*\*|__|`)+").expect("bold regex"));
static HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*(?:#{1,6}[ \t]+)+").expect("heading regex"));
static STAR_BULLET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^([ \t]*)(?:\*[ \t]+)+").expect("star bullet regex"));
static EMPHASIS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*([^*\s][^*\n]*?)\*").expect("emphasis regex"));
static SECTION_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?m)(^|[.!?])[ \t]*(Overview|Benefits|Eligibility|Requirements|Steps to Apply|Required Documents)((?:[ \t]+[A-Z][a-z]+)*)[ \t]*(:|$)",
    )
    .expect("section label regex")
});
static INLINE_NUMBERED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([^\s\d])[ \t]+(\d{1,2}\.)[ \t]+").expect("numbered item regex"));
static INLINE_BULLET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([.:;!?])[ \t]+([-•])[ \t]+").expect("bullet item regex"));
static LEADING_ITEM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*(\d{1,2}\.|[-•])[ \t]+").expect("leading item regex")
});
static BLANK_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n[ \t]*\n(?:[ \t]*\n)*").expect("blank run regex"));

/// Upper bound on rule passes; model answers settle in one or two.
const MAX_PASSES: usize = 8;

/// Applies the formatting rules until the text is stable and returns the cleaned text.
pub fn clean_response(text: &str) -> String {
    let mut current = apply_rules(text);
    for _ in 1..MAX_PASSES {
        let next = apply_rules(&current);
        if next == current {
            break;
        }
        current = next;
    }
    current
}

/// One pass of every rule, in order.
fn apply_rules(text: &str) -> String {
    let text = strip_markdown(text);
    let text = separate_sections(&text);
    let text = split_list_items(&text);
    let text = break_sentences(&text);
    let text = BLANK_RUN.replace_all(&text, "\n\n");
    text.trim().to_string()
}

/// Drops bold/underline/code markers and heading hashes; `* ` bullets become `• `.
fn strip_markdown(text: &str) -> String {
    let text = BOLD.replace_all(text, "");
    let text = HEADING.replace_all(&text, "");
    let text = STAR_BULLET.replace_all(&text, "${1}• ");
    EMPHASIS.replace_all(&text, "${1}").into_owned()
}

/// Puts a blank line in front of recognized section labels.
fn separate_sections(text: &str) -> String {
    SECTION_LABEL
        .replace_all(text, "${1}\n\n${2}${3}${4}")
        .into_owned()
}

/// Moves inline list items onto their own line and normalizes line-leading markers.
fn split_list_items(text: &str) -> String {
    let text = INLINE_NUMBERED.replace_all(text, "${1}\n${2} ");
    let text = INLINE_BULLET.replace_all(&text, "${1}\n${2} ");
    LEADING_ITEM.replace_all(&text, "${1} ").into_owned()
}

fn starts_bullet(c: char) -> bool {
    c.is_whitespace() || c.is_ascii_digit() || matches!(c, '-' | '•' | '*' | '#')
}

/// Breaks the line after `.`, `!` or `?` when spaces and a non-bullet character follow.
/// Punctuation right after a digit (`1.`, `Rs 500.`) is left alone.
fn break_sentences(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        out.push(c);
        i += 1;
        let after_digit = i >= 2 && chars[i - 2].is_ascii_digit();
        if !matches!(c, '.' | '!' | '?') || after_digit {
            continue;
        }
        let mut j = i;
        while j < chars.len() && matches!(chars[j], ' ' | '\t') {
            j += 1;
        }
        if j > i && j < chars.len() && !starts_bullet(chars[j]) {
            out.push('\n');
            i = j;
        }
    }
    out
}
