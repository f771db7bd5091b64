//! Plain-text field sanitizers
//!
//! Conservative cleanup for free-text settings: markup is stripped rather
//! than escaped, percent-encoded line breaks and control characters are
//! removed, and whitespace is normalized. The single-line variant collapses
//! all whitespace; the textarea variant keeps the line structure intact.

/// Sanitize a single-line text field.
///
/// Drops `<script>` and `<style>` elements with their content, strips any
/// remaining tags, removes `%0a`/`%0d` octets and control characters, and
/// collapses whitespace runs to single spaces with the ends trimmed.
pub fn sanitize_text_field(input: &str) -> String {
    let stripped = strip_tags(input);
    let stripped = strip_encoded_line_breaks(&stripped);
    collapse_whitespace(&stripped)
}

/// Sanitize a multi-line textarea field.
///
/// Same tag, octet, and control-character treatment as
/// [`sanitize_text_field`], but inner whitespace and newlines survive;
/// only the ends are trimmed.
pub fn sanitize_textarea_field(input: &str) -> String {
    let stripped = strip_tags(input);
    let stripped = strip_encoded_line_breaks(&stripped);

    let kept: String = stripped
        .chars()
        .filter(|ch| !ch.is_control() || ch.is_whitespace())
        .collect();
    kept.trim().to_string()
}

/// Remove markup: `<script>`/`<style>` elements go with their content,
/// other tags are dropped leaving their text. An unterminated tag consumes
/// the rest of the input.
fn strip_tags(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        rest = &rest[open..];

        if let Some(after) = skip_element(rest, "script").or_else(|| skip_element(rest, "style")) {
            rest = after;
        } else if let Some(close) = rest.find('>') {
            rest = &rest[close + 1..];
        } else {
            rest = "";
        }
    }

    out.push_str(rest);
    out
}

/// If `rest` (starting at `<`) opens the given element, return the input
/// past its matching close tag.
fn skip_element<'a>(rest: &'a str, name: &str) -> Option<&'a str> {
    let tag = rest.get(1..1 + name.len())?;
    if !tag.eq_ignore_ascii_case(name) {
        return None;
    }
    // The name must end here, so "<scripting>" is an ordinary tag.
    match rest.as_bytes().get(1 + name.len()) {
        Some(b'>') | Some(b' ') | Some(b'\t') | Some(b'\n') | Some(b'\r') | Some(b'/') => {}
        _ => return None,
    }

    let closer = format!("</{name}");
    let lowered = rest.to_ascii_lowercase();
    let close_at = lowered.find(&closer)?;
    let tail = &rest[close_at..];
    let end = tail.find('>')?;
    Some(&tail[end + 1..])
}

/// Remove percent-encoded line breaks (`%0a` / `%0d`, any case).
fn strip_encoded_line_breaks(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(at) = rest.find('%') {
        let (head, tail) = rest.split_at(at);
        out.push_str(head);

        match tail.get(1..3) {
            Some(code) if code.eq_ignore_ascii_case("0a") || code.eq_ignore_ascii_case("0d") => {
                rest = &tail[3..];
            }
            _ => {
                out.push('%');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Collapse whitespace runs to single spaces; drop other control
/// characters; trim the ends.
fn collapse_whitespace(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut run = false;

    for ch in input.chars() {
        if ch.is_whitespace() {
            run = true;
            continue;
        }
        if ch.is_control() {
            continue;
        }
        if run && !out.is_empty() {
            out.push(' ');
        }
        run = false;
        out.push(ch);
    }

    out
}
