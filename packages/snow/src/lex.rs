//! Lexical patterns, matched anchored at the cursor's current byte offset.
//!
//! These are the hand-written equivalents of
//! `examples/original_source/snow.py`'s module-level compiled regexes.
//! Everything here is a pure function of a `&str` slice; none of it touches
//! the cursor directly; `cursor::Cursor` is the thing that turns a match
//! into forward motion.

use crate::error::ParseError;

/// One of `"`, `'`, or `` ` ``, optionally preceded by a raw-string `r`
/// prefix and its content as matched (escapes not yet processed).
#[derive(Debug, Clone, Copy)]
pub struct StringToken<'a> {
    pub len: usize,
    pub raw: bool,
    pub quote: char,
    pub content: &'a str,
}

fn is_quote_char(c: char) -> bool {
    matches!(c, '"' | '\'' | '`')
}

macro_rules! literal_pattern {
    ($name:ident, $doc:expr, $ch:expr) => {
        #[doc = $doc]
        pub fn $name(s: &str) -> Option<usize> {
            if s.starts_with($ch) {
                Some($ch.len_utf8())
            } else {
                None
            }
        }
    };
}

literal_pattern!(open_brace, "Matches `{`.", '{');
literal_pattern!(close_brace, "Matches `}`.", '}');
literal_pattern!(open_brack, "Matches `[`.", '[');
literal_pattern!(close_brack, "Matches `]`.", ']');
literal_pattern!(colon, "Matches `:`.", ':');

/// Matches one or more characters of whitespace (`\s+`).
pub fn whitespace(s: &str) -> Option<usize> {
    let mut pos = 0;
    for c in s.chars() {
        if c.is_whitespace() {
            pos += c.len_utf8();
        } else {
            break;
        }
    }
    if pos == 0 {
        None
    } else {
        Some(pos)
    }
}

/// Matches a single ASCII control character (`0x00`-`0x1F`).
pub fn control(s: &str) -> Option<usize> {
    match s.chars().next() {
        Some(c) if (c as u32) < 0x20 => Some(c.len_utf8()),
        _ => None,
    }
}

/// Matches the start of a quoted literal (an optional `r` raw prefix
/// followed by one of `"`, `'`, `` ` ``) without consuming its body. Used
/// only for the "Missing terminating X character" diagnostic, to recognize
/// an unterminated string before it's known to be unterminated.
pub fn quote_start(s: &str) -> Option<usize> {
    let mut offset = 0;
    if s.starts_with('r') && is_quote_char(s[1..].chars().next().unwrap_or('\0')) {
        offset = 1;
    }
    let c = s[offset..].chars().next()?;
    if is_quote_char(c) {
        Some(offset + c.len_utf8())
    } else {
        None
    }
}

/// Returns the quote character a [`quote_start`] match consumed, for
/// building the "Missing terminating X character" message.
pub fn quote_char_at(s: &str) -> Option<char> {
    let offset = if s.starts_with('r') { 1 } else { 0 };
    s[offset..].chars().next().filter(|c| is_quote_char(*c))
}

/// Matches an unquoted name: a maximal run of characters that aren't
/// whitespace, ASCII control, or any of `{}[]:"'`, with any such character
/// permitted inline if escaped with a backslash.
pub fn name(s: &str) -> Option<usize> {
    let pos = scan_escaped_run(s, is_name_excluded);
    if pos == 0 {
        None
    } else {
        Some(pos)
    }
}

fn is_name_excluded(c: char) -> bool {
    c.is_whitespace() || (c as u32) < 0x20 || matches!(c, '{' | '}' | '[' | ']' | ':' | '"' | '\'')
}

/// Matches a run of text inside a `[...]` section: anything but `{` or `]`,
/// with `\`-escapes of any character permitted. Always matches (possibly
/// the empty string), mirroring the Python pattern's `*` quantifier.
pub fn notag_text(s: &str) -> Option<usize> {
    Some(scan_escaped_run(s, |c| c == '{' || c == ']'))
}

/// Matches a run of top-level document text: anything but `{`, with
/// `\`-escapes of any character permitted. Always matches.
pub fn doc_text(s: &str) -> Option<usize> {
    Some(scan_escaped_run(s, |c| c == '{'))
}

/// Scans forward from the start of `s`, consuming characters until one
/// satisfies `stop` (exclusive) or the input ends, treating `\` + any one
/// character as an escaped, unconditionally-consumed pair.
fn scan_escaped_run(s: &str, stop: impl Fn(char) -> bool) -> usize {
    let mut pos = 0usize;
    loop {
        let Some(c) = s[pos..].chars().next() else {
            break;
        };
        if c == '\\' {
            let esc_len = c.len_utf8();
            match s[pos + esc_len..].chars().next() {
                Some(next_c) => {
                    pos += esc_len + next_c.len_utf8();
                    continue;
                }
                None => {
                    pos += esc_len;
                    break;
                }
            }
        }
        if stop(c) {
            break;
        }
        pos += c.len_utf8();
    }
    pos
}

/// Collapses `\X` to `X` for every `X` in `targets`, leaving every other
/// character (including backslashes that don't precede a target character)
/// untouched. This is the one unescaping step applied to section and
/// document text: it undoes exactly enough escaping to let `{`/`]`/etc
/// appear literally in running text, without touching the full string
/// escape table (which only applies inside quoted literals).
pub fn collapse_structural_escapes(text: &str, targets: &[char]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(&next) = chars.peek() {
                if targets.contains(&next) {
                    out.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        out.push(c);
    }
    out
}

/// Matches a full quoted string literal (see [`match_string`]), returning
/// only its byte length - the `Pattern` shape `Cursor::maybe`/`peek` expect.
pub fn string(s: &str) -> Option<usize> {
    match_string(s).map(|tok| tok.len)
}

/// Matches a quoted string literal in full: an optional `r` raw prefix,
/// then a `"`, `'`, or `` ` ``-delimited body where the body is any run of
/// characters other than the delimiter or a backslash, or a backslash
/// followed by exactly one character. Fails (returns `None`) if the
/// literal isn't closed before the input ends - callers then fall back to
/// [`quote_start`] to report the matching "unterminated" diagnostic.
pub fn match_string(s: &str) -> Option<StringToken<'_>> {
    let mut offset = 0usize;
    let raw = s.starts_with('r') && is_quote_char(s[1..].chars().next().unwrap_or('\0'));
    if raw {
        offset = 1;
    }

    let quote = s[offset..].chars().next()?;
    if !is_quote_char(quote) {
        return None;
    }
    offset += quote.len_utf8();
    let content_start = offset;

    let body = &s[content_start..];
    let mut iter = body.char_indices();
    while let Some((i, c)) = iter.next() {
        if c == '\\' {
            iter.next()?;
            continue;
        }
        if c == quote {
            let content = &s[content_start..content_start + i];
            let total_len = content_start + i + quote.len_utf8();
            return Some(StringToken {
                len: total_len,
                raw,
                quote,
                content,
            });
        }
    }
    None
}

/// A parsed numeric literal, per the `NUMBER` grammar (§4.B): optional
/// sign, then either a float (digits, a decimal point, optional exponent)
/// or an integer with an optional radix prefix (`0b`, `0`, `0x`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

/// Parses `s` as a `NUMBER`, requiring the *entire* string to match (the
/// grammar is anchored at both ends, matching `Text.toNumber`'s use of a
/// `$`-anchored pattern against the whole attribute value).
pub fn parse_number(s: &str) -> Option<Number> {
    if s.is_empty() {
        return None;
    }
    let (sign_negative, unsigned) = match s.as_bytes()[0] {
        b'+' => (false, &s[1..]),
        b'-' => (true, &s[1..]),
        _ => (false, s),
    };
    if unsigned.is_empty() {
        return None;
    }

    if let Some(magnitude) = parse_float(unsigned) {
        return Some(Number::Float(if sign_negative {
            -magnitude
        } else {
            magnitude
        }));
    }

    let (radix, digits) = parse_int_prefix(unsigned)?;
    if digits.is_empty() {
        return None;
    }
    let signed = if sign_negative {
        format!("-{digits}")
    } else {
        digits.to_string()
    };
    i64::from_str_radix(&signed, radix).ok().map(Number::Int)
}

fn parse_float(s: &str) -> Option<f64> {
    let dot = s.find('.')?;
    let before = &s[..dot];
    if !before.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let after_start = dot + 1;
    let after_len = s[after_start..]
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if before.is_empty() && after_len == 0 {
        return None;
    }

    let mut pos = after_start + after_len;
    if let Some(c) = s[pos..].chars().next() {
        if c == 'e' || c == 'E' {
            let mut exp_pos = pos + 1;
            if s[exp_pos..].starts_with('-') {
                exp_pos += 1;
            }
            let exp_digits = s[exp_pos..]
                .bytes()
                .take_while(|b| b.is_ascii_digit())
                .count();
            if exp_digits > 0 {
                pos = exp_pos + exp_digits;
            }
        }
    }

    if pos != s.len() {
        return None;
    }
    s.parse::<f64>().ok()
}

/// Matches `(0b|0|0x)?(\d+)$`, trying the longest applicable radix prefix
/// first and backing off to a shorter one (then to no prefix at all) if
/// the remaining text isn't all decimal digits running to the end - the
/// same backtracking the original regex performs. Note this means a
/// lone `"0"` (no digits following) resolves to base 10, not octal: there
/// are no digits left for the prefix to apply to, so the empty-prefix
/// alternative is what actually reaches the end of the string. It doesn't
/// change the parsed value either way.
fn parse_int_prefix(s: &str) -> Option<(u32, &str)> {
    let lower = s.to_ascii_lowercase();
    if lower.starts_with("0b") && all_ascii_digits(&s[2..]) && !s[2..].is_empty() {
        return Some((2, &s[2..]));
    }
    if lower.starts_with("0x") && all_ascii_digits(&s[2..]) && !s[2..].is_empty() {
        return Some((16, &s[2..]));
    }
    if s.starts_with('0') && all_ascii_digits(&s[1..]) && !s[1..].is_empty() {
        return Some((8, &s[1..]));
    }
    if all_ascii_digits(s) {
        return Some((10, s));
    }
    None
}

fn all_ascii_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Unescapes the body of a non-raw string literal, applying the table in
/// §4.B: `\a \b \f \n \r \t \v \' \"`, `\xHH`, `\uHHHH`, `\UHHHHHHHH`,
/// three-digit octal `\ddd`, and `\N{NAME}`. A backslash that doesn't
/// begin a recognized escape (e.g. `\q`) is left untouched, matching the
/// behaviour of a regex substitution that only rewrites what it matches.
pub fn unescape(content: &str) -> String {
    let chars: Vec<char> = content.chars().collect();
    let mut out = String::with_capacity(content.len());
    let mut i = 0;
    while i < chars.len() {
        if chars[i] != '\\' {
            out.push(chars[i]);
            i += 1;
            continue;
        }
        match match_escape(&chars[i..]) {
            Some((consumed, replacement)) => {
                out.push_str(&replacement);
                i += consumed;
            }
            None => {
                out.push('\\');
                i += 1;
            }
        }
    }
    out
}

fn match_escape(rest: &[char]) -> Option<(usize, String)> {
    let c = *rest.get(1)?;
    match c {
        'a' => Some((2, '\u{7}'.to_string())),
        'b' => Some((2, '\u{8}'.to_string())),
        'f' => Some((2, '\u{c}'.to_string())),
        'n' => Some((2, "\n".to_string())),
        'r' => Some((2, "\r".to_string())),
        't' => Some((2, "\t".to_string())),
        'v' => Some((2, '\u{b}'.to_string())),
        '\'' => Some((2, "'".to_string())),
        '"' => Some((2, "\"".to_string())),
        'x' => match_hex_escape(rest, 2),
        'u' => match_hex_escape(rest, 4),
        'U' => match_hex_escape(rest, 8),
        '0'..='7' => match_octal_escape(rest),
        'N' => match_named_escape(rest),
        _ => None,
    }
}

fn match_hex_escape(rest: &[char], digits: usize) -> Option<(usize, String)> {
    if rest.len() < 2 + digits {
        return None;
    }
    let hex: String = rest[2..2 + digits].iter().collect();
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let value = u32::from_str_radix(&hex, 16).ok()?;
    let ch = char::from_u32(value)?;
    Some((2 + digits, ch.to_string()))
}

fn match_octal_escape(rest: &[char]) -> Option<(usize, String)> {
    if rest.len() < 4 {
        return None;
    }
    let digits: String = rest[1..4].iter().collect();
    if !digits.chars().all(|c| ('0'..='7').contains(&c)) {
        return None;
    }
    let value = u32::from_str_radix(&digits, 8).ok()?;
    let ch = char::from_u32(value)?;
    Some((4, ch.to_string()))
}

fn match_named_escape(rest: &[char]) -> Option<(usize, String)> {
    if rest.get(2) != Some(&'{') {
        return None;
    }
    let mut i = 3;
    while i < rest.len() && rest[i] != '}' {
        i += 1;
    }
    if i >= rest.len() {
        return None;
    }
    let name: String = rest[3..i].iter().collect();
    let ch = unicode_names2::character(&name)?;
    Some((i + 1, ch.to_string()))
}

/// Builds a `ParseError` for `expect`-style failures, given the label of
/// what was expected and the cursor's current line/column.
pub fn expected_error(label: &str, line: usize, col: usize) -> ParseError {
    ParseError::new(format!("Expected {label}"), line, col)
}
