//! Tab-stop scanner for snippet templates
//!
//! Recognizes the two placeholder forms understood by LSP clients:
//! `$n` (bare stop) and `${n:default}` / `${n}` (stop with optional default text).
//! `\$` escapes a literal dollar sign. Templates are never rewritten here; the
//! scanner is only used to inspect them.

/// A tab stop found in a snippet template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabStop {
    pub index: u32,
    pub default_text: Option<String>,
    /// Byte offset of the `$` that opens the placeholder.
    pub offset: usize,
}

impl TabStop {
    /// Index 0 is the final cursor position once all edits are accepted.
    pub fn is_final(&self) -> bool {
        self.index == 0
    }
}

/// Returns every tab stop in `template`, in the order they appear in the text.
///
/// Malformed placeholders (for example `${x}` or an unterminated `${1:foo`) are
/// treated as literal text.
pub fn tab_stops(template: &str) -> Vec<TabStop> {
    let bytes = template.as_bytes();
    let mut stops = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\\' => {
                i += 2;
                continue;
            }
            b'$' => {
                if let Some((stop, next)) = parse_placeholder(template, i) {
                    stops.push(stop);
                    i = next;
                    continue;
                }
            }
            _ => {}
        }
        i += 1;
    }

    stops
}

/// Returns the tab stop and the offset just past it, or `None` if the text at
/// `start` is not a placeholder.
fn parse_placeholder(template: &str, start: usize) -> Option<(TabStop, usize)> {
    let bytes = template.as_bytes();
    let mut i = start + 1;

    if bytes.get(i) == Some(&b'{') {
        i += 1;
        let (index, after_digits) = parse_index(bytes, i)?;
        i = after_digits;
        match *bytes.get(i)? {
            b'}' => Some((
                TabStop { index, default_text: None, offset: start },
                i + 1,
            )),
            b':' => {
                let text_start = i + 1;
                let mut depth = 1usize;
                let mut j = text_start;
                while j < bytes.len() {
                    match bytes[j] {
                        b'\\' => j += 1,
                        b'{' => depth += 1,
                        b'}' => {
                            depth -= 1;
                            if depth == 0 {
                                let default_text = template[text_start..j].to_string();
                                return Some((
                                    TabStop { index, default_text: Some(default_text), offset: start },
                                    j + 1,
                                ));
                            }
                        }
                        _ => {}
                    }
                    j += 1;
                }
                None
            }
            _ => None,
        }
    } else {
        let (index, next) = parse_index(bytes, i)?;
        Some((TabStop { index, default_text: None, offset: start }, next))
    }
}

fn parse_index(bytes: &[u8], start: usize) -> Option<(u32, usize)> {
    let end = bytes[start..]
        .iter()
        .position(|b| !b.is_ascii_digit())
        .map_or(bytes.len(), |n| start + n);
    if end == start {
        return None;
    }
    let digits = std::str::from_utf8(&bytes[start..end]).ok()?;
    digits.parse().ok().map(|index| (index, end))
}
