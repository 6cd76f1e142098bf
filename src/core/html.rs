// src/core/html.rs
// Just enough HTML walking to pull one element's text out of a profile page.
// ASCII-only lowercasing keeps byte offsets identical between `s` and its
// lowercased copy, so indices found in one are valid in the other.

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    super::sanitize::normalize_ws(&out)
}

fn is_class_boundary(b: Option<u8>) -> bool {
    matches!(b, None | Some(b'"' | b'\'' | b' ' | b'\t' | b'\n' | b'\r' | b'=' | b'>'))
}

/// Byte range of the opening tag (`<` .. just past `>`) of the first element
/// whose class list contains `class`.
fn find_open_tag_with_class(lc: &str, class: &str) -> Option<(usize, usize)> {
    let bytes = lc.as_bytes();
    let mut from = 0usize;

    while let Some(rel) = lc.get(from..)?.find(class) {
        let at = from + rel;
        from = at + class.len();

        // Whole class token only: "energy-points-badge-wrapper" is not a hit
        let before = at.checked_sub(1).map(|i| bytes[i]);
        let after = bytes.get(at + class.len()).copied();
        if !is_class_boundary(before) || !is_class_boundary(after) {
            continue;
        }

        // Must sit inside a tag's attributes
        let Some(lt) = lc[..at].rfind('<') else { continue };
        if lc[lt..at].contains('>') {
            continue;
        }
        if !in_class_value(lc, lt, at) {
            continue;
        }

        let gt = lc[at..].find('>')? + at + 1;
        return Some((lt, gt));
    }
    None
}

/// Whether byte `at` falls inside the value of a `class` attribute of the
/// tag opening at `lt`. `data-class=` and `subclass=` don't count.
fn in_class_value(lc: &str, lt: usize, at: usize) -> bool {
    let bytes = lc.as_bytes();
    for (rel, _) in lc[lt..at].match_indices("class") {
        let name_start = lt + rel;
        if !bytes[name_start - 1].is_ascii_whitespace() {
            continue;
        }
        let after_name = &lc[name_start + "class".len()..];
        let Some(value) = after_name.trim_start().strip_prefix('=') else { continue };
        let value = value.trim_start();
        let value_start = lc.len() - value.len();

        let value_end = match value.as_bytes().first() {
            Some(&q @ (b'"' | b'\'')) => value[1..].find(q as char).map(|e| value_start + 1 + e),
            Some(_) => value
                .find(|c: char| c.is_ascii_whitespace() || c == '>')
                .map(|e| value_start + e),
            None => None,
        };
        if let Some(end) = value_end {
            if value_start <= at && at < end {
                return true;
            }
        }
    }
    false
}

/// First `pat` at or after `from` that is a whole tag name, i.e. followed by
/// `>`, `/` or whitespace. `<b` must not match `<br>`.
fn find_tag(lc: &str, from: usize, pat: &str) -> Option<usize> {
    let bytes = lc.as_bytes();
    let mut pos = from;
    while let Some(rel) = lc.get(pos..)?.find(pat) {
        let at = pos + rel;
        match bytes.get(at + pat.len()) {
            Some(b'>' | b'/') => return Some(at),
            Some(b) if b.is_ascii_whitespace() => return Some(at),
            _ => pos = at + pat.len(),
        }
    }
    None
}

fn tag_name(open_tag: &str) -> &str {
    let rest = &open_tag[1..];
    let end = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-'))
        .unwrap_or(rest.len());
    &rest[..end]
}

/// Visible text of the first element carrying `class`, nested tags stripped.
pub fn element_text_by_class(doc: &str, class: &str) -> Option<String> {
    let lc = to_lower(doc);
    let class = to_lower(class);
    let (open_start, open_end) = find_open_tag_with_class(&lc, &class)?;

    let name = tag_name(&lc[open_start..open_end]);
    if name.is_empty() {
        return None;
    }
    if lc[open_start..open_end].ends_with("/>") {
        return Some(s!());
    }

    // Walk forward balancing same-name tags until the matching close
    let open_pat = join!("<", name);
    let close_pat = join!("</", name);
    let mut depth = 1usize;
    let mut pos = open_end;
    loop {
        let next_close = find_tag(&lc, pos, &close_pat)?;
        match find_tag(&lc, pos, &open_pat).filter(|&o| o < next_close) {
            Some(open_at) => {
                depth += 1;
                pos = open_at + open_pat.len();
            }
            None => {
                depth -= 1;
                if depth == 0 {
                    let inner = &doc[open_end..next_close];
                    return Some(strip_tags(super::sanitize::normalize_entities(inner)));
                }
                pos = next_close + close_pat.len();
            }
        }
    }
}

/// Leading digits after whitespace, thousands commas ignored.
pub fn parse_leading_int(text: &str) -> Option<u64> {
    let cleaned: String = text.chars().filter(|&c| c != ',').collect();
    let digits: String = cleaned
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html><body>
        <div class="energy-points-badge-wrapper">
          <span CLASS="badge energy-points-badge" data-x='1'>
             1,234,567 <b>energy</b>&nbsp;points
          </span>
        </div></body></html>"#;

    #[test]
    fn finds_badge_text_by_whole_class_token() {
        let text = element_text_by_class(PAGE, "energy-points-badge").unwrap();
        assert_eq!(text, "1,234,567 energy points");
        assert_eq!(parse_leading_int(&text), Some(1_234_567));
    }

    #[test]
    fn nested_same_tag_is_balanced() {
        let doc = r#"<div class="x"><div>12</div>,345</div><div>9</div>"#;
        assert_eq!(element_text_by_class(doc, "x").as_deref(), Some("12,345"));
    }

    #[test]
    fn class_name_in_text_is_not_a_tag() {
        let doc = "<p>energy-points-badge</p>";
        assert_eq!(element_text_by_class(doc, "energy-points-badge"), None);
    }

    #[test]
    fn tag_names_are_matched_whole() {
        let doc = r#"<b class="energy-points-badge">1,234<br></b>"#;
        assert_eq!(element_text_by_class(doc, "energy-points-badge").as_deref(), Some("1,234"));

        let doc = r#"<span class="energy-points-badge">1,234<spanner>x</spanner> pts</span> tail"#;
        assert_eq!(element_text_by_class(doc, "energy-points-badge").as_deref(), Some("1,234x pts"));
    }

    #[test]
    fn class_token_must_be_in_the_class_attribute() {
        let doc = r#"<i data-class="energy-points-badge">1</i><i subclass='energy-points-badge'>2</i>
                     <div id="a" class = 'x energy-points-badge'>3</div>"#;
        assert_eq!(element_text_by_class(doc, "energy-points-badge").as_deref(), Some("3"));

        let doc = r#"<div class="x" title="energy-points-badge">1</div>"#;
        assert_eq!(element_text_by_class(doc, "energy-points-badge"), None);
    }

    #[test]
    fn leading_int_rules() {
        assert_eq!(parse_leading_int("  42 points"), Some(42));
        assert_eq!(parse_leading_int("9,999,999"), Some(9_999_999));
        assert_eq!(parse_leading_int("points: 42"), None);
        assert_eq!(parse_leading_int(""), None);
    }
}
