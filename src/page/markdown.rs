//! Minimal markdown for page text: ATX headings, paragraphs and the inline
//! markers `**strong**`, `*emphasis*`, `_emphasis_` and `` `code` ``.
//! Anything unclosed is kept as literal text.

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Span {
    Text(String),
    Strong(Vec<Span>),
    Emphasis(Vec<Span>),
    Code(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MdBlock {
    Heading { level: u8, spans: Vec<Span> },
    Paragraph(Vec<Span>),
}

pub fn parse(source: &str) -> Vec<MdBlock> {
    let mut blocks = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();

    for line in source.lines() {
        let line = line.trim();
        if line.is_empty() {
            flush_paragraph(&mut paragraph, &mut blocks);
            continue;
        }
        if let Some((level, text)) = heading(line) {
            flush_paragraph(&mut paragraph, &mut blocks);
            blocks.push(MdBlock::Heading { level, spans: parse_inline(text) });
            continue;
        }
        paragraph.push(line);
    }
    flush_paragraph(&mut paragraph, &mut blocks);
    blocks
}

fn flush_paragraph(lines: &mut Vec<&str>, blocks: &mut Vec<MdBlock>) {
    if lines.is_empty() {
        return;
    }
    blocks.push(MdBlock::Paragraph(parse_inline(&lines.join(" "))));
    lines.clear();
}

fn heading(line: &str) -> Option<(u8, &str)> {
    let level = line.chars().take_while(|c| *c == '#').count();
    if level == 0 || level > 6 {
        return None;
    }
    let rest = &line[level..];
    if rest.is_empty() {
        return Some((level as u8, ""));
    }
    if !rest.starts_with([' ', '\t']) {
        return None;
    }
    let text = rest.trim();
    // A closing run of `#` only counts when it stands apart from the text.
    let text = match text.trim_end_matches('#') {
        "" => "",
        stripped if stripped.ends_with([' ', '\t']) => stripped.trim_end(),
        _ => text,
    };
    Some((level as u8, text))
}

pub fn parse_inline(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut literal = String::new();
    let mut rest = text;

    while let Some(c) = rest.chars().next() {
        let prev = text[..text.len() - rest.len()].chars().next_back();
        let parsed = match c {
            '`' => delimited(rest, "`", false).map(|(inner, after)| (Span::Code(inner.to_string()), after)),
            '*' if rest.starts_with("**") => {
                delimited(rest, "**", false).map(|(inner, after)| (Span::Strong(parse_inline(inner)), after))
            }
            '*' => delimited(rest, "*", false).map(|(inner, after)| (Span::Emphasis(parse_inline(inner)), after)),
            // `_` never opens inside a word, so identifiers stay intact.
            '_' if prev.is_some_and(char::is_alphanumeric) => None,
            '_' => delimited(rest, "_", true).map(|(inner, after)| (Span::Emphasis(parse_inline(inner)), after)),
            _ => None,
        };

        match parsed {
            Some((span, after)) => {
                if !literal.is_empty() {
                    spans.push(Span::Text(std::mem::take(&mut literal)));
                }
                spans.push(span);
                rest = after;
            }
            None => {
                literal.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }

    if !literal.is_empty() {
        spans.push(Span::Text(literal));
    }
    spans
}

/// Splits `text` (which starts with `marker`) into the non-empty content up to
/// the closing marker and whatever follows it. With `word_bound`, a closing
/// marker directly followed by a letter or digit is skipped.
fn delimited<'a>(text: &'a str, marker: &str, word_bound: bool) -> Option<(&'a str, &'a str)> {
    let body = &text[marker.len()..];
    let end = body
        .match_indices(marker)
        .map(|(i, _)| i)
        .find(|&i| !word_bound || !body[i + marker.len()..].chars().next().is_some_and(char::is_alphanumeric))?;
    if end == 0 {
        return None;
    }
    Some((&body[..end], &body[end + marker.len()..]))
}

/// Concatenated text content, markers removed.
pub fn plain_text(spans: &[Span]) -> String {
    spans
        .iter()
        .map(|span| match span {
            Span::Text(text) | Span::Code(text) => text.clone(),
            Span::Strong(inner) | Span::Emphasis(inner) => plain_text(inner),
        })
        .collect()
}
