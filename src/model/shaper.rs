//! Post-processing applied to every completion before it reaches the browser.

pub const MAX_SENTENCES: usize = 3;
pub const MAX_CHARS: usize = 250;
const ELLIPSIS: &str = "...";

const QUOTE_PAIRS: [(char, char); 2] = [('"', '"'), ('\u{201C}', '\u{201D}')];

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn is_closing_quote(c: char) -> bool {
    matches!(c, '"' | '\u{201D}')
}

/// Splits text into runs ending in one or more terminators, plus any closing
/// quotes that directly follow them.
///
/// Terminator runs with no text in front of them are skipped. Trailing text
/// without a terminator is dropped, unless no sentence was found at all, in
/// which case the whole input is returned as a single sentence.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        if !is_terminator(c) {
            continue;
        }
        let next_is_terminator = chars.peek().map_or(false, |&(_, n)| is_terminator(n));
        if next_is_terminator {
            continue;
        }
        let mut end = idx + c.len_utf8();
        // A run with nothing before it is not a sentence.
        if text[start..end].chars().all(is_terminator) {
            start = end;
            continue;
        }
        while let Some(&(q_idx, q)) = chars.peek() {
            if !is_closing_quote(q) {
                break;
            }
            end = q_idx + q.len_utf8();
            chars.next();
        }
        sentences.push(&text[start..end]);
        start = end;
    }

    if sentences.is_empty() {
        sentences.push(text);
    }
    sentences
}

fn strip_quotes(text: &str) -> &str {
    for (open, close) in QUOTE_PAIRS {
        if let Some(inner) = text
            .strip_prefix(open)
            .and_then(|rest| rest.strip_suffix(close))
        {
            return inner.trim();
        }
    }
    text
}

fn cap_length(text: String) -> String {
    if text.chars().count() <= MAX_CHARS {
        return text;
    }
    let keep = MAX_CHARS - ELLIPSIS.len();
    let mut capped: String = text.chars().take(keep).collect();
    capped.push_str(ELLIPSIS);
    capped
}

/// Trims a raw completion to at most three sentences and 250 characters.
pub fn shape(raw: &str) -> String {
    let joined = split_sentences(raw)
        .into_iter()
        .take(MAX_SENTENCES)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    let unquoted = strip_quotes(joined.trim());
    cap_length(unquoted.to_string())
}
