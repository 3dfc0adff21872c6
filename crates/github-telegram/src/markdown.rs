//! Telegram MarkdownV2 building blocks.
//!
//! Every piece of untrusted text must pass through one of the escapers
//! below exactly once before it is placed in a message. Escaping is a single
//! left-to-right pass, so a backslash already present in the source is
//! itself escaped and never mistaken for an escape sequence.

/// Characters that carry meaning in MarkdownV2 outside code and link targets.
const RESERVED: &[char] = &[
    '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
];

/// Escapes plain text.
pub fn escape(text: &str) -> String {
    escape_with(text, |c| c == '\\' || RESERVED.contains(&c))
}

/// Escapes text placed between backticks.
pub fn escape_code(text: &str) -> String {
    escape_with(text, |c| c == '\\' || c == '`')
}

/// Escapes the target of an inline link, i.e. the `(...)` part.
pub fn escape_url(url: &str) -> String {
    escape_with(url, |c| c == '\\' || c == ')')
}

fn escape_with(text: &str, needs_escape: impl Fn(char) -> bool) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 4);
    for c in text.chars() {
        if needs_escape(c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// `[text](url)` with both halves escaped.
pub fn link(text: &str, url: &str) -> String {
    format!("[{}]({})", escape(text), escape_url(url))
}

/// A link when `url` is known and non-empty, otherwise escaped plain text.
pub fn link_or_text(text: &str, url: Option<&str>) -> String {
    match url {
        Some(url) if !url.is_empty() => link(text, url),
        _ => escape(text),
    }
}

pub fn bold(text: &str) -> String {
    format!("*{}*", escape(text))
}

pub fn code(text: &str) -> String {
    format!("`{}`", escape_code(text))
}

/// Cuts `text` to at most `max_chars` characters, appending `...` when
/// anything was dropped. Operates on chars, so never splits a code point.
///
/// The result is raw text and still needs escaping.
pub fn preview(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", text[..cut].trim_end()),
        None => text.to_string(),
    }
}

/// Renders `text` as an escaped blockquote, one `>` per line.
pub fn blockquote(text: &str) -> String {
    text.lines()
        .map(|line| format!(">{}", escape(line)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Checks a whole message the way Telegram's MarkdownV2 parser reads it.
///
/// Accepts `*bold*`, `` `code` ``, `[text](url)` and `>` at the start of a
/// line; every other reserved character must be escaped. Returns the first
/// problem found.
#[cfg(test)]
pub(crate) fn check_markup(markup: &str) -> Result<(), String> {
    let chars: Vec<char> = markup.chars().collect();
    let mut bold = false;
    let mut link_text = false;
    let mut line_start = true;
    let mut i = 0;

    // Scans to the closing `delim`, allowing only `\delim` and `\\` inside.
    let skip_to = |mut i: usize, delim: char| -> Result<usize, String> {
        loop {
            match chars.get(i) {
                None => return Err(format!("unterminated {delim:?} entity")),
                Some('\\') => match chars.get(i + 1) {
                    Some(&c) if c == delim || c == '\\' => i += 2,
                    other => return Err(format!("bad escape {other:?} before {delim:?}")),
                },
                Some(&c) if c == delim => return Ok(i),
                Some(_) => i += 1,
            }
        }
    };

    while let Some(&c) = chars.get(i) {
        match c {
            '\\' => match chars.get(i + 1) {
                Some(&next) if (1..=126).contains(&(next as u32)) => i += 1,
                other => return Err(format!("bad escape {other:?} at {i}")),
            },
            '\n' => {
                line_start = true;
                i += 1;
                continue;
            }
            '>' if line_start => {}
            '*' => bold = !bold,
            '`' => i = skip_to(i + 1, '`')?,
            '[' if !link_text => link_text = true,
            ']' if link_text => {
                link_text = false;
                if chars.get(i + 1) != Some(&'(') {
                    return Err(format!("link text without url at {i}"));
                }
                i = skip_to(i + 2, ')')?;
            }
            c if RESERVED.contains(&c) => return Err(format!("unescaped {c:?} at {i}")),
            _ => {}
        }
        line_start = false;
        i += 1;
    }

    if bold || link_text {
        return Err("unclosed entity".to_string());
    }
    Ok(())
}
