//! Message formatting for assistant replies
//!
//! Assistant replies use a small markdown-like dialect:
//! - `**text**` for bold
//! - `__text__` for italic
//! - numbered points such as `1. first 2. second`, which are split into
//!   one segment per point
//!
//! [`format_message`] produces HTML markup segments. [`render_terminal`]
//! applies the same rules with ANSI styles, and [`render`] dispatches on a
//! configured [`RenderMode`].

use colored::Colorize;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// How assistant replies are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Bold and italic through ANSI escape codes
    #[default]
    Terminal,
    /// HTML markup, one `<div>` per segment
    Html,
    /// Emphasis markers stripped, segments on separate lines
    Plain,
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Terminal => write!(f, "terminal"),
            Self::Html => write!(f, "html"),
            Self::Plain => write!(f, "plain"),
        }
    }
}

impl RenderMode {
    /// Parse a render mode from a string
    ///
    /// # Examples
    ///
    /// ```
    /// use aieth::format::RenderMode;
    ///
    /// assert_eq!(RenderMode::parse_str("HTML").unwrap(), RenderMode::Html);
    /// assert!(RenderMode::parse_str("markdown").is_err());
    /// ```
    pub fn parse_str(s: &str) -> Result<Self, String> {
        match s.trim().to_lowercase().as_str() {
            "terminal" | "ansi" => Ok(Self::Terminal),
            "html" => Ok(Self::Html),
            "plain" | "text" => Ok(Self::Plain),
            other => Err(format!("Unknown render mode: {}", other)),
        }
    }
}

fn list_marker() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+\.").expect("list marker pattern is valid"))
}

fn bold_marker() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold pattern is valid"))
}

fn italic_marker() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"__(.*?)__").expect("italic pattern is valid"))
}

/// Split text into display segments
///
/// If the text contains a numbered-list marker (`\d+\.`), it is cut
/// immediately before every marker and each piece is trimmed; pieces that
/// are empty after trimming are dropped. Text without a marker is returned
/// untouched as a single segment.
///
/// # Examples
///
/// ```
/// use aieth::format::split_segments;
///
/// assert_eq!(split_segments("1. a 2. b"), vec!["1. a", "2. b"]);
/// assert_eq!(split_segments("no list here"), vec!["no list here"]);
/// ```
pub fn split_segments(text: &str) -> Vec<&str> {
    let mut bounds: Vec<usize> = list_marker()
        .find_iter(text)
        .map(|m| m.start())
        .filter(|&start| start > 0)
        .collect();

    if bounds.is_empty() && !list_marker().is_match(text) {
        return vec![text];
    }

    bounds.insert(0, 0);
    bounds.push(text.len());

    bounds
        .windows(2)
        .map(|w| text[w[0]..w[1]].trim())
        .filter(|segment| !segment.is_empty())
        .collect()
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Convert emphasis markers in a single segment to HTML
///
/// The text is HTML-escaped first, then `**x**` becomes `<strong>x</strong>`
/// and `__x__` becomes `<em>x</em>`.
///
/// # Examples
///
/// ```
/// use aieth::format::format_text;
///
/// assert_eq!(format_text("**bold** and __em__"), "<strong>bold</strong> and <em>em</em>");
/// assert_eq!(format_text("a < b"), "a &lt; b");
/// ```
pub fn format_text(text: &str) -> String {
    let escaped = escape_html(text);
    let bolded = bold_marker().replace_all(&escaped, "<strong>${1}</strong>");
    italic_marker()
        .replace_all(&bolded, "<em>${1}</em>")
        .into_owned()
}

/// Format an assistant message into HTML markup segments
///
/// Numbered lists yield one segment per point; any other text yields a
/// single segment. Each segment has its emphasis converted by
/// [`format_text`].
///
/// # Examples
///
/// ```
/// use aieth::format::format_message;
///
/// let segments = format_message("1. **Rest** 2. Drink water");
/// assert_eq!(segments.len(), 2);
/// assert_eq!(segments[0], "1. <strong>Rest</strong>");
/// ```
pub fn format_message(text: &str) -> Vec<String> {
    split_segments(text).into_iter().map(format_text).collect()
}

/// Render an assistant message as HTML, one `<div>` per segment
pub fn render_html(text: &str) -> String {
    format_message(text)
        .iter()
        .map(|segment| format!("<div>{}</div>", segment))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render an assistant message for the terminal using ANSI styles
///
/// Returns one line per segment.
pub fn render_terminal(text: &str) -> Vec<String> {
    split_segments(text)
        .into_iter()
        .map(|segment| {
            let bolded = bold_marker()
                .replace_all(segment, |caps: &Captures| caps[1].bold().to_string());
            italic_marker()
                .replace_all(&bolded, |caps: &Captures| caps[1].italic().to_string())
                .into_owned()
        })
        .collect()
}

/// Render an assistant message with emphasis markers removed
pub fn render_plain(text: &str) -> Vec<String> {
    split_segments(text)
        .into_iter()
        .map(|segment| {
            let unbolded = bold_marker().replace_all(segment, "${1}");
            italic_marker().replace_all(&unbolded, "${1}").into_owned()
        })
        .collect()
}

/// Render an assistant message in the given mode
///
/// Segments are joined with newlines.
pub fn render(text: &str, mode: RenderMode) -> String {
    match mode {
        RenderMode::Terminal => render_terminal(text).join("\n"),
        RenderMode::Html => render_html(text),
        RenderMode::Plain => render_plain(text).join("\n"),
    }
}
