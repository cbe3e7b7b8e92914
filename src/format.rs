//! Line-by-line conversion of backend text into HTML fragments.
//!
//! Every input line (split on `\n`) becomes exactly one fragment. The three
//! result panels share one classifier and differ only in their [`Variant`].

use std::sync::LazyLock;

use regex::Regex;

// ASCII digits only; `\d` in `regex` would also accept other scripts' digits.
static NUMBERED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+\.").unwrap());

/// Trim the way browsers do: Unicode whitespace plus the byte-order mark.
fn trim_text(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Variant {
    pub callout_style: &'static str,
    pub callout_text_style: &'static str,
    /// `Day ...` / `## Day ...` lines become `<h4>`.
    pub day_headings: bool,
    /// `### ...` / `**...` lines become `<h5>`.
    pub sub_headings: bool,
    pub h4_style: &'static str,
    pub h5_style: &'static str,
    pub li_style: &'static str,
    pub p_style: &'static str,
}

const SIMPLE_CALLOUT: &str =
    "margin: 1rem 0; padding: 1rem; background: var(--bg-color); border-radius: 8px;";
const SIMPLE_CALLOUT_TEXT: &str = "color: var(--primary-color);";

pub const PLAN: Variant = Variant {
    callout_style: SIMPLE_CALLOUT,
    callout_text_style: SIMPLE_CALLOUT_TEXT,
    day_headings: true,
    sub_headings: true,
    h4_style: "color: var(--primary-color); margin-top: 1.5rem;",
    h5_style: "color: var(--text-primary); margin-top: 1rem;",
    li_style: "margin-left: 1.5rem;",
    p_style: "",
};

pub const TIPS: Variant = Variant {
    callout_style: SIMPLE_CALLOUT,
    callout_text_style: SIMPLE_CALLOUT_TEXT,
    day_headings: false,
    sub_headings: false,
    h4_style: "",
    h5_style: "",
    li_style: "margin-left: 1.5rem;",
    p_style: "",
};

pub const SUGGEST: Variant = Variant {
    callout_style: "margin: 1rem 0; padding: 1.25rem; background: linear-gradient(135deg, #667eea20 0%, #764ba220 100%); border-radius: 12px; border-left: 4px solid var(--primary-color);",
    callout_text_style: "color: var(--primary-color); font-size: 1.1rem;",
    day_headings: false,
    sub_headings: false,
    h4_style: "",
    h5_style: "",
    li_style: "margin-left: 1.5rem; margin-bottom: 0.5rem;",
    p_style: "margin-bottom: 0.75rem;",
};

/// What a single line turned out to be, with its display text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    Callout(&'a str),
    DayHeading(&'a str),
    SubHeading(String),
    Item(&'a str),
    Paragraph(&'a str),
    Break,
}

pub fn classify<'a>(line: &'a str, v: &Variant) -> Line<'a> {
    let t = trim_text(line);

    if NUMBERED.is_match(t) {
        Line::Callout(t)
    } else if v.day_headings && (t.starts_with("Day ") || t.starts_with("## Day")) {
        Line::DayHeading(t)
    } else if v.sub_headings && (t.starts_with("###") || t.starts_with("**")) {
        Line::SubHeading(trim_text(&line.replace(['#', '*'], "")).to_string())
    } else if let Some(rest) = t.strip_prefix('-').or_else(|| t.strip_prefix('•')) {
        Line::Item(trim_text(rest))
    } else if !t.is_empty() {
        Line::Paragraph(t)
    } else {
        Line::Break
    }
}

pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn open_tag(tag: &str, style: &str) -> String {
    if style.is_empty() {
        format!("<{tag}>")
    } else {
        format!("<{tag} style=\"{style}\">")
    }
}

fn render_line(line: &Line<'_>, v: &Variant, escape: bool) -> String {
    let text = |s: &str| if escape { escape_html(s) } else { s.to_string() };

    match line {
        Line::Callout(s) => format!(
            "{}{}{}</strong></div>",
            open_tag("div", v.callout_style),
            open_tag("strong", v.callout_text_style),
            text(s)
        ),
        Line::DayHeading(s) => format!("{}{}</h4>", open_tag("h4", v.h4_style), text(s)),
        Line::SubHeading(s) => format!("{}{}</h5>", open_tag("h5", v.h5_style), text(s)),
        Line::Item(s) => format!("{}{}</li>", open_tag("li", v.li_style), text(s)),
        Line::Paragraph(s) => format!("{}{}</p>", open_tag("p", v.p_style), text(s)),
        Line::Break => "<br>".to_string(),
    }
}

/// One fragment per line, in input order.
pub fn fragments(content: &str, v: &Variant, escape: bool) -> Vec<String> {
    content
        .split('\n')
        .map(|line| render_line(&classify(line, v), v, escape))
        .collect()
}

pub fn format_content(content: &str, v: &Variant, escape: bool) -> String {
    fragments(content, v, escape).concat()
}
