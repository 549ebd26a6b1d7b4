//! Pulls delimiter-bounded sections out of free-form model text.
//!
//! A section is the text between `START\n` and the first `\nEND` that follows
//! it. The scan is non-greedy on purpose: a reply that mentions the markers
//! again further down must not swallow everything in between.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delimiters {
    pub markup_start: String,
    pub markup_end: String,
    pub style_start: String,
    pub style_end: String,
}

impl Default for Delimiters {
    fn default() -> Self {
        Self {
            markup_start: "HTML_CODE_START".into(),
            markup_end: "HTML_CODE_END".into(),
            style_start: "CSS_CODE_START".into(),
            style_end: "CSS_CODE_END".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sections<'a> {
    pub markup: &'a str,
    pub stylesheet: &'a str,
}

/// Returns the text framed by `start` + newline and newline + `end`, if any.
pub fn section<'a>(text: &'a str, start: &str, end: &str) -> Option<&'a str> {
    let open = format!("{start}\n");
    let close = format!("\n{end}");
    // if the first opener has no closer after it, no later opener can have one
    let body_start = text.find(&open)? + open.len();
    let len = text[body_start..].find(&close)?;
    Some(&text[body_start..body_start + len])
}

/// Both sections or nothing; half a page is not a usable result.
pub fn extract<'a>(text: &'a str, delimiters: &Delimiters) -> Option<Sections<'a>> {
    let markup = section(text, &delimiters.markup_start, &delimiters.markup_end)?;
    let stylesheet = section(text, &delimiters.style_start, &delimiters.style_end)?;
    Some(Sections { markup, stylesheet })
}
