use serde::{Serialize, Deserialize};

use crate::models::ColorScheme;

/// An immutable bundle of visual tokens. Missing fields deserialize to empty
/// strings so the template renderer can still produce a page.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Theme {
    pub id: String,
    pub name: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub accent_color: String,
    pub background_color: String,
    pub text_color: String,
    pub heading_font: String,
    pub body_font: String,
    pub button_style: String,
    pub border_radius: String,
}

pub const DEFAULT_THEME_ID: &str = "modern";

fn entry(
    id: &str, name: &str,
    colors: [&str; 5],
    fonts: [&str; 2],
    button_style: &str, border_radius: &str,
) -> Theme {
    let [primary, secondary, accent, background, text] = colors;
    let [heading, body] = fonts;
    Theme {
        id: id.into(),
        name: name.into(),
        primary_color: primary.into(),
        secondary_color: secondary.into(),
        accent_color: accent.into(),
        background_color: background.into(),
        text_color: text.into(),
        heading_font: heading.into(),
        body_font: body.into(),
        button_style: button_style.into(),
        border_radius: border_radius.into(),
    }
}

pub fn catalog() -> Vec<Theme> {
    vec![
        entry(
            "modern", "Modern",
            ["#3B82F6", "#1E40AF", "#F59E0B", "#FFFFFF", "#1F2937"],
            ["sans-serif", "sans-serif"],
            "rounded-lg bg-blue-500 hover:bg-blue-600 text-white px-6 py-3 font-medium transition duration-300",
            "rounded-lg",
        ),
        entry(
            "minimal", "Minimal",
            ["#000000", "#333333", "#FF5A5F", "#FFFFFF", "#333333"],
            ["sans-serif", "sans-serif"],
            "rounded-none border-2 border-black bg-black hover:bg-white hover:text-black text-white px-6 py-3 font-medium transition duration-300",
            "rounded-none",
        ),
        entry(
            "vibrant", "Vibrant",
            ["#8B5CF6", "#6D28D9", "#10B981", "#F5F3FF", "#1F2937"],
            ["sans-serif", "sans-serif"],
            "rounded-full bg-purple-500 hover:bg-purple-600 text-white px-8 py-3 font-medium transition duration-300",
            "rounded-2xl",
        ),
        entry(
            "corporate", "Corporate",
            ["#0F172A", "#334155", "#0EA5E9", "#FFFFFF", "#334155"],
            ["serif", "sans-serif"],
            "rounded-md bg-sky-500 hover:bg-sky-600 text-white px-6 py-3 font-medium transition duration-300",
            "rounded-md",
        ),
    ]
}

/// Looks a theme up by id or display name, ignoring case.
pub fn find(tag: &str) -> Option<Theme> {
    let tag = tag.trim();
    catalog().into_iter().find(|t| t.id.eq_ignore_ascii_case(tag) || t.name.eq_ignore_ascii_case(tag))
}

/// Resolves an optional tag, falling back to the default theme for unknown tags.
pub fn resolve(tag: Option<&str>) -> Theme {
    tag.and_then(find)
        .or_else(|| find(DEFAULT_THEME_ID))
        .unwrap_or_default()
}

impl Theme {
    /// Same fonts, button and radius, but the five colours from the user's picks.
    pub fn with_record_colors(&self, colors: &ColorScheme) -> Theme {
        Theme {
            id: "custom".into(),
            name: format!("{} (custom colours)", self.name),
            primary_color: colors.primary.clone(),
            secondary_color: colors.secondary.clone(),
            accent_color: colors.accent.clone(),
            background_color: colors.background.clone(),
            text_color: colors.text.clone(),
            ..self.clone()
        }
    }
}
