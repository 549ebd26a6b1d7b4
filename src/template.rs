//! Deterministic page renderer: record + theme in, markup + stylesheet out.
//!
//! No network, no failure path. A theme with blank tokens still yields a
//! syntactically complete page, just with empty substitutions.

use chrono::{Datelike, Utc};

use crate::models::{ContentRecord, GenerationResult};
use crate::themes::Theme;

pub fn render(record: &ContentRecord, theme: &Theme) -> GenerationResult {
    render_for_year(record, theme, Utc::now().year())
}

pub fn render_for_year(record: &ContentRecord, theme: &Theme, year: i32) -> GenerationResult {
    GenerationResult {
        markup: markup(record, year),
        stylesheet: stylesheet(theme),
    }
}

fn feature_block(advantage: &str) -> String {
    format!(
        r#"        <div class="feature">
          <p>{advantage}</p>
        </div>
"#
    )
}

fn markup(record: &ContentRecord, year: i32) -> String {
    let features: String = record.advantages.iter().map(|a| feature_block(a)).collect();
    let name = &record.product_name;
    format!(
        r#"<header>
  <div class="container">
    <h1>{name}</h1>
  </div>
</header>

<section class="hero">
  <div class="container">
    <p class="description">{description}</p>
    <p class="price">{price}</p>
  </div>
</section>

<section class="features">
  <div class="container">
    <h2>Key Features</h2>
    <div class="features-grid">
{features}    </div>
  </div>
</section>

<section class="cta">
  <div class="container">
    <h2>Ready to get started?</h2>
    <a href="{link}" class="button">{cta}</a>
  </div>
</section>

<footer>
  <div class="container">
    <p>&copy; {year} {name}. All rights reserved.</p>
  </div>
</footer>
"#,
        description = record.short_description,
        price = record.price,
        link = record.cta_link,
        cta = record.cta_text,
    )
}

/// Catalog radii are utility-class names; anything else is taken as a CSS length.
fn radius_length(token: &str) -> &str {
    match token {
        "rounded-none" => "0",
        "rounded-sm" => "0.125rem",
        "rounded" => "0.25rem",
        "rounded-md" => "0.375rem",
        "rounded-lg" => "0.5rem",
        "rounded-xl" => "0.75rem",
        "rounded-2xl" => "1rem",
        "rounded-full" => "9999px",
        other => other,
    }
}

pub fn stylesheet(theme: &Theme) -> String {
    let radius = radius_length(&theme.border_radius);
    format!(
        r#"/* Theme: {name} ({id}), radius token: {radius_token} */

/* Base styles */
* {{
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}}

body {{
  font-family: {body_font};
  color: {text};
  background-color: {background};
  line-height: 1.6;
}}

h1, h2, h3, h4, h5, h6 {{
  font-family: {heading_font};
  margin-bottom: 1rem;
}}

.container {{
  width: 100%;
  max-width: 1200px;
  margin: 0 auto;
  padding: 0 1.5rem;
}}

/* Header */
header {{
  background-color: {primary};
  color: white;
  padding: 2rem 0;
  text-align: center;
}}

/* Hero section */
.hero {{
  padding: 4rem 0;
  text-align: center;
}}

.hero .description {{
  font-size: 1.25rem;
  max-width: 800px;
  margin: 0 auto 2rem;
}}

.hero .price {{
  font-size: 2rem;
  font-weight: bold;
  color: {primary};
}}

/* Features section */
.features {{
  background-color: #f8f9fa;
  padding: 4rem 0;
  text-align: center;
}}

.features h2 {{
  margin-bottom: 2rem;
  color: {secondary};
}}

.features-grid {{
  display: grid;
  grid-template-columns: 1fr;
  gap: 1.5rem;
  max-width: 800px;
  margin: 0 auto;
}}

@media (min-width: 768px) {{
  .features-grid {{
    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
  }}
}}

.feature {{
  background-color: white;
  padding: 1.5rem;
  border-top: 3px solid {accent};
  border-radius: {radius};
  box-shadow: 0 4px 6px rgba(0, 0, 0, 0.05);
  transition: transform 0.3s ease;
}}

.feature:hover {{
  transform: translateY(-5px);
}}

/* CTA section */
.cta {{
  padding: 5rem 0;
  text-align: center;
}}

.cta h2 {{
  margin-bottom: 2rem;
  color: {secondary};
}}

.button {{
  display: inline-block;
  background-color: {primary};
  color: white;
  padding: 0.875rem 2rem;
  border-radius: {radius};
  text-decoration: none;
  font-weight: 600;
  transition: background-color 0.3s ease, transform 0.3s ease;
}}

.button:hover {{
  background-color: {secondary};
  transform: translateY(-2px);
}}

/* Footer */
footer {{
  background-color: #f1f1f1;
  padding: 2rem 0;
  text-align: center;
  font-size: 0.875rem;
  color: #666;
}}

/* Responsive adjustments */
@media (max-width: 768px) {{
  .hero {{
    padding: 3rem 0;
  }}

  .hero .description {{
    font-size: 1.1rem;
  }}

  .features, .cta {{
    padding: 3rem 0;
  }}
}}
"#,
        name = theme.name,
        id = theme.id,
        radius_token = theme.border_radius,
        body_font = theme.body_font,
        heading_font = theme.heading_font,
        text = theme.text_color,
        background = theme.background_color,
        primary = theme.primary_color,
        secondary = theme.secondary_color,
        accent = theme.accent_color,
    )
}
