use crate::extract::Delimiters;
use crate::models::ContentRecord;

/// One natural-language request carrying every field of the record, asking for
/// exactly two marker-framed blocks back.
pub fn build_prompt(record: &ContentRecord, delimiters: &Delimiters) -> String {
    let advantages = record.advantages.iter()
        .map(|adv| format!("- {adv}"))
        .collect::<Vec<_>>()
        .join("\n");
    let colors = &record.colors;
    format!(
        "Create a modern, responsive landing page with the following details:

Product Name: {name}
Description: {description}
Product Advantages:
{advantages}
Price: {price}
CTA Button: {cta_text} (Link: {cta_link})
Theme: {theme}
Color Preferences: primary {primary}, secondary {secondary}, accent {accent}, background {background}, text {text}

Please provide HTML and CSS code for a professional, attractive landing page that showcases these features effectively. The design must be modern and responsive on mobile. The HTML must contain only the contents of the <body> element; put all styling in the CSS block. Reply using exactly this format:

{markup_start}
[Your HTML code here]
{markup_end}

{style_start}
[Your CSS code here]
{style_end}",
        name = record.product_name,
        description = record.short_description,
        price = record.price,
        cta_text = record.cta_text,
        cta_link = record.cta_link,
        theme = record.theme.as_deref().unwrap_or("professional"),
        primary = colors.primary,
        secondary = colors.secondary,
        accent = colors.accent,
        background = colors.background,
        text = colors.text,
        markup_start = delimiters.markup_start,
        markup_end = delimiters.markup_end,
        style_start = delimiters.style_start,
        style_end = delimiters.style_end,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_every_field() {
        let record = ContentRecord {
            product_name: "Widget".into(),
            short_description: "Great widget".into(),
            advantages: vec!["Fast".into(), "Cheap".into()],
            price: "$10".into(),
            cta_link: "https://x.test".into(),
            cta_text: "Buy".into(),
            theme: None,
            ..ContentRecord::default()
        };
        let prompt = build_prompt(&record, &Delimiters::default());
        for needle in [
            "Product Name: Widget", "Description: Great widget", "- Fast\n- Cheap", "Price: $10",
            "CTA Button: Buy (Link: https://x.test)", "Theme: professional", "primary #3B82F6", "text #1F2937",
        ] {
            assert!(prompt.contains(needle), "missing {needle}");
        }
    }

    #[test]
    fn prompt_asks_for_both_marker_pairs_on_their_own_lines() {
        let prompt = build_prompt(&ContentRecord::default(), &Delimiters::default());
        assert!(prompt.contains("\nHTML_CODE_START\n"));
        assert!(prompt.contains("\nHTML_CODE_END\n"));
        assert!(prompt.contains("\nCSS_CODE_START\n"));
        assert!(prompt.ends_with("\nCSS_CODE_END"));
    }
}
