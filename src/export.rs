use base64::Engine;

use crate::models::GenerationResult;

/// Wraps a result into one self-contained HTML document, titled after the product.
pub fn document(result: &GenerationResult, title: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title}</title>
  <style>
{css}
  </style>
</head>
<body>
{html}
</body>
</html>"#,
        css = result.stylesheet,
        html = result.markup,
    )
}

/// `data:` URL of the document, for dropping straight into an iframe preview.
pub fn data_url(document: &str) -> String {
    format!(
        "data:text/html;charset=utf-8;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(document.as_bytes())
    )
}
