//! Page rendering: the static page that shows one resolved runtime value.

use crate::runtime::{resolve, FallbackPolicy, RuntimeConfig, DEFAULT_KEY};
use serde::Serialize;

/// Fixed markup of the page, plus the key it displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageTemplate {
    pub title: String,
    pub logo_src: String,
    pub logo_alt: String,
    pub link_href: String,
    pub link_label: String,
    /// Script that assigns the injected object, loaded before the body.
    pub script_src: String,
    pub key: String,
}

impl Default for PageTemplate {
    fn default() -> Self {
        Self {
            title: "React App".to_string(),
            logo_src: "logo.svg".to_string(),
            logo_alt: "logo".to_string(),
            link_href: "https://reactjs.org".to_string(),
            link_label: "Base Url = ".to_string(),
            script_src: "env-config.js".to_string(),
            key: DEFAULT_KEY.to_string(),
        }
    }
}

/// Render the page for the given injected object. Never fails.
pub fn render_page(
    template: &PageTemplate,
    runtime: Option<&RuntimeConfig>,
    fallback: &FallbackPolicy,
) -> String {
    let resolved = resolve(runtime, &template.key);
    let value = resolved.display_with(fallback);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <title>{title}</title>
    <script src="{script}"></script>
  </head>
  <body>
    <div class="App">
      <header class="App-header">
        <img src="{logo}" class="App-logo" alt="{alt}" />
        <a class="App-link" href="{href}" target="_blank" rel="noopener noreferrer">{label}{value}</a>
      </header>
    </div>
  </body>
</html>
"#,
        title = escape_html(&template.title),
        script = escape_html(&template.script_src),
        logo = escape_html(&template.logo_src),
        alt = escape_html(&template.logo_alt),
        href = escape_html(&template.link_href),
        label = escape_html(&template.link_label),
        value = escape_html(value),
    )
}

/// Escape text for HTML element content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
