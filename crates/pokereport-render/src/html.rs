//! Fixed HTML template for creature reports.

use pokereport_core::Creature;

/// Document title of every report.
pub const REPORT_TITLE: &str = "Pokemon Report";

/// Shown in the type row when the record lists no type.
const UNKNOWN_TYPE: &str = "unknown";

/// Renders the report page for `creature`, showing `translated_name` as its
/// name.
///
/// Height is printed in decimetres, weight in hectograms, abilities joined
/// with `", "` in slot order. Substituted values are HTML-escaped.
pub fn render_html(creature: &Creature, translated_name: &str) -> String {
    let name = escape_html(translated_name);
    let kind = escape_html(creature.primary_type().unwrap_or(UNKNOWN_TYPE));
    let abilities = escape_html(&creature.ability_names().collect::<Vec<_>>().join(", "));
    let height = creature.height;
    let weight = creature.weight;

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>{REPORT_TITLE}</title>
    <style>
        body {{ font-family: Arial, Helvetica, sans-serif; margin: 40px; }}
        h1 {{ color: #cc0000; border-bottom: 2px solid #cc0000; }}
        p {{ font-size: 14pt; }}
    </style>
</head>
<body>
    <h1>{REPORT_TITLE}</h1>
    <p><strong>Name:</strong> {name}</p>
    <p><strong>Type:</strong> {kind}</p>
    <p><strong>Height:</strong> {height} decimetres</p>
    <p><strong>Weight:</strong> {weight} hectograms</p>
    <p><strong>Abilities:</strong> {abilities}</p>
</body>
</html>
"#
    )
}

/// Escapes the five HTML-significant characters.
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
