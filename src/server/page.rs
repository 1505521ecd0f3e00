use super::types::PageContext;
use crate::estimate::HousingType;

const TITLE: &str = "Predictimmo";

pub fn render_index(context: &PageContext) -> String {
    let options: String = HousingType::ALL
        .into_iter()
        .map(|housing_type| {
            let selected = context.housing_type.as_deref() == Some(housing_type.as_str());
            format!(
                r#"<option value="{value}"{selected}>{label}</option>"#,
                value = housing_type.as_str(),
                selected = if selected { " selected" } else { "" },
                label = housing_type.model_label(),
            )
        })
        .collect();

    let estimate = match context.estimated_value {
        Some(value) => format!(
            r#"<section class="estimate"><h2>Estimated value</h2><p id="estimated_value">{value} €</p></section>"#
        ),
        None => String::new(),
    };

    let body = format!(
        r#"<h1>{TITLE}</h1>
<form method="post" action="/">
  <label for="housing_type">Housing type</label>
  <select id="housing_type" name="housing_type">{options}</select>
  <label for="surface">Surface (m²)</label>
  <input id="surface" name="surface" type="number" min="1" value="{surface}">
  <label for="rooms">Rooms</label>
  <input id="rooms" name="rooms" type="number" min="1" value="{rooms}">
  <button type="submit">Estimate</button>
</form>
{estimate}"#,
        surface = escape(context.surface.as_deref().unwrap_or_default()),
        rooms = escape(context.rooms.as_deref().unwrap_or_default()),
    );

    layout(TITLE, &body)
}

pub fn render_error(detail: Option<&str>) -> String {
    let detail = detail
        .map(|detail| format!("<pre>{}</pre>", escape(detail)))
        .unwrap_or_default();

    layout(
        "500 Internal Server Error",
        &format!(
            "<h1>Internal Server Error</h1>\n<p>The server encountered an internal error and was unable to complete your request.</p>\n{detail}"
        ),
    )
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape(title),
        body
    )
}

fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
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
