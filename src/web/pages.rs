//! Server-rendered HTML for the two pages of the portal.

use crate::domain::Record;

pub const HOMEPAGE_TITLE: &str = "Homepage | Integrating With HubSpot I Practicum";
pub const UPDATE_FORM_TITLE: &str = "Update Custom Object Form | Integrating With HubSpot I Practicum";

pub fn homepage(records: &[Record]) -> String {
    let mut rows = String::new();

    if records.is_empty() {
        rows.push_str("        <tr><td colspan=\"3\" class=\"empty\">No records yet.</td></tr>\n");
    }

    for record in records {
        rows.push_str(&format!(
            "        <tr data-id=\"{}\"><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            escape_html(&record.id),
            escape_html(&record.name),
            escape_html(&record.bio),
            escape_html(&record.category),
        ));
    }

    let body = format!(
        r#"<h1>Custom Object Records</h1>
<p><a href="/update-cobj">Add a record</a></p>
<table>
  <thead>
    <tr><th>Name</th><th>Bio</th><th>Category</th></tr>
  </thead>
  <tbody>
{rows}  </tbody>
</table>"#
    );

    layout(HOMEPAGE_TITLE, &body)
}

pub fn update_form() -> String {
    let body = r#"<h1>Update Custom Object Form</h1>
<form method="POST" action="/update-cobj">
  <label for="name">Name</label>
  <input type="text" id="name" name="name">
  <label for="bio">Bio</label>
  <textarea id="bio" name="bio"></textarea>
  <label for="category">Category</label>
  <input type="text" id="category" name="category">
  <button type="submit">Submit</button>
</form>
<p><a href="/">Return to the homepage</a></p>"#;

    layout(UPDATE_FORM_TITLE, body)
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{}</title>
  <link rel="stylesheet" href="/public/css/style.css">
</head>
<body>
<main>
{}
</main>
</body>
</html>
"#,
        escape_html(title),
        body
    )
}

pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
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

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, name: &str) -> Record {
        Record {
            id: id.to_string(),
            name: name.to_string(),
            bio: "bio".to_string(),
            category: "cat".to_string(),
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<script>alert("x") & 'y'</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;) &amp; &#39;y&#39;&lt;/script&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_homepage_lists_records_in_order() {
        let html = homepage(&[record("1", "Ada"), record("2", "Grace")]);

        assert!(html.contains("<title>Homepage | Integrating With HubSpot I Practicum</title>"));
        let ada = html.find("Ada").unwrap();
        let grace = html.find("Grace").unwrap();
        assert!(ada < grace);
        assert!(!html.contains("No records yet."));
    }

    #[test]
    fn test_homepage_empty_state() {
        let html = homepage(&[]);
        assert!(html.contains("No records yet."));
    }

    #[test]
    fn test_homepage_escapes_values() {
        let html = homepage(&[record("1", "<b>Ada</b>")]);
        assert!(html.contains("&lt;b&gt;Ada&lt;/b&gt;"));
        assert!(!html.contains("<b>Ada</b>"));
    }

    #[test]
    fn test_update_form_fields() {
        let html = update_form();
        assert!(html.contains("<title>Update Custom Object Form | Integrating With HubSpot I Practicum</title>"));
        assert!(html.contains(r#"action="/update-cobj""#));
        for field in ["name", "bio", "category"] {
            assert!(html.contains(&format!(r#"name="{}""#, field)));
        }
    }
}
