// file: src/utils/template.rs
// description: placeholder page templates for the html views
// reference: Internal code standards

use std::collections::HashMap;

const DEFAULT_LAYOUT: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>
body { font-family: sans-serif; max-width: 960px; margin: 2rem auto; padding: 0 1rem; color: #222; }
nav a { margin-right: 1rem; }
textarea { width: 100%; min-height: 8rem; }
table { border-collapse: collapse; width: 100%; }
th, td { border-bottom: 1px solid #ddd; padding: .4rem; text-align: left; vertical-align: top; }
.decision-approved { color: #1a7f37; font-weight: bold; }
.decision-rejected { color: #cf222e; font-weight: bold; }
.result { border: 1px solid #ccc; border-radius: 4px; padding: 1rem; margin: 1rem 0; }
</style>
</head>
<body>
<nav><a href="/">Analyze claim</a><a href="/history">History</a></nav>
<h1>{heading}</h1>
{body}
</body>
</html>
"#;

/// A template with `{name}` placeholders, rendered in a single pass so that
/// substituted values are never scanned for further placeholders.
pub struct PageTemplate {
    template: String,
}

impl PageTemplate {
    pub fn new() -> Self {
        Self {
            template: DEFAULT_LAYOUT.to_string(),
        }
    }

    pub fn render(&self, title: &str, heading: &str, body: &str) -> String {
        let mut values = HashMap::new();
        values.insert("title", title);
        values.insert("heading", heading);
        values.insert("body", body);
        self.render_with_map(&values)
    }

    /// Unknown placeholders are left in place.
    pub fn render_with_map(&self, values: &HashMap<&str, &str>) -> String {
        let mut output = String::with_capacity(self.template.len());
        let mut rest = self.template.as_str();

        while let Some(open) = rest.find('{') {
            output.push_str(&rest[..open]);
            let after = &rest[open + 1..];

            match after.find('}') {
                Some(close) if is_placeholder_name(&after[..close]) => {
                    let key = &after[..close];
                    match values.get(key) {
                        Some(value) => output.push_str(value),
                        None => {
                            output.push('{');
                            output.push_str(key);
                            output.push('}');
                        }
                    }
                    rest = &after[close + 1..];
                }
                _ => {
                    output.push('{');
                    rest = after;
                }
            }
        }

        output.push_str(rest);
        output
    }
}

impl Default for PageTemplate {
    fn default() -> Self {
        Self::new()
    }
}

fn is_placeholder_name(candidate: &str) -> bool {
    !candidate.is_empty()
        && candidate
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}
