// file: src/web/views.rs
// description: html rendering for the claim form and history pages
// reference: internal page layout via PageTemplate

use crate::models::{Decision, HistoryEntry};
use crate::utils::PageTemplate;
use std::fmt::Write;

/// What the index page shows after a submission.
#[derive(Debug, Clone)]
pub struct ClaimOutcome {
    pub decision: Decision,
    pub amount: String,
    pub justification: String,
    pub claim_description: Option<String>,
    pub selected_policy: Option<String>,
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
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

fn decision_class(decision: Decision) -> &'static str {
    match decision {
        Decision::Approved => "decision-approved",
        Decision::Rejected => "decision-rejected",
    }
}

pub fn render_index(
    outcome: Option<&ClaimOutcome>,
    claim_description: &str,
    selected_policy: &str,
    available_policies: &[String],
    recent_history: &[HistoryEntry],
) -> String {
    let mut body = String::new();

    body.push_str("<form method=\"post\" action=\"/\">\n");
    body.push_str("<label for=\"claim_description\">Claim description</label>\n");
    let _ = writeln!(
        body,
        "<textarea id=\"claim_description\" name=\"claim_description\">{}</textarea>",
        escape_html(claim_description)
    );
    body.push_str("<label for=\"selected_policy\">Policy</label>\n");
    body.push_str("<select id=\"selected_policy\" name=\"selected_policy\">\n");
    let _ = writeln!(
        body,
        "<option value=\"all\"{}>All policies</option>",
        selected_attr(selected_policy.is_empty() || selected_policy == "all")
    );
    for name in available_policies {
        let escaped = escape_html(name);
        let _ = writeln!(
            body,
            "<option value=\"{}\"{}>{}</option>",
            escaped,
            selected_attr(name == selected_policy),
            escaped
        );
    }
    body.push_str("</select>\n<button type=\"submit\">Analyze</button>\n</form>\n");

    if available_policies.is_empty() {
        body.push_str("<p><em>No policy documents loaded.</em></p>\n");
    }

    if let Some(outcome) = outcome {
        body.push_str(&render_outcome(outcome));
    }

    body.push_str("<h2>Recent searches</h2>\n");
    body.push_str(&render_history_table(recent_history));

    PageTemplate::new().render("Claim Analyzer", "Insurance Claim Analyzer", &body)
}

pub fn render_history(entries: &[HistoryEntry], available_policies: &[String]) -> String {
    let mut body = String::new();

    if available_policies.is_empty() {
        body.push_str("<p>No policy documents loaded.</p>\n");
    } else {
        body.push_str("<p>Available policies:</p>\n<ul>\n");
        for name in available_policies {
            let _ = writeln!(body, "<li>{}</li>", escape_html(name));
        }
        body.push_str("</ul>\n");
    }

    let _ = writeln!(body, "<p>{} searches recorded.</p>", entries.len());
    body.push_str(&render_history_table(entries));

    PageTemplate::new().render("Search History", "Search History", &body)
}

fn render_outcome(outcome: &ClaimOutcome) -> String {
    let mut html = String::from("<section class=\"result\">\n<h2>Result</h2>\n");
    let _ = writeln!(
        html,
        "<p>Decision: <span class=\"{}\">{}</span></p>",
        decision_class(outcome.decision),
        outcome.decision
    );
    let _ = writeln!(html, "<p>Amount: {}</p>", escape_html(&outcome.amount));
    let _ = writeln!(
        html,
        "<p>Justification: {}</p>",
        escape_html(&outcome.justification)
    );
    if let Some(claim) = &outcome.claim_description {
        let _ = writeln!(html, "<p>Claim: {}</p>", escape_html(claim));
    }
    if let Some(policy) = outcome.selected_policy.as_deref().filter(|p| !p.is_empty()) {
        let _ = writeln!(html, "<p>Policy: {}</p>", escape_html(policy));
    }
    html.push_str("</section>\n");
    html
}

fn render_history_table(entries: &[HistoryEntry]) -> String {
    if entries.is_empty() {
        return "<p>No searches yet.</p>\n".to_string();
    }

    let mut html = String::from(
        "<table>\n<tr><th>#</th><th>Time</th><th>Claim</th><th>Policy</th><th>Decision</th><th>Amount</th><th>Justification</th></tr>\n",
    );
    for entry in entries {
        let _ = writeln!(
            html,
            "<tr><td>{}</td><td>{}</td><td title=\"{}\">{}</td><td>{}</td><td class=\"{}\">{}</td><td>{}</td><td>{}</td></tr>",
            entry.id,
            escape_html(&entry.timestamp),
            escape_html(&entry.full_claim_description),
            escape_html(&entry.claim_description),
            escape_html(&entry.selected_policy),
            decision_class(entry.decision),
            entry.decision,
            escape_html(&entry.amount),
            escape_html(&entry.justification),
        );
    }
    html.push_str("</table>\n");
    html
}

fn selected_attr(selected: bool) -> &'static str {
    if selected { " selected" } else { "" }
}
