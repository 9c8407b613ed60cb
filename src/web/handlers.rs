// file: src/web/handlers.rs
// description: request handlers binding form and json input to the analyzer and history
// reference: https://docs.rs/axum

use crate::models::{AnalysisResult, HistoryEntry, PolicySummary};
use crate::utils::{HealthCheck, HealthReport, Validator};
use crate::web::error::{ApiError, HISTORY_NOT_FOUND};
use crate::web::views::{self, ClaimOutcome};
use crate::web::AppState;
use axum::{
    extract::{Form, Path, State},
    response::{Html, Json},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

pub const EMPTY_CLAIM_MESSAGE: &str = "Please provide a claim description.";

/// Value of `selected_policy` that asks for every policy.
pub const ALL_POLICIES: &str = "all";

#[derive(Debug, Default, Deserialize)]
pub struct ClaimForm {
    #[serde(default)]
    pub claim_description: String,
    #[serde(default)]
    pub selected_policy: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReloadResponse {
    pub status: String,
    pub loaded: usize,
    pub failed: usize,
}

/// GET /
pub async fn index_page(State(state): State<AppState>) -> Html<String> {
    let policies = state.policies.names().await;
    let recent = state.history.recent(state.recent_limit).await;

    Html(views::render_index(None, "", "", &policies, &recent))
}

/// POST / - analyze a submitted claim
pub async fn index_submit(
    State(state): State<AppState>,
    Form(form): Form<ClaimForm>,
) -> Html<String> {
    let claim_description = form.claim_description.trim().to_string();
    let selected_policy = form.selected_policy.trim().to_string();

    let outcome = if Validator::is_blank(&claim_description) {
        debug!("Empty claim submitted");
        let rejected = AnalysisResult::rejected(EMPTY_CLAIM_MESSAGE);
        ClaimOutcome {
            decision: rejected.decision,
            amount: rejected.amount,
            justification: rejected.justification,
            claim_description: None,
            selected_policy: None,
        }
    } else {
        let selection = match selected_policy.as_str() {
            "" | ALL_POLICIES => None,
            name => Some(name),
        };

        let policies = state.policies.snapshot().await;
        let result = state
            .analyzer
            .analyze(&policies, &claim_description, selection);
        let entry = state
            .history
            .append(&claim_description, &selected_policy, &result)
            .await;
        info!(
            "Claim {} analyzed: {} ({})",
            entry.id, result.decision, result.amount
        );

        ClaimOutcome {
            decision: result.decision,
            amount: result.amount,
            justification: result.justification,
            claim_description: Some(claim_description.clone()),
            selected_policy: Some(selected_policy.clone()),
        }
    };

    let policies = state.policies.names().await;
    let recent = state.history.recent(state.recent_limit).await;

    Html(views::render_index(
        Some(&outcome),
        &claim_description,
        &selected_policy,
        &policies,
        &recent,
    ))
}

/// GET /history
pub async fn history_page(State(state): State<AppState>) -> Html<String> {
    let entries = state.history.recent(state.history.capacity()).await;
    let policies = state.policies.names().await;

    Html(views::render_history(&entries, &policies))
}

/// GET /api/history - newest first
pub async fn api_history(State(state): State<AppState>) -> Json<Vec<HistoryEntry>> {
    Json(state.history.recent(state.history.capacity()).await)
}

/// GET /api/history/:id
pub async fn api_history_item(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<HistoryEntry>, ApiError> {
    let not_found = || ApiError::NotFound(HISTORY_NOT_FOUND.to_string());

    let id: u64 = raw_id.parse().map_err(|_| not_found())?;
    state.history.get_by_id(id).await.map(Json).ok_or_else(not_found)
}

/// POST /api/clear_history
pub async fn api_clear_history(State(state): State<AppState>) -> Json<StatusResponse> {
    state.history.clear().await;
    info!("Search history cleared");

    Json(StatusResponse {
        status: "success".to_string(),
        message: "Search history cleared".to_string(),
    })
}

/// GET /api/policies
pub async fn api_policies(State(state): State<AppState>) -> Json<Vec<PolicySummary>> {
    Json(state.policies.summaries().await)
}

/// POST /api/reload_policies
pub async fn api_reload_policies(
    State(state): State<AppState>,
) -> Result<Json<ReloadResponse>, ApiError> {
    let stats = state.policies.reload(&state.policy_config).await?;

    Ok(Json(ReloadResponse {
        status: "success".to_string(),
        loaded: stats.loaded,
        failed: stats.failed,
    }))
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    let policy_count = state.policies.len().await;
    let policy_check = if policy_count == 0 {
        HealthCheck::degraded("policies", "no policy documents loaded".to_string())
    } else {
        HealthCheck::healthy("policies", Some(format!("{} loaded", policy_count)))
    };

    let history_check = HealthCheck::healthy(
        "history",
        Some(format!(
            "{}/{} entries",
            state.history.len().await,
            state.history.capacity()
        )),
    );

    Json(HealthReport::new(
        vec![policy_check, history_check],
        env!("CARGO_PKG_VERSION").to_string(),
    ))
}
