use axum::{Json, Router, body::Bytes, extract::{Path, State}, http::StatusCode, routing::{get, post, put}};
use chrono::Utc;
use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use std::{collections::HashMap, sync::Arc};
use uuid::Uuid;

use crate::{
    error::ApiError,
    export,
    models::{AdvantageRequest, ContentRecord, ExportResponse, GenerateRequest, PageDraft, PageView},
    orchestrator::Orchestrator,
    strategy::{PageComposer, TemplateComposer},
    themes::{self, Theme},
};

pub const NEW_ADVANTAGE: &str = "New advantage";

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<HashMap<Uuid, PageDraft>>>,
    pub orchestrator: Arc<Orchestrator>,
}

impl AppState {
    pub fn new(orchestrator: Orchestrator) -> Self {
        Self { store: Arc::default(), orchestrator: Arc::new(orchestrator) }
    }

    /// Runs `edit` against one draft under the write lock and returns its new view.
    fn edit<F>(&self, id: Uuid, edit: F) -> Result<PageView, ApiError>
    where
        F: FnOnce(&mut PageDraft) -> Result<(), ApiError>,
    {
        let mut guard = self.store.write();
        let draft = guard.get_mut(&id).ok_or(ApiError::NotFound(id))?;
        edit(draft)?;
        draft.updated_at = Utc::now();
        Ok(draft.view())
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/themes", get(list_themes))
        .route("/api/pages", post(create_page))
        .route("/api/pages/:id", get(get_page))
        .route("/api/pages/:id/content", put(update_content))
        .route("/api/pages/:id/advantages", post(add_advantage))
        .route("/api/pages/:id/advantages/:index", put(set_advantage).delete(remove_advantage))
        .route("/api/pages/:id/generate", post(generate_page))
        .route("/api/pages/:id/export", get(export_page))
        .with_state(state)
}

/// An empty body means "use the defaults"; anything else must parse as `T`.
fn body_or_default<T: DeserializeOwned + Default>(body: &Bytes) -> Result<T, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    let Json(value) = Json::<T>::from_bytes(body)?;
    Ok(value)
}

pub async fn list_themes() -> Json<Vec<Theme>> {
    Json(themes::catalog())
}

/// An empty body starts the draft from the default record.
pub async fn create_page(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<PageView>), ApiError> {
    let record: ContentRecord = body_or_default(&body)?;
    record.validate()?;
    let draft = PageDraft::new(record);
    let view = draft.view();
    state.store.write().insert(draft.id, draft);
    tracing::info!("📝 Created page draft {}", view.id);
    Ok((StatusCode::CREATED, Json(view)))
}

pub async fn get_page(Path(id): Path<Uuid>, State(state): State<AppState>) -> Result<Json<PageView>, ApiError> {
    let view = state.store.read().get(&id).map(PageDraft::view);
    view.map(Json).ok_or(ApiError::NotFound(id))
}

pub async fn update_content(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
    Json(record): Json<ContentRecord>,
) -> Result<Json<PageView>, ApiError> {
    record.validate()?;
    state.edit(id, |draft| {
        draft.record = record;
        Ok(())
    }).map(Json)
}

pub async fn add_advantage(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PageView>, ApiError> {
    let request: AdvantageRequest = body_or_default(&body)?;
    let text = request.text.unwrap_or_else(|| NEW_ADVANTAGE.to_string());
    state.edit(id, |draft| {
        draft.record.add_advantage(text);
        Ok(())
    }).map(Json)
}

pub async fn set_advantage(
    Path((id, index)): Path<(Uuid, usize)>,
    State(state): State<AppState>,
    Json(body): Json<AdvantageRequest>,
) -> Result<Json<PageView>, ApiError> {
    state.edit(id, |draft| Ok(draft.record.set_advantage(index, body.text.unwrap_or_default())?))
        .map(Json)
}

pub async fn remove_advantage(
    Path((id, index)): Path<(Uuid, usize)>,
    State(state): State<AppState>,
) -> Result<Json<PageView>, ApiError> {
    state.edit(id, |draft| {
        let removed = draft.record.remove_advantage(index)?;
        tracing::info!("🗑️ Page {} dropped advantage #{}: {}", id, index, removed);
        Ok(())
    }).map(Json)
}

/// Runs the chosen strategy. On failure the previous result is left in place;
/// a result that arrives after a newer run started is discarded.
pub async fn generate_page(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
    Json(body): Json<GenerateRequest>,
) -> Result<Json<PageView>, ApiError> {
    let (record, slot) = {
        let guard = state.store.read();
        let draft = guard.get(&id).ok_or(ApiError::NotFound(id))?;
        (draft.record.clone(), Arc::clone(&draft.slot))
    };
    record.validate()?;

    let template;
    let composer: &dyn PageComposer = match body {
        GenerateRequest::Remote => state.orchestrator.as_ref(),
        GenerateRequest::Template { theme, use_record_colors } => {
            let base = themes::resolve(theme.as_deref().or(record.theme.as_deref()));
            let theme = if use_record_colors { base.with_record_colors(&record.colors) } else { base };
            tracing::info!("🎨 Page {} rendering with theme '{}'", id, theme.id);
            template = TemplateComposer::new(theme);
            &template
        }
    };

    let ticket = slot.begin();
    tracing::info!("🚀 Page {} generating with '{}' strategy", id, composer.name());
    let result = match composer.compose(&record).await {
        Ok(result) => result,
        Err(e) => {
            tracing::error!("❌ Page {} generation failed: {}", id, e);
            return Err(e.into());
        }
    };

    if slot.commit(ticket, result) {
        tracing::info!("✅ Page {} updated", id);
    } else {
        tracing::warn!("⏭️ Page {} result discarded, a newer generation started meanwhile", id);
    }
    state.edit(id, |_| Ok(())).map(Json)
}

pub async fn export_page(Path(id): Path<Uuid>, State(state): State<AppState>) -> Result<Json<ExportResponse>, ApiError> {
    let (result, title) = {
        let guard = state.store.read();
        let draft = guard.get(&id).ok_or(ApiError::NotFound(id))?;
        (draft.slot.current(), draft.record.product_name.clone())
    };
    let result = result.ok_or(ApiError::NothingGenerated(id))?;
    let document = export::document(&result, &title);
    let data_url = export::data_url(&document);
    Ok(Json(ExportResponse { document, data_url }))
}
