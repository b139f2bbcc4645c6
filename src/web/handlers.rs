use crate::domain::{NewRecord, DEFAULT_LIST_LIMIT};
use crate::web::error::PageError;
use crate::web::extract::FormOrJson;
use crate::web::{pages, AppState};
use axum::{
    extract::State,
    response::{Html, Redirect},
};

/// GET `/`: table of records.
pub async fn homepage(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let records = state
        .store
        .list_records(DEFAULT_LIST_LIMIT)
        .await
        .map_err(PageError::ListFailed)?;

    tracing::debug!("Rendering homepage with {} records", records.len());
    Ok(Html(pages::homepage(&records)))
}

/// GET `/update-cobj`
pub async fn update_form() -> Html<String> {
    Html(pages::update_form())
}

/// POST `/update-cobj`: create, then back to the homepage.
pub async fn create_record(
    State(state): State<AppState>,
    FormOrJson(input): FormOrJson<NewRecord>,
) -> Result<Redirect, PageError> {
    state
        .store
        .create_record(&input)
        .await
        .map_err(PageError::CreateFailed)?;

    Ok(Redirect::to("/"))
}
