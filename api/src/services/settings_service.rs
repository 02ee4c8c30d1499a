// Organisation settings

use crate::error::ApiResult;
use crate::handlers::AppState;
use crate::models::AppConfigDocument;

/// Stored settings, or the defaults when none were ever saved
pub async fn get_settings(state: &AppState) -> ApiResult<AppConfigDocument> {
    let stored = state.repositories.settings.get().await?;
    Ok(stored
        .map(|row| AppConfigDocument::from_stored(&row.config))
        .unwrap_or_default())
}

pub async fn update_settings(
    state: &AppState,
    document: AppConfigDocument,
) -> ApiResult<AppConfigDocument> {
    document.validate()?;

    let config = serde_json::to_value(&document)
        .map_err(|e| crate::error::ApiError::InternalError(e.to_string()))?;
    let row = state.repositories.settings.upsert(config).await?;
    tracing::info!("Settings updated (row {})", row.id);

    Ok(AppConfigDocument::from_stored(&row.config))
}
