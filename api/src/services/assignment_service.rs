// Assignment history

use uuid::Uuid;

use super::all_assignments;
use crate::cache::Mutation;
use crate::entity::assignments;
use crate::error::{ApiError, ApiResult};
use crate::handlers::AppState;

pub async fn list_assignments(state: &AppState) -> ApiResult<Vec<assignments::Model>> {
    Ok(all_assignments(state).await?.as_ref().clone())
}

/// Delete a closed assignment. The open one backs the asset's `assigned`
/// status and goes away only through a return.
pub async fn delete_assignment(state: &AppState, id: Uuid) -> ApiResult<()> {
    let assignment = state
        .repositories
        .assignments
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Assignment {} not found", id)))?;

    if assignment.is_open() {
        return Err(ApiError::Conflict(format!(
            "Assignment of {} is still open; return the asset first",
            assignment.asset_tag
        )));
    }

    state.repositories.assignments.delete(id).await?;
    state.cache.invalidate(Mutation::AssignmentDelete);
    tracing::info!("Deleted assignment {} of {}", id, assignment.asset_tag);
    Ok(())
}
