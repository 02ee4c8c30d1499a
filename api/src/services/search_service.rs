// Global search across assets, employees and locations

use crate::error::ApiResult;
use crate::handlers::AppState;
use crate::models::SearchResponse;

const SEARCH_LIMIT: u64 = 10;

pub async fn search(state: &AppState, query: &str) -> ApiResult<SearchResponse> {
    let term = query.trim();
    if term.is_empty() {
        return Ok(SearchResponse::default());
    }

    let repos = &state.repositories;
    let (assets, employees, locations) = tokio::try_join!(
        repos.assets.search(term, SEARCH_LIMIT),
        repos.employees.search(term, SEARCH_LIMIT),
        repos.locations.search(term, SEARCH_LIMIT),
    )?;

    Ok(SearchResponse {
        assets,
        employees,
        locations,
    })
}
