use serde::{Deserialize, Serialize};

use crate::entity::{assets, employees, locations};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Default, Serialize)]
pub struct SearchResponse {
    pub assets: Vec<assets::Model>,
    pub employees: Vec<employees::Model>,
    pub locations: Vec<locations::Model>,
}
