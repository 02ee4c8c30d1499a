// API request/response models

pub mod alerts;
pub mod assets;
pub mod dashboard;
pub mod employees;
pub mod locations;
pub mod search;
pub mod settings;

pub use alerts::{AlertUpdate, NewAlert};
pub use assets::{
    AssetListQuery, AssetUpdate, AssignRequest, AssignmentOutcome, BulkAssetRow,
    BulkImportRequest, BulkImportResponse, NewAsset, ReturnRequest, SkippedRow,
};
pub use dashboard::{BackfillReport, DashboardResponse};
pub use employees::{
    EmailAssetsResponse, EmployeeDetail, EmployeeUpdate, NewEmployee, OffboardRequest,
    OffboardResponse,
};
pub use locations::{LocationDetail, LocationUpdate, LocationView, NewLocation};
pub use search::{SearchQuery, SearchResponse};
pub use settings::AppConfigDocument;
