use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A user's application to a job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    pub username: String,
    pub job_id: i32,
}
