use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExportJobDto {
    pub job_id: i32,
    pub status: String,
    pub file_path: Option<String>,
}
