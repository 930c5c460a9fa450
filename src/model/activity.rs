use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityLogEntryDto {
    pub details: String,
}

/// Body of `GET /api/activitylogs/user/:id`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityLogDto {
    #[serde(default)]
    pub activities: Vec<ActivityLogEntryDto>,
}
