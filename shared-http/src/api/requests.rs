use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::api::Session;

/// Request body for `POST /api/halls`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateHallRequest {
    pub name: String,
    pub capacity: u32,
    #[serde(rename = "blockKey", default, skip_serializing_if = "Option::is_none")]
    pub block_key: Option<String>,
}

/// Request body for `POST /api/allocation/run`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunAllocationRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    pub session: Session,
    pub year: u8,
}

// === Query strings ===

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StudentQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_code: Option<String>,
    pub skip: u32,
    pub limit: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExamQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<Session>,
    pub skip: u32,
    pub limit: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AllocationStatsQuery {
    pub year: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<Session>,
}
