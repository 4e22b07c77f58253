use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum AcademicField {
    #[serde(rename = "Computer Science")]
    ComputerScience,
    Design,
    #[serde(rename = "AI Research")]
    AiResearch,
    Education,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum AcademicStatus {
    Published,
    #[serde(rename = "In Review")]
    InReview,
    Draft,
    Submitted,
}

/// An academic publication or credential. `date` is free-form text intended
/// as YYYY-MM-DD but stored as entered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Academic {
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub field: AcademicField,
    pub description: String,
    pub image: String,
    pub status: AcademicStatus,
    pub focus: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}
