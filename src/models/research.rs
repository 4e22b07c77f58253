use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ResearchField {
    #[serde(rename = "Generative AI")]
    GenerativeAi,
    #[serde(rename = "AI Coding")]
    AiCoding,
    #[serde(rename = "AI Integration in Design Curriculum")]
    DesignCurriculum,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ResearchStatus {
    #[serde(rename = "In Progress")]
    InProgress,
    Active,
    Planning,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Research {
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub field: ResearchField,
    pub description: String,
    pub image: String,
    pub status: ResearchStatus,
    pub focus: String,
}
