use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ProjectCategory {
    #[serde(rename = "branding")]
    Branding,
    #[serde(rename = "3d")]
    ThreeD,
}

/// A portfolio project. `image` is a legacy single-image field kept for
/// records created before the gallery existed; new records use `images`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Project {
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub category: ProjectCategory,
    pub cover: String,
    pub brief: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}
