use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Testimonial {
    pub quote: String,
    pub name: String,
    pub role: String,
}
