use crate::errors::Result;
use crate::models::academic::Academic;
use crate::models::project::{Project, ProjectCategory};
use crate::models::research::Research;
use chrono::Utc;
use std::path::Path;

pub mod collection;

use collection::JsonCollection;

/// Flat-file persistence for the three content collections. Each collection
/// owns one JSON array file under the data directory and nothing else writes
/// to it.
pub struct ContentStore {
    pub projects: JsonCollection<Project>,
    pub research: JsonCollection<Research>,
    pub academics: JsonCollection<Academic>,
}

impl ContentStore {
    pub async fn new(data_dir: &Path) -> Result<Self> {
        let store = Self {
            projects: JsonCollection::new("projects", data_dir, seed_projects()),
            research: JsonCollection::new("research", data_dir, Vec::new()),
            academics: JsonCollection::new("academics", data_dir, Vec::new()),
        };
        store.projects.ensure().await?;
        store.research.ensure().await?;
        store.academics.ensure().await?;
        Ok(store)
    }
}

/// Assigns a creation id: current Unix-epoch milliseconds as a decimal
/// string, bumped while it collides with an id already in the collection.
pub fn generate_id<F>(taken: F) -> String
where
    F: Fn(&str) -> bool,
{
    let mut ts = Utc::now().timestamp_millis();
    loop {
        let id = ts.to_string();
        if !taken(&id) {
            return id;
        }
        ts += 1;
    }
}

/// Sample projects a fresh deployment starts with.
fn seed_projects() -> Vec<Project> {
    vec![
        Project {
            id: "p1".to_string(),
            title: "Astra Coffee — Brand System".to_string(),
            category: ProjectCategory::Branding,
            cover: "https://images.unsplash.com/photo-1512580770426-cbed71c40e94?q=80&w=1600&auto=format&fit=crop".to_string(),
            brief: "End-to-end brand identity for a specialty coffee roastery: logotype, palette, packaging, and storefront system.".to_string(),
            images: vec![
                "https://images.unsplash.com/photo-1483058712412-4245e9b90334?q=80&w=1600&auto=format&fit=crop".to_string(),
                "https://images.unsplash.com/photo-1530023367847-a683933f4175?q=80&w=1600&auto=format&fit=crop".to_string(),
            ],
            image: None,
        },
        Project {
            id: "p2".to_string(),
            title: "Monolith Lamp — 3D Product Visual".to_string(),
            category: ProjectCategory::ThreeD,
            cover: "https://images.unsplash.com/photo-1496317899792-9d7dbcd928a1?q=80&w=1600&auto=format&fit=crop".to_string(),
            brief: "Photoreal 3D render exploring brushed metal, soft emissive lighting, and cinematic shadows for a concept lamp.".to_string(),
            images: vec![
                "https://images.unsplash.com/photo-1553925585-b929523b47fb?q=80&w=1600&auto=format&fit=crop".to_string(),
                "https://images.unsplash.com/photo-1574701148212-8518049c7d7b?q=80&w=1600&auto=format&fit=crop".to_string(),
            ],
            image: None,
        },
        Project {
            id: "p3".to_string(),
            title: "Harbor & Co. — Packaging Suite".to_string(),
            category: ProjectCategory::Branding,
            cover: "https://images.unsplash.com/photo-1521577352947-9bb58764b69a?q=80&w=1600&auto=format&fit=crop".to_string(),
            brief: "Premium packaging direction with tactile papers, gilded foils, and modular label grid for a boutique grocer.".to_string(),
            images: vec![
                "https://images.unsplash.com/photo-1512436991641-6745cdb1723f?q=80&w=1600&auto=format&fit=crop".to_string(),
                "https://images.unsplash.com/photo-1513617339633-75ae9a3b342a?q=80&w=1600&auto=format&fit=crop".to_string(),
            ],
            image: None,
        },
        Project {
            id: "p4".to_string(),
            title: "Nebula Chair — 3D Concept".to_string(),
            category: ProjectCategory::ThreeD,
            cover: "https://images.unsplash.com/photo-1552919973-030017b86647?q=80&w=1600&auto=format&fit=crop".to_string(),
            brief: "Parametric seat form with velvet microfibers; studio renders and close-up material studies for a concept chair.".to_string(),
            images: vec![
                "https://images.unsplash.com/photo-1524758631624-e2822e304c36?q=80&w=1600&auto=format&fit=crop".to_string(),
                "https://images.unsplash.com/photo-1549492423-400259a2e574?q=80&w=1600&auto=format&fit=crop".to_string(),
            ],
            image: None,
        },
    ]
}
