//! Catalog index over the static course and pathway dataset.
//!
//! The catalog is loaded once at application start and treated as
//! read-only for the life of the process. Loading builds an id→course
//! lookup so template resolution is a map probe rather than a scan.
//! Generation silently drops template ids missing from the catalog;
//! [`Catalog::unresolved_ids`] exists as the separate, explicit
//! validation pass for catalog tooling.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RoadmapError};
use crate::models::{Course, Pathway, PathwaySet, PathwayTemplate, Trunk};

/// On-disk catalog format: a flat course list plus the pathway templates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
struct CatalogData {
    courses: Vec<Course>,
    pathways: PathwaySet,
}

/// Immutable course catalog with an id→course index.
#[derive(Debug, Clone)]
pub struct Catalog {
    data: CatalogData,
    /// Course id → position in `data.courses`. First occurrence wins for
    /// duplicate ids.
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Parse a catalog from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self> {
        let data: CatalogData =
            serde_json::from_str(json).map_err(|source| RoadmapError::CatalogParse { source })?;
        Ok(Self::from_data(data))
    }

    /// Load a catalog from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|source| RoadmapError::catalog_read(path, source))?;
        Self::from_json(&json)
    }

    fn from_data(data: CatalogData) -> Self {
        let mut index = HashMap::with_capacity(data.courses.len());
        for (pos, course) in data.courses.iter().enumerate() {
            index.entry(course.id.clone()).or_insert(pos);
        }
        Self { data, index }
    }

    /// Look up a course by id.
    pub fn course(&self, id: &str) -> Option<&Course> {
        self.index.get(id).map(|&pos| &self.data.courses[pos])
    }

    /// All courses, in catalog order.
    pub fn courses(&self) -> &[Course] {
        &self.data.courses
    }

    /// The shared foundation sequence.
    pub fn trunk(&self) -> &Trunk {
        &self.data.pathways.trunk
    }

    /// The template for a role pathway.
    pub fn pathway(&self, pathway: Pathway) -> &PathwayTemplate {
        match pathway {
            Pathway::Builder => &self.data.pathways.builder,
            Pathway::Researcher => &self.data.pathways.researcher,
            Pathway::Enterprise => &self.data.pathways.enterprise,
        }
    }

    /// Resolve a list of course ids against the index, dropping ids the
    /// catalog does not know.
    pub fn resolve<'a, I>(&self, ids: I) -> Vec<&Course>
    where
        I: IntoIterator<Item = &'a String>,
    {
        ids.into_iter().filter_map(|id| self.course(id)).collect()
    }

    /// Report every trunk or pathway template id with no catalog course,
    /// as `(context, id)` pairs in template order.
    ///
    /// Generation drops these silently; this is the explicit
    /// data-integrity check for catalog tooling.
    pub fn unresolved_ids(&self) -> Vec<(String, String)> {
        let mut missing = Vec::new();
        let mut check = |context: &str, ids: &[String]| {
            for id in ids {
                if !self.index.contains_key(id) {
                    missing.push((context.to_string(), id.clone()));
                }
            }
        };

        check("trunk", &self.trunk().courses);
        for pathway in Pathway::ALL {
            let template = self.pathway(pathway);
            for phase in &template.phases {
                check(
                    &format!("{}/{}", pathway.as_str(), phase.name),
                    &phase.courses,
                );
            }
        }
        missing
    }
}
