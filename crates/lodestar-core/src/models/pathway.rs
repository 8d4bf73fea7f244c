//! Pathway templates and the role pathway enumeration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The shared foundation sequence prepended to every pathway unless the
/// learner's experience skips it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trunk {
    /// Display name of the foundation sequence
    pub name: String,

    /// Milestone text shown when the foundation phase completes
    pub milestone: String,

    /// Ordered course ids
    pub courses: Vec<String>,
}

/// One named phase inside a role pathway template.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PhaseTemplate {
    /// Phase display name
    pub name: String,

    /// Ordered course ids
    pub courses: Vec<String>,

    /// Milestone text; "{name} Complete" when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub milestone: Option<String>,
}

impl PhaseTemplate {
    /// Milestone text for this phase, deriving a default from the name.
    pub fn milestone_text(&self) -> String {
        self.milestone
            .clone()
            .unwrap_or_else(|| format!("{} Complete", self.name))
    }
}

/// A role-specific pathway: a named, ordered list of phase templates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PathwayTemplate {
    /// Pathway display name
    pub name: String,

    /// Ordered phase templates
    #[serde(default)]
    pub phases: Vec<PhaseTemplate>,
}

/// The catalog's complete set of pathway templates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PathwaySet {
    /// Shared foundation sequence
    pub trunk: Trunk,

    /// Application-building pathway
    pub builder: PathwayTemplate,

    /// Model-training pathway
    pub researcher: PathwayTemplate,

    /// Strategy and governance pathway
    pub enterprise: PathwayTemplate,
}

/// Type-safe enumeration of the three role pathways.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Pathway {
    /// Build AI-powered applications
    #[default]
    Builder,

    /// Train, fine-tune, and optimize models
    Researcher,

    /// Lead AI strategy and governance
    Enterprise,
}

impl FromStr for Pathway {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "builder" => Ok(Pathway::Builder),
            "researcher" => Ok(Pathway::Researcher),
            "enterprise" => Ok(Pathway::Enterprise),
            _ => Err(format!("Invalid pathway: {s}")),
        }
    }
}

impl Pathway {
    /// All pathways in display order.
    pub const ALL: [Pathway; 3] = [Pathway::Builder, Pathway::Researcher, Pathway::Enterprise];

    /// Convert to the catalog key representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Pathway::Builder => "builder",
            Pathway::Researcher => "researcher",
            Pathway::Enterprise => "enterprise",
        }
    }

    /// Role title shown to the learner.
    pub fn title(&self) -> &'static str {
        match self {
            Pathway::Builder => "AI Product Engineer",
            Pathway::Researcher => "Model Architect",
            Pathway::Enterprise => "Enterprise AI Leader",
        }
    }

    /// One-line tagline for the role.
    pub fn tagline(&self) -> &'static str {
        match self {
            Pathway::Builder => "Build AI-powered applications",
            Pathway::Researcher => "Train and optimize models",
            Pathway::Enterprise => "Lead AI transformation",
        }
    }

    /// Longer description of who the pathway is for.
    pub fn description(&self) -> &'static str {
        match self {
            Pathway::Builder => {
                "Master RAG systems, AI agents, and production deployment. \
                 Perfect for developers who want to integrate AI into applications."
            }
            Pathway::Researcher => {
                "Deep dive into model training, fine-tuning, and optimization. \
                 Ideal for those who want to understand how AI models work under the hood."
            }
            Pathway::Enterprise => {
                "Strategy, governance, and large-scale deployment. \
                 For leaders driving AI adoption in organizations."
            }
        }
    }

    /// Display icon for the role.
    pub fn icon(&self) -> &'static str {
        match self {
            Pathway::Builder => "🛠️",
            Pathway::Researcher => "🔬",
            Pathway::Enterprise => "🏢",
        }
    }
}
