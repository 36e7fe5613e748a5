use crate::visualization::{join_list, to_png_data_url};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Result of a skill gap analysis for a resume against a job role.
/// The local analysis service also sends a `visualization`, the remote one doesn't.
#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Clone)]
pub struct SkillGap {
    matched_skills: Vec<String>,
    missing_skills: Vec<String>,
    #[serde(default)]
    visualization: Option<String>,
}

impl SkillGap {
    pub fn new(
        matched_skills: Vec<String>,
        missing_skills: Vec<String>,
        visualization: Option<String>,
    ) -> Self {
        Self {
            matched_skills,
            missing_skills,
            visualization,
        }
    }

    pub fn matched_skills_text(&self) -> String {
        join_list(&self.matched_skills)
    }

    pub fn missing_skills_text(&self) -> String {
        join_list(&self.missing_skills)
    }

    pub fn visualization_data_url(&self) -> Option<String> {
        self.visualization.as_deref().map(to_png_data_url)
    }
}
