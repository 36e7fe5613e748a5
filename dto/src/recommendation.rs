use crate::visualization::{join_list, to_png_data_url};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Clone)]
pub struct JobRecommendation {
    recommended_roles: Vec<String>,
    #[serde(default)]
    visualization: Option<String>,
}

impl JobRecommendation {
    pub fn new(recommended_roles: Vec<String>, visualization: Option<String>) -> Self {
        Self {
            recommended_roles,
            visualization,
        }
    }

    pub fn recommended_roles_text(&self) -> String {
        join_list(&self.recommended_roles)
    }

    pub fn visualization_data_url(&self) -> Option<String> {
        self.visualization.as_deref().map(to_png_data_url)
    }
}
