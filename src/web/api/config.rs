#[cfg(not(feature = "demo"))]
use crate::tools::env_args::retrieve_arg_value;

#[cfg(not(feature = "demo"))]
const ANALYSIS_API_URL_ARG: &str = "--analysis-api-url";

/// Where the remote analysis service lives.
/// Without it, uploads can't be forwarded.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AnalysisApiConfig {
    url: Option<String>,
}

impl AnalysisApiConfig {
    pub fn new(url: Option<String>) -> Self {
        Self { url }
    }

    pub fn skill_gap_url(&self) -> Option<String> {
        self.endpoint_url("skill-gap")
    }

    pub fn job_recommendation_url(&self) -> Option<String> {
        self.endpoint_url("job-recommendation")
    }

    fn endpoint_url(&self, endpoint: &str) -> Option<String> {
        self.url
            .as_ref()
            .map(|url| format!("{}/{endpoint}", url.trim_end_matches('/')))
    }
}

#[cfg(not(feature = "demo"))]
pub fn build_analysis_api_config() -> AnalysisApiConfig {
    AnalysisApiConfig::new(retrieve_arg_value(ANALYSIS_API_URL_ARG))
}

#[cfg(feature = "demo")]
pub fn build_analysis_api_config() -> AnalysisApiConfig {
    AnalysisApiConfig::new(crate::demo_mock_server::ANALYSIS_MOCK_SERVER_URI.get().cloned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    #[parameterized(
        url = {"http://analysis.test", "http://analysis.test/", "http://analysis.test/api/"},
        expected_skill_gap_url = {
            "http://analysis.test/skill-gap",
            "http://analysis.test/skill-gap",
            "http://analysis.test/api/skill-gap",
        },
        expected_job_recommendation_url = {
            "http://analysis.test/job-recommendation",
            "http://analysis.test/job-recommendation",
            "http://analysis.test/api/job-recommendation",
        }
    )]
    fn should_build_endpoint_urls(
        url: &str,
        expected_skill_gap_url: &str,
        expected_job_recommendation_url: &str,
    ) {
        let config = AnalysisApiConfig::new(Some(url.to_owned()));

        assert_eq!(Some(expected_skill_gap_url.to_owned()), config.skill_gap_url());
        assert_eq!(
            Some(expected_job_recommendation_url.to_owned()),
            config.job_recommendation_url()
        );
    }

    #[test]
    fn should_have_no_endpoint_without_url() {
        let config = AnalysisApiConfig::default();

        assert_eq!(None, config.skill_gap_url());
        assert_eq!(None, config.job_recommendation_url());
    }

    #[cfg(not(feature = "demo"))]
    #[test]
    fn should_build_config_from_args() {
        use crate::tools::env_args::with_env_args;

        let args = vec![format!("{ANALYSIS_API_URL_ARG}=http://analysis.test")];

        let config = with_env_args(args, build_analysis_api_config);

        assert_eq!(
            AnalysisApiConfig::new(Some("http://analysis.test".to_owned())),
            config
        );
    }
}
