use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// The catalog of job roles a user can pick from.
/// Serialized as `{"jobRoles": [...]}`, which is the shape of the static catalog file.
#[derive(Debug, Default, Clone, Getters, Serialize, Deserialize, PartialEq, Eq)]
pub struct JobRoles {
    #[serde(rename = "jobRoles")]
    job_roles: Vec<String>,
}

impl JobRoles {
    pub fn new(job_roles: Vec<String>) -> Self {
        Self { job_roles }
    }

    /// Keep roles containing `text`, ignoring case. Order is preserved.
    /// An empty `text` matches every role.
    pub fn filter(&self, text: &str) -> Vec<&str> {
        let text = text.to_lowercase();
        self.job_roles
            .iter()
            .filter(|role| role.to_lowercase().contains(&text))
            .map(String::as_str)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.job_roles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.job_roles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    fn get_job_roles() -> JobRoles {
        JobRoles::new(vec![
            "Software Engineer".to_owned(),
            "Data Scientist".to_owned(),
            "Product Manager".to_owned(),
        ])
    }

    // region filter
    #[parameterized(
        text = {"eng", "ENG", "a", "Manager", "xyz"},
        expected_result = {
            vec!["Software Engineer"],
            vec!["Software Engineer"],
            vec!["Software Engineer", "Data Scientist", "Product Manager"],
            vec!["Product Manager"],
            vec![],
        }
    )]
    fn should_filter_job_roles(text: &str, expected_result: Vec<&str>) {
        let job_roles = get_job_roles();

        assert_eq!(expected_result, job_roles.filter(text));
    }

    #[test]
    fn should_return_every_role_in_order_when_text_is_empty() {
        let job_roles = get_job_roles();

        assert_eq!(
            vec!["Software Engineer", "Data Scientist", "Product Manager"],
            job_roles.filter("")
        );
    }

    #[test]
    fn should_return_nothing_when_catalog_is_empty() {
        let job_roles = JobRoles::default();

        assert!(job_roles.filter("").is_empty());
        assert!(job_roles.filter("eng").is_empty());
    }
    // endregion

    // region serde
    #[test]
    fn should_deserialize_catalog_file() {
        let content = r#"{"jobRoles": ["Software Engineer", "Data Scientist"]}"#;

        let job_roles: JobRoles = serde_json::from_str(content).unwrap();

        assert_eq!(2, job_roles.len());
        assert_eq!("Data Scientist", job_roles.job_roles()[1]);
    }

    #[test]
    fn should_fail_to_deserialize_when_field_is_missing() {
        let content = r#"{"roles": ["Software Engineer"]}"#;

        assert!(serde_json::from_str::<JobRoles>(content).is_err());
    }
    // endregion
}
