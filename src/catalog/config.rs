use crate::tools::env_args::retrieve_arg_value;
use std::path::PathBuf;

const JOB_ROLES_FILE_ARG: &str = "--job-roles-file";
const DEFAULT_JOB_ROLES_FILE: &str = "public/data/job_roles.json";

pub fn get_job_roles_file() -> PathBuf {
    retrieve_arg_value(JOB_ROLES_FILE_ARG)
        .unwrap_or_else(|| DEFAULT_JOB_ROLES_FILE.to_owned())
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::env_args::with_env_args;

    #[test]
    fn should_get_custom_job_roles_file() {
        let args = vec![format!("{JOB_ROLES_FILE_ARG}=/tmp/roles.json")];

        let file = with_env_args(args, get_job_roles_file);

        assert_eq!(PathBuf::from("/tmp/roles.json"), file);
    }

    #[test]
    fn should_get_default_job_roles_file() {
        let file = with_env_args(vec![], get_job_roles_file);

        assert_eq!(PathBuf::from(DEFAULT_JOB_ROLES_FILE), file);
    }
}
