use crate::catalog::error::CatalogError;
use crate::catalog::error::CatalogError::{CantReadFile, InvalidContent};
use crate::tools::log_message_and_return;
use dto::job_roles::JobRoles;
use std::fs;
use std::path::Path;

pub mod config;
pub mod error;

/// Read the static catalog of job roles, shaped as `{"jobRoles": [...]}`.
pub fn load_job_roles(path: &Path) -> Result<JobRoles, CatalogError> {
    let content = fs::read_to_string(path).map_err(log_message_and_return(
        &format!("Can't read job roles file {path:?}"),
        CantReadFile,
    ))?;
    serde_json::from_str(&content).map_err(log_message_and_return(
        &format!("Job roles file {path:?} is malformed"),
        InvalidContent,
    ))
}
