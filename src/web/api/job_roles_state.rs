use crate::catalog::load_job_roles;
use dto::job_roles::JobRoles;
use std::path::Path;

/// The catalog is read once, at launch, and never changes afterward.
#[derive(Debug, Default)]
pub struct JobRolesState {
    job_roles: Option<JobRoles>,
}

impl JobRolesState {
    pub fn new(job_roles: Option<JobRoles>) -> Self {
        Self { job_roles }
    }

    /// A catalog that can't be loaded is not fatal: the server runs without it.
    pub fn load(path: &Path) -> Self {
        match load_job_roles(path) {
            Ok(job_roles) => {
                log::info!("{} job roles loaded from {path:?}", job_roles.len());
                Self::new(Some(job_roles))
            }
            Err(error) => {
                log::error!("Job roles won't be available: {error}");
                Self::default()
            }
        }
    }

    pub fn job_roles(&self) -> Option<&JobRoles> {
        self.job_roles.as_ref()
    }
}
