use std::fmt::{Display, Formatter};

/// Name of the multipart field carrying the resume file.
pub const RESUME_FIELD: &str = "resume";
/// Name of the multipart field carrying the job role.
pub const JOB_ROLE_FIELD: &str = "job_role";

#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub enum MissingField {
    Resume,
    JobRole,
}

impl Display for MissingField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MissingField::Resume => write!(f, "Please upload a resume file."),
            MissingField::JobRole => write!(f, "Please select or input a job role."),
        }
    }
}

/// Check the inputs of an upload before anything is sent.
///
/// `job_role` is `None` when the upload doesn't need one.
/// Otherwise, it has to contain something other than whitespace.
/// The resume is checked first, so that only one field is ever reported.
///
/// On success, returns the trimmed job role, if any.
pub fn validate_upload(
    has_resume: bool,
    job_role: Option<&str>,
) -> Result<Option<&str>, MissingField> {
    if !has_resume {
        return Err(MissingField::Resume);
    }

    match job_role.map(str::trim) {
        None => Ok(None),
        Some("") => Err(MissingField::JobRole),
        Some(job_role) => Ok(Some(job_role)),
    }
}
