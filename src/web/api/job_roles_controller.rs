use crate::web::api::job_roles_state::JobRolesState;
use dto::job_roles::JobRoles;
use rocket::State;
use rocket::http::Status;
use rocket::serde::json::Json;

/// Serve the catalog the way a static `job_roles.json` file would be.
#[get("/job_roles.json")]
pub async fn job_roles(job_roles_state: &State<JobRolesState>) -> Result<Json<JobRoles>, Status> {
    job_roles_state
        .job_roles()
        .cloned()
        .map(Json)
        .ok_or(Status::ServiceUnavailable)
}
