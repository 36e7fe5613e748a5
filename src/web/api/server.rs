use crate::catalog::config::get_job_roles_file;
use crate::web::api::config::build_analysis_api_config;
use crate::web::api::job_roles_state::JobRolesState;
use crate::web::api::{analysis_controller, job_roles_controller};
use crate::web::server::Server;
use rocket::{Build, Rocket};

pub struct ApiServer {}

impl ApiServer {
    pub fn new() -> Self {
        Self {}
    }
}

impl Server for ApiServer {
    fn configure(&self, rocket_build: Rocket<Build>) -> Rocket<Build> {
        let analysis_api_config = build_analysis_api_config();
        if analysis_api_config.skill_gap_url().is_none() {
            log::warn!("No analysis service configured: resume uploads will be refused.");
        }
        let job_roles_state = JobRolesState::load(&get_job_roles_file());

        rocket_build
            .manage(analysis_api_config)
            .manage(job_roles_state)
            .mount(
                "/api/",
                routes![
                    analysis_controller::skill_gap,
                    analysis_controller::job_recommendation,
                ],
            )
            .mount("/", routes![job_roles_controller::job_roles])
    }
}
