mod analysis_client;
pub mod analysis_controller;
pub mod config;
pub mod job_roles_controller;
pub mod job_roles_state;
pub mod server;
