pub mod job_roles;
pub mod login;
pub mod recommendation;
pub mod skill_gap;
pub mod upload;
pub mod visualization;
