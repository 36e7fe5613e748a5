use rocket::{Build, Rocket};

use crate::tools::env_args::retrieve_arg_value;
use crate::web::api::server::ApiServer;
use crate::web::frontend::server::FrontendServer;

const PORT_ENV_ARG: &str = "--port";
const DEFAULT_PORT: u16 = 8000;

pub trait Server {
    fn configure(&self, rocket_build: Rocket<Build>) -> Rocket<Build>;
}

pub fn build_server() -> Rocket<Build> {
    let port = get_port();
    let rocket_build = rocket::build().configure(rocket::Config::figment().merge(("port", port)));

    let servers: Vec<Box<dyn Server>> = vec![
        Box::new(ApiServer::new()),
        Box::new(FrontendServer::new()),
    ];
    servers
        .iter()
        .fold(rocket_build, |rocket_build, server| {
            server.configure(rocket_build)
        })
}

fn get_port() -> u16 {
    retrieve_arg_value(PORT_ENV_ARG)
        .and_then(|port| port.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::env_args::with_env_args;
    use parameterized::{ide, parameterized};

    ide!();

    #[parameterized(
        args = {
            vec![format!("{PORT_ENV_ARG}=10")],
            vec![format!("{PORT_ENV_ARG}=doe")],
            vec![format!("{PORT_ENV_ARG}=")],
            vec![format!("{PORT_ENV_ARG}=70000")],
            vec![],
        },
        expected_port = {10, DEFAULT_PORT, DEFAULT_PORT, DEFAULT_PORT, DEFAULT_PORT}
    )]
    fn should_get_port(args: Vec<String>, expected_port: u16) {
        let port = with_env_args(args, get_port);

        assert_eq!(expected_port, port);
    }
}
