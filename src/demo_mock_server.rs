use dto::recommendation::JobRecommendation;
use dto::skill_gap::SkillGap;
use std::net::TcpListener;
use std::sync::OnceLock;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub static ANALYSIS_MOCK_SERVER_URI: OnceLock<String> = OnceLock::new();

const LOCAL_ANALYSIS_ADDRESS: &str = "127.0.0.1:5000";
/// A 1x1 PNG, so that visualizations have something to show.
const DEMO_VISUALIZATION: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

pub async fn init_demo() {
    let analysis_server = init_analysis_mock_server().await;
    let local_analysis_server = init_local_analysis_mock_server().await;

    // Mock servers stop when dropped: they have to live as long as the app.
    std::mem::forget(analysis_server);
    std::mem::forget(local_analysis_server);
}

fn demo_skill_gap(visualization: Option<String>) -> SkillGap {
    SkillGap::new(
        vec!["Rust".to_owned(), "SQL".to_owned(), "Git".to_owned()],
        vec!["Kubernetes".to_owned(), "Terraform".to_owned()],
        visualization,
    )
}

fn demo_job_recommendation(visualization: Option<String>) -> JobRecommendation {
    JobRecommendation::new(
        vec![
            "Backend Developer".to_owned(),
            "DevOps Engineer".to_owned(),
            "Data Engineer".to_owned(),
        ],
        visualization,
    )
}

// region Analysis service
async fn init_analysis_mock_server() -> MockServer {
    let mock_server = MockServer::start().await;
    ANALYSIS_MOCK_SERVER_URI.get_or_init(|| mock_server.uri());

    Mock::given(method("POST"))
        .and(path("/skill-gap"))
        .respond_with(ResponseTemplate::new(200).set_body_json(demo_skill_gap(None)))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/job-recommendation"))
        .respond_with(ResponseTemplate::new(200).set_body_json(demo_job_recommendation(None)))
        .mount(&mock_server)
        .await;

    mock_server
}
// endregion

// region Local analysis service
/// Pages call this one straight from the browser, on a fixed address.
async fn init_local_analysis_mock_server() -> Option<MockServer> {
    let listener = match TcpListener::bind(LOCAL_ANALYSIS_ADDRESS) {
        Ok(listener) => listener,
        Err(error) => {
            log::warn!("Local analysis demo is unavailable on {LOCAL_ANALYSIS_ADDRESS}: {error}");
            return None;
        }
    };
    let mock_server = MockServer::builder().listener(listener).start().await;
    let visualization = Some(DEMO_VISUALIZATION.to_owned());

    Mock::given(method("POST"))
        .and(path("/analyze_skills"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Access-Control-Allow-Origin", "*")
                .set_body_json(demo_skill_gap(visualization.clone())),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/get_recommendations"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Access-Control-Allow-Origin", "*")
                .set_body_json(demo_job_recommendation(visualization)),
        )
        .mount(&mock_server)
        .await;

    Some(mock_server)
}
// endregion
