use crate::tools::log_error_and_return;
use crate::tools::web::build_client;
use crate::web::api::analysis_client::forward_upload;
use crate::web::api::config::AnalysisApiConfig;
use rocket::State;
use rocket::data::{Data, ToByteUnit};
use rocket::http::{ContentType, Status};
use rocket::response::content::RawJson;

const UPLOAD_LIMIT_IN_MEBIBYTES: u8 = 10;

#[post("/skill-gap", format = "multipart/form-data", data = "<upload>")]
pub async fn skill_gap(
    config: &State<AnalysisApiConfig>,
    content_type: &ContentType,
    upload: Data<'_>,
) -> Result<RawJson<String>, Status> {
    forward(config.skill_gap_url(), content_type, upload).await
}

#[post("/job-recommendation", format = "multipart/form-data", data = "<upload>")]
pub async fn job_recommendation(
    config: &State<AnalysisApiConfig>,
    content_type: &ContentType,
    upload: Data<'_>,
) -> Result<RawJson<String>, Status> {
    forward(config.job_recommendation_url(), content_type, upload).await
}

/// The analysis service's answer is passed back untouched:
/// rendering it is the frontend's job.
async fn forward(
    url: Option<String>,
    content_type: &ContentType,
    upload: Data<'_>,
) -> Result<RawJson<String>, Status> {
    let Some(url) = url else {
        log::warn!("Upload refused: no analysis service has been configured.");
        return Err(Status::ServiceUnavailable);
    };

    let body = upload
        .open(UPLOAD_LIMIT_IN_MEBIBYTES.mebibytes())
        .into_bytes()
        .await
        .map_err(log_error_and_return(Status::BadRequest))?;
    if !body.is_complete() {
        log::warn!("Upload refused: it exceeds {UPLOAD_LIMIT_IN_MEBIBYTES} MiB.");
        return Err(Status::PayloadTooLarge);
    }

    let client = build_client().map_err(log_error_and_return(Status::InternalServerError))?;
    forward_upload(&client, &url, &content_type.to_string(), body.into_inner())
        .await
        .map(RawJson)
        .map_err(log_error_and_return(Status::BadGateway))
}
