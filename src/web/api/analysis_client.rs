use crate::tools::log_message_and_return;
use crate::web::error::WebError;
use crate::web::error::WebError::{CantReadResponse, ConnectionFailed, UnexpectedStatus};
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;

/// Post an upload as is to the analysis service.
/// The multipart boundary lives in `content_type`, so it must be forwarded unchanged.
pub async fn forward_upload(
    client: &Client,
    url: &str,
    content_type: &str,
    body: Vec<u8>,
) -> Result<String, WebError> {
    let response = client
        .post(url)
        .header(CONTENT_TYPE, content_type)
        .body(body)
        .send()
        .await
        .map_err(log_message_and_return(
            "Can't reach analysis service.",
            ConnectionFailed,
        ))?;

    let status = response.status();
    if !status.is_success() {
        log::error!("Analysis service answered {status} on {url}");
        return Err(UnexpectedStatus(status.as_u16()));
    }

    response.text().await.map_err(log_message_and_return(
        "Can't read analysis service response.",
        CantReadResponse,
    ))
}
