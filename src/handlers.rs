use std::io::Write;
use axum::body::Bytes;
use axum::http::StatusCode;
use crate::logger::log_upload;
use crate::models::UploadKind;

pub const DEFAULT_PAGE: &str = "This is the default page";
pub const GET_NOT_SUPPORTED: &str = "This endpoint doesn't support GET requests";

pub async fn index() -> &'static str {

    DEFAULT_PAGE

}

pub async fn get_not_supported() -> &'static str {

    GET_NOT_SUPPORTED

}

pub async fn upload_run_result(body: Bytes) -> Result<String, (StatusCode, String)> {

    handle_upload(&mut std::io::stdout().lock(), UploadKind::RunResult, &body)

}

pub async fn upload_run_data(body: Bytes) -> Result<String, (StatusCode, String)> {

    handle_upload(&mut std::io::stdout().lock(), UploadKind::RunData, &body)

}

pub fn decode_upload(body: &[u8]) -> Result<String, (StatusCode, String)> {

    std::str::from_utf8(body)
        .map(str::to_owned)
        .map_err(|e| (StatusCode::BAD_REQUEST, format!("Request body is not valid UTF-8: {}", e)))

}

pub fn handle_upload(
    out: &mut impl Write,
    kind: UploadKind,
    body: &[u8]
) -> Result<String, (StatusCode, String)> {

    let uploaded_text = decode_upload(body)?;

    log_upload(out, kind, &uploaded_text)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, format!("Failed to write upload to console: {}", e)))?;

    // echo the upload back unchanged
    Ok(uploaded_text)

}
