use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use uuid::Uuid;

use crate::web::{log, Error};

/// Maps any `web::Error` found in the response extensions to the JSON error
/// body returned to the client, stamps the cross-origin headers on every
/// response and emits the request log line.
pub async fn response_mapper(req_method: Method, uri: Uri, resp: Response) -> Response {
    let uuid = Uuid::new_v4();

    let web_error = resp.extensions().get::<Arc<Error>>().map(|er| er.as_ref());
    let client_status_and_error = web_error.map(Error::status_code_and_client_error);

    let err_resp = client_status_and_error.as_ref().map(|(status, cl_err)| {
        let client_error_body = json!({ "error": cl_err.to_string() });

        (*status, Json(client_error_body)).into_response()
    });

    log::log_request(
        uuid,
        req_method,
        uri,
        resp.status(),
        web_error,
        client_status_and_error,
    )
    .await;

    let mut resp = err_resp.unwrap_or(resp);
    apply_cors_headers(&mut resp);
    resp
}

/// The waitlist form is embedded on the public landing page, so any origin
/// may POST to us. Note that `tower_http::cors` short-circuits every
/// OPTIONS request with its own 200, while the pre-flight contract of the
/// waitlist route is a 204 from the route handler.
fn apply_cors_headers(resp: &mut Response) {
    let headers = resp.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("POST, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("content-type"),
    );
}
