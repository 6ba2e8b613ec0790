//! HTTP plumbing shared by the API modules.
//!
//! Thin wrappers over `gloo-net` that translate transport, status, and
//! decode failures into [`ApiError`]. Request timeouts are the HTTP
//! client's responsibility, not this layer's.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::core::ApiError;

fn network_err(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

fn decode_err(err: gloo_net::Error) -> ApiError {
    ApiError::Decode(err.to_string())
}

fn check(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(ApiError::Http(response.status()))
    }
}

async fn run(builder: RequestBuilder) -> Result<Response, ApiError> {
    let response = builder.send().await.map_err(network_err)?;
    check(response)
}

async fn run_request(request: Request) -> Result<Response, ApiError> {
    let response = request.send().await.map_err(network_err)?;
    check(response)
}

/// GET a JSON payload.
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    run(Request::get(url)).await?.json().await.map_err(decode_err)
}

/// GET a JSON payload with query parameters.
pub async fn get_json_query<T: DeserializeOwned>(
    url: &str,
    query: &[(&str, String)],
) -> Result<T, ApiError> {
    let builder = Request::get(url).query(query.iter().map(|(key, value)| (*key, value.as_str())));
    run(builder).await?.json().await.map_err(decode_err)
}

/// GET binary content.
pub async fn get_binary(url: &str) -> Result<Vec<u8>, ApiError> {
    run(Request::get(url)).await?.binary().await.map_err(decode_err)
}

/// POST a JSON body and decode the JSON response.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    url: &str,
    body: &B,
) -> Result<T, ApiError> {
    let request = Request::post(url).json(body).map_err(network_err)?;
    run_request(request).await?.json().await.map_err(decode_err)
}

/// POST a JSON body, caring only about the status.
pub async fn post_json_status<B: Serialize>(url: &str, body: &B) -> Result<(), ApiError> {
    let request = Request::post(url).json(body).map_err(network_err)?;
    run_request(request).await.map(|_| ())
}

/// POST without a body, caring only about the status.
pub async fn post_empty(url: &str) -> Result<(), ApiError> {
    run(Request::post(url)).await.map(|_| ())
}

/// POST multipart form content and decode the JSON response.
///
/// The browser sets the multipart content type (with boundary) itself.
pub async fn post_form<T: DeserializeOwned>(
    url: &str,
    form: web_sys::FormData,
) -> Result<T, ApiError> {
    let request = Request::post(url).body(form).map_err(network_err)?;
    run_request(request).await?.json().await.map_err(decode_err)
}

/// PUT a JSON body, caring only about the status.
pub async fn put_json_status<B: Serialize>(url: &str, body: &B) -> Result<(), ApiError> {
    let request = Request::put(url).json(body).map_err(network_err)?;
    run_request(request).await.map(|_| ())
}

/// DELETE with query parameters.
pub async fn delete(url: &str, query: &[(&str, String)]) -> Result<(), ApiError> {
    let builder =
        Request::delete(url).query(query.iter().map(|(key, value)| (*key, value.as_str())));
    run(builder).await.map(|_| ())
}

/// DELETE with a JSON body (the batch purge endpoint).
pub async fn delete_json<B: Serialize>(url: &str, body: &B) -> Result<(), ApiError> {
    let request = Request::delete(url).json(body).map_err(network_err)?;
    run_request(request).await.map(|_| ())
}
