use lambda_http::http::StatusCode;
use lambda_http::{Request, RequestExt, Response};
use serde::Serialize;

use crate::common::errors::Error;

/// Path parameter value, with an empty string treated as missing.
pub fn path_parameter(request: &Request, key: &str) -> Option<String> {
    request
        .path_parameters_ref()
        .and_then(|params| params.first(key))
        .filter(|val| !val.is_empty())
        .map(String::from)
}

/// Query string value, with an empty string treated as missing.
pub fn query_parameter(request: &Request, key: &str) -> Option<String> {
    request
        .query_string_parameters_ref()
        .and_then(|params| params.first(key))
        .filter(|val| !val.is_empty())
        .map(String::from)
}

pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Result<Response<String>, Error> {
    let response = Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(serde_json::to_string(body)?)?;

    Ok(response)
}
