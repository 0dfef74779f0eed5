//! REST client for the pathfinding service.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests): the request is never sent and the call fails with
//! a transport error.
//!
//! ERROR HANDLING
//! ==============
//! Every failure maps onto [`EditorError`] so the grid host reports transport
//! and decode problems through the same alert path as validation errors.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use grid::error::EditorError;
use grid::wire::{PathRequest, PathResponse};

#[cfg(any(test, feature = "csr"))]
fn find_path_endpoint(base_url: &str) -> String {
    format!("{base_url}/find-path")
}

/// Interpret a reply body.
///
/// A body that decodes is used whatever the status, so a service that
/// reports "no path" with an error status still gets its message shown.
#[cfg(any(test, feature = "csr"))]
fn decode_reply(status: u16, body: &str) -> Result<PathResponse, EditorError> {
    PathResponse::from_json(body).map_err(|err| match err {
        EditorError::Decode(detail) if !(200..300).contains(&status) => {
            EditorError::Transport(format!("status {status}: {detail}"))
        }
        other => other,
    })
}

/// POST `request` to `{base_url}/find-path` and decode the reply.
///
/// # Errors
///
/// Returns [`EditorError::Encode`] if the request body cannot be built,
/// [`EditorError::Transport`] if the request fails or an error status comes
/// back with an unreadable body, and [`EditorError::Decode`] for a success
/// status with an unreadable body.
pub async fn find_path(base_url: &str, request: &PathRequest) -> Result<PathResponse, EditorError> {
    #[cfg(feature = "csr")]
    {
        let url = find_path_endpoint(base_url);
        log::debug!("POST {url} ({} barriers)", request.barrier_count());
        let resp = gloo_net::http::Request::post(&url)
            .json(request)
            .map_err(|err| EditorError::Encode(err.to_string()))?
            .send()
            .await
            .map_err(|err| EditorError::Transport(err.to_string()))?;
        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|err| EditorError::Transport(err.to_string()))?;
        decode_reply(status, &body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (base_url, request);
        Err(EditorError::Transport("HTTP is only available in the browser".to_owned()))
    }
}
