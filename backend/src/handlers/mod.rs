//! Request handlers: map a call onto a collaborator and its result onto a
//! [`Reply`]. Framework-free; `routes` binds them to HTTP.

pub mod role;
pub mod stats;
pub mod user;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

pub use role::RoleHandler;
pub use stats::StatsHandler;
pub use user::UserHandler;

/// Outcome vocabulary of the handler layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Created,
    Ok,
    NotFound,
}

impl From<Status> for StatusCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Created => StatusCode::CREATED,
            Status::Ok => StatusCode::OK,
            Status::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

/// Payload and status pair returned by every handler operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply<T> {
    pub status: Status,
    pub body: Option<T>,
}

impl<T> Reply<T> {
    pub fn ok(body: T) -> Self {
        Self {
            status: Status::Ok,
            body: Some(body),
        }
    }

    pub fn created(body: T) -> Self {
        Self {
            status: Status::Created,
            body: Some(body),
        }
    }

    pub fn not_found() -> Self {
        Self {
            status: Status::NotFound,
            body: None,
        }
    }
}

impl<T: Serialize> IntoResponse for Reply<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from(self.status);
        match self.body {
            Some(body) => (status, Json(body)).into_response(),
            None => status.into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_maps_to_http_codes() {
        assert_eq!(StatusCode::from(Status::Created), StatusCode::CREATED);
        assert_eq!(StatusCode::from(Status::Ok), StatusCode::OK);
        assert_eq!(StatusCode::from(Status::NotFound), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn not_found_reply_has_empty_body() {
        let response = Reply::<String>::not_found().into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn created_reply_writes_json_body() {
        let response = Reply::created(vec![1, 2]).into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"[1,2]");
    }
}
