use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use super::PaginationMeta;
use crate::config::MSG_NO_MATCH;

/// Standard response envelope shared by every admin endpoint.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    #[serde(skip)]
    status: StatusCode,
    pub success: bool,
    pub result: T,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationMeta>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn with_message(result: T, message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            success: true,
            result,
            message: message.into(),
            pagination: None,
        }
    }

    pub fn paginated(result: T, pagination: PaginationMeta, message: impl Into<String>) -> Self {
        Self {
            pagination: Some(pagination),
            ..Self::with_message(result, message)
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl<T: Serialize> ApiResponse<Vec<T>> {
    /// Empty, non-erroring result reported with 202.
    ///
    /// Used both for missing search parameters and for zero matches.
    pub fn no_match() -> Self {
        Self {
            status: StatusCode::ACCEPTED,
            success: false,
            result: Vec::new(),
            message: MSG_NO_MATCH.to_string(),
            pagination: None,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_message_serializes_without_pagination() {
        let response = ApiResponse::with_message(42, "Operation completed");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["result"], 42);
        assert_eq!(json["message"], "Operation completed");
        assert!(json.get("pagination").is_none());
        assert!(json.get("status").is_none());
    }

    #[test]
    fn test_paginated_includes_meta() {
        let meta = PaginationMeta {
            page: 2,
            pages: 5,
            count: 41,
        };
        let response = ApiResponse::paginated(vec![1, 2], meta, "ok");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["pagination"]["page"], 2);
        assert_eq!(json["pagination"]["pages"], 5);
        assert_eq!(json["pagination"]["count"], 41);
    }

    #[test]
    fn test_no_match_is_accepted_and_unsuccessful() {
        let response: ApiResponse<Vec<u8>> = ApiResponse::no_match();
        assert_eq!(response.status(), StatusCode::ACCEPTED);
        assert!(!response.success);
        assert!(response.result.is_empty());
        assert_eq!(response.message, MSG_NO_MATCH);
    }
}
