//! # 에러 처리 모듈
//!
//! 요청 처리 중 발생할 수 있는 에러 타입을 정의합니다.
//!
//! 이 모듈의 핵심:
//! - `AppError` 열거형(enum): 핸들러에서 반환하는 모든 에러를 하나의 타입으로 통합
//! - `IntoResponse` 구현: 에러를 `{ "ok": false, "error": "..." }` 형태의 HTTP 응답으로 변환

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::SubmitResponse;

/// 핸들러에서 발생할 수 있는 에러 종류
///
/// 클라이언트에게 그대로 보여주는 것은 `BadRequest`의 메시지뿐입니다.
/// 나머지는 로그에만 원인을 남기고 일반적인 메시지를 반환합니다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 잘못된 요청 (HTTP 400) — 메시지가 그대로 응답에 들어갑니다.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// 파일 입출력 오류 (HTTP 500)
    /// #[from]: std::io::Error → AppError::Io 자동 변환
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// 제출 기록 직렬화 오류 (HTTP 500)
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        AppError::BadRequest(message.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Io(ref e) => {
                tracing::error!(error = %e, "IO error");
                internal()
            }
            AppError::Serialization(ref e) => {
                tracing::error!(error = %e, "Serialization error");
                internal()
            }
        };

        (status, Json(SubmitResponse::error(message))).into_response()
    }
}

fn internal() -> (StatusCode, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error".to_string(),
    )
}
