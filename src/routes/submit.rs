//! # 폼 제출(Submit) 핸들러
//!
//! ## 엔드포인트
//! - `POST /api/submit` → 성공 시 `{ "ok": true }`, 검증 실패 시 400 `{ "ok": false, "error": "..." }`
//!
//! 처리 순서: 본문 파싱 → 검증 → 제출 기록 생성 → 파일 추가 → (백그라운드) 알림

use axum::{
    body::Bytes,
    extract::State,
    http::{header::CONTENT_TYPE, HeaderMap},
    Json,
};
use chrono::Utc;
use serde_json::Value;

use crate::{
    error::AppError,
    models::{RequestMeta, SubmissionRecord, SubmitRequest, SubmitResponse},
    routes::AppState,
    services::notification::spawn_notification,
};

/// 요청 본문 최대 크기 (50KB). 넘으면 413으로 거절됩니다.
pub const MAX_BODY_BYTES: usize = 50 * 1024;

/// `POST /submit` — 연락처 폼 제출을 검증하고 기록합니다.
///
/// 알림 전송은 기다리지 않으므로, 응답은 외부 API 상태와 무관합니다.
pub async fn submit(
    State(state): State<AppState>,
    meta: RequestMeta,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<SubmitResponse>, AppError> {
    let body = parse_body(&headers, &body)?;

    let submission = SubmitRequest::from_body(body).validate().map_err(|e| {
        tracing::debug!(reason = %e, ip = ?meta.ip, "Submission rejected");
        AppError::from(e)
    })?;

    let record = SubmissionRecord::new(submission, meta, Utc::now());
    state.submissions.append(&record).await?;
    tracing::info!(ip = ?record.meta.ip, "Submission stored");

    if let Some(notifier) = &state.notifier {
        spawn_notification(notifier.clone(), &record);
    }

    Ok(Json(SubmitResponse::ok()))
}

/// 본문을 JSON 값으로 읽습니다.
///
/// `Content-Type`이 `application/json`이 아니거나 본문이 비어 있으면
/// 필드가 하나도 없는 것(`Value::Null`)으로 취급합니다.
/// JSON 타입인데 파싱에 실패하면 400 "Invalid JSON"입니다.
fn parse_body(headers: &HeaderMap, body: &[u8]) -> Result<Value, AppError> {
    if !is_json_content_type(headers) || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(body).map_err(|_| AppError::bad_request("Invalid JSON"))
}

/// `application/json` (파라미터 허용: `application/json; charset=utf-8`)인지 확인
pub fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.split(';').next())
        .map(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
        .unwrap_or(false)
}
