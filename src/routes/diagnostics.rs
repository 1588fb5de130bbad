//! # 진단(Diagnostics) 핸들러
//!
//! ## 엔드포인트
//! - `GET /api/test-notify` → 테스트 알림을 보내고 `ok` 또는 500 + 에러 메시지(평문)
//!
//! 토큰이나 채팅 ID 설정이 맞는지 배포 직후 확인할 때 사용합니다.

use axum::{extract::State, http::StatusCode};

use crate::{routes::AppState, services::notification::escape_markdown};

/// `GET /test-notify` — 고정된 메시지를 보내고 결과를 기다립니다.
///
/// 제출 알림과 달리 백그라운드로 넘기지 않고 전송 결과를 그대로 응답합니다.
/// 알림 설정이 없으면 500 "Notifications are not configured"입니다.
pub async fn test_notify(State(state): State<AppState>) -> Result<&'static str, (StatusCode, String)> {
    let notifier = state.notifier.as_ref().ok_or((
        StatusCode::INTERNAL_SERVER_ERROR,
        "Notifications are not configured".to_string(),
    ))?;

    notifier
        .send(&escape_markdown("Test notification from contact-relay."))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Test notification failed");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        })?;

    Ok("ok")
}
