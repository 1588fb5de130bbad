//! # 헬스체크(Health Check) 핸들러
//!
//! ## 엔드포인트
//! - `GET /api/health` → `{ "status": "ok" }`
//!
//! 리버스 프록시나 컨테이너 오케스트레이터가 서버 가동 여부를 확인할 때 사용합니다.

use axum::Json;
use serde_json::{json, Value};

/// `GET /health` — 서버 상태를 확인합니다.
///
/// State 등 아무 추출기도 필요 없고, 고정된 JSON만 반환합니다.
/// 파일이나 알림 서비스 상태는 확인하지 않습니다.
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok"
    }))
}
