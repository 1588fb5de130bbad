//! # 라우트 핸들러 모듈
//!
//! 각 하위 모듈:
//! - `submit`: 연락처 폼 제출 (`POST /api/submit`)
//! - `diagnostics`: 테스트 알림 전송 (`GET /api/test-notify`)
//! - `health`: 서버 상태 확인 (`GET /api/health`)

pub mod diagnostics;
pub mod health;
pub mod submit;

use std::sync::Arc;

use crate::services::{notification::Notifier, submission_log::SubmissionLog};

pub use diagnostics::*;
pub use health::*;
pub use submit::*;

/// 모든 라우트 핸들러가 공유하는 상태
///
/// 서버 시작 시 `Config`로부터 한 번 만들어지고, 요청마다 clone됩니다.
/// `Arc`와 `PathBuf`만 들고 있으므로 clone 비용이 작습니다.
#[derive(Clone)]
pub struct AppState {
    /// 제출 기록 파일
    pub submissions: SubmissionLog,
    /// 알림 전송기 — None이면 알림을 보내지 않습니다.
    pub notifier: Option<Arc<dyn Notifier>>,
}
