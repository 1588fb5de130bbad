//! # 라우터 조립
//!
//! `main.rs`와 통합 테스트가 같은 라우터를 쓰도록 조립 코드를 분리했습니다.

use std::{path::Path, sync::Arc};

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::{
    config::Config,
    routes::{self, AppState, MAX_BODY_BYTES},
    services::{notification::Notifier, submission_log::SubmissionLog, telegram::TelegramNotifier},
};

/// 설정으로부터 핸들러 공유 상태를 만듭니다.
///
/// 텔레그램 설정이 없으면 알림 없이 제출만 기록합니다.
pub fn build_state(config: &Config) -> AppState {
    let notifier: Option<Arc<dyn Notifier>> = match &config.telegram {
        Some(telegram) => {
            tracing::info!(chat_id = %telegram.chat_id, "Telegram notifications enabled");
            Some(Arc::new(TelegramNotifier::new(telegram.clone())))
        }
        None => {
            tracing::warn!("TELEGRAM_BOT_TOKEN or TELEGRAM_CHAT_ID not set, notifications disabled");
            None
        }
    };

    AppState {
        submissions: SubmissionLog::new(&config.submissions_path),
        notifier,
    }
}

/// API 라우트와 정적 파일 서빙을 합친 전체 라우터
pub fn build_router(state: AppState, public_dir: &Path) -> Router {
    let api_routes = Router::new()
        .route(
            "/submit",
            // 50KB를 넘는 본문은 핸들러에 도달하기 전에 413으로 거절됩니다.
            post(routes::submit).layer(DefaultBodyLimit::max(MAX_BODY_BYTES)),
        )
        .route("/test-notify", get(routes::test_notify))
        .route("/health", get(routes::health_check))
        .with_state(state);

    // 정적 파일 디렉토리가 있으면 API에 매칭되지 않는 모든 요청을 그쪽으로 넘깁니다.
    if public_dir.exists() {
        tracing::info!("Serving static files from {}", public_dir.display());

        Router::new()
            .nest("/api", api_routes)
            .fallback_service(ServeDir::new(public_dir))
            .layer(TraceLayer::new_for_http())
    } else {
        tracing::warn!(
            "Static directory {} not found, serving API only",
            public_dir.display()
        );

        Router::new()
            .nest("/api", api_routes)
            .layer(TraceLayer::new_for_http())
    }
}
