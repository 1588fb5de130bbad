//! # contact-relay 웹 서버 진입점
//!
//! 이 파일이 수행하는 작업:
//! 1. 환경변수(.env) 로딩
//! 2. 로깅(tracing) 초기화
//! 3. 설정 로딩
//! 4. 제출 기록 파일의 디렉토리 준비
//! 5. 라우터 설정 (API + 정적 파일)
//! 6. HTTP 서버 시작

use std::{net::SocketAddr, path::Path};

use anyhow::Result;
use contact_relay::{config::Config, startup};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1단계: 환경변수 로딩 ──
    // .env 파일이 없어도 에러 없이 넘어갑니다.
    dotenvy::dotenv().ok();

    // ── 2단계: 로깅(tracing) 초기화 ──
    // RUST_LOG가 없으면 contact_relay, tower_http, axum 모듈을 debug 레벨로 설정
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "contact_relay=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // ── 3단계: 설정 로딩 ──
    // 이후로는 환경변수를 다시 읽지 않고, 이 값만 넘겨서 사용합니다.
    let config = Config::from_env()?;
    tracing::info!("Starting contact-relay on {}:{}", config.host, config.port);

    // ── 4단계: 상태 생성 및 기록 파일 디렉토리 준비 ──
    let state = startup::build_state(&config);
    state.submissions.ensure_parent_dir().await?;
    tracing::info!(
        "Appending submissions to {}",
        state.submissions.path().display()
    );

    // ── 5단계: 라우터 설정 ──
    let app = startup::build_router(state, Path::new(&config.public_dir));

    // ── 6단계: 서버 시작 ──
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on http://{}", addr);

    // into_make_service_with_connect_info: 핸들러에서 ConnectInfo<SocketAddr>로
    // 클라이언트 소켓 주소를 꺼낼 수 있게 합니다. (x-forwarded-for가 없을 때 IP로 사용)
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
