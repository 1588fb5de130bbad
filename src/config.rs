//! # 애플리케이션 설정(Configuration) 모듈
//!
//! 환경변수에서 서버 설정값을 읽어오는 모듈입니다.
//! `.env` 파일이나 시스템 환경변수에서 값을 가져옵니다.
//!
//! 설정 항목:
//! - `HOST`: 서버 바인딩 주소 (기본값: "127.0.0.1")
//! - `PORT`: 서버 포트 번호 (기본값: 3000)
//! - `SUBMISSIONS_PATH`: 제출 기록 NDJSON 파일 경로
//! - `PUBLIC_DIR`: 정적 파일 디렉토리
//! - `TELEGRAM_BOT_TOKEN`, `TELEGRAM_CHAT_ID`: 알림 전송 대상 (둘 다 있어야 활성화)
//! - `TELEGRAM_API_BASE`: Bot API 주소 (테스트/프록시용)
//!
//! 설정은 서버 시작 시 한 번만 읽고, 이후에는 `Config` 값을 명시적으로 넘겨서 사용합니다.

use std::env;

/// 텔레그램 Bot API 기본 주소
pub const DEFAULT_TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// 애플리케이션 전체 설정을 담는 구조체
#[derive(Debug, Clone)]
pub struct Config {
    /// 서버가 바인딩할 호스트 주소
    pub host: String,
    /// 서버 포트 번호
    pub port: u16,
    /// 제출 기록을 한 줄씩 추가하는 파일 경로
    pub submissions_path: String,
    /// `/` 아래에서 서빙할 정적 파일 디렉토리
    pub public_dir: String,
    /// 알림 설정 — None이면 알림 전송을 하지 않습니다.
    pub telegram: Option<TelegramConfig>,
}

/// 텔레그램 알림 전송에 필요한 값들
#[derive(Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub chat_id: String,
    pub api_base: String,
}

// 토큰이 로그에 찍히지 않도록 Debug를 직접 구현합니다.
impl std::fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("bot_token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .field("api_base", &self.api_base)
            .finish()
    }
}

impl Config {
    /// 프로세스 환경변수에서 설정을 읽습니다.
    ///
    /// # 에러
    /// 환경변수 값이 유효한 유니코드가 아니면 `VarError::NotUnicode`를 반환합니다.
    /// 값이 없는 항목은 모두 기본값으로 대체됩니다.
    pub fn from_env() -> Result<Self, env::VarError> {
        Self::from_lookup(|key| env::var(key))
    }

    /// 임의의 조회 함수로 설정을 만듭니다.
    ///
    /// `lookup`은 `env::var`와 같은 형태의 클로저입니다.
    /// 테스트에서는 HashMap 기반 클로저를 넘겨 전역 환경을 건드리지 않습니다.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, env::VarError>
    where
        F: Fn(&str) -> Result<String, env::VarError>,
    {
        // 빈 문자열은 "설정되지 않음"으로 취급합니다.
        let optional = |key: &str| -> Result<Option<String>, env::VarError> {
            match lookup(key) {
                Ok(value) if value.trim().is_empty() => Ok(None),
                Ok(value) => Ok(Some(value)),
                Err(env::VarError::NotPresent) => Ok(None),
                Err(e) => Err(e),
            }
        };

        let telegram = match (optional("TELEGRAM_BOT_TOKEN")?, optional("TELEGRAM_CHAT_ID")?) {
            (Some(bot_token), Some(chat_id)) => Some(TelegramConfig {
                bot_token,
                chat_id,
                api_base: optional("TELEGRAM_API_BASE")?
                    .unwrap_or_else(|| DEFAULT_TELEGRAM_API_BASE.to_string()),
            }),
            _ => None,
        };

        Ok(Self {
            host: optional("HOST")?.unwrap_or_else(|| "127.0.0.1".to_string()),
            // 파싱 실패 시 기본값 3000 사용
            port: optional("PORT")?
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(3000),
            submissions_path: optional("SUBMISSIONS_PATH")?
                .unwrap_or_else(|| "submissions.ndjson".to_string()),
            public_dir: optional("PUBLIC_DIR")?.unwrap_or_else(|| "public".to_string()),
            telegram,
        })
    }
}
