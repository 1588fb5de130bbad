//! # 텔레그램 알림 전송기
//!
//! Bot API의 `sendMessage`를 호출하는 `Notifier` 구현체입니다.
//!
//! - 요청: `POST {api_base}/bot{token}/sendMessage`, JSON 본문 (`parse_mode: "MarkdownV2"`)
//! - 성공 조건: HTTP 2xx 이면서 응답 본문의 `ok`가 true
//! - URL에 봇 토큰이 들어가므로, 전송 에러 메시지에서는 URL을 지웁니다.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::notification::{Notifier, NotifyError};
use crate::config::TelegramConfig;

/// 메시지 텍스트의 마크업 모드. 텍스트는 `escape_markdown`으로 이스케이프되어 있어야 합니다.
pub const PARSE_MODE: &str = "MarkdownV2";

/// 텔레그램 채팅 하나로 메시지를 보내는 전송기
///
/// `reqwest::Client`는 내부에 연결 풀을 가지므로 전송기 하나를 모든 요청이 공유합니다.
pub struct TelegramNotifier {
    config: TelegramConfig,
    client: Client,
}

/// `sendMessage` 요청 본문
#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'a str,
    disable_web_page_preview: bool,
}

/// `sendMessage` 응답 중 필요한 필드만
#[derive(Debug, Deserialize)]
struct SendMessageResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

impl TelegramNotifier {
    pub fn new(config: TelegramConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    fn send_message_url(&self) -> String {
        format!(
            "{}/bot{}/sendMessage",
            self.config.api_base.trim_end_matches('/'),
            self.config.bot_token
        )
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        let request = SendMessageRequest {
            chat_id: &self.config.chat_id,
            text,
            parse_mode: PARSE_MODE,
            disable_web_page_preview: true,
        };

        // without_url(): 에러 메시지에서 토큰이 포함된 URL을 제거
        let response = self
            .client
            .post(self.send_message_url())
            .json(&request)
            .send()
            .await
            .map_err(|e| NotifyError::Connection(e.without_url().to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| NotifyError::Connection(e.without_url().to_string()))?;
        let parsed: Option<SendMessageResponse> = serde_json::from_str(&body).ok();

        if !status.is_success() {
            let description = parsed
                .and_then(|r| r.description)
                .unwrap_or(body);
            return Err(NotifyError::Api {
                status: status.as_u16(),
                description,
            });
        }

        match parsed {
            Some(r) if r.ok => {
                tracing::info!(chat_id = %self.config.chat_id, "Telegram message sent");
                Ok(())
            }
            Some(r) => Err(NotifyError::Rejected(
                r.description.unwrap_or_else(|| "ok=false".to_string()),
            )),
            None => Err(NotifyError::Rejected(format!(
                "Unparseable response: {}",
                body
            ))),
        }
    }
}
