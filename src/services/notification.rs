//! # 알림(Notification) 서비스
//!
//! 제출 기록을 사람이 읽을 메시지로 만들고, 백그라운드 태스크로 전송합니다.
//!
//! - `Notifier`: 메시지를 실제로 보내는 쪽의 트레이트 (텔레그램, 테스트용 기록기 등)
//! - `format_submission()`: 긴 필드를 자르고 특수문자를 이스케이프해 메시지 생성
//! - `spawn_notification()`: 응답을 막지 않도록 `tokio::spawn`으로 전송하고, 실패는 로그로만 남김

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tokio::task::JoinHandle;

use crate::models::SubmissionRecord;

/// 텔레그램 MarkdownV2에서 의미가 있는 문자들. 메시지에 넣기 전에 모두 `\`를 붙입니다.
pub const MARKDOWN_SPECIAL_CHARS: &[char] = &[
    '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!', '\\',
];

pub const MAX_NAME_CHARS: usize = 100;
pub const MAX_EMAIL_CHARS: usize = 120;
pub const MAX_REFERER_CHARS: usize = 200;
pub const MAX_USER_AGENT_CHARS: usize = 200;
pub const MAX_HEADER_CHARS: usize = 200;

/// 잘린 문자열 끝에 붙는 표시
pub const ELLIPSIS: char = '…';

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("API returned status {status}: {description}")]
    Api { status: u16, description: String },

    #[error("Message rejected: {0}")]
    Rejected(String),
}

/// 텍스트 메시지를 외부 채팅 서비스로 보내는 쪽
///
/// 구현체는 여러 요청에서 동시에 공유되므로 `Send + Sync`여야 합니다.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// 이미 이스케이프된 MarkdownV2 텍스트를 전송합니다.
    async fn send(&self, text: &str) -> Result<(), NotifyError>;
}

/// `MARKDOWN_SPECIAL_CHARS`의 모든 문자 앞에 `\`를 붙입니다.
pub fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if MARKDOWN_SPECIAL_CHARS.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// 문자 단위로 `max`자까지 자르고, 잘렸으면 끝에 `…`를 붙입니다.
///
/// 결과 길이는 `max`자를 넘지 않습니다 (`…` 포함).
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.push(ELLIPSIS);
    cut
}

/// 제출 기록으로 알림 메시지를 만듭니다.
///
/// 고정 라벨에는 특수문자가 없고, 값은 자른 뒤 이스케이프합니다.
pub fn format_submission(record: &SubmissionRecord) -> String {
    let meta = &record.meta;
    let field = |value: Option<&str>, max: usize, missing: &str| match value {
        Some(v) => escape_markdown(&truncate(v, max)),
        None => missing.to_string(),
    };

    let lines = [
        "New contact form submission".to_string(),
        format!("Name: {}", escape_markdown(&truncate(&record.name, MAX_NAME_CHARS))),
        format!("Email: {}", escape_markdown(&truncate(&record.email, MAX_EMAIL_CHARS))),
        format!("IP: {}", field(meta.ip.as_deref(), MAX_HEADER_CHARS, "unknown")),
        format!("Referer: {}", field(meta.referer.as_deref(), MAX_REFERER_CHARS, "none")),
        format!("User agent: {}", field(meta.user_agent.as_deref(), MAX_USER_AGENT_CHARS, "none")),
        format!("Language: {}", field(meta.accept_language.as_deref(), MAX_HEADER_CHARS, "none")),
        format!("Received: {}", escape_markdown(&record.received_at)),
    ];
    lines.join("\n")
}

/// 알림을 백그라운드에서 보냅니다. 호출자는 기다리지 않아도 됩니다.
///
/// 실패는 `tracing::error!`로만 남기고 재시도하지 않습니다.
/// 반환된 `JoinHandle`은 테스트에서 전송 완료를 기다릴 때 사용합니다.
pub fn spawn_notification(notifier: Arc<dyn Notifier>, record: &SubmissionRecord) -> JoinHandle<()> {
    let text = format_submission(record);
    let received_at = record.received_at.clone();

    tokio::spawn(async move {
        match notifier.send(&text).await {
            Ok(()) => tracing::debug!(received_at = %received_at, "Notification sent"),
            Err(e) => tracing::error!(
                error = %e,
                received_at = %received_at,
                "Notification dispatch failed"
            ),
        }
    })
}
