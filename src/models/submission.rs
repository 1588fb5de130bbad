//! # 제출(Submission) 모델 정의
//!
//! 연락처 폼 제출의 흐름:
//! 1. 요청 본문(JSON)을 `SubmitRequest`로 읽습니다. 필드 타입은 아직 모릅니다.
//! 2. `SubmitRequest::validate()`가 순서대로 검증하여 `ValidSubmission`을 만듭니다.
//! 3. `SubmissionRecord::new()`로 메타데이터와 시각을 붙여 불변 기록을 만듭니다.
//! 4. 기록은 NDJSON 한 줄로 직렬화되어 파일 끝에 추가됩니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::RequestMeta;
use crate::error::AppError;

/// 이름의 최소 길이 (앞뒤 공백 제거 후, UTF-16 코드 유닛 단위)
///
/// 브라우저의 `String.length`와 같은 기준이라, 폼의 `minlength` 검사와 결과가 일치합니다.
pub const MIN_NAME_UNITS: usize = 2;

/// 폼 검증 실패 사유 — Display 메시지가 그대로 클라이언트에 전달됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Consent required")]
    ConsentRequired,
    #[error("Bad name")]
    BadName,
    #[error("Bad email")]
    BadEmail,
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

/// 아직 검증되지 않은 폼 입력
///
/// 클라이언트가 어떤 타입이든 보낼 수 있으므로 각 필드를 `serde_json::Value`로 받습니다.
/// 필드가 없으면 `Value::Null`입니다.
#[derive(Debug, Clone, Default)]
pub struct SubmitRequest {
    pub name: Value,
    pub email: Value,
    pub consent: Value,
    pub client: Value,
}

/// 검증을 모두 통과한 폼 입력
#[derive(Debug, Clone, PartialEq)]
pub struct ValidSubmission {
    /// 앞뒤 공백이 제거된 이름
    pub name: String,
    /// 앞뒤 공백이 제거된 이메일
    pub email: String,
    /// 객체나 배열일 때만 보존되는 클라이언트 부가 정보
    pub client: Option<Value>,
}

impl SubmitRequest {
    /// 파싱된 JSON 본문에서 필드를 꺼냅니다.
    ///
    /// 본문이 객체가 아니면(null, 배열, 문자열 등) 모든 필드가 없는 것으로 취급합니다.
    pub fn from_body(body: Value) -> Self {
        match body {
            Value::Object(mut fields) => {
                // remove(): 값을 복사하지 않고 맵에서 소유권째 꺼냅니다.
                let mut take = |key: &str| fields.remove(key).unwrap_or(Value::Null);
                Self {
                    name: take("name"),
                    email: take("email"),
                    consent: take("consent"),
                    client: take("client"),
                }
            }
            _ => Self::default(),
        }
    }

    /// 동의 → 이름 → 이메일 순서로 검증합니다. 첫 번째 실패에서 멈춥니다.
    pub fn validate(self) -> Result<ValidSubmission, ValidationError> {
        if !is_truthy(&self.consent) {
            return Err(ValidationError::ConsentRequired);
        }

        let name = match self.name {
            Value::String(s) if s.trim().encode_utf16().count() >= MIN_NAME_UNITS => s.trim().to_string(),
            _ => return Err(ValidationError::BadName),
        };

        let email = match self.email {
            Value::String(s) if s.contains('@') => s.trim().to_string(),
            _ => return Err(ValidationError::BadEmail),
        };

        let client = match self.client {
            Value::Object(_) | Value::Array(_) => Some(self.client),
            _ => None,
        };

        Ok(ValidSubmission { name, email, client })
    }
}

/// JSON 값의 참/거짓 판정
///
/// 폼 스크립트가 `"on"`, `1`, `true` 등 여러 형태로 동의 값을 보내므로
/// 불리언만이 아니라 값 전체를 기준으로 판정합니다.
/// 거짓: `null`, `false`, `0`, `""` / 나머지는 모두 참 (빈 객체와 빈 배열 포함)
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// 디스크에 기록되는 제출 기록 — NDJSON 파일의 한 줄에 대응합니다.
///
/// 한 번 만들어지면 수정되지 않고, 직렬화된 뒤 버려집니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    /// 서버가 요청을 받은 시각 (ISO 8601, UTC, 밀리초: "2026-02-16T12:00:00.000Z")
    pub received_at: String,
    pub name: String,
    pub email: String,
    /// 검증을 통과한 기록이므로 항상 true
    pub consent: bool,
    pub meta: RequestMeta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<Value>,
}

impl SubmissionRecord {
    pub fn new(submission: ValidSubmission, meta: RequestMeta, received_at: DateTime<Utc>) -> Self {
        Self {
            received_at: received_at.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            name: submission.name,
            email: submission.email,
            consent: true,
            meta,
            client: submission.client,
        }
    }
}

/// `POST /api/submit` 응답 본문
///
/// 성공: `{"ok":true}` / 실패: `{"ok":false,"error":"Bad name"}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SubmitResponse {
    pub fn ok() -> Self {
        Self { ok: true, error: None }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: Some(message.into()),
        }
    }
}
