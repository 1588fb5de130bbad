//! # 데이터 모델 모듈
//!
//! 요청/응답 본문과 디스크에 기록되는 제출 기록(Submission Record)을 정의합니다.
//! - `submission`: 폼 입력 검증, 제출 기록, API 응답 구조체
//! - `meta`: 요청에서 추출한 클라이언트 메타데이터
//!
//! `pub use X::*;`로 재공개하여 `crate::models::SubmissionRecord`처럼 짧게 접근합니다.

pub mod meta;
pub mod submission;

pub use meta::*;
pub use submission::*;
