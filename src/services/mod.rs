//! # 서비스 모듈
//!
//! 핸들러 밖의 I/O를 담당합니다.
//! - `submission_log`: 제출 기록을 NDJSON 파일 끝에 추가
//! - `notification`: 알림 메시지 포맷팅/이스케이프와 백그라운드 전송
//! - `telegram`: 텔레그램 Bot API 클라이언트

pub mod notification;
pub mod submission_log;
pub mod telegram;
