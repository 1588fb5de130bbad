//! # contact-relay
//!
//! 연락처 폼 제출을 받아 검증하고, NDJSON 파일에 한 줄씩 기록한 뒤,
//! 텔레그램으로 알림을 보내는 작은 HTTP 서버입니다.
//!
//! 처리 흐름: 클라이언트 → `POST /api/submit` → 검증 → 파일 추가 → (백그라운드) 알림 → JSON 응답

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod startup;
