//! # 요청 추출기(Extractor) 모듈
//!
//! - `client_info`: 요청 헤더와 소켓 주소에서 `RequestMeta`를 만드는 추출기

pub mod client_info;
