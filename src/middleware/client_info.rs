//! # 클라이언트 정보 추출기(Extractor)
//!
//! 요청 헤더와 TCP 연결 정보에서 `RequestMeta`를 만듭니다.
//! 핸들러 인자에 `meta: RequestMeta`를 적으면 Axum이 이 구현을 호출합니다.
//!
//! IP 결정 규칙:
//! 1. `x-forwarded-for`의 첫 번째 값(쉼표 기준, 앞뒤 공백 제거)이 비어 있지 않으면 그 값
//! 2. 아니면 소켓의 원격 주소 (`ConnectInfo<SocketAddr>`)
//! 3. 둘 다 없으면 `None`

use std::{convert::Infallible, net::SocketAddr};

use axum::{
    extract::{ConnectInfo, FromRequestParts},
    http::{
        header::{ACCEPT_LANGUAGE, HOST, ORIGIN, REFERER, USER_AGENT},
        request::Parts,
        HeaderMap, HeaderName,
    },
};

use crate::models::RequestMeta;

pub const X_FORWARDED_FOR: &str = "x-forwarded-for";

impl<S> FromRequestParts<S> for RequestMeta
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // ConnectInfo는 into_make_service_with_connect_info로 서빙할 때만 들어 있습니다.
        let remote_addr = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip().to_string());

        Ok(request_meta(&parts.headers, remote_addr))
    }
}

/// 헤더와 원격 주소로 `RequestMeta`를 만듭니다.
pub fn request_meta(headers: &HeaderMap, remote_addr: Option<String>) -> RequestMeta {
    let forwarded_ip = forwarded_ip(headers);
    let ip = forwarded_ip.clone().or_else(|| remote_addr.clone());

    RequestMeta {
        ip,
        forwarded_ip,
        remote_addr,
        referer: header_value(headers, &REFERER),
        accept_language: header_value(headers, &ACCEPT_LANGUAGE),
        user_agent: header_value(headers, &USER_AGENT),
        origin: header_value(headers, &ORIGIN),
        host: header_value(headers, &HOST),
    }
}

/// `x-forwarded-for`의 첫 번째 값. 비어 있으면 없는 것으로 취급합니다.
pub fn forwarded_ip(headers: &HeaderMap) -> Option<String> {
    headers
        .get(X_FORWARDED_FOR)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.split(',').next())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// 헤더 값을 문자열로 꺼냅니다. 보이는 ASCII가 아닌 값은 `None`입니다.
fn header_value(headers: &HeaderMap, name: &HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, HeaderValue::from_static(*value));
        }
        map
    }

    #[test]
    fn forwarded_for_wins_over_socket_address() {
        let meta = request_meta(
            &headers(&[("x-forwarded-for", " 203.0.113.7 , 10.0.0.1")]),
            Some("127.0.0.1".to_string()),
        );
        assert_eq!(meta.ip.as_deref(), Some("203.0.113.7"));
        assert_eq!(meta.forwarded_ip.as_deref(), Some("203.0.113.7"));
        assert_eq!(meta.remote_addr.as_deref(), Some("127.0.0.1"));
    }

    #[test]
    fn socket_address_used_without_forwarded_for() {
        let meta = request_meta(&HeaderMap::new(), Some("::1".to_string()));
        assert_eq!(meta.ip.as_deref(), Some("::1"));
        assert_eq!(meta.forwarded_ip, None);
    }

    #[test]
    fn empty_forwarded_token_falls_back() {
        let meta = request_meta(&headers(&[("x-forwarded-for", " , 10.0.0.1")]), Some("127.0.0.1".to_string()));
        assert_eq!(meta.ip.as_deref(), Some("127.0.0.1"));
        assert_eq!(meta.forwarded_ip, None);
    }

    #[test]
    fn collects_selected_headers() {
        let meta = request_meta(
            &headers(&[
                ("referer", "https://example.com/contact"),
                ("accept-language", "ko-KR,ko;q=0.9"),
                ("user-agent", "Mozilla/5.0"),
                ("origin", "https://example.com"),
                ("host", "example.com"),
                ("cookie", "session=abc"),
            ]),
            None,
        );
        assert_eq!(meta.referer.as_deref(), Some("https://example.com/contact"));
        assert_eq!(meta.accept_language.as_deref(), Some("ko-KR,ko;q=0.9"));
        assert_eq!(meta.user_agent.as_deref(), Some("Mozilla/5.0"));
        assert_eq!(meta.origin.as_deref(), Some("https://example.com"));
        assert_eq!(meta.host.as_deref(), Some("example.com"));
        assert_eq!(meta.ip, None);
    }
}
