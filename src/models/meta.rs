//! # 요청 메타데이터 모델
//!
//! 제출 기록의 `meta` 필드에 들어가는 값들입니다.
//! 요청 헤더와 소켓 주소에서 값을 채우는 추출기(extractor)는
//! `middleware::client_info`에 있습니다.

use serde::{Deserialize, Serialize};

/// 요청을 보낸 클라이언트에 대한 정보
///
/// 모든 필드는 Option입니다. 헤더가 없거나, 서버가 소켓 주소 정보 없이
/// 실행된 경우(테스트 등)에는 JSON에 `null`로 기록됩니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestMeta {
    /// 최종적으로 판단한 클라이언트 IP
    /// `x-forwarded-for`의 첫 번째 값이 있으면 그것을, 없으면 소켓의 원격 주소를 사용
    pub ip: Option<String>,
    /// `x-forwarded-for` 헤더의 첫 번째 IP (앞뒤 공백 제거)
    pub forwarded_ip: Option<String>,
    /// TCP 연결의 원격 주소 (IP 부분만)
    pub remote_addr: Option<String>,
    pub referer: Option<String>,
    pub accept_language: Option<String>,
    pub user_agent: Option<String>,
    pub origin: Option<String>,
    pub host: Option<String>,
}
