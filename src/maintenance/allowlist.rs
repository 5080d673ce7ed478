use gloo_net::http::Request;
use serde::Deserialize;

use crate::config;

#[derive(Deserialize)]
struct IpEchoPayload {
    ip: String,
}

/// Ask the CMS which IP this visitor arrives from. Returns `None` on any
/// failure: an unknown IP is simply not on the allow-list.
pub async fn resolve_client_ip() -> Option<String> {
    let response = Request::get(&config::ip_echo_url()).send().await.ok()?;
    if !response.ok() {
        return None;
    }
    response
        .json::<IpEchoPayload>()
        .await
        .ok()
        .map(|payload| payload.ip)
}

/// Membership check against the configured exemption list.
pub fn is_allowed(ip: &str) -> bool {
    config::MAINTENANCE_ALLOWED_IPS
        .iter()
        .any(|allowed| *allowed == ip)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_ips_are_allowed() {
        for ip in config::MAINTENANCE_ALLOWED_IPS {
            assert!(is_allowed(ip));
        }
    }

    #[test]
    fn unknown_ips_are_not_allowed() {
        assert!(!is_allowed("192.0.2.99"));
        assert!(!is_allowed(""));
    }
}
