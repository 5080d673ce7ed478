#[cfg(debug_assertions)]
pub fn get_cms_url() -> &'static str {
    "http://localhost:8055"  // Local Directus instance when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_cms_url() -> &'static str {
    "https://cms.studiokaze.com"
}

pub const APP_NAME: &str = "Studio Kaze";

/// Release tag embedded in the service-worker cache bucket names. Bump this
/// on deploy so activation prunes the previous release's buckets.
pub const RELEASE_TAG: &str = "v1.0.0";

/// Prefix shared by every cache bucket this app owns.
pub const CACHE_NAMESPACE: &str = "studiokaze";

/// Assets pre-cached into the static bucket at service-worker install.
pub const STATIC_ASSETS: [&str; 5] = [
    "/",
    "/manifest.json",
    "/icons/icon-192x192.png",
    "/icons/icon-512x512.png",
    "/logo.png",
];

/// Cross-origin hosts the service worker must never intercept. The CMS sets
/// its own cache headers and carries auth, so its traffic always goes
/// straight to the network.
pub const SW_BYPASS_HOSTS: [&str; 2] = ["cms.studiokaze.com", "localhost:8055"];

/// Visitor IPs exempt from the maintenance gate (team egress addresses).
pub const MAINTENANCE_ALLOWED_IPS: [&str; 2] = ["203.0.113.24", "198.51.100.7"];

pub fn ip_echo_url() -> String {
    format!("{}/server/ip", get_cms_url())
}
