use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    CacheFirst,
    NetworkFirst,
    StaleWhileRevalidate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Do not intercept; let the platform hit the network directly.
    Bypass,
    Serve(Strategy),
}

/// The parts of an intercepted request the routing table looks at.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteRequest {
    pub method: String,
    /// `scheme://host[:port]` of the request URL.
    pub origin: String,
    /// `host[:port]` of the request URL, for the bypass list.
    pub host: String,
    pub path: String,
    /// Whether the platform classified this as a document navigation.
    pub is_navigation: bool,
}

type Predicate = fn(&SwRouter, &RouteRequest) -> bool;

/// Ordered first-match-wins routing table. Keeping the rules as data makes
/// the ordering explicit and testable away from the fetch-event API.
const RULES: &[(Predicate, RouteDecision)] = &[
    (|_, r| r.method != "GET", RouteDecision::Bypass),
    (
        |router, r| router.same_origin(r) && r.path.starts_with("/icons/"),
        RouteDecision::Serve(Strategy::CacheFirst),
    ),
    (
        |router, r| router.same_origin(r) && (r.path == "/" || r.path.ends_with(".html")),
        RouteDecision::Serve(Strategy::NetworkFirst),
    ),
    (
        |router, r| router.same_origin(r) && r.path.contains("/api/"),
        RouteDecision::Serve(Strategy::NetworkFirst),
    ),
    (
        |router, r| {
            router.same_origin(r) && (r.path.ends_with(".js") || r.path.ends_with(".css"))
        },
        RouteDecision::Serve(Strategy::StaleWhileRevalidate),
    ),
    (
        |router, r| router.same_origin(r),
        RouteDecision::Serve(Strategy::CacheFirst),
    ),
    (
        |router, r| router.bypass_hosts.iter().any(|host| *host == r.host),
        RouteDecision::Bypass,
    ),
    (|_, _| true, RouteDecision::Serve(Strategy::NetworkFirst)),
];

/// Chooses a caching strategy per request. Pure: the decision depends only
/// on (method, origin, host, path).
#[derive(Clone, Debug, PartialEq)]
pub struct SwRouter {
    own_origin: String,
    bypass_hosts: Vec<String>,
}

impl SwRouter {
    pub fn new(own_origin: impl Into<String>, bypass_hosts: Vec<String>) -> Self {
        SwRouter {
            own_origin: own_origin.into(),
            bypass_hosts,
        }
    }

    pub fn from_config(own_origin: impl Into<String>) -> Self {
        SwRouter::new(
            own_origin,
            config::SW_BYPASS_HOSTS.iter().map(|h| h.to_string()).collect(),
        )
    }

    fn same_origin(&self, request: &RouteRequest) -> bool {
        request.origin == self.own_origin
    }

    pub fn route(&self, request: &RouteRequest) -> RouteDecision {
        for (matches, decision) in RULES {
            if matches(self, request) {
                return *decision;
            }
        }
        // The last rule is a catch-all.
        unreachable!("routing table has no catch-all rule")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: &str = "https://studiokaze.com";

    fn router() -> SwRouter {
        SwRouter::new(ORIGIN, vec!["cms.example.com".to_string()])
    }

    fn get(origin: &str, host: &str, path: &str) -> RouteRequest {
        RouteRequest {
            method: "GET".to_string(),
            origin: origin.to_string(),
            host: host.to_string(),
            path: path.to_string(),
            is_navigation: path == "/" || path.ends_with(".html"),
        }
    }

    fn same_origin(path: &str) -> RouteRequest {
        get(ORIGIN, "studiokaze.com", path)
    }

    #[test]
    fn non_get_requests_are_never_intercepted() {
        let mut request = same_origin("/icons/icon-192x192.png");
        request.method = "POST".to_string();
        assert_eq!(router().route(&request), RouteDecision::Bypass);
    }

    #[test]
    fn icons_are_cache_first() {
        assert_eq!(
            router().route(&same_origin("/icons/foo.png")),
            RouteDecision::Serve(Strategy::CacheFirst)
        );
    }

    #[test]
    fn navigations_are_network_first() {
        assert_eq!(
            router().route(&same_origin("/")),
            RouteDecision::Serve(Strategy::NetworkFirst)
        );
        assert_eq!(
            router().route(&same_origin("/about.html")),
            RouteDecision::Serve(Strategy::NetworkFirst)
        );
    }

    #[test]
    fn api_paths_are_network_first() {
        assert_eq!(
            router().route(&same_origin("/api/session")),
            RouteDecision::Serve(Strategy::NetworkFirst)
        );
    }

    #[test]
    fn scripts_and_styles_revalidate_in_the_background() {
        assert_eq!(
            router().route(&same_origin("/app.js")),
            RouteDecision::Serve(Strategy::StaleWhileRevalidate)
        );
        assert_eq!(
            router().route(&same_origin("/styles/site.css")),
            RouteDecision::Serve(Strategy::StaleWhileRevalidate)
        );
    }

    #[test]
    fn other_same_origin_requests_default_to_cache_first() {
        assert_eq!(
            router().route(&same_origin("/logo.png")),
            RouteDecision::Serve(Strategy::CacheFirst)
        );
        assert_eq!(
            router().route(&same_origin("/manifest.json")),
            RouteDecision::Serve(Strategy::CacheFirst)
        );
    }

    #[test]
    fn bypass_hosts_are_not_intercepted() {
        let request = get("https://cms.example.com", "cms.example.com", "/items/x");
        assert_eq!(router().route(&request), RouteDecision::Bypass);
    }

    #[test]
    fn other_cross_origin_requests_are_network_first() {
        let request = get("https://fonts.example.net", "fonts.example.net", "/inter.woff2");
        assert_eq!(
            router().route(&request),
            RouteDecision::Serve(Strategy::NetworkFirst)
        );
    }

    #[test]
    fn icon_rule_wins_over_the_extension_rules() {
        // Ordering check: /icons/ takes precedence even for .js-ish names.
        assert_eq!(
            router().route(&same_origin("/icons/sprite.css")),
            RouteDecision::Serve(Strategy::CacheFirst)
        );
    }
}
