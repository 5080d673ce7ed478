use std::future::Future;
use std::pin::Pin;

use crate::sw::routes::Strategy;

/// Cache key of the pre-cached root document, the navigation fallback of
/// last resort.
pub const ROOT_DOCUMENT: &str = "/";

/// A request that could not be served from cache or network. The only error
/// strategies are allowed to surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unavailable;

impl std::fmt::Display for Unavailable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "no cached copy and the network is unreachable")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NetworkError(pub String);

impl std::fmt::Display for NetworkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Platform seam for the strategies: the worker backs this with the Cache
/// Storage API and `fetch`, tests with in-memory maps.
///
/// Cache writes always target the dynamic bucket; the static bucket is only
/// written at install.
pub trait Backend {
    type Resp;

    async fn cache_lookup(&self, key: &str) -> Option<Self::Resp>;
    async fn cache_store(&self, key: &str, response: &Self::Resp);
    async fn network(&self, key: &str) -> Result<Self::Resp, NetworkError>;
    fn is_success(response: &Self::Resp) -> bool;
}

type Revalidation = Pin<Box<dyn Future<Output = ()>>>;

/// What a strategy hands back: the response for the caller plus, for
/// stale-while-revalidate, a background refresh the event loop should spawn
/// without awaiting. Its failure must never reach the caller.
pub struct Served<R> {
    pub response: R,
    pub revalidate: Option<Revalidation>,
}

impl<R> Served<R> {
    fn done(response: R) -> Self {
        Served {
            response,
            revalidate: None,
        }
    }
}

pub async fn serve<B>(
    strategy: Strategy,
    backend: &B,
    key: &str,
    is_navigation: bool,
) -> Result<Served<B::Resp>, Unavailable>
where
    B: Backend + Clone + 'static,
{
    match strategy {
        Strategy::CacheFirst => cache_first(backend, key, is_navigation).await.map(Served::done),
        Strategy::NetworkFirst => network_first(backend, key, is_navigation)
            .await
            .map(Served::done),
        Strategy::StaleWhileRevalidate => stale_while_revalidate(backend, key).await,
    }
}

/// Cached copy wins; otherwise fetch and keep a copy of successful
/// responses. Navigations degrade to the cached root document.
pub async fn cache_first<B: Backend>(
    backend: &B,
    key: &str,
    is_navigation: bool,
) -> Result<B::Resp, Unavailable> {
    if let Some(cached) = backend.cache_lookup(key).await {
        return Ok(cached);
    }

    match backend.network(key).await {
        Ok(response) => {
            if B::is_success(&response) {
                backend.cache_store(key, &response).await;
            }
            Ok(response)
        }
        Err(err) => {
            log::warn!("cache-first fetch failed for {}: {}", key, err);
            if is_navigation {
                if let Some(root) = backend.cache_lookup(ROOT_DOCUMENT).await {
                    return Ok(root);
                }
            }
            Err(Unavailable)
        }
    }
}

/// Network wins; non-success responses still go back to the caller (a 404
/// page beats a rejection). Failures degrade to the cached copy, then for
/// navigations to the cached root document.
pub async fn network_first<B: Backend>(
    backend: &B,
    key: &str,
    is_navigation: bool,
) -> Result<B::Resp, Unavailable> {
    match backend.network(key).await {
        Ok(response) => {
            if B::is_success(&response) {
                backend.cache_store(key, &response).await;
            }
            Ok(response)
        }
        Err(err) => {
            log::warn!("network-first fetch failed for {}: {}", key, err);
            if let Some(cached) = backend.cache_lookup(key).await {
                return Ok(cached);
            }
            if is_navigation {
                if let Some(root) = backend.cache_lookup(ROOT_DOCUMENT).await {
                    return Ok(root);
                }
            }
            Err(Unavailable)
        }
    }
}

/// Serve the cached copy immediately and refresh it in the background. With
/// no cached copy the caller waits on the network like a plain fetch.
pub async fn stale_while_revalidate<B>(
    backend: &B,
    key: &str,
) -> Result<Served<B::Resp>, Unavailable>
where
    B: Backend + Clone + 'static,
{
    if let Some(cached) = backend.cache_lookup(key).await {
        let backend = backend.clone();
        let key = key.to_string();
        let revalidate: Revalidation = Box::pin(async move {
            match backend.network(&key).await {
                Ok(response) if B::is_success(&response) => {
                    backend.cache_store(&key, &response).await;
                }
                Ok(_) => {}
                Err(err) => {
                    // Background refresh only; the caller already has a
                    // response.
                    log::debug!("revalidation failed for {}: {}", key, err);
                }
            }
        });
        return Ok(Served {
            response: cached,
            revalidate: Some(revalidate),
        });
    }

    let response = backend.network(key).await.map_err(|err| {
        log::warn!("stale-while-revalidate miss and fetch failed for {}: {}", key, err);
        Unavailable
    })?;
    if B::is_success(&response) {
        backend.cache_store(key, &response).await;
    }
    Ok(Served::done(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;
    use std::rc::Rc;

    #[derive(Clone, Debug, PartialEq)]
    struct MockResp {
        body: String,
        ok: bool,
    }

    fn ok(body: &str) -> MockResp {
        MockResp {
            body: body.to_string(),
            ok: true,
        }
    }

    #[derive(Clone, Default)]
    struct MockBackend {
        cache: Rc<RefCell<HashMap<String, MockResp>>>,
        network: Rc<RefCell<HashMap<String, Result<MockResp, NetworkError>>>>,
        network_calls: Rc<Cell<usize>>,
    }

    impl MockBackend {
        fn with_cached(self, key: &str, response: MockResp) -> Self {
            self.cache.borrow_mut().insert(key.to_string(), response);
            self
        }

        fn with_network(self, key: &str, outcome: Result<MockResp, NetworkError>) -> Self {
            self.network.borrow_mut().insert(key.to_string(), outcome);
            self
        }

        fn cached(&self, key: &str) -> Option<MockResp> {
            self.cache.borrow().get(key).cloned()
        }
    }

    impl Backend for MockBackend {
        type Resp = MockResp;

        async fn cache_lookup(&self, key: &str) -> Option<MockResp> {
            self.cache.borrow().get(key).cloned()
        }

        async fn cache_store(&self, key: &str, response: &MockResp) {
            self.cache
                .borrow_mut()
                .insert(key.to_string(), response.clone());
        }

        async fn network(&self, key: &str) -> Result<MockResp, NetworkError> {
            self.network_calls.set(self.network_calls.get() + 1);
            self.network
                .borrow()
                .get(key)
                .cloned()
                .unwrap_or_else(|| Err(NetworkError("unroutable".to_string())))
        }

        fn is_success(response: &MockResp) -> bool {
            response.ok
        }
    }

    #[test]
    fn cache_first_hit_never_touches_the_network() {
        let backend = MockBackend::default().with_cached("/logo.png", ok("cached"));
        let served = block_on(cache_first(&backend, "/logo.png", false)).unwrap();
        assert_eq!(served.body, "cached");
        assert_eq!(backend.network_calls.get(), 0);
    }

    #[test]
    fn cache_first_miss_fetches_and_stores_successes() {
        let backend = MockBackend::default().with_network("/logo.png", Ok(ok("fresh")));
        let served = block_on(cache_first(&backend, "/logo.png", false)).unwrap();
        assert_eq!(served.body, "fresh");
        assert_eq!(backend.cached("/logo.png"), Some(ok("fresh")));
    }

    #[test]
    fn cache_first_does_not_store_failures() {
        let backend = MockBackend::default().with_network(
            "/logo.png",
            Ok(MockResp {
                body: "gone".to_string(),
                ok: false,
            }),
        );
        block_on(cache_first(&backend, "/logo.png", false)).unwrap();
        assert_eq!(backend.cached("/logo.png"), None);
    }

    #[test]
    fn cache_first_navigation_falls_back_to_root_document() {
        let backend = MockBackend::default().with_cached(ROOT_DOCUMENT, ok("shell"));
        let served = block_on(cache_first(&backend, "/work.html", true)).unwrap();
        assert_eq!(served.body, "shell");
    }

    #[test]
    fn cache_first_total_miss_propagates() {
        let backend = MockBackend::default();
        assert_eq!(
            block_on(cache_first(&backend, "/logo.png", false)),
            Err(Unavailable)
        );
    }

    #[test]
    fn network_first_prefers_the_network_and_stores_the_copy() {
        let backend = MockBackend::default()
            .with_cached("/", ok("old shell"))
            .with_network("/", Ok(ok("new shell")));
        let served = block_on(network_first(&backend, "/", true)).unwrap();
        assert_eq!(served.body, "new shell");
        assert_eq!(backend.cached("/"), Some(ok("new shell")));
    }

    #[test]
    fn network_first_returns_non_success_responses_unchanged() {
        let missing = MockResp {
            body: "not found".to_string(),
            ok: false,
        };
        let backend = MockBackend::default().with_network("/nope", Ok(missing.clone()));
        let served = block_on(network_first(&backend, "/nope", false)).unwrap();
        assert_eq!(served, missing);
        assert_eq!(backend.cached("/nope"), None);
    }

    #[test]
    fn network_first_falls_back_to_the_exact_cached_request() {
        let backend = MockBackend::default()
            .with_cached("/api/items", ok("cached items"))
            .with_network("/api/items", Err(NetworkError("offline".to_string())));
        let served = block_on(network_first(&backend, "/api/items", false)).unwrap();
        assert_eq!(served.body, "cached items");
    }

    #[test]
    fn network_first_navigation_falls_back_to_root_document() {
        let backend = MockBackend::default()
            .with_cached(ROOT_DOCUMENT, ok("shell"))
            .with_network("/deep/link.html", Err(NetworkError("offline".to_string())));
        let served = block_on(network_first(&backend, "/deep/link.html", true)).unwrap();
        assert_eq!(served.body, "shell");
    }

    #[test]
    fn network_first_total_miss_propagates() {
        let backend =
            MockBackend::default().with_network("/api/items", Err(NetworkError("offline".to_string())));
        assert_eq!(
            block_on(network_first(&backend, "/api/items", false)),
            Err(Unavailable)
        );
    }

    #[test]
    fn swr_returns_the_cached_copy_without_waiting_on_the_network() {
        let backend = MockBackend::default()
            .with_cached("/app.js", ok("stale"))
            .with_network("/app.js", Ok(ok("fresh")));

        let served = block_on(stale_while_revalidate(&backend, "/app.js")).unwrap();
        assert_eq!(served.response.body, "stale");
        // The response settled while the network was untouched; the refresh
        // only runs once the caller spawns it.
        assert_eq!(backend.network_calls.get(), 0);

        block_on(served.revalidate.expect("revalidation task"));
        assert_eq!(backend.network_calls.get(), 1);
        assert_eq!(backend.cached("/app.js"), Some(ok("fresh")));
    }

    #[test]
    fn swr_background_failure_leaves_the_cache_and_response_alone() {
        let backend = MockBackend::default()
            .with_cached("/app.js", ok("stale"))
            .with_network("/app.js", Err(NetworkError("offline".to_string())));

        let served = block_on(stale_while_revalidate(&backend, "/app.js")).unwrap();
        assert_eq!(served.response.body, "stale");

        block_on(served.revalidate.expect("revalidation task"));
        assert_eq!(backend.cached("/app.js"), Some(ok("stale")));
    }

    #[test]
    fn swr_without_a_cached_copy_awaits_the_network() {
        let backend = MockBackend::default().with_network("/app.js", Ok(ok("fresh")));
        let served = block_on(stale_while_revalidate(&backend, "/app.js")).unwrap();
        assert_eq!(served.response.body, "fresh");
        assert!(served.revalidate.is_none());
        assert_eq!(backend.cached("/app.js"), Some(ok("fresh")));
    }

    #[test]
    fn serve_dispatches_by_strategy() {
        let backend = MockBackend::default().with_cached("/icons/a.png", ok("icon"));
        let served = block_on(serve(
            Strategy::CacheFirst,
            &backend,
            "/icons/a.png",
            false,
        ))
        .unwrap();
        assert_eq!(served.response.body, "icon");
        assert!(served.revalidate.is_none());
    }
}
