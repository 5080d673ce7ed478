use std::cell::RefCell;

use crate::cms::models::MaintenanceRecord;
use crate::cms::CmsError;

/// How long a fetched maintenance record stays fresh.
pub const STATUS_CACHE_TTL_MS: f64 = 300_000.0;

/// Seam between the gate and whatever fetches the remote flag. The CMS
/// client implements this; tests plug in scripted mocks.
pub trait StatusFetch {
    async fn fetch_status(&self) -> Result<MaintenanceRecord, CmsError>;
}

#[derive(Clone, Debug, Default)]
struct CacheEntry {
    data: Option<MaintenanceRecord>,
    fetched_at_ms: f64,
}

/// Time-boxed cache around the remote maintenance flag.
///
/// Every error path folds into the same fallback: serve the cached record
/// if one exists (no matter how old), otherwise the named fail-open default
/// with `is_active = false`. A broken maintenance check must never take the
/// site down.
///
/// The clock is injected so tests can drive the TTL deterministically.
/// Overlapping calls are not synchronized; whichever fetch resolves last
/// wins the cache slot, which is fine since both carry current truth.
pub struct MaintenanceService<F, N>
where
    F: StatusFetch,
    N: Fn() -> f64,
{
    fetcher: F,
    now_ms: N,
    cache: RefCell<CacheEntry>,
    last_error: RefCell<Option<String>>,
}

impl<F, N> MaintenanceService<F, N>
where
    F: StatusFetch,
    N: Fn() -> f64,
{
    pub fn new(fetcher: F, now_ms: N) -> Self {
        MaintenanceService {
            fetcher,
            now_ms,
            cache: RefCell::new(CacheEntry::default()),
            last_error: RefCell::new(None),
        }
    }

    /// What went wrong on the most recent fetch attempt, if anything.
    /// Purely informational: failures never block the caller.
    pub fn last_error(&self) -> Option<String> {
        self.last_error.borrow().clone()
    }

    /// Current maintenance record, from cache when fresh enough.
    ///
    /// `force_refresh` bypasses the cache regardless of age. Infallible:
    /// fetch failures fall back to the stale cache or the fail-open default.
    pub async fn get_status(&self, force_refresh: bool) -> MaintenanceRecord {
        let now = (self.now_ms)();

        if !force_refresh {
            let cache = self.cache.borrow();
            if let Some(record) = &cache.data {
                if now - cache.fetched_at_ms < STATUS_CACHE_TTL_MS {
                    return record.clone();
                }
            }
        }

        match self.fetcher.fetch_status().await {
            Ok(record) => {
                *self.cache.borrow_mut() = CacheEntry {
                    data: Some(record.clone()),
                    fetched_at_ms: now,
                };
                *self.last_error.borrow_mut() = None;
                record
            }
            Err(err) => {
                log::warn!("maintenance status fetch failed: {}", err);
                *self.last_error.borrow_mut() = Some(err.to_string());
                let stale = self.cache.borrow().data.clone();
                match stale {
                    Some(record) => {
                        log::warn!("serving stale maintenance record after fetch failure");
                        record
                    }
                    None => MaintenanceRecord::fail_open_default(),
                }
            }
        }
    }

    /// Just the active flag. Fail-open: any internal problem reads as
    /// "site is up".
    pub async fn is_active(&self, force_refresh: bool) -> bool {
        self.get_status(force_refresh).await.is_active
    }

    /// Drop the cached record so the next `get_status` hits the network.
    pub fn clear_cache(&self) {
        *self.cache.borrow_mut() = CacheEntry::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::Cell;
    use std::rc::Rc;

    struct ScriptedFetch {
        responses: RefCell<Vec<Result<MaintenanceRecord, CmsError>>>,
        calls: Cell<usize>,
    }

    impl ScriptedFetch {
        fn new(responses: Vec<Result<MaintenanceRecord, CmsError>>) -> Self {
            ScriptedFetch {
                responses: RefCell::new(responses),
                calls: Cell::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.get()
        }
    }

    impl StatusFetch for &ScriptedFetch {
        async fn fetch_status(&self) -> Result<MaintenanceRecord, CmsError> {
            self.calls.set(self.calls.get() + 1);
            let mut responses = self.responses.borrow_mut();
            if responses.is_empty() {
                return Err(CmsError::Network("script exhausted".to_string()));
            }
            responses.remove(0)
        }
    }

    fn active_record(title: &str) -> MaintenanceRecord {
        MaintenanceRecord {
            is_active: true,
            title: title.to_string(),
            message: "scheduled work".to_string(),
            estimated_time: "2 hours".to_string(),
            contact_email: "hello@studiokaze.com".to_string(),
            show_contact_email: false,
        }
    }

    fn service_at<'a>(
        fetch: &'a ScriptedFetch,
        clock: Rc<Cell<f64>>,
    ) -> MaintenanceService<&'a ScriptedFetch, impl Fn() -> f64> {
        MaintenanceService::new(fetch, move || clock.get())
    }

    #[test]
    fn cached_record_is_served_within_ttl_and_refetched_after() {
        let fetch = ScriptedFetch::new(vec![
            Ok(active_record("first")),
            Ok(active_record("second")),
        ]);
        let clock = Rc::new(Cell::new(0.0));
        let service = service_at(&fetch, clock.clone());

        let first = block_on(service.get_status(false));
        assert_eq!(first.title, "first");
        assert_eq!(fetch.calls(), 1);

        clock.set(STATUS_CACHE_TTL_MS - 1.0);
        let cached = block_on(service.get_status(false));
        assert_eq!(cached.title, "first");
        assert_eq!(fetch.calls(), 1, "fresh cache must not hit the network");

        clock.set(STATUS_CACHE_TTL_MS);
        let refreshed = block_on(service.get_status(false));
        assert_eq!(refreshed.title, "second");
        assert_eq!(fetch.calls(), 2, "expired cache must refetch");
    }

    #[test]
    fn fetch_failure_with_empty_cache_fails_open() {
        let fetch = ScriptedFetch::new(vec![Err(CmsError::Status(500))]);
        let clock = Rc::new(Cell::new(0.0));
        let service = service_at(&fetch, clock);

        let record = block_on(service.get_status(false));
        assert!(!record.is_active);
        assert_eq!(record, MaintenanceRecord::fail_open_default());
    }

    #[test]
    fn fetch_failure_serves_stale_cache_regardless_of_age() {
        let fetch = ScriptedFetch::new(vec![
            Ok(active_record("before outage")),
            Err(CmsError::Network("cms down".to_string())),
        ]);
        let clock = Rc::new(Cell::new(0.0));
        let service = service_at(&fetch, clock.clone());

        block_on(service.get_status(false));

        // Far past the TTL: the entry is stale but still the best answer.
        clock.set(STATUS_CACHE_TTL_MS * 10.0);
        let record = block_on(service.get_status(false));
        assert_eq!(record.title, "before outage");
        assert_eq!(fetch.calls(), 2);
    }

    #[test]
    fn force_refresh_bypasses_a_fresh_cache() {
        let fetch = ScriptedFetch::new(vec![
            Ok(active_record("first")),
            Ok(active_record("second")),
        ]);
        let clock = Rc::new(Cell::new(0.0));
        let service = service_at(&fetch, clock);

        block_on(service.get_status(false));
        let forced = block_on(service.get_status(true));
        assert_eq!(forced.title, "second");
        assert_eq!(fetch.calls(), 2);
    }

    #[test]
    fn clear_cache_forces_the_next_call_to_the_network() {
        let fetch = ScriptedFetch::new(vec![
            Ok(active_record("first")),
            Ok(active_record("second")),
        ]);
        let clock = Rc::new(Cell::new(0.0));
        let service = service_at(&fetch, clock);

        block_on(service.get_status(false));
        service.clear_cache();
        let record = block_on(service.get_status(false));
        assert_eq!(record.title, "second");
        assert_eq!(fetch.calls(), 2);
    }

    #[test]
    fn is_active_fails_open_to_false() {
        let fetch = ScriptedFetch::new(vec![Err(CmsError::Parse("not json".to_string()))]);
        let clock = Rc::new(Cell::new(0.0));
        let service = service_at(&fetch, clock);

        assert!(!block_on(service.is_active(false)));
    }

    #[test]
    fn outage_after_expiry_returns_the_original_record() {
        let fetch = ScriptedFetch::new(vec![
            Ok(active_record("X")),
            Err(CmsError::Network("offline".to_string())),
        ]);
        let clock = Rc::new(Cell::new(0.0));
        let service = service_at(&fetch, clock.clone());

        let initial = block_on(service.get_status(false));
        assert_eq!(initial.title, "X");

        clock.set(200_000.0);
        let cached = block_on(service.get_status(false));
        assert_eq!(cached.title, "X");
        assert_eq!(fetch.calls(), 1);

        clock.set(301_000.0);
        let fallback = block_on(service.get_status(false));
        assert_eq!(fallback, initial);
        assert_eq!(fetch.calls(), 2);
    }
}
