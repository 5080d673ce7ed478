pub mod routes;
pub mod strategy;
pub mod worker;

use wasm_bindgen_futures::JsFuture;

use crate::config;

pub fn static_bucket() -> String {
    format!("{}-{}-static", config::CACHE_NAMESPACE, config::RELEASE_TAG)
}

pub fn dynamic_bucket() -> String {
    format!("{}-{}-dynamic", config::CACHE_NAMESPACE, config::RELEASE_TAG)
}

/// A bucket from our namespace that is not one of the two current buckets
/// was left behind by a previous release and gets purged on activation.
pub fn is_stale_bucket(name: &str) -> bool {
    name.starts_with(&format!("{}-", config::CACHE_NAMESPACE))
        && name != static_bucket()
        && name != dynamic_bucket()
}

/// Page-side registration of the service worker script. Called once from
/// `main()`; failure only costs offline support, so it is logged and
/// swallowed.
pub fn register() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let container = window.navigator().service_worker();
    wasm_bindgen_futures::spawn_local(async move {
        match JsFuture::from(container.register("/sw.js")).await {
            Ok(_) => log::info!("service worker registered"),
            Err(err) => log::warn!("service worker registration failed: {:?}", err),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_buckets_are_never_stale() {
        assert!(!is_stale_bucket(&static_bucket()));
        assert!(!is_stale_bucket(&dynamic_bucket()));
    }

    #[test]
    fn foreign_buckets_are_left_alone() {
        assert!(!is_stale_bucket("workbox-precache-v2"));
        assert!(!is_stale_bucket("other-app-v1.0.0-static"));
    }

    #[test]
    fn activation_prunes_everything_but_the_current_release() {
        let existing = vec![
            format!("{}-v0.9.0-static", config::CACHE_NAMESPACE),
            format!("{}-v0.9.0-dynamic", config::CACHE_NAMESPACE),
            static_bucket(),
            dynamic_bucket(),
            "unrelated-cache".to_string(),
        ];

        let survivors: Vec<_> = existing
            .iter()
            .filter(|name| !is_stale_bucket(name))
            .collect();

        assert_eq!(
            survivors,
            vec![&static_bucket(), &dynamic_bucket(), &"unrelated-cache".to_string()]
        );
    }
}
