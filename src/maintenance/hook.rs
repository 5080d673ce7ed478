use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::cms::models::MaintenanceRecord;
use crate::cms::CmsClient;
use crate::maintenance::allowlist;
use crate::maintenance::service::{MaintenanceService, STATUS_CACHE_TTL_MS};

type GateService = MaintenanceService<CmsClient, fn() -> f64>;

fn js_now() -> f64 {
    js_sys::Date::now()
}

#[derive(Clone, PartialEq)]
pub struct UseMaintenanceHandle {
    pub record: Option<MaintenanceRecord>,
    pub is_active: bool,
    /// `is_active` combined with the IP exemption. This is the flag views
    /// should branch on.
    pub should_show_maintenance: bool,
    pub loading: bool,
    pub error: Option<String>,
    pub refetch: Callback<()>,
}

/// Maintenance gate as a hook.
///
/// On mount the cache is bypassed once; afterwards a heartbeat at the TTL
/// interval and a visibilitychange listener both call the cache-preferring
/// path, so they only touch the network once the cached record has actually
/// expired. Both the interval and the listener are torn down with the
/// consuming component.
#[hook]
pub fn use_maintenance(check_interval_ms: u32, enable_polling: bool) -> UseMaintenanceHandle {
    let service = use_state(|| {
        Rc::new(GateService::new(CmsClient::from_config(), js_now as fn() -> f64))
    });
    let record = use_state(|| None::<MaintenanceRecord>);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let allowed_ip = use_state(|| false);

    let check: Rc<dyn Fn(bool)> = {
        let service = (*service).clone();
        let record = record.clone();
        let loading = loading.clone();
        let error = error.clone();
        Rc::new(move |force_refresh: bool| {
            let service = service.clone();
            let record = record.clone();
            let loading = loading.clone();
            let error = error.clone();
            spawn_local(async move {
                let status = service.get_status(force_refresh).await;
                record.set(Some(status));
                error.set(service.last_error());
                loading.set(false);
            });
        })
    };

    // Startup always bypasses the cache.
    {
        let check = check.clone();
        use_effect_with_deps(
            move |_| {
                check(true);
                || ()
            },
            (),
        );
    }

    // Refresh heartbeat. Cache-preferring, so this is a no-op until the
    // cached record expires.
    {
        let check = check.clone();
        use_effect_with_deps(
            move |_| {
                let interval = if enable_polling {
                    Some(gloo_timers::callback::Interval::new(
                        check_interval_ms,
                        move || {
                            check(false);
                        },
                    ))
                } else {
                    None
                };

                move || {
                    drop(interval);
                }
            },
            (check_interval_ms, enable_polling),
        );
    }

    // Refetch when the user returns to the tab.
    {
        let check = check.clone();
        use_effect_with_deps(
            move |_| {
                let document = web_sys::window().unwrap().document().unwrap();
                let listener_document = document.clone();
                let on_visibility = Closure::wrap(Box::new(move || {
                    if listener_document.visibility_state() == web_sys::VisibilityState::Visible {
                        check(false);
                    }
                }) as Box<dyn FnMut()>);

                document
                    .add_event_listener_with_callback(
                        "visibilitychange",
                        on_visibility.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    document
                        .remove_event_listener_with_callback(
                            "visibilitychange",
                            on_visibility.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    drop(on_visibility);
                }
            },
            (),
        );
    }

    // Resolve the visitor IP once; unknown means not exempt.
    {
        let allowed_ip = allowed_ip.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    if let Some(ip) = allowlist::resolve_client_ip().await {
                        allowed_ip.set(allowlist::is_allowed(&ip));
                    }
                });
                || ()
            },
            (),
        );
    }

    let refetch = {
        let check = check.clone();
        Callback::from(move |_| check(true))
    };

    let is_active = record.as_ref().map_or(false, |r| r.is_active);

    UseMaintenanceHandle {
        record: (*record).clone(),
        is_active,
        should_show_maintenance: is_active && !*allowed_ip,
        loading: *loading,
        error: (*error).clone(),
        refetch,
    }
}

/// Default polling interval for consumers that just want the TTL heartbeat.
pub fn default_check_interval_ms() -> u32 {
    STATUS_CACHE_TTL_MS as u32
}
