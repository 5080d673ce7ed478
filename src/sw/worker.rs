//! Service-worker entry point. The `sw.js` loader imports the wasm module
//! and calls `initServiceWorker()` once, which wires every lifecycle event
//! to the routing table and strategies in this module's siblings.

use log::Level;
use serde::{Deserialize, Serialize};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{future_to_promise, spawn_local, JsFuture};
use web_sys::{
    Cache, ExtendableEvent, ExtendableMessageEvent, FetchEvent, NotificationEvent,
    NotificationOptions, PushEvent, Request, RequestDestination, Response,
    ServiceWorkerGlobalScope, Url,
};

// web-sys has no binding for the Background Sync API, so declare the one
// type and accessor the sync handler needs.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(extends = ExtendableEvent)]
    type SyncEvent;

    #[wasm_bindgen(method, getter)]
    fn tag(this: &SyncEvent) -> String;

    // web-sys also lacks the `action` getter on NotificationEvent.
    #[wasm_bindgen(extends = NotificationEvent)]
    type NotificationEventExt;

    #[wasm_bindgen(method, getter)]
    fn action(this: &NotificationEventExt) -> String;
}

use crate::config;
use crate::sw::routes::{RouteDecision, RouteRequest, SwRouter};
use crate::sw::strategy::{self, Backend, NetworkError};
use crate::sw::{dynamic_bucket, is_stale_bucket, static_bucket};

fn worker_scope() -> ServiceWorkerGlobalScope {
    js_sys::global().unchecked_into()
}

/// Strategy backend over the Cache Storage API and worker `fetch`. Cache
/// writes are best-effort: a failed store never fails the response.
#[derive(Clone)]
struct PlatformBackend {
    scope: ServiceWorkerGlobalScope,
}

impl PlatformBackend {
    fn current() -> Self {
        PlatformBackend {
            scope: worker_scope(),
        }
    }
}

impl Backend for PlatformBackend {
    type Resp = Response;

    async fn cache_lookup(&self, key: &str) -> Option<Response> {
        let caches = self.scope.caches().ok()?;
        let hit = JsFuture::from(caches.match_with_str(key)).await.ok()?;
        if hit.is_undefined() {
            None
        } else {
            Some(hit.unchecked_into())
        }
    }

    async fn cache_store(&self, key: &str, response: &Response) {
        // The body can only be read once, so a clone goes into the cache.
        let Ok(copy) = response.clone() else {
            return;
        };
        let Ok(caches) = self.scope.caches() else {
            return;
        };
        let Ok(cache) = JsFuture::from(caches.open(&dynamic_bucket())).await else {
            return;
        };
        let cache: Cache = cache.unchecked_into();
        if let Err(err) = JsFuture::from(cache.put_with_str(key, &copy)).await {
            log::warn!("failed to cache {}: {:?}", key, err);
        }
    }

    async fn network(&self, key: &str) -> Result<Response, NetworkError> {
        JsFuture::from(self.scope.fetch_with_str(key))
            .await
            .map(|value| value.unchecked_into())
            .map_err(|err| NetworkError(format!("{:?}", err)))
    }

    fn is_success(response: &Response) -> bool {
        response.ok()
    }
}

fn classify(request: &Request) -> Option<RouteRequest> {
    let url = Url::new(&request.url()).ok()?;
    Some(RouteRequest {
        method: request.method(),
        origin: url.origin(),
        host: url.host(),
        path: url.pathname(),
        is_navigation: request.destination() == RequestDestination::Document,
    })
}

fn on_install(event: ExtendableEvent) {
    let work = future_to_promise(async move {
        let scope = worker_scope();
        let caches = scope.caches()?;
        let cache: Cache = JsFuture::from(caches.open(&static_bucket())).await?.unchecked_into();

        let assets = js_sys::Array::new();
        for asset in config::STATIC_ASSETS {
            assets.push(&JsValue::from_str(asset));
        }
        JsFuture::from(cache.add_all_with_str_sequence(&assets)).await?;

        // Take over immediately instead of waiting for old workers to
        // drain.
        JsFuture::from(scope.skip_waiting()?).await?;
        log::info!("static bucket {} seeded", static_bucket());
        Ok(JsValue::UNDEFINED)
    });
    if let Err(err) = event.wait_until(&work) {
        log::warn!("install wait_until rejected: {:?}", err);
    }
}

fn on_activate(event: ExtendableEvent) {
    let work = future_to_promise(async move {
        let scope = worker_scope();
        let caches = scope.caches()?;
        let names: js_sys::Array = JsFuture::from(caches.keys()).await?.unchecked_into();
        for name in names.iter() {
            if let Some(name) = name.as_string() {
                if is_stale_bucket(&name) {
                    log::info!("pruning stale bucket {}", name);
                    JsFuture::from(caches.delete(&name)).await?;
                }
            }
        }
        JsFuture::from(scope.clients().claim()).await?;
        Ok(JsValue::UNDEFINED)
    });
    if let Err(err) = event.wait_until(&work) {
        log::warn!("activate wait_until rejected: {:?}", err);
    }
}

fn on_fetch(event: FetchEvent) {
    let request = event.request();
    let Some(route_request) = classify(&request) else {
        return;
    };

    let router = SwRouter::from_config(worker_scope().location().origin());
    let strategy = match router.route(&route_request) {
        RouteDecision::Bypass => return,
        RouteDecision::Serve(strategy) => strategy,
    };

    let key = request.url();
    let is_navigation = route_request.is_navigation;
    let response = future_to_promise(async move {
        let backend = PlatformBackend::current();
        match strategy::serve(strategy, &backend, &key, is_navigation).await {
            Ok(served) => {
                if let Some(revalidate) = served.revalidate {
                    spawn_local(revalidate);
                }
                Ok(served.response.into())
            }
            // Total miss on a non-navigation request: the one failure that
            // is allowed to surface.
            Err(err) => Err(js_sys::Error::new(&err.to_string()).into()),
        }
    });

    if let Err(err) = event.respond_with(&response) {
        log::warn!("respond_with failed: {:?}", err);
    }
}

#[derive(Deserialize)]
struct SwMessage {
    #[serde(rename = "type")]
    kind: String,
}

fn on_message(event: ExtendableMessageEvent) {
    if let Ok(message) = serde_wasm_bindgen::from_value::<SwMessage>(event.data()) {
        if message.kind == "SKIP_WAITING" {
            let _ = worker_scope().skip_waiting();
        }
    }
}

fn on_sync(event: SyncEvent) {
    if event.tag() == "background-sync" {
        // TODO: replay queued contact-form submissions once the form ships.
        let _ = event.wait_until(&js_sys::Promise::resolve(&JsValue::UNDEFINED));
    }
}

fn notification_options(body: &str) -> Result<NotificationOptions, JsValue> {
    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &"body".into(), &body.into())?;
    js_sys::Reflect::set(&options, &"icon".into(), &"/icons/icon-192x192.png".into())?;
    js_sys::Reflect::set(&options, &"badge".into(), &"/icons/icon-96x96.png".into())?;

    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    let actions = serde_json::json!([
        { "action": "open", "title": "Open the site" },
        { "action": "dismiss", "title": "Dismiss" },
    ])
    .serialize(&serializer)?;
    js_sys::Reflect::set(&options, &"actions".into(), &actions)?;

    Ok(options.unchecked_into())
}

fn on_push(event: PushEvent) {
    let Some(data) = event.data() else {
        return;
    };
    let body = data.text();

    let scope = worker_scope();
    let shown = notification_options(&body).and_then(|options| {
        scope
            .registration()
            .show_notification_with_options(config::APP_NAME, &options)
    });
    match shown {
        Ok(promise) => {
            if let Err(err) = event.wait_until(&promise) {
                log::warn!("push wait_until rejected: {:?}", err);
            }
        }
        Err(err) => log::warn!("failed to show notification: {:?}", err),
    }
}

fn on_notification_click(event: NotificationEvent) {
    event.notification().close();
    if event.unchecked_ref::<NotificationEventExt>().action() == "open" {
        let promise = worker_scope().clients().open_window("/");
        let _ = event.wait_until(&promise);
    }
}

/// Wire up every lifecycle listener. Called once by the `sw.js` loader.
#[wasm_bindgen(js_name = initServiceWorker)]
pub fn init_service_worker() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(Level::Info);

    let scope = worker_scope();

    let install = Closure::wrap(Box::new(on_install) as Box<dyn FnMut(ExtendableEvent)>);
    scope.add_event_listener_with_callback("install", install.as_ref().unchecked_ref())?;
    install.forget();

    let activate = Closure::wrap(Box::new(on_activate) as Box<dyn FnMut(ExtendableEvent)>);
    scope.add_event_listener_with_callback("activate", activate.as_ref().unchecked_ref())?;
    activate.forget();

    let fetch = Closure::wrap(Box::new(on_fetch) as Box<dyn FnMut(FetchEvent)>);
    scope.add_event_listener_with_callback("fetch", fetch.as_ref().unchecked_ref())?;
    fetch.forget();

    let message = Closure::wrap(Box::new(on_message) as Box<dyn FnMut(ExtendableMessageEvent)>);
    scope.add_event_listener_with_callback("message", message.as_ref().unchecked_ref())?;
    message.forget();

    let sync = Closure::wrap(Box::new(on_sync) as Box<dyn FnMut(SyncEvent)>);
    scope.add_event_listener_with_callback("sync", sync.as_ref().unchecked_ref())?;
    sync.forget();

    let push = Closure::wrap(Box::new(on_push) as Box<dyn FnMut(PushEvent)>);
    scope.add_event_listener_with_callback("push", push.as_ref().unchecked_ref())?;
    push.forget();

    let notification_click =
        Closure::wrap(Box::new(on_notification_click) as Box<dyn FnMut(NotificationEvent)>);
    scope.add_event_listener_with_callback(
        "notificationclick",
        notification_click.as_ref().unchecked_ref(),
    )?;
    notification_click.forget();

    log::info!("service worker listeners registered ({})", config::RELEASE_TAG);
    Ok(())
}
