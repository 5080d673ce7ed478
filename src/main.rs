use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::*;

mod cms;
mod components;
mod config;
mod maintenance;
mod pages;
mod sw;

use maintenance::hook::default_check_interval_ms;
use maintenance::use_maintenance;
use pages::{
    dashboard::AdminDashboard,
    home::Home,
    login::{is_logged_in, Login},
    maintenance::MaintenancePage,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/admin")]
    Admin,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Login => {
            info!("Rendering Login page");
            html! { <Login /> }
        }
        Route::Admin => {
            info!("Rendering Admin page");
            html! { <AdminDashboard /> }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub logged_in: bool,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document.document_element().unwrap().scroll_top();
                    is_scrolled.set(scroll_top > 80);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then_some("scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        padding: 1rem 1.5rem;
                        transition: background 0.3s ease;
                    }
                    .top-nav.scrolled {
                        background: rgba(0, 0, 0, 0.85);
                        backdrop-filter: blur(10px);
                    }
                    .nav-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .nav-logo {
                        color: #fff;
                        font-weight: 800;
                        letter-spacing: 0.05em;
                        text-decoration: none;
                    }
                    .nav-right { display: flex; gap: 1.5rem; align-items: center; }
                    .nav-link {
                        color: rgba(255, 255, 255, 0.7);
                        text-decoration: none;
                        font-size: 0.9rem;
                    }
                    .nav-link:hover { color: #fff; }
                "#}
            </style>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"STUDIO KAZE"}
                </Link<Route>>
                <div class="nav-right">
                    <a class="nav-link" href="/#work">{"Work"}</a>
                    {
                        if props.logged_in {
                            html! {
                                <Link<Route> to={Route::Admin} classes="nav-link">
                                    {"Dashboard"}
                                </Link<Route>>
                            }
                        } else {
                            html! {
                                <Link<Route> to={Route::Login} classes="nav-link">
                                    {"Login"}
                                </Link<Route>>
                            }
                        }
                    }
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    let gate = use_maintenance(default_check_interval_ms(), true);
    let logged_in = use_state(is_logged_in);

    // Verifying the flag: a plain spinner, nothing else.
    if gate.loading {
        return html! {
            <div style="min-height: 100vh; background: #000; display: flex; align-items: center; justify-content: center;">
                <style>
                    {r#"
                        .gate-spinner {
                            width: 32px;
                            height: 32px;
                            border: 2px solid rgba(255, 255, 255, 0.2);
                            border-top-color: #fff;
                            border-radius: 50%;
                            animation: gate-spin 1s linear infinite;
                        }
                        @keyframes gate-spin { to { transform: rotate(360deg); } }
                    "#}
                </style>
                <div class="gate-spinner"></div>
            </div>
        };
    }

    if gate.should_show_maintenance {
        if let Some(record) = gate.record.clone() {
            return html! { <MaintenancePage {record} /> };
        }
    }

    if let Some(error) = &gate.error {
        // Fail open: a broken maintenance check never blocks the site.
        info!("maintenance check degraded, showing normal site: {}", error);
    }

    html! {
        <BrowserRouter>
            <Nav logged_in={*logged_in} />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    sw::register();
    yew::Renderer::<App>::new().render();
}
