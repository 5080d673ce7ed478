use chrono::NaiveDate;
use wasm_bindgen_futures::spawn_local;
use web_sys::window;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::cms::models::Subscription;
use crate::cms::CmsClient;
use crate::pages::login::{clear_token, stored_token};
use crate::Route;

fn format_cost(cost: &str) -> String {
    match cost.parse::<f64>() {
        Ok(amount) if amount == 0.0 => "Free".to_string(),
        Ok(amount) => format!("${:.2}", amount),
        Err(_) => cost.to_string(),
    }
}

fn format_renewal(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%B %-d, %Y").to_string(),
        Err(_) => date.to_string(),
    }
}

fn monthly_total(subscriptions: &[Subscription]) -> f64 {
    subscriptions
        .iter()
        .filter(|s| s.status == "active")
        .filter_map(|s| s.cost.parse::<f64>().ok())
        .sum()
}

#[function_component(AdminDashboard)]
pub fn admin_dashboard() -> Html {
    let subscriptions = use_state(Vec::<Subscription>::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| true);
    let selected_id = use_state(|| None::<i32>);
    let reload = use_state(|| 0u32);

    {
        let subscriptions = subscriptions.clone();
        let error = error.clone();
        let loading = loading.clone();
        use_effect_with_deps(
            move |_| {
                match stored_token() {
                    Some(token) => {
                        loading.set(true);
                        spawn_local(async move {
                            match CmsClient::from_config().subscriptions(&token).await {
                                Ok(data) => {
                                    error.set(None);
                                    subscriptions.set(data);
                                }
                                Err(err) => {
                                    gloo_console::error!(
                                        "failed to fetch subscriptions:",
                                        err.to_string()
                                    );
                                    error.set(Some("Could not load subscriptions".to_string()));
                                }
                            }
                            loading.set(false);
                        });
                    }
                    None => {
                        if let Some(window) = window() {
                            let _ = window.location().set_href("/login");
                        }
                    }
                }
                || ()
            },
            *reload,
        );
    }

    let refresh = {
        let reload = reload.clone();
        Callback::from(move |_: MouseEvent| reload.set(*reload + 1))
    };

    let logout = Callback::from(move |_: MouseEvent| {
        clear_token();
        if let Some(window) = window() {
            let _ = window.location().set_href("/");
        }
    });

    let toggle_details = {
        let selected_id = selected_id.clone();
        Callback::from(move |id: i32| {
            selected_id.set(match *selected_id {
                Some(current) if current == id => None,
                _ => Some(id),
            });
        })
    };

    let total = subscriptions.len();
    let active = subscriptions.iter().filter(|s| s.status == "active").count();
    let pending = subscriptions.iter().filter(|s| s.status == "pending").count();
    let cost = monthly_total(&subscriptions);

    html! {
        <div class="dashboard-container">
            <style>
                {r#"
                    .dashboard-container {
                        min-height: 100vh;
                        background: #000;
                        padding: 2rem;
                    }
                    .dashboard-panel {
                        max-width: 1100px;
                        margin: 0 auto;
                        background: rgba(30, 30, 30, 0.7);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 16px;
                        padding: 2rem;
                    }
                    .panel-header {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        margin-bottom: 2rem;
                    }
                    .panel-title { color: #fff; font-size: 1.5rem; }
                    .panel-actions { display: flex; gap: 1rem; }
                    .panel-actions button, .back-link {
                        background: transparent;
                        color: rgba(255, 255, 255, 0.7);
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        border-radius: 999px;
                        padding: 0.5rem 1.25rem;
                        cursor: pointer;
                        text-decoration: none;
                        font-size: 0.9rem;
                    }
                    .panel-actions button:hover, .back-link:hover { border-color: #fff; color: #fff; }
                    .stats-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
                        gap: 1rem;
                        margin-bottom: 2rem;
                    }
                    .stat-card {
                        background: rgba(0, 0, 0, 0.4);
                        border: 1px solid rgba(255, 255, 255, 0.08);
                        border-radius: 12px;
                        padding: 1.25rem;
                    }
                    .stat-card p { color: rgba(255, 255, 255, 0.5); font-size: 0.8rem; text-transform: uppercase; }
                    .stat-card strong { color: #fff; font-size: 1.75rem; }
                    .subscription-row {
                        border: 1px solid rgba(255, 255, 255, 0.08);
                        border-radius: 12px;
                        padding: 1rem 1.25rem;
                        margin-bottom: 0.75rem;
                        cursor: pointer;
                    }
                    .subscription-row:hover { border-color: rgba(255, 255, 255, 0.3); }
                    .subscription-summary {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        gap: 1rem;
                        color: #fff;
                    }
                    .subscription-status {
                        font-size: 0.75rem;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        padding: 0.25rem 0.75rem;
                        border-radius: 999px;
                        border: 1px solid rgba(255, 255, 255, 0.2);
                    }
                    .subscription-status.active { color: #7dff9b; border-color: rgba(125, 255, 155, 0.4); }
                    .subscription-status.pending { color: #ffd166; border-color: rgba(255, 209, 102, 0.4); }
                    .subscription-status.cancelled { color: #ff6b6b; border-color: rgba(255, 107, 107, 0.4); }
                    .subscription-details {
                        margin-top: 1rem;
                        padding-top: 1rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.08);
                        color: rgba(255, 255, 255, 0.7);
                        font-size: 0.9rem;
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
                        gap: 0.75rem;
                    }
                    .dashboard-message { color: rgba(255, 255, 255, 0.6); text-align: center; padding: 3rem 0; }
                    .dashboard-error { color: #ff6b6b; text-align: center; padding: 3rem 0; }
                "#}
            </style>
            <div class="dashboard-panel">
                <div class="panel-header">
                    <h1 class="panel-title">{"Subscriptions"}</h1>
                    <div class="panel-actions">
                        <Link<Route> to={Route::Home} classes="back-link">{"Back to site"}</Link<Route>>
                        <button onclick={refresh}>{"Refresh"}</button>
                        <button onclick={logout}>{"Logout"}</button>
                    </div>
                </div>

                <div class="stats-grid">
                    <div class="stat-card"><p>{"Total"}</p><strong>{total}</strong></div>
                    <div class="stat-card"><p>{"Active"}</p><strong>{active}</strong></div>
                    <div class="stat-card"><p>{"Pending"}</p><strong>{pending}</strong></div>
                    <div class="stat-card"><p>{"Monthly cost"}</p><strong>{format!("${:.2}", cost)}</strong></div>
                </div>

                {
                    if *loading {
                        html! { <p class="dashboard-message">{"Loading subscriptions..."}</p> }
                    } else if let Some(message) = (*error).clone() {
                        html! { <p class="dashboard-error">{message}</p> }
                    } else if subscriptions.is_empty() {
                        html! { <p class="dashboard-message">{"No subscriptions yet."}</p> }
                    } else {
                        subscriptions.iter().map(|subscription| {
                            let is_open = *selected_id == Some(subscription.id);
                            let onclick = {
                                let toggle_details = toggle_details.clone();
                                let id = subscription.id;
                                Callback::from(move |_: MouseEvent| toggle_details.emit(id))
                            };
                            html! {
                                <div class="subscription-row" key={subscription.id} {onclick}>
                                    <div class="subscription-summary">
                                        <span>{subscription.service_name.clone()}</span>
                                        <span class={classes!("subscription-status", subscription.status.clone())}>
                                            {subscription.status.clone()}
                                        </span>
                                        <span>{format_cost(&subscription.cost)}</span>
                                    </div>
                                    {
                                        if is_open {
                                            html! {
                                                <div class="subscription-details">
                                                    <span>{format!("Plan: {}", subscription.plan_type)}</span>
                                                    <span>{format!("Cycle: {}", subscription.billing_cycle)}</span>
                                                    <span>{format!("Renews: {}", format_renewal(&subscription.renewal_date))}</span>
                                                    <span>{format!("ID: {}", subscription.id)}</span>
                                                </div>
                                            }
                                        } else {
                                            html! {}
                                        }
                                    }
                                </div>
                            }
                        }).collect::<Html>()
                    }
                }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subscription(status: &str, cost: &str) -> Subscription {
        Subscription {
            id: 1,
            service_name: "Hosting".to_string(),
            status: status.to_string(),
            plan_type: "paid".to_string(),
            billing_cycle: "monthly".to_string(),
            cost: cost.to_string(),
            renewal_date: "2026-09-01".to_string(),
        }
    }

    #[test]
    fn zero_cost_reads_as_free() {
        assert_eq!(format_cost("0"), "Free");
        assert_eq!(format_cost("12.5"), "$12.50");
        assert_eq!(format_cost("n/a"), "n/a");
    }

    #[test]
    fn monthly_total_only_counts_active_subscriptions() {
        let subscriptions = vec![
            subscription("active", "10.00"),
            subscription("active", "2.50"),
            subscription("cancelled", "99.00"),
        ];
        assert!((monthly_total(&subscriptions) - 12.5).abs() < f64::EPSILON);
    }

    #[test]
    fn unparseable_dates_pass_through() {
        assert_eq!(format_renewal("soon"), "soon");
    }
}
