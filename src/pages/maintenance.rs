use yew::prelude::*;

use crate::cms::models::MaintenanceRecord;

#[derive(Properties, PartialEq)]
pub struct MaintenancePageProps {
    pub record: MaintenanceRecord,
}

/// Full-screen maintenance notice. The gate keeps polling behind the
/// scenes, so this page clears itself once the flag flips off.
#[function_component(MaintenancePage)]
pub fn maintenance_page(props: &MaintenancePageProps) -> Html {
    let record = &props.record;

    html! {
        <main class="maintenance-page">
            <style>
                {r#"
                    .maintenance-page {
                        min-height: 100vh;
                        background: #000;
                        color: #fff;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 2rem;
                    }
                    .maintenance-layout {
                        max-width: 960px;
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 3rem;
                    }
                    @media (min-width: 1024px) {
                        .maintenance-layout { grid-template-columns: 1fr 1fr; align-items: center; }
                    }
                    .maintenance-brand {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        margin-bottom: 2.5rem;
                    }
                    .maintenance-brand img {
                        width: 48px;
                        height: 48px;
                        object-fit: contain;
                        border-radius: 8px;
                    }
                    .maintenance-brand span { font-weight: 700; letter-spacing: 0.05em; }
                    .maintenance-title {
                        font-size: clamp(2.5rem, 6vw, 4rem);
                        font-weight: 900;
                        text-transform: uppercase;
                        line-height: 1.05;
                        letter-spacing: -0.02em;
                    }
                    .maintenance-message { color: #d4d4d8; font-size: 1.1rem; line-height: 1.7; }
                    .maintenance-eta {
                        border-left: 4px solid #fff;
                        padding: 0.5rem 0 0.5rem 1.5rem;
                        margin: 2rem 0;
                    }
                    .maintenance-eta p {
                        color: #71717a;
                        font-size: 0.75rem;
                        text-transform: uppercase;
                        letter-spacing: 0.15em;
                        margin-bottom: 0.5rem;
                    }
                    .maintenance-eta strong { font-size: 1.25rem; }
                    .maintenance-contact a {
                        color: #fff;
                        border-bottom: 1px solid rgba(255, 255, 255, 0.3);
                        text-decoration: none;
                    }
                    .maintenance-contact a:hover { border-color: #fff; }
                    .maintenance-indicator {
                        position: fixed;
                        bottom: 1.5rem;
                        left: 1.5rem;
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        color: #71717a;
                        font-size: 0.75rem;
                        text-transform: uppercase;
                        letter-spacing: 0.15em;
                    }
                    .maintenance-indicator .dot {
                        width: 8px;
                        height: 8px;
                        border-radius: 50%;
                        background: #ef4444;
                        animation: pulse 1.5s ease-in-out infinite;
                    }
                    @keyframes pulse { 50% { opacity: 0.3; } }
                    .maintenance-refresh-note {
                        position: fixed;
                        bottom: 1.5rem;
                        right: 1.5rem;
                        color: #52525b;
                        font-size: 0.7rem;
                        text-transform: uppercase;
                        letter-spacing: 0.15em;
                    }
                "#}
            </style>
            <div class="maintenance-layout">
                <div>
                    <div class="maintenance-brand">
                        <img src="/logo.png" alt="Studio Kaze logo" />
                        <span>{"STUDIO KAZE"}</span>
                    </div>
                    <h1 class="maintenance-title">{record.title.clone()}</h1>
                </div>
                <div>
                    <p class="maintenance-message">{record.message.clone()}</p>
                    <div class="maintenance-eta">
                        <p>{"Status"}</p>
                        <strong>{record.estimated_time.clone()}</strong>
                    </div>
                    {
                        if record.show_contact_email && !record.contact_email.is_empty() {
                            html! {
                                <p class="maintenance-contact">
                                    {"Need something urgent? "}
                                    <a href={format!("mailto:{}", record.contact_email)}>
                                        {record.contact_email.clone()}
                                    </a>
                                </p>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </div>
            <div class="maintenance-indicator">
                <div class="dot"></div>
                <span>{"Maintenance mode"}</span>
            </div>
            <p class="maintenance-refresh-note">{"Checking again every 5 min"}</p>
        </main>
    }
}
