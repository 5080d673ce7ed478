use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        background: #000;
                        border-top: 1px solid rgba(255, 255, 255, 0.08);
                        padding: 3rem 1.5rem;
                    }
                    .footer-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: space-between;
                        align-items: center;
                        gap: 1.5rem;
                    }
                    .footer-brand {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                    }
                    .footer-brand img {
                        width: 32px;
                        height: 32px;
                        object-fit: contain;
                        border-radius: 6px;
                    }
                    .footer-brand span {
                        color: #fff;
                        font-weight: 700;
                        letter-spacing: 0.05em;
                    }
                    .footer-links {
                        display: flex;
                        gap: 1.5rem;
                    }
                    .footer-links a {
                        color: rgba(255, 255, 255, 0.6);
                        text-decoration: none;
                        font-size: 0.9rem;
                    }
                    .footer-links a:hover {
                        color: #fff;
                    }
                    .footer-copy {
                        color: rgba(255, 255, 255, 0.4);
                        font-size: 0.8rem;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                    }
                "#}
            </style>
            <div class="footer-content">
                <div class="footer-brand">
                    <img src="/logo.png" alt="Studio Kaze logo" />
                    <span>{"STUDIO KAZE"}</span>
                </div>
                <div class="footer-links">
                    <a href="mailto:hello@studiokaze.com">{"hello@studiokaze.com"}</a>
                    <a href="https://www.instagram.com/studiokaze" target="_blank" rel="noopener">{"Instagram"}</a>
                    <a href="https://www.behance.net/studiokaze" target="_blank" rel="noopener">{"Behance"}</a>
                </div>
                <p class="footer-copy">{format!("© {} Studio Kaze", year)}</p>
            </div>
        </footer>
    }
}
