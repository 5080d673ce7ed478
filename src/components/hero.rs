use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::cms::models::HeroVideoComplete;
use crate::cms::CmsClient;

#[function_component(Hero)]
pub fn hero() -> Html {
    let video = use_state(|| None::<HeroVideoComplete>);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let reload = use_state(|| 0u32);

    {
        let video = video.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with_deps(
            move |_| {
                loading.set(true);
                error.set(None);
                spawn_local(async move {
                    match CmsClient::from_config().hero_video_complete().await {
                        Ok(complete) => {
                            video.set(Some(complete));
                        }
                        Err(err) => {
                            gloo_console::error!("failed to load hero video:", err.to_string());
                            error.set(Some(err.to_string()));
                        }
                    }
                    loading.set(false);
                });
                || ()
            },
            *reload,
        );
    }

    let retry = {
        let reload = reload.clone();
        Callback::from(move |_: MouseEvent| reload.set(*reload + 1))
    };

    html! {
        <section class="hero-section">
            <style>
                {r#"
                    .hero-section {
                        position: relative;
                        min-height: 100vh;
                        background: linear-gradient(135deg, #1a1033 0%, #18181b 60%, #000 100%);
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        padding: 6rem 1.5rem 4rem;
                        overflow: hidden;
                    }
                    .hero-title {
                        color: #e4e4e7;
                        font-size: clamp(3rem, 8vw, 6rem);
                        font-weight: 700;
                        letter-spacing: -0.03em;
                        line-height: 0.95;
                        text-align: center;
                        margin-bottom: 1.5rem;
                    }
                    .hero-subtitle {
                        color: #71717a;
                        font-size: 1.3rem;
                        font-weight: 300;
                        text-align: center;
                        max-width: 640px;
                        margin-bottom: 4rem;
                    }
                    .hero-video-frame {
                        width: 100%;
                        max-width: 960px;
                        border: 1px solid rgba(255, 255, 255, 0.08);
                        border-radius: 16px;
                        overflow: hidden;
                        box-shadow: 0 24px 64px rgba(0, 0, 0, 0.6);
                        background: #0a0a0a;
                    }
                    .hero-video-frame video {
                        display: block;
                        width: 100%;
                        height: auto;
                    }
                    .hero-placeholder {
                        aspect-ratio: 16 / 9;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 1rem;
                        color: rgba(255, 255, 255, 0.5);
                    }
                    .hero-retry {
                        background: transparent;
                        color: #fff;
                        border: 1px solid rgba(255, 255, 255, 0.3);
                        border-radius: 999px;
                        padding: 0.5rem 1.5rem;
                        cursor: pointer;
                    }
                    .hero-retry:hover {
                        border-color: #fff;
                    }
                "#}
            </style>
            <h1 class="hero-title">{"We are the wind"}</h1>
            <p class="hero-subtitle">{"Where ideas turn into extraordinary digital experiences"}</p>
            <div class="hero-video-frame">
                {
                    if *loading {
                        html! {
                            <div class="hero-placeholder">
                                <p>{"Loading showreel..."}</p>
                            </div>
                        }
                    } else if let Some(complete) = (*video).clone() {
                        html! {
                            <video
                                src={complete.video_url}
                                poster={complete.poster_url}
                                autoplay={complete.video.autoplay}
                                muted={complete.video.muted}
                                loop={complete.video.loop_playback}
                                controls={complete.video.show_controls}
                                playsinline=true
                            />
                        }
                    } else {
                        html! {
                            <div class="hero-placeholder">
                                <p>{ error.as_deref().unwrap_or("Showreel unavailable").to_string() }</p>
                                <button class="hero-retry" onclick={retry}>{"Retry"}</button>
                            </div>
                        }
                    }
                }
            </div>
        </section>
    }
}
