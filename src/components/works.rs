use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct WorkItem {
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub featured_image: &'static str,
}

// TODO: load these from a CMS works collection once it exists.
const WORKS: [WorkItem; 4] = [
    WorkItem {
        title: "FINTECH APP",
        description: "Mobile app for personal finance built around simplicity and trust.",
        category: "UX/UI",
        featured_image: "/works/fintech.jpg",
    },
    WorkItem {
        title: "CORPORATE WEBSITE",
        description: "Corporate site focused on performance and a modern reading experience.",
        category: "WEB DEV",
        featured_image: "/works/corporate.jpg",
    },
    WorkItem {
        title: "BRAND IDENTITY",
        description: "Full visual identity for a tech startup, from logo to brand guidelines.",
        category: "BRANDING",
        featured_image: "/works/brand.jpg",
    },
    WorkItem {
        title: "E-COMMERCE PLATFORM",
        description: "Storefront with integrated payments and a custom admin panel.",
        category: "FULL STACK",
        featured_image: "/works/commerce.jpg",
    },
];

#[derive(Properties, PartialEq)]
pub struct WorkCardProps {
    pub item: WorkItem,
}

#[function_component(WorkCard)]
pub fn work_card(props: &WorkCardProps) -> Html {
    let hovered = use_state(|| false);

    let on_enter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let on_leave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    let card_class = if *hovered { "work-card hovered" } else { "work-card" };

    html! {
        <div class={card_class} onmouseenter={on_enter} onmouseleave={on_leave}>
            <div class="work-card-image">
                <img src={props.item.featured_image} alt={props.item.title} />
            </div>
            <span class="work-card-category">{props.item.category}</span>
            <h3 class="work-card-title">{props.item.title}</h3>
            <p class="work-card-description">{props.item.description}</p>
        </div>
    }
}

#[function_component(Works)]
pub fn works() -> Html {
    html! {
        <section class="works-section" id="work">
            <style>
                {r#"
                    .works-section {
                        background: #000;
                        padding: 5rem 1.5rem;
                    }
                    .works-header {
                        text-align: center;
                        margin-bottom: 4rem;
                    }
                    .works-header h2 {
                        color: #fff;
                        font-size: 2.5rem;
                        font-weight: 900;
                        text-transform: uppercase;
                        letter-spacing: -0.02em;
                        margin-bottom: 1rem;
                    }
                    .works-header p {
                        color: rgba(255, 255, 255, 0.5);
                        font-size: 1.1rem;
                    }
                    .works-grid {
                        max-width: 1200px;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                        gap: 2.5rem;
                    }
                    .work-card {
                        cursor: pointer;
                        transition: transform 0.3s ease;
                    }
                    .work-card.hovered {
                        transform: translateY(-4px);
                    }
                    .work-card-image {
                        aspect-ratio: 4 / 3;
                        overflow: hidden;
                        background: #111;
                        margin-bottom: 1.25rem;
                        border-radius: 8px;
                    }
                    .work-card-image img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .work-card-category {
                        color: rgba(255, 255, 255, 0.4);
                        font-size: 0.75rem;
                        text-transform: uppercase;
                        letter-spacing: 0.15em;
                    }
                    .work-card-title {
                        color: #fff;
                        font-size: 1.25rem;
                        font-weight: 800;
                        margin: 0.5rem 0;
                    }
                    .work-card-description {
                        color: rgba(255, 255, 255, 0.6);
                        font-size: 0.95rem;
                        line-height: 1.6;
                    }
                "#}
            </style>
            <div class="works-header">
                <h2>{"Selected Works"}</h2>
                <p>{"A selection of our favourite recent projects"}</p>
            </div>
            <div class="works-grid">
                { WORKS.iter().map(|item| html! {
                    <WorkCard item={item.clone()} />
                }).collect::<Html>() }
            </div>
        </section>
    }
}
