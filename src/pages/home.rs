use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::works::Works;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home">
            <Hero />
            <Works />
            <Footer />
        </div>
    }
}
