use leptos::*;
use leptos_meta::*;

use crate::constants::{HERO_SECTION_ID, PAGE_DESCRIPTION, PAGE_TITLE};
use crate::content::Content;

mod components;
use components::cta::*;
use components::footer::*;
use components::hero::*;
use components::portfolio::*;
use components::services::*;
use components::tech_stack::*;
use components::testimonials::*;
use components::why_choose_us::*;

#[component]
pub fn App(content: Content) -> impl IntoView {
    provide_meta_context();

    let Content {
        site,
        projects,
        services,
        testimonials,
        tech_stack,
        highlights,
    } = content;
    let brand = site.brand.clone();

    // Land on the hero even when the browser restores a scroll position.
    request_animation_frame(|| {
        if let Some(hero) = document().get_element_by_id(HERO_SECTION_ID) {
            hero.scroll_into_view();
        }
    });

    view! {
        <Title text=PAGE_TITLE/>
        <Meta name="description" content=PAGE_DESCRIPTION/>
        <main class="bg-black text-white">
            <div id=HERO_SECTION_ID>
                <Hero brand=brand/>
            </div>
            <WhyChooseUs highlights=highlights/>
            <TechServices services=services/>
            <TechStack groups=tech_stack/>
            <Testimonials testimonials=testimonials/>
            <ProjectPortfolio projects=projects/>
            <ProjectStartCta/>
            <Footer site=site/>
        </main>
    }
}
