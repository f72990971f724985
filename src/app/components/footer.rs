use leptos::*;

use crate::content::{Link, SiteInfo};

fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

fn link_list(links: Vec<Link>, class: &'static str) -> View {
    links
        .into_iter()
        .map(|link| {
            view! {
                <li>
                    <a href=link.path class=class>{link.name}</a>
                </li>
            }
        })
        .collect_view()
}

#[component]
pub fn Footer(site: SiteInfo) -> impl IntoView {
    let SiteInfo {
        brand,
        company_name,
        logo,
        nav_links,
        policy_links,
        contact,
    } = site;

    view! {
        <footer class="bg-[#18181c] text-white/90 pt-8 md:pt-12 pb-4 md:pb-6 mt-6 md:mt-10">
            <div class="max-w-7xl mx-auto px-4 md:px-5">
                <div class="flex flex-col items-center space-y-4 md:space-y-6 pb-4">
                    <div class="pb-2">
                        <a href="/">
                            <img src=logo alt=brand width="90" height="90"/>
                        </a>
                    </div>

                    <ul class="flex flex-wrap items-center justify-center gap-3 md:gap-0 md:space-x-6 text-sm md:text-base font-medium">
                        {link_list(nav_links, "hover:text-gray-400 transition duration-200")}
                    </ul>

                    <div class="flex flex-col md:flex-row items-center justify-center md:space-x-4 space-y-2 md:space-y-0 text-xs md:text-sm text-gray-400 mt-2">
                        <span>{contact.address}</span>
                        <span class="hidden md:block">"|"</span>
                        <a href=format!("mailto:{}", contact.email) class="hover:underline">{contact.email.clone()}</a>
                        <span class="hidden md:block">"|"</span>
                        <a href=contact.phone_href class="hover:underline">{contact.phone}</a>
                    </div>
                </div>

                <div class="border-t border-gray-700 my-4 md:my-6"></div>

                <div class="flex flex-col md:flex-row items-center justify-between text-xs md:text-sm text-gray-500 mb-2">
                    <p class="text-gray-600 text-center md:text-left">
                        {format!("© {} {}. All rights reserved.", current_year(), company_name)}
                    </p>
                    <ul class="flex flex-wrap justify-center md:justify-end gap-3 md:gap-0 md:space-x-4 mt-3 md:mt-0">
                        {link_list(policy_links, "hover:text-gray-200 transition duration-200")}
                    </ul>
                </div>
            </div>
        </footer>
    }
}
