use leptos::*;

use crate::content::Service;

const STATS: [(&str, &str); 3] = [
    ("150+", "Projects Delivered"),
    ("98%", "Client Satisfaction"),
    ("15+", "Years Experience"),
];

const CATEGORIES: [&str; 5] = [
    "Web Development",
    "App Development",
    "Software Development",
    "UI/UX Design",
    "Digital Marketing Solutions",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CardSize {
    Small,
    Large,
}

#[component]
fn ServiceCard(item: Service, #[prop(default = CardSize::Small)] size: CardSize) -> impl IntoView {
    let (padding, description_text) = match size {
        CardSize::Large => ("p-6 lg:p-8 text-xl lg:text-2xl", "text-base lg:text-lg"),
        CardSize::Small => ("p-4 lg:p-6 text-lg lg:text-xl", "text-sm"),
    };

    view! {
        <div class="group relative overflow-hidden rounded-2xl aspect-square hover:shadow-xl transition-all duration-500 ease-in-out cursor-pointer">
            <img
                src=item.image
                alt=item.name.clone()
                class="absolute inset-0 w-full h-full object-cover transition-transform duration-700 ease-out group-hover:scale-105"
            />
            <div class="absolute inset-0 bg-gradient-to-t from-black/90 via-black/50 to-transparent opacity-0 group-hover:opacity-100 transition-all duration-500 ease-out"></div>
            <div class=format!("absolute inset-x-0 bottom-0 {padding} flex flex-col transform translate-y-full group-hover:translate-y-0 transition-transform duration-500 ease-out")>
                <span class="inline-block text-indigo-300 text-sm font-medium mb-2 opacity-0 group-hover:opacity-100 transition-all duration-500">
                    {item.category}
                </span>
                <h3 class="text-white font-bold mb-2 opacity-0 group-hover:opacity-100 transition-all duration-500 line-clamp-2">
                    {item.name}
                </h3>
                <p class="text-white/70 text-sm mb-1 opacity-0 group-hover:opacity-100 transition-all duration-500">
                    {item.title}
                </p>
                <p class=format!("text-white/90 {description_text} mb-4 opacity-0 group-hover:opacity-100 transition-all duration-500 line-clamp-2")>
                    {item.description}
                </p>
                <button class="inline-flex items-center justify-center gap-2 px-4 py-2 rounded-lg text-sm font-medium opacity-0 group-hover:opacity-100 w-full bg-purple-500/20 hover:bg-purple-700/20 text-white">
                    <span class="whitespace-nowrap">"Learn More →"</span>
                </button>
            </div>
        </div>
    }
}

#[component]
fn ActionButton(#[prop(into)] label: String) -> impl IntoView {
    view! {
        <button class="group inline-flex items-center justify-center gap-3 px-6 py-3.5 bg-white/10 hover:bg-white/20 text-white rounded-lg transition-all duration-300 w-full hover:scale-[1.02] active:scale-[0.98]">
            <span class="font-medium">{label}</span>
        </button>
    }
}

/// "Digital Solutions" section: stats, categories and the services grid.
#[component]
pub fn TechServices(services: Vec<Service>) -> impl IntoView {
    let mut cards = services.into_iter();
    let left = cards.by_ref().take(2).map(|item| view! { <ServiceCard item=item/> }).collect_view();
    let center = cards
        .next()
        .map(|item| view! { <ServiceCard item=item size=CardSize::Large/> });
    let right = cards.map(|item| view! { <ServiceCard item=item/> }).collect_view();

    let stats = STATS
        .iter()
        .map(|(value, label)| {
            view! {
                <div class="text-center lg:text-left">
                    <p class="text-2xl lg:text-4xl font-bold text-white mb-1">{*value}</p>
                    <p class="text-indigo-200 text-sm">{*label}</p>
                </div>
            }
        })
        .collect_view();

    let categories = CATEGORIES
        .iter()
        .map(|name| {
            view! {
                <div class="flex items-center gap-2 text-purple-200 hover:text-white transition-colors duration-300">
                    <span class="text-xs font-mono">"</>"</span>
                    <span class="text-sm font-medium">{*name}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="what-we-do" class="relative bg-purple-950 py-16 lg:py-24 overflow-hidden">
            <div class="absolute inset-0 bg-gradient-to-b from-black/20 via-transparent to-black/20"></div>
            <div class="relative max-w-7xl mx-auto px-4 lg:px-8">
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-8 lg:gap-16 mb-12">
                    <div class="flex flex-col justify-between space-y-8">
                        <div>
                            <span class="inline-block text-base font-semibold text-purple-300 mb-2 lg:mb-4 tracking-wider">
                                "OUR SERVICES"
                            </span>
                            <h2 class="text-6xl md:text-7xl lg:text-[98px] font-bold text-white leading-tight">
                                "Digital"
                                <span class="block bg-gradient-to-r from-white via-indigo-200 to-white bg-clip-text text-transparent">
                                    "Solutions"
                                </span>
                            </h2>
                        </div>
                        <div class="grid grid-cols-3 gap-4 lg:gap-8">{stats}</div>
                    </div>

                    <div class="flex flex-col justify-between space-y-8">
                        <div class="space-y-6">
                            <p class="text-white/90 text-base lg:text-lg leading-relaxed">
                                "We deliver cutting-edge technology solutions that transform businesses and create exceptional digital experiences. Our expertise spans across web, mobile, and enterprise applications."
                            </p>
                            <div class="grid grid-cols-2 gap-4">{categories}</div>
                        </div>
                        <div class="space-y-3">
                            <ActionButton label="View Our Portfolio"/>
                            <ActionButton label="Start Your Project"/>
                        </div>
                    </div>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-12 gap-4">
                    <div class="md:col-span-3 grid grid-cols-2 md:grid-cols-1 gap-4">{left}</div>
                    <div class="md:col-span-6">{center}</div>
                    <div class="md:col-span-3 grid grid-cols-2 md:grid-cols-1 gap-4">{right}</div>
                </div>
            </div>
        </section>
    }
}
