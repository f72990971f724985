use leptos::*;

use crate::content::{Accent, TechGroup};

struct Palette {
    title: &'static str,
    level: &'static str,
    track: &'static str,
    bar: &'static str,
}

fn palette(accent: Accent) -> Palette {
    match accent {
        Accent::Blue => Palette {
            title: "text-blue-400",
            level: "text-sm text-blue-400",
            track: "h-2 bg-blue-950 rounded-full overflow-hidden",
            bar: "h-full bg-gradient-to-r from-blue-400 to-cyan-400 transition-all duration-1000",
        },
        Accent::Purple => Palette {
            title: "text-purple-400",
            level: "text-sm text-purple-400",
            track: "h-2 bg-purple-950 rounded-full overflow-hidden",
            bar: "h-full bg-gradient-to-r from-purple-400 to-pink-400 transition-all duration-1000",
        },
        Accent::Emerald => Palette {
            title: "text-emerald-400",
            level: "text-sm text-emerald-400",
            track: "h-2 bg-emerald-950 rounded-full overflow-hidden",
            bar: "h-full bg-gradient-to-r from-emerald-400 to-teal-400 transition-all duration-1000",
        },
    }
}

#[component]
fn StackCard(group: TechGroup) -> impl IntoView {
    let colors = palette(group.accent);
    let items = group
        .items
        .into_iter()
        .enumerate()
        .map(|(index, tech)| {
            view! {
                <div class="space-y-2">
                    <div class="flex items-center justify-between">
                        <div class="flex items-center gap-2">
                            <img src=tech.icon alt=tech.name.clone() class="w-6 h-6"/>
                            <span class="text-sm font-medium text-gray-300">{tech.name}</span>
                        </div>
                        <span class=colors.level>{format!("{}%", tech.level)}</span>
                    </div>
                    <div class=colors.track>
                        <div
                            class=colors.bar
                            style=format!("width: {}%; transition-delay: {}ms", tech.level, index * 100)
                        ></div>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="p-6 rounded-2xl bg-white/5 backdrop-blur-xl border border-white/10">
            <div class="flex items-center gap-3 mb-6">
                <span class=format!("w-6 h-6 {}", colors.title)>"◆"</span>
                <h3 class="text-xl font-semibold text-white">{group.name}</h3>
            </div>
            <div class="space-y-6">{items}</div>
        </div>
    }
}

#[component]
pub fn TechStack(groups: Vec<TechGroup>) -> impl IntoView {
    let cards = groups
        .into_iter()
        .map(|group| view! { <StackCard group=group/> })
        .collect_view();

    view! {
        <section class="bg-black py-24">
            <div class="max-w-7xl mx-auto px-4">
                <div class="text-center mb-16">
                    <span class="inline-flex items-center justify-center px-4 py-1.5 mb-6 border border-purple-500/30 rounded-full bg-purple-500/10">
                        <span class="text-sm text-purple-300 font-medium">"Our Technology Stack"</span>
                    </span>
                    <h2 class="text-4xl md:text-5xl lg:text-7xl font-bold mb-6 bg-gradient-to-r from-white to-gray-500 bg-clip-text text-transparent">
                        "Cutting-edge TechStack"
                        <span class="block mt-2 bg-gradient-to-r from-purple-400 to-pink-400 bg-clip-text text-transparent pb-1">
                            "for Modern Solutions"
                        </span>
                    </h2>
                    <p class="text-lg text-gray-300 max-w-2xl mx-auto">
                        "We leverage the latest technologies to build scalable, secure, and high-performance applications that meet your business needs."
                    </p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">{cards}</div>
            </div>
        </section>
    }
}
