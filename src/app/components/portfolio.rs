use leptos::*;

use crate::content::Project;
use crate::portfolio::{Portfolio, Selection};

const FILTER_ACTIVE: &str = "px-4 py-2 rounded-full text-sm font-medium transition-all duration-300 bg-purple-950 text-white";
const FILTER_IDLE: &str = "px-4 py-2 rounded-full text-sm font-medium transition-all duration-300 bg-white/10 text-gray-300 hover:bg-white/20";

fn filter_class(active: bool) -> &'static str {
    if active {
        FILTER_ACTIVE
    } else {
        FILTER_IDLE
    }
}

#[component]
fn FilterButton(
    #[prop(into)] label: String,
    category: Option<String>,
    selection: RwSignal<Selection>,
) -> impl IntoView {
    let target = category.clone();
    let active = move || selection.with(|s| s.filter() == category.as_deref());

    view! {
        <button
            class=move || filter_class(active())
            on:click=move |_| {
                log::debug!("portfolio: filter {:?}", target);
                selection.update(|s| s.set_filter(target.as_deref()));
            }
        >
            {label}
        </button>
    }
}

#[component]
fn ProjectCard(project: Project, #[prop(into)] on_select: Callback<Project>) -> impl IntoView {
    let chosen = project.clone();

    view! {
        <div
            class="group relative bg-gradient-to-br from-slate-900/40 to-slate-900 rounded-2xl overflow-hidden cursor-pointer transition-all duration-500 hover:scale-105"
            on:click=move |_| on_select.call(chosen.clone())
        >
            <div class="h-96">
                <div class="absolute inset-0 overflow-hidden">
                    <img
                        src=project.img_url.clone()
                        alt=project.name.clone()
                        class="w-full h-full object-cover object-top transition-transform duration-700 group-hover:scale-110 brightness-75 group-hover:brightness-90"
                    />
                    <div class="absolute inset-0 bg-gradient-to-t from-black/80 via-black/30 to-transparent opacity-70"></div>
                </div>
                <div class="absolute inset-x-0 bottom-0 p-6">
                    <div class="relative z-10 backdrop-blur-md bg-black/40 p-4 rounded-xl border border-white/10">
                        <h3 class="text-2xl font-bold text-white mb-0 transition-all duration-300 group-hover:-translate-y-2">
                            {project.name.clone()}
                        </h3>
                        <div class="flex items-center gap-2 text-purple-400 h-0 opacity-0 group-hover:h-6 group-hover:opacity-100 transition-all duration-300 overflow-hidden">
                            <span>{project.category.clone()}</span>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Modal with every attribute of one project. Clicking the backdrop or the
/// close button closes it; clicks inside the panel do not.
#[component]
fn ProjectDetail(project: Project, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let technologies = project
        .technologies
        .iter()
        .map(|tech| view! { <span class="px-3 py-1 bg-white/10 text-white rounded-full text-sm">{tech.clone()}</span> })
        .collect_view();
    let details = project
        .details
        .iter()
        .map(|detail| view! { <li class="text-gray-300 list-disc">{detail.clone()}</li> })
        .collect_view();

    view! {
        <div
            class="fixed inset-0 bg-black/95 backdrop-blur-xl z-50 flex items-center justify-center p-4"
            on:click=move |_| on_close.call(())
        >
            <div
                class="relative w-full max-w-5xl bg-gradient-to-br from-blue-900/20 to-black rounded-2xl overflow-hidden shadow-2xl border border-blue-900/30"
                on:click=|ev| ev.stop_propagation()
            >
                <button
                    type="button"
                    class="absolute top-6 right-6 z-20 p-2 rounded-full bg-white/10 hover:bg-white/20 transition-colors text-white"
                    aria-label="Close"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_close.call(());
                    }
                >
                    "✕"
                </button>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-0 relative">
                    <div class="relative h-[600px] overflow-hidden">
                        <img
                            src=project.img_url.clone()
                            alt=project.name.clone()
                            class="w-full h-full object-cover object-top"
                        />
                        <div class="absolute inset-0 bg-gradient-to-t from-black/80 via-black/30 to-transparent"></div>
                    </div>

                    <div class="p-8 pt-16 bg-gradient-to-br from-blue-900/10 to-black/50 space-y-6">
                        <div>
                            <span class="inline-block px-3 py-1 bg-purple-500/10 text-purple-300 rounded-full mb-4">
                                {project.category.clone()}
                            </span>
                            <h2 class="text-4xl font-bold text-white mb-4">{project.name.clone()}</h2>
                            <p class="text-gray-300 text-lg leading-relaxed mb-6">{project.description.clone()}</p>
                        </div>

                        <div>
                            <h3 class="text-xl font-semibold text-purple-400 mb-4">"Technologies"</h3>
                            <div class="flex flex-wrap gap-2">{technologies}</div>
                        </div>

                        <div>
                            <h3 class="text-xl font-semibold text-purple-400 mb-4">"Key Highlights"</h3>
                            <ul class="space-y-2 pl-5">{details}</ul>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn ProjectPortfolio(projects: Vec<Project>) -> impl IntoView {
    let portfolio = store_value(Portfolio::new(projects));
    let selection = create_rw_signal(Selection::default());

    let visible = create_memo(move |_| {
        selection.with(|s| {
            portfolio.with_value(|p| p.visible(s.filter()).into_iter().cloned().collect::<Vec<_>>())
        })
    });
    let selected = create_memo(move |_| {
        selection.with(|s| portfolio.with_value(|p| s.selected(p).cloned()))
    });

    let select = move |project: Project| {
        log::debug!("portfolio: open project {}", project.id);
        selection.update(|s| s.select_project(Some(&project)));
    };
    let close = move |_: ()| selection.update(|s| s.select_project(None));

    let category_buttons = portfolio
        .with_value(|p| p.categories().to_vec())
        .into_iter()
        .map(|category| {
            view! { <FilterButton label=category.clone() category=Some(category) selection=selection/> }
        })
        .collect_view();

    view! {
        <div class="min-h-screen bg-gradient-to-br from-black via-black to-blue-900/10 py-8 px-4 mb-20">
            <div class="max-w-7xl mx-auto">
                <div class="text-center mb-8 md:mb-12">
                    <div class="inline-flex items-center justify-center px-4 py-1.5 mb-6 border border-purple-500/30 rounded-full bg-purple-500/10">
                        <span class="text-sm text-purple-300 font-medium">"Our Development"</span>
                    </div>
                    <h1 class="text-5xl md:text-6xl lg:text-7xl font-bold text-white mb-6">
                        <span class="bg-gradient-to-r from-white to-gray-500 bg-clip-text text-transparent">
                            "Project Portfolio"
                        </span>
                    </h1>
                    <p class="text-gray-300 text-base md:text-lg max-w-2xl mx-auto px-2 md:px-0">
                        "Explore innovative solutions that push the boundaries of technology, delivering transformative digital experiences across web, mobile, and enterprise platforms."
                    </p>
                </div>

                <div class="flex flex-wrap justify-center gap-3 md:gap-4 mb-10 md:mb-12">
                    <FilterButton label="All Projects" category=None selection=selection/>
                    {category_buttons}
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-8 md:gap-6 px-6 md:px-0">
                    <For
                        each=move || visible.get()
                        key=|project| project.id
                        children=move |project| view! { <ProjectCard project=project on_select=select/> }
                    />
                </div>
            </div>

            {move || selected.get().map(|project| view! { <ProjectDetail project=project on_close=close/> })}
        </div>
    }
}
