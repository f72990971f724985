use leptos::*;

use crate::pointer::relative_percent;

const COMMITMENTS: [(&str, &str); 3] = [
    ("Free Consultation", "Discuss your project goals"),
    ("Custom Solutions", "Tailored to your needs"),
    ("Innovative Approach", "Cutting-edge technologies"),
];

#[component]
pub fn ProjectStartCta() -> impl IntoView {
    let area = create_node_ref::<html::Div>();
    let (glow, set_glow) = create_signal((0.0_f64, 0.0_f64));
    let (hovered, set_hovered) = create_signal(false);

    let track_pointer = move |ev: ev::MouseEvent| {
        let Some(el) = area.get_untracked() else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        set_glow.set((
            relative_percent(ev.client_x() as f64, rect.left(), rect.width()),
            relative_percent(ev.client_y() as f64, rect.top(), rect.height()),
        ));
    };

    let background = move || {
        let (x, y) = glow.get();
        format!("background: radial-gradient(circle at {x}% {y}%, rgba(147, 51, 234, 0.3), transparent 30%);")
    };

    let commitments = COMMITMENTS
        .iter()
        .map(|(label, description)| {
            view! {
                <div class="text-center group cursor-default">
                    <div class="text-xl font-semibold text-white mb-2 group-hover:text-purple-400 transition-colors">
                        {*label}
                    </div>
                    <div class="text-sm text-zinc-400 group-hover:text-zinc-300 transition-colors">
                        {*description}
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="relative overflow-hidden bg-black">
            <div class="absolute inset-0 pointer-events-none" style=background></div>

            <div node_ref=area class="relative py-32 px-6" on:mousemove=track_pointer>
                <div class="max-w-7xl mx-auto">
                    <div class="relative z-10 flex flex-col items-center text-center space-y-8">
                        <div class="inline-flex items-center px-3 py-1 rounded-full border border-purple-500/30 bg-purple-500/10">
                            <span class="text-purple-300 text-sm">"Let's Build Something Amazing"</span>
                        </div>

                        <div class="space-y-6 max-w-4xl">
                            <h2 class="text-4xl md:text-6xl lg:text-7xl font-bold text-white leading-tight">
                                "Ready to Turn Your"
                                <span class="block bg-gradient-to-r from-purple-400 to-pink-400 bg-clip-text text-transparent">
                                    "Project Vision into Reality"
                                </span>
                            </h2>
                            <p class="text-zinc-400 text-lg md:text-xl max-w-2xl mx-auto leading-relaxed">
                                "We're excited to hear about your project. Whether it's a groundbreaking tech solution or a transformative digital experience, our team is ready to bring your ideas to life."
                            </p>
                        </div>

                        <div
                            class="relative group"
                            on:mouseenter=move |_| set_hovered.set(true)
                            on:mouseleave=move |_| set_hovered.set(false)
                        >
                            <div
                                class="absolute inset-0 bg-gradient-to-r from-purple-600 via-indigo-600 to-purple-600 rounded-xl blur-xl transition-opacity duration-500"
                                class=("opacity-100", move || hovered.get())
                                class=("opacity-0", move || !hovered.get())
                            ></div>
                            <button class=move || {
                                if hovered.get() {
                                    "relative flex items-center gap-3 px-8 py-4 rounded-xl text-lg font-medium transition-all duration-300 bg-gradient-to-r from-purple-600 via-purple-500 to-purple-600 text-white transform -translate-y-1"
                                } else {
                                    "relative flex items-center gap-3 px-8 py-4 rounded-xl text-lg font-medium transition-all duration-300 bg-white text-purple-900 shadow-lg"
                                }
                            }>
                                "Start Your Project"
                                <span class=move || if hovered.get() { "transition-transform duration-300 rotate-45" } else { "transition-transform duration-300" }>
                                    "↗"
                                </span>
                            </button>
                        </div>

                        <div class="grid grid-cols-3 gap-8 mt-16 pt-8 border-t border-purple-500/20">
                            {commitments}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
