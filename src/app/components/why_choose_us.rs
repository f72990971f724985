use leptos::*;

use crate::constants::CARD_GLOW_RADIUS_PX;
use crate::content::{Highlight, HighlightIcon};
use crate::pointer::relative_offset;

fn icon_glyph(icon: HighlightIcon) -> &'static str {
    match icon {
        HighlightIcon::Code => "</>",
        HighlightIcon::Gauge => "◔",
        HighlightIcon::Users => "👥",
    }
}

/// Border glow that follows the pointer across the whole window.
#[component]
fn CardEffect(children: Children) -> impl IntoView {
    let border = create_node_ref::<html::Div>();
    let (glow, set_glow) = create_signal((0.0_f64, 0.0_f64));

    let listener = window_event_listener(ev::mousemove, move |ev| {
        if let Some(el) = border.get_untracked() {
            let rect = el.get_bounding_client_rect();
            set_glow.set(relative_offset(
                (ev.client_x() as f64, ev.client_y() as f64),
                (rect.x(), rect.y()),
            ));
        }
    });
    on_cleanup(move || listener.remove());

    let mask = move || {
        let (x, y) = glow.get();
        let r = CARD_GLOW_RADIUS_PX;
        let gradient = format!("radial-gradient({r}px {r}px at {x}px {y}px, black, transparent)");
        format!("-webkit-mask-image: {gradient}; mask-image: {gradient};")
    };

    view! {
        <div node_ref=border class="relative h-full">
            <div class="absolute inset-0 rounded-2xl border-2 border-blue-400/30" style=mask></div>
            {children()}
        </div>
    }
}

#[component]
pub fn WhyChooseUs(highlights: Vec<Highlight>) -> impl IntoView {
    let (hovered, set_hovered) = create_signal(None::<usize>);

    let cards = highlights
        .into_iter()
        .enumerate()
        .map(|(index, stat)| {
            let is_hovered = move || hovered.get() == Some(index);
            let Highlight {
                number,
                title,
                description,
                icon,
                gradient,
                bg_gradient,
                preview,
            } = stat;
            let number_class = format!(
                "text-5xl font-bold bg-gradient-to-r {gradient} bg-clip-text text-transparent transition-all duration-500"
            );
            let icon_class = format!(
                "inline-flex items-center justify-center p-3 rounded-xl mb-6 bg-gradient-to-r {gradient} text-xl font-mono"
            );
            let glow_class = move || {
                let opacity = if is_hovered() { "opacity-20" } else { "opacity-0" };
                format!("absolute inset-0 rounded-2xl transition-opacity duration-500 bg-gradient-to-r {gradient} -z-10 blur-lg {opacity}")
            };
            let panel_class = move || {
                let background = if is_hovered() {
                    format!("bg-gradient-to-b {bg_gradient}")
                } else {
                    "bg-white/5".to_string()
                };
                format!("relative h-full p-8 rounded-2xl border border-blue-500/10 backdrop-blur-xl transition-all duration-500 z-10 {background}")
            };
            let preview_alt = title.clone();

            view! {
                <div
                    class="relative group"
                    on:mouseenter=move |_| set_hovered.set(Some(index))
                    on:mouseleave=move |_| set_hovered.set(None)
                >
                    <div class=move || {
                        if is_hovered() {
                            "absolute left-1/2 -translate-x-1/2 -top-20 w-40 h-40 transform transition-all duration-700 ease-in-out z-20 opacity-100 translate-y-0 scale-105"
                        } else {
                            "absolute left-1/2 -translate-x-1/2 -top-20 w-40 h-40 transform transition-all duration-700 ease-in-out z-20 opacity-0 translate-y-8 scale-95"
                        }
                    }>
                        <img src=preview alt=preview_alt class="w-full h-full object-cover rounded-xl shadow-xl"/>
                    </div>

                    <CardEffect>
                        <div class=panel_class>
                            <div class=icon_class>{icon_glyph(icon)}</div>
                            <div class="space-y-4">
                                <h3 class=number_class>{number}</h3>
                                <h4 class="text-xl font-semibold text-white">{title}</h4>
                                <p class="text-gray-400 leading-relaxed">{description}</p>
                                <div class=move || {
                                    if is_hovered() {
                                        "flex items-center gap-2 text-sm font-medium transition-all duration-300 text-white"
                                    } else {
                                        "flex items-center gap-2 text-sm font-medium transition-all duration-300 text-gray-500"
                                    }
                                }>
                                    "Learn More →"
                                </div>
                            </div>
                            <div class=glow_class></div>
                        </div>
                    </CardEffect>
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="relative bg-gradient-to-b from-purple-500/5 via-transparent to-transparent py-20 lg:py-24 mb-12 px-4 overflow-hidden">
            <div class="max-w-7xl mx-auto relative">
                <div class="text-center mb-14">
                    <div class="inline-flex items-center justify-center px-4 py-1.5 mb-6 border border-purple-500/30 rounded-full bg-purple-500/10">
                        <span class="text-sm text-purple-300 font-medium">"Why Choose Us"</span>
                    </div>
                    <h2 class="text-4xl md:text-5xl lg:text-7xl font-bold mb-4">
                        <span class="bg-gradient-to-r from-white to-gray-500 bg-clip-text text-transparent">
                            "Transform Your Business"
                        </span>
                        <span class="block mt-2 bg-gradient-to-r from-purple-400 to-pink-400 bg-clip-text text-transparent pb-2">
                            "With Technology"
                        </span>
                    </h2>
                    <p class="text-lg text-gray-400 max-w-2xl mx-auto">
                        "Partner with us to build scalable, innovative solutions that drive your business forward. Our expertise in cutting-edge technologies ensures your success."
                    </p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-8 px-4">{cards}</div>
            </div>
        </section>
    }
}
