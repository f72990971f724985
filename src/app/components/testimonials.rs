use leptos::*;

use crate::content::Testimonial;

#[component]
fn TestimonialCard(testimonial: Testimonial) -> impl IntoView {
    let stars = (0..testimonial.rating)
        .map(|_| view! { <span class="text-yellow-400">"★"</span> })
        .collect_view();

    view! {
        <div class="relative p-6 rounded-2xl bg-gradient-to-br from-white/5 to-white/0 border border-white/10 backdrop-blur-sm">
            <span class="absolute top-6 right-6 text-4xl text-purple-500/20">"“"</span>
            <div class="space-y-4">
                <div class="flex items-center gap-3">
                    <div class="relative w-12 h-12 rounded-full overflow-hidden">
                        <img src=testimonial.image alt=testimonial.name.clone() class="w-full h-full object-cover"/>
                    </div>
                    <div>
                        <h4 class="text-lg font-semibold text-white">{testimonial.name}</h4>
                        <p class="text-sm text-gray-400">{testimonial.role}</p>
                    </div>
                </div>
                <div class="flex gap-1">{stars}</div>
                <p class="text-gray-300 leading-relaxed">{testimonial.content}</p>
                <div class="pt-4 border-t border-white/10">
                    <p class="text-sm text-purple-400">"Technologies: " {testimonial.tech}</p>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn Testimonials(testimonials: Vec<Testimonial>) -> impl IntoView {
    view! {
        <section class="bg-black py-8 px-4 mb-16">
            <div class="max-w-7xl mx-auto">
                <div class="text-center mb-12">
                    <span class="inline-block px-4 py-1.5 bg-purple-500/10 border border-purple-500/20 rounded-full">
                        <span class="text-base text-purple-300 font-medium">"Client Success Stories"</span>
                    </span>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6 px-3 md:px-0">
                    {testimonials
                        .into_iter()
                        .map(|testimonial| view! { <TestimonialCard testimonial=testimonial/> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
