use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::leptos_dom::helpers::AnimationFrameRequestHandle;
use leptos::*;

use crate::parallax::{Offset, ParallaxAnimator};

type FrameSlot = Rc<Cell<Option<AnimationFrameRequestHandle>>>;

fn viewport_size() -> Option<(f64, f64)> {
    let window = window();
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((width, height))
}

/// Requests the next frame and re-arms itself for as long as the animator is
/// tracking. The pending handle is kept in `slot` so cleanup can cancel it.
fn schedule_frame(
    animator: Rc<RefCell<ParallaxAnimator>>,
    slot: FrameSlot,
    set_offset: WriteSignal<Offset>,
) {
    let next_slot = Rc::clone(&slot);
    let request = request_animation_frame_with_handle(move || {
        let position = animator.borrow_mut().tick();
        if let Some(position) = position {
            set_offset.set(position);
            schedule_frame(animator, next_slot, set_offset);
        }
    });

    match request {
        Ok(handle) => slot.set(Some(handle)),
        Err(err) => log::warn!("hero: animation frame request failed: {:?}", err),
    }
}

#[component]
pub fn Hero(#[prop(into)] brand: String) -> impl IntoView {
    let (offset, set_offset) = create_signal(Offset::ZERO);
    let (loaded, set_loaded) = create_signal(false);
    let next_section = create_node_ref::<html::Div>();

    let animator = Rc::new(RefCell::new(ParallaxAnimator::default()));
    let frame: FrameSlot = Rc::new(Cell::new(None));
    animator.borrow_mut().mount();

    let pointer = {
        let animator = Rc::clone(&animator);
        window_event_listener(ev::mousemove, move |ev| {
            if let Some((width, height)) = viewport_size() {
                animator.borrow_mut().on_pointer(
                    ev.client_x() as f64,
                    ev.client_y() as f64,
                    width,
                    height,
                );
            }
        })
    };
    schedule_frame(Rc::clone(&animator), Rc::clone(&frame), set_offset);
    request_animation_frame(move || set_loaded.set(true));
    log::debug!("hero: parallax tracking");

    on_cleanup(move || {
        pointer.remove();
        if let Some(handle) = frame.take() {
            handle.cancel();
        }
        animator.borrow_mut().unmount();
        log::debug!("hero: parallax stopped");
    });

    let scroll_to_next = move |_: ev::MouseEvent| {
        if let Some(section) = next_section.get_untracked() {
            section.scroll_into_view();
        }
    };

    let reveal = move |base: &'static str, hidden: &'static str| {
        move || {
            let state = if loaded.get() {
                "translate-y-0 opacity-100"
            } else {
                hidden
            };
            format!("{base} transform transition-all duration-1000 {state}")
        }
    };

    view! {
        <div class="relative h-screen w-full overflow-hidden bg-black">
            <div class="absolute inset-0" style:transform=move || offset.get().transform()>
                <img
                    src="/images/techbg1.jpg"
                    alt="Technology studio background"
                    class=move || {
                        if loaded.get() {
                            "absolute inset-0 h-full w-full object-cover transition-all duration-700 ease-out opacity-40 blur-0"
                        } else {
                            "absolute inset-0 h-full w-full object-cover transition-all duration-700 ease-out opacity-5 blur-sm"
                        }
                    }
                />
                <div class="absolute inset-0 bg-gradient-to-r from-black via-transparent to-black opacity-50"></div>
                <div class="absolute inset-0 bg-gradient-to-b from-black/50 via-transparent to-black"></div>
            </div>

            <div class="relative z-10 flex h-full items-center justify-center px-4">
                <div class="text-center text-white">
                    <div class=reveal("", "translate-y-4 opacity-0")>
                        <h1 class="mb-2 text-lg font-normal tracking-wide sm:text-xl text-purple-200">
                            "Discover your tech potential with " {brand}
                        </h1>
                    </div>

                    <div class=reveal("mt-6 delay-300", "translate-y-8 opacity-0")>
                        <h2 class="bg-gradient-to-r from-purple-200 via-white to-purple-200 bg-clip-text text-6xl sm:text-[120px] font-bold tracking-tight text-transparent pb-3">
                            "IT Services"
                        </h2>
                    </div>

                    <div class=reveal("delay-500", "translate-y-4 opacity-0")>
                        <p class="mx-auto mt-4 max-w-2xl text-[15px] sm:text-lg text-purple-100/90 md:text-xl px-2 md:px-0">
                            "Innovate, automate, and elevate your digital experience with cutting-edge solutions tailored to your needs."
                        </p>
                    </div>

                    <div class=reveal("mt-10 flex justify-center gap-3 md:gap-4 delay-700", "translate-y-4 opacity-0")>
                        <button class="group relative overflow-hidden rounded-full bg-[#313131] px-6 sm:px-8 py-3 font-semibold text-white transition-all duration-300 hover:scale-105">
                            <span class="relative z-10">"Get Started"</span>
                        </button>
                        <button class="rounded-full border border-purple-400/30 px-6 sm:px-8 py-3 font-semibold text-white backdrop-blur-sm transition-all duration-300 hover:bg-purple-400/10">
                            "View Pricing"
                        </button>
                    </div>
                </div>
            </div>

            <div
                class="absolute bottom-8 left-1/2 -translate-x-1/2 cursor-pointer group z-20"
                on:click=scroll_to_next
            >
                <div class="flex flex-col items-center gap-2">
                    <span class="text-purple-300/70 text-sm group-hover:text-purple-300 transition-colors duration-300">
                        "Explore More"
                    </span>
                    <span class="text-purple-400/70 text-2xl animate-bounce">"⌄"</span>
                </div>
            </div>

            <div node_ref=next_section></div>
        </div>
    }
}
