use abresh_site::app::App;
use abresh_site::content::Content;
use anyhow::{Context, Result};
use leptos::*;

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    console_log::init_with_level(level).ok();

    if let Err(err) = run() {
        log::error!("{:?}", err);
    }
}

fn run() -> Result<()> {
    let content = Content::load().context("Failed to load site content")?;
    log::info!("Mounting {} landing page", content.site.brand);
    mount_to_body(move || view! { <App content=content/> });
    Ok(())
}
