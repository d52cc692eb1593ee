use leptos::{document, mount_to, view};
use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::domain::logging::{LogComponent, get_logger};
use crate::infrastructure::{FmpHttpClient, ProviderConfig};

pub mod app;
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod store;

/// Installs the panic hook, console logger and browser clock, then mounts the view
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    domain::logging::init_logger(Box::new(infrastructure::ConsoleLogger::for_build()));
    domain::logging::init_time_provider(Box::new(infrastructure::BrowserTimeProvider));

    get_logger().info(LogComponent::Presentation("Initialize"), "🚀 Income statement explorer initialized");
    mount();
}

/// Mounts the explorer into the page's `#app` element
pub fn mount() {
    let Some(root) = document().get_element_by_id("app").and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        get_logger().warn(LogComponent::Presentation("Initialize"), "⚠️ No #app element, nothing mounted");
        return;
    };
    mount_to(root, || view! { <App repository=FmpHttpClient::new(ProviderConfig::default()) /> });
}
