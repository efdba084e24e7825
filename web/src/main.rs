use dioxus::prelude::*;

use ui::core::platform::Platform;
use ui::i18n::{self, Language};
use ui::views::Landing;

fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }
    tracing::info!(
        platform = Platform::current().as_str(),
        version = env!("CARGO_PKG_VERSION"),
        "starting pitcrew web"
    );

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Restores the persisted language (or the browser's) before first render.
    i18n::init();

    // Global reactive language; the header switcher updates it and every
    // section re-renders from the loader.
    let lang: Signal<Language> = use_signal(i18n::current_language);
    use_context_provider(|| lang);

    rsx! {
        Landing {}
    }
}
