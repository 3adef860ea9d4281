use crate::shared::hooks::NavbarController;
use dioxus::prelude::*;

// Reports the current offset once, then on every scroll event.
const SCROLL_LISTENER_JS: &str = r#"
    const report = () => dioxus.send(window.scrollY);
    window.addEventListener("scroll", report, { passive: true });
    report();
    await new Promise(() => {});
"#;

/// Feed window scroll offsets into the navbar for as long as the caller lives.
pub fn use_scroll_listener(mut controller: NavbarController) {
    use_future(move || async move {
        let mut listener = document::eval(SCROLL_LISTENER_JS);
        while let Ok(offset) = listener.recv::<f64>().await {
            controller.on_scroll(offset);
        }
        tracing::debug!("Scroll listener channel closed");
    });
}
