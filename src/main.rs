#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("This crate targets the browser. Run `trunk serve` or `trunk build --release`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(portfolio::app::App);
}
