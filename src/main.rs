#[cfg(feature = "csr")]
fn main() {
    use portfolio_site::app::App;

    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("error initializing logger");
    log::info!("mounting portfolio, built {}", env!("BUILD_TIME"));

    leptos::mount::mount_to_body(App);
}

#[cfg(not(feature = "csr"))]
pub fn main() {
    // no native entry point; the site is bundled for the browser by Trunk
    // with the `csr` feature enabled (see index.html)
}
