use bookrec_web::App;

fn main() {
    // Surface panics and log output in the browser console
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    leptos::mount::mount_to_body(App);
}
