use sycamore::web::DomNode;
use wasm_bindgen::UnwrapThrowExt;

pub fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    tracing::debug!("starting application");
    app::bootstrap(&mut app::Browser, app::root::<DomNode>, app::MOUNT_SELECTOR).unwrap_throw();
}
