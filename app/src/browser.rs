use sycamore::{reactive::Scope, view::View, web::DomNode};
use wasm_bindgen::JsValue;

use crate::{Application, Error, Framework, Result};

/// Mounts applications into the live document of the current browser window.
#[derive(Debug, Default, Clone, Copy)]
pub struct Browser;

impl<C> Framework<C> for Browser
where
    C: FnOnce(Scope<'_>) -> View<DomNode>,
{
    type App = Application<C>;
    type Mounted = ();
    type Error = Error;

    fn create_app(&mut self, root: C) -> Result<Application<C>> {
        Ok(Application::new(root))
    }

    fn mount(&mut self, app: Application<C>, target: &str) -> Result<()> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or(Error::NoDocument)?;

        let anchor = document
            .query_selector(target)
            .map_err(|err| Error::InvalidSelector(target.to_owned(), describe(err)))?
            .ok_or_else(|| Error::TargetNotFound(target.to_owned()))?;

        // Placeholder or prerendered content is replaced, not appended to.
        anchor.set_inner_html("");

        // The root scope is leaked, the application lives as long as the page.
        sycamore::render_to(app.into_root(), &anchor);
        tracing::info!("application mounted on `{}`", target);

        Ok(())
    }
}

fn describe(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use wasm_bindgen_test::*;

    use super::*;
    use crate::{bootstrap, root, MOUNT_SELECTOR};

    wasm_bindgen_test_configure!(run_in_browser);

    fn anchor(id: &str, content: &str) -> web_sys::Element {
        let document = web_sys::window().unwrap().document().unwrap();

        let element = document.create_element("div").unwrap();
        element.set_id(id);
        element.set_inner_html(content);
        document.body().unwrap().append_child(&element).unwrap();

        element
    }

    #[wasm_bindgen_test]
    fn mounts_root_on_anchor() {
        let element = anchor("app", "placeholder");

        bootstrap(&mut Browser, root::<DomNode>, MOUNT_SELECTOR).unwrap();

        let html = element.inner_html();
        assert!(html.contains("Hello from the root component"));
        assert!(!html.contains("placeholder"));
    }

    #[wasm_bindgen_test]
    fn missing_anchor() {
        let r = bootstrap(&mut Browser, root::<DomNode>, "#missing");

        assert!(matches!(r, Err(Error::TargetNotFound(target)) if target == "#missing"));
    }

    #[wasm_bindgen_test]
    fn malformed_selector() {
        let r = bootstrap(&mut Browser, root::<DomNode>, "#");

        assert!(matches!(r, Err(Error::InvalidSelector(target, _)) if target == "#"));
    }
}
