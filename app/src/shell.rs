use sycamore::{reactive::Scope, view::View, web::SsrNode};

use crate::{consts, Application, Error, Framework, Result};

/// Mounts applications into an HTML document template by rendering them to a string.
///
/// Anchors in the template are comments of the form `<!-- %name% -->`,
/// addressed with the id selector `#name`.
///
/// The output is static markup, not meant for hydration. The browser host
/// replaces the anchor's content when it mounts.
#[derive(Debug, Clone)]
pub struct Shell {
    template: String,
}

impl Shell {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// Shell of the bundled `index.html`.
    pub fn index() -> Self {
        Self::new(consts::INDEX_HTML)
    }
}

impl<C> Framework<C> for Shell
where
    C: FnOnce(Scope<'_>) -> View<SsrNode>,
{
    type App = Application<C>;
    type Mounted = String;
    type Error = Error;

    fn create_app(&mut self, root: C) -> Result<Application<C>> {
        Ok(Application::new(root))
    }

    fn mount(&mut self, app: Application<C>, target: &str) -> Result<String> {
        let marker = anchor_marker(target)?;
        if !self.template.contains(&marker) {
            return Err(Error::TargetNotFound(target.to_owned()));
        }

        let html = sycamore::render_to_string(app.into_root());
        tracing::debug!("rendered {} bytes into `{}`", html.len(), target);

        Ok(self.template.replacen(&marker, &html, 1))
    }
}

fn anchor_marker(target: &str) -> Result<String> {
    let id = target
        .strip_prefix('#')
        .filter(|id| {
            !id.is_empty()
                && id
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        })
        .ok_or_else(|| Error::UnsupportedSelector(target.to_owned()))?;

    Ok(format!("<!-- %{id}% -->"))
}
