use sycamore::prelude::*;

use self::components::Hello;

mod bootstrap;
mod components;
mod consts;
mod error;

pub use self::bootstrap::{bootstrap, Application, Framework};
pub use self::consts::{INDEX_HTML, MOUNT_SELECTOR};
pub use self::error::{Error, Result};

cfg_if::cfg_if! {
    if #[cfg(feature = "browser")] {
        mod browser;
        pub use self::browser::Browser;
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "ssr")] {
        mod shell;
        pub use self::shell::Shell;
    }
}

/// Root view of the application, usable as the root component of any [`Framework`].
pub fn root<G: Html>(cx: Scope) -> View<G> {
    view! { cx, App {} }
}

#[component]
pub fn App<G: Html>(cx: Scope) -> View<G> {
    view! { cx,
        main {
            Hello {}
        }
    }
}
