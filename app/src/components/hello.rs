use sycamore::prelude::*;

#[component]
pub fn Hello<G: Html>(cx: Scope) -> View<G> {
    view! { cx,
        div(class="hello") {
            h1 { "Hello from the root component" }
            p { "Mounted by the application bootstrap." }
        }
    }
}
