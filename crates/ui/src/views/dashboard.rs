use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;

/// Landing page after a finished lesson.
#[component]
pub fn DashboardView() -> Element {
    let ctx = use_context::<AppContext>();

    rsx! {
        div { class: "page dashboard-page",
            h1 { "Dashboard" }
            p { "Nice work. Pick your next unit when you are ready." }
            if let Some(unit) = ctx.default_unit() {
                Link {
                    class: "btn",
                    to: Route::Lesson { unit_id: unit.as_str().to_string() },
                    "Repeat unit {unit}"
                }
            }
        }
    }
}
