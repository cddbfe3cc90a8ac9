use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let default_unit = ctx.default_unit();

    rsx! {
        div { class: "page home-page",
            h1 { "Build your vocabulary, one unit at a time" }
            p { class: "home-lead",
                "Learn each word, check yourself with a quick practice round, then review what you covered."
            }
            match default_unit {
                Some(unit) => rsx! {
                    Link {
                        class: "btn btn-primary",
                        to: Route::Lesson { unit_id: unit.as_str().to_string() },
                        "Start lesson {unit}"
                    }
                },
                None => rsx! {
                    p { class: "home-hint", "No unit selected. Launch with --unit <id> to start a lesson." }
                },
            }
        }
    }
}
