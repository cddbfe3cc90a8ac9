use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{DashboardView, HomeView, LessonView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/learn/lesson?:unit_id", LessonView)] Lesson { unit_id: String },
        #[route("/learn/dashboard", DashboardView)] Dashboard {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            TopBar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn TopBar() -> Element {
    rsx! {
        nav { class: "topbar",
            span { class: "topbar-brand", "VocabMaster" }
            ul {
                li { Link { to: Route::Home {}, "Home" } }
                li { Link { to: Route::Dashboard {}, "Dashboard" } }
            }
        }
    }
}
