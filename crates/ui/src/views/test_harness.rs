use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{InMemoryLessonApi, LessonFlowService};
use vocab_core::model::{Lesson, LessonId, UnitId, Word, WordId};

use crate::context::{UiApp, build_app_context};
use crate::platform::{PronouncerRef, SilentPronouncer};
use crate::views::{DashboardView, HomeView, LessonView};

struct TestApp {
    backend: Arc<InMemoryLessonApi>,
    default_unit: Option<UnitId>,
}

impl UiApp for TestApp {
    fn lesson_flow(&self) -> Arc<LessonFlowService> {
        Arc::new(LessonFlowService::with_backend(Arc::clone(&self.backend)))
    }

    fn pronouncer(&self) -> PronouncerRef {
        Arc::new(SilentPronouncer)
    }

    fn default_unit(&self) -> Option<UnitId> {
        self.default_unit.clone()
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Dashboard,
    Lesson(String),
}

/// Lets a test change the lesson view's `unit_id` prop after the first render.
#[derive(Clone, Default)]
struct LessonUnitHandle(Rc<Cell<Option<Signal<String>>>>);

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    lesson_unit: LessonUnitHandle,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view.clone());
    use_context_provider(|| props.lesson_unit.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    let handle = use_context::<LessonUnitHandle>();
    let initial = match &view {
        ViewKind::Lesson(unit_id) => unit_id.clone(),
        _ => String::new(),
    };
    let lesson_unit = use_signal(|| initial);
    handle.0.set(Some(lesson_unit));

    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Dashboard => rsx! { DashboardView {} },
        ViewKind::Lesson(_) => rsx! { LessonView { unit_id: lesson_unit() } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub backend: Arc<InMemoryLessonApi>,
    lesson_unit: LessonUnitHandle,
}

impl ViewHarness {
    /// Re-render the lesson view with a different `unit_id` prop.
    pub fn set_lesson_unit(&mut self, unit_id: &str) {
        let Some(mut signal) = self.lesson_unit.0.get() else {
            panic!("lesson view not rendered");
        };
        self.dom.in_runtime(|| signal.set(unit_id.to_string()));
    }

    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        for _ in 0..3 {
            let _ = tokio::time::timeout(
                std::time::Duration::from_millis(50),
                self.dom.wait_for_work(),
            )
            .await;
            self.dom.render_immediate(&mut NoOpMutations);
            self.dom.process_events();
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn sample_lesson() -> Lesson {
    let words = vec![
        Word::new(
            WordId::new("w-otter").expect("word id"),
            "otter",
            "/ˈɒtə/",
            "a river mammal",
            "The otter floated on its back.",
            "noun",
        ),
        Word::new(
            WordId::new("w-heron").expect("word id"),
            "heron",
            "/ˈhɛrən/",
            "a long-legged wading bird",
            "A heron stood in the shallows.",
            "noun",
        ),
    ];
    Lesson::new(LessonId::new("lesson-u1"), "Animals", words).expect("lesson")
}

pub fn second_lesson() -> Lesson {
    let words = vec![Word::new(
        WordId::new("w-finch").expect("word id"),
        "finch",
        "/fɪntʃ/",
        "a small seed-eating songbird",
        "A finch landed on the feeder.",
        "noun",
    )];
    Lesson::new(LessonId::new("lesson-u2"), "Birds", words).expect("lesson")
}

pub fn setup_view_harness(view: ViewKind, default_unit: Option<&str>) -> ViewHarness {
    let backend = Arc::new(
        InMemoryLessonApi::new()
            .with_lesson(UnitId::new("u1").expect("unit id"), sample_lesson())
            .with_lesson(UnitId::new("u2").expect("unit id"), second_lesson()),
    );
    let app = Arc::new(TestApp {
        backend: Arc::clone(&backend),
        default_unit: default_unit.map(|raw| UnitId::new(raw).expect("unit id")),
    });
    let lesson_unit = LessonUnitHandle::default();
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            lesson_unit: lesson_unit.clone(),
        },
    );
    ViewHarness {
        dom,
        backend,
        lesson_unit,
    }
}
