use dioxus::prelude::*;
use dioxus_router::{Navigator, use_navigator};
use services::{LessonController, NavigationSignal};
use vocab_core::model::UnitId;

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::{LearnCardVm, LessonHeaderVm, LessonScreenVm, PracticeCardVm, ReviewCardVm};

fn follow(navigator: Navigator, signal: NavigationSignal) {
    match signal {
        NavigationSignal::Back => navigator.go_back(),
        NavigationSignal::Dashboard => {
            let _ = navigator.push(Route::Dashboard {});
        }
    }
}

#[component]
pub fn LessonView(unit_id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let flow = ctx.lesson_flow();
    let pronouncer = ctx.pronouncer();
    let has_unit = UnitId::from_param(Some(unit_id.as_str())).is_some();
    let mut controller = use_signal(LessonController::new);

    // Restarts whenever the unit id prop changes; the superseded task is dropped
    // and its ticket goes stale.
    let flow_for_load = flow.clone();
    let _load = use_resource(use_reactive!(|(unit_id,)| {
        let flow = flow_for_load.clone();
        async move {
            let unit = UnitId::from_param(Some(unit_id.as_str()));
            let ticket = controller.write().begin_load(unit);
            let Some(ticket) = ticket else {
                controller.write().tear_down();
                return;
            };
            let result = flow.fetch(&ticket).await;
            controller.write().finish_load(ticket, result);
        }
    }));

    let screen = {
        let guard = controller.read();
        LessonScreenVm::from_controller(&guard, has_unit)
    };
    let header = screen.header().cloned();

    rsx! {
        div { class: "page lesson-page",
            if let Some(header) = header {
                LessonHeader {
                    header,
                    on_back: move |()| follow(navigator, controller.read().go_back()),
                }
            }
            div { class: "lesson-card",
                match screen {
                    LessonScreenVm::Loading => rsx! {
                        div { class: "lesson-status",
                            div { class: "spinner" }
                            p { "Loading lesson..." }
                        }
                    },
                    LessonScreenVm::NotFound => rsx! {
                        div { class: "lesson-status",
                            p { "Lesson not found" }
                        }
                    },
                    LessonScreenVm::Learn { card, .. } => rsx! {
                        LearnCard {
                            card,
                            on_learned: move |()| {
                                controller.write().mark_current_word_learned();
                            },
                            on_speak: move |text: String| pronouncer.speak(&text),
                        }
                    },
                    LessonScreenVm::Practice { card, .. } => rsx! {
                        PracticeCard {
                            card,
                            on_answer: move |choice: usize| {
                                controller.write().record_practice_answer(choice);
                            },
                        }
                    },
                    LessonScreenVm::Review { card, .. } => rsx! {
                        ReviewCard {
                            card,
                            on_complete: move |()| {
                                let flow = flow.clone();
                                spawn(async move {
                                    let unit = controller.write().begin_completion();
                                    let Some(unit) = unit else {
                                        return;
                                    };
                                    let report = flow.notify_completion(&unit).await;
                                    let signal = controller.write().finish_completion(&report);
                                    follow(navigator, signal);
                                });
                            },
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn LessonHeader(header: LessonHeaderVm, on_back: EventHandler<()>) -> Element {
    rsx! {
        div { class: "lesson-header",
            button {
                class: "lesson-back",
                r#type: "button",
                onclick: move |_| on_back.call(()),
                "← Back"
            }
            div { class: "lesson-title-row",
                h1 { class: "lesson-title", "{header.title}" }
                span { class: "lesson-phase", "{header.phase_label}" }
            }
            div { class: "lesson-progress",
                div { class: "lesson-progress__bar", width: "{header.progress_width}" }
            }
        }
    }
}

#[component]
fn LearnCard(
    card: LearnCardVm,
    on_learned: EventHandler<()>,
    on_speak: EventHandler<String>,
) -> Element {
    let spoken = card.word.clone();
    rsx! {
        div { class: "learn-card",
            div { class: "learn-word",
                h2 { "{card.word}" }
                button {
                    class: "learn-speak",
                    r#type: "button",
                    title: "Pronunciation",
                    onclick: move |_| on_speak.call(spoken.clone()),
                    "🔊"
                }
            }
            p { class: "learn-pronunciation", "{card.pronunciation}" }
            div { class: "learn-field learn-field--definition",
                p { class: "learn-field__label", "Definition" }
                p { class: "learn-field__value", "{card.definition}" }
            }
            div { class: "learn-field learn-field--example",
                p { class: "learn-field__label", "Example" }
                p { class: "learn-field__value", "{card.example_sentence}" }
            }
            div { class: "learn-field learn-field--pos",
                p { class: "learn-field__label", "Part of Speech" }
                p { class: "learn-field__value", "{card.part_of_speech}" }
            }
            button {
                class: "btn btn-primary",
                r#type: "button",
                onclick: move |_| on_learned.call(()),
                "I Know This Word"
            }
        }
    }
}

#[component]
fn PracticeCard(card: PracticeCardVm, on_answer: EventHandler<usize>) -> Element {
    rsx! {
        div { class: "practice-card",
            h2 { class: "practice-question", "{card.question}" }
            div { class: "practice-options",
                for (idx, option) in card.options.iter().enumerate() {
                    button {
                        key: "{idx}",
                        class: "practice-option",
                        r#type: "button",
                        onclick: move |_| on_answer.call(idx),
                        "{option}"
                    }
                }
            }
        }
    }
}

#[component]
pub fn ReviewCard(card: ReviewCardVm, on_complete: EventHandler<()>) -> Element {
    rsx! {
        div { class: "review-card",
            div { class: "review-check", "✓" }
            h2 { "Lesson Complete!" }
            p { class: "review-message", "{card.message}" }
            if let Some(note) = card.practice_note.as_ref() {
                p { class: "review-note", "{note}" }
            }
            button {
                class: "btn btn-primary",
                r#type: "button",
                disabled: card.saving,
                onclick: move |_| on_complete.call(()),
                if card.saving { "Saving..." } else { "Back to Dashboard" }
            }
        }
    }
}
