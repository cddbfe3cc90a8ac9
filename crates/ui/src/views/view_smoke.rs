use dioxus::prelude::*;
use vocab_core::model::UnitId;

use super::lesson::ReviewCard;
use super::test_harness::{ViewKind, setup_view_harness};
use crate::vm::ReviewCardVm;

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_smoke_loads_first_word() {
    let mut harness = setup_view_harness(ViewKind::Lesson("u1".to_string()), None);
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Animals"), "missing title in {html}");
    assert!(html.contains("Learning"), "missing phase label in {html}");
    assert!(html.contains("otter"), "missing first word in {html}");
    assert!(html.contains("a river mammal"), "missing definition in {html}");
    assert!(html.contains("I Know This Word"), "missing action in {html}");
    assert_eq!(
        harness.backend.fetch_requests(),
        vec![UnitId::new("u1").unwrap()]
    );
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_smoke_unknown_unit_is_not_found() {
    let mut harness = setup_view_harness(ViewKind::Lesson("missing".to_string()), None);
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Lesson not found"), "missing not-found in {html}");
    assert!(!html.contains("Back"), "header should be hidden in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_smoke_blank_unit_skips_fetch() {
    let mut harness = setup_view_harness(ViewKind::Lesson("   ".to_string()), None);
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Lesson not found"), "missing not-found in {html}");
    assert!(harness.backend.fetch_requests().is_empty());
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_smoke_reloads_when_unit_changes() {
    let mut harness = setup_view_harness(ViewKind::Lesson("u1".to_string()), None);
    harness.rebuild();
    harness.drive_async().await;
    assert!(harness.render().contains("otter"));

    harness.set_lesson_unit("u2");
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Birds"), "missing new title in {html}");
    assert!(html.contains("finch"), "missing new word in {html}");
    assert!(!html.contains("otter"), "old session still shown in {html}");
    assert_eq!(
        harness.backend.fetch_requests(),
        vec![UnitId::new("u1").unwrap(), UnitId::new("u2").unwrap()]
    );
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_links_default_unit() {
    let mut harness = setup_view_harness(ViewKind::Home, Some("u1"));
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Start lesson u1"), "missing start link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_without_unit_shows_hint() {
    let mut harness = setup_view_harness(ViewKind::Home, None);
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("No unit selected"), "missing hint in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_view_smoke_renders() {
    let mut harness = setup_view_harness(ViewKind::Dashboard, None);
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Dashboard"), "missing heading in {html}");
}

#[allow(non_snake_case)]
fn SavingReview() -> Element {
    rsx! {
        ReviewCard {
            card: ReviewCardVm {
                message: "You've learned 2 words. Keep practicing to master them all.".to_string(),
                practice_note: None,
                saving: true,
            },
            on_complete: move |()| {},
        }
    }
}

#[test]
fn review_card_smoke_disables_button_while_saving() {
    let mut dom = VirtualDom::new(SavingReview);
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);

    assert!(html.contains("Lesson Complete!"), "missing heading in {html}");
    assert!(html.contains("You've learned 2 words"), "missing message in {html}");
    assert!(html.contains("Saving..."), "missing saving label in {html}");
    assert!(html.contains("disabled"), "button should be disabled in {html}");
}
