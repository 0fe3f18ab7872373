use services::StubStudyApi;
use storage::repository::{TOKEN_KEY, TokenRepository};
use study_core::model::{FlashcardItem, GeneratedContent, QuizItem};

use super::test_harness::{
    TEST_EMAIL, TEST_PASSWORD, ViewKind, setup_routed_harness, setup_view_harness,
    setup_view_harness_with,
};
use crate::context::StudyMaterial;

fn quiz_material() -> StudyMaterial {
    let questions = ["Carbon dioxide", "Oxygen", "Chlorophyll"]
        .iter()
        .map(|answer| QuizItem {
            question: format!("Which one is {answer}?"),
            options: vec![(*answer).to_string(), "Helium".to_string()],
            answer: (*answer).to_string(),
        })
        .collect();
    StudyMaterial {
        topic: "Photosynthesis".into(),
        content: GeneratedContent::Quiz { questions },
    }
}

fn flashcard_material() -> StudyMaterial {
    StudyMaterial {
        topic: "Cells".into(),
        content: GeneratedContent::Flashcards {
            flashcards: vec![
                FlashcardItem {
                    front: "Mitochondria".into(),
                    back: "Powerhouse of the cell".into(),
                },
                FlashcardItem {
                    front: "Ribosome".into(),
                    back: "Builds proteins".into(),
                },
            ],
        },
    }
}

#[tokio::test(flavor = "current_thread")]
async fn landing_view_invites_anonymous_users_to_sign_up() {
    let mut harness = setup_view_harness(ViewKind::Landing).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Start for Free"), "missing cta in {html}");
    assert!(html.contains("AI-Powered Quizzes"), "missing features in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn landing_view_points_signed_in_users_to_dashboard() {
    let mut harness =
        setup_view_harness_with(ViewKind::Landing, StubStudyApi::new(), None, true).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Go to Dashboard"), "missing cta in {html}");
    assert!(harness.repo.load_token().await.unwrap().is_some());
    assert!(harness.repo.raw_value(TOKEN_KEY).unwrap().is_some());
}

#[tokio::test(flavor = "current_thread")]
async fn login_view_smoke_renders_form() {
    let mut harness = setup_view_harness(ViewKind::Login).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("LOGIN NOW"), "missing submit in {html}");
    assert!(html.contains("Register"), "missing register link in {html}");
    assert!(!html.contains("form-error"), "unexpected error in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn register_view_smoke_renders_form() {
    let mut harness = setup_view_harness(ViewKind::Register).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("REGISTER NOW"), "missing submit in {html}");
    assert!(html.contains("At least 8 characters"), "missing hint in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_view_smoke_renders_generators() {
    let mut harness =
        setup_view_harness_with(ViewKind::Dashboard, StubStudyApi::new(), None, true).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("What would you like to study today?"), "{html}");
    assert!(html.contains("Create Quiz"), "missing quiz button in {html}");
    assert!(html.contains("Create Flashcards"), "missing deck button in {html}");
    assert!(html.contains("Ask Assistant"), "missing assistant button in {html}");
    assert!(harness.api.calls().len() == 1, "only the login call expected");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_first_question() {
    let mut harness = setup_view_harness_with(
        ViewKind::Quiz,
        StubStudyApi::new(),
        Some(quiz_material()),
        true,
    )
    .await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Topic: Photosynthesis"), "missing topic in {html}");
    assert!(html.contains("Question 1 of 3"), "missing progress in {html}");
    assert!(html.contains("Which one is Carbon dioxide?"), "missing question in {html}");
    assert!(!html.contains("Next Question"), "next shown before answering in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_without_content_leaves_for_dashboard() {
    let mut harness =
        setup_view_harness_with(ViewKind::Quiz, StubStudyApi::new(), None, true).await;
    harness.rebuild();
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("navigated:/dashboard"), "no redirect in {html}");
    assert!(!html.contains("Question 1"), "quiz rendered in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn flashcards_view_without_content_leaves_for_dashboard() {
    let mut harness =
        setup_view_harness_with(ViewKind::Flashcards, StubStudyApi::new(), None, true).await;
    harness.rebuild();
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("navigated:/dashboard"), "no redirect in {html}");
    assert!(!html.contains("Card 1"), "deck rendered in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_ignores_flashcard_content() {
    let mut harness = setup_view_harness_with(
        ViewKind::Quiz,
        StubStudyApi::new(),
        Some(flashcard_material()),
        true,
    )
    .await;
    harness.rebuild();
    let html = harness.render();
    assert!(!html.contains("Mitochondria"), "deck rendered as quiz in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn flashcards_view_smoke_shows_front_only() {
    let mut harness = setup_view_harness_with(
        ViewKind::Flashcards,
        StubStudyApi::new(),
        Some(flashcard_material()),
        true,
    )
    .await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Card 1 of 2"), "missing counter in {html}");
    assert!(html.contains("Mitochondria"), "missing front in {html}");
    assert!(!html.contains("Powerhouse of the cell"), "back visible in {html}");
    assert!(html.contains("Back to Dashboard"), "missing back link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn assistant_view_smoke_renders_greeting() {
    let mut harness =
        setup_view_harness_with(ViewKind::Assistant, StubStudyApi::new(), None, true).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Hello!"), "missing greeting in {html}");
    assert!(html.contains("studies&#32;today?"), "missing greeting in {html}");
    assert!(html.contains("Send"), "missing send button in {html}");
    assert!(!html.contains("Typing..."), "unexpected pending state in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn anonymous_dashboard_visit_lands_on_login() {
    let mut harness = setup_routed_harness("/dashboard", false).await;
    harness.rebuild();
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("LOGIN NOW"), "login form missing in {html}");
    assert!(
        !html.contains("What would you like to study today?"),
        "protected view rendered in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn anonymous_assistant_visit_lands_on_login() {
    let mut harness = setup_routed_harness("/dashboard/assistant", false).await;
    harness.rebuild();
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("LOGIN NOW"), "login form missing in {html}");
    assert!(!html.contains("Hello!"), "assistant rendered in {html}");
    assert!(harness.api.calls().is_empty(), "no backend call expected");
}

#[tokio::test(flavor = "current_thread")]
async fn signed_in_dashboard_visit_renders_dashboard() {
    let mut harness = setup_routed_harness("/dashboard", true).await;
    harness.rebuild();
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("What would you like to study today?"), "{html}");
    assert!(html.contains("Logout"), "missing logout in {html}");
    assert!(!html.contains("LOGIN NOW"), "redirected anyway in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_route_without_content_returns_to_dashboard() {
    let mut harness = setup_routed_harness("/dashboard/quiz", true).await;
    harness.rebuild();
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("What would you like to study today?"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn top_nav_follows_session_changes() {
    let mut harness = setup_routed_harness("/", false).await;
    harness.rebuild();
    harness.settle().await;
    assert!(harness.render().contains("Get Started"));

    harness
        .services
        .session()
        .login(TEST_EMAIL, TEST_PASSWORD)
        .await
        .unwrap();
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Logout"), "nav not updated after login in {html}");

    harness.services.session().logout().await;
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Get Started"), "nav not updated after logout in {html}");
    assert!(!html.contains("Logout"), "stale logout in {html}");
}
