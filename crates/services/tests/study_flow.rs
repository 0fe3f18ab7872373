use std::sync::Arc;

use services::{AppServices, StubCall, StubStudyApi, StudyApi};
use storage::repository::{InMemoryRepository, Storage, TOKEN_KEY, TokenRepository};
use study_core::model::{
    CHAT_FALLBACK_REPLY, ChatRole, ContentType, GeneratedContent, QuizItem, QuizSession,
};
use study_core::time::fixed_clock;

fn photosynthesis_quiz() -> GeneratedContent {
    let item = |question: &str, answer: &str| QuizItem {
        question: question.to_string(),
        options: vec![
            answer.to_string(),
            "Nitrogen".to_string(),
            "Helium".to_string(),
        ],
        answer: answer.to_string(),
    };
    GeneratedContent::Quiz {
        questions: vec![
            item("Which gas do plants absorb?", "Carbon dioxide"),
            item("Which gas do plants release?", "Oxygen"),
            item("Which pigment captures light?", "Chlorophyll"),
        ],
    }
}

fn services_with(api: &Arc<StubStudyApi>, repo: &InMemoryRepository) -> AppServices {
    let storage = Storage {
        tokens: Arc::new(repo.clone()),
    };
    let api: Arc<dyn StudyApi> = api.clone();
    AppServices::from_parts(api, &storage, fixed_clock())
}

#[tokio::test]
async fn login_generate_and_complete_quiz() {
    let api = Arc::new(
        StubStudyApi::new()
            .with_account("ada@example.com", "password1")
            .with_content(photosynthesis_quiz()),
    );
    let repo = InMemoryRepository::new();
    let services = services_with(&api, &repo);

    let token = services
        .session()
        .login("ada@example.com", "password1")
        .await
        .unwrap();
    let content = services
        .content()
        .generate("Photosynthesis", ContentType::Quiz)
        .await
        .unwrap();

    let GeneratedContent::Quiz { questions } = content else {
        panic!("expected a quiz");
    };
    let mut quiz = QuizSession::new(questions).unwrap();
    while !quiz.is_finished() {
        let answer = quiz.current_item().unwrap().answer.clone();
        quiz.select_option(&answer);
        quiz.advance().unwrap();
    }

    let result = quiz.result().unwrap();
    assert_eq!((result.score, result.total), (3, 3));
    assert_eq!(result.percentage(), 100);

    let generate_bearer = api.calls().into_iter().find_map(|call| match call {
        StubCall::Generate { bearer, .. } => Some(bearer),
        _ => None,
    });
    assert_eq!(generate_bearer, Some(Some(token.bearer_header())));
}

#[tokio::test]
async fn logout_then_request_carries_no_token() {
    let api = Arc::new(StubStudyApi::new().with_account("ada@example.com", "password1"));
    let repo = InMemoryRepository::new();
    let services = services_with(&api, &repo);

    services
        .session()
        .login("ada@example.com", "password1")
        .await
        .unwrap();
    services.session().logout().await;

    assert_eq!(repo.load_token().await.unwrap(), None);
    assert_eq!(repo.raw_value(TOKEN_KEY).unwrap(), None);

    let mut chat = services.new_chat_session();
    chat.send("Anyone there?").await;
    let chat_bearer = api.calls().into_iter().find_map(|call| match call {
        StubCall::Chat { bearer, .. } => Some(bearer),
        _ => None,
    });
    assert_eq!(chat_bearer, Some(None));
}

#[tokio::test]
async fn restored_session_survives_restart() {
    let api = Arc::new(StubStudyApi::new().with_account("ada@example.com", "password1"));
    let repo = InMemoryRepository::new();
    let token = services_with(&api, &repo)
        .session()
        .login("ada@example.com", "password1")
        .await
        .unwrap();

    let fresh_api = Arc::new(StubStudyApi::new());
    let restarted = services_with(&fresh_api, &repo);
    assert!(!restarted.session().is_authenticated());

    restarted.session().restore().await;

    assert_eq!(restarted.session().token(), Some(token.clone()));
    assert_eq!(fresh_api.bearer(), Some(token.bearer_header()));
}

#[tokio::test]
async fn failing_chat_appends_user_and_fallback() {
    let api = Arc::new(StubStudyApi::new().offline());
    let repo = InMemoryRepository::new();
    let services = services_with(&api, &repo);

    let mut chat = services.new_chat_session();
    let before = chat.transcript().len();
    chat.send("Hi").await;

    let added = &chat.transcript().entries()[before..];
    assert_eq!(added.len(), 2);
    assert_eq!(added[0].role, ChatRole::User);
    assert_eq!(added[0].content, "Hi");
    assert_eq!(added[1].role, ChatRole::Assistant);
    assert_eq!(added[1].content, CHAT_FALLBACK_REPLY);
}

#[tokio::test]
async fn network_failure_keeps_signed_out_state() {
    let api = Arc::new(StubStudyApi::new().with_account("ada@example.com", "password1"));
    api.set_offline(true);
    let repo = InMemoryRepository::new();
    let services = services_with(&api, &repo);

    let err = services
        .session()
        .login("ada@example.com", "password1")
        .await
        .unwrap_err();

    assert!(!err.is_auth());
    assert_eq!(err.user_message(), "Something went wrong. Please try again.");
    assert!(!services.session().is_authenticated());
}
