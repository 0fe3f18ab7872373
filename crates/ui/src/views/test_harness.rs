use std::rc::Rc;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_history::{History, MemoryHistory};
use dioxus_router::{Routable, Router};
use services::{AppServices, StubStudyApi, StudyApi};
use storage::repository::{InMemoryRepository, Storage};
use study_core::time::fixed_clock;

use crate::context::{StudyMaterial, UiApp, build_app_context, use_auth_state};
use crate::routes::Route;
use crate::views::{
    AssistantView, DashboardView, FlashcardsView, LandingView, LoginView, QuizView, RegisterView,
};

pub const TEST_EMAIL: &str = "ada@example.com";
pub const TEST_PASSWORD: &str = "password1";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewKind {
    Landing,
    Login,
    Register,
    Dashboard,
    Quiz,
    Flashcards,
    Assistant,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<dyn UiApp>,
    view: ViewKind,
    material: Option<StudyMaterial>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app = Arc::clone(&props.app);
    let material = props.material.clone();
    let ctx = use_context_provider(move || {
        let ctx = build_app_context(&app);
        if let Some(material) = material {
            ctx.stash_content(&material.topic, material.content);
        }
        ctx
    });
    let auth = use_auth_state(&ctx);
    use_context_provider(|| auth);
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Props, Clone)]
struct RoutedHarnessProps {
    app: Arc<dyn UiApp>,
    path: String,
}

impl PartialEq for RoutedHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

/// Mounts the real route table, starting at `path`.
#[component]
fn RoutedHarness(props: RoutedHarnessProps) -> Element {
    let app = Arc::clone(&props.app);
    let path = props.path.clone();
    use_context_provider(move || {
        Rc::new(MemoryHistory::with_initial_path(path.as_str())) as Rc<dyn History>
    });
    let ctx = use_context_provider(move || build_app_context(&app));
    let auth = use_auth_state(&ctx);
    use_context_provider(|| auth);
    rsx! { Router::<Route> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
    #[route("/:..segments")]
    Elsewhere { segments: Vec<String> },
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Landing => rsx! { LandingView {} },
        ViewKind::Login => rsx! { LoginView {} },
        ViewKind::Register => rsx! { RegisterView {} },
        ViewKind::Dashboard => rsx! { DashboardView {} },
        ViewKind::Quiz => rsx! { QuizView {} },
        ViewKind::Flashcards => rsx! { FlashcardsView {} },
        ViewKind::Assistant => rsx! { AssistantView {} },
    }
}

/// Stands in for any real route a view navigates to.
#[component]
fn Elsewhere(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! { p { "navigated:/{path}" } }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub api: Arc<StubStudyApi>,
    pub repo: InMemoryRepository,
    pub services: AppServices,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Let effects, navigation and spawned tasks run to quiescence.
    pub async fn settle(&mut self) {
        for _ in 0..4 {
            self.drive_async().await;
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

pub async fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with(view, StubStudyApi::new(), None, false).await
}

struct Parts {
    api: Arc<StubStudyApi>,
    repo: InMemoryRepository,
    services: AppServices,
}

async fn build_parts(api: StubStudyApi, signed_in: bool) -> Parts {
    let api = Arc::new(api.with_account(TEST_EMAIL, TEST_PASSWORD));
    let repo = InMemoryRepository::new();
    let storage = Storage {
        tokens: Arc::new(repo.clone()),
    };
    let gateway: Arc<dyn StudyApi> = api.clone();
    let services = AppServices::from_parts(gateway, &storage, fixed_clock());

    if signed_in {
        services
            .session()
            .login(TEST_EMAIL, TEST_PASSWORD)
            .await
            .expect("test login");
    }

    Parts {
        api,
        repo,
        services,
    }
}

/// Build a harness over `api`; when `signed_in`, a test account logs in first.
pub async fn setup_view_harness_with(
    view: ViewKind,
    api: StubStudyApi,
    material: Option<StudyMaterial>,
    signed_in: bool,
) -> ViewHarness {
    let Parts {
        api,
        repo,
        services,
    } = build_parts(api, signed_in).await;

    let app: Arc<dyn UiApp> = Arc::new(services.clone());
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            material,
        },
    );

    ViewHarness {
        dom,
        api,
        repo,
        services,
    }
}

/// Harness over the application's own `Route` table, opened at `path`.
pub async fn setup_routed_harness(path: &str, signed_in: bool) -> ViewHarness {
    let Parts {
        api,
        repo,
        services,
    } = build_parts(StubStudyApi::new(), signed_in).await;

    let app: Arc<dyn UiApp> = Arc::new(services.clone());
    let dom = VirtualDom::new_with_props(
        RoutedHarness,
        RoutedHarnessProps {
            app,
            path: path.to_string(),
        },
    );

    ViewHarness {
        dom,
        api,
        repo,
        services,
    }
}
