mod assistant;
mod dashboard;
mod flashcards;
mod landing;
mod login;
mod quiz;
mod register;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use assistant::AssistantView;
pub use dashboard::DashboardView;
pub use flashcards::FlashcardsView;
pub use landing::LandingView;
pub use login::LoginView;
pub use quiz::QuizView;
pub use register::RegisterView;
