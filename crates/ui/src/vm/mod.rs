mod chat_vm;
mod dashboard_vm;
mod flashcard_vm;
mod markdown_vm;
mod quiz_vm;
mod time_fmt;

pub use chat_vm::{ChatBubbleVm, map_transcript};
pub use dashboard_vm::{
    GENERATION_FAILED_MESSAGE, generate_button_label, generation_error_message, route_for_content,
};
pub use flashcard_vm::{FlashcardFaceVm, FlashcardVm};
pub use markdown_vm::{markdown_to_html, reply_to_html, sanitize_html};
pub use quiz_vm::{QuizOptionVm, QuizQuestionVm, QuizResultVm, QuizScreen, QuizVm};
pub use time_fmt::format_time;
