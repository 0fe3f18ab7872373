use study_core::model::{ChatRole, ChatTranscript};

use super::markdown_vm::{plain_text_to_html, reply_to_html};
use super::time_fmt::format_time;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatBubbleVm {
    pub row_class: &'static str,
    pub bubble_class: &'static str,
    pub html: String,
    pub time_label: String,
}

/// User text is always escaped; assistant replies may carry markdown.
#[must_use]
pub fn map_transcript(transcript: &ChatTranscript) -> Vec<ChatBubbleVm> {
    transcript
        .entries()
        .iter()
        .map(|entry| match entry.role {
            ChatRole::User => ChatBubbleVm {
                row_class: "chat-row chat-row--user",
                bubble_class: "chat-bubble chat-bubble--user",
                html: plain_text_to_html(&entry.content),
                time_label: format_time(entry.sent_at),
            },
            ChatRole::Assistant => ChatBubbleVm {
                row_class: "chat-row chat-row--assistant",
                bubble_class: "chat-bubble chat-bubble--assistant",
                html: reply_to_html(&entry.content),
                time_label: format_time(entry.sent_at),
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use study_core::time::fixed_now;

    #[test]
    fn user_markdown_is_not_rendered() {
        let mut transcript = ChatTranscript::with_greeting(fixed_now());
        transcript.push(ChatRole::User, "**not bold** <b>", fixed_now());
        transcript.push(ChatRole::Assistant, "**bold**", fixed_now());

        let bubbles = map_transcript(&transcript);
        assert_eq!(bubbles.len(), 3);
        assert_eq!(bubbles[1].html, "<p>**not&#32;bold**&#32;&lt;b&gt;</p>");
        assert!(bubbles[2].html.contains("<strong>bold</strong>"));
        assert_eq!(bubbles[2].bubble_class, "chat-bubble chat-bubble--assistant");
    }
}
