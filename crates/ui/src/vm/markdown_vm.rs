use std::collections::{HashMap, HashSet};

/// Render assistant markdown to sanitized HTML.
#[must_use]
pub fn markdown_to_html(input: &str) -> String {
    let mut options = pulldown_cmark::Options::empty();
    options.insert(pulldown_cmark::Options::ENABLE_STRIKETHROUGH);
    options.insert(pulldown_cmark::Options::ENABLE_TABLES);
    options.insert(pulldown_cmark::Options::ENABLE_TASKLISTS);

    let normalized = normalize_markdown(input);
    let parser = pulldown_cmark::Parser::new_ext(&normalized, options);
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    sanitize_html(&html)
}

/// Escape plain text and keep its line breaks.
#[must_use]
pub fn plain_text_to_html(input: &str) -> String {
    let lines = input
        .trim()
        .lines()
        .map(ammonia::clean_text)
        .collect::<Vec<_>>()
        .join("<br>");
    format!("<p>{lines}</p>")
}

/// Markdown when it looks like markdown, otherwise escaped text.
#[must_use]
pub fn reply_to_html(input: &str) -> String {
    if looks_like_markdown(input) {
        markdown_to_html(input)
    } else {
        plain_text_to_html(input)
    }
}

#[must_use]
pub fn sanitize_html(html: &str) -> String {
    let tags: HashSet<&str> = [
        "p", "br", "em", "strong", "del", "code", "pre", "blockquote", "ul", "ol", "li", "a",
        "h1", "h2", "h3", "h4", "table", "thead", "tbody", "tr", "th", "td", "input",
    ]
    .into_iter()
    .collect();

    let mut attributes: HashMap<&str, HashSet<&str>> = HashMap::new();
    attributes.insert("a", ["href"].into_iter().collect());
    attributes.insert("input", ["type", "checked", "disabled"].into_iter().collect());

    ammonia::Builder::new()
        .tags(tags)
        .tag_attributes(attributes)
        .clean(html)
        .to_string()
}

#[must_use]
pub fn looks_like_markdown(input: &str) -> bool {
    let trimmed = input.trim_start();
    if trimmed.is_empty() {
        return false;
    }

    if trimmed.contains("```") || trimmed.contains("**") || trimmed.contains("__") {
        return true;
    }

    if trimmed.contains("](") {
        return true;
    }

    trimmed.lines().any(|line| {
        let line = line.trim_start();
        line.starts_with("# ")
            || line.starts_with("## ")
            || line.starts_with("### ")
            || line.starts_with("- ")
            || line.starts_with("* ")
            || line.starts_with("> ")
            || starts_with_ordinal(line)
    })
}

fn starts_with_ordinal(line: &str) -> bool {
    let digits = line.chars().take_while(char::is_ascii_digit).count();
    digits > 0 && line[digits..].starts_with(". ")
}

/// Trim trailing whitespace and collapse runs of blank lines.
#[must_use]
pub fn normalize_markdown(input: &str) -> String {
    let normalized = input.replace("\r\n", "\n").replace('\r', "\n");
    let mut lines = Vec::new();
    let mut blank_streak = 0usize;

    for line in normalized.split('\n') {
        let trimmed = line.trim_end_matches([' ', '\t']).to_string();
        if trimmed.is_empty() {
            blank_streak += 1;
            if blank_streak > 1 {
                continue;
            }
        } else {
            blank_streak = 0;
        }
        lines.push(trimmed);
    }

    let mut output = lines.join("\n");
    if !output.is_empty() && !output.ends_with('\n') {
        output.push('\n');
    }
    output
}
