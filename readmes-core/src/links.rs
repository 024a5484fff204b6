//! Issue and documentation link construction.
//!
//! Every URL here is built from a fixed template and the program/language
//! names alone, so identical inputs always produce byte-identical links.

use crate::domain::ProgramEntry;

/// Base URL for creating a code-snippet request issue.
pub const ISSUE_CREATE_URL: &str = "https://github.com/TheRenegadeCoder/sample-programs/issues/new";
/// Base URL for searching article request issues.
pub const ARTICLE_ISSUE_URL: &str =
    "https://github.com/TheRenegadeCoder/sample-programs-website/issues";
/// Base URL for per-project requirements pages.
pub const REQUIREMENTS_URL: &str = "https://sampleprograms.io/projects";

/// Icon shown in front of a program line.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Icon {
    /// The program has a published documentation article.
    Verified,
    /// The program exists but has no documentation article yet.
    Warning,
    /// The program is missing from the language collection.
    Missing,
}

impl Icon {
    /// Emoji shortcode rendered for this icon.
    pub fn shortcode(self) -> &'static str {
        match self {
            Self::Verified => ":white_check_mark:",
            Self::Warning => ":warning:",
            Self::Missing => ":x:",
        }
    }
}

/// Human-readable title for a program slug (`hello-world` -> `Hello World`).
pub fn display_title(slug: &str) -> String {
    slug.split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Requirements page URL for a program slug.
pub fn requirements_url(slug: &str) -> String {
    format!("{REQUIREMENTS_URL}/{slug}/")
}

/// Resolve the icon and link target for a completed program line.
///
/// Documented programs link to their article; undocumented programs link to
/// an issue query that surfaces any open article request.
pub fn completed_link(program: &ProgramEntry, language: &str) -> (Icon, String) {
    match &program.documentation_url {
        Some(url) => (Icon::Verified, url.clone()),
        None => {
            let title = display_title(&program.name);
            (Icon::Warning, article_issue_query_url(&title, language))
        }
    }
}

/// Issue-search URL covering the article request for an undocumented program.
pub fn article_issue_query_url(title: &str, language: &str) -> String {
    let label = plus_joined(title).to_lowercase();
    format!(
        "{ARTICLE_ISSUE_URL}?labels={label}&q={title}+in+{language}",
        title = urlencoding::encode(title),
        language = urlencoding::encode(language),
    )
}

/// Issue-creation URL pre-filled for a program missing from a language.
pub fn missing_link(language: &str, slug: &str) -> String {
    let title = display_title(slug);
    let project = plus_joined(&title);
    let label = project.to_lowercase();
    format!(
        "{ISSUE_CREATE_URL}?assignees=&labels=enhancement,{label}&template=code-snippet-request.md&title=Add+{project}+in+{language}",
        language = urlencoding::encode(language),
    )
}

fn plus_joined(title: &str) -> String {
    title.split_whitespace().collect::<Vec<_>>().join("+")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
