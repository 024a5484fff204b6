//! README assembly for language collections.
//!
//! Builds one block-structured README per language: completion summary,
//! completed and missing program lists, testing details, and the credit
//! footer. Section order is fixed so regenerated pages diff cleanly.

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use crate::analyzer;
use crate::catalog::CatalogSource;
use crate::domain::LanguageInventory;
use crate::error::Result;
use crate::links::{self, Icon};
use crate::markdown::{Block, Inline};

/// Emoji indicators for the five completion buckets, lowest first.
pub const STATUS_INDICATORS: [&str; 5] = [
    ":disappointed:",
    ":thinking:",
    ":relaxed:",
    ":smile:",
    ":partying_face:",
];

/// Fenced template suggested when a language has no test configuration.
pub const TESTINFO_TEMPLATE: &str =
    "folder:\n  extension:\n  naming:\n\ncontainer:\n  image:\n  tag:\n  cmd:";

/// URL of the generator project, linked from the credit block.
pub const GENERATOR_URL: &str = "https://github.com/TheRenegadeCoder/sample-programs-readmes";
/// URL of the official approved-project list.
pub const PROJECT_LIST_URL: &str = "https://sampleprograms.io/projects/";
/// URL of the Glotter2 test runner.
pub const GLOTTER_URL: &str = "https://github.com/rzuckerm/glotter2";

/// One generated README, ready for rendering and writing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadmePage {
    /// Directory of the README relative to the repository root.
    pub relative_dir: PathBuf,
    /// Ordered block sequence of the document.
    pub blocks: Vec<Block>,
}

/// The collection of generated READMEs for one run.
#[derive(Debug, Clone, Default)]
pub struct ReadmeCatalog {
    /// Generated pages keyed by the language's path-safe name.
    pub pages: BTreeMap<String, ReadmePage>,
}

impl ReadmeCatalog {
    /// Build pages for every language using the given catalog source.
    ///
    /// The approved set is fetched exactly once, before any page is built;
    /// a catalog failure aborts the run with no pages produced.
    pub fn generate(
        languages: &[LanguageInventory],
        catalog: &dyn CatalogSource,
    ) -> Result<Self> {
        let approved = catalog.approved_projects()?;
        log::info!("approved catalog holds {} projects", approved.len());

        let mut pages = BTreeMap::new();
        for language in languages {
            log::debug!("building README for {}", language.name);
            pages.insert(language.path_name.clone(), build_readme(language, &approved));
        }
        Ok(Self { pages })
    }
}

/// Build the README page for one language collection.
pub fn build_readme(language: &LanguageInventory, approved: &BTreeSet<String>) -> ReadmePage {
    let report = analyzer::analyze(language, approved);
    let mut blocks = Vec::new();

    blocks.push(Block::heading(
        1,
        format!("Sample Programs in {}", language.name),
    ));
    blocks.push(intro_paragraph(language));

    blocks.push(Block::heading(
        2,
        format!(
            "Sample Programs List - {}/{} {}",
            report.completed_count, report.total_approved, STATUS_INDICATORS[report.bucket]
        ),
    ));
    blocks.push(Block::paragraph(format!(
        "In this section, we feature a list of completed and missing programs in {name}. \
         See above for the current amount of completed programs in {name}. If you see a \
         program that is missing and would like to add it, please submit an issue, so we \
         can assign it to you.",
        name = language.name
    )));

    blocks.push(Block::heading(3, "Completed Programs"));
    blocks.push(completed_prose(&language.name));
    blocks.push(Block::List(completed_items(language)));

    if !report.missing.is_empty() {
        blocks.push(Block::heading(3, "Missing Programs"));
        blocks.push(Block::paragraph(format!(
            "The following list contains all of the approved programs that are not \
             currently implemented in {}. Click on the name of the project to easily open \
             an issue in GitHub. Alternatively, click requirements to check out the \
             description of the project.",
            language.name
        )));
        blocks.push(Block::List(missing_items(&language.name, &report.missing)));
    }

    blocks.push(Block::heading(2, "Testing"));
    testing_blocks(language, &mut blocks);

    blocks.push(Block::Rule);
    blocks.push(credit_paragraph());

    ReadmePage {
        relative_dir: readme_dir(&language.path_name),
        blocks,
    }
}

fn intro_paragraph(language: &LanguageInventory) -> Block {
    let mut content = vec![Inline::text(format!(
        "Welcome to Sample Programs in {}!",
        language.name
    ))];
    if let Some(docs_url) = &language.docs_url {
        content.push(Inline::text(format!(
            " To find documentation related to the {} code in this repo, look ",
            language.name
        )));
        content.push(Inline::link("here.", docs_url));
    }
    Block::Paragraph(content)
}

fn completed_prose(language_name: &str) -> Block {
    Block::Paragraph(vec![
        Inline::text(format!(
            "Below, you'll find a list of completed code snippets in {language_name}. Code \
             snippets preceded by :warning: link to a GitHub issue query featuring a \
             possible article request issue. If an article request issue doesn't exist, \
             we encourage you to create one. Meanwhile, code snippets preceded by \
             :white_check_mark: link to an existing article which provides further \
             documentation. To see the list of approved projects, check out the official "
        )),
        Inline::link("Sample Programs projects list", PROJECT_LIST_URL),
        Inline::text("."),
    ])
}

fn completed_items(language: &LanguageInventory) -> Vec<Vec<Inline>> {
    language
        .programs
        .iter()
        .map(|program| {
            let title = links::display_title(&program.name);
            let (icon, url) = links::completed_link(program, &language.name);
            program_line(icon, &title, url, links::requirements_url(&program.name))
        })
        .collect()
}

fn missing_items(language_name: &str, missing: &[String]) -> Vec<Vec<Inline>> {
    missing
        .iter()
        .map(|slug| {
            let title = links::display_title(slug);
            let url = links::missing_link(language_name, slug);
            program_line(Icon::Missing, &title, url, links::requirements_url(slug))
        })
        .collect()
}

fn program_line(icon: Icon, title: &str, url: String, requirements: String) -> Vec<Inline> {
    vec![
        Inline::text(format!("{} ", icon.shortcode())),
        Inline::link(title, url),
        Inline::text(" ["),
        Inline::link("Requirements", requirements),
        Inline::text("]"),
    ]
}

fn testing_blocks(language: &LanguageInventory, blocks: &mut Vec<Block>) {
    match (&language.test_config, &language.untestable_reason) {
        (Some(config), _) => {
            blocks.push(Block::paragraph(format!(
                "The following list shares details about what we're using to test all \
                 Sample Programs in {}:",
                language.name
            )));
            blocks.push(Block::List(vec![
                vec![Inline::text(format!("Docker Image: {}", config.image))],
                vec![Inline::text(format!("Docker Tag: {}", config.tag))],
            ]));
        }
        (None, Some(reason)) => {
            blocks.push(Block::paragraph(format!(
                "{} cannot be tested for the following reason:",
                language.name
            )));
            blocks.push(Block::List(vec![vec![Inline::text(reason.clone())]]));
        }
        (None, None) => {
            blocks.push(Block::paragraph(
                "This language currently does not feature testing. If you'd like to help \
                 in the efforts to test all of the code in this repo, consider creating a \
                 testinfo.yml file with the following information:",
            ));
            blocks.push(Block::CodeBlock {
                lang: "yml".to_string(),
                code: TESTINFO_TEMPLATE.to_string(),
            });
        }
    }

    if language.untestable_reason.is_none() {
        blocks.push(Block::Paragraph(vec![
            Inline::text("See the "),
            Inline::link("Glotter2 project", GLOTTER_URL),
            Inline::text(" for more information on how to create a testinfo file."),
        ]));
    }
}

fn credit_paragraph() -> Block {
    Block::Paragraph(vec![
        Inline::text(
            "This page was generated automatically by the Sample Programs READMEs tool. \
             Find out how to support ",
        ),
        Inline::link("this project", GENERATOR_URL),
        Inline::text(" on GitHub."),
    ])
}

fn readme_dir(path_name: &str) -> PathBuf {
    let initial = path_name
        .chars()
        .next()
        .map(String::from)
        .unwrap_or_default();
    PathBuf::from("archive").join(initial).join(path_name)
}

#[cfg(test)]
mod tests {
    use super::{ReadmeCatalog, STATUS_INDICATORS, TESTINFO_TEMPLATE, build_readme};
    use crate::catalog::{MockCatalogSource, StaticCatalog};
    use crate::domain::{LanguageInventory, ProgramEntry, TestConfig};
    use crate::error::ReadmesError;
    use crate::markdown::render_markdown;
    use std::collections::BTreeSet;
    use std::path::PathBuf;

    fn approved(slugs: &[&str]) -> BTreeSet<String> {
        slugs.iter().map(|slug| slug.to_string()).collect()
    }

    fn python(programs: Vec<ProgramEntry>) -> LanguageInventory {
        LanguageInventory {
            name: "Python".to_string(),
            path_name: "python".to_string(),
            programs,
            docs_url: None,
            test_config: None,
            untestable_reason: None,
        }
    }

    fn documented(name: &str) -> ProgramEntry {
        ProgramEntry {
            name: name.to_string(),
            documentation_url: Some(format!("https://sampleprograms.io/projects/{name}/python/")),
        }
    }

    fn undocumented(name: &str) -> ProgramEntry {
        ProgramEntry {
            name: name.to_string(),
            documentation_url: None,
        }
    }

    #[test]
    fn partial_completion_renders_counts_icons_and_missing_section() {
        let language = python(vec![documented("hello-world"), undocumented("fizz-buzz")]);
        let page = build_readme(&language, &approved(&["baklava", "fizz-buzz", "hello-world"]));
        let output = render_markdown(&page.blocks);

        assert!(output.contains("## Sample Programs List - 2/3 :relaxed:"));
        assert!(output.contains(
            "- :white_check_mark: [Hello World](https://sampleprograms.io/projects/hello-world/python/)"
        ));
        assert!(output.contains("- :warning: [Fizz Buzz]("));
        assert!(output.contains("### Missing Programs"));
        assert!(output.contains("- :x: [Baklava]("));
        assert!(output.contains("[Requirements](https://sampleprograms.io/projects/baklava/)"));
    }

    #[test]
    fn empty_collection_lists_every_approved_program_sorted() {
        let language = python(Vec::new());
        let page = build_readme(
            &language,
            &approved(&["quine", "baklava", "roman-numeral", "fizz-buzz", "hello-world"]),
        );
        let output = render_markdown(&page.blocks);

        assert!(output.contains("## Sample Programs List - 0/5 :disappointed:"));

        let baklava = output.find(":x: [Baklava]").expect("baklava line");
        let fizz = output.find(":x: [Fizz Buzz]").expect("fizz buzz line");
        let hello = output.find(":x: [Hello World]").expect("hello world line");
        let quine = output.find(":x: [Quine]").expect("quine line");
        let roman = output.find(":x: [Roman Numeral]").expect("roman numeral line");
        assert!(baklava < fizz && fizz < hello && hello < quine && quine < roman);
    }

    #[test]
    fn full_completion_omits_missing_section() {
        let language = python(vec![documented("hello-world"), documented("fizz-buzz")]);
        let page = build_readme(&language, &approved(&["fizz-buzz", "hello-world"]));
        let output = render_markdown(&page.blocks);

        assert!(output.contains("## Sample Programs List - 2/2 :partying_face:"));
        assert!(!output.contains("Missing Programs"));
    }

    #[test]
    fn intro_links_docs_only_when_published() {
        let mut language = python(Vec::new());
        let page = build_readme(&language, &approved(&["hello-world"]));
        assert!(!render_markdown(&page.blocks).contains("look [here.]"));

        language.docs_url = Some("https://sampleprograms.io/languages/python/".to_string());
        let page = build_readme(&language, &approved(&["hello-world"]));
        assert!(
            render_markdown(&page.blocks)
                .contains("look [here.](https://sampleprograms.io/languages/python/)")
        );
    }

    #[test]
    fn missing_test_config_emits_template_block() {
        let language = python(Vec::new());
        let page = build_readme(&language, &approved(&["hello-world"]));
        let output = render_markdown(&page.blocks);

        assert!(output.contains("## Testing"));
        assert!(output.contains(&format!("```yml\n{TESTINFO_TEMPLATE}\n```")));
        assert!(output.contains("[Glotter2 project]"));
        assert!(!output.contains("Docker Image:"));
    }

    #[test]
    fn test_config_renders_image_and_tag_items() {
        let mut language = python(Vec::new());
        language.test_config = Some(TestConfig {
            image: "python".to_string(),
            tag: "3.12-alpine".to_string(),
            command: None,
        });
        let page = build_readme(&language, &approved(&["hello-world"]));
        let output = render_markdown(&page.blocks);

        assert!(output.contains("- Docker Image: python"));
        assert!(output.contains("- Docker Tag: 3.12-alpine"));
        assert!(!output.contains("```yml"));
    }

    #[test]
    fn untestable_language_reports_reason_and_skips_glotter() {
        let mut language = python(Vec::new());
        language.untestable_reason = Some("no compiler is publicly available".to_string());
        let page = build_readme(&language, &approved(&["hello-world"]));
        let output = render_markdown(&page.blocks);

        assert!(output.contains("Python cannot be tested for the following reason:"));
        assert!(output.contains("- no compiler is publicly available"));
        assert!(!output.contains("Glotter2"));
        assert!(!output.contains("```yml"));
    }

    #[test]
    fn readme_dir_uses_initial_and_path_name() {
        let language = python(Vec::new());
        let page = build_readme(&language, &approved(&["hello-world"]));
        assert_eq!(page.relative_dir, PathBuf::from("archive/p/python"));
    }

    #[test]
    fn empty_approved_set_still_produces_a_page() {
        let language = python(vec![undocumented("hello-world")]);
        let page = build_readme(&language, &BTreeSet::new());
        let output = render_markdown(&page.blocks);

        assert!(output.contains("## Sample Programs List - 1/0 :disappointed:"));
        assert!(!output.contains("Missing Programs"));
    }

    #[test]
    fn generate_builds_one_page_per_language() {
        let languages = vec![
            python(vec![undocumented("hello-world")]),
            LanguageInventory {
                name: "Rust".to_string(),
                path_name: "rust".to_string(),
                programs: Vec::new(),
                docs_url: None,
                test_config: None,
                untestable_reason: None,
            },
        ];
        let catalog = StaticCatalog::new(["hello-world", "fizz-buzz"]);

        let readmes = ReadmeCatalog::generate(&languages, &catalog).expect("catalog generation");

        assert_eq!(readmes.pages.len(), 2);
        assert!(readmes.pages.contains_key("python"));
        assert!(readmes.pages.contains_key("rust"));
    }

    #[test]
    fn generate_propagates_catalog_failure() {
        let mut catalog = MockCatalogSource::new();
        catalog
            .expect_approved_projects()
            .returning(|| Err(ReadmesError::Catalog("unreachable".to_string())));

        let error = ReadmeCatalog::generate(&[python(Vec::new())], &catalog)
            .expect_err("catalog failure");

        assert!(matches!(error, ReadmesError::Catalog(_)));
    }

    #[test]
    fn regeneration_is_byte_identical() {
        let language = python(vec![documented("hello-world"), undocumented("fizz-buzz")]);
        let approved = approved(&["baklava", "fizz-buzz", "hello-world"]);

        let first = render_markdown(&build_readme(&language, &approved).blocks);
        let second = render_markdown(&build_readme(&language, &approved).blocks);

        assert_eq!(first, second);
    }

    #[test]
    fn indicator_table_covers_every_bucket() {
        assert_eq!(STATUS_INDICATORS.len(), 5);
        assert_eq!(STATUS_INDICATORS[0], ":disappointed:");
        assert_eq!(STATUS_INDICATORS[4], ":partying_face:");
    }
}
