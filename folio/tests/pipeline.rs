use std::fs;
use std::future::Future;
use std::path::{Path, PathBuf};

use folio::{
    ConfigError, DataOrigin, FetchError, GitHubSource, ProfileRecord, RepositoryRecord, Runner,
    RunnerConfig, RunnerError,
};
use tempfile::TempDir;

fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn fixture(name: &str) -> String {
    fs::read_to_string(fixtures_root().join(name)).unwrap()
}

/// Serves fixture JSON as if it came from the API.
struct FixtureSource {
    profile_json: String,
    repos_json: String,
}

impl FixtureSource {
    fn live() -> Self {
        Self {
            profile_json: fixture("profile.json"),
            repos_json: fixture("repos.json"),
        }
    }

    /// A profile body missing required fields.
    fn malformed_profile() -> Self {
        Self {
            profile_json: r#"{"login": "octocat"}"#.to_string(),
            repos_json: fixture("repos.json"),
        }
    }
}

fn parse<T: serde::de::DeserializeOwned>(route: &str, json: &str) -> Result<T, FetchError> {
    serde_json::from_str(json).map_err(|source| FetchError::Malformed {
        route: route.to_string(),
        source,
    })
}

impl GitHubSource for FixtureSource {
    fn fetch_profile(
        &self,
        username: &str,
    ) -> impl Future<Output = Result<ProfileRecord, FetchError>> + Send {
        let result = parse(&format!("/users/{username}"), &self.profile_json);
        async move { result }
    }

    fn fetch_repositories(
        &self,
        username: &str,
    ) -> impl Future<Output = Result<Vec<RepositoryRecord>, FetchError>> + Send {
        let result = parse(&format!("/users/{username}/repos"), &self.repos_json);
        async move { result }
    }
}

fn runner_config(out: &Path, dry_run: bool) -> RunnerConfig {
    RunnerConfig::new(dry_run)
        .with_config_path(fixtures_root().join("folio.toml"))
        .with_username("octocat".to_string())
        .with_output_dir(out.to_path_buf())
}

#[tokio::test]
async fn live_build_writes_every_page() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("site");
    let runner = Runner::with_source(runner_config(&out, false), FixtureSource::live()).unwrap();

    assert_eq!(runner.site().username, "octocat");
    assert_eq!(runner.site().output_dir, out);
    assert!(!runner.site().sections.contact);

    let output = runner.run().await.unwrap();

    assert_eq!(output.summary.origin, DataOrigin::Live);
    assert!(output.summary.all_success());
    assert_eq!(output.summary.projects_rendered, 6);
    assert_eq!(output.summary.skills_rendered, 8);
    // Five pages plus the stylesheet.
    assert_eq!(output.summary.pages_written, 6);
    for name in [
        "index.html",
        "web.html",
        "python.html",
        "javascript.html",
        "other.html",
        "styles.css",
    ] {
        assert!(out.join(name).exists(), "missing {name}");
    }
}

#[tokio::test]
async fn live_index_page_content() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("site");
    let runner = Runner::with_source(runner_config(&out, false), FixtureSource::live()).unwrap();
    runner.run().await.unwrap();

    let html = fs::read_to_string(out.join("index.html")).unwrap();

    assert!(html.contains("<title>Octocat | Portfolio</title>"));
    assert!(html.contains("The Octocat"));
    assert!(html.contains("San Francisco"));
    assert!(html.contains("Email not public"));
    assert!(html.contains(r#"data-target="1000">1000</span>"#));
    assert!(html.contains(r#"<span id="github-created">2011</span>"#));

    // Forks and undescribed repositories are dropped; samples fill the rest.
    assert!(!html.contains("forked-lib"));
    assert!(!html.contains(">notes<"));
    assert_eq!(html.matches(r#"class="project-card"#).count(), 6);
    assert!(html.contains("Real-time Chat Application"));
    assert!(!html.contains("E-commerce Analytics Dashboard"));

    let first = html.find("folio-site").unwrap();
    let second = html.find("data-cruncher").unwrap();
    let third = html.find("gateway").unwrap();
    let sample = html.find("AI-Powered Task Manager").unwrap();
    assert!(first < second && second < third && third < sample);

    assert!(html.contains(r#"<span class="tech-tag">Static site</span>"#));
    // folio-site, and three samples with a homepage; data-cruncher's is empty.
    assert_eq!(html.matches("Live Demo").count(), 4);

    assert!(!html.contains(r#"id="contact-form""#));
}

#[tokio::test]
async fn category_pages_select_cards() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("site");
    let runner = Runner::with_source(runner_config(&out, false), FixtureSource::live()).unwrap();
    runner.run().await.unwrap();

    let python = fs::read_to_string(out.join("python.html")).unwrap();
    assert_eq!(python.matches(r#"class="project-card"#).count(), 2);
    assert!(python.contains("data-cruncher"));
    assert!(python.contains("AI-Powered Task Manager"));

    let other = fs::read_to_string(out.join("other.html")).unwrap();
    assert!(other.contains("gateway"));
    assert!(other.contains("Blockchain Voting System"));

    // No JavaScript-category language survives: JavaScript and TypeScript are web.
    let javascript = fs::read_to_string(out.join("javascript.html")).unwrap();
    assert_eq!(javascript.matches(r#"class="project-card"#).count(), 0);
}

#[tokio::test]
async fn live_skills_are_ranked_by_usage() {
    let temp = TempDir::new().unwrap();
    let runner =
        Runner::with_source(runner_config(temp.path(), true), FixtureSource::live()).unwrap();

    let output = runner.run().await.unwrap();
    let skills: Vec<_> = output
        .content
        .skills
        .iter()
        .map(|s| (s.label.as_str(), s.tier.as_str()))
        .collect();

    assert_eq!(
        skills,
        vec![
            ("TypeScript", "Intermediate"),
            ("React", "Beginner"),
            ("Rust", "Beginner"),
            ("Python", "Advanced"),
            ("Go", "Intermediate"),
            ("Solidity", "Beginner"),
            ("JavaScript", "Beginner"),
            ("Dart", "Beginner"),
        ]
    );
}

#[tokio::test]
async fn malformed_profile_falls_back() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("site");
    let runner =
        Runner::with_source(runner_config(&out, false), FixtureSource::malformed_profile())
            .unwrap();

    let output = runner.run().await.unwrap();

    assert_eq!(output.summary.origin, DataOrigin::Fallback);
    assert!(output.summary.used_fallback());
    assert_eq!(output.content.profile.name, "Zachary Labor");
    assert_eq!(output.content.profile.bio, "Full Stack Developer & Problem Solver");
    assert_eq!(output.content.gallery.cards()[0].title, "AI-Powered Task Manager");

    let html = fs::read_to_string(out.join("index.html")).unwrap();
    assert!(html.contains(r#"data-target="0">0</span>"#));
    assert!(!html.contains("folio-site"));
    assert_eq!(html.matches(r#"class="project-card"#).count(), 6);
}

#[tokio::test]
async fn dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("site");
    let runner = Runner::with_source(runner_config(&out, true), FixtureSource::live()).unwrap();

    let output = runner.run().await.unwrap();

    assert!(output.summary.dry_run);
    assert_eq!(output.summary.pages_written, 0);
    assert_eq!(output.pages.len(), 5);
    assert!(!out.exists());
}

#[tokio::test]
async fn template_overrides_replace_builtins() {
    let temp = TempDir::new().unwrap();
    let theme = temp.path().join("theme");
    fs::create_dir_all(&theme).unwrap();
    fs::write(
        theme.join("page.hbs"),
        "{{title}}:{{active_filter}}:{{#each projects.cards}}{{title}};{{/each}}",
    )
    .unwrap();

    let config_path = temp.path().join("folio.toml");
    fs::write(
        &config_path,
        format!(
            "username = \"octocat\"\ntitle = \"Themed\"\ntemplate-dir = {:?}\n",
            theme.display().to_string()
        ),
    )
    .unwrap();

    let config = RunnerConfig::new(true)
        .with_config_path(config_path)
        .with_username("octocat".to_string());
    let runner = Runner::with_source(config, FixtureSource::live()).unwrap();
    let output = runner.run().await.unwrap();

    let web = output
        .pages
        .iter()
        .find(|p| p.file_name == "web.html")
        .unwrap();
    assert_eq!(
        web.html,
        "Themed:web:folio-site;Real-time Chat Application;"
    );
}

#[test]
fn missing_config_file_is_an_error() {
    let config = RunnerConfig::new(true).with_config_path(fixtures_root().join("absent.toml"));

    let result = Runner::with_source(config, FixtureSource::live());

    assert!(matches!(
        result,
        Err(RunnerError::Config(ConfigError::MissingFile { .. }))
    ));
}
