//! CLI for folio.
//!
//! Builds a static portfolio site from a public GitHub profile, or
//! previews it in the terminal with `--dry-run`.

use clap::Parser;
use folio::counter::{spawn_counter, TICK_INTERVAL};
use folio::{BuildOutput, RunSummary, Runner, RunnerConfig, RunnerError, SiteConfig, SiteContent};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// folio - Build a single-page developer portfolio from a GitHub profile.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the site config file. Defaults to ./folio.toml if present.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory to write the site into.
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// GitHub user to build the portfolio for.
    #[arg(long)]
    username: Option<String>,

    /// GitHub Personal Access Token. Optional; raises the API rate limit.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Render without writing files and print a preview.
    #[arg(long)]
    dry_run: bool,

    /// Animate the profile counters in the preview.
    #[arg(long, requires = "dry_run")]
    animate: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    // octocrab's rustls stack needs a process-wide crypto provider.
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let args = Args::parse();
    let animate = args.animate;

    match run(args).await {
        Ok((site, output)) => {
            if output.summary.dry_run {
                print_preview(&site, &output.content, animate).await;
            }
            print_summary(&site, &output.summary);

            if output.summary.all_success() {
                ExitCode::from(0)
            } else {
                ExitCode::from(1)
            }
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
    }
}

/// Sets up the global tracing subscriber: compact single-line output
/// without targets, filtered by `RUST_LOG` (default `info`).
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<(SiteConfig, BuildOutput), RunnerError> {
    let mut config = RunnerConfig::new(args.dry_run);
    if let Some(path) = args.config {
        config = config.with_config_path(path);
    }
    if let Some(token) = args.token.filter(|t| !t.is_empty()) {
        config = config.with_token(token);
    }
    if let Some(output_dir) = args.output_dir {
        config = config.with_output_dir(output_dir);
    }
    if let Some(username) = args.username {
        config = config.with_username(username);
    }

    let runner = Runner::new(config)?;
    let output = runner.run().await?;
    Ok((runner.site().clone(), output))
}

/// Prints the page content as plain text.
async fn print_preview(site: &SiteConfig, content: &SiteContent, animate: bool) {
    let profile = &content.profile;
    println!("\n{}", site.title());
    println!("\n{}", profile.name);
    println!("  {}", profile.bio);
    println!("  {} | {} | Member since {}", profile.location, profile.email, profile.member_since);
    println!("  {}", profile.profile_url);

    if animate {
        animate_counters(content).await;
    } else {
        println!("\n{}", format_counters(&content.counters.entries().map(|(_, v)| v), content));
    }

    println!("\nProjects:");
    let cards = content.gallery.cards();
    if cards.is_empty() {
        println!("  {}", folio::projects::NO_PROJECTS_MESSAGE);
    }
    for card in cards {
        println!("  [{}] {} ({})", card.category, card.title, card.tags.join(", "));
    }

    println!("\nSkills:");
    for skill in &content.skills {
        println!("  {} - {}", skill.label, skill.tier);
    }
}

/// Runs the three counter animations side by side on one terminal line.
async fn animate_counters(content: &SiteContent) {
    let shown: Arc<[AtomicU64; 3]> = Arc::new(Default::default());

    let handles: Vec<_> = content
        .counters
        .entries()
        .into_iter()
        .enumerate()
        .map(|(i, (_, target))| {
            let shown = Arc::clone(&shown);
            spawn_counter(target, TICK_INTERVAL, move |value| {
                shown[i].store(value, Ordering::Relaxed);
            })
        })
        .collect();

    let mut stdout = std::io::stdout();
    println!();
    loop {
        let done = handles.iter().all(|h| h.is_finished());
        let values = [0, 1, 2].map(|i| shown[i].load(Ordering::Relaxed));
        if redraw(&mut stdout, &format_counters(&values, content)).is_err() {
            for handle in &handles {
                handle.cancel();
            }
            return;
        }

        if done {
            break;
        }
        tokio::time::sleep(TICK_INTERVAL).await;
    }
    println!();
}

/// Overwrites the current terminal line.
fn redraw<W: Write>(out: &mut W, line: &str) -> std::io::Result<()> {
    write!(out, "\r{line}")?;
    out.flush()
}

fn format_counters(values: &[u64; 3], content: &SiteContent) -> String {
    content
        .counters
        .entries()
        .iter()
        .zip(values)
        .map(|((label, _), value)| format!("{value} {label}"))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Prints the final run summary.
fn print_summary(site: &SiteConfig, summary: &RunSummary) {
    println!("\nSummary:");
    println!(
        "  Mode: {}",
        if summary.dry_run { "Dry Run" } else { "Live" }
    );
    println!("  Data: {}", summary.origin.as_str());
    println!("  Projects rendered: {}", summary.projects_rendered);
    println!("  Skills rendered: {}", summary.skills_rendered);

    if !summary.dry_run {
        println!("  Files written: {}", summary.pages_written);
        println!("  Output: {}", site.output_dir.display());
    }
}
