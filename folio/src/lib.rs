#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod contact;
pub mod counter;
pub mod github;
pub mod keywords;
pub mod projects;
pub mod render;
pub mod runner;
pub mod samples;
pub mod skills;
pub mod summary;

pub use config::{load_config, ConfigError, ProfileDefaults, Sections, SiteConfig};
pub use contact::{ContactSubmission, MissingFields, CONTACT_FIELDS};
pub use counter::{spawn_counter, CounterAnimation, CounterHandle, TICK_INTERVAL};
pub use github::{
    fallback_profile, fetch_portfolio_data, DataOrigin, FetchError, GitHubSource, OctocrabSource,
    PortfolioData, ProfileRecord, RepositoryRecord,
};
pub use projects::{
    curate_projects, repo_category, tech_tags, Category, ProjectCard, ProjectFilter,
    ProjectGallery,
};
pub use render::{
    Capabilities, CounterView, ProfileView, RenderContext, RenderedPage, SiteContent,
    TemplateError,
};
pub use runner::{BuildOutput, Runner, RunnerConfig, RunnerError};
pub use samples::sample_projects;
pub use skills::{aggregate_skills, SkillEntry, SkillTier};
pub use summary::RunSummary;
