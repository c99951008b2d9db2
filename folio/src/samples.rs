//! Built-in sample projects appended after the live repositories.

use crate::github::{utc, RepositoryRecord};
use chrono::{DateTime, Utc};

const AI_TASK_MANAGER_UPDATED: DateTime<Utc> = utc(2024, 1, 15, 10, 30);
const BLOCKCHAIN_VOTING_UPDATED: DateTime<Utc> = utc(2024, 1, 10, 14, 20);
const REALTIME_CHAT_UPDATED: DateTime<Utc> = utc(2024, 1, 8, 16, 45);
const ECOMMERCE_ANALYTICS_UPDATED: DateTime<Utc> = utc(2024, 1, 5, 9, 15);
const FITNESS_TRACKER_UPDATED: DateTime<Utc> = utc(2024, 1, 3, 11, 30);
const DEVOPS_SUITE_UPDATED: DateTime<Utc> = utc(2024, 1, 1, 8, 0);

fn sample(
    name: &str,
    description: &str,
    language: &str,
    slug: &str,
    homepage: Option<&str>,
    updated_at: DateTime<Utc>,
    topics: &[&str],
) -> RepositoryRecord {
    RepositoryRecord {
        name: name.to_string(),
        description: Some(description.to_string()),
        primary_language: Some(language.to_string()),
        is_fork: false,
        homepage_url: homepage.map(str::to_string),
        last_updated_at: updated_at,
        repository_url: format!("https://github.com/ZacharyLabor/{slug}"),
        topics: Some(topics.iter().map(|t| (*t).to_string()).collect()),
    }
}

/// Returns the six sample projects, newest first.
#[must_use]
pub fn sample_projects() -> Vec<RepositoryRecord> {
    vec![
        sample(
            "AI-Powered Task Manager",
            "A smart task management application with AI-driven priority suggestions and \
             automated scheduling using machine learning algorithms.",
            "Python",
            "ai-task-manager",
            Some("https://ai-taskmanager-demo.netlify.app"),
            AI_TASK_MANAGER_UPDATED,
            &["ai", "machine-learning", "productivity", "flask", "react"],
        ),
        sample(
            "Blockchain Voting System",
            "Secure and transparent voting platform built on Ethereum blockchain with smart \
             contracts for tamper-proof elections.",
            "Solidity",
            "blockchain-voting",
            Some("https://blockchain-vote-demo.vercel.app"),
            BLOCKCHAIN_VOTING_UPDATED,
            &["blockchain", "ethereum", "smart-contracts", "web3", "solidity"],
        ),
        sample(
            "Real-time Chat Application",
            "Modern chat application with real-time messaging, file sharing, and video calls \
             using WebRTC and Socket.io.",
            "JavaScript",
            "realtime-chat",
            Some("https://realtime-chat-app.herokuapp.com"),
            REALTIME_CHAT_UPDATED,
            &["websockets", "webrtc", "nodejs", "react", "mongodb"],
        ),
        sample(
            "E-commerce Analytics Dashboard",
            "Comprehensive analytics dashboard for e-commerce businesses with real-time sales \
             tracking and predictive analytics.",
            "TypeScript",
            "ecommerce-analytics",
            Some("https://ecommerce-analytics-demo.com"),
            ECOMMERCE_ANALYTICS_UPDATED,
            &["analytics", "dashboard", "typescript", "nextjs", "postgresql"],
        ),
        sample(
            "Mobile Fitness Tracker",
            "Cross-platform mobile app for fitness tracking with workout plans, nutrition \
             logging, and progress visualization.",
            "Dart",
            "fitness-tracker",
            None,
            FITNESS_TRACKER_UPDATED,
            &["flutter", "mobile", "fitness", "health", "sqlite"],
        ),
        sample(
            "DevOps Automation Suite",
            "Complete DevOps automation toolkit with CI/CD pipelines, infrastructure as code, \
             and monitoring solutions.",
            "Go",
            "devops-suite",
            Some("https://devops-suite-docs.com"),
            DEVOPS_SUITE_UPDATED,
            &["devops", "kubernetes", "docker", "terraform", "monitoring"],
        ),
    ]
}
