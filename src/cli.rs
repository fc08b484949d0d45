use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use log::info;
use std::path::PathBuf;

use crate::auth::Token;
use crate::error::StreakError;
use crate::providers::github::{GitHubProvider, DEFAULT_API_URL};
use crate::render::{write_cards, ThemeName};

#[derive(Parser)]
#[command(name = "streakcard")]
#[command(author, version, about = "Contribution streak card generator", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory the SVG cards are written to
    #[arg(short, long, global = true, default_value = "assets/Streaks")]
    output_dir: PathBuf,

    /// Also write the computed statistics as JSON to this path
    #[arg(short, long, global = true)]
    summary: Option<PathBuf>,

    /// Pretty print JSON output
    #[arg(short, long, global = true, default_value_t = false)]
    pretty: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render streak cards from GitHub contributions
    Github {
        /// GitHub login of the user
        login: String,

        /// GitHub API token
        #[arg(short, long, env = "GITHUB_TOKEN", hide_env_values = true)]
        token: Option<String>,

        /// GitHub API URL
        #[arg(short = 'u', long, default_value = DEFAULT_API_URL)]
        api_url: String,

        /// Themes to render (defaults to all)
        #[arg(long = "theme", value_enum)]
        themes: Vec<ThemeName>,

        /// Reference day for the current streak, as YYYY-MM-DD (defaults to today)
        #[arg(long)]
        today: Option<NaiveDate>,
    },
}

impl Cli {
    pub async fn execute(&self) -> Result<()> {
        match &self.command {
            Commands::Github {
                login,
                token,
                api_url,
                themes,
                today,
            } => {
                let login = login.trim();
                if login.is_empty() {
                    return Err(
                        StreakError::Config("GitHub login must not be empty".to_string()).into(),
                    );
                }

                info!("Collecting contribution streaks for user: {login}");

                let token = Token::parse(token.as_deref())?;
                let today = today.unwrap_or_else(|| Local::now().date_naive());

                let provider = GitHubProvider::new(api_url, login.to_string(), Some(token))?;
                let stats = provider.collect_stats(today).await?;

                let themes = if themes.is_empty() {
                    ThemeName::ALL.to_vec()
                } else {
                    themes.clone()
                };
                let written = write_cards(&stats, &themes, &self.output_dir)?;
                info!("Generated {} streak cards", written.len());

                if let Some(summary_path) = &self.summary {
                    let json_output = if self.pretty {
                        serde_json::to_string_pretty(&stats)?
                    } else {
                        serde_json::to_string(&stats)?
                    };

                    std::fs::write(summary_path, json_output)?;
                    info!("Summary written to: {}", summary_path.display());
                }

                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from([
            "streakcard",
            "github",
            "octocat",
            "--token",
            "ghp_abcdefghij",
        ])
        .unwrap();

        assert_eq!(cli.output_dir, PathBuf::from("assets/Streaks"));
        assert!(cli.summary.is_none());
        assert!(!cli.pretty);

        let Commands::Github {
            login,
            api_url,
            themes,
            today,
            ..
        } = cli.command;
        assert_eq!(login, "octocat");
        assert_eq!(api_url, DEFAULT_API_URL);
        assert!(themes.is_empty());
        assert!(today.is_none());
    }

    #[test]
    fn test_parse_themes_and_today() {
        let cli = Cli::try_parse_from([
            "streakcard",
            "--output-dir",
            "out",
            "github",
            "octocat",
            "--theme",
            "forest",
            "--theme",
            "github",
            "--today",
            "2024-03-01",
        ])
        .unwrap();

        assert_eq!(cli.output_dir, PathBuf::from("out"));

        let Commands::Github { themes, today, .. } = cli.command;
        assert_eq!(themes, vec![ThemeName::Forest, ThemeName::Github]);
        assert_eq!(today, NaiveDate::from_ymd_opt(2024, 3, 1));
    }

    #[test]
    fn test_parse_rejects_unknown_theme() {
        let result = Cli::try_parse_from(["streakcard", "github", "octocat", "--theme", "neon"]);

        assert!(result.is_err());
    }

    #[test]
    fn test_parse_rejects_malformed_today() {
        let result =
            Cli::try_parse_from(["streakcard", "github", "octocat", "--today", "03/01/2024"]);

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_execute_rejects_short_token_before_fetching() {
        let cli = Cli::try_parse_from([
            "streakcard",
            "github",
            "octocat",
            "--token",
            "short",
            "--api-url",
            "http://127.0.0.1:9",
        ])
        .unwrap();

        let err = cli.execute().await.unwrap_err();

        assert!(err.to_string().contains("GITHUB_TOKEN missing or invalid"));
    }

    #[tokio::test]
    async fn test_execute_rejects_blank_login() {
        let cli =
            Cli::try_parse_from(["streakcard", "github", "   ", "--token", "ghp_abcdefghij"])
                .unwrap();

        let err = cli.execute().await.unwrap_err();

        assert!(err.to_string().contains("login must not be empty"));
    }
}
