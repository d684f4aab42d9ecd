use std::path::PathBuf;

use anyhow::{bail, Context};
use chrono::Local;
use clap::{Args, Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode, Text};
use leetcode_picker::{
    api::LeetcodeClient,
    auth::LeetcodeCookies,
    chrono_util::today,
    commands::{self, CompletionReport},
    config::{default_auth_path, default_config_path, default_data_path, Config},
    extractor::ExtractionEngine,
    problem::{CompletionOutcome, Difficulty, Problem},
    store::{CsvStore, ProgressStore},
    study_plan::StudyPlanId,
    sync::{aggregate_accepted, apply_accepted, fetch_all_submissions},
};
use log::info;
use rand::seq::SliceRandom;

/// Picks LeetCode problems from study plans and tracks your progress.
#[derive(Parser)]
struct Opts {
    /// Progress store [default: ~/.leetcode-picker/problems.csv]
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,
    /// Saved cookies [default: ~/.leetcode-picker/auth.json]
    #[arg(long, global = true)]
    auth_file: Option<PathBuf>,
    /// Tunables [default: ~/.leetcode-picker/config.toml]
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[clap(subcommand)]
    sub: Sub,
}

#[derive(Subcommand)]
enum Sub {
    /// Pick a random unsolved problem.
    Choose(Choose),
    /// Pick a random previously solved problem.
    Review(Review),
    /// Mark a problem as completed.
    MarkComplete(MarkComplete),
    /// Override the difficulty of a problem.
    OverrideDifficulty(OverrideDifficulty),
    /// Show progress on study plans.
    Progress,
    /// Scrape all study plans again and merge them into the store.
    Update,
    /// Back-fill progress from your LeetCode submission history.
    Sync,
    /// List completed problems in Grind75 order.
    Grind75Completed,
    /// Save LeetCode cookies for `sync`.
    Auth,
}

#[derive(Args)]
struct Choose {
    #[arg(long, value_enum)]
    difficulty: Option<Difficulty>,
    #[arg(long, value_enum)]
    study_plan: Option<StudyPlanId>,
}

#[derive(Args)]
struct Review {
    /// Only problems solved at least this many weeks ago.
    #[arg(long)]
    weeks_ago: Option<u32>,
    #[arg(long, value_enum)]
    difficulty: Option<Difficulty>,
}

#[derive(Args)]
struct MarkComplete {
    /// Problem URL or slug.
    url: String,
    /// Completion date (YYYY-MM-DD) [default: today]
    #[arg(long)]
    date: Option<String>,
}

#[derive(Args)]
struct OverrideDifficulty {
    /// Problem URL or slug.
    url: String,
    #[arg(value_enum)]
    difficulty: Difficulty,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let opts = Opts::parse();
    let config = Config::load(&opts.config.clone().unwrap_or_else(default_config_path))?;
    let data_path = opts.data_file.clone().unwrap_or_else(default_data_path);
    let auth_path = opts.auth_file.clone().unwrap_or_else(default_auth_path);
    let mut store = CsvStore::new(data_path);
    let client = LeetcodeClient::new(&config)?;
    let engine = ExtractionEngine::new(&client, config.politeness_delay());

    match opts.sub {
        Sub::Choose(args) => {
            let problems = commands::load_or_update(&engine, &mut store).await?;
            let candidates =
                commands::unsolved_candidates(&problems, args.difficulty, args.study_plan);
            match candidates.choose(&mut rand::thread_rng()) {
                Some(problem) => {
                    println!("Selected problem: {}", problem.title());
                    print_summary(problem);
                }
                None => println!("No unsolved problems found with the given criteria."),
            }
        }
        Sub::Review(args) => {
            let problems = store.load_all()?;
            let candidates =
                commands::review_candidates(&problems, args.weeks_ago, args.difficulty, today());
            match candidates.choose(&mut rand::thread_rng()) {
                Some(problem) => {
                    println!("Review problem: {}", problem.title());
                    print_summary(problem);
                    if let Some(date) = problem.last_pass_date() {
                        println!("Last completed: {date}");
                    }
                    println!(
                        "Completions: {}/{}",
                        problem.completions(),
                        problem.submissions()
                    );
                }
                None => println!("No completed problems found with the given criteria."),
            }
        }
        Sub::MarkComplete(args) => {
            let CompletionReport { problem, outcome } =
                commands::mark_complete(&mut store, &args.url, args.date.as_deref(), today())?;
            match outcome {
                CompletionOutcome::Recorded {
                    previous_completions,
                } => {
                    println!("Marked {} as completed", problem.title());
                    if let Some(date) = problem.last_pass_date() {
                        println!("  Date: {date}");
                    }
                    println!(
                        "  Completions: {previous_completions} -> {}",
                        problem.completions()
                    );
                }
                CompletionOutcome::AlreadyRecorded => println!(
                    "{} is already marked as completed on that date",
                    problem.title()
                ),
            }
        }
        Sub::OverrideDifficulty(args) => {
            let (problem, old) =
                commands::override_difficulty(&mut store, &args.url, args.difficulty)?;
            println!("Updated difficulty for {}", problem.title());
            println!("  {old} -> {}", args.difficulty);
        }
        Sub::Progress => {
            let problems = commands::load_or_update(&engine, &mut store).await?;
            println!("Study Plan Progress:");
            println!("{}", "=".repeat(50));
            for progress in commands::progress(&problems) {
                println!("{}:", progress.plan);
                println!(
                    "  Progress: {}/{} ({:.1}%)",
                    progress.completed,
                    progress.total,
                    progress.percentage()
                );
                println!("  Remaining: {}", progress.remaining());
                println!();
            }
        }
        Sub::Update => {
            let report = commands::update(&engine, &mut store).await?;
            println!(
                "Inserted {} new problems, updated {} problems.",
                report.inserted, report.updated
            );
        }
        Sub::Sync => {
            let cookies = LeetcodeCookies::load(&auth_path)?;
            let client = LeetcodeClient::new(&config)?.with_cookies(cookies);
            if client.current_user().await?.is_none() {
                bail!("Authentication failed. Run the `auth` command first.");
            }
            info!("Syncing submission history with the store...");
            let submissions = fetch_all_submissions(&client).await?;
            let accepted = aggregate_accepted(&submissions);
            if accepted.is_empty() {
                println!("No accepted submissions found.");
                return Ok(());
            }
            let report = apply_accepted(&mut store, &accepted, &Local)?;
            println!("Sync complete!");
            println!("  Updated {} problems with submission data", report.updated);
            if !report.outside_plans.is_empty() {
                println!(
                    "  Found {} additional problems outside study plans:",
                    report.outside_plans.len()
                );
                for title in &report.outside_plans {
                    println!("    {title}");
                }
            }
        }
        Sub::Grind75Completed => {
            let problems = commands::load_or_update(&engine, &mut store).await?;
            let extraction = engine
                .extract(StudyPlanId::Grind75.plan())
                .await
                .context("Error scraping Grind75")?;
            let completed = commands::completed_in_plan_order(&extraction, &problems);
            for (position, title) in &completed {
                println!("{position}. {title}");
            }
            println!(
                "\nTotal completed in Grind75: {}/{}",
                completed.len(),
                extraction.problems().len()
            );
        }
        Sub::Auth => {
            println!("Open https://leetcode.com while logged in, and copy the values of");
            println!("the `LEETCODE_SESSION` and `csrftoken` cookies from the developer tools.");
            let session = Password::new("LEETCODE_SESSION:")
                .with_display_mode(PasswordDisplayMode::Masked)
                .without_confirmation()
                .prompt()?;
            let csrf_token = Text::new("csrftoken:").prompt()?;
            if session.trim().is_empty() || csrf_token.trim().is_empty() {
                bail!("Both cookies are required.");
            }
            let cookies = LeetcodeCookies::builder()
                .session(session.trim().to_owned().into())
                .csrf_token(csrf_token.trim().to_owned().into())
                .build();
            cookies.save(&auth_path)?;
            println!("Cookies saved to {auth_path:?}");

            let client = LeetcodeClient::new(&config)?.with_cookies(cookies);
            match client.current_user().await? {
                Some(user) => {
                    println!("Authentication successful!");
                    println!("  User: {}", user.username);
                    if let Some(name) = user.full_name() {
                        println!("  Name: {name}");
                    }
                    if let Some(ranking) = user.profile.and_then(|p| p.ranking) {
                        println!("  Ranking: {ranking}");
                    }
                }
                None => bail!("Authentication failed. Please check your cookies and try again."),
            }
        }
    }
    Ok(())
}

fn print_summary(problem: &Problem) {
    println!("Difficulty: {}", problem.effective_difficulty());
    println!("URL: {}", problem.url());
    if problem.overridden_difficulty().is_some() {
        println!("Original difficulty: {} (overridden)", problem.difficulty());
    }
}
