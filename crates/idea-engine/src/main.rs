//! Idea Engine CLI
//!
//! Drives the engine against the configured agent gateway and schedule
//! service. The dashboard UI is a separate frontend; this binary covers the
//! same operations from a terminal.

use anyhow::Context;
use clap::{Arg, ArgAction, Command};
use idea_engine::{
    cron_to_human, EngineConfig, HttpAgentGateway, HttpScheduleService, IdeaEngine,
    ScheduleService,
};
use idea_ledger::FileStore;
use idea_model::CampaignStatus;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Command::new("idea-engine")
        .version(idea_engine::VERSION)
        .about("Agent-driven idea campaign engine")
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .help("Path to a TOML config file"),
        )
        .subcommand(Command::new("generate").about("Generate a fresh idea batch for today"))
        .subcommand(
            Command::new("send")
                .about("Send today's pending campaign by email")
                .arg(
                    Arg::new("to")
                        .long("to")
                        .required(true)
                        .help("Comma-separated recipient addresses"),
                )
                .arg(Arg::new("cc").long("cc").help("Comma-separated CC addresses"))
                .arg(
                    Arg::new("subject")
                        .long("subject")
                        .help("Override the subject line"),
                ),
        )
        .subcommand(
            Command::new("history")
                .about("List campaign history")
                .arg(Arg::new("search").long("search").default_value(""))
                .arg(Arg::new("category").long("category").default_value("all"))
                .arg(
                    Arg::new("samples")
                        .long("samples")
                        .action(ArgAction::SetTrue)
                        .help("Include sample campaigns"),
                ),
        )
        .subcommand(
            Command::new("schedule")
                .about("Inspect or control the daily generation schedule")
                .subcommand(Command::new("status").about("Show schedule state and recent runs"))
                .subcommand(Command::new("pause").about("Pause the schedule"))
                .subcommand(Command::new("resume").about("Resume the schedule"))
                .subcommand(Command::new("trigger").about("Run the schedule now")),
        );

    let matches = cli.get_matches();

    let config = match matches.get_one::<String>("config") {
        Some(path) => EngineConfig::from_file(path).context("loading config")?,
        None => EngineConfig::default(),
    };

    match matches.subcommand() {
        Some(("generate", _)) => generate(config).await,
        Some(("send", sub)) => {
            let to = sub.get_one::<String>("to").cloned().unwrap_or_default();
            let cc = sub.get_one::<String>("cc").cloned().unwrap_or_default();
            let subject = sub.get_one::<String>("subject").cloned();
            send(config, &to, &cc, subject).await
        }
        Some(("history", sub)) => {
            let search = sub.get_one::<String>("search").cloned().unwrap_or_default();
            let category = sub
                .get_one::<String>("category")
                .cloned()
                .unwrap_or_else(|| "all".to_string());
            let samples = sub.get_flag("samples");
            history(config, &search, &category, samples)
        }
        Some(("schedule", sub)) => schedule(config, sub.subcommand_name()).await,
        _ => {
            println!("No command given; try --help");
            Ok(())
        }
    }
}

fn open_engine(config: EngineConfig) -> anyhow::Result<IdeaEngine> {
    let gateway = Arc::new(HttpAgentGateway::new(config.gateway_url.as_str()));
    let store = Arc::new(
        FileStore::open(&config.storage_dir).context("opening the campaign store")?,
    );
    Ok(IdeaEngine::new(config, gateway, store))
}

async fn generate(config: EngineConfig) -> anyhow::Result<()> {
    let mut engine = open_engine(config)?;
    let summary = engine.generate().await?;

    println!(
        "Generated {} ideas ({} hours/week saved in total)",
        summary.idea_count, summary.total_hours_saved
    );
    println!("Suggested subject: {}", summary.subject_line);
    for (i, idea) in engine.ideas().iter().enumerate() {
        println!(
            "  {}. {} [{}] {}h/wk",
            i + 1,
            idea.title,
            idea.category,
            idea.hours_saved_per_week
        );
    }
    Ok(())
}

async fn send(
    config: EngineConfig,
    to: &str,
    cc: &str,
    subject: Option<String>,
) -> anyhow::Result<()> {
    let mut engine = open_engine(config)?;

    if engine.load_todays_pending() {
        println!("Sending today's pending campaign ({} ideas)", engine.ideas().len());
    }
    engine.set_recipients(to);
    engine.set_cc(cc);
    if let Some(subject) = subject {
        engine.set_subject_line(subject);
    }

    let summary = engine.send().await?;
    match summary.delivery_status {
        Some(status) => println!(
            "Campaign sent to {} recipient(s), status: {status}",
            summary.recipient_count
        ),
        None => println!(
            "Campaign submitted to {} recipient(s)",
            summary.recipient_count
        ),
    }
    println!("{} ideas counted toward this month", summary.idea_count);
    Ok(())
}

fn history(
    config: EngineConfig,
    search: &str,
    category: &str,
    samples: bool,
) -> anyhow::Result<()> {
    let engine = open_engine(config)?;
    let records = engine.history(search, category, samples);

    if records.is_empty() {
        println!("No campaigns match.");
        return Ok(());
    }
    for record in &records {
        let status = match record.status {
            CampaignStatus::Sent => "sent",
            CampaignStatus::Generated => "draft",
        };
        println!(
            "{}  {:<5}  {} ({} ideas, {} recipients)",
            record.date,
            status,
            if record.subject_line.is_empty() {
                "Untitled Campaign"
            } else {
                record.subject_line.as_str()
            },
            record.ideas.len(),
            record.recipient_count
        );
    }
    let categories = engine.history_categories(samples);
    if !categories.is_empty() {
        println!("Categories: {}", categories.join(", "));
    }
    Ok(())
}

async fn schedule(config: EngineConfig, action: Option<&str>) -> anyhow::Result<()> {
    let service = HttpScheduleService::new(config.schedule_url.as_str());
    let schedule_id = &config.schedule_id;

    match action {
        Some("pause") => {
            service.pause(schedule_id).await?;
            println!("Schedule paused.");
        }
        Some("resume") => {
            service.resume(schedule_id).await?;
            println!("Schedule resumed.");
        }
        Some("trigger") => {
            service.trigger_now(schedule_id).await?;
            println!("Schedule triggered; the agent will run shortly.");
        }
        _ => {
            let schedule = service.get(schedule_id).await?;
            println!(
                "Schedule {} is {}",
                schedule.id,
                if schedule.is_active { "active" } else { "paused" }
            );
            println!(
                "Frequency: {} ({})",
                cron_to_human(&schedule.cron_expression),
                if schedule.timezone.is_empty() {
                    "UTC"
                } else {
                    schedule.timezone.as_str()
                }
            );
            if let Some(next) = &schedule.next_run_time {
                println!("Next run: {next}");
            }
            if let Some(last) = &schedule.last_run_at {
                let outcome = match schedule.last_run_success {
                    Some(true) => " (success)",
                    Some(false) => " (failed)",
                    None => "",
                };
                println!("Last run: {last}{outcome}");
            }

            let executions = service.list_executions(schedule_id, 10).await?;
            if executions.is_empty() {
                println!("No execution logs yet.");
            } else {
                println!("Recent runs:");
                for log in executions {
                    println!(
                        "  {}  {}  attempt {}/{}  {}",
                        log.executed_at,
                        if log.success { "ok " } else { "FAIL" },
                        log.attempt,
                        log.max_attempts,
                        log.error_message.unwrap_or_default()
                    );
                }
            }
        }
    }
    Ok(())
}
