mod client;
mod dashboard;
mod db;
mod error;
mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use stoneforged_core::{AppConfig, NewProspect, SortKey, TriggerCategory};
use tracing_subscriber::EnvFilter;

use crate::client::ProspectClient;
use crate::dashboard::Dashboard;
use crate::db::DbCommands;

#[derive(Debug, Parser)]
#[command(name = "stoneforged-cli")]
#[command(about = "StoneForged prospect dashboard")]
struct Cli {
    /// Service base URL; overrides `STONEFORGED_API_URL`
    #[arg(long, global = true)]
    api_url: Option<String>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show the prospect table and summary stats
    List {
        /// Case-insensitive search across every text column
        #[arg(long)]
        search: Option<String>,
        /// Column to sort by; repeat the same key to flip to descending
        #[arg(long = "sort", value_name = "KEY")]
        sort: Vec<SortKey>,
    },
    /// Add a prospect
    Add {
        #[arg(long)]
        brand: String,
        /// Trigger category slug (e.g. rd-hire); sets the default score
        #[arg(long)]
        trigger: Option<TriggerCategory>,
        /// Free-text trigger, replacing the category text
        #[arg(long)]
        custom_trigger: Option<String>,
        /// Readiness score, clamped to 0-10
        #[arg(long)]
        score: Option<f64>,
        #[arg(long)]
        decision_maker: Option<String>,
        #[arg(long)]
        next_action: Option<String>,
    },
    /// Delete a prospect by id
    Delete { id: i64 },
    /// Add the example prospects
    Seed,
    /// Write the current view to a dated CSV file
    Export {
        #[arg(long)]
        search: Option<String>,
        #[arg(long = "sort", value_name = "KEY")]
        sort: Vec<SortKey>,
        /// Directory to write into
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
    /// List trigger categories and their score bonuses
    Triggers,
    /// Show summary stats over every prospect
    Stats,
    /// Local database maintenance
    Db {
        #[command(subcommand)]
        command: DbCommands,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let config = stoneforged_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Db { command }) => db::run_db_command(&config, command).await,
        Some(Commands::Triggers) => {
            print!("{}", render::render_triggers());
            Ok(())
        }
        command => run_dashboard_command(&config, cli.api_url.as_deref(), command).await,
    }
}

async fn run_dashboard_command(
    config: &AppConfig,
    api_url: Option<&str>,
    command: Option<Commands>,
) -> anyhow::Result<()> {
    let base_url = api_url.unwrap_or(&config.api_url);
    let client = ProspectClient::with_base_url(base_url, config.client_timeout_secs)?;
    let mut dash = Dashboard::new(client);
    dash.load().await;

    match command {
        None => print_dashboard(&dash),
        Some(Commands::List { search, sort }) => {
            apply_view(&mut dash, search, &sort);
            print_dashboard(&dash);
        }
        Some(Commands::Add {
            brand,
            trigger,
            custom_trigger,
            score,
            decision_maker,
            next_action,
        }) => {
            let draft = build_draft(
                brand,
                trigger,
                custom_trigger,
                score,
                decision_maker,
                next_action,
            );
            let id = dash.add(&draft).await?;
            println!("added prospect {id}");
            print_dashboard(&dash);
        }
        Some(Commands::Delete { id }) => {
            if dash.delete(id).await? {
                println!("deleted prospect {id}");
            } else {
                println!("no prospect with id {id}");
            }
            print_dashboard(&dash);
        }
        Some(Commands::Seed) => {
            let inserted = dash.seed().await?;
            println!("Examples added! ({inserted} new)");
            print_dashboard(&dash);
        }
        Some(Commands::Export { search, sort, out }) => {
            apply_view(&mut dash, search, &sort);
            let path = dash.export_to(&out)?;
            println!("exported to {}", path.display());
        }
        Some(Commands::Stats) => println!("{}", render::render_stats(&dash.view().stats())),
        Some(Commands::Triggers | Commands::Db { .. }) => {}
    }

    Ok(())
}

fn apply_view(dash: &mut Dashboard, search: Option<String>, sort: &[SortKey]) {
    let view = dash.view_mut();
    if let Some(term) = search {
        view.set_search(term);
    }
    for key in sort {
        view.click_sort(*key);
    }
}

fn build_draft(
    brand: String,
    trigger: Option<TriggerCategory>,
    custom_trigger: Option<String>,
    score: Option<f64>,
    decision_maker: Option<String>,
    next_action: Option<String>,
) -> NewProspect {
    let mut draft = NewProspect {
        brand,
        ..NewProspect::default()
    };
    if let Some(category) = trigger {
        draft.select_trigger(category);
    }
    if let Some(text) = custom_trigger {
        draft.trigger = text;
    }
    if let Some(score) = score {
        draft.score = score.clamp(0.0, 10.0);
    }
    if let Some(name) = decision_maker {
        draft.decision_maker = name;
    }
    if let Some(action) = next_action {
        draft.next_action = action;
    }
    draft
}

fn print_dashboard(dash: &Dashboard) {
    print!("{}", render::render_table(dash.view()));
    println!();
    println!("{}", render::render_stats(&dash.view().stats()));
}
