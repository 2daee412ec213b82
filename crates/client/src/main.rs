//! `yapp-client` -- terminal front end for the Yapp items API.
//!
//! Every command first mounts the view (health check plus list fetch),
//! performs its action, and prints the rendered screen. The process exits
//! non-zero when the action left an error banner.
//!
//! # Environment variables
//!
//! | Variable       | Default                      | Description              |
//! |----------------|------------------------------|--------------------------|
//! | `YAPP_API_URL` | `http://localhost:5000/api`  | API base including `/api` |

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use yapp_client::api::{ApiClient, DEFAULT_BASE_URL};
use yapp_client::view::ItemsView;
use yapp_core::types::DbId;

#[derive(Debug, Parser)]
#[command(name = "yapp-client", version, about = "Terminal client for the Yapp items API")]
struct Cli {
    /// API base URL, including the `/api` prefix.
    #[arg(long, env = "YAPP_API_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show API status and all items (the default).
    List,
    /// Show API status only.
    Status,
    /// Create an item.
    Add {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Delete an item by id.
    Delete { id: DbId },
    /// Interactive session.
    Shell,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "yapp_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let mut view = ItemsView::new(ApiClient::new(cli.base_url));
    view.mount().await;

    match cli.command.unwrap_or(Command::List) {
        Command::List => print!("{}", view.render()),
        Command::Status => {
            let status = match view.api_healthy() {
                Some(true) => "API online",
                _ => "API unreachable",
            };
            println!("{status}");
            return Ok(if view.api_healthy() == Some(true) {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            });
        }
        Command::Add { title, description } => {
            view.set_title(title);
            view.set_description(description);
            if !view.submit().await {
                eprintln!("Title is required");
                return Ok(ExitCode::FAILURE);
            }
            print!("{}", view.render());
        }
        Command::Delete { id } => {
            view.delete(id).await;
            print!("{}", view.render());
        }
        Command::Shell => {
            run_shell(&mut view).await?;
            return Ok(ExitCode::SUCCESS);
        }
    }

    Ok(if view.error().is_some() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

const SHELL_HELP: &str = "commands: add <title> [| <description>], rm <id>, refresh, help, quit";

/// Read commands from stdin until `quit` or end of input.
async fn run_shell(view: &mut ItemsView) -> anyhow::Result<()> {
    print!("{}", view.render());
    println!("{SHELL_HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        let (cmd, rest) = line.split_once(' ').unwrap_or((line, ""));

        match cmd {
            "" => continue,
            "quit" | "exit" => break,
            "help" => {
                println!("{SHELL_HELP}");
                continue;
            }
            "refresh" => view.load_items().await,
            "add" => {
                let (title, description) = rest.split_once('|').unwrap_or((rest, ""));
                view.set_title(title.trim());
                view.set_description(description.trim());
                if !view.can_submit() {
                    println!("Title is required");
                    continue;
                }
                view.submit().await;
            }
            "rm" => match rest.trim().parse::<DbId>() {
                Ok(id) => view.delete(id).await,
                Err(_) => {
                    println!("usage: rm <id>");
                    continue;
                }
            },
            other => {
                println!("unknown command '{other}'; {SHELL_HELP}");
                continue;
            }
        }

        print!("{}", view.render());
    }

    Ok(())
}
