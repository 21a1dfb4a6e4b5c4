use std::io::{self, BufRead, Write};
use std::sync::Arc;

use dotenvy::dotenv;

use business::domain::product::value_objects::ProductId;
use dashboard::config::DashboardConfig;
use dashboard::dashboard::Dashboard;
use dashboard::form::FormField;
use dashboard::gateway::Confirm;
use dashboard::render::render;
use dashboard::service::ProductService;

const HELP: &str = "commands: list | next | prev | page N | add | edit ID | set FIELD VALUE | \
save | cancel | delete ID | select ID | select-all | delete-selected | help | quit";

/// Asks on the terminal and accepts `y` or `yes`.
struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        print!("{prompt} [y/N] ");
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}

fn parse_id(arg: Option<&str>) -> Option<ProductId> {
    arg.and_then(|raw| raw.parse().ok())
}

/// Dashboard Entry Point
///
/// Line-oriented front end over the product API.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration and wire the client
    let config = DashboardConfig::from_env();
    let service = ProductService::new(&config.api_url)?;
    tracing::info!("Using product API at {}", service.base_url());
    let mut dashboard = Dashboard::new(Arc::new(service), Arc::new(TerminalConfirm), config.page_size);

    // 4. Command loop
    dashboard.load().await;
    println!("{}", render(&dashboard));
    println!("{HELP}");

    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            break;
        }

        let line = line.trim();
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();
        let arg = (!rest.is_empty()).then_some(rest);

        match command {
            "" => continue,
            "quit" | "exit" => break,
            "help" => {
                println!("{HELP}");
                continue;
            }
            "list" => dashboard.load().await,
            "next" => dashboard.next_page().await,
            "prev" => dashboard.prev_page().await,
            "page" => match arg.and_then(|raw| raw.parse::<u32>().ok()) {
                Some(page) => dashboard.change_page(page).await,
                None => {
                    println!("usage: page N");
                    continue;
                }
            },
            "add" => dashboard.start_add(),
            "cancel" => dashboard.cancel(),
            "save" => dashboard.save().await,
            "edit" => match parse_id(arg) {
                Some(id) => dashboard.start_edit(id),
                None => {
                    println!("usage: edit ID");
                    continue;
                }
            },
            "set" => {
                let (field, value) = rest.split_once(' ').unwrap_or((rest, ""));
                match field.parse::<FormField>() {
                    Ok(field) => dashboard.draft_mut().set(field, value.trim()),
                    Err(err) => {
                        println!("{err}");
                        continue;
                    }
                }
            }
            "delete" => match parse_id(arg) {
                Some(id) => dashboard.delete(id).await,
                None => {
                    println!("usage: delete ID");
                    continue;
                }
            },
            "select" => match parse_id(arg) {
                Some(id) => dashboard.toggle_selected(id),
                None => {
                    println!("usage: select ID");
                    continue;
                }
            },
            "select-all" => dashboard.toggle_select_all(),
            "delete-selected" => {
                for outcome in dashboard.mass_delete().await {
                    match outcome.result {
                        Ok(id) => println!("deleted {id}"),
                        Err(err) => println!("failed {}: {}", outcome.id, err),
                    }
                }
            }
            other => {
                println!("unknown command: {other}");
                println!("{HELP}");
                continue;
            }
        }

        println!("{}", render(&dashboard));
    }

    Ok(())
}
