use std::path::PathBuf;

use axum::http::Method;
use clap::{Parser, Subcommand};
use serde_json::Value;

use item_service::config::{load_config, ServiceConfig};
use item_service::handlers::{build_router, RouteSettings};
use item_service::http::Request;
use item_service::lambda::{self, RuntimeInfo};
use item_service::routing::Router;

#[derive(Parser)]
#[command(name = "item-cli")]
#[command(about = "Operator CLI for the item service", long_about = None)]
struct Cli {
    /// Configuration used to build the local route table.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a request through the local route table
    Dispatch {
        /// Path with optional query, e.g. "/items/42?q=hello"
        target: String,
        #[arg(short = 'X', long, default_value = "GET")]
        method: String,
    },
    /// Run an invocation event (JSON file, or "-" for stdin) through the adapter
    Invoke {
        event: PathBuf,
    },
    /// Query a running service
    Get {
        /// Path with optional query
        target: String,
        #[arg(short, long, default_value = "http://localhost:8000")]
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Dispatch { target, method } => {
            let router = local_router(cli.config.as_ref())?;
            let method = Method::from_bytes(method.to_ascii_uppercase().as_bytes())?;
            let response = router.handle(&Request::from_target(method, &target));
            println!("{}", response.status());
            println!("{}", serde_json::to_string_pretty(response.body())?);
        }
        Commands::Invoke { event } => {
            let router = local_router(cli.config.as_ref())?;
            let raw = if event.as_os_str() == "-" {
                std::io::read_to_string(std::io::stdin())?
            } else {
                std::fs::read_to_string(&event)?
            };
            let response = lambda::invoke(&router, &raw)?;
            println!("{}", response.status());
            for (name, value) in response.headers() {
                println!("{}: {}", name, value.to_str().unwrap_or("<binary>"));
            }
            let body = String::from_utf8_lossy(response.body());
            match serde_json::from_str::<Value>(&body) {
                Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
                Err(_) => println!("{}", body),
            }
        }
        Commands::Get { target, url } => {
            let res = reqwest::get(format!("{}{}", url.trim_end_matches('/'), target)).await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

fn local_router(config: Option<&PathBuf>) -> Result<Router, Box<dyn std::error::Error>> {
    let config = match config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };
    let info = RuntimeInfo::from_env(
        config.app.runtime_label.clone(),
        config.app.framework_label.clone(),
    );
    Ok(build_router(&RouteSettings::from_config(&config.app), info)?)
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    println!("{}", status);

    let text = res.text().await?;
    match serde_json::from_str::<Value>(&text) {
        Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
        Err(_) => println!("{}", text),
    }
    Ok(())
}
