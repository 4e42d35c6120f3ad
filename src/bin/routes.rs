//! CLI tool for inspecting the engine's route table.
//!
//! # Usage
//!
//! ```bash
//! # List all routes as mounted
//! cargo run --bin routes -- list
//!
//! # Show where a request is dispatched
//! cargo run --bin routes -- recognize GET /underlyings/1/edit
//!
//! # Build the path of a named route
//! cargo run --bin routes -- generate edit_underlying --id 1
//! ```
//!
//! # Environment Variables
//!
//! - `IB_MOUNT_PATH` (optional): default for `--mount`, `/ib` if unset

use ib_engine::config::Config;
use ib_engine::routing::{Mount, Params, RouteSet, engine_routes};

use anyhow::{Context, Result};
use axum::http::Method;
use clap::{Parser, Subcommand};
use colored::*;

/// CLI tool for inspecting ib-engine routes.
#[derive(Parser)]
#[command(name = "routes")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all routes
    List {
        /// Mount path (defaults to IB_MOUNT_PATH or /ib)
        #[arg(short, long)]
        mount: Option<String>,
    },

    /// Show which action a request dispatches to
    Recognize {
        /// HTTP method, e.g. GET
        method: String,

        /// Path relative to the mount point, e.g. /underlyings/1/edit
        path: String,
    },

    /// Generate the path of a named route
    Generate {
        /// Route name, e.g. edit_underlying
        name: String,

        /// Value for the `id` parameter
        #[arg(long)]
        id: Option<String>,

        /// Mount path (defaults to IB_MOUNT_PATH or /ib)
        #[arg(short, long)]
        mount: Option<String>,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let routes = engine_routes().context("Failed to compile engine routes")?;

    match cli.command {
        Commands::List { mount } => list_routes(&routes, &resolve_mount(mount)?),
        Commands::Recognize { method, path } => recognize(&routes, &method, &path)?,
        Commands::Generate { name, id, mount } => {
            generate(&routes, &name, id, &resolve_mount(mount)?)?
        }
    }

    Ok(())
}

/// Uses the `--mount` argument, falling back to the configured mount path.
fn resolve_mount(arg: Option<String>) -> Result<Mount> {
    let path = arg.unwrap_or_else(|| Config::from_env().mount_path);
    Mount::new(&path).context("Invalid mount path")
}

/// Prints the route table in `Prefix Verb URI Controller#Action` columns.
fn list_routes(routes: &RouteSet, mount: &Mount) {
    let rows: Vec<(String, String, String, String)> = routes
        .routes()
        .map(|route| {
            (
                route.name.clone().unwrap_or_default(),
                route.method.to_string(),
                mount.join(&route.path),
                format!("{}#{}", routes.controller_path(&route.controller), route.action),
            )
        })
        .collect();

    let name_width = rows.iter().map(|r| r.0.len()).max().unwrap_or(0).max(6);
    let verb_width = rows.iter().map(|r| r.1.len()).max().unwrap_or(0).max(4);
    let path_width = rows.iter().map(|r| r.2.len()).max().unwrap_or(0).max(11);

    println!(
        "{}",
        format!(
            "{:>name_width$} {:<verb_width$} {:<path_width$} {}",
            "Prefix", "Verb", "URI Pattern", "Controller#Action"
        )
        .bright_white()
        .bold()
    );

    for (name, verb, path, target) in rows {
        println!(
            "{} {} {} {}",
            format!("{:>name_width$}", name).cyan(),
            format!("{:<verb_width$}", verb).yellow(),
            format!("{:<path_width$}", path),
            target.green()
        );
    }
}

/// Prints the dispatch target of an engine-relative request.
fn recognize(routes: &RouteSet, method: &str, path: &str) -> Result<()> {
    let method = Method::from_bytes(method.to_ascii_uppercase().as_bytes())
        .with_context(|| format!("Invalid HTTP method '{}'", method))?;

    let found = routes.recognize(&method, path)?;

    println!("{}", found.target().green().bold());
    for (name, value) in &found.params {
        println!("  {}: {}", name.cyan(), value);
    }

    Ok(())
}

/// Prints the mounted path of a named route.
fn generate(routes: &RouteSet, name: &str, id: Option<String>, mount: &Mount) -> Result<()> {
    let mut params = Params::new();
    if let Some(id) = id {
        params.insert("id".to_string(), id);
    }

    let path = routes.path_for(name, &params)?;
    println!("{}", mount.join(&path));

    Ok(())
}
