//! Command-line front end for ToolNest.
//!
//! # Responsibility
//! - Parse arguments and route them to core task, theme, and catalog calls.
//! - Keep the process usable when the database cannot be opened by degrading
//!   to an in-memory store for the current invocation.

use clap::{Parser, Subcommand};
use log::warn;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use toolnest_core::{
    default_log_level, fetch_products, init_logging, open_db, search_products, DbError,
    KeyValueStore, MemoryStore, SqliteKeyValueStore, StoreTaskRepository, TaskFilter, TaskId,
    TaskListController, ThemePreference, DEFAULT_PRODUCTS_URL,
};

const APP_DIR_NAME: &str = "toolnest";
const DB_FILE_NAME: &str = "toolnest.sqlite3";

#[derive(Parser, Debug)]
#[command(name = "toolnest", version)]
#[command(about = "Task list and storefront browser for the terminal")]
struct Cli {
    /// SQLite database path. Defaults to a file in the per-user data
    /// directory.
    #[arg(long, global = true)]
    db: Option<PathBuf>,
    /// Log level (trace|debug|info|warn|error).
    #[arg(long, global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a task; all words become one task text
    Add { text: Vec<String> },
    /// List tasks
    List {
        /// Which tasks to show (all|active|completed)
        #[arg(long, default_value = "all", value_parser = parse_filter)]
        filter: TaskFilter,
    },
    /// Flip a task between active and completed
    Toggle { id: TaskId },
    /// Delete a task
    Delete { id: TaskId },
    /// Show the saved color theme, or switch it
    Theme {
        /// Switch between light and dark
        #[arg(long)]
        toggle: bool,
    },
    /// Fetch the product catalog and list matching products
    Products {
        /// Keep only products whose title contains this text
        #[arg(long)]
        query: Option<String>,
        #[arg(long, default_value = DEFAULT_PRODUCTS_URL)]
        url: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_cli_logging(cli.log_level.as_deref());

    let db_path = resolve_db_path(cli.db);
    prepare_parent_dir(&db_path);

    match open_db(&db_path) {
        Ok(conn) => match SqliteKeyValueStore::try_new(&conn) {
            Ok(store) => run_command(store, cli.command),
            Err(err) => run_degraded(cli.command, &db_path, &err),
        },
        Err(err) => run_degraded(cli.command, &db_path, &err),
    }
}

fn run_command<S: KeyValueStore>(mut store: S, command: Commands) -> ExitCode {
    match command {
        Commands::Add { text } => {
            let mut controller = TaskListController::new(StoreTaskRepository::new(store));
            let text = text.join(" ");
            match controller.add(&text) {
                Some(id) => println!("Added task {id}."),
                None => println!("Nothing to add."),
            }
            ExitCode::SUCCESS
        }
        Commands::List { filter } => {
            let mut controller = TaskListController::new(StoreTaskRepository::new(store));
            controller.set_filter(filter);
            let visible = controller.visible_tasks();
            if visible.is_empty() {
                println!("No tasks found.");
            } else {
                for task in visible {
                    let mark = if task.completed { "[x]" } else { "[ ]" };
                    println!("{mark} {} {}", task.id, task.text);
                }
            }
            ExitCode::SUCCESS
        }
        Commands::Toggle { id } => {
            let mut controller = TaskListController::new(StoreTaskRepository::new(store));
            if controller.toggle_complete(id) {
                let state = controller
                    .task(id)
                    .map(|task| if task.completed { "completed" } else { "active" })
                    .unwrap_or("updated");
                println!("Task {id} is now {state}.");
            } else {
                println!("No task with id {id}.");
            }
            ExitCode::SUCCESS
        }
        Commands::Delete { id } => {
            let mut controller = TaskListController::new(StoreTaskRepository::new(store));
            if controller.delete(id) {
                println!("Deleted task {id}.");
            } else {
                println!("No task with id {id}.");
            }
            ExitCode::SUCCESS
        }
        Commands::Theme { toggle } => {
            let current = ThemePreference::load(&store);
            if toggle {
                let next = current.toggled();
                next.save(&mut store);
                println!("Theme set to {}.", next.label());
            } else {
                println!("Theme: {}", current.label());
            }
            ExitCode::SUCCESS
        }
        Commands::Products { query, url } => {
            run_products(query.as_deref().unwrap_or(""), &url)
        }
    }
}

fn run_products(query: &str, url: &str) -> ExitCode {
    println!("Loading...");
    match fetch_products(url) {
        Ok(products) => {
            let matched = search_products(&products, query);
            if matched.is_empty() {
                println!("No products matched.");
            } else {
                for product in matched {
                    println!("#{} {} R{}", product.id, product.title, product.price);
                }
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Failed to load products: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Runs `command` against a throwaway in-memory store after the database
/// failed to open. Tasks and theme still work; nothing is saved.
fn run_degraded(command: Commands, db_path: &Path, reason: &DbError) -> ExitCode {
    warn!(
        "event=cli_store module=cli status=degraded error_code=store_unavailable path={} message={reason}",
        db_path.display()
    );
    eprintln!(
        "warning: cannot use task storage at `{}`; changes in this run will not be saved",
        db_path.display()
    );
    run_command(MemoryStore::new(), command)
}

fn parse_filter(raw: &str) -> Result<TaskFilter, String> {
    TaskFilter::parse(raw).ok_or_else(|| "expected one of: all, active, completed".to_string())
}

fn resolve_db_path(flag: Option<PathBuf>) -> PathBuf {
    if let Some(path) = flag {
        return path;
    }
    data_root().join(DB_FILE_NAME)
}

fn data_root() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR_NAME)
}

fn prepare_parent_dir(db_path: &Path) {
    // Failure surfaces as a degraded run when the database open fails next.
    if let Some(parent) = db_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
}

fn init_cli_logging(level_override: Option<&str>) {
    let level = level_override.unwrap_or(default_log_level());
    let log_dir = data_root().join("logs");
    let Some(log_dir) = log_dir.to_str() else {
        eprintln!("warning: log directory path is not valid UTF-8; logging disabled");
        return;
    };
    if let Err(err) = init_logging(level, log_dir) {
        eprintln!("warning: logging disabled: {err}");
    }
}
