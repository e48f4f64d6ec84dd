//! TaskFlow command-line frontend
//!
//! Thin presentation layer over `taskflow-core`: parses a command,
//! dispatches the matching intent against a file-backed session, and
//! prints the resulting visible list and counters.

use std::path::PathBuf;

use anyhow::Result;
use chrono::DateTime;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use taskflow_core::session::{TaskSession, TaskView};
use taskflow_core::storage::JsonFileStorage;
use taskflow_core::task::{Task, TaskPatch, TaskPriority};
use taskflow_core::view::{FilterMode, SortKey};

/// taskflow - a single-user task list that lives in one JSON file
#[derive(Parser, Debug)]
#[command(name = "taskflow")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the tasks data file
    #[arg(long, global = true, env = "TASKFLOW_FILE")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a new task
    Add {
        /// Task title (must not be blank)
        title: String,

        /// Optional description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Priority: low, medium, or high
        #[arg(short, long, default_value = "medium")]
        priority: String,
    },

    /// List tasks
    List {
        /// Show all, active, or completed tasks
        #[arg(long, default_value = "all")]
        filter: String,

        /// Sort: created_desc, created_asc, title_asc, title_desc, priority
        #[arg(long, default_value = "created_desc")]
        sort: String,
    },

    /// Toggle a task between pending and completed
    #[command(alias = "done")]
    Toggle {
        /// Task id
        id: String,
    },

    /// Edit fields on an existing task
    Edit {
        /// Task id
        id: String,

        /// New title (must not be blank)
        #[arg(long)]
        title: Option<String>,

        /// New description
        #[arg(long)]
        description: Option<String>,

        /// New priority: low, medium, or high
        #[arg(long)]
        priority: Option<String>,
    },

    /// Remove a task
    Rm {
        /// Task id
        id: String,
    },

    /// Remove all completed tasks
    Clear,

    /// Show the task counters
    Stats,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskflow=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let storage = JsonFileStorage::new(data_file(cli.file));
    let mut session = TaskSession::open(Box::new(storage));

    match cli.command {
        Commands::Add {
            title,
            description,
            priority,
        } => {
            let (task, view) =
                session.add_task(&title, &description, TaskPriority::parse(&priority))?;
            println!("Added {}", task.id);
            print_view(&view);
        }
        Commands::List { filter, sort } => {
            session.set_filter(FilterMode::parse(&filter));
            let view = session.set_sort(SortKey::parse(&sort));
            print_view(&view);
        }
        Commands::Toggle { id } => {
            let view = session.toggle_task(&id);
            print_view(&view);
        }
        Commands::Edit {
            id,
            title,
            description,
            priority,
        } => {
            let mut patch = TaskPatch::new();
            if let Some(title) = title {
                patch = patch.with_title(title);
            }
            if let Some(description) = description {
                patch = patch.with_description(description);
            }
            if let Some(priority) = priority {
                patch = patch.with_priority(TaskPriority::parse(&priority));
            }
            if patch.is_empty() {
                println!("Nothing to change; pass --title, --description, or --priority.");
                return Ok(());
            }
            let view = session.edit_task(&id, patch)?;
            print_view(&view);
        }
        Commands::Rm { id } => {
            let view = session.delete_task(&id);
            print_view(&view);
        }
        Commands::Clear => {
            let (removed, view) = session.clear_completed();
            println!("Cleared {} completed task(s)", removed);
            print_view(&view);
        }
        Commands::Stats => {
            print_footer(&session.view());
        }
    }

    Ok(())
}

/// Resolve the data file: `--file` wins, then `TASKFLOW_DATA_DIR`,
/// then a `.taskflow` directory next to the current directory.
fn data_file(flag: Option<PathBuf>) -> PathBuf {
    if let Some(path) = flag {
        return path;
    }
    let data_dir = std::env::var("TASKFLOW_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(".taskflow"));
    data_dir.join("tasks.json")
}

fn print_view(view: &TaskView) {
    if view.tasks.is_empty() {
        println!("No tasks to show. Add your first task!");
    } else {
        for task in &view.tasks {
            print_task(task);
        }
    }
    print_footer(view);
    if !view.persisted {
        eprintln!("warning: the last change could not be saved; it is kept for this session only");
    }
}

fn print_task(task: &Task) {
    let mark = if task.completed { "x" } else { " " };
    let created = DateTime::from_timestamp_millis(task.created_at)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string());

    println!(
        "[{}] {:<6} {}  {}  ({})",
        mark,
        task.priority.as_str(),
        created,
        task.title,
        task.id
    );
    if !task.description.is_empty() {
        println!("      {}", task.description);
    }
}

fn print_footer(view: &TaskView) {
    println!(
        "{} pending • {} completed • {} total",
        view.stats.active, view.stats.completed, view.stats.total
    );
}
