mod ui;

use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use taskpad_core::{input, FileTaskStore, TaskList, TaskStore};

#[derive(Parser)]
#[command(name = "taskpad")]
#[command(about = "A conversational task tracker for your terminal", long_about = None)]
struct Cli {
    /// Directory the task file is kept in (defaults to ~/.taskpad)
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    if std::env::var("TASKPAD_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("taskpad_core=debug,taskpad_cli=debug")
            .with_writer(io::stderr)
            .init();
    }

    let cli = Cli::parse();
    let store = FileTaskStore::new(cli.data_dir)?;
    let mut tasks = TaskList::from_tasks(store.load()?);

    ui::print_welcome();

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match input::parse(&line) {
            Ok(command) => command,
            Err(err) => {
                ui::print_message(&err.to_string());
                continue;
            }
        };

        let is_exit = command.is_exit();
        match command.execute(&mut tasks, &store) {
            Ok(message) => ui::print_message(&message),
            Err(err) => ui::print_message(&format!("Something went wrong: {:#}", err)),
        }
        if is_exit {
            break;
        }
    }

    Ok(())
}
