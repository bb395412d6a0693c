use anyhow::Result;
use clap::Parser;
use crossterm::terminal;
use employee_stack::{
    app::{self, App},
    config::Cli,
    logging, MenuIo, TerminalIo,
};
use std::{env, panic};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Held until exit so the log file is flushed.
    let _log_guard = match &cli.log_file {
        Some(path) => Some(logging::init_file_logging(path, &cli.log_level)?),
        None => None,
    };

    // Catch panics and errors, so we can reset the terminal mode.
    // Otherwise it gets all wonky, and you have to close it and open a new one.
    let err = panic::catch_unwind(|| run(&cli));
    terminal::disable_raw_mode()?;
    match err {
        Ok(result) => result,
        Err(payload) => panic::resume_unwind(payload),
    }
}

fn run(cli: &Cli) -> Result<()> {
    let theme = cli.theme(env::var("NO_COLOR").ok().as_deref());
    let mut io = TerminalIo::new();

    let capacity = match cli.capacity {
        Some(n) => {
            let capacity = app::checked_capacity(n);
            if capacity.is_none() {
                app::report_bad_capacity(&mut io, &theme)?;
            }
            capacity
        }
        None => app::prompt_capacity(&mut io, &theme)?,
    };
    let Some(capacity) = capacity else {
        // Not an error: the user was told why, and we exit cleanly.
        return Ok(());
    };
    tracing::info!(capacity, "stack created");

    App::new(capacity, theme, &mut io).run()?;
    io.print("\n")
}
