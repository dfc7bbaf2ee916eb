use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

mod cli;
mod cmd;
mod completions;
mod config;
mod pm;
mod ui;
mod util;

use cli::{Cli, Cmd, USAGE_TEXT};
use cmd::{cmd_add, cmd_detect, cmd_list};

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("[pmdetect] ERROR: {e:#}");
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    let log = ui::Logger::new(cli.verbose);

    let Some(cmd) = cli.cmd else {
        eprint!("{USAGE_TEXT}");
        return Ok(2);
    };

    match cmd {
        Cmd::Help => {
            print!("{USAGE_TEXT}");
            Ok(0)
        }

        Cmd::Detect {
            dir,
            fallback,
            index,
            json,
        } => cmd_detect(&log, &dir, fallback, index, json),

        Cmd::Add {
            dir,
            fallback,
            packages,
        } => cmd_add(&log, &dir, fallback, &packages),

        Cmd::List { json } => cmd_list(json),

        Cmd::Completions { shell } => {
            print!("{}", completions::script(shell));
            Ok(0)
        }
    }
}
