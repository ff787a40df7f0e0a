//! Development tasks for readalong.
//!
//! Run with `cargo run -p xtask -- <task>`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_mangen::Man;

use readalong::cli::Cli;

#[derive(Parser)]
#[command(name = "xtask")]
struct Tasks {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages for readalong and its subcommands
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    match Tasks::parse().task {
        Task::Man { out } => generate_man_pages(&out),
    }
}

fn generate_man_pages(out: &Path) -> Result<()> {
    fs::create_dir_all(out).with_context(|| format!("Failed to create {}", out.display()))?;

    let cmd = Cli::command();
    write_page(out, "readalong", &cmd)?;
    for sub in cmd.get_subcommands() {
        let name = format!("readalong-{}", sub.get_name());
        write_page(out, &name, sub)?;
    }

    println!("Man pages written to {}", out.display());
    Ok(())
}

fn write_page(out: &Path, name: &str, cmd: &clap::Command) -> Result<()> {
    let mut buffer = Vec::new();
    Man::new(cmd.clone()).render(&mut buffer)?;
    let path = out.join(format!("{}.1", name));
    fs::write(&path, buffer).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
