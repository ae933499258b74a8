// Render roff man pages for ht and each of its subcommands
//
// Usage: generate-man [OUTPUT_DIR]   (defaults to ./man)

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::CommandFactory;
use clap_mangen::Man;
use ht::cli::Cli;

fn main() -> Result<()> {
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("man"));
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("Failed to create directory: {}", out_dir.display()))?;

    let cmd = Cli::command();
    render(Man::new(cmd.clone()), &out_dir.join("ht.1"))?;

    for sub in cmd.get_subcommands() {
        let path = out_dir.join(format!("ht-{}.1", sub.get_name()));
        render(Man::new(sub.clone()), &path)?;
    }

    println!("Man pages written to {}", out_dir.display());
    Ok(())
}

fn render(man: Man, path: &Path) -> Result<()> {
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;
    fs::write(path, buffer).with_context(|| format!("Failed to write {}", path.display()))
}
