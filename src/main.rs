use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use buildenv::{ui, EnvResolver};

#[derive(clap::Parser)]
#[command(
    name = "buildenv",
    about = "Resolve the deployment mode and build version label for a project"
)]
struct Args {
    #[arg(long, help = "Force development mode")]
    development: bool,

    #[arg(long, alias = "test", help = "Force test mode")]
    testing: bool,

    #[arg(long, help = "Force production mode")]
    production: bool,

    #[arg(
        short,
        long,
        help = "Resolution root directory (defaults to the current directory)"
    )]
    root: Option<PathBuf>,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("buildenv {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let root = match args.root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };
    if !root.is_dir() {
        ui::display_status(&format!(
            "Root '{}' is not a directory; resolving with defaults",
            root.display()
        ));
    }

    // The resolver scans its argv snapshot by membership; hand it the mode
    // flags clap accepted so both parsers agree on the spelling.
    let mut flags = Vec::new();
    if args.development {
        flags.push("--development".to_string());
    }
    if args.testing {
        flags.push("--testing".to_string());
    }
    if args.production {
        flags.push("--production".to_string());
    }

    let resolver = EnvResolver::new(root).with_argv(flags);
    match resolver.resolve() {
        Ok(environment) => {
            environment.show_stdout();
            Ok(())
        }
        Err(e) => {
            ui::display_error(&format!("Failed to resolve environment: {}", e));
            std::process::exit(1);
        }
    }
}
