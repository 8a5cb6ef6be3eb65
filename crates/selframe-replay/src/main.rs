#![forbid(unsafe_code)]

use clap::Parser;
use selframe_replay::cli::{Cli, run};

fn main() {
    let cli = Cli::parse();
    let json = cli.wants_json();
    if let Err(error) = run(cli) {
        if json {
            eprintln!(
                "{}",
                serde_json::json!({
                    "status": "error",
                    "error": error.to_string(),
                    "exit_code": error.exit_code(),
                })
            );
        } else {
            eprintln!("{error}");
        }
        std::process::exit(error.exit_code());
    }
}
