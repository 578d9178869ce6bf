use clap::Parser;
use encbox::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Encrypt { ref value, raw } => {
            encbox::cli::commands::encrypt::execute(value.as_deref(), raw)
        }
        Commands::Decrypt { ref value } => {
            encbox::cli::commands::decrypt::execute(value.as_deref())
        }
        Commands::Resolve { ref value } => {
            encbox::cli::commands::resolve::execute(value.as_deref())
        }
        Commands::Completions { ref shell } => encbox::cli::commands::completions::execute(shell),
    };

    if let Err(e) = result {
        encbox::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
