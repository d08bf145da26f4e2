mod assembler;
mod catalog;
mod cli;
mod error;
mod fmt;
mod grouping;
mod models;
mod sampler;
mod settings;
mod store;
mod synth;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { data_dir } => cli::init::run(data_dir),
        Commands::Generate {
            seed,
            months,
            card_months,
            force,
        } => cli::generate::run(seed, months, card_months, force),
        Commands::Users => cli::users::run(),
        Commands::Accounts { user } => cli::accounts::run(user),
        Commands::Cards { user } => cli::cards::run(user),
        Commands::Loans { user } => cli::loans::run(user),
        Commands::Transactions { account, limit } => cli::transactions::run(&account, limit),
        Commands::Export { output, format } => cli::export::run(output, &format),
        Commands::Status => cli::status::run(),
        Commands::Clear => cli::clear::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
