use clap::Parser;

use rollcall::adapter::inbound::cli::command::Cli;
use rollcall::adapter::inbound::cli::{output, run};
use rollcall::infrastructure::operator::Operator;

fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(e) = run::execute(cli, &Operator) {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
