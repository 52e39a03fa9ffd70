//! Command dispatch and the interactive roster session.

use std::io::IsTerminal;

use crate::adapter::inbound::cli::command::{Cli, Commands};
use crate::adapter::inbound::cli::output::{self, OutputConfig};
use crate::adapter::inbound::cli::prompt::{LinePrompt, Prompt, TerminalPrompt};
use crate::adapter::inbound::cli::roster;
use crate::application::Roster;
use crate::domain::StudentId;
use crate::error::Result;
use crate::port::inbound::operator::{DatasetSources, OpenRequest, RosterOperator};
use crate::port::outbound::store::RosterStore;

/// Execute a parsed command line against the roster `operator` opens.
///
/// # Errors
/// Returns configuration, dataset, database and I/O errors. Roster
/// conditions are reported and never returned.
pub fn execute<O: RosterOperator>(cli: Cli, operator: &O) -> Result<()> {
    output::configure(OutputConfig::new(cli.json, cli.quiet));

    let opened = operator.open(&OpenRequest {
        config: cli.config,
        log_level: cli.log_level,
    })?;
    let roster = Roster::new(opened.store);
    let datasets = opened.datasets;

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            output::header(env!("CARGO_PKG_VERSION"));
            if std::io::stdin().is_terminal() {
                session(&roster, &datasets, &mut TerminalPrompt::new())
            } else {
                let stdin = std::io::stdin();
                session(&roster, &datasets, &mut LinePrompt::new(stdin.lock()))
            }
        }
        Commands::Load => roster::load(&roster, &datasets).map(|_| ()),
        Commands::Students => roster::students(&roster),
        Commands::Tutors => roster::tutors(&roster),
        Commands::Search(args) => roster::search(&roster, &args.tutor),
        Commands::Reassign(args) => {
            roster::reassign(&roster, StudentId::new(args.student_id), &args.tutor)
        }
        Commands::Count(args) => roster::count(&roster, args.grade),
    }
}

/// The full roster session: reset and load, list, then answer the
/// operator's search, reassignment and count questions in that order.
///
/// # Errors
/// Returns infrastructure errors and unanswerable prompts. Roster
/// conditions are reported and the session moves on.
pub fn session<S, P>(roster: &Roster<S>, dataset: &DatasetSources, prompt: &mut P) -> Result<()>
where
    S: RosterStore,
    P: Prompt,
{
    roster::load(roster, dataset)?;
    roster::students(roster)?;

    let tutor = prompt.text("Tutor to search")?;
    roster::search(roster, &tutor)?;

    let new_tutor = prompt.text("New tutor name")?;
    let id = prompt.number("Student id to reassign")?;
    roster::reassign(roster, StudentId::new(id), &new_tutor)?;

    let grade = prompt.number("Grade to count")?;
    roster::count(roster, grade)?;

    Ok(())
}
