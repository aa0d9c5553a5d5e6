mod commands;
mod sources;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, check};
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);
    print::initialize();

    let cfg = commands.run_config()?;

    print::header("smokeping endpoint validator");
    check::check(&commands.files, &commands.dir, cfg).await
}
