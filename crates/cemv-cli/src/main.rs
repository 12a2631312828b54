use cemv_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Initialize logging as early as possible.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    // Parse CLI and dispatch. An incomplete project is a normal outcome,
    // signalled through the exit code rather than an error.
    match CliCommand::run_from_args() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("cemv error: {:#}", err);
            std::process::exit(1);
        }
    }
}
