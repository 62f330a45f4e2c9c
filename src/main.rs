use std::process::ExitCode;

fn main() -> ExitCode {
    smdr_logger::cli::run()
}
