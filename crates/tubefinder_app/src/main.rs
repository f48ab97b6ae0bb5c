mod platform;

use std::process::ExitCode;

use engine_logging::engine_error;

fn main() -> ExitCode {
    match platform::run_app() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            engine_error!("tubefinder_app failed: {err}");
            eprintln!("tubefinder_app: {err}");
            ExitCode::FAILURE
        }
    }
}
