use editor_launch::{cli, reporting};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match cli::run().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            reporting::print_error(&e);
            ExitCode::FAILURE
        }
    }
}
