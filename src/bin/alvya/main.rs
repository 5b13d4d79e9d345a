use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match alvya::multicall::alvya::run(std::env::args_os().collect()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("alvya: {e:#}");
            ExitCode::FAILURE
        }
    }
}
