use a11yscan::{cli::Cli, CliHandler, ScanError};
use std::process;

#[tokio::main]
async fn main() {
    // Parse command line arguments
    let cli = match Cli::parse_args() {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("❌ {}", e);
            process::exit(2);
        }
    };

    let handler = CliHandler::new(cli);

    let exit_code = match handler.run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("❌ {}", e);
            match e {
                ScanError::InvalidArguments(_) => 2,
                ScanError::MissingApiKey => 3,
                ScanError::RootDirectory { .. } => 4,
                ScanError::LlmClientError(_) => 5,
                _ => 1,
            }
        }
    };

    process::exit(exit_code);
}
