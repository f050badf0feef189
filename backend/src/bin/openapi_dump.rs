//! Print a service's OpenAPI document as YAML.

use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use storefront::inbound::http::docs::ApiDocs;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Service {
    Orders,
    Users,
}

#[derive(Debug, Parser)]
#[command(about = "Print the OpenAPI document of one service")]
struct Args {
    /// Service whose document is printed.
    #[arg(value_enum)]
    service: Service,
}

#[expect(
    clippy::print_stdout,
    clippy::print_stderr,
    reason = "command-line tool writes the document to stdout"
)]
fn main() -> ExitCode {
    let args = Args::parse();
    let docs = match args.service {
        Service::Orders => ApiDocs::orders(),
        Service::Users => ApiDocs::users(),
    };
    match docs {
        Ok(docs) => {
            print!("{}", docs.yaml());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
