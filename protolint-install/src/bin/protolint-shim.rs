use std::process::ExitCode;

use protolint_install::extractor::PRIMARY_EXECUTABLE;
use protolint_install::shim;

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    shim::main(PRIMARY_EXECUTABLE)
}
