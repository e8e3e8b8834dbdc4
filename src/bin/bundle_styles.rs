use std::path::Path;
use std::process::ExitCode;

use expert_link::bundle::{bundle, BundleError};

const SRC: &str = "build/tailwind.css";
const DST: &str = "styles.html";

fn main() -> ExitCode {
    match bundle(Path::new(SRC), Path::new(DST)) {
        Ok(bytes) => {
            println!("Generated {DST} ({bytes} bytes)");
            ExitCode::SUCCESS
        }
        Err(e @ BundleError::MissingSource(_)) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Failed to generate {DST}: {e}");
            ExitCode::FAILURE
        }
    }
}
