use std::process;

fn main() {
    if let Err(err) = artifact_scout::cli::run() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}
