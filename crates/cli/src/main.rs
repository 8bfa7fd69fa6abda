fn main() {
    if let Err(error) = cursorkit_cli::run() {
        // run() installs the subscriber right after argument parsing.
        tracing::error!(%error, "cursorkit failed");
        std::process::exit(1);
    }
}
