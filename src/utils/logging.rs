use tracing::Level;

// logs go to stderr so that stdout only carries the console dialogue
pub fn setup_tracing(level: Level, json: bool) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_writer(std::io::stderr);
    if json {
        builder
            .with_ansi(false)
            .json()
            .init();
    } else {
        builder.init();
    }
}
