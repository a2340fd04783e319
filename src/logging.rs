//! Console logging for the tutorial binaries.

/// Installs a fern logger writing timestamped lines to stdout. Call once at
/// the top of `main`.
pub fn init() {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%H:%M:%S"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Info)
        .chain(std::io::stdout())
        .apply()
        .expect("logger installed twice");
}
