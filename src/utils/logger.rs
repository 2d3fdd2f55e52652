use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_filter(verbose: bool, level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| match (verbose, level) {
        (true, _) => EnvFilter::new("permsort=debug,info"),
        (false, Some(level)) => EnvFilter::new(format!("permsort={}", level)),
        (false, None) => EnvFilter::new("permsort=warn"),
    })
}

pub fn init_cli_logger(verbose: bool, level: Option<&str>) {
    let filter = default_filter(verbose, level);

    // try_init: 測試中可能重複初始化
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init();
}

pub fn init_json_logger(level: Option<&str>) {
    let filter = default_filter(false, level);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_writer(std::io::stderr)
                .json(),
        )
        .try_init();
}
