use anyhow::Context;
use clap::Parser;
use permsort::utils::error::{ErrorSeverity, PermsortError};
use permsort::utils::logger;
use permsort::{CliConfig, Engine, TaskRequest};
use std::io::Write;

fn exit_with(e: &PermsortError) -> ! {
    tracing::error!(
        "❌ Task failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 建議: {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    let settings = config.settings();

    // 初始化日誌
    match &settings {
        Ok(s) if s.json_logs && !config.verbose => logger::init_json_logger(s.log_level.as_deref()),
        Ok(s) => logger::init_cli_logger(config.verbose, s.log_level.as_deref()),
        Err(_) => logger::init_cli_logger(config.verbose, None),
    }

    let settings = match settings {
        Ok(settings) => settings,
        Err(e) => exit_with(&e),
    };
    tracing::debug!("Effective settings: {:?}", settings);

    let request = TaskRequest::from(config.command);
    let engine = Engine::new(settings);

    let rendered = match engine.run(&request).and_then(|output| engine.render(&output)) {
        Ok(rendered) => rendered,
        Err(e) => exit_with(&e),
    };

    writeln!(std::io::stdout(), "{}", rendered).context("failed to write result to stdout")?;
    Ok(())
}
