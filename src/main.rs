use anyhow::Context;
use clap::Parser;
use merchant_guide::adapters::{input, output};
use merchant_guide::utils::{logger, validation::Validate};
use merchant_guide::{CliConfig, GuideConfig, GuideEngine, GuideError, Session};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting merchant-guide");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path);
            GuideConfig::from_file(path).unwrap_or_else(|e| exit_with(&e))
        }
        None => GuideConfig::default(),
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    let format = cli.format.unwrap_or(config.output.format);
    let mut session = Session::from_config(&config).unwrap_or_else(|e| exit_with(&e));
    let text = input::read_batch(cli.input.as_deref()).unwrap_or_else(|e| exit_with(&e));

    let engine = GuideEngine::default();
    let report = engine.run(&mut session, &text);

    let rendered = output::renderer_for(format, &config.output.separator)
        .render(&report)
        .context("rendering results")?;
    print!("{}", rendered);

    Ok(())
}

fn exit_with(e: &GuideError) -> ! {
    tracing::error!("{} (Category: {:?})", e, e.category());
    tracing::error!("Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(1);
}
