use anyhow::Result;
use tracing::info;

use dropfour_core::EMPTY_BOARD_TEXT;
use dropfour_engine::EngineConfig;
use dropfour_protocol::ProtocolEngine;

fn main() -> Result<()> {
    // stdout carries protocol replies only.
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let config = EngineConfig::default();
    info!(
        time_budget_ms = config.time_budget.as_millis() as u64,
        max_extensions = config.max_extensions,
        start = EMPTY_BOARD_TEXT,
        "dropfour starting"
    );

    ProtocolEngine::new(config).run()?;
    Ok(())
}
