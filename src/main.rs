use anyhow::Result;
use statoids::{config::Config, run};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .init();

    // ─── 2) fetch, parse, write ──────────────────────────────────────
    let config = Config::default();
    info!(url = %config.url, "fetching other country codes");
    let summary = run(&config).await?;

    info!(
        rows = summary.rows,
        artifacts = summary.artifacts,
        written = summary.written,
        output = %config.output.display(),
        "all done"
    );
    Ok(())
}
