use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use portfolio::config::Args;
use portfolio::content::Portfolio;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    // --- Load content ---
    let portfolio = match &args.content {
        Some(path) => Portfolio::load(path)
            .with_context(|| format!("loading content from {}", path.display()))?,
        None => {
            let portfolio = Portfolio::default();
            portfolio.validate()?;
            portfolio
        }
    };
    info!(
        experiences = portfolio.experiences.len(),
        settle_ms = args.settle_ms,
        tick_ms = args.tick_ms,
        "portfolio ready"
    );

    if args.headless {
        let runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
        return runtime.block_on(portfolio::headless::run(
            portfolio,
            args.settle_delay(),
            args.tick_period(),
        ));
    }

    run_viewer(portfolio, &args)
}

#[cfg(feature = "viewer")]
fn run_viewer(portfolio: Portfolio, args: &Args) -> anyhow::Result<()> {
    portfolio::viewer::run(portfolio, args.settle_delay(), args.tick_period())
}

#[cfg(not(feature = "viewer"))]
fn run_viewer(_portfolio: Portfolio, _args: &Args) -> anyhow::Result<()> {
    anyhow::bail!("built without the `viewer` feature; run with --headless")
}
