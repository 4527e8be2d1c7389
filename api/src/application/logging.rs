use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::args::LogArgs;

/// Installs the global subscriber. `RUST_LOG` wins over `--log-filter`.
pub fn init_logger(args: &LogArgs) -> Result<(), anyhow::Error> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&args.filter))?;

    let registry = tracing_subscriber::registry().with(filter);

    if args.json {
        registry.with(fmt::layer().json()).try_init()?;
    } else {
        registry.with(fmt::layer()).try_init()?;
    }

    Ok(())
}
