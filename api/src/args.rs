use std::time::Duration;

use clap::{Args as ClapArgs, Parser};
use leafdoc_core::domain::common::{DatabaseConfig, LeafdocConfig, UpstreamConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "leafdoc-api", version, about = "Leaf disease diagnosis API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub db: DatabaseArgs,

    #[command(flatten)]
    pub upstream: UpstreamArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(id = "server_host", long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(id = "server_port", long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct DatabaseArgs {
    #[arg(id = "database_host", long = "database-host", env = "DATABASE_HOST", default_value = "localhost")]
    pub host: String,

    #[arg(id = "database_port", long = "database-port", env = "DATABASE_PORT", default_value_t = 5432)]
    pub port: u16,

    #[arg(long = "database-user", env = "DATABASE_USER", default_value = "postgres")]
    pub user: String,

    #[arg(
        long = "database-password",
        env = "DATABASE_PASSWORD",
        default_value = "postgres",
        hide_env_values = true
    )]
    pub password: String,

    #[arg(long = "database-name", env = "DATABASE_NAME", default_value = "leafdoc")]
    pub name: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct UpstreamArgs {
    /// Diagnostic webhook; when unset every diagnosis uses the fallback record.
    #[arg(long = "upstream-webhook-url", env = "UPSTREAM_WEBHOOK_URL")]
    pub webhook_url: Option<String>,

    #[arg(
        long = "upstream-timeout-secs",
        env = "UPSTREAM_TIMEOUT_SECS",
        default_value_t = 30
    )]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for LeafdocConfig {
    fn from(args: Args) -> Self {
        Self {
            database: DatabaseConfig {
                host: args.db.host,
                port: args.db.port,
                username: args.db.user,
                password: args.db.password,
                name: args.db.name,
            },
            upstream: UpstreamConfig {
                webhook_url: args.upstream.webhook_url,
                timeout: Duration::from_secs(args.upstream.timeout_secs),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags_into_config() {
        let args = Args::try_parse_from([
            "leafdoc-api",
            "--database-host",
            "db.internal",
            "--database-name",
            "leaves",
            "--upstream-webhook-url",
            "http://n8n:5678/webhook/leaf",
            "--upstream-timeout-secs",
            "5",
            "--allowed-origins",
            "http://a.test,http://b.test",
        ])
        .unwrap();

        assert_eq!(
            args.server.allowed_origins,
            vec!["http://a.test", "http://b.test"]
        );

        let config = LeafdocConfig::from(args);
        assert_eq!(config.database.host, "db.internal");
        assert_eq!(config.database.name, "leaves");
        assert_eq!(
            config.upstream.endpoint(),
            Some("http://n8n:5678/webhook/leaf")
        );
        assert_eq!(config.upstream.timeout, Duration::from_secs(5));
    }
}
