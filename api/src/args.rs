use clap::{Args as ClapArgs, Parser};
use storefront_core::domain::common::{DatabaseConfig, StorefrontConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "storefront", version, about = "Storefront catalog API")]
pub struct Args {
    #[command(flatten)]
    pub db: DatabaseArgs,

    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct DatabaseArgs {
    #[arg(long, env = "DATABASE_HOST", default_value = "localhost")]
    pub database_host: String,

    #[arg(long, env = "DATABASE_PORT", default_value_t = 5432)]
    pub database_port: u16,

    #[arg(long, env = "DATABASE_USER", default_value = "postgres")]
    pub database_user: String,

    #[arg(
        long,
        env = "DATABASE_PASSWORD",
        default_value = "postgres",
        hide_env_values = true
    )]
    pub database_password: String,

    #[arg(long, env = "DATABASE_NAME", default_value = "storefront")]
    pub database_name: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. `/api/v1`.
    #[arg(long, env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(long, env = "METRICS_ENABLED", default_value_t = true, action = clap::ArgAction::Set)]
    pub metrics: bool,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long, env = "LOG_FILTER", default_value = "info")]
    pub log_filter: String,

    #[arg(long, env = "LOG_JSON", default_value_t = false, action = clap::ArgAction::Set)]
    pub log_json: bool,
}

impl From<Args> for StorefrontConfig {
    fn from(args: Args) -> Self {
        StorefrontConfig {
            database: DatabaseConfig {
                host: args.db.database_host,
                port: args.db.database_port,
                username: args.db.database_user,
                password: args.db.database_password,
                name: args.db.database_name,
            },
        }
    }
}
