use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use urf_core_db::Deployment;

/// Product REST service over a repository / unit-of-work data layer
#[derive(Parser, Debug, Clone)]
#[command(name = "urf-api", version, about)]
pub struct Cli {
    /// Which deployable to run: demo or sample
    #[arg(long, env = "URF_DEPLOYMENT", default_value = "sample", global = true)]
    pub deployment: Deployment,

    /// Postgres connection string; the in-memory store is used when absent
    #[arg(long, env = "DATABASE_URL", global = true)]
    pub database_url: Option<String>,

    /// Address the HTTP server listens on
    #[arg(long, env = "URF_BIND", default_value = "127.0.0.1:5000", global = true)]
    pub bind: SocketAddr,

    #[arg(long, env = "URF_MAX_CONNECTIONS", default_value_t = 5, global = true)]
    pub max_connections: u32,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Create the schema, apply seed data and exit
    Migrate,
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.unwrap_or(Command::Serve)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_migrate_for_demo() {
        let cli = Cli::try_parse_from(["urf-api", "migrate", "--deployment", "demo"]).unwrap();
        assert_eq!(cli.command(), Command::Migrate);
        assert_eq!(cli.deployment, Deployment::Demo);
    }

    #[test]
    fn test_serve_is_default_command() {
        let cli = Cli::try_parse_from([
            "urf-api",
            "--bind",
            "0.0.0.0:8080",
            "--max-connections",
            "9",
        ])
        .unwrap();
        assert_eq!(cli.command(), Command::Serve);
        assert_eq!(cli.bind, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(cli.max_connections, 9);
    }

    #[test]
    fn test_unknown_deployment_rejected() {
        assert!(Cli::try_parse_from(["urf-api", "--deployment", "staging"]).is_err());
    }
}
