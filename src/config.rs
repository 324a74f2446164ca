use std::net::{IpAddr, SocketAddr};

use clap::Parser;

/// Command-line and environment configuration for the plant server.
#[derive(Parser, Debug, Clone)]
#[command(name = "plant_space", author, version, about = "Plant resource HTTP API", long_about = None)]
pub struct Config {
    /// Host address to bind to
    #[arg(long, env = "PLANT_SPACE_HOST", default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "PLANT_SPACE_PORT", default_value_t = 3030)]
    pub port: u16,

    /// SQLite database file, or `:memory:`
    #[arg(long, env = "PLANT_SPACE_DATABASE_URL", default_value = "plants.db")]
    pub database_url: String,
}

impl Config {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::CommandFactory;

    fn default_of(arg: &str) -> String {
        let command = Config::command();
        let arg = command
            .get_arguments()
            .find(|a| a.get_id() == arg)
            .unwrap();
        arg.get_default_values()[0].to_string_lossy().into_owned()
    }

    #[test]
    fn defaults_bind_locally() {
        assert_eq!(default_of("host"), "127.0.0.1");
        assert_eq!(default_of("port"), "3030");
        assert_eq!(default_of("database_url"), "plants.db");
    }

    #[test]
    fn flags_override_defaults() {
        let config = Config::try_parse_from([
            "plant_space",
            "--host",
            "0.0.0.0",
            "-p",
            "8080",
            "--database-url",
            ":memory:",
        ])
        .unwrap();
        assert_eq!(config.addr(), SocketAddr::from(([0, 0, 0, 0], 8080)));
        assert_eq!(config.database_url, ":memory:");
    }
}
