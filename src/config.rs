use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

/// Process configuration, read once at startup.
///
/// Values come from the environment (`PORT`, `DATABASE_URL`, `LOGLEVEL`),
/// falling back to the defaults below.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub loglevel: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            database_url: "sqlite:./database.sqlite".to_string(),
            loglevel: "info".to_string(),
        }
    }
}

impl Config {
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::raw().only(&["PORT", "DATABASE_URL", "LOGLEVEL"]))
    }

    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn defaults_apply_without_env() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            let cfg = Config::load()?;
            assert_eq!(cfg, Config::default());
            assert_eq!(cfg.listen_addr(), "0.0.0.0:3000");
            Ok(())
        });
    }

    #[test]
    fn env_overrides_port_and_database() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.set_env("PORT", "8081");
            jail.set_env("DATABASE_URL", "sqlite::memory:");
            let cfg = Config::load()?;
            assert_eq!(cfg.port, 8081);
            assert_eq!(cfg.database_url, "sqlite::memory:");
            assert_eq!(cfg.loglevel, "info");
            Ok(())
        });
    }

    #[test]
    fn invalid_port_is_rejected() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.set_env("PORT", "not-a-port");
            assert!(Config::load().is_err());
            Ok(())
        });
    }
}
