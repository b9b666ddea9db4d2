use crate::error::AppError;

/// Application configuration loaded explicitly from environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Seed for chat reply selection. `None` seeds from OS entropy.
    pub reply_seed: Option<u64>,
    /// Address to serve MCP over TCP (e.g. "127.0.0.1:7400"). `None` serves on stdio.
    pub tcp_listen_addr: Option<String>,
}

impl Config {
    /// Optional:
    /// - `MED_GUIDE_REPLY_SEED`: unsigned integer seed for reproducible chat replies
    /// - `MCP_TCP_LISTEN_ADDR`: serve on TCP instead of stdio
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let reply_seed = lookup("MED_GUIDE_REPLY_SEED")
            .map(|raw| {
                raw.trim().parse::<u64>().map_err(|e| {
                    AppError::Config(format!("MED_GUIDE_REPLY_SEED must be an unsigned integer: {e}"))
                })
            })
            .transpose()?;

        let tcp_listen_addr = lookup("MCP_TCP_LISTEN_ADDR")
            .map(|addr| addr.trim().to_string())
            .filter(|addr| !addr.is_empty());

        Ok(Self {
            reply_seed,
            tcp_listen_addr,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn reads_seed_and_listen_addr() {
        let config = Config::from_lookup(lookup(&[
            ("MED_GUIDE_REPLY_SEED", " 42 "),
            ("MCP_TCP_LISTEN_ADDR", "127.0.0.1:7400"),
        ]))
        .unwrap();
        assert_eq!(config.reply_seed, Some(42));
        assert_eq!(config.tcp_listen_addr.as_deref(), Some("127.0.0.1:7400"));
    }

    #[test]
    fn blank_listen_addr_means_stdio() {
        let config = Config::from_lookup(lookup(&[("MCP_TCP_LISTEN_ADDR", "  ")])).unwrap();
        assert!(config.tcp_listen_addr.is_none());
    }

    #[test]
    fn rejects_invalid_seed() {
        let err = Config::from_lookup(lookup(&[("MED_GUIDE_REPLY_SEED", "abc")])).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
        assert!(err.to_string().contains("MED_GUIDE_REPLY_SEED"));
    }
}
