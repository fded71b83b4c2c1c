use std::path::PathBuf;
use std::time::Duration;

use triage_patterns::matching::DiagnosisOptions;

pub const DEFAULT_DATA_DIR: &str = "./data";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(60 * 60);

/// Server configuration, read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Root holding `rules/` and `graphs/`.
    pub data_dir: PathBuf,
    pub bind_addr: String,
    pub diagnosis: DiagnosisOptions,
    /// How long an untouched assessment or examination is kept in memory.
    pub session_ttl: Duration,
}

impl ServerConfig {
    /// `TRIAGE_DATA_DIR`, `TRIAGE_BIND_ADDR`, `TRIAGE_MIN_CONFIDENCE`,
    /// `TRIAGE_MAX_DIFFERENTIALS`, `TRIAGE_SESSION_TTL_SECS`. Unset variables
    /// take their defaults; unparseable numbers are an error.
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let data_dir = lookup("TRIAGE_DATA_DIR").unwrap_or_else(|| DEFAULT_DATA_DIR.to_string());
        let bind_addr = lookup("TRIAGE_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        let mut diagnosis = DiagnosisOptions::default();
        if let Some(raw) = lookup("TRIAGE_MIN_CONFIDENCE") {
            let value: f64 = raw
                .parse()
                .map_err(|e| eyre::eyre!("TRIAGE_MIN_CONFIDENCE={raw:?}: {e}"))?;
            if !(0.0..=1.0).contains(&value) {
                eyre::bail!("TRIAGE_MIN_CONFIDENCE must be within [0, 1], got {value}");
            }
            diagnosis.min_confidence = value;
        }
        if let Some(raw) = lookup("TRIAGE_MAX_DIFFERENTIALS") {
            diagnosis.max_differentials = raw
                .parse()
                .map_err(|e| eyre::eyre!("TRIAGE_MAX_DIFFERENTIALS={raw:?}: {e}"))?;
        }

        let mut session_ttl = DEFAULT_SESSION_TTL;
        if let Some(raw) = lookup("TRIAGE_SESSION_TTL_SECS") {
            let secs: u64 = raw
                .parse()
                .map_err(|e| eyre::eyre!("TRIAGE_SESSION_TTL_SECS={raw:?}: {e}"))?;
            if secs == 0 {
                eyre::bail!("TRIAGE_SESSION_TTL_SECS must be positive");
            }
            session_ttl = Duration::from_secs(secs);
        }

        Ok(Self {
            data_dir: PathBuf::from(data_dir),
            bind_addr,
            diagnosis,
            session_ttl,
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
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.data_dir, PathBuf::from(DEFAULT_DATA_DIR));
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(config.diagnosis, DiagnosisOptions::default());
        assert_eq!(config.session_ttl, DEFAULT_SESSION_TTL);
    }

    #[test]
    fn reads_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("TRIAGE_DATA_DIR", "/srv/triage"),
            ("TRIAGE_MIN_CONFIDENCE", "0.35"),
            ("TRIAGE_MAX_DIFFERENTIALS", "5"),
            ("TRIAGE_SESSION_TTL_SECS", "900"),
        ]))
        .unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/srv/triage"));
        assert_eq!(config.diagnosis.min_confidence, 0.35);
        assert_eq!(config.diagnosis.max_differentials, 5);
        assert_eq!(config.session_ttl, Duration::from_secs(900));
    }

    #[test]
    fn rejects_bad_numbers() {
        assert!(ServerConfig::from_lookup(lookup(&[("TRIAGE_MIN_CONFIDENCE", "high")])).is_err());
        assert!(ServerConfig::from_lookup(lookup(&[("TRIAGE_MIN_CONFIDENCE", "1.5")])).is_err());
        assert!(ServerConfig::from_lookup(lookup(&[("TRIAGE_MAX_DIFFERENTIALS", "-1")])).is_err());
        assert!(ServerConfig::from_lookup(lookup(&[("TRIAGE_SESSION_TTL_SECS", "0")])).is_err());
    }
}
