use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeProfile {
    Development,
    Production,
}

#[derive(Debug, Clone)]
pub struct ProblemBankAdapterConfig {
    pub runtime_profile: RuntimeProfile,
    pub api_base_url: Option<String>,
    pub request_timeout_ms: u64,
}

impl Default for ProblemBankAdapterConfig {
    fn default() -> Self {
        Self {
            runtime_profile: RuntimeProfile::Development,
            api_base_url: None,
            request_timeout_ms: 15_000,
        }
    }
}

impl ProblemBankAdapterConfig {
    /// Reads `PROBLEM_BANK_API_URL`, `PROBLEM_BANK_TIMEOUT_MS` and
    /// `PROBLEM_BANK_RUNTIME_PROFILE`. Unset or unparsable values keep the
    /// defaults.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Some(url) = env::var("PROBLEM_BANK_API_URL")
            .ok()
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
        {
            cfg.api_base_url = Some(url);
        }

        if let Ok(raw) = env::var("PROBLEM_BANK_TIMEOUT_MS") {
            match raw.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => cfg.request_timeout_ms = ms,
                _ => tracing::warn!(value = %raw, "ignoring invalid PROBLEM_BANK_TIMEOUT_MS"),
            }
        }

        if let Ok(raw) = env::var("PROBLEM_BANK_RUNTIME_PROFILE") {
            match parse_profile(&raw) {
                Some(profile) => cfg.runtime_profile = profile,
                None => {
                    tracing::warn!(value = %raw, "ignoring invalid PROBLEM_BANK_RUNTIME_PROFILE")
                }
            }
        }

        cfg
    }

    pub fn strict_runtime_required(&self) -> bool {
        self.runtime_profile == RuntimeProfile::Production
    }
}

fn parse_profile(raw: &str) -> Option<RuntimeProfile> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "dev" | "development" => Some(RuntimeProfile::Development),
        "prod" | "production" => Some(RuntimeProfile::Production),
        _ => None,
    }
}
