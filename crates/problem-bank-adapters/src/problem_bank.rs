use std::time::Duration;

use problem_bank_core::{
    BankNameUpdate, BankPk, PortError, Problem, ProblemBankPort, ProblemListResponse,
    ProblemUpdate, StudyPk,
};
use serde::Serialize;

use crate::config::ProblemBankAdapterConfig;
use crate::memory::MemoryStore;

#[derive(Debug, Clone)]
pub struct ProblemBankAdapter {
    mode: BackendMode,
}

#[derive(Debug, Clone)]
enum BackendMode {
    Disabled(String),
    InMemory(MemoryStore),
    Http(HttpRuntime),
}

#[derive(Debug, Clone)]
struct HttpRuntime {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl Default for ProblemBankAdapter {
    fn default() -> Self {
        Self::with_config(ProblemBankAdapterConfig::from_env())
    }
}

impl ProblemBankAdapter {
    pub fn with_config(config: ProblemBankAdapterConfig) -> Self {
        let mode = match config.api_base_url.as_deref() {
            Some(base_url) => {
                let timeout = Duration::from_millis(config.request_timeout_ms);
                match reqwest::blocking::Client::builder().timeout(timeout).build() {
                    Ok(client) => BackendMode::Http(HttpRuntime {
                        base_url: base_url.trim_end_matches('/').to_owned(),
                        client,
                    }),
                    Err(e) => BackendMode::Disabled(format!(
                        "failed to initialize problem bank http client: {e}"
                    )),
                }
            }
            None if config.strict_runtime_required() => BackendMode::Disabled(
                "problem bank API URL not configured in production runtime profile".to_owned(),
            ),
            None => BackendMode::InMemory(MemoryStore::demo()),
        };

        match &mode {
            BackendMode::Http(rt) => tracing::info!(base_url = %rt.base_url, "problem bank backend: http"),
            BackendMode::InMemory(_) => tracing::info!("problem bank backend: in-memory demo store"),
            BackendMode::Disabled(reason) => tracing::warn!(%reason, "problem bank backend disabled"),
        }

        Self { mode }
    }

    pub fn in_memory(store: MemoryStore) -> Self {
        Self {
            mode: BackendMode::InMemory(store),
        }
    }

    pub fn backend_label(&self) -> &'static str {
        match self.mode {
            BackendMode::Disabled(_) => "disabled",
            BackendMode::InMemory(_) => "in-memory",
            BackendMode::Http(_) => "http",
        }
    }
}

impl HttpRuntime {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, PortError> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .map_err(|e| PortError::Transport(format!("GET {path} failed: {e}")))?;
        let status = response.status();
        if !status.is_success() {
            return Err(PortError::Status(status.as_u16()));
        }
        response
            .json()
            .map_err(|e| PortError::Decode(format!("GET {path} json decode failed: {e}")))
    }

    fn put_json<B: Serialize>(&self, path: &str, body: &B) -> Result<(), PortError> {
        let response = self
            .client
            .put(self.url(path))
            .json(body)
            .send()
            .map_err(|e| PortError::Transport(format!("PUT {path} failed: {e}")))?;
        let status = response.status();
        if !status.is_success() {
            return Err(PortError::Status(status.as_u16()));
        }
        Ok(())
    }
}

impl ProblemBankPort for ProblemBankAdapter {
    fn fetch_problems(&self, study_pk: StudyPk, bank_pk: BankPk) -> Result<Vec<Problem>, PortError> {
        match &self.mode {
            BackendMode::Disabled(reason) => Err(PortError::Policy(reason.clone())),
            BackendMode::InMemory(store) => store.fetch_problems(study_pk, bank_pk),
            BackendMode::Http(rt) => {
                let body: ProblemListResponse =
                    rt.get_json(&format!("/study/{study_pk}/problem/bank/{bank_pk}"))?;
                Ok(body.problem_list)
            }
        }
    }

    fn save_bank_name(&self, study_pk: StudyPk, update: &BankNameUpdate) -> Result<(), PortError> {
        match &self.mode {
            BackendMode::Disabled(reason) => Err(PortError::Policy(reason.clone())),
            BackendMode::InMemory(store) => store.save_bank_name(study_pk, update),
            BackendMode::Http(rt) => rt.put_json(&format!("/study/{study_pk}/problem/bank"), update),
        }
    }

    fn save_problem(&self, study_pk: StudyPk, update: &ProblemUpdate) -> Result<(), PortError> {
        match &self.mode {
            BackendMode::Disabled(reason) => Err(PortError::Policy(reason.clone())),
            BackendMode::InMemory(store) => store.save_problem(study_pk, update),
            BackendMode::Http(rt) => rt.put_json(&format!("/study/{study_pk}/problem"), update),
        }
    }
}
