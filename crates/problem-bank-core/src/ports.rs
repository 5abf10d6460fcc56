use thiserror::Error;

use crate::domain::{BankNameUpdate, BankPk, Problem, ProblemUpdate, StudyPk};

/// Backend failure. The editor treats every variant the same way; the
/// distinction only shows up in logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PortError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("backend returned status {0}")]
    Status(u16),
    #[error("decode error: {0}")]
    Decode(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("policy error: {0}")]
    Policy(String),
}

pub trait ProblemBankPort {
    fn fetch_problems(&self, study_pk: StudyPk, bank_pk: BankPk) -> Result<Vec<Problem>, PortError>;
    fn save_bank_name(&self, study_pk: StudyPk, update: &BankNameUpdate) -> Result<(), PortError>;
    fn save_problem(&self, study_pk: StudyPk, update: &ProblemUpdate) -> Result<(), PortError>;
}
