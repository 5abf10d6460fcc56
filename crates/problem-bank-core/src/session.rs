//! Edit dialog state.
//!
//! Buffers are created on mount and dropped with the session. Nothing here
//! talks to the backend: operations produce payloads and accept results.

use thiserror::Error;

use crate::dispatch::{EditorRequest, SessionTicket};
use crate::domain::{BankNameUpdate, OptionPk, Problem, ProblemBank, ProblemUpdate};
use crate::ports::PortError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("problem index {index} out of range ({len} problems)")]
    ProblemIndex { index: usize, len: usize },
    #[error("option index {option} out of range for problem {problem} ({len} options)")]
    OptionIndex {
        problem: usize,
        option: usize,
        len: usize,
    },
    #[error("option {option_pk} does not belong to problem {problem}")]
    UnknownOption { problem: usize, option_pk: OptionPk },
    #[error("edit dialog is not open")]
    NotOpen,
}

#[derive(Debug, Clone)]
pub struct EditSession {
    bank: ProblemBank,
    ticket: SessionTicket,
    bank_name: String,
    problems: Vec<Problem>,
    loading: bool,
    saving_bank_name: bool,
    saving_problems: Vec<bool>,
    notice: Option<String>,
}

impl EditSession {
    /// Mounts a session for `bank`. The name buffer starts from the bank's
    /// current name and the problem list is empty until the fetch lands.
    pub fn new(bank: ProblemBank, ticket: SessionTicket) -> Self {
        Self {
            bank_name: bank.problem_bank_name.clone(),
            bank,
            ticket,
            problems: Vec::new(),
            loading: true,
            saving_bank_name: false,
            saving_problems: Vec::new(),
            notice: None,
        }
    }

    pub fn fetch_request(&self) -> EditorRequest {
        EditorRequest::FetchProblems {
            ticket: self.ticket,
            study_pk: self.bank.study_pk,
            bank_pk: self.bank.pk,
        }
    }

    pub fn ticket(&self) -> SessionTicket {
        self.ticket
    }

    pub fn bank(&self) -> &ProblemBank {
        &self.bank
    }

    pub fn bank_name(&self) -> &str {
        &self.bank_name
    }

    /// Dialog title; follows the unsaved name buffer.
    pub fn title(&self) -> &str {
        &self.bank_name
    }

    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_saving_bank_name(&self) -> bool {
        self.saving_bank_name
    }

    pub fn is_saving_problem(&self, index: usize) -> bool {
        self.saving_problems.get(index).copied().unwrap_or(false)
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    pub fn set_bank_name(&mut self, name: impl Into<String>) {
        self.bank_name = name.into();
    }

    pub fn set_problem_content(
        &mut self,
        index: usize,
        content: impl Into<String>,
    ) -> Result<(), EditError> {
        self.problem_mut(index)?.problem_content = content.into();
        Ok(())
    }

    pub fn set_problem_explanation(
        &mut self,
        index: usize,
        explanation: impl Into<String>,
    ) -> Result<(), EditError> {
        self.problem_mut(index)?.problem_explanation = explanation.into();
        Ok(())
    }

    pub fn select_answer(&mut self, index: usize, option_pk: OptionPk) -> Result<(), EditError> {
        let problem = self.problem_mut(index)?;
        if !problem.has_option(option_pk) {
            return Err(EditError::UnknownOption {
                problem: index,
                option_pk,
            });
        }
        problem.answer_pk = Some(option_pk);
        Ok(())
    }

    pub fn set_option_content(
        &mut self,
        problem: usize,
        option: usize,
        content: impl Into<String>,
    ) -> Result<(), EditError> {
        let target = self.problem_mut(problem)?;
        let len = target.options.len();
        let slot = target
            .options
            .get_mut(option)
            .ok_or(EditError::OptionIndex {
                problem,
                option,
                len,
            })?;
        slot.content = content.into();
        Ok(())
    }

    pub fn bank_name_update(&self) -> BankNameUpdate {
        BankNameUpdate {
            problem_bank_pk: self.bank.pk,
            problem_bank_name: self.bank_name.clone(),
        }
    }

    pub fn problem_update(&self, index: usize) -> Result<ProblemUpdate, EditError> {
        self.problems
            .get(index)
            .map(ProblemUpdate::from)
            .ok_or(EditError::ProblemIndex {
                index,
                len: self.problems.len(),
            })
    }

    pub fn save_bank_name_request(&mut self) -> EditorRequest {
        self.saving_bank_name = true;
        EditorRequest::SaveBankName {
            ticket: self.ticket,
            study_pk: self.bank.study_pk,
            update: self.bank_name_update(),
        }
    }

    pub fn save_problem_request(&mut self, index: usize) -> Result<EditorRequest, EditError> {
        let update = self.problem_update(index)?;
        if let Some(flag) = self.saving_problems.get_mut(index) {
            *flag = true;
        }
        Ok(EditorRequest::SaveProblem {
            ticket: self.ticket,
            study_pk: self.bank.study_pk,
            index,
            update,
        })
    }

    /// Replaces the problem list with a fetch result. A failed fetch leaves
    /// whatever list is already there, which on mount is empty.
    pub fn apply_problems(&mut self, result: Result<Vec<Problem>, PortError>) {
        self.loading = false;
        match result {
            Ok(problems) => {
                tracing::debug!(
                    bank_pk = %self.bank.pk,
                    count = problems.len(),
                    "problem list loaded"
                );
                self.saving_problems = vec![false; problems.len()];
                self.problems = problems;
            }
            Err(e) => {
                tracing::error!(bank_pk = %self.bank.pk, error = %e, "failed to load problems");
            }
        }
    }

    pub fn apply_bank_name_saved(&mut self, result: Result<(), PortError>) {
        self.saving_bank_name = false;
        match result {
            Ok(()) => self.notice = Some("Problem bank name saved.".to_owned()),
            Err(e) => {
                tracing::error!(bank_pk = %self.bank.pk, error = %e, "failed to save problem bank name");
            }
        }
    }

    pub fn apply_problem_saved(&mut self, index: usize, result: Result<(), PortError>) {
        if let Some(flag) = self.saving_problems.get_mut(index) {
            *flag = false;
        }
        match result {
            Ok(()) => self.notice = Some(format!("Problem {} saved.", index + 1)),
            Err(e) => {
                tracing::error!(index, error = %e, "failed to save problem");
            }
        }
    }

    fn problem_mut(&mut self, index: usize) -> Result<&mut Problem, EditError> {
        let len = self.problems.len();
        self.problems
            .get_mut(index)
            .ok_or(EditError::ProblemIndex { index, len })
    }
}
