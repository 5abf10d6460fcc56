use crate::dispatch::{EditorEvent, EditorOutcome, EditorRequest, SessionTicket};
use crate::domain::{OptionPk, ProblemBank};
use crate::session::{EditError, EditSession};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorCommand {
    Open,
    Close,
    EditBankName(String),
    EditProblemContent {
        index: usize,
        value: String,
    },
    EditProblemExplanation {
        index: usize,
        value: String,
    },
    SelectAnswer {
        index: usize,
        option_pk: OptionPk,
    },
    EditOption {
        problem: usize,
        option: usize,
        value: String,
    },
    SaveBankName,
    SaveProblem {
        index: usize,
    },
    DismissNotice,
}

/// Edit button for one problem bank. The dialog is mounted only while
/// `dialog` is `Some`; closing drops every edit buffer.
#[derive(Debug, Clone)]
pub struct LaunchControl {
    bank: ProblemBank,
    dialog: Option<EditSession>,
    next_ticket: u64,
}

impl LaunchControl {
    pub fn new(bank: ProblemBank) -> Self {
        Self {
            bank,
            dialog: None,
            next_ticket: 1,
        }
    }

    pub fn bank(&self) -> &ProblemBank {
        &self.bank
    }

    /// Replaces the hosted bank. An open dialog keeps its buffers; the new
    /// bank is picked up on the next open.
    pub fn set_bank(&mut self, bank: ProblemBank) {
        self.bank = bank;
    }

    pub fn is_open(&self) -> bool {
        self.dialog.is_some()
    }

    pub fn dialog(&self) -> Option<&EditSession> {
        self.dialog.as_ref()
    }

    pub fn handle(&mut self, command: EditorCommand) -> Result<Option<EditorRequest>, EditError> {
        match command {
            EditorCommand::Open => Ok(self.open()),
            EditorCommand::Close => {
                self.close();
                Ok(None)
            }
            EditorCommand::EditBankName(name) => {
                self.session_mut()?.set_bank_name(name);
                Ok(None)
            }
            EditorCommand::EditProblemContent { index, value } => {
                self.session_mut()?.set_problem_content(index, value)?;
                Ok(None)
            }
            EditorCommand::EditProblemExplanation { index, value } => {
                self.session_mut()?.set_problem_explanation(index, value)?;
                Ok(None)
            }
            EditorCommand::SelectAnswer { index, option_pk } => {
                self.session_mut()?.select_answer(index, option_pk)?;
                Ok(None)
            }
            EditorCommand::EditOption {
                problem,
                option,
                value,
            } => {
                self.session_mut()?
                    .set_option_content(problem, option, value)?;
                Ok(None)
            }
            EditorCommand::SaveBankName => Ok(Some(self.session_mut()?.save_bank_name_request())),
            EditorCommand::SaveProblem { index } => {
                Ok(Some(self.session_mut()?.save_problem_request(index)?))
            }
            EditorCommand::DismissNotice => {
                self.session_mut()?.clear_notice();
                Ok(None)
            }
        }
    }

    /// Feeds a backend result into the mounted dialog. Returns `false` when
    /// the result belongs to a dialog that has since been closed.
    pub fn apply(&mut self, event: EditorEvent) -> bool {
        let Some(session) = self.dialog.as_mut() else {
            tracing::debug!(ticket = event.ticket.0, "dropping result for closed dialog");
            return false;
        };
        if session.ticket() != event.ticket {
            tracing::debug!(
                ticket = event.ticket.0,
                current = session.ticket().0,
                "dropping result for previous dialog session"
            );
            return false;
        }

        match event.outcome {
            EditorOutcome::ProblemsLoaded(result) => session.apply_problems(result),
            EditorOutcome::BankNameSaved(result) => session.apply_bank_name_saved(result),
            EditorOutcome::ProblemSaved { index, result } => {
                session.apply_problem_saved(index, result)
            }
        }
        true
    }

    fn open(&mut self) -> Option<EditorRequest> {
        if self.dialog.is_some() {
            return None;
        }
        let ticket = SessionTicket(self.next_ticket);
        self.next_ticket += 1;
        let session = EditSession::new(self.bank.clone(), ticket);
        let request = session.fetch_request();
        tracing::debug!(bank_pk = %self.bank.pk, ticket = ticket.0, "edit dialog opened");
        self.dialog = Some(session);
        Some(request)
    }

    fn close(&mut self) {
        if let Some(session) = self.dialog.take() {
            tracing::debug!(ticket = session.ticket().0, "edit dialog closed");
        }
    }

    fn session_mut(&mut self) -> Result<&mut EditSession, EditError> {
        self.dialog.as_mut().ok_or(EditError::NotOpen)
    }
}
