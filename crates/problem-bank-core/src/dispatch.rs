use crate::domain::{BankNameUpdate, BankPk, Problem, ProblemUpdate, StudyPk};
use crate::ports::{PortError, ProblemBankPort};

/// Identifies one mount of the edit dialog. Results carrying a ticket other
/// than the mounted session's are stale and get dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionTicket(pub u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorRequest {
    FetchProblems {
        ticket: SessionTicket,
        study_pk: StudyPk,
        bank_pk: BankPk,
    },
    SaveBankName {
        ticket: SessionTicket,
        study_pk: StudyPk,
        update: BankNameUpdate,
    },
    SaveProblem {
        ticket: SessionTicket,
        study_pk: StudyPk,
        index: usize,
        update: ProblemUpdate,
    },
}

impl EditorRequest {
    pub fn ticket(&self) -> SessionTicket {
        match self {
            EditorRequest::FetchProblems { ticket, .. }
            | EditorRequest::SaveBankName { ticket, .. }
            | EditorRequest::SaveProblem { ticket, .. } => *ticket,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EditorRequest::FetchProblems { .. } => "fetch_problems",
            EditorRequest::SaveBankName { .. } => "save_bank_name",
            EditorRequest::SaveProblem { .. } => "save_problem",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorOutcome {
    ProblemsLoaded(Result<Vec<Problem>, PortError>),
    BankNameSaved(Result<(), PortError>),
    ProblemSaved {
        index: usize,
        result: Result<(), PortError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorEvent {
    pub ticket: SessionTicket,
    pub outcome: EditorOutcome,
}

/// Runs one request against the backend port. Exactly one port call is made.
pub fn execute<P: ProblemBankPort + ?Sized>(port: &P, request: EditorRequest) -> EditorEvent {
    match request {
        EditorRequest::FetchProblems {
            ticket,
            study_pk,
            bank_pk,
        } => EditorEvent {
            ticket,
            outcome: EditorOutcome::ProblemsLoaded(port.fetch_problems(study_pk, bank_pk)),
        },
        EditorRequest::SaveBankName {
            ticket,
            study_pk,
            update,
        } => {
            tracing::info!(
                bank_pk = %update.problem_bank_pk,
                name = %update.problem_bank_name,
                "saving problem bank name"
            );
            EditorEvent {
                ticket,
                outcome: EditorOutcome::BankNameSaved(port.save_bank_name(study_pk, &update)),
            }
        }
        EditorRequest::SaveProblem {
            ticket,
            study_pk,
            index,
            update,
        } => {
            tracing::info!(
                problem_pk = %update.problem_pk,
                options = update.options.len(),
                payload = ?update,
                "saving problem"
            );
            EditorEvent {
                ticket,
                outcome: EditorOutcome::ProblemSaved {
                    index,
                    result: port.save_problem(study_pk, &update),
                },
            }
        }
    }
}
