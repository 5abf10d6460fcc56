pub mod dispatch;
pub mod domain;
pub mod launch;
pub mod ports;
pub mod session;

pub use dispatch::{execute, EditorEvent, EditorOutcome, EditorRequest, SessionTicket};
pub use domain::{
    BankNameUpdate, BankPk, OptionPk, OptionUpdate, Problem, ProblemBank, ProblemListResponse,
    ProblemOption, ProblemPk, ProblemUpdate, StudyPk,
};
pub use launch::{EditorCommand, LaunchControl};
pub use ports::{PortError, ProblemBankPort};
pub use session::{EditError, EditSession};
