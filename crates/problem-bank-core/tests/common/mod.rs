#![allow(dead_code)]

use std::sync::Mutex;

use problem_bank_core::{
    BankNameUpdate, BankPk, OptionPk, PortError, Problem, ProblemBank, ProblemBankPort,
    ProblemOption, ProblemPk, ProblemUpdate, StudyPk,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Fetch(StudyPk, BankPk),
    SaveBankName(StudyPk, BankNameUpdate),
    SaveProblem(StudyPk, ProblemUpdate),
}

/// Port double that records calls and answers from a fixed problem list.
#[derive(Debug, Default)]
pub struct RecordingPort {
    pub problems: Vec<Problem>,
    pub fail: bool,
    pub calls: Mutex<Vec<Call>>,
}

impl RecordingPort {
    pub fn with_problems(problems: Vec<Problem>) -> Self {
        Self {
            problems,
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().expect("calls lock").clone()
    }

    fn record(&self, call: Call) -> Result<(), PortError> {
        self.calls.lock().expect("calls lock").push(call);
        if self.fail {
            return Err(PortError::Status(500));
        }
        Ok(())
    }
}

impl ProblemBankPort for RecordingPort {
    fn fetch_problems(&self, study_pk: StudyPk, bank_pk: BankPk) -> Result<Vec<Problem>, PortError> {
        self.record(Call::Fetch(study_pk, bank_pk))?;
        Ok(self.problems.clone())
    }

    fn save_bank_name(&self, study_pk: StudyPk, update: &BankNameUpdate) -> Result<(), PortError> {
        self.record(Call::SaveBankName(study_pk, update.clone()))
    }

    fn save_problem(&self, study_pk: StudyPk, update: &ProblemUpdate) -> Result<(), PortError> {
        self.record(Call::SaveProblem(study_pk, update.clone()))
    }
}

pub fn algebra_bank() -> ProblemBank {
    ProblemBank {
        pk: BankPk(1),
        study_pk: StudyPk(7),
        problem_bank_name: "Algebra".to_owned(),
    }
}

pub fn problem(pk: u64, content: &str, option_contents: &[&str]) -> Problem {
    let options: Vec<ProblemOption> = option_contents
        .iter()
        .enumerate()
        .map(|(i, c)| ProblemOption {
            problem_option_pk: OptionPk(pk * 100 + i as u64),
            num: i as u32 + 1,
            content: (*c).to_owned(),
        })
        .collect();
    Problem {
        problem_pk: ProblemPk(pk),
        problem_content: content.to_owned(),
        problem_explanation: format!("explanation for {content}"),
        answer_pk: options.first().map(|o| o.problem_option_pk),
        options,
    }
}

pub fn sample_problems() -> Vec<Problem> {
    vec![
        problem(10, "2 + 2 = ?", &["3", "4", "5"]),
        problem(11, "x^2 = 9, x > 0", &["1", "3", "9"]),
    ]
}
