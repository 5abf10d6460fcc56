//! In-process backend used when no API URL is configured, and by tests.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use problem_bank_core::{
    BankNameUpdate, BankPk, OptionPk, PortError, Problem, ProblemBank, ProblemOption, ProblemPk,
    ProblemUpdate, StudyPk,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCall {
    FetchProblems {
        study_pk: StudyPk,
        bank_pk: BankPk,
    },
    SaveBankName {
        study_pk: StudyPk,
        update: BankNameUpdate,
    },
    SaveProblem {
        study_pk: StudyPk,
        update: ProblemUpdate,
    },
}

#[derive(Debug, Clone)]
struct StoredBank {
    study_pk: StudyPk,
    name: String,
    problems: Vec<Problem>,
}

#[derive(Debug, Default)]
struct MemoryState {
    banks: BTreeMap<BankPk, StoredBank>,
    calls: Vec<RecordedCall>,
    pending_failures: usize,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding one small bank, matching the editor's default hosted bank.
    pub fn demo() -> Self {
        let problems = vec![
            demo_problem(1, "2 + 2 = ?", "Add the two numbers.", &["3", "4", "5", "22"], 2),
            demo_problem(2, "Solve 3x = 12", "Divide both sides by 3.", &["3", "4", "9", "36"], 2),
            demo_problem(3, "(a + b)^2 = ?", "Expand the square.", &["a^2 + b^2", "a^2 + 2ab + b^2"], 2),
        ];
        let mut state = MemoryState::default();
        state.banks.insert(
            BankPk(1),
            StoredBank {
                study_pk: StudyPk(1),
                name: "Algebra".to_owned(),
                problems,
            },
        );
        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }

    pub fn insert_bank(&self, bank: &ProblemBank, problems: Vec<Problem>) -> Result<(), PortError> {
        let mut state = self.lock()?;
        state.banks.insert(
            bank.pk,
            StoredBank {
                study_pk: bank.study_pk,
                name: bank.problem_bank_name.clone(),
                problems,
            },
        );
        Ok(())
    }

    pub fn bank_name(&self, bank_pk: BankPk) -> Result<Option<String>, PortError> {
        Ok(self.lock()?.banks.get(&bank_pk).map(|b| b.name.clone()))
    }

    pub fn problems(&self, bank_pk: BankPk) -> Result<Vec<Problem>, PortError> {
        Ok(self
            .lock()?
            .banks
            .get(&bank_pk)
            .map(|b| b.problems.clone())
            .unwrap_or_default())
    }

    pub fn calls(&self) -> Result<Vec<RecordedCall>, PortError> {
        Ok(self.lock()?.calls.clone())
    }

    /// Makes the next `count` calls fail with a 503 after being recorded.
    pub fn fail_next(&self, count: usize) -> Result<(), PortError> {
        self.lock()?.pending_failures = count;
        Ok(())
    }

    pub(crate) fn fetch_problems(
        &self,
        study_pk: StudyPk,
        bank_pk: BankPk,
    ) -> Result<Vec<Problem>, PortError> {
        let mut state = self.lock()?;
        state.calls.push(RecordedCall::FetchProblems { study_pk, bank_pk });
        take_failure(&mut state)?;
        let bank = find_bank(&state.banks, study_pk, bank_pk)?;
        Ok(bank.problems.clone())
    }

    pub(crate) fn save_bank_name(
        &self,
        study_pk: StudyPk,
        update: &BankNameUpdate,
    ) -> Result<(), PortError> {
        let mut state = self.lock()?;
        state.calls.push(RecordedCall::SaveBankName {
            study_pk,
            update: update.clone(),
        });
        take_failure(&mut state)?;
        find_bank(&state.banks, study_pk, update.problem_bank_pk)?;
        if let Some(bank) = state.banks.get_mut(&update.problem_bank_pk) {
            bank.name = update.problem_bank_name.clone();
        }
        Ok(())
    }

    pub(crate) fn save_problem(
        &self,
        study_pk: StudyPk,
        update: &ProblemUpdate,
    ) -> Result<(), PortError> {
        let mut state = self.lock()?;
        state.calls.push(RecordedCall::SaveProblem {
            study_pk,
            update: update.clone(),
        });
        take_failure(&mut state)?;

        let problem = state
            .banks
            .values_mut()
            .filter(|b| b.study_pk == study_pk)
            .flat_map(|b| b.problems.iter_mut())
            .find(|p| p.problem_pk == update.problem_pk)
            .ok_or_else(|| {
                PortError::NotFound(format!("problem {} in study {study_pk}", update.problem_pk))
            })?;

        problem.problem_content = update.problem_content.clone();
        problem.problem_explanation = update.problem_explanation.clone();
        problem.answer_pk = update.answer;
        // Options carry no identifier on the wire; match them by number.
        for incoming in &update.options {
            if let Some(option) = problem.options.iter_mut().find(|o| o.num == incoming.num) {
                option.content = incoming.content.clone();
            }
        }
        Ok(())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, MemoryState>, PortError> {
        self.state
            .lock()
            .map_err(|e| PortError::Transport(format!("memory store lock poisoned: {e}")))
    }
}

fn take_failure(state: &mut MemoryState) -> Result<(), PortError> {
    if state.pending_failures > 0 {
        state.pending_failures -= 1;
        return Err(PortError::Status(503));
    }
    Ok(())
}

fn find_bank(
    banks: &BTreeMap<BankPk, StoredBank>,
    study_pk: StudyPk,
    bank_pk: BankPk,
) -> Result<&StoredBank, PortError> {
    banks
        .get(&bank_pk)
        .filter(|b| b.study_pk == study_pk)
        .ok_or_else(|| PortError::NotFound(format!("problem bank {bank_pk} in study {study_pk}")))
}

fn demo_problem(
    pk: u64,
    content: &str,
    explanation: &str,
    options: &[&str],
    answer_num: u32,
) -> Problem {
    let options: Vec<ProblemOption> = options
        .iter()
        .zip(1u32..)
        .map(|(content, num)| ProblemOption {
            problem_option_pk: OptionPk(pk * 10 + u64::from(num)),
            num,
            content: (*content).to_owned(),
        })
        .collect();
    Problem {
        problem_pk: ProblemPk(pk),
        problem_content: content.to_owned(),
        problem_explanation: explanation.to_owned(),
        answer_pk: options
            .iter()
            .find(|o| o.num == answer_num)
            .map(|o| o.problem_option_pk),
        options,
    }
}
