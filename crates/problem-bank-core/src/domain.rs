use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

macro_rules! pk_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

pk_newtype!(StudyPk);
pk_newtype!(BankPk);
pk_newtype!(ProblemPk);
pk_newtype!(OptionPk);

/// A named collection of problems scoped to a study.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemBank {
    pub pk: BankPk,
    pub study_pk: StudyPk,
    pub problem_bank_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    pub problem_pk: ProblemPk,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub problem_content: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub problem_explanation: String,
    #[serde(default)]
    pub answer_pk: Option<OptionPk>,
    #[serde(default)]
    pub options: Vec<ProblemOption>,
}

impl Problem {
    pub fn has_option(&self, option_pk: OptionPk) -> bool {
        self.options.iter().any(|o| o.problem_option_pk == option_pk)
    }

    /// Display number of the currently selected answer, if it matches an option.
    pub fn answer_num(&self) -> Option<u32> {
        let answer = self.answer_pk?;
        self.options
            .iter()
            .find(|o| o.problem_option_pk == answer)
            .map(|o| o.num)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemOption {
    pub problem_option_pk: OptionPk,
    pub num: u32,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,
}

/// Body of `GET /study/{studyPk}/problem/bank/{bankPk}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemListResponse {
    #[serde(default)]
    pub problem_list: Vec<Problem>,
}

/// Body of `PUT /study/{studyPk}/problem/bank`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankNameUpdate {
    pub problem_bank_pk: BankPk,
    pub problem_bank_name: String,
}

/// Body of `PUT /study/{studyPk}/problem`.
///
/// Options are sent by content and number only; their identifiers stay on
/// the client. The explanation key is capitalized on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemUpdate {
    #[serde(rename = "problemPk")]
    pub problem_pk: ProblemPk,
    #[serde(rename = "problemContent")]
    pub problem_content: String,
    pub answer: Option<OptionPk>,
    #[serde(rename = "ProblemExplanation")]
    pub problem_explanation: String,
    #[serde(rename = "problemOptionRequestDTOList")]
    pub options: Vec<OptionUpdate>,
}

impl From<&Problem> for ProblemUpdate {
    fn from(problem: &Problem) -> Self {
        Self {
            problem_pk: problem.problem_pk,
            problem_content: problem.problem_content.clone(),
            answer: problem.answer_pk,
            problem_explanation: problem.problem_explanation.clone(),
            options: problem
                .options
                .iter()
                .map(|o| OptionUpdate {
                    content: o.content.clone(),
                    num: o.num,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionUpdate {
    pub content: String,
    pub num: u32,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
