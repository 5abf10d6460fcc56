//! Start-up settings read from the environment

use std::env;
use std::str::FromStr;

use eyre::{Result, WrapErr};
use problem_bank_adapters::ProblemBankAdapterConfig;
use problem_bank_core::{BankPk, ProblemBank, StudyPk};

const DEFAULT_STUDY_PK: u64 = 1;
const DEFAULT_BANK_PK: u64 = 1;
const DEFAULT_BANK_NAME: &str = "Algebra";

/// The bank shown on the host page and the backend it lives on.
#[derive(Debug, Clone)]
pub struct HostSettings {
    pub bank: ProblemBank,
    pub adapter: ProblemBankAdapterConfig,
}

impl HostSettings {
    pub fn from_env() -> Result<Self> {
        let study_pk = read_var("PROBLEM_BANK_STUDY_PK", DEFAULT_STUDY_PK)?;
        let bank_pk = read_var("PROBLEM_BANK_PK", DEFAULT_BANK_PK)?;
        let name = env::var("PROBLEM_BANK_NAME")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BANK_NAME.to_owned());

        Ok(Self {
            bank: ProblemBank {
                pk: BankPk(bank_pk),
                study_pk: StudyPk(study_pk),
                problem_bank_name: name,
            },
            adapter: ProblemBankAdapterConfig::from_env(),
        })
    }
}

fn read_var<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => parse_value(key, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse()
        .wrap_err_with(|| format!("invalid {key}: {raw:?}"))
}

#[cfg(test)]
mod tests {
    use super::parse_value;

    #[test]
    fn parses_trimmed_identifiers() {
        let pk: u64 = parse_value("PROBLEM_BANK_PK", " 42 ").expect("parse");
        assert_eq!(pk, 42);
    }

    #[test]
    fn malformed_identifier_names_the_variable() {
        let err = parse_value::<u64>("PROBLEM_BANK_STUDY_PK", "abc").expect_err("must fail");
        assert!(format!("{err:#}").contains("PROBLEM_BANK_STUDY_PK"));
    }
}
