pub mod config;
pub mod memory;
pub mod problem_bank;

pub use config::{ProblemBankAdapterConfig, RuntimeProfile};
pub use memory::{MemoryStore, RecordedCall};
pub use problem_bank::ProblemBankAdapter;
