use problem_bank_adapters::{MemoryStore, ProblemBankAdapter, RecordedCall};
use problem_bank_core::{
    execute, BankPk, EditorCommand, LaunchControl, OptionPk, ProblemBank, ProblemBankPort,
    StudyPk,
};

fn demo_bank() -> ProblemBank {
    ProblemBank {
        pk: BankPk(1),
        study_pk: StudyPk(1),
        problem_bank_name: "Algebra".to_owned(),
    }
}

fn open_loaded(control: &mut LaunchControl, adapter: &ProblemBankAdapter) {
    let fetch = control
        .handle(EditorCommand::Open)
        .expect("open")
        .expect("fetch request");
    assert!(control.apply(execute(adapter, fetch)));
}

#[test]
fn edit_and_save_round_trip_through_store() {
    let store = MemoryStore::demo();
    let adapter = ProblemBankAdapter::in_memory(store.clone());
    let mut control = LaunchControl::new(demo_bank());
    open_loaded(&mut control, &adapter);
    assert_eq!(control.dialog().expect("dialog").problems().len(), 3);

    control
        .handle(EditorCommand::EditOption {
            problem: 0,
            option: 3,
            value: "2 + 2".to_owned(),
        })
        .expect("edit option");
    control
        .handle(EditorCommand::SelectAnswer {
            index: 0,
            option_pk: OptionPk(11),
        })
        .expect("select answer");
    let save = control
        .handle(EditorCommand::SaveProblem { index: 0 })
        .expect("save")
        .expect("request");
    assert!(control.apply(execute(&adapter, save)));

    let stored = store.problems(BankPk(1)).expect("problems");
    assert_eq!(stored[0].options[3].content, "2 + 2");
    assert_eq!(stored[0].answer_pk, Some(OptionPk(11)));
    assert_eq!(stored[1], control.dialog().expect("dialog").problems()[1]);
}

#[test]
fn bank_name_save_updates_store_but_not_hosted_bank() {
    let store = MemoryStore::demo();
    let adapter = ProblemBankAdapter::in_memory(store.clone());
    let mut control = LaunchControl::new(demo_bank());
    open_loaded(&mut control, &adapter);

    control
        .handle(EditorCommand::EditBankName("Pre-Algebra".to_owned()))
        .expect("edit");
    let save = control
        .handle(EditorCommand::SaveBankName)
        .expect("save")
        .expect("request");
    control.apply(execute(&adapter, save));

    assert_eq!(
        store.bank_name(BankPk(1)).expect("name").as_deref(),
        Some("Pre-Algebra")
    );
    assert_eq!(control.bank().problem_bank_name, "Algebra");
}

#[test]
fn injected_failure_is_recorded_and_reported() {
    let store = MemoryStore::demo();
    store.fail_next(1).expect("inject failure");
    let adapter = ProblemBankAdapter::in_memory(store.clone());
    let mut control = LaunchControl::new(demo_bank());
    open_loaded(&mut control, &adapter);

    assert!(control.dialog().expect("dialog").problems().is_empty());
    assert_eq!(
        store.calls().expect("calls"),
        vec![RecordedCall::FetchProblems {
            study_pk: StudyPk(1),
            bank_pk: BankPk(1),
        }]
    );
}

#[test]
fn unknown_bank_is_not_found() {
    let adapter = ProblemBankAdapter::in_memory(MemoryStore::new());
    let err = adapter
        .fetch_problems(StudyPk(1), BankPk(42))
        .expect_err("missing bank");
    assert!(err.to_string().contains("problem bank 42"));
}

#[test]
fn demo_store_seeds_algebra_bank() {
    let store = MemoryStore::demo();
    assert_eq!(
        store.bank_name(BankPk(1)).expect("name").as_deref(),
        Some("Algebra")
    );
    let problems = store.problems(BankPk(1)).expect("problems");
    assert_eq!(problems.len(), 3);
    assert_eq!(problems[0].answer_num(), Some(2));
    assert!(store.calls().expect("calls").is_empty());
}
