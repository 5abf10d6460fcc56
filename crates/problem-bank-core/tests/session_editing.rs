mod common;

use problem_bank_core::{
    EditError, EditSession, EditorRequest, OptionPk, OptionUpdate, PortError, SessionTicket,
};

use common::{algebra_bank, sample_problems};

fn loaded_session() -> EditSession {
    let mut session = EditSession::new(algebra_bank(), SessionTicket(1));
    session.apply_problems(Ok(sample_problems()));
    session
}

#[test]
fn mount_copies_bank_name_and_starts_loading() {
    let session = EditSession::new(algebra_bank(), SessionTicket(1));
    assert_eq!(session.bank_name(), "Algebra");
    assert_eq!(session.title(), "Algebra");
    assert!(session.is_loading());
    assert!(session.problems().is_empty());
    assert_eq!(
        session.fetch_request(),
        EditorRequest::FetchProblems {
            ticket: SessionTicket(1),
            study_pk: algebra_bank().study_pk,
            bank_pk: algebra_bank().pk,
        }
    );
}

#[test]
fn option_edit_is_isolated_to_its_index() {
    let mut session = loaded_session();
    let before = session.problems().to_vec();

    session
        .set_option_content(0, 2, "five")
        .expect("edit option 2 of problem 0");

    let after = session.problems();
    assert_eq!(after[0].options[2].content, "five");
    assert_eq!(after[0].options[0], before[0].options[0]);
    assert_eq!(after[0].options[1], before[0].options[1]);
    assert_eq!(after[0].problem_content, before[0].problem_content);
    assert_eq!(after[1], before[1]);
}

#[test]
fn scalar_edits_touch_only_the_target_problem() {
    let mut session = loaded_session();
    let untouched = session.problems()[0].clone();

    session
        .set_problem_content(1, "x^2 = 16, x > 0")
        .expect("content");
    session
        .set_problem_explanation(1, "take the positive root")
        .expect("explanation");
    session
        .select_answer(1, OptionPk(1101))
        .expect("answer");

    assert_eq!(session.problems()[0], untouched);
    let edited = &session.problems()[1];
    assert_eq!(edited.problem_content, "x^2 = 16, x > 0");
    assert_eq!(edited.problem_explanation, "take the positive root");
    assert_eq!(edited.answer_pk, Some(OptionPk(1101)));
    assert_eq!(edited.answer_num(), Some(2));
}

#[test]
fn out_of_range_edits_are_rejected_without_changes() {
    let mut session = loaded_session();
    let before = session.problems().to_vec();

    assert_eq!(
        session.set_problem_content(5, "nope"),
        Err(EditError::ProblemIndex { index: 5, len: 2 })
    );
    assert_eq!(
        session.set_option_content(0, 9, "nope"),
        Err(EditError::OptionIndex {
            problem: 0,
            option: 9,
            len: 3
        })
    );
    assert!(matches!(
        session.select_answer(0, OptionPk(1100)),
        Err(EditError::UnknownOption { problem: 0, .. })
    ));
    assert_eq!(session.problems(), before.as_slice());
}

#[test]
fn problem_update_carries_current_buffers_without_option_ids() {
    let mut session = loaded_session();
    session.set_problem_content(0, "2 + 3 = ?").expect("content");
    session.set_option_content(0, 1, "five").expect("option");
    session.select_answer(0, OptionPk(1001)).expect("answer");
    session.set_problem_content(1, "unrelated edit").expect("other");

    let update = session.problem_update(0).expect("update");
    assert_eq!(update.problem_content, "2 + 3 = ?");
    assert_eq!(update.answer, Some(OptionPk(1001)));
    assert_eq!(update.problem_explanation, "explanation for 2 + 2 = ?");
    assert_eq!(
        update.options,
        vec![
            OptionUpdate {
                content: "3".to_owned(),
                num: 1
            },
            OptionUpdate {
                content: "five".to_owned(),
                num: 2
            },
            OptionUpdate {
                content: "5".to_owned(),
                num: 3
            },
        ]
    );
}

#[test]
fn bank_name_update_ignores_problem_edits() {
    let mut session = loaded_session();
    session.set_problem_content(0, "edited").expect("content");
    session.set_bank_name("Linear Algebra");

    let update = session.bank_name_update();
    assert_eq!(update.problem_bank_pk, algebra_bank().pk);
    assert_eq!(update.problem_bank_name, "Linear Algebra");
    assert_eq!(session.title(), "Linear Algebra");
}

#[test]
fn failed_fetch_leaves_list_empty() {
    let mut session = EditSession::new(algebra_bank(), SessionTicket(1));
    session.apply_problems(Err(PortError::Transport("connection refused".to_owned())));
    assert!(session.problems().is_empty());
    assert!(!session.is_loading());
}

#[test]
fn save_results_set_notice_only_on_success() {
    let mut session = loaded_session();

    let _ = session.save_bank_name_request();
    assert!(session.is_saving_bank_name());
    session.apply_bank_name_saved(Err(PortError::Status(500)));
    assert!(!session.is_saving_bank_name());
    assert!(session.notice().is_none());

    let _ = session.save_problem_request(1).expect("save request");
    assert!(session.is_saving_problem(1));
    assert!(!session.is_saving_problem(0));
    session.apply_problem_saved(1, Ok(()));
    assert!(!session.is_saving_problem(1));
    assert_eq!(session.notice(), Some("Problem 2 saved."));

    session.clear_notice();
    assert!(session.notice().is_none());
}

#[test]
fn save_request_for_missing_problem_fails() {
    let mut session = EditSession::new(algebra_bank(), SessionTicket(1));
    assert_eq!(
        session.save_problem_request(0),
        Err(EditError::ProblemIndex { index: 0, len: 0 })
    );
}
