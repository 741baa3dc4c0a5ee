//! Scripted sessions against the interactive controller.
//!
//! Each test feeds a fixed sequence of answers and checks both what the
//! operator saw and what ended up in the repository.

mod mocks;

use contact_book::error::StoreError;
use contact_book::models::Contact;
use contact_book::repositories::ContactRepository;
use contact_book::{ContactService, Controller, NameValidation, StoreResult};
use mocks::MockContactRepository;
use std::sync::Arc;

struct Session {
    output: String,
    result: StoreResult<()>,
}

fn run_session(repo: &MockContactRepository, export: &MockContactRepository, input: &str) -> Session {
    run_session_bytes(repo, export, input.as_bytes())
}

fn run_session_bytes(
    repo: &MockContactRepository,
    export: &MockContactRepository,
    input: &[u8],
) -> Session {
    let service = ContactService::new(
        Arc::new(repo.clone()) as Arc<dyn ContactRepository>,
        Arc::new(export.clone()) as Arc<dyn ContactRepository>,
        NameValidation::Permissive,
    );
    let mut controller = Controller::new(service, input, Vec::new());
    let result = controller.run();
    let output = String::from_utf8(controller.into_output()).unwrap();
    Session { output, result }
}

fn seeded() -> MockContactRepository {
    let repo = MockContactRepository::new();
    repo.add_contacts(vec![
        Contact::new("alice@x.com", "Alice", "A", "555-111-2222"),
        Contact::new("bob@y.com", "Bob", "B", "555-333-4444"),
    ]);
    repo
}

#[test]
fn test_add_contact_session() {
    let repo = MockContactRepository::new();
    let export = MockContactRepository::new();

    let session = run_session(
        &repo,
        &export,
        "1\nAlice\nA\nalice@x.com\n555-111-2222\nno\n\n",
    );

    assert!(session.result.is_ok());
    assert!(session.output.contains("the following contact was added"));
    assert_eq!(
        repo.snapshot().get("alice@x.com").unwrap(),
        &Contact::new("alice@x.com", "Alice", "A", "555-111-2222")
    );
}

#[test]
fn test_invalid_phone_is_reprompted() {
    let repo = MockContactRepository::new();
    let export = MockContactRepository::new();

    let session = run_session(
        &repo,
        &export,
        "1\nAlice\nA\nalice@x.com\n555.123.4567\n555-111-2222\nno\n\n",
    );

    assert!(session.result.is_ok());
    assert!(session.output.contains("invalid phone number: 555.123.4567"));
    assert_eq!(
        repo.snapshot().get("alice@x.com").unwrap().phone_number,
        "555-111-2222"
    );
}

#[test]
fn test_duplicate_email_is_reprompted() {
    let repo = seeded();
    let export = MockContactRepository::new();

    let session = run_session(
        &repo,
        &export,
        "1\nCarol\nC\nalice@x.com\ncarol@z.com\n555-555-6666\nno\n\n",
    );

    assert!(session.result.is_ok());
    assert!(session.output.contains("duplicate email address: alice@x.com"));
    assert_eq!(repo.snapshot().len(), 3);
}

#[test]
fn test_add_another_loops() {
    let repo = MockContactRepository::new();
    let export = MockContactRepository::new();

    let session = run_session(
        &repo,
        &export,
        "1\nAlice\nA\nalice@x.com\n555-111-2222\nyes\nBob\nB\nbob@y.com\n555-333-4444\nn\n\n",
    );

    assert!(session.result.is_ok());
    assert_eq!(repo.snapshot().len(), 2);
}

#[test]
fn test_blank_answer_cancels_add() {
    let repo = MockContactRepository::new();
    let export = MockContactRepository::new();

    let session = run_session(&repo, &export, "1\nAlice\n\n\n");

    assert!(session.result.is_ok());
    assert!(session.output.contains("add contact cancelled"));
    assert!(repo.snapshot().is_empty());
    assert_eq!(repo.get_call_count("persist"), 0);
}

#[test]
fn test_delete_with_confirmation_renumbers() {
    let repo = seeded();
    let export = MockContactRepository::new();

    let session = run_session(&repo, &export, "2\n1\nyes\n\n\n");

    assert!(session.result.is_ok());
    assert!(session.output.contains("alice@x.com was deleted successfully"));
    // After the delete the listing is redisplayed with bob as entry 1
    let after_delete = session
        .output
        .split("was deleted successfully")
        .nth(1)
        .unwrap();
    assert!(after_delete.contains("1. bob@y.com"));

    let book = repo.snapshot();
    assert_eq!(book.len(), 1);
    assert!(book.get("bob@y.com").is_some());
}

#[test]
fn test_delete_declined() {
    let repo = seeded();
    let export = MockContactRepository::new();

    let session = run_session(&repo, &export, "2\n2\nno\n\n\n");

    assert!(session.result.is_ok());
    assert!(session.output.contains("contact deletion cancelled"));
    assert_eq!(repo.snapshot().len(), 2);
}

#[test]
fn test_delete_confirmation_requires_an_answer() {
    let repo = seeded();
    let export = MockContactRepository::new();

    let session = run_session(&repo, &export, "2\n1\n\nno\n\n\n");

    assert!(session.result.is_ok());
    assert!(session.output.contains("please enter yes or no"));
    assert!(session.output.contains("contact deletion cancelled"));
    assert_eq!(repo.snapshot().len(), 2);
}

#[test]
fn test_delete_invalid_selection() {
    let repo = seeded();
    let export = MockContactRepository::new();

    let session = run_session(&repo, &export, "2\n9\nabc\n\n\n");

    assert!(session.result.is_ok());
    assert_eq!(session.output.matches("invalid entry").count(), 2);
    assert_eq!(repo.snapshot().len(), 2);
}

#[test]
fn test_edit_phone_only() {
    let repo = seeded();
    let export = MockContactRepository::new();

    let session = run_session(&repo, &export, "3\n1\n\n\n\n(555) 999-8888\n\n\n");

    assert!(session.result.is_ok());
    assert!(session.output.contains("the contact was updated"));
    assert_eq!(
        repo.snapshot().get("alice@x.com").unwrap(),
        &Contact::new("alice@x.com", "Alice", "A", "(555) 999-8888")
    );
}

#[test]
fn test_edit_resubmitting_own_values_is_not_duplicate() {
    let repo = seeded();
    let export = MockContactRepository::new();

    let session = run_session(
        &repo,
        &export,
        "3\n1\nalice@x.com\nAlice\nA\n555-111-2222\n\n\n",
    );

    assert!(session.result.is_ok());
    assert!(!session.output.contains("duplicate"));
    assert!(session.output.contains("the contact was updated"));
}

#[test]
fn test_edit_with_no_changes() {
    let repo = seeded();
    let export = MockContactRepository::new();

    let session = run_session(&repo, &export, "3\n2\n\n\n\n\n\n\n");

    assert!(session.result.is_ok());
    assert!(session.output.contains("no changes made"));
    assert_eq!(repo.get_call_count("persist"), 0);
}

#[test]
fn test_empty_book_redirects_to_add() {
    let repo = MockContactRepository::new();
    let export = MockContactRepository::new();

    let session = run_session(
        &repo,
        &export,
        "5\nAlice\nA\nalice@x.com\n555-111-2222\nno\n\n",
    );

    assert!(session.result.is_ok());
    assert!(session.output.contains("'mock contacts' is empty"));
    assert!(session.output.contains("> add contact"));
    assert_eq!(repo.snapshot().len(), 1);
}

#[test]
fn test_list_by_domain_selection() {
    let repo = seeded();
    let export = MockContactRepository::new();

    let session = run_session(&repo, &export, "4\n2\n\n");

    assert!(session.result.is_ok());
    assert!(session.output.contains("1. x.com"));
    assert!(session.output.contains("2. y.com"));

    let results = session.output.split("> results for y.com").nth(1).unwrap();
    assert!(results.contains("bob@y.com"));
    assert!(!results.contains("alice@x.com"));
}

#[test]
fn test_list_all_sorted_by_email() {
    let repo = MockContactRepository::new();
    repo.add_contacts(vec![
        Contact::new("zed@x.com", "Zed", "Z", "555-000-0001"),
        Contact::new("amy@x.com", "Amy", "Y", "555-000-0002"),
    ]);
    let export = MockContactRepository::new();

    let session = run_session(&repo, &export, "5\n\n");

    let amy = session.output.find("amy@x.com").unwrap();
    let zed = session.output.find("zed@x.com").unwrap();
    assert!(amy < zed);
}

#[test]
fn test_export_command() {
    let repo = seeded();
    let export = MockContactRepository::new();

    let session = run_session(&repo, &export, "6\n\n");

    assert!(session.result.is_ok());
    assert!(session
        .output
        .contains("mock contacts exported successfully (2 contacts)"));
    assert_eq!(export.get_call_count("persist"), 1);
    assert_eq!(export.snapshot().len(), 2);
}

#[test]
fn test_invalid_menu_choice() {
    let repo = seeded();
    let export = MockContactRepository::new();

    let session = run_session(&repo, &export, "9\n\n");

    assert!(session.result.is_ok());
    assert!(session.output.contains("invalid choice"));
}

#[test]
fn test_closed_input_ends_session() {
    let repo = MockContactRepository::new();
    let export = MockContactRepository::new();

    let session = run_session(&repo, &export, "1\nAlice\n");

    assert!(session.result.is_ok());
    assert!(repo.snapshot().is_empty());
}

#[test]
fn test_invalid_utf8_input_does_not_end_session() {
    let repo = MockContactRepository::new();
    let export = MockContactRepository::new();

    let session = run_session_bytes(
        &repo,
        &export,
        b"\xff\n1\n\xff\xfeAlice\nA\nalice@x.com\n555-111-2222\nno\n\n",
    );

    assert!(session.result.is_ok());
    assert!(session.output.contains("invalid choice"));
    assert_eq!(
        repo.snapshot().get("alice@x.com").unwrap().first_name,
        "\u{FFFD}\u{FFFD}Alice"
    );
}

#[test]
fn test_write_failure_ends_session_with_error() {
    let repo = MockContactRepository::new();
    repo.fail_writes();
    let export = MockContactRepository::new();

    let session = run_session(&repo, &export, "1\nCarol\nC\ncarol@z.com\n555-555-6666\n");

    assert!(matches!(session.result, Err(StoreError::Io(_))));
}
