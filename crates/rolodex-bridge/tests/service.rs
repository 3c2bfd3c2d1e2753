use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use rolodex_bridge::{AddressBook, BridgeError, BridgeOptions, ScriptRunner};
use rolodex_core::{ContactUpdate, NewContact};

const SAMPLE_ROW: &str =
    "id-1\tAda\tLovelace\tAcme\tmissing value\tmissing value\tmissing value\ta@x.com\t+31 6 48502148\t";

/// Records every script it is handed and optionally sleeps, so tests can
/// assert which scripts ran and whether executions overlapped.
#[derive(Clone, Default)]
struct StubRunner {
    output: String,
    delay: Duration,
    calls: Arc<Mutex<Vec<String>>>,
    spans: Arc<Mutex<Vec<(Instant, Instant)>>>,
}

impl StubRunner {
    fn returning(output: &str) -> Self {
        Self {
            output: output.to_string(),
            ..Default::default()
        }
    }

    fn with_delay(output: &str, delay: Duration) -> Self {
        Self {
            output: output.to_string(),
            delay,
            ..Default::default()
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock").clone()
    }
}

impl ScriptRunner for StubRunner {
    fn run(&self, script: &str, _timeout: Duration) -> rolodex_bridge::Result<String> {
        let start = Instant::now();
        self.calls.lock().expect("calls lock").push(script.to_string());
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        self.spans
            .lock()
            .expect("spans lock")
            .push((start, Instant::now()));
        Ok(self.output.clone())
    }
}

struct FailingRunner;

impl ScriptRunner for FailingRunner {
    fn run(&self, _script: &str, _timeout: Duration) -> rolodex_bridge::Result<String> {
        Err(BridgeError::Script("execution error: boom (-1728)".to_string()))
    }
}

fn book_with(runner: StubRunner) -> AddressBook<StubRunner> {
    AddressBook::with_runner(runner, BridgeOptions::default())
}

#[test]
fn list_runs_one_script_and_decodes_rows() {
    let runner = StubRunner::returning(SAMPLE_ROW);
    let book = book_with(runner.clone());

    let contacts = book.list_contacts(None).expect("list");
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].full_name, "Ada Lovelace");

    let calls = runner.calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].contains("if contactCount >= 50 then exit repeat"));
}

#[test]
fn list_honors_a_caller_limit() {
    let runner = StubRunner::returning("");
    let book = book_with(runner.clone());
    book.list_contacts(Some(5)).expect("list");
    assert!(runner.calls()[0].contains("if contactCount >= 5 then exit repeat"));
}

#[test]
fn get_with_no_match_is_none_not_an_error() {
    let runner = StubRunner::returning("");
    let book = book_with(runner);
    assert!(book.get_contact("missing-id").expect("get").is_none());
}

#[test]
fn create_without_identity_never_invokes_the_runner() {
    let runner = StubRunner::returning("new-id");
    let book = book_with(runner.clone());

    let draft = NewContact {
        email: Some("a@x.com".to_string()),
        ..Default::default()
    };
    let err = book.create_contact(&draft).unwrap_err();
    assert!(matches!(err, BridgeError::InvalidInput(_)));
    assert!(runner.calls().is_empty());
}

#[test]
fn create_returns_the_new_id() {
    let runner = StubRunner::returning("ABCD-EF:ABPerson");
    let book = book_with(runner.clone());

    let draft = NewContact {
        first_name: Some("Ada".to_string()),
        ..Default::default()
    };
    let id = book.create_contact(&draft).expect("create");
    assert_eq!(id, "ABCD-EF:ABPerson");
    assert_eq!(runner.calls().len(), 1);
}

#[test]
fn empty_update_is_a_noop_without_external_call() {
    let runner = StubRunner::returning("true");
    let book = book_with(runner.clone());

    let applied = book
        .update_contact("id-1", &ContactUpdate::default())
        .expect("update");
    assert!(!applied);
    assert!(runner.calls().is_empty());
}

#[test]
fn update_reports_the_script_verdict() {
    let patch = ContactUpdate {
        first_name: Some("Augusta".to_string()),
        ..Default::default()
    };

    let book = book_with(StubRunner::returning("true"));
    assert!(book.update_contact("id-1", &patch).expect("update"));

    let book = book_with(StubRunner::returning("false"));
    assert!(!book.update_contact("id-1", &patch).expect("update"));
}

#[test]
fn delete_collapses_not_found_to_false() {
    let book = book_with(StubRunner::returning("false"));
    assert!(!book.delete_contact("missing-id").expect("delete"));
}

#[test]
fn lookup_searches_the_trailing_seven_digits() {
    let runner = StubRunner::returning(SAMPLE_ROW);
    let book = book_with(runner.clone());

    let contact = book
        .lookup_by_phone("+31 648 502 148")
        .expect("lookup")
        .expect("match");
    assert_eq!(contact.id, "id-1");

    let calls = runner.calls();
    assert!(calls[0].contains("if value of ph contains \"8502148\""));
    assert!(calls[0].contains("with timeout of 300 seconds"));
}

#[test]
fn lookup_without_digits_never_invokes_the_runner() {
    let runner = StubRunner::returning(SAMPLE_ROW);
    let book = book_with(runner.clone());
    assert!(book.lookup_by_phone("no digits here").expect("lookup").is_none());
    assert!(runner.calls().is_empty());
}

#[test]
fn script_failures_surface_to_the_caller() {
    let book = AddressBook::with_runner(FailingRunner, BridgeOptions::default());
    let err = book.list_contacts(None).unwrap_err();
    match err {
        BridgeError::Script(message) => assert!(message.contains("-1728")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn concurrent_operations_never_overlap() {
    let runner = StubRunner::with_delay("", Duration::from_millis(25));
    let spans = runner.spans.clone();
    let book = Arc::new(book_with(runner));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let book = Arc::clone(&book);
            thread::spawn(move || {
                book.list_contacts(None).expect("list");
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("join");
    }

    let mut spans = spans.lock().expect("spans lock").clone();
    spans.sort_by_key(|(start, _)| *start);
    assert_eq!(spans.len(), 4);
    for pair in spans.windows(2) {
        assert!(
            pair[0].1 <= pair[1].0,
            "script executions overlapped: {pair:?}"
        );
    }
}
