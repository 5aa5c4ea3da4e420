//! Timing behavior of the debounced input.
//!
//! Paused tokio time makes these deterministic: sleeps auto-advance the
//! clock in deadline order, so the commit timer fires exactly when the test
//! clock passes its deadline.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use gridtui::widgets::DebouncedInput;

type Calls = Arc<Mutex<Vec<String>>>;

fn recording_input(debounce_ms: u64) -> (DebouncedInput, Calls) {
    let input = DebouncedInput::new().with_debounce(Duration::from_millis(debounce_ms));
    let calls: Calls = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&calls);
    input.set_on_change(move |value: &str| sink.lock().unwrap().push(value.to_string()));
    (input, calls)
}

async fn sleep_ms(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

#[tokio::test(start_paused = true)]
async fn burst_commits_once_with_final_value() {
    let (input, calls) = recording_input(300);

    // "a" at t=0, "ab" at t=100, "abc" at t=250.
    input.insert_char('a');
    sleep_ms(100).await;
    input.insert_char('b');
    sleep_ms(150).await;
    input.insert_char('c');

    // No commit at t=300 or t=400: each keystroke reset the deadline.
    sleep_ms(150).await;
    assert!(calls.lock().unwrap().is_empty());

    // One commit at t=550.
    sleep_ms(250).await;
    assert_eq!(*calls.lock().unwrap(), vec!["abc".to_string()]);

    // And nothing further.
    sleep_ms(1000).await;
    assert_eq!(calls.lock().unwrap().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn display_never_lags_behind_typing() {
    let (input, calls) = recording_input(300);

    for (i, c) in "alice".chars().enumerate() {
        input.insert_char(c);
        assert_eq!(input.value(), "alice"[..=i].to_string());
        sleep_ms(50).await;
    }

    // Still buffering: displayed value is ahead of the committed one.
    assert!(calls.lock().unwrap().is_empty());
    assert_eq!(input.value(), "alice");
}

#[tokio::test(start_paused = true)]
async fn each_quiet_period_commits_separately() {
    let (input, calls) = recording_input(300);

    input.insert_char('a');
    sleep_ms(400).await;
    assert_eq!(*calls.lock().unwrap(), vec!["a".to_string()]);

    // The next keystroke starts a fresh countdown and never re-delivers "a".
    input.insert_char('b');
    sleep_ms(400).await;
    assert_eq!(
        *calls.lock().unwrap(),
        vec!["a".to_string(), "ab".to_string()]
    );
}

#[tokio::test(start_paused = true)]
async fn backspace_also_restarts_the_countdown() {
    let (input, calls) = recording_input(300);

    input.insert_char('a');
    input.insert_char('b');
    sleep_ms(200).await;
    input.delete_char_before();
    sleep_ms(200).await;
    assert!(calls.lock().unwrap().is_empty());

    sleep_ms(200).await;
    assert_eq!(*calls.lock().unwrap(), vec!["a".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn sync_during_pending_commits_synced_value() {
    let (input, calls) = recording_input(300);

    input.insert_char('a');
    input.insert_char('b');
    sleep_ms(100).await;

    // The owner resets the filter while a commit is pending.
    input.sync_value("reset");
    assert_eq!(input.value(), "reset");

    sleep_ms(400).await;
    // The post-sync value commits; the stale "ab" never does.
    assert_eq!(*calls.lock().unwrap(), vec!["reset".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn sync_while_idle_schedules_nothing() {
    let (input, calls) = recording_input(300);

    input.sync_value("quiet");
    assert_eq!(input.value(), "quiet");
    assert!(!input.is_pending());

    sleep_ms(1000).await;
    assert!(calls.lock().unwrap().is_empty());
}

#[tokio::test(start_paused = true)]
async fn replacing_callback_cancels_stale_commit() {
    let (input, old_calls) = recording_input(300);

    input.insert_char('x');
    sleep_ms(100).await;

    let new_calls: Calls = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&new_calls);
    input.set_on_change(move |value: &str| sink.lock().unwrap().push(value.to_string()));

    sleep_ms(400).await;
    // The pending edit still commits, but only through the new callback.
    assert!(old_calls.lock().unwrap().is_empty());
    assert_eq!(*new_calls.lock().unwrap(), vec!["x".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn drop_cancels_pending_commit() {
    let (input, calls) = recording_input(300);

    input.insert_char('a');
    drop(input);

    sleep_ms(1000).await;
    assert!(calls.lock().unwrap().is_empty());
}

#[tokio::test(start_paused = true)]
async fn commit_records_committed_value() {
    let (input, _calls) = recording_input(100);

    input.insert_char('q');
    assert_eq!(input.committed_value(), "");
    assert!(input.is_pending());

    sleep_ms(200).await;
    assert_eq!(input.committed_value(), "q");
    assert!(!input.is_pending());
}

#[tokio::test(start_paused = true)]
async fn zero_debounce_commits_on_next_tick() {
    let (input, calls) = recording_input(0);

    input.insert_char('a');
    sleep_ms(1).await;
    assert_eq!(*calls.lock().unwrap(), vec!["a".to_string()]);
}
