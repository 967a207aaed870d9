//! Disposal racing a handler on a multi-thread runtime
//!
//! The sequencer task is parked in the middle of a handler while another
//! thread disposes. `dispose()` must wait for that handler, and nothing may
//! change once it has returned.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use folio_core::{ManualFrames, SplashConfig, SplashSequencer};
use tokio::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

const WAIT: Duration = Duration::from_secs(5);

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[derive(Default)]
struct MessageVisitor(String);

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{value:?}");
        }
    }
}

/// Parks the emitting thread on the first event carrying `message`.
struct HoldOnEvent {
    message: &'static str,
    entered: Mutex<Sender<()>>,
    release: Mutex<Receiver<()>>,
}

impl<S: Subscriber> Layer<S> for HoldOnEvent {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        if visitor.0 != self.message {
            return;
        }
        let _ = self.entered.lock().unwrap().send(());
        let _ = self.release.lock().unwrap().recv_timeout(WAIT);
    }
}

/// Installs a [`HoldOnEvent`] for the current thread.
fn hold_on(message: &'static str) -> (tracing::subscriber::DefaultGuard, Receiver<()>, Sender<()>) {
    let (entered_tx, entered_rx) = mpsc::channel();
    let (release_tx, release_rx) = mpsc::channel();
    let layer = HoldOnEvent {
        message,
        entered: Mutex::new(entered_tx),
        release: Mutex::new(release_rx),
    };
    let guard = tracing::subscriber::set_default(tracing_subscriber::registry().with(layer));
    (guard, entered_rx, release_tx)
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_dispose_waits_for_exit_handler() {
    let (_guard, entered, release) = hold_on("Splash exit started");

    let (trigger, frames) = ManualFrames::channel();
    let config = SplashConfig::with_duration(ms(20)).with_exit_delays(ms(10), ms(5000));
    let handle = SplashSequencer::new(config)
        .unwrap()
        .with_frames(frames)
        .spawn();

    trigger.fire(Instant::now() + ms(20));
    entered.recv_timeout(WAIT).expect("exit handler reached");

    let disposer = thread::spawn(move || {
        handle.dispose();
        let at_dispose = handle.snapshot();
        (handle, at_dispose)
    });

    thread::sleep(ms(100));
    assert!(
        !disposer.is_finished(),
        "dispose returned while a handler was still running"
    );

    release.send(()).unwrap();
    let (handle, at_dispose) = disposer.join().unwrap();
    assert!(at_dispose.exiting);

    thread::sleep(ms(100));
    assert_eq!(handle.snapshot(), at_dispose);
    assert!(handle.is_disposed());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_dispose_before_exit_handler_keeps_snapshot() {
    let (_guard, entered, release) = hold_on("Progress reached 100%");

    let (trigger, frames) = ManualFrames::channel();
    let config = SplashConfig::with_duration(ms(20)).with_exit_delays(ms(300), ms(400));
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let handle = SplashSequencer::new(config)
        .unwrap()
        .with_frames(frames)
        .on_complete(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .spawn();

    trigger.fire(Instant::now() + ms(20));
    entered.recv_timeout(WAIT).expect("frame handler reached");

    let disposer = thread::spawn(move || {
        handle.dispose();
        let at_dispose = handle.snapshot();
        (handle, at_dispose)
    });
    thread::sleep(ms(50));
    release.send(()).unwrap();
    let (handle, at_dispose) = disposer.join().unwrap();

    // The frame handler finished first; the exit and completion steps never run
    assert_eq!(at_dispose.progress, 100.0);
    assert!(!at_dispose.exiting);
    thread::sleep(ms(600));
    assert_eq!(handle.snapshot(), at_dispose);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_dispose_waits_for_completion_callback() {
    let (entered_tx, entered_rx) = mpsc::channel();
    let (release_tx, release_rx) = mpsc::channel::<()>();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);

    let (trigger, frames) = ManualFrames::channel();
    let config = SplashConfig::with_duration(ms(20)).with_exit_delays(ms(10), ms(30));
    let handle = SplashSequencer::new(config)
        .unwrap()
        .with_frames(frames)
        .on_complete(move || {
            let _ = entered_tx.send(());
            let _ = release_rx.recv_timeout(WAIT);
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .spawn();

    trigger.fire(Instant::now() + ms(20));
    entered_rx.recv_timeout(WAIT).expect("callback started");

    let disposer = thread::spawn(move || {
        handle.dispose();
        handle
    });

    thread::sleep(ms(100));
    assert!(!disposer.is_finished());
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    release_tx.send(()).unwrap();
    let handle = disposer.join().unwrap();

    // The callback completed before dispose returned, exactly once
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(handle.snapshot().is_complete());
    thread::sleep(ms(100));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}
