//! Contact form integration tests
//!
//! Drive complete submissions against scripted relays, a recording view and
//! the virtual-clock scheduler.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use futures::channel::oneshot;
use futures::executor::{block_on, LocalPool};
use futures::task::LocalSpawnExt;

use folio_core::contact::LOADING_LABEL;
use folio_core::{
    BannerId, BannerKind, BannerTiming, ContactForm, ContactView, FolioError, FolioResult,
    ManualScheduler, Relay, RelayResponse, SubmissionState, SubmitControl,
};

const LABEL: &str = r#"<i class="fas fa-paper-plane"></i> Send Message"#;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

// ============================================================================
// Test doubles
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
struct ShownBanner {
    id: BannerId,
    kind: BannerKind,
    exiting: bool,
}

#[derive(Default)]
struct ViewLog {
    banners: Vec<ShownBanner>,
    resets: usize,
}

#[derive(Clone, Default)]
struct RecordingView(Rc<RefCell<ViewLog>>);

impl RecordingView {
    fn banners(&self) -> Vec<ShownBanner> {
        self.0.borrow().banners.clone()
    }

    fn resets(&self) -> usize {
        self.0.borrow().resets
    }
}

impl ContactView for RecordingView {
    fn reset_fields(&self) {
        self.0.borrow_mut().resets += 1;
    }

    fn insert_banner(&self, id: BannerId, kind: BannerKind) {
        self.0.borrow_mut().banners.push(ShownBanner {
            id,
            kind,
            exiting: false,
        });
    }

    fn start_banner_exit(&self, id: BannerId) {
        for banner in self.0.borrow_mut().banners.iter_mut() {
            if banner.id == id {
                banner.exiting = true;
            }
        }
    }

    fn remove_banner(&self, id: BannerId) {
        self.0.borrow_mut().banners.retain(|b| b.id != id);
    }
}

struct ButtonState {
    label: RefCell<String>,
    disabled: Cell<bool>,
}

#[derive(Clone)]
struct Button(Rc<ButtonState>);

impl Button {
    fn new() -> Self {
        Self(Rc::new(ButtonState {
            label: RefCell::new(LABEL.to_string()),
            disabled: Cell::new(false),
        }))
    }

    fn is_disabled(&self) -> bool {
        self.0.disabled.get()
    }
}

impl SubmitControl for Button {
    fn label(&self) -> String {
        self.0.label.borrow().clone()
    }

    fn set_label(&self, label: &str) {
        *self.0.label.borrow_mut() = label.to_string();
    }

    fn set_disabled(&self, disabled: bool) {
        self.0.disabled.set(disabled);
    }
}

/// Answers immediately with a fixed result and checks the button state
/// while "on the wire".
struct ScriptedRelay {
    result: FolioResult<RelayResponse>,
    button: Button,
    seen_loading: Cell<bool>,
}

impl ScriptedRelay {
    fn new(result: FolioResult<RelayResponse>, button: &Button) -> Self {
        Self {
            result,
            button: button.clone(),
            seen_loading: Cell::new(false),
        }
    }
}

impl Relay for ScriptedRelay {
    async fn send(&self) -> FolioResult<RelayResponse> {
        self.seen_loading
            .set(self.button.is_disabled() && self.button.label() == LOADING_LABEL);
        self.result.clone()
    }
}

/// Stays pending until the test answers through the channel.
struct PendingRelay {
    rx: RefCell<Option<oneshot::Receiver<FolioResult<RelayResponse>>>>,
}

impl Relay for PendingRelay {
    async fn send(&self) -> FolioResult<RelayResponse> {
        let rx = self.rx.borrow_mut().take().expect("relay used twice");
        rx.await
            .unwrap_or_else(|_| Err(FolioError::Network("request dropped".into())))
    }
}

fn setup() -> (ManualScheduler, RecordingView, ContactForm<ManualScheduler, RecordingView>) {
    let scheduler = ManualScheduler::new();
    let view = RecordingView::default();
    let form = ContactForm::new(scheduler.clone(), view.clone(), BannerTiming::default());
    (scheduler, view, form)
}

fn success() -> FolioResult<RelayResponse> {
    Ok(RelayResponse {
        success: true,
        message: Some("Email sent successfully!".into()),
    })
}

/// Exactly one banner of `kind` until 5000ms, exiting until 5300ms, then gone
fn assert_banner_lifecycle(scheduler: &ManualScheduler, view: &RecordingView, kind: BannerKind) {
    let banners = view.banners();
    assert_eq!(banners.len(), 1);
    assert_eq!(banners[0].kind, kind);
    assert!(!banners[0].exiting);

    scheduler.advance(ms(4999));
    assert_eq!(view.banners().len(), 1);
    assert!(!view.banners()[0].exiting);

    scheduler.advance(ms(1));
    assert_eq!(view.banners().len(), 1);
    assert!(view.banners()[0].exiting, "exit animation starts at 5000ms");

    scheduler.advance(ms(299));
    assert_eq!(view.banners().len(), 1);

    scheduler.advance(ms(1));
    assert!(view.banners().is_empty(), "banner removed at 5300ms");
}

// ============================================================================
// Outcomes
// ============================================================================

#[test]
fn test_success_clears_fields_and_shows_banner() {
    let (scheduler, view, form) = setup();
    let button = Button::new();
    let relay = ScriptedRelay::new(success(), &button);

    let kind = block_on(form.submit(button.clone(), &relay)).unwrap();

    assert_eq!(kind, BannerKind::Success);
    assert!(relay.seen_loading.get(), "button disabled with loading label in flight");
    assert_eq!(view.resets(), 1);
    assert!(!button.is_disabled());
    assert_eq!(button.label(), LABEL);
    assert_eq!(form.state(), SubmissionState::Success);

    assert_banner_lifecycle(&scheduler, &view, BannerKind::Success);
    assert_eq!(form.state(), SubmissionState::Idle);
    assert_eq!(form.banner(), None);
}

#[test]
fn test_rejected_submission_shows_error() {
    let (scheduler, view, form) = setup();
    let button = Button::new();
    let relay = ScriptedRelay::new(
        Ok(RelayResponse {
            success: false,
            message: Some("Invalid access key".into()),
        }),
        &button,
    );

    let kind = block_on(form.submit(button.clone(), &relay)).unwrap();

    assert_eq!(kind, BannerKind::Error);
    assert_eq!(view.resets(), 0, "fields kept on failure");
    assert!(!button.is_disabled());
    assert_eq!(button.label(), LABEL);
    assert_eq!(form.state(), SubmissionState::Error);

    assert_banner_lifecycle(&scheduler, &view, BannerKind::Error);
}

#[test]
fn test_network_error_shows_error() {
    let (scheduler, view, form) = setup();
    let button = Button::new();
    let relay = ScriptedRelay::new(Err(FolioError::Network("offline".into())), &button);

    let kind = block_on(form.submit(button.clone(), &relay)).unwrap();

    assert_eq!(kind, BannerKind::Error);
    assert!(!button.is_disabled());
    assert_eq!(button.label(), LABEL);
    assert_banner_lifecycle(&scheduler, &view, BannerKind::Error);
}

#[test]
fn test_decode_error_shows_error() {
    let (scheduler, view, form) = setup();
    let button = Button::new();
    let relay = ScriptedRelay::new(RelayResponse::from_json("<html>502</html>"), &button);

    let kind = block_on(form.submit(button.clone(), &relay)).unwrap();

    assert_eq!(kind, BannerKind::Error);
    assert_eq!(view.resets(), 0, "fields kept on failure");
    assert!(!button.is_disabled());
    assert_eq!(button.label(), LABEL);
    assert_eq!(form.state(), SubmissionState::Error);

    assert_banner_lifecycle(&scheduler, &view, BannerKind::Error);
    assert_eq!(form.state(), SubmissionState::Idle);
}

// ============================================================================
// Banner slot
// ============================================================================

#[test]
fn test_new_banner_replaces_old() {
    let (scheduler, view, form) = setup();

    let first = form.show_banner(BannerKind::Error);
    scheduler.advance(ms(3000));
    let second = form.show_banner(BannerKind::Success);

    let banners = view.banners();
    assert_eq!(banners.len(), 1);
    assert_eq!(banners[0].id, second);
    assert_ne!(first, second);

    // First banner's dismissal time passes without touching the second
    scheduler.advance(ms(2500));
    assert_eq!(view.banners().len(), 1);
    assert!(!view.banners()[0].exiting);

    // Second banner follows its own schedule: 3000 + 5000 + 300
    scheduler.advance(ms(2500));
    assert!(view.banners()[0].exiting);
    scheduler.advance(ms(300));
    assert!(view.banners().is_empty());
    assert_eq!(scheduler.pending(), 0);
}

#[test]
fn test_resubmit_after_completion() {
    let (scheduler, view, form) = setup();
    let button = Button::new();

    let failing = ScriptedRelay::new(Err(FolioError::Network("offline".into())), &button);
    block_on(form.submit(button.clone(), &failing)).unwrap();
    scheduler.advance(ms(1000));

    let working = ScriptedRelay::new(success(), &button);
    let kind = block_on(form.submit(button.clone(), &working)).unwrap();

    assert_eq!(kind, BannerKind::Success);
    let banners = view.banners();
    assert_eq!(banners.len(), 1);
    assert_eq!(banners[0].kind, BannerKind::Success);
}

// ============================================================================
// In-flight behavior
// ============================================================================

#[test]
fn test_overlapping_submission_rejected() {
    let (_scheduler, view, form) = setup();
    let form = Rc::new(form);
    let button = Button::new();
    let (tx, rx) = oneshot::channel();

    let mut pool = LocalPool::new();
    {
        let form = form.clone();
        let button = button.clone();
        let relay = PendingRelay {
            rx: RefCell::new(Some(rx)),
        };
        pool.spawner()
            .spawn_local(async move {
                form.submit(button, &relay).await.unwrap();
            })
            .unwrap();
    }
    pool.run_until_stalled();

    assert_eq!(form.state(), SubmissionState::Submitting);
    assert!(button.is_disabled());

    // A programmatic second submit is turned away without touching the button
    let second = ScriptedRelay::new(success(), &button);
    let err = block_on(form.submit(button.clone(), &second)).unwrap_err();
    assert_eq!(err, FolioError::SubmissionInFlight);
    assert!(button.is_disabled());
    assert!(view.banners().is_empty());

    tx.send(success()).unwrap();
    pool.run_until_stalled();

    assert_eq!(form.state(), SubmissionState::Success);
    assert!(!button.is_disabled());
    assert_eq!(button.label(), LABEL);
    assert_eq!(view.banners().len(), 1);
}

#[test]
fn test_abandoned_submission_releases_button() {
    let (_scheduler, view, form) = setup();
    let form = Rc::new(form);
    let button = Button::new();
    let (_tx, rx) = oneshot::channel();

    let mut pool = LocalPool::new();
    {
        let form = form.clone();
        let button = button.clone();
        let relay = PendingRelay {
            rx: RefCell::new(Some(rx)),
        };
        pool.spawner()
            .spawn_local(async move {
                let _ = form.submit(button, &relay).await;
            })
            .unwrap();
    }
    pool.run_until_stalled();
    assert!(button.is_disabled());

    // Dropping the pool drops the in-flight future
    drop(pool);

    assert!(!button.is_disabled());
    assert_eq!(button.label(), LABEL);
    assert_eq!(form.state(), SubmissionState::Idle);
    assert!(view.banners().is_empty());
}
