//! Contact form submission.
//!
//! A submission moves Idle -> Submitting -> Success | Error -> Idle. While it
//! is in flight the submit control is disabled and shows a loading label;
//! [`SubmitGuard`] puts the control back on every exit path. The outcome is
//! announced in a single banner slot: a new banner replaces the old one, and
//! each banner dismisses itself after its display window plus an exit
//! animation.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, FolioResult};
use crate::scheduler::Scheduler;

/// Form relay the fields are posted to
pub const RELAY_ENDPOINT: &str = "https://api.web3forms.com/submit";

/// Submit label while a request is outstanding
pub const LOADING_LABEL: &str = r#"<i class="fas fa-spinner fa-spin"></i> Sending..."#;

pub const SUCCESS_MESSAGE: &str =
    "Thank you! Your message has been sent successfully to my email.";

pub const ERROR_MESSAGE: &str =
    "Oops! Something went wrong. Please try again or contact me directly.";

/// Class shared by every banner element
pub const BANNER_CLASS: &str = "form-message";

/// Body returned by the relay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl RelayResponse {
    pub fn from_json(body: &str) -> FolioResult<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Turn a `success: false` body into an error
    pub fn into_result(self) -> FolioResult<Self> {
        if self.success {
            Ok(self)
        } else {
            Err(FolioError::Rejected(self.message))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

impl BannerKind {
    pub fn message(&self) -> &'static str {
        match self {
            BannerKind::Success => SUCCESS_MESSAGE,
            BannerKind::Error => ERROR_MESSAGE,
        }
    }

    /// Full class attribute, e.g. `form-message success`
    pub fn class_name(&self) -> String {
        let modifier = match self {
            BannerKind::Success => "success",
            BannerKind::Error => "error",
        };
        format!("{} {}", BANNER_CLASS, modifier)
    }

    pub fn background(&self) -> &'static str {
        match self {
            BannerKind::Success => "#10b981",
            BannerKind::Error => "#ef4444",
        }
    }

    /// Inline style for a freshly inserted banner
    pub fn inline_style(&self) -> String {
        format!(
            "padding: 1rem; margin-top: 1rem; border-radius: var(--radius-sm); \
             text-align: center; font-weight: 600; background: {}; color: white; \
             animation: slideIn 0.3s ease;",
            self.background()
        )
    }
}

/// Animation applied when a banner starts leaving
pub const BANNER_EXIT_ANIMATION: &str = "slideOut 0.3s ease";

/// How long a banner stays, and how long its exit animation runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BannerTiming {
    pub display_ms: u64,
    pub exit_ms: u64,
}

impl Default for BannerTiming {
    fn default() -> Self {
        Self {
            display_ms: 5000,
            exit_ms: 300,
        }
    }
}

/// Identifies one banner for the lifetime of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BannerId(pub u64);

/// The form's submit button
pub trait SubmitControl {
    fn label(&self) -> String;
    fn set_label(&self, label: &str);
    fn set_disabled(&self, disabled: bool);
}

/// Holds the submit control disabled with the loading label. Dropping the
/// guard re-enables it and restores the original label.
pub struct SubmitGuard<C: SubmitControl> {
    control: C,
    original: String,
}

impl<C: SubmitControl> SubmitGuard<C> {
    pub fn acquire(control: C) -> Self {
        let original = control.label();
        control.set_disabled(true);
        control.set_label(LOADING_LABEL);
        Self { control, original }
    }

    pub fn original_label(&self) -> &str {
        &self.original
    }
}

impl<C: SubmitControl> Drop for SubmitGuard<C> {
    fn drop(&mut self) {
        self.control.set_disabled(false);
        self.control.set_label(&self.original);
    }
}

/// Sends the form fields to the relay
#[allow(async_fn_in_trait)]
pub trait Relay {
    async fn send(&self) -> FolioResult<RelayResponse>;
}

/// Page-side effects of the contact controller
pub trait ContactView {
    /// Clear every form field
    fn reset_fields(&self);
    fn insert_banner(&self, id: BannerId, kind: BannerKind);
    fn start_banner_exit(&self, id: BannerId);
    fn remove_banner(&self, id: BannerId);
}

#[derive(Debug)]
struct FormState {
    state: SubmissionState,
    current_banner: Option<BannerId>,
    next_banner: u64,
}

/// Marks the form as submitting; returns it to idle if the submission is
/// abandoned before an outcome is recorded.
struct InFlight {
    shared: Rc<RefCell<FormState>>,
}

impl Drop for InFlight {
    fn drop(&mut self) {
        let mut form = self.shared.borrow_mut();
        if form.state == SubmissionState::Submitting {
            form.state = SubmissionState::Idle;
        }
    }
}

pub struct ContactForm<S, V> {
    scheduler: S,
    view: V,
    timing: BannerTiming,
    shared: Rc<RefCell<FormState>>,
}

impl<S, V> ContactForm<S, V>
where
    S: Scheduler,
    V: ContactView + Clone + 'static,
{
    pub fn new(scheduler: S, view: V, timing: BannerTiming) -> Self {
        Self {
            scheduler,
            view,
            timing,
            shared: Rc::new(RefCell::new(FormState {
                state: SubmissionState::Idle,
                current_banner: None,
                next_banner: 0,
            })),
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.shared.borrow().state
    }

    /// Banner currently occupying the slot, if any
    pub fn banner(&self) -> Option<BannerId> {
        self.shared.borrow().current_banner
    }

    /// Run one submission end to end and report which banner was shown.
    ///
    /// Fails only with [`FolioError::SubmissionInFlight`] when another
    /// submission is outstanding; relay failures become an error banner.
    pub async fn submit<C, R>(&self, control: C, relay: &R) -> FolioResult<BannerKind>
    where
        C: SubmitControl,
        R: Relay,
    {
        let _flight = self.begin()?;
        let _guard = SubmitGuard::acquire(control);

        let kind = match relay.send().await.and_then(RelayResponse::into_result) {
            Ok(_) => {
                tracing::info!("Contact form delivered");
                self.view.reset_fields();
                BannerKind::Success
            }
            Err(FolioError::Rejected(reason)) => {
                tracing::warn!(reason = ?reason, "Relay rejected contact form");
                BannerKind::Error
            }
            Err(e) => {
                tracing::error!("Form submission error: {}", e);
                BannerKind::Error
            }
        };

        self.shared.borrow_mut().state = match kind {
            BannerKind::Success => SubmissionState::Success,
            BannerKind::Error => SubmissionState::Error,
        };
        self.show_banner(kind);
        Ok(kind)
    }

    fn begin(&self) -> FolioResult<InFlight> {
        let mut form = self.shared.borrow_mut();
        if form.state == SubmissionState::Submitting {
            tracing::warn!("Ignoring contact form submit while a request is in flight");
            return Err(FolioError::SubmissionInFlight);
        }
        form.state = SubmissionState::Submitting;
        Ok(InFlight {
            shared: self.shared.clone(),
        })
    }

    /// Replace whatever banner is showing and schedule this one's dismissal.
    pub fn show_banner(&self, kind: BannerKind) -> BannerId {
        let (id, previous) = {
            let mut form = self.shared.borrow_mut();
            let id = BannerId(form.next_banner);
            form.next_banner += 1;
            (id, form.current_banner.replace(id))
        };

        if let Some(previous) = previous {
            self.view.remove_banner(previous);
        }
        self.view.insert_banner(id, kind);

        let shared = self.shared.clone();
        let view = self.view.clone();
        let scheduler = self.scheduler.clone();
        let exit = Duration::from_millis(self.timing.exit_ms);

        self.scheduler.schedule(
            Duration::from_millis(self.timing.display_ms),
            Box::new(move || {
                // Already replaced by a newer banner
                if shared.borrow().current_banner != Some(id) {
                    return;
                }
                view.start_banner_exit(id);
                scheduler.schedule(
                    exit,
                    Box::new(move || {
                        let cleared = {
                            let mut form = shared.borrow_mut();
                            if form.current_banner == Some(id) {
                                form.current_banner = None;
                                if form.state != SubmissionState::Submitting {
                                    form.state = SubmissionState::Idle;
                                }
                                true
                            } else {
                                false
                            }
                        };
                        if cleared {
                            view.remove_banner(id);
                        }
                    }),
                );
            }),
        );

        id
    }
}
