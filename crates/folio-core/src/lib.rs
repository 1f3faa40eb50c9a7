//! Folio Core Library
//!
//! Browser-independent behavior of a single-page portfolio site.
//!
//! ## Overview
//!
//! Each interactive piece of the page is a small state machine owned by its
//! component:
//!
//! - **theme**: light/dark preference with persistence
//! - **nav**: mobile menu open/closed and the three-bar icon
//! - **scroll**: active section and scroll-to-top visibility
//! - **typewriter**: the self-rescheduling typing loop
//! - **reveal**: one-way reveal-on-scroll bookkeeping
//! - **contact**: form submission, submit guard and banner slot
//! - **anchor**: in-page link targets
//!
//! Timed behavior goes through [`Scheduler`]; [`ManualScheduler`] runs it on
//! a virtual clock.
//!
//! ## Quick Start
//!
//! ```
//! use std::time::Duration;
//! use folio_core::{run_typewriter, ManualScheduler, Typewriter};
//!
//! let scheduler = ManualScheduler::new();
//! let typewriter = Typewriter::new(["Hi"]).unwrap();
//! run_typewriter(&scheduler, typewriter, Duration::from_millis(1500), |text| {
//!     println!("{text}");
//! });
//! scheduler.advance(Duration::from_secs(3));
//! ```

pub mod anchor;
pub mod config;
pub mod contact;
pub mod error;
pub mod nav;
pub mod reveal;
pub mod scheduler;
pub mod scroll;
pub mod theme;
pub mod typewriter;

// Re-exports
pub use anchor::anchor_target;
pub use config::{PageConfig, Selectors, CONFIG_ELEMENT_ID};
pub use contact::{
    BannerId, BannerKind, BannerTiming, ContactForm, ContactView, Relay, RelayResponse,
    SubmissionState, SubmitControl, SubmitGuard,
};
pub use error::{FolioError, FolioResult};
pub use nav::{BarStyle, MenuView, NavMenu};
pub use reveal::{IntersectionSample, RevealKind, RevealOptions, RevealState, RevealTracker};
pub use scheduler::{ManualScheduler, Scheduler, Task};
pub use scroll::{ScrollSnapshot, SectionOffset};
pub use theme::{KeyValueStore, MemoryStore, PreferenceStore, Theme};
pub use typewriter::{run_typewriter, TypePhase, TypeStep, Typewriter, TypewriterTiming};
