//! Page components.
//!
//! Each component binds one piece of behavior to the markup and stays
//! attached for the lifetime of the page. `attach` fails only when the markup
//! the component needs is missing; the other components are unaffected.

pub mod anchor_scroll;
pub mod contact_form;
pub mod mobile_nav;
pub mod page_chrome;
pub mod reveal;
pub mod scroll_tracker;
pub mod theme_toggle;
pub mod typewriter;
