//! Mobile navigation menu and its three-bar toggle icon.

/// Inline style of one bar in the menu icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarStyle {
    pub transform: &'static str,
    pub opacity: &'static str,
}

impl BarStyle {
    pub const NEUTRAL: BarStyle = BarStyle {
        transform: "none",
        opacity: "1",
    };

    pub fn is_neutral(&self) -> bool {
        *self == Self::NEUTRAL
    }
}

/// Bars when the menu is closed
pub const NEUTRAL_BARS: [BarStyle; 3] = [BarStyle::NEUTRAL; 3];

/// Bars when the menu is open: the outer bars cross into an X and the
/// middle one fades out.
pub const OPEN_BARS: [BarStyle; 3] = [
    BarStyle {
        transform: "rotate(45deg) translate(5px, 5px)",
        opacity: "1",
    },
    BarStyle {
        transform: "none",
        opacity: "0",
    },
    BarStyle {
        transform: "rotate(-45deg) translate(7px, -6px)",
        opacity: "1",
    },
];

/// Class put on the links container while the menu is open
pub const MENU_OPEN_CLASS: &str = "active";

/// What the DOM should look like after a menu event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuView {
    pub links_active: bool,
    pub bars: [BarStyle; 3],
}

impl MenuView {
    fn for_state(open: bool) -> Self {
        Self {
            links_active: open,
            bars: if open { OPEN_BARS } else { NEUTRAL_BARS },
        }
    }
}

/// Open/closed state of the mobile menu
#[derive(Debug, Default, Clone)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Menu toggle clicked
    pub fn toggle(&mut self) -> MenuView {
        self.open = !self.open;
        MenuView::for_state(self.open)
    }

    /// A nav link was clicked. Always closes, whatever the current state.
    pub fn close(&mut self) -> MenuView {
        self.open = false;
        MenuView::for_state(false)
    }

    pub fn view(&self) -> MenuView {
        MenuView::for_state(self.open)
    }
}
