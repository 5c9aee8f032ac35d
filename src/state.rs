//! Pure view-state core: viewport classification, scroll progress, reveal
//! tracking, and the modal dialog's state machine.
//!
//! Nothing in this module touches the DOM, so all of it runs and tests on
//! the host. The wasm layer feeds it raw inputs (widths, scroll offsets,
//! clicks) and acts on what comes back.

/// Widths at or below this are classified as mobile.
pub const MOBILE_MAX_WIDTH: f64 = 768.0;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ViewportClass {
    Mobile,
    Desktop,
}

impl ViewportClass {
    /// Pure function of the latest window width; recomputed on every
    /// resize event. Reclassifying an unchanged width is a no-op for the
    /// caller.
    pub fn classify(width: f64) -> Self {
        if width <= MOBILE_MAX_WIDTH {
            ViewportClass::Mobile
        } else {
            ViewportClass::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        self == ViewportClass::Mobile
    }
}

/// Scroll completion as a percentage in [0, 100]. A document no taller
/// than its viewport has nothing to complete and reads 0 rather than
/// dividing by zero.
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    let span = scroll_height - client_height;
    if span <= 0.0 {
        return 0.0;
    }
    (scroll_top / span).clamp(0.0, 1.0) * 100.0
}

/// One-shot reveal flags for the tracked elements. Each flag only ever
/// moves false -> true; there is no way back for the lifetime of the set.
#[derive(Debug, Default)]
pub struct RevealSet {
    flags: Vec<bool>,
}

impl RevealSet {
    pub fn new(len: usize) -> Self {
        Self {
            flags: vec![false; len],
        }
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Marks element `i` revealed. Returns true only on the firing call;
    /// repeat calls (and out-of-range indices) report false.
    pub fn reveal(&mut self, i: usize) -> bool {
        match self.flags.get_mut(i) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }

    /// The gated-off path: everything counts as revealed immediately.
    pub fn reveal_all(&mut self) {
        self.flags.fill(true);
    }

    pub fn is_revealed(&self, i: usize) -> bool {
        self.flags.get(i).copied().unwrap_or(false)
    }

    pub fn revealed_count(&self) -> usize {
        self.flags.iter().filter(|f| **f).count()
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open(&'static str),
}

/// What the caller owes the outside world after a transition. Scroll lock
/// and escape listener are acquired on `Opened` and released on `Closed`,
/// and only then, so every acquisition has exactly one matching release
/// even across rapid open/open/close sequences.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ModalTransition {
    /// Closed -> Open: acquire the scroll lock, install the escape listener.
    Opened,
    /// Open -> Open: swap content only; lock and listener stay as they are.
    Replaced,
    /// Open -> Closed: release the lock, remove the listener.
    Closed,
    /// Closed -> Closed.
    NoOp,
}

/// The modal dialog's state machine: Closed, or Open on a single project
/// key. Key validity is the controller's concern; the machine tracks
/// whatever key it is handed.
#[derive(Debug, Default)]
pub struct ModalMachine {
    state: ModalState,
}

impl ModalMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open(_))
    }

    pub fn open_key(&self) -> Option<&'static str> {
        match self.state {
            ModalState::Open(key) => Some(key),
            ModalState::Closed => None,
        }
    }

    pub fn open(&mut self, key: &'static str) -> ModalTransition {
        let transition = match self.state {
            ModalState::Closed => ModalTransition::Opened,
            ModalState::Open(_) => ModalTransition::Replaced,
        };
        self.state = ModalState::Open(key);
        transition
    }

    pub fn close(&mut self) -> ModalTransition {
        match self.state {
            ModalState::Open(_) => {
                self.state = ModalState::Closed;
                ModalTransition::Closed
            }
            ModalState::Closed => ModalTransition::NoOp,
        }
    }
}
