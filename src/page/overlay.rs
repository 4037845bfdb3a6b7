//! Exclusive overlay bookkeeping.
//!
//! [`OverlayManager`] is the only writer of [`OverlayState`]. Showing an
//! overlay while another is shown switches to the new one; overlays never
//! stack. Hiding keeps the last rendered content around until the next show.

use crate::reviews::{FlagReason, ReviewId};

/// The kinds of modal overlay the listing uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    /// The "report this review" menu.
    Flag,
    /// The inline edit form.
    Edit,
}

/// The overlay currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveOverlay {
    /// Which overlay is shown.
    pub kind: OverlayKind,
    /// Review the overlay acts on.
    pub target: ReviewId,
    /// Reason picked in the flag menu, once chosen.
    pub reason: Option<FlagReason>,
}

/// Whether an overlay is shown, and which.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayState {
    /// No overlay is shown.
    #[default]
    Hidden,
    /// Exactly one overlay is shown.
    Shown(ActiveOverlay),
}

/// Owner of the page's single overlay slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlayManager {
    state: OverlayState,
    content: Option<String>,
}

impl OverlayManager {
    /// Creates a manager with nothing shown.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current overlay state.
    #[must_use]
    pub const fn state(&self) -> OverlayState {
        self.state
    }

    /// Returns the overlay on screen, if any.
    #[must_use]
    pub const fn active(&self) -> Option<ActiveOverlay> {
        match self.state {
            OverlayState::Hidden => None,
            OverlayState::Shown(active) => Some(active),
        }
    }

    /// Returns the kind of the overlay on screen, if any.
    #[must_use]
    pub const fn active_kind(&self) -> Option<OverlayKind> {
        match self.state {
            OverlayState::Hidden => None,
            OverlayState::Shown(active) => Some(active.kind),
        }
    }

    /// Returns true when an overlay of `kind` is on screen.
    #[must_use]
    pub fn is_showing(&self, kind: OverlayKind) -> bool {
        self.active_kind() == Some(kind)
    }

    /// Shows an overlay for `target`, hiding whatever was shown before.
    ///
    /// Returns the overlay that was displaced, so its owner can drop any
    /// state tied to it.
    pub fn show(&mut self, kind: OverlayKind, target: ReviewId) -> Option<ActiveOverlay> {
        let displaced = self.hide();
        self.state = OverlayState::Shown(ActiveOverlay {
            kind,
            target,
            reason: None,
        });
        displaced
    }

    /// Hides the current overlay, returning it. Hiding twice is harmless.
    ///
    /// Rendered content is retained until the next [`Self::set_content`].
    pub const fn hide(&mut self) -> Option<ActiveOverlay> {
        let previous = self.active();
        self.state = OverlayState::Hidden;
        previous
    }

    /// Records the reason chosen in the flag overlay.
    ///
    /// Ignored unless the flag overlay is shown.
    pub const fn select_reason(&mut self, reason: FlagReason) {
        if let OverlayState::Shown(ref mut active) = self.state
            && matches!(active.kind, OverlayKind::Flag)
        {
            active.reason = Some(reason);
        }
    }

    /// Replaces the rendered overlay markup.
    pub fn set_content(&mut self, content: String) {
        self.content = Some(content);
    }

    /// Returns the last rendered overlay markup.
    #[must_use]
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }
}
