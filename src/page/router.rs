//! Routing of per-review action links.
//!
//! Every action link inside a review carries a declared tag. The router
//! maps the tag to the flow that handles it. It owns no state and performs
//! no I/O.

use std::str::FromStr;

/// The review actions a link can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionTag {
    /// Open the edit overlay.
    Edit,
    /// Open the flag overlay.
    Report,
    /// Delete the review.
    Delete,
}

impl ActionTag {
    /// Returns the tag as declared in markup.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Edit => "edit",
            Self::Report => "report",
            Self::Delete => "delete",
        }
    }
}

impl FromStr for ActionTag {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "edit" => Ok(Self::Edit),
            "report" => Ok(Self::Report),
            "delete" => Ok(Self::Delete),
            _ => Err(()),
        }
    }
}

/// What the triggering event should do after routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventDisposition {
    /// Suppress the link's default navigation.
    pub prevent_default: bool,
    /// Stop the event reaching enclosing handlers.
    pub stop_propagation: bool,
}

impl EventDisposition {
    /// Leave the event alone.
    pub const PASS_THROUGH: Self = Self {
        prevent_default: false,
        stop_propagation: false,
    };

    /// The event was consumed by the controller.
    pub const CONSUMED: Self = Self {
        prevent_default: true,
        stop_propagation: true,
    };
}

/// Result of routing one action link click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    /// The flow to run, or `None` for an unrecognised tag.
    pub action: Option<ActionTag>,
    /// How the triggering event should be treated.
    pub disposition: EventDisposition,
}

/// Maps a link's declared tag to an action.
///
/// A link without a tag is not a review action at all and its event passes
/// through. A link with a tag is always consumed, even when the tag is not
/// recognised; unrecognised tags then do nothing.
#[must_use]
pub fn route(tag: Option<&str>) -> Route {
    let Some(raw) = tag.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Route {
            action: None,
            disposition: EventDisposition::PASS_THROUGH,
        };
    };

    let action = raw.parse::<ActionTag>().ok();
    if action.is_none() {
        tracing::debug!("ignoring unrecognised review action tag '{raw}'");
    }

    Route {
        action,
        disposition: EventDisposition::CONSUMED,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Some("edit"), Some(ActionTag::Edit))]
    #[case(Some("report"), Some(ActionTag::Report))]
    #[case(Some("delete"), Some(ActionTag::Delete))]
    #[case(Some("share"), None)]
    fn tagged_links_are_consumed(#[case] tag: Option<&str>, #[case] expected: Option<ActionTag>) {
        let routed = route(tag);

        assert_eq!(routed.action, expected);
        assert_eq!(routed.disposition, EventDisposition::CONSUMED);
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("   "))]
    fn untagged_links_pass_through(#[case] tag: Option<&str>) {
        let routed = route(tag);

        assert_eq!(routed.action, None);
        assert_eq!(routed.disposition, EventDisposition::PASS_THROUGH);
    }

    #[test]
    fn tags_round_trip_through_markup_names() {
        for tag in [ActionTag::Edit, ActionTag::Report, ActionTag::Delete] {
            assert_eq!(tag.as_str().parse::<ActionTag>(), Ok(tag));
        }
    }
}
