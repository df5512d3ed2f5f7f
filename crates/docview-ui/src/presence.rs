//! Mount/unmount tracking for the modal's exit transition.

use docview_core::Presentation;

/// Whether the modal is in the DOM and whether it is on its way out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Presence {
    #[default]
    Hidden,
    Shown,
    /// Closed but kept mounted until the slide-out finishes.
    Leaving,
}

impl Presence {
    pub fn is_mounted(self) -> bool {
        self != Self::Hidden
    }

    pub fn is_leaving(self) -> bool {
        self == Self::Leaving
    }

    /// Follow a change of the open flag.
    pub fn follow(self, open: bool, presentation: Presentation) -> Self {
        match (open, self, presentation) {
            (true, _, _) => Self::Shown,
            (false, Self::Hidden, _) => Self::Hidden,
            (false, _, Presentation::Slide { .. }) => Self::Leaving,
            (false, _, Presentation::Instant) => Self::Hidden,
        }
    }

    /// The exit transition elapsed.
    pub fn finish_leaving(self) -> Self {
        match self {
            Self::Leaving => Self::Hidden,
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    const SLIDE: Presentation = Presentation::Slide {
        duration: Duration::from_millis(500),
    };

    #[test]
    fn test_slide_keeps_modal_mounted_while_leaving() {
        let shown = Presence::Hidden.follow(true, SLIDE);
        assert_eq!(shown, Presence::Shown);

        let leaving = shown.follow(false, SLIDE);
        assert!(leaving.is_mounted());
        assert!(leaving.is_leaving());
        assert_eq!(leaving.finish_leaving(), Presence::Hidden);
    }

    #[test]
    fn test_instant_unmounts_immediately() {
        assert_eq!(
            Presence::Shown.follow(false, Presentation::Instant),
            Presence::Hidden
        );
    }

    #[test]
    fn test_reopen_while_leaving() {
        let reopened = Presence::Leaving.follow(true, SLIDE);
        assert_eq!(reopened, Presence::Shown);
        assert_eq!(reopened.finish_leaving(), Presence::Shown);
    }

    #[test]
    fn test_closed_stays_hidden() {
        assert_eq!(Presence::Hidden.follow(false, SLIDE), Presence::Hidden);
    }
}
