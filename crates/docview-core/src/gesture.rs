//! Vertical drag-to-dismiss gesture.

/// An in-progress vertical drag, started from the modal's handle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragGesture {
    origin_y: f64,
    offset_y: f64,
}

/// What a released drag does to the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// Released past the threshold: close the modal.
    Dismiss,
    /// Released short of the threshold: return to rest.
    SnapBack,
}

impl DragGesture {
    /// Start tracking at the pointer-down position.
    pub fn begin(pointer_y: f64) -> Self {
        Self {
            origin_y: pointer_y,
            offset_y: 0.0,
        }
    }

    /// Record a pointer move.
    pub fn update(&mut self, pointer_y: f64) {
        self.offset_y = pointer_y - self.origin_y;
    }

    /// Raw pointer displacement since the drag began; positive is downward.
    pub fn offset(&self) -> f64 {
        self.offset_y
    }

    /// Displacement the modal is drawn at, constrained to `[0, max]`.
    pub fn visual_offset(&self, max: f64) -> f64 {
        self.offset_y.clamp(0.0, max.max(0.0))
    }
}

impl DragOutcome {
    /// Decide a release. Only offsets strictly past `threshold` dismiss.
    pub fn for_release(offset_y: f64, threshold: f64) -> Self {
        if offset_y > threshold {
            Self::Dismiss
        } else {
            Self::SnapBack
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_tracks_pointer() {
        let mut drag = DragGesture::begin(40.0);
        assert_eq!(drag.offset(), 0.0);
        drag.update(190.0);
        assert_eq!(drag.offset(), 150.0);
        drag.update(10.0);
        assert_eq!(drag.offset(), -30.0);
    }

    #[test]
    fn test_visual_offset_is_constrained() {
        let mut drag = DragGesture::begin(0.0);
        drag.update(250.0);
        assert_eq!(drag.visual_offset(100.0), 100.0);
        drag.update(-20.0);
        assert_eq!(drag.visual_offset(100.0), 0.0);
        drag.update(42.0);
        assert_eq!(drag.visual_offset(100.0), 42.0);
    }

    #[test]
    fn test_release_threshold_is_exclusive() {
        assert_eq!(DragOutcome::for_release(100.0, 100.0), DragOutcome::SnapBack);
        assert_eq!(DragOutcome::for_release(100.5, 100.0), DragOutcome::Dismiss);
        assert_eq!(DragOutcome::for_release(-300.0, 100.0), DragOutcome::SnapBack);
    }
}
