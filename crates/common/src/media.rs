//! Image load state with placeholder fallback.

/// Text shown in place of a preview image that failed to load.
pub const PREVIEW_UNAVAILABLE: &str = "Preview Unavailable";

/// Load state of one `<img>`. The image element is shown until it errors,
/// after which only the placeholder block is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageStatus {
    #[default]
    Pending,
    Loaded,
    Failed,
}

impl ImageStatus {
    pub fn on_load(&mut self) {
        if *self == ImageStatus::Pending {
            *self = ImageStatus::Loaded;
        }
    }

    /// Returns `true` the first time the fallback activates.
    pub fn on_error(&mut self) -> bool {
        let first = *self != ImageStatus::Failed;
        *self = ImageStatus::Failed;
        first
    }

    pub fn shows_image(self) -> bool {
        self != ImageStatus::Failed
    }

    pub fn shows_placeholder(self) -> bool {
        self == ImageStatus::Failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_broken_image_swaps_to_placeholder() {
        let mut status = ImageStatus::default();
        assert!(status.shows_image());
        assert!(!status.shows_placeholder());

        assert!(status.on_error());
        assert!(!status.shows_image());
        assert!(status.shows_placeholder());
        assert!(!status.on_error());
    }

    #[test]
    fn test_loaded_image_stays() {
        let mut status = ImageStatus::Pending;
        status.on_load();
        assert_eq!(status, ImageStatus::Loaded);
        assert!(status.shows_image());
        assert!(!status.shows_placeholder());
    }

    #[test]
    fn test_late_load_does_not_hide_placeholder() {
        let mut status = ImageStatus::Pending;
        status.on_error();
        status.on_load();
        assert!(status.shows_placeholder());
    }
}
