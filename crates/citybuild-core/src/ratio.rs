//! Shared sheet ratio broadcast to views behind the sheet.

/// Gap between the top edge of the sheet and the onboarding overlay.
pub const ONBOARDING_GAP_PX: u32 = 16;

/// Maximum extra scale applied to the city scene when the sheet is lowered.
const MAX_EXTRA_ZOOM: f64 = 0.5;

/// Errors raised when a shared context is read without its provider.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContextError {
    #[error("{0} must be used within its provider")]
    MissingProvider(&'static str),
}

/// How much of the screen the sheet occupies, and the zoom derived from it.
///
/// The zoom ratio is always `1 - current_snap_ratio`; there is no way to set it
/// on its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetRatio {
    current_snap_ratio: f64,
}

impl SheetRatio {
    pub fn new(current_snap_ratio: f64) -> Self {
        Self { current_snap_ratio }
    }

    pub fn current_snap_ratio(&self) -> f64 {
        self.current_snap_ratio
    }

    /// Share of the screen left for the city area (0.0 at full sheet).
    pub fn map_zoom_ratio(&self) -> f64 {
        1.0 - self.current_snap_ratio
    }

    /// Scale factor for the city scene: 1.0 at full sheet, up to 1.5 when lowered.
    pub fn zoom_scale(&self) -> f64 {
        zoom_scale(self.map_zoom_ratio())
    }

    /// CSS `bottom` for an overlay that must sit just above the sheet.
    pub fn onboarding_bottom_css(&self) -> String {
        onboarding_bottom_css(self.current_snap_ratio)
    }
}

/// Scale factor derived from a map zoom ratio.
pub fn zoom_scale(map_zoom_ratio: f64) -> f64 {
    1.0 + map_zoom_ratio * MAX_EXTRA_ZOOM
}

/// CSS `bottom` placing an overlay above a sheet at `snap_ratio`.
pub fn onboarding_bottom_css(snap_ratio: f64) -> String {
    format!("calc({}vh + {}px)", snap_ratio * 100.0, ONBOARDING_GAP_PX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_tracks_snap_ratio() {
        for ratio in [0.04, 0.35, 1.0] {
            let state = SheetRatio::new(ratio);
            assert!((state.map_zoom_ratio() - (1.0 - ratio)).abs() < f64::EPSILON);
        }
        assert!(SheetRatio::new(1.0).map_zoom_ratio().abs() < f64::EPSILON);
    }

    #[test]
    fn test_zoom_scale() {
        assert!((SheetRatio::new(1.0).zoom_scale() - 1.0).abs() < f64::EPSILON);
        assert!((zoom_scale(1.0) - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_onboarding_sits_above_sheet() {
        assert_eq!(SheetRatio::new(1.0).onboarding_bottom_css(), "calc(100vh + 16px)");
        assert_eq!(onboarding_bottom_css(0.5), "calc(50vh + 16px)");
    }

    #[test]
    fn test_missing_provider_message() {
        let err = ContextError::MissingProvider("SheetContextProvider");
        assert_eq!(
            err.to_string(),
            "SheetContextProvider must be used within its provider"
        );
    }
}
