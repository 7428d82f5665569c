//! Snap geometry for the bottom sheet.
//!
//! Snap points are ratios of the viewport height. Index 0 is the peek state,
//! the last index is the fully open sheet.

/// Default snap points used by the home screen sheet.
pub const DEFAULT_SNAP_POINTS: [f64; 3] = [0.04, 0.35, 1.0];

/// Default initial snap index (the middle, "half open" state).
pub const DEFAULT_INITIAL_SNAP: usize = 1;

/// Errors produced when validating a snap configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SnapConfigError {
    #[error("snap points must not be empty")]
    Empty,
    #[error("snap point {index} has ratio {ratio}, expected a value in (0, 1]")]
    RatioOutOfRange { index: usize, ratio: f64 },
    #[error("snap point {index} is not greater than the previous one")]
    NotIncreasing { index: usize },
    #[error("initial snap {initial} is out of range for {len} snap points")]
    InitialOutOfRange { initial: usize, len: usize },
}

/// Validated snap configuration of one sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapConfig {
    snap_points: Vec<f64>,
    initial_snap: usize,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            snap_points: DEFAULT_SNAP_POINTS.to_vec(),
            initial_snap: DEFAULT_INITIAL_SNAP,
        }
    }
}

impl SnapConfig {
    /// Creates a configuration, rejecting empty, unordered or out-of-range points.
    pub fn new(snap_points: Vec<f64>, initial_snap: usize) -> Result<Self, SnapConfigError> {
        if snap_points.is_empty() {
            return Err(SnapConfigError::Empty);
        }

        for (index, &ratio) in snap_points.iter().enumerate() {
            if !(ratio > 0.0 && ratio <= 1.0) {
                return Err(SnapConfigError::RatioOutOfRange { index, ratio });
            }
            if index > 0 && ratio <= snap_points[index - 1] {
                return Err(SnapConfigError::NotIncreasing { index });
            }
        }

        if initial_snap >= snap_points.len() {
            return Err(SnapConfigError::InitialOutOfRange {
                initial: initial_snap,
                len: snap_points.len(),
            });
        }

        Ok(Self {
            snap_points,
            initial_snap,
        })
    }

    pub fn snap_points(&self) -> &[f64] {
        &self.snap_points
    }

    pub fn initial_snap(&self) -> usize {
        self.initial_snap
    }

    /// Highest valid snap index.
    pub fn last_index(&self) -> usize {
        self.snap_points.len() - 1
    }

    /// Clamps an arbitrary index into the valid range.
    pub fn clamp_index(&self, index: usize) -> usize {
        index.min(self.last_index())
    }

    /// Ratio of the given index, clamped to the valid range.
    pub fn ratio_at(&self, index: usize) -> f64 {
        self.snap_points[self.clamp_index(index)]
    }

    /// Index whose ratio equals `ratio`, if any.
    pub fn index_of_ratio(&self, ratio: f64) -> Option<usize> {
        self.snap_points
            .iter()
            .position(|&p| (p - ratio).abs() < f64::EPSILON)
    }
}

/// Sheet height in pixels for a snap ratio.
pub fn height_for_snap(ratio: f64, viewport_height_px: f64) -> f64 {
    ratio * viewport_height_px
}

/// Converts viewport-height units (0..=100) to pixels.
pub fn vh_to_px(vh: f64, viewport_height_px: f64) -> f64 {
    vh * viewport_height_px / 100.0
}

/// Converts pixels to viewport-height units (0..=100).
pub fn px_to_vh(px: f64, viewport_height_px: f64) -> f64 {
    if viewport_height_px <= 0.0 {
        return 0.0;
    }
    px * 100.0 / viewport_height_px
}

/// CSS height of the sheet for a snap ratio, e.g. `35vh`.
pub fn sheet_height_css(ratio: f64) -> String {
    format!("{}vh", ratio * 100.0)
}

/// Reads the `translateY(<n>px)` offset from an inline transform.
///
/// Returns 0 when the transform is empty or has no parsable vertical offset.
pub fn parse_translate_y(transform: &str) -> f64 {
    let Some(start) = transform.find("translateY(") else {
        return 0.0;
    };
    let rest = &transform[start + "translateY(".len()..];
    let Some(end) = rest.find(')') else {
        return 0.0;
    };

    rest[..end]
        .trim()
        .trim_end_matches("px")
        .trim()
        .parse::<f64>()
        .unwrap_or(0.0)
}

/// Inline transform for a vertical offset in pixels.
pub fn translate_y_css(offset_px: f64) -> String {
    format!("translateY({offset_px}px)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SnapConfig::default();
        assert_eq!(config.snap_points(), &[0.04, 0.35, 1.0]);
        assert_eq!(config.initial_snap(), 1);
        assert_eq!(config.last_index(), 2);
    }

    #[test]
    fn test_config_validation() {
        assert_eq!(SnapConfig::new(vec![], 0), Err(SnapConfigError::Empty));
        assert_eq!(
            SnapConfig::new(vec![0.5, 0.3], 0),
            Err(SnapConfigError::NotIncreasing { index: 1 })
        );
        assert_eq!(
            SnapConfig::new(vec![0.0, 0.3], 0),
            Err(SnapConfigError::RatioOutOfRange { index: 0, ratio: 0.0 })
        );
        assert_eq!(
            SnapConfig::new(vec![0.3, 1.2], 0),
            Err(SnapConfigError::RatioOutOfRange { index: 1, ratio: 1.2 })
        );
        assert_eq!(
            SnapConfig::new(vec![0.3, 1.0], 2),
            Err(SnapConfigError::InitialOutOfRange { initial: 2, len: 2 })
        );
        assert!(SnapConfig::new(vec![1.0], 0).is_ok());
    }

    #[test]
    fn test_index_lookup_and_clamp() {
        let config = SnapConfig::default();
        assert_eq!(config.index_of_ratio(0.04), Some(0));
        assert_eq!(config.index_of_ratio(1.0), Some(2));
        assert_eq!(config.index_of_ratio(0.5), None);
        assert_eq!(config.clamp_index(7), 2);
        assert!((config.ratio_at(9) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_geometry() {
        assert!((height_for_snap(0.35, 800.0) - 280.0).abs() < 1e-9);
        assert!((vh_to_px(50.0, 800.0) - 400.0).abs() < 1e-9);
        assert!((px_to_vh(400.0, 800.0) - 50.0).abs() < 1e-9);
        assert!(px_to_vh(10.0, 0.0).abs() < f64::EPSILON);
        assert_eq!(sheet_height_css(1.0), "100vh");
    }

    #[test]
    fn test_parse_translate_y() {
        assert!(parse_translate_y("").abs() < f64::EPSILON);
        assert!((parse_translate_y("translateY(120px)") - 120.0).abs() < 1e-9);
        assert!((parse_translate_y("translateY(12.5px)") - 12.5).abs() < 1e-9);
        assert!(parse_translate_y("translateY(0)").abs() < f64::EPSILON);
        assert!(parse_translate_y("translateY(abc").abs() < f64::EPSILON);
        assert_eq!(translate_y_css(42.0), "translateY(42px)");
    }
}
