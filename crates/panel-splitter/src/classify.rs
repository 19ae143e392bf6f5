//! Row classification into blank, dark, or content.

use crate::options::Thresholds;

/// Classification of a single horizontal pixel row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowClass {
    /// Every pixel is strictly above the light threshold.
    Blank,
    /// Every pixel is strictly below the dark threshold.
    Dark,
    /// Anything else.
    Content,
}

impl RowClass {
    /// Blank and dark rows are both candidate split points.
    pub fn is_dead(self) -> bool {
        !matches!(self, RowClass::Content)
    }
}

/// Classify a row of grayscale intensities.
pub fn classify_row(row: &[u8], thresholds: Thresholds) -> RowClass {
    if row.iter().all(|&p| p > thresholds.light) {
        RowClass::Blank
    } else if row.iter().all(|&p| p < thresholds.dark) {
        RowClass::Dark
    } else {
        RowClass::Content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: Thresholds = Thresholds::new(240, 15);

    #[test]
    fn test_all_light_row_is_blank() {
        assert_eq!(classify_row(&[241, 255, 250], T), RowClass::Blank);
    }

    #[test]
    fn test_light_threshold_is_strict() {
        // 240 is not strictly above 240
        assert_eq!(classify_row(&[255, 240, 255], T), RowClass::Content);
    }

    #[test]
    fn test_all_dark_row_is_dark() {
        assert_eq!(classify_row(&[0, 14, 3], T), RowClass::Dark);
    }

    #[test]
    fn test_dark_threshold_is_strict() {
        assert_eq!(classify_row(&[0, 15, 0], T), RowClass::Content);
    }

    #[test]
    fn test_mixed_black_and_white_is_content() {
        assert_eq!(classify_row(&[0, 255], T), RowClass::Content);
    }

    #[test]
    fn test_is_dead() {
        assert!(RowClass::Blank.is_dead());
        assert!(RowClass::Dark.is_dead());
        assert!(!RowClass::Content.is_dead());
    }
}
