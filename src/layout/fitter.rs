/*
 *  layout/fitter.rs
 *
 *  InkDash - the day at a glance
 *  (c) 2020-26 Stuart Hunter
 *
 *  Truncate labels with an ellipsis so they fit a pixel width
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *  Public License.
 *
 */

use crate::layout::error::LayoutError;

/// Default truncation marker. The bundled mono fonts are ASCII only, so no `…`.
pub const DEFAULT_ELLIPSIS: &str = "...";

/// Something that can tell how wide a string renders under the active font.
pub trait TextMeasure {
    fn measure(&self, text: &str) -> Result<f32, LayoutError>;
}

impl<T: TextMeasure + ?Sized> TextMeasure for &T {
    fn measure(&self, text: &str) -> Result<f32, LayoutError> {
        (**self).measure(text)
    }
}

/// Every character advances the pen by the same amount.
///
/// Matches a monospace font without loading one, which keeps layout tests
/// deterministic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedAdvance {
    pub advance: f32,
}

impl FixedAdvance {
    pub fn new(advance: f32) -> Self {
        Self { advance }
    }
}

impl TextMeasure for FixedAdvance {
    fn measure(&self, text: &str) -> Result<f32, LayoutError> {
        Ok(text.chars().count() as f32 * self.advance)
    }
}

/// Fits labels into a maximum width by cutting characters off the end.
#[derive(Debug, Clone)]
pub struct TextFitter<M: TextMeasure> {
    measurer: M,
    ellipsis: String,
}

impl<M: TextMeasure> TextFitter<M> {
    pub fn new(measurer: M) -> Self {
        Self::with_ellipsis(measurer, DEFAULT_ELLIPSIS)
    }

    pub fn with_ellipsis(measurer: M, ellipsis: impl Into<String>) -> Self {
        Self { measurer, ellipsis: ellipsis.into() }
    }

    pub fn measurer(&self) -> &M {
        &self.measurer
    }

    pub fn ellipsis(&self) -> &str {
        &self.ellipsis
    }

    /// Longest `prefix + ellipsis` no wider than `max_width`, or `text`
    /// itself when it already fits. The prefix may shrink to nothing, leaving
    /// the bare ellipsis; empty only when the ellipsis alone is too wide.
    ///
    /// Candidates are tried from longest to shortest. Prefixes are cut on
    /// `char` boundaries.
    pub fn fit(&self, text: &str, max_width: f32) -> Result<String, LayoutError> {
        if self.measurer.measure(text)? <= max_width {
            return Ok(text.to_string());
        }

        let cuts: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
        for &cut in cuts.iter().rev() {
            let candidate = format!("{}{}", &text[..cut], self.ellipsis);
            if self.measurer.measure(&candidate)? <= max_width {
                return Ok(candidate);
            }
        }

        Ok(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Broken;

    impl TextMeasure for Broken {
        fn measure(&self, _text: &str) -> Result<f32, LayoutError> {
            Err(LayoutError::Measure("no font loaded".into()))
        }
    }

    fn fitter() -> TextFitter<FixedAdvance> {
        TextFitter::new(FixedAdvance::new(10.0))
    }

    #[test]
    fn test_fitting_text_is_untouched() {
        assert_eq!(fitter().fit("Standup", 70.0).unwrap(), "Standup");
        assert_eq!(fitter().fit("", 0.0).unwrap(), "");
    }

    #[test]
    fn test_truncates_to_ten_characters() {
        let f = fitter();
        let out = f.fit("Quarterly Planning Review Meeting", 100.0).unwrap();
        assert_eq!(out, "Quarter...");
        assert!(f.measurer().measure(&out).unwrap() <= 100.0);
    }

    #[test]
    fn test_fitted_text_is_stable() {
        let f = fitter();
        for width in [35.0, 60.0, 95.0, 140.0] {
            let once = f.fit("Quarterly Planning Review Meeting", width).unwrap();
            assert_eq!(f.fit(&once, width).unwrap(), once);
        }
    }

    #[test]
    fn test_output_never_exceeds_width() {
        let f = fitter();
        for width in 0..200 {
            let out = f.fit("Dentist appointment downtown", width as f32).unwrap();
            assert!(out.is_empty() || f.measurer().measure(&out).unwrap() <= width as f32);
        }
    }

    #[test]
    fn test_bare_ellipsis_when_no_character_fits() {
        assert_eq!(fitter().fit("Lunch", 30.0).unwrap(), "...");
        assert_eq!(fitter().fit("Lunch", 35.0).unwrap(), "...");
        assert_eq!(fitter().fit("Lunch", 39.0).unwrap(), "...");
        assert_eq!(fitter().fit("Lunch", 40.0).unwrap(), "L...");
    }

    #[test]
    fn test_too_narrow_for_ellipsis_gives_empty() {
        assert_eq!(fitter().fit("Lunch", 29.0).unwrap(), "");
        assert_eq!(fitter().fit("Lunch", 0.0).unwrap(), "");
    }

    #[test]
    fn test_multibyte_prefixes() {
        let f = TextFitter::with_ellipsis(FixedAdvance::new(10.0), "…");
        assert_eq!(f.fit("Café crème", 50.0).unwrap(), "Café…");
    }

    #[test]
    fn test_measure_failure_propagates() {
        let f = TextFitter::new(Broken);
        assert!(matches!(f.fit("anything", 100.0), Err(LayoutError::Measure(_))));
    }
}
