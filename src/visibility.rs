use crate::constants::{VISIBILITY_ROOT_MARGIN, VISIBILITY_THRESHOLD};

/// Decides whether a section is visible enough to show its slide indicators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorVisibility {
    threshold: f32,
    root_margin: f32,
    visible: bool,
}

impl Default for IndicatorVisibility {
    fn default() -> Self {
        Self::new(VISIBILITY_THRESHOLD, VISIBILITY_ROOT_MARGIN)
    }
}

impl IndicatorVisibility {
    /// `threshold` is the visible fraction of the section required,
    /// `root_margin` the fraction of the viewport cut off at top and bottom.
    pub fn new(threshold: f32, root_margin: f32) -> Self {
        Self {
            threshold,
            root_margin,
            visible: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Fraction of the section inside the shrunk viewport, in `[0, 1]`.
    pub fn ratio(
        &self,
        section_top: f32,
        section_height: f32,
        scroll_y: f32,
        viewport_height: f32,
    ) -> f32 {
        if section_height <= 0.0 {
            return 0.0;
        }
        let margin = viewport_height * self.root_margin;
        let root_top = scroll_y + margin;
        let root_bottom = scroll_y + viewport_height - margin;
        let overlap = root_bottom.min(section_top + section_height) - root_top.max(section_top);
        (overlap.max(0.0) / section_height).min(1.0)
    }

    /// Recomputes the flag for the current geometry and returns it.
    pub fn observe(
        &mut self,
        section_top: f32,
        section_height: f32,
        scroll_y: f32,
        viewport_height: f32,
    ) -> bool {
        let ratio = self.ratio(section_top, section_height, scroll_y, viewport_height);
        self.visible = ratio > 0.0 && ratio >= self.threshold;
        self.visible
    }
}
