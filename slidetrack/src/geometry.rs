use crate::SlidePosition;

fn clamp_value(value: f64, min: f64, max: f64) -> f64 {
    // max/min chain instead of f64::clamp: the upper bound may be infinite or
    // NaN (zero-sized container), and f64::clamp panics on NaN bounds.
    value.max(min).min(max)
}

/// Inputs for a [`Geometry`] snapshot.
///
/// Collaborators supply these fresh on every resize or option change; the
/// derived values are recomputed together and replace the prior snapshot
/// wholesale. There is no partial update.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeometryInput {
    /// Container size along the scroll axis, in pixels.
    pub container_size: f64,
    pub number_of_slides: usize,
    /// Slides visible at once. May be fractional (e.g. `2.5` shows half of a
    /// third slide).
    pub slides_per_view: f64,
    /// Space between slides, in pixels.
    pub spacing: f64,
    pub is_loop: bool,
    pub is_rtl: bool,
    pub is_centered: bool,
}

/// The pure geometry calculator for a slide track.
///
/// A `Geometry` is an immutable snapshot: every derived value is computed once
/// in [`Geometry::new`] and never mutated. All position/index math is a pure
/// function of this snapshot.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Geometry {
    number_of_slides: usize,
    slides_per_view: f64,
    spacing: f64,
    is_loop: bool,
    is_rtl: bool,
    is_centered: bool,

    /// Container size plus (clamped) spacing; the unit of one track-width.
    width_or_height: f64,
    size_per_slide: f64,
    spacing_per_slide: f64,
    visible_spacing: f64,
    /// Centering offset in track-widths (`0` when edge-aligned).
    origin: f64,
    /// The position at which track progress wraps to `1`.
    max_position: f64,
    /// Usable scroll extent for non-loop boundary checks.
    track_length: f64,
}

impl Geometry {
    pub fn new(input: GeometryInput) -> Self {
        let GeometryInput {
            container_size,
            number_of_slides,
            slides_per_view,
            spacing,
            is_loop,
            is_rtl,
            is_centered,
        } = input;
        let n = number_of_slides as f64;

        let max_slides_per_view = if is_loop { n - 1.0 } else { n }.max(1.0);
        let slides_per_view = clamp_value(slides_per_view, 1.0, max_slides_per_view);

        let clamped_spacing = clamp_value(
            spacing,
            0.0,
            container_size / (slides_per_view - 1.0) - 1.0,
        );
        let width_or_height = container_size + clamped_spacing;

        let size_per_slide = width_or_height / slides_per_view;
        let spacing_per_slide = clamped_spacing / slides_per_view;
        let visible_spacing = spacing_per_slide * (slides_per_view - 1.0);

        let origin = if is_centered {
            (width_or_height / 2.0 - size_per_slide / 2.0) / width_or_height
        } else {
            0.0
        };

        let max_position = width_or_height * n / slides_per_view;
        let edge_slides = if is_centered { 1.0 } else { slides_per_view };
        let track_length = width_or_height * (n - edge_slides) / slides_per_view;

        Self {
            number_of_slides,
            slides_per_view,
            spacing: clamped_spacing,
            is_loop,
            is_rtl,
            is_centered,
            width_or_height,
            size_per_slide,
            spacing_per_slide,
            visible_spacing,
            origin,
            max_position,
            track_length,
        }
    }

    pub fn number_of_slides(&self) -> usize {
        self.number_of_slides
    }

    pub fn slides_per_view(&self) -> f64 {
        self.slides_per_view
    }

    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    pub fn is_loop(&self) -> bool {
        self.is_loop
    }

    pub fn is_rtl(&self) -> bool {
        self.is_rtl
    }

    pub fn is_centered(&self) -> bool {
        self.is_centered
    }

    pub fn width_or_height(&self) -> f64 {
        self.width_or_height
    }

    pub fn size_per_slide(&self) -> f64 {
        self.size_per_slide
    }

    pub fn max_position(&self) -> f64 {
        self.max_position
    }

    pub fn track_length(&self) -> f64 {
        self.track_length
    }

    /// The fractional slide index a position corresponds to.
    ///
    /// Unrounded; used for direction-aware rounding in free-snap.
    pub fn calculate_index_trend(&self, position: f64) -> f64 {
        position / self.size_per_slide
    }

    /// The discrete slide index nearest to `position`.
    pub fn calculate_index(&self, position: f64) -> i64 {
        self.calculate_index_trend(position).round() as i64
    }

    /// The resting position of a slide index.
    ///
    /// Non-loop indexes are clamped into the valid resting range; loop indexes
    /// pass through unchanged (they are modular). The clamp upper bound is
    /// evaluated in `f64` because `slides_per_view` may be fractional.
    pub fn calculate_index_position(&self, idx: i64) -> f64 {
        self.size_per_slide * self.clamp_index(idx)
    }

    fn clamp_index(&self, idx: i64) -> f64 {
        if self.is_loop {
            return idx as f64;
        }
        let edge = if self.is_centered {
            0.0
        } else {
            self.slides_per_view - 1.0
        };
        clamp_value(idx as f64, 0.0, self.number_of_slides as f64 - 1.0 - edge)
    }

    /// Computes per-slide visual placements for a given track progress.
    ///
    /// `distance` is the slide's offset from the viewport origin in
    /// track-widths; in loop mode slides that drift outside the visible trend
    /// range wrap by `number_of_slides / slides_per_view`. `portion` is how
    /// much of the slide is currently visible.
    pub fn calculate_slide_positions(&self, progress: f64) -> Vec<SlidePosition> {
        let n = self.number_of_slides as f64;
        let spv = self.slides_per_view;
        let normalized_progress = if progress < 0.0 && self.is_loop {
            progress + 1.0
        } else {
            progress
        };

        let mut positions = Vec::with_capacity(self.number_of_slides);
        for idx in 0..self.number_of_slides {
            let mut distance =
                ((1.0 / n) * idx as f64 - normalized_progress) * n / spv + self.origin;
            if self.is_loop {
                if distance > (n - 1.0) / spv {
                    distance -= n / spv;
                } else if distance < -(n / spv) + 1.0 {
                    distance += n / spv;
                }
            }

            let slide_factor = 1.0 / spv;
            let left = distance + slide_factor;
            let portion = if left < slide_factor {
                left / slide_factor
            } else if left > 1.0 {
                1.0 - (left - 1.0) * spv
            } else {
                1.0
            };

            positions.push(SlidePosition {
                portion: clamp_value(portion, 0.0, 1.0),
                distance: if self.is_rtl {
                    -distance + 1.0 - slide_factor
                } else {
                    distance
                },
            });
        }
        positions
    }

    /// Converts a slide's normalized distance into an absolute pixel offset.
    ///
    /// The index-proportional spacing term keeps slides contiguous despite the
    /// configured spacing.
    pub fn get_slide_position(&self, idx: usize, position: SlidePosition) -> f64 {
        let absolute_distance = position.distance * self.width_or_height;
        absolute_distance
            - idx as f64 * (self.size_per_slide - self.spacing_per_slide - self.visible_spacing)
    }
}
