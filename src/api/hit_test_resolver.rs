use ordered_float::OrderedFloat;
use smallvec::SmallVec;

use crate::interaction::DragTarget;

use super::TimelineSlider;

impl TimelineSlider {
    /// Resolves the drag target under `pointer_x`.
    ///
    /// Handles win over the band; when both grab zones overlap the nearer
    /// handle wins, the start handle on an exact tie.
    #[must_use]
    pub fn hit_test(&self, pointer_x: f64) -> Option<DragTarget> {
        if !pointer_x.is_finite() || !self.model.geometry.is_laid_out() {
            return None;
        }

        let handles = self.model.handles;
        let half_width = self.config.handle_hit_half_width_px;
        let mut candidates: SmallVec<[(OrderedFloat<f64>, DragTarget); 2]> = SmallVec::new();
        for (position, target) in [
            (handles.start_px, DragTarget::StartHandle),
            (handles.end_px, DragTarget::EndHandle),
        ] {
            let distance = (pointer_x - position).abs();
            if distance <= half_width {
                candidates.push((OrderedFloat(distance), target));
            }
        }

        if let Some((_, target)) = candidates.into_iter().min_by_key(|item| item.0) {
            return Some(target);
        }

        (pointer_x > handles.start_px && pointer_x < handles.end_px).then_some(DragTarget::Band)
    }
}
