use crate::animation::tween::Lerp;

/// Visual transform state of the page content container.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContentPose {
    pub scale: f64,
    pub opacity: f64,
    /// Rotation about the vertical axis, in degrees.
    pub rotate_y_deg: f64,
    pub translate_y_px: f64,
}

impl ContentPose {
    /// Full scale, fully opaque, untransformed.
    pub const RESTING: Self = Self {
        scale: 1.0,
        opacity: 1.0,
        rotate_y_deg: 0.0,
        translate_y_px: 0.0,
    };

    pub fn is_resting(&self) -> bool {
        *self == Self::RESTING
    }

    pub fn is_finite(&self) -> bool {
        self.scale.is_finite()
            && self.opacity.is_finite()
            && self.rotate_y_deg.is_finite()
            && self.translate_y_px.is_finite()
    }

    /// CSS `transform` value for this pose.
    pub fn to_css_transform(&self) -> String {
        format!(
            "translateY({}px) scale({}) rotateY({}deg)",
            self.translate_y_px, self.scale, self.rotate_y_deg
        )
    }
}

impl Default for ContentPose {
    fn default() -> Self {
        Self::RESTING
    }
}

impl Lerp for ContentPose {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            scale: <f64 as Lerp>::lerp(&a.scale, &b.scale, t),
            opacity: <f64 as Lerp>::lerp(&a.opacity, &b.opacity, t).clamp(0.0, 1.0),
            rotate_y_deg: <f64 as Lerp>::lerp(&a.rotate_y_deg, &b.rotate_y_deg, t),
            translate_y_px: <f64 as Lerp>::lerp(&a.translate_y_px, &b.translate_y_px, t),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/pose.rs"]
mod tests;
