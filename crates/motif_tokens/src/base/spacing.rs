//! Base spacing tokens
//!
//! A 4px step scale plus layout widths and per-component ramps.

use serde::Serialize;

/// One entry of the spacing scale: step index to CSS length
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ScaleStep {
    pub step: u8,
    pub value: &'static str,
}

impl ScaleStep {
    const fn new(step: u8, value: &'static str) -> Self {
        Self { step, value }
    }
}

pub const SCALE: [ScaleStep; 13] = [
    ScaleStep::new(0, "0"),
    ScaleStep::new(1, "4px"),
    ScaleStep::new(2, "8px"),
    ScaleStep::new(3, "12px"),
    ScaleStep::new(4, "16px"),
    ScaleStep::new(5, "20px"),
    ScaleStep::new(6, "24px"),
    ScaleStep::new(8, "32px"),
    ScaleStep::new(10, "40px"),
    ScaleStep::new(12, "48px"),
    ScaleStep::new(16, "64px"),
    ScaleStep::new(20, "80px"),
    ScaleStep::new(24, "96px"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct LayoutWidths {
    pub page: &'static str,
    pub container: &'static str,
    pub content: &'static str,
}

/// xs..xl ramp used for padding and gaps
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SizeRamp {
    pub xs: &'static str,
    pub sm: &'static str,
    pub md: &'static str,
    pub lg: &'static str,
    pub xl: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RadiusRamp {
    pub none: &'static str,
    pub sm: &'static str,
    pub md: &'static str,
    pub lg: &'static str,
    pub full: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ComponentSpacing {
    pub padding: SizeRamp,
    pub gap: SizeRamp,
    pub radius: RadiusRamp,
}

/// The complete base spacing table
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BaseSpacing {
    pub scale: &'static [ScaleStep],
    pub layout: LayoutWidths,
    pub component: ComponentSpacing,
}

const RAMP: SizeRamp = SizeRamp {
    xs: "4px",
    sm: "8px",
    md: "16px",
    lg: "24px",
    xl: "32px",
};

impl BaseSpacing {
    pub const STANDARD: BaseSpacing = BaseSpacing {
        scale: &SCALE,
        layout: LayoutWidths {
            page: "1440px",
            container: "1280px",
            content: "768px",
        },
        component: ComponentSpacing {
            padding: RAMP,
            gap: RAMP,
            radius: RadiusRamp {
                none: "0",
                sm: "4px",
                md: "8px",
                lg: "16px",
                full: "9999px",
            },
        },
    };

    /// Value for a scale step, if the step exists
    pub fn step(&self, step: u8) -> Option<&'static str> {
        self.scale.iter().find(|s| s.step == step).map(|s| s.value)
    }
}

impl Default for BaseSpacing {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_lookup_skips_gaps() {
        let spacing = BaseSpacing::STANDARD;
        assert_eq!(spacing.step(0), Some("0"));
        assert_eq!(spacing.step(4), Some("16px"));
        assert_eq!(spacing.step(24), Some("96px"));
        assert_eq!(spacing.step(7), None);
    }

    #[test]
    fn scale_steps_ascend() {
        assert!(SCALE.windows(2).all(|w| w[0].step < w[1].step));
    }
}
