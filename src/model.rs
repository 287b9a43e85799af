//! Core data model for the zoom lens.
//! Plain values shared by the state machine, the surface resolver and the DOM glue.

/// Whether pointer-driven magnification is engaged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ZoomActivation {
    #[default]
    Inactive,
    Active,
}

impl ZoomActivation {
    pub fn from_flag(active: bool) -> Self {
        if active { Self::Active } else { Self::Inactive }
    }

    pub fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }

    pub fn flipped(self) -> Self {
        match self {
            Self::Active => Self::Inactive,
            Self::Inactive => Self::Active,
        }
    }
}

/// Pointer position in viewport (client) coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    /// Parks the lens far outside the viewport while zoom mode is off.
    pub const OFFSCREEN: Self = Self { x: -9999.0, y: -9999.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn css_x(&self) -> String {
        format!("{}px", self.x)
    }

    pub fn css_y(&self) -> String {
        format!("{}px", self.y)
    }
}

/// Bounding rectangle of a surface, as reported by layout at query time.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Not laid out, hidden, or otherwise unusable as a divisor.
    pub fn is_degenerate(&self) -> bool {
        let finite = self.width.is_finite() && self.height.is_finite();
        !finite || self.width == 0.0 || self.height == 0.0
    }
}

/// Normalized magnification origin; both fractions stay within [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Origin {
    pub x: f64,
    pub y: f64,
}

impl Origin {
    pub const CENTER: Self = Self { x: 0.5, y: 0.5 };

    pub fn css_x(&self) -> String {
        percent(self.x)
    }

    pub fn css_y(&self) -> String {
        percent(self.y)
    }
}

fn percent(fraction: f64) -> String {
    format!("{:.2}%", fraction * 100.0)
}

/// What the toggle control should show for the current activation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TogglePresentation {
    pub pressed: bool,
    /// Used for both the accessible label and the tooltip.
    pub label: String,
}

/// The parts of a keydown event the controller cares about.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyInput {
    pub key: String,
    pub code: String,
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
    /// Already handled by someone upstream.
    pub default_prevented: bool,
}

impl KeyInput {
    pub fn named(key: &str) -> Self {
        Self { key: key.to_string(), ..Self::default() }
    }

    pub fn shifted(key: &str, code: &str) -> Self {
        Self { key: key.to_string(), code: code.to_string(), shift: true, ..Self::default() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_and_center_format_for_css() {
        assert_eq!(PointerPosition::OFFSCREEN.css_x(), "-9999px");
        assert_eq!(PointerPosition::new(150.5, 75.0).css_y(), "75px");
        assert_eq!(PointerPosition::new(150.5, 75.0).css_x(), "150.5px");
        assert_eq!(Origin::CENTER.css_x(), "50.00%");
        assert_eq!(Origin { x: 0.0, y: 1.0 / 3.0 }.css_y(), "33.33%");
    }

    #[test]
    fn degenerate_rects() {
        assert!(Rect::new(10.0, 10.0, 0.0, 40.0).is_degenerate());
        assert!(Rect::new(10.0, 10.0, 40.0, 0.0).is_degenerate());
        assert!(Rect::new(0.0, 0.0, f64::NAN, 10.0).is_degenerate());
        assert!(!Rect::new(-5.0, -5.0, 1.0, 1.0).is_degenerate());
    }

    #[test]
    fn activation_flips() {
        assert_eq!(ZoomActivation::default(), ZoomActivation::Inactive);
        assert!(ZoomActivation::Inactive.flipped().is_active());
        assert_eq!(ZoomActivation::from_flag(false), ZoomActivation::Inactive);
    }
}
