//! Approximate mapping from a wavelength to a display color.
//!
//! Piecewise-linear fit of the visible spectrum (380-750 nm) with a
//! perceived-intensity taper at both edges. Wavelengths outside the
//! visible range map to a neutral gray.

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn r(&self) -> u8 {
        self.r
    }

    pub fn g(&self) -> u8 {
        self.g
    }

    pub fn b(&self) -> u8 {
        self.b
    }

    /// Format as a lowercase hex color code.
    pub fn to_hex_string(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Neutral gray for wavelengths outside the visible range.
pub const INVISIBLE_GRAY: Color = Color {
    r: 0x80,
    g: 0x80,
    b: 0x80,
};

/// Map a wavelength in nanometers to an approximate visible color.
///
/// Stateless and deterministic. The visible range spans 380-750 nm in six
/// linear segments; anything outside returns [`INVISIBLE_GRAY`].
pub fn wavelength_to_color(wavelength_nm: f64) -> Color {
    if !(380.0..=750.0).contains(&wavelength_nm) {
        return INVISIBLE_GRAY;
    }
    let nm = wavelength_nm;

    let (r, g, b) = if nm < 440.0 {
        (-(nm - 440.0) / (440.0 - 380.0), 0.0, 1.0)
    } else if nm < 490.0 {
        (0.0, (nm - 440.0) / (490.0 - 440.0), 1.0)
    } else if nm < 510.0 {
        (0.0, 1.0, -(nm - 510.0) / (510.0 - 490.0))
    } else if nm < 580.0 {
        ((nm - 510.0) / (580.0 - 510.0), 1.0, 0.0)
    } else if nm < 645.0 {
        (1.0, -(nm - 645.0) / (645.0 - 580.0), 0.0)
    } else {
        (1.0, 0.0, 0.0)
    };

    // perceived dimming toward the ultraviolet and infrared edges
    let factor = if nm < 420.0 {
        0.3 + 0.7 * (nm - 380.0) / (420.0 - 380.0)
    } else if nm > 700.0 {
        0.3 + 0.7 * (750.0 - nm) / (750.0 - 700.0)
    } else {
        1.0
    };

    let quantize = |channel: f64| (channel * factor * 255.0).round() as u8;
    Color::new(quantize(r), quantize(g), quantize(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_is_gray() {
        assert_eq!(wavelength_to_color(350.0), INVISIBLE_GRAY);
        assert_eq!(wavelength_to_color(800.0), INVISIBLE_GRAY);
    }

    #[test]
    fn test_pure_green_region() {
        let color = wavelength_to_color(550.0);
        assert_eq!(color.g(), 255);
        assert_eq!(color.b(), 0);
        assert!(color.r() > 0);
    }

    #[test]
    fn test_segment_boundaries() {
        // 380 nm: violet at the dimmest taper (0.3 * 255 rounds down to 76)
        let color = wavelength_to_color(380.0);
        assert_eq!(color, Color::new(76, 0, 76));

        // 490 nm: cyan, full blue about to fall off
        let color = wavelength_to_color(490.0);
        assert_eq!(color, Color::new(0, 255, 255));

        // 645-700 nm: pure red at full intensity
        let color = wavelength_to_color(650.0);
        assert_eq!(color, Color::new(255, 0, 0));
    }

    #[test]
    fn test_edge_taper_dims_channels() {
        let reference = wavelength_to_color(550.0);
        let violet = wavelength_to_color(410.0);
        let deep_red = wavelength_to_color(740.0);
        let max = |c: Color| c.r().max(c.g()).max(c.b());
        assert!(max(violet) < max(reference));
        assert!(max(deep_red) < max(reference));
    }

    #[test]
    fn test_hex_formatting() {
        assert_eq!(Color::new(255, 0, 0).to_hex_string(), "#ff0000");
        assert_eq!(INVISIBLE_GRAY.to_hex_string(), "#808080");
        assert_eq!(wavelength_to_color(490.0).to_hex_string(), "#00ffff");
    }
}
