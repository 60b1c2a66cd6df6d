// SPDX-License-Identifier: MPL-2.0
//! Visual constants shared by the drop zone, the toasts and the host window.
//!
//! Spacing follows a 4px grid; font sizes and radii are small fixed scales.
//!
//! ```
//! use iced_intake::ui::design_tokens::{opacity, palette, spacing};
//! use iced::Color;
//!
//! let highlight = Color {
//!     a: opacity::OVERLAY_SUBTLE,
//!     ..palette::PRIMARY_500
//! };
//! assert_eq!(spacing::MD, 16.0);
//! ```

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    /// Secondary text and idle outlines. Readable on both themes.
    pub const GRAY_400: Color = Color::from_rgb(0.45, 0.45, 0.48);

    /// Drop zone highlight.
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);

    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
}

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    /// Placeholder and "preview unavailable" artwork.
    pub const ICON_XXL: f32 = 64.0;

    pub const TOAST_WIDTH: f32 = 360.0;
    /// Smallest height at which the placeholder content fits without clipping.
    pub const DROP_ZONE_MIN_HEIGHT: f32 = 240.0;
}

pub mod typography {
    pub const TITLE_MD: f32 = 20.0;
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    /// Drop zone outline while a drag hovers.
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: Color {
            a: 0.35,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 3.0 },
        blur_radius: 10.0,
    };
}

const _: () = {
    assert!(spacing::XXS < spacing::XS);
    assert!(spacing::XS < spacing::SM);
    assert!(spacing::SM < spacing::MD);
    assert!(spacing::MD < spacing::LG);

    assert!(opacity::OVERLAY_SUBTLE < opacity::OVERLAY_MEDIUM);
    assert!(opacity::OVERLAY_MEDIUM < opacity::OVERLAY_STRONG);

    assert!(sizing::ICON_SM < sizing::ICON_MD);
    assert!(sizing::ICON_MD < sizing::ICON_XXL);
    assert!(sizing::ICON_XXL < sizing::DROP_ZONE_MIN_HEIGHT);

    assert!(typography::CAPTION < typography::BODY);
    assert!(typography::BODY < typography::TITLE_MD);

    assert!(border::WIDTH_SM < border::WIDTH_MD);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_is_on_four_pixel_grid() {
        for value in [spacing::XXS, spacing::XS, spacing::SM, spacing::MD, spacing::LG] {
            assert_eq!(value % 4.0, 0.0);
        }
    }
}
