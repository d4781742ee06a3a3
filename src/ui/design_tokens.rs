// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Layout**: Page geometry the reveal bands are computed from
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_folio::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Create an overlay color
let overlay_bg = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::BLACK
};

// Use the spacing scale
let padding = spacing::MD; // 16px
```

## Modification

⚠️ Tokens are designed to be consistent. Before modifying:
1. Check the impact on all components
2. Maintain ratios (e.g., MD = XS * 2)
3. Run validation tests
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.07, 0.06, 0.12);
    pub const GRAY_800: Color = Color::from_rgb(0.11, 0.1, 0.18);
    pub const GRAY_700: Color = Color::from_rgb(0.17, 0.16, 0.26);
    pub const GRAY_400: Color = Color::from_rgb(0.45, 0.44, 0.55);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.82);
    pub const GRAY_100: Color = Color::from_rgb(0.88, 0.88, 0.92);

    // Brand colors (purple scale)
    pub const PRIMARY_200: Color = Color::from_rgb(0.85, 0.75, 0.98);
    pub const PRIMARY_400: Color = Color::from_rgb(0.72, 0.5, 0.95);
    pub const PRIMARY_500: Color = Color::from_rgb(0.58, 0.36, 0.92);
    pub const PRIMARY_600: Color = Color::from_rgb(0.48, 0.28, 0.8);
    pub const PRIMARY_800: Color = Color::from_rgb(0.3, 0.17, 0.52);

    // Accent colors (pink scale, paired with the purple for gradients)
    pub const ACCENT_400: Color = Color::from_rgb(0.95, 0.45, 0.75);
    pub const ACCENT_500: Color = Color::from_rgb(0.93, 0.32, 0.64);
    pub const ACCENT_600: Color = Color::from_rgb(0.8, 0.24, 0.53);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;

    /// Surface background - Semi-transparent panels and containers
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;
    pub const ICON_XL: f32 = 48.0;

    // Interactive element heights
    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const TAB_BUTTON_HEIGHT: f32 = 44.0;

    // Decorative canvases
    pub const HERO_CANVAS_HEIGHT: f32 = 320.0;
    pub const GLOBE_CANVAS_SIZE: f32 = 260.0;
    pub const PORTRAIT_SIZE: f32 = 280.0;

    // Card widths
    pub const CARD_WIDTH: f32 = 360.0;
    pub const READER_WIDTH: f32 = 760.0;
}

// ============================================================================
// Layout Scale (page geometry)
// ============================================================================

pub mod layout {
    //! Estimated page geometry used to compute the reveal trigger bands.
    //!
    //! The page is a fixed column of sections; each section's vertical
    //! extent is derived from these constants plus its content count, so
    //! band evaluation stays pure arithmetic.

    pub const NAVBAR_HEIGHT: f32 = 64.0;
    pub const CONTENT_WIDTH: f32 = 980.0;

    /// Sub-heading + heading block above every section body.
    pub const SECTION_HEADER_HEIGHT: f32 = 120.0;
    /// Vertical padding around each section.
    pub const SECTION_GAP: f32 = 96.0;

    pub const HERO_HEIGHT: f32 = 640.0;
    pub const ABOUT_BODY_HEIGHT: f32 = 480.0;
    pub const TIMELINE_CARD_HEIGHT: f32 = 280.0;
    pub const SHOWCASE_BODY_HEIGHT: f32 = 920.0;
    pub const TESTIMONIAL_CARD_HEIGHT: f32 = 300.0;
    pub const BLOG_CARD_HEIGHT: f32 = 360.0;
    pub const CONTACT_BODY_HEIGHT: f32 = 420.0;
    pub const FOOTER_HEIGHT: f32 = 72.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale following Material Design 3 type scale principles.

    /// Hero headline.
    pub const DISPLAY: f32 = 44.0;

    /// Large title - Section headings
    pub const TITLE_LG: f32 = 30.0;

    /// Medium title - Card titles, reader headings
    pub const TITLE_MD: f32 = 20.0;

    /// Small title - Sub-headings
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - Bio text, quotes
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Small body - Hints, secondary labels
    pub const BODY_SM: f32 = 13.0;

    /// Caption - Badges, timestamps, small info
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Subtle separators
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Emphasis borders, active tab underline
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 16.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    // Sizing validation
    assert!(sizing::ICON_XL > sizing::ICON_LG);
    assert!(sizing::ICON_LG > sizing::ICON_MD);

    // Layout validation
    assert!(layout::CONTENT_WIDTH > sizing::CARD_WIDTH);
    assert!(layout::HERO_HEIGHT > layout::NAVBAR_HEIGHT);
    assert!(layout::SECTION_GAP > 0.0);

    // Typography validation
    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);

    // Color validation
    assert!(palette::PRIMARY_500.r >= 0.0 && palette::PRIMARY_500.r <= 1.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn brand_and_accent_are_distinct_hues() {
        // Purple leans blue, pink leans red; the gradient needs both.
        assert!(palette::PRIMARY_500.b > palette::PRIMARY_500.r);
        assert!(palette::ACCENT_500.r > palette::ACCENT_500.b);
    }
}
