use iced::color;
use iced::theme::Palette;
use iced::{Color, Theme};

/// The demo's single dark theme, with the outline blue as primary colour.
pub fn app_theme() -> Theme {
    Theme::custom(
        "Obscura",
        Palette {
            background: color!(0x12, 0x14, 0x18),
            text: color!(0xe6, 0xe8, 0xeb),
            primary: color!(0x00, 0x96, 0xff),
            success: color!(0x3c, 0xc8, 0x6e),
            warning: color!(0xf2, 0xb1, 0x34),
            danger: color!(0xf0, 0x50, 0x50),
        },
    )
}

/// Secondary text colour: the theme's text colour, faded.
pub fn muted_color(theme: &Theme) -> Color {
    Color {
        a: 0.6,
        ..theme.extended_palette().background.base.text
    }
}

/// Background behind the preview image.
pub fn surface_color(theme: &Theme) -> Color {
    Color {
        a: 0.06,
        ..theme.extended_palette().background.base.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helpers_fade_the_text_colour() {
        let theme = app_theme();
        let text = theme.extended_palette().background.base.text;
        let muted = muted_color(&theme);
        let surface = surface_color(&theme);
        assert_eq!((muted.r, muted.g, muted.b), (text.r, text.g, text.b));
        assert!(surface.a < muted.a && muted.a < 1.0);
    }
}
