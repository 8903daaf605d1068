//! Dark palette for the page. Colors follow the original site's cyan-on-dark
//! look; everything routes through these constants so the page stays coherent.

use eframe::egui::{self, Color32};

pub const BACKGROUND: Color32 = Color32::from_rgb(8, 8, 12);
pub const HEADER_BG: Color32 = Color32::from_rgb(12, 12, 18);
pub const PANEL: Color32 = Color32::from_rgb(18, 18, 27);
pub const CARD_BORDER: Color32 = Color32::from_rgb(45, 45, 58);
pub const ACCENT: Color32 = Color32::from_rgb(34, 211, 238);
pub const CODE_GREEN: Color32 = Color32::from_rgb(52, 211, 153);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(236, 238, 241);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(148, 155, 168);

/// Translucent accent used behind the active nav entry.
pub fn accent_soft() -> Color32 {
    Color32::from_rgba_unmultiplied(34, 211, 238, 26)
}

/// Mixes a color toward white by `t`. Hover strokes use a lifted accent.
pub fn lighten(c: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |channel: u8| -> u8 {
        let channel = channel as f32;
        (channel + (255.0 - channel) * t).round().clamp(0.0, 255.0) as u8
    };
    Color32::from_rgba_unmultiplied(mix(c.r()), mix(c.g()), mix(c.b()), c.a())
}

pub fn apply(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.visuals = egui::Visuals::dark();
    style.visuals.panel_fill = BACKGROUND;
    style.visuals.window_fill = PANEL;
    style.visuals.selection.bg_fill = accent_soft();
    style.visuals.selection.stroke = egui::Stroke::new(1.0, ACCENT);
    style.visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, ACCENT);
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    ctx.set_style(style);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lighten_moves_channels_toward_white() {
        let base = Color32::from_rgb(10, 20, 30);
        assert_eq!(lighten(base, 0.0), base);
        assert_eq!(lighten(base, 1.0), Color32::from_rgb(255, 255, 255));

        let half = lighten(base, 0.5);
        assert!(half.r() > base.r() && half.r() < 255);
    }

    #[test]
    fn lighten_clamps_out_of_range_factors() {
        let base = Color32::from_rgb(100, 100, 100);
        assert_eq!(lighten(base, -1.0), base);
        assert_eq!(lighten(base, 2.0), Color32::from_rgb(255, 255, 255));
    }
}
