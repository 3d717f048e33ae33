// src/gui/fonts.rs
//
// egui's bundled fonts have no CJK glyphs, and listing titles are mostly
// Chinese. Borrow the first system CJK font we can find as a fallback.

use std::{fs, sync::Arc};

use eframe::egui::{self, FontData, FontDefinitions, FontFamily};

const CJK_FONT_CANDIDATES: &[&str] = &[
    "C:\\Windows\\Fonts\\msjh.ttc",
    "C:\\Windows\\Fonts\\msyh.ttc",
    "/System/Library/Fonts/PingFang.ttc",
    "/System/Library/Fonts/STHeiti Medium.ttc",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
];

const CJK_FONT_KEY: &str = "cjk_fallback";

pub fn install_cjk_fallback(ctx: &egui::Context) {
    let found = CJK_FONT_CANDIDATES
        .iter()
        .find_map(|p| fs::read(p).ok().map(|bytes| (*p, bytes)));

    let Some((path, bytes)) = found else {
        logd!("Fonts: No CJK font found; non-Latin text may render as boxes");
        return;
    };

    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert(s!(CJK_FONT_KEY), Arc::new(FontData::from_owned(bytes)));

    // Fallback only: Latin text keeps egui's own fonts.
    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        fonts.families.entry(family).or_default().push(s!(CJK_FONT_KEY));
    }

    ctx.set_fonts(fonts);
    logf!("Fonts: CJK fallback from {}", path);
}
