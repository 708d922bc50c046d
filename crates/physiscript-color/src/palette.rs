//! The predefined color palette - all 665 named colors
//!
//! Ported from physiscript's predefined color table (originally
//! pygame-ce's `colordict`). Entries are ordered alphabetically by
//! name; that order is the palette's insertion order and must remain
//! stable, since `ColorRegistry::names()` enumerates it directly.

use crate::color::Color;

/// Total number of predefined colors
pub const COLOR_COUNT: usize = 665;

// ============================================================================
// Constant identifiers
// ============================================================================

/// One constant per palette entry.
///
/// Identifiers are derived from the color name by upper-casing and
/// replacing hyphens with underscores (`"light-blue"` -> `LIGHT_BLUE`),
/// so `consts::LIGHT_BLUE` and a registry lookup of `"light-blue"`
/// yield the same color.
pub mod consts {
    use crate::color::Color;

    // a
    pub const ALICE_BLUE: Color = Color::from_rgb(240, 248, 255);
    pub const ANTIQUE_WHITE: Color = Color::from_rgb(250, 235, 215);
    pub const ANTIQUE_WHITE1: Color = Color::from_rgb(255, 239, 219);
    pub const ANTIQUE_WHITE2: Color = Color::from_rgb(238, 223, 204);
    pub const ANTIQUE_WHITE3: Color = Color::from_rgb(205, 192, 176);
    pub const ANTIQUE_WHITE4: Color = Color::from_rgb(139, 131, 120);
    pub const AQUA: Color = Color::from_rgb(0, 255, 255);
    pub const AQUAMARINE: Color = Color::from_rgb(127, 255, 212);
    pub const AQUAMARINE1: Color = Color::from_rgb(127, 255, 212);
    pub const AQUAMARINE2: Color = Color::from_rgb(118, 238, 198);
    pub const AQUAMARINE3: Color = Color::from_rgb(102, 205, 170);
    pub const AQUAMARINE4: Color = Color::from_rgb(69, 139, 116);
    pub const AZURE: Color = Color::from_rgb(240, 255, 255);
    pub const AZURE1: Color = Color::from_rgb(240, 255, 255);
    pub const AZURE2: Color = Color::from_rgb(224, 238, 238);
    pub const AZURE3: Color = Color::from_rgb(193, 205, 205);
    pub const AZURE4: Color = Color::from_rgb(131, 139, 139);

    // b
    pub const BEIGE: Color = Color::from_rgb(245, 245, 220);
    pub const BISQUE: Color = Color::from_rgb(255, 228, 196);
    pub const BISQUE1: Color = Color::from_rgb(255, 228, 196);
    pub const BISQUE2: Color = Color::from_rgb(238, 213, 183);
    pub const BISQUE3: Color = Color::from_rgb(205, 183, 158);
    pub const BISQUE4: Color = Color::from_rgb(139, 125, 107);
    pub const BLACK: Color = Color::from_rgb(0, 0, 0);
    pub const BLANCHED_ALMOND: Color = Color::from_rgb(255, 235, 205);
    pub const BLUE: Color = Color::from_rgb(0, 0, 255);
    pub const BLUE_VIOLET: Color = Color::from_rgb(138, 43, 226);
    pub const BLUE1: Color = Color::from_rgb(0, 0, 255);
    pub const BLUE2: Color = Color::from_rgb(0, 0, 238);
    pub const BLUE3: Color = Color::from_rgb(0, 0, 205);
    pub const BLUE4: Color = Color::from_rgb(0, 0, 139);
    pub const BROWN: Color = Color::from_rgb(165, 42, 42);
    pub const BROWN1: Color = Color::from_rgb(255, 64, 64);
    pub const BROWN2: Color = Color::from_rgb(238, 59, 59);
    pub const BROWN3: Color = Color::from_rgb(205, 51, 51);
    pub const BROWN4: Color = Color::from_rgb(139, 35, 35);
    pub const BURLY_WOOD: Color = Color::from_rgb(222, 184, 135);
    pub const BURLY_WOOD1: Color = Color::from_rgb(255, 211, 155);
    pub const BURLY_WOOD2: Color = Color::from_rgb(238, 197, 145);
    pub const BURLY_WOOD3: Color = Color::from_rgb(205, 170, 125);
    pub const BURLY_WOOD4: Color = Color::from_rgb(139, 115, 85);

    // c
    pub const CADET_BLUE: Color = Color::from_rgb(95, 158, 160);
    pub const CADET_BLUE1: Color = Color::from_rgb(152, 245, 255);
    pub const CADET_BLUE2: Color = Color::from_rgb(142, 229, 238);
    pub const CADET_BLUE3: Color = Color::from_rgb(122, 197, 205);
    pub const CADET_BLUE4: Color = Color::from_rgb(83, 134, 139);
    pub const CHARTREUSE: Color = Color::from_rgb(127, 255, 0);
    pub const CHARTREUSE1: Color = Color::from_rgb(127, 255, 0);
    pub const CHARTREUSE2: Color = Color::from_rgb(118, 238, 0);
    pub const CHARTREUSE3: Color = Color::from_rgb(102, 205, 0);
    pub const CHARTREUSE4: Color = Color::from_rgb(69, 139, 0);
    pub const CHOCOLATE: Color = Color::from_rgb(210, 105, 30);
    pub const CHOCOLATE1: Color = Color::from_rgb(255, 127, 36);
    pub const CHOCOLATE2: Color = Color::from_rgb(238, 118, 33);
    pub const CHOCOLATE3: Color = Color::from_rgb(205, 102, 29);
    pub const CHOCOLATE4: Color = Color::from_rgb(139, 69, 19);
    pub const CORAL: Color = Color::from_rgb(255, 127, 80);
    pub const CORAL1: Color = Color::from_rgb(255, 114, 86);
    pub const CORAL2: Color = Color::from_rgb(238, 106, 80);
    pub const CORAL3: Color = Color::from_rgb(205, 91, 69);
    pub const CORAL4: Color = Color::from_rgb(139, 62, 47);
    pub const CORN_FLOWER_BLUE: Color = Color::from_rgb(100, 149, 237);
    pub const CORN_SILK: Color = Color::from_rgb(255, 248, 220);
    pub const CORN_SILK1: Color = Color::from_rgb(255, 248, 220);
    pub const CORN_SILK2: Color = Color::from_rgb(238, 232, 205);
    pub const CORN_SILK3: Color = Color::from_rgb(205, 200, 177);
    pub const CORN_SILK4: Color = Color::from_rgb(139, 136, 120);
    pub const CRIMSON: Color = Color::from_rgb(220, 20, 60);
    pub const CYAN: Color = Color::from_rgb(0, 255, 255);
    pub const CYAN1: Color = Color::from_rgb(0, 255, 255);
    pub const CYAN2: Color = Color::from_rgb(0, 238, 238);
    pub const CYAN3: Color = Color::from_rgb(0, 205, 205);
    pub const CYAN4: Color = Color::from_rgb(0, 139, 139);

    // d
    pub const DARK_BLUE: Color = Color::from_rgb(0, 0, 139);
    pub const DARK_CYAN: Color = Color::from_rgb(0, 139, 139);
    pub const DARK_GOLDENROD: Color = Color::from_rgb(184, 134, 11);
    pub const DARK_GOLDENROD1: Color = Color::from_rgb(255, 185, 15);
    pub const DARK_GOLDENROD2: Color = Color::from_rgb(238, 173, 14);
    pub const DARK_GOLDENROD3: Color = Color::from_rgb(205, 149, 12);
    pub const DARK_GOLDENROD4: Color = Color::from_rgb(139, 101, 8);
    pub const DARK_GRAY: Color = Color::from_rgb(169, 169, 169);
    pub const DARK_GREEN: Color = Color::from_rgb(0, 100, 0);
    pub const DARK_GREY: Color = Color::from_rgb(169, 169, 169);
    pub const DARK_KHAKI: Color = Color::from_rgb(189, 183, 107);
    pub const DARK_MAGENTA: Color = Color::from_rgb(139, 0, 139);
    pub const DARK_OLIVE_GREEN: Color = Color::from_rgb(85, 107, 47);
    pub const DARK_OLIVE_GREEN1: Color = Color::from_rgb(202, 255, 112);
    pub const DARK_OLIVE_GREEN2: Color = Color::from_rgb(188, 238, 104);
    pub const DARK_OLIVE_GREEN3: Color = Color::from_rgb(162, 205, 90);
    pub const DARK_OLIVE_GREEN4: Color = Color::from_rgb(110, 139, 61);
    pub const DARK_ORANGE: Color = Color::from_rgb(255, 140, 0);
    pub const DARK_ORANGE1: Color = Color::from_rgb(255, 127, 0);
    pub const DARK_ORANGE2: Color = Color::from_rgb(238, 118, 0);
    pub const DARK_ORANGE3: Color = Color::from_rgb(205, 102, 0);
    pub const DARK_ORANGE4: Color = Color::from_rgb(139, 69, 0);
    pub const DARK_ORCHID: Color = Color::from_rgb(153, 50, 204);
    pub const DARK_ORCHID1: Color = Color::from_rgb(191, 62, 255);
    pub const DARK_ORCHID2: Color = Color::from_rgb(178, 58, 238);
    pub const DARK_ORCHID3: Color = Color::from_rgb(154, 50, 205);
    pub const DARK_ORCHID4: Color = Color::from_rgb(104, 34, 139);
    pub const DARK_RED: Color = Color::from_rgb(139, 0, 0);
    pub const DARK_SALMON: Color = Color::from_rgb(233, 150, 122);
    pub const DARK_SEA_GREEN: Color = Color::from_rgb(143, 188, 143);
    pub const DARK_SEA_GREEN1: Color = Color::from_rgb(193, 255, 193);
    pub const DARK_SEA_GREEN2: Color = Color::from_rgb(180, 238, 180);
    pub const DARK_SEA_GREEN3: Color = Color::from_rgb(155, 205, 155);
    pub const DARK_SEA_GREEN4: Color = Color::from_rgb(105, 139, 105);
    pub const DARK_SLATE_BLUE: Color = Color::from_rgb(72, 61, 139);
    pub const DARK_SLATE_GRAY: Color = Color::from_rgb(47, 79, 79);
    pub const DARK_SLATE_GRAY1: Color = Color::from_rgb(151, 255, 255);
    pub const DARK_SLATE_GRAY2: Color = Color::from_rgb(141, 238, 238);
    pub const DARK_SLATE_GRAY3: Color = Color::from_rgb(121, 205, 205);
    pub const DARK_SLATE_GRAY4: Color = Color::from_rgb(82, 139, 139);
    pub const DARK_SLATE_GREY: Color = Color::from_rgb(47, 79, 79);
    pub const DARK_TURQUOISE: Color = Color::from_rgb(0, 206, 209);
    pub const DARK_VIOLET: Color = Color::from_rgb(148, 0, 211);
    pub const DEEP_PINK: Color = Color::from_rgb(255, 20, 147);
    pub const DEEP_PINK1: Color = Color::from_rgb(255, 20, 147);
    pub const DEEP_PINK2: Color = Color::from_rgb(238, 18, 137);
    pub const DEEP_PINK3: Color = Color::from_rgb(205, 16, 118);
    pub const DEEP_PINK4: Color = Color::from_rgb(139, 10, 80);
    pub const DEEP_SKY_BLUE: Color = Color::from_rgb(0, 191, 255);
    pub const DEEP_SKY_BLUE1: Color = Color::from_rgb(0, 191, 255);
    pub const DEEP_SKY_BLUE2: Color = Color::from_rgb(0, 178, 238);
    pub const DEEP_SKY_BLUE3: Color = Color::from_rgb(0, 154, 205);
    pub const DEEP_SKY_BLUE4: Color = Color::from_rgb(0, 104, 139);
    pub const DIM_GRAY: Color = Color::from_rgb(105, 105, 105);
    pub const DIM_GREY: Color = Color::from_rgb(105, 105, 105);
    pub const DODGER_BLUE: Color = Color::from_rgb(30, 144, 255);
    pub const DODGER_BLUE1: Color = Color::from_rgb(30, 144, 255);
    pub const DODGER_BLUE2: Color = Color::from_rgb(28, 134, 238);
    pub const DODGER_BLUE3: Color = Color::from_rgb(24, 116, 205);
    pub const DODGER_BLUE4: Color = Color::from_rgb(16, 78, 139);

    // f
    pub const FIREBRICK: Color = Color::from_rgb(178, 34, 34);
    pub const FIREBRICK1: Color = Color::from_rgb(255, 48, 48);
    pub const FIREBRICK2: Color = Color::from_rgb(238, 44, 44);
    pub const FIREBRICK3: Color = Color::from_rgb(205, 38, 38);
    pub const FIREBRICK4: Color = Color::from_rgb(139, 26, 26);
    pub const FLORAL_WHITE: Color = Color::from_rgb(255, 250, 240);
    pub const FOREST_GREEN: Color = Color::from_rgb(34, 139, 34);
    pub const FUCHSIA: Color = Color::from_rgb(255, 0, 255);

    // g
    pub const GAINSBORO: Color = Color::from_rgb(220, 220, 220);
    pub const GHOST_WHITE: Color = Color::from_rgb(248, 248, 255);
    pub const GOLD: Color = Color::from_rgb(255, 215, 0);
    pub const GOLD1: Color = Color::from_rgb(255, 215, 0);
    pub const GOLD2: Color = Color::from_rgb(238, 201, 0);
    pub const GOLD3: Color = Color::from_rgb(205, 173, 0);
    pub const GOLD4: Color = Color::from_rgb(139, 117, 0);
    pub const GOLDENROD: Color = Color::from_rgb(218, 165, 32);
    pub const GOLDENROD1: Color = Color::from_rgb(255, 193, 37);
    pub const GOLDENROD2: Color = Color::from_rgb(238, 180, 34);
    pub const GOLDENROD3: Color = Color::from_rgb(205, 155, 29);
    pub const GOLDENROD4: Color = Color::from_rgb(139, 105, 20);
    pub const GRAY: Color = Color::from_rgb(190, 190, 190);
    pub const GRAY0: Color = Color::from_rgb(0, 0, 0);
    pub const GRAY1: Color = Color::from_rgb(3, 3, 3);
    pub const GRAY10: Color = Color::from_rgb(26, 26, 26);
    pub const GRAY100: Color = Color::from_rgb(255, 255, 255);
    pub const GRAY11: Color = Color::from_rgb(28, 28, 28);
    pub const GRAY12: Color = Color::from_rgb(31, 31, 31);
    pub const GRAY13: Color = Color::from_rgb(33, 33, 33);
    pub const GRAY14: Color = Color::from_rgb(36, 36, 36);
    pub const GRAY15: Color = Color::from_rgb(38, 38, 38);
    pub const GRAY16: Color = Color::from_rgb(41, 41, 41);
    pub const GRAY17: Color = Color::from_rgb(43, 43, 43);
    pub const GRAY18: Color = Color::from_rgb(46, 46, 46);
    pub const GRAY19: Color = Color::from_rgb(48, 48, 48);
    pub const GRAY2: Color = Color::from_rgb(5, 5, 5);
    pub const GRAY20: Color = Color::from_rgb(51, 51, 51);
    pub const GRAY21: Color = Color::from_rgb(54, 54, 54);
    pub const GRAY22: Color = Color::from_rgb(56, 56, 56);
    pub const GRAY23: Color = Color::from_rgb(59, 59, 59);
    pub const GRAY24: Color = Color::from_rgb(61, 61, 61);
    pub const GRAY25: Color = Color::from_rgb(64, 64, 64);
    pub const GRAY26: Color = Color::from_rgb(66, 66, 66);
    pub const GRAY27: Color = Color::from_rgb(69, 69, 69);
    pub const GRAY28: Color = Color::from_rgb(71, 71, 71);
    pub const GRAY29: Color = Color::from_rgb(74, 74, 74);
    pub const GRAY3: Color = Color::from_rgb(8, 8, 8);
    pub const GRAY30: Color = Color::from_rgb(77, 77, 77);
    pub const GRAY31: Color = Color::from_rgb(79, 79, 79);
    pub const GRAY32: Color = Color::from_rgb(82, 82, 82);
    pub const GRAY33: Color = Color::from_rgb(84, 84, 84);
    pub const GRAY34: Color = Color::from_rgb(87, 87, 87);
    pub const GRAY35: Color = Color::from_rgb(89, 89, 89);
    pub const GRAY36: Color = Color::from_rgb(92, 92, 92);
    pub const GRAY37: Color = Color::from_rgb(94, 94, 94);
    pub const GRAY38: Color = Color::from_rgb(97, 97, 97);
    pub const GRAY39: Color = Color::from_rgb(99, 99, 99);
    pub const GRAY4: Color = Color::from_rgb(10, 10, 10);
    pub const GRAY40: Color = Color::from_rgb(102, 102, 102);
    pub const GRAY41: Color = Color::from_rgb(105, 105, 105);
    pub const GRAY42: Color = Color::from_rgb(107, 107, 107);
    pub const GRAY43: Color = Color::from_rgb(110, 110, 110);
    pub const GRAY44: Color = Color::from_rgb(112, 112, 112);
    pub const GRAY45: Color = Color::from_rgb(115, 115, 115);
    pub const GRAY46: Color = Color::from_rgb(117, 117, 117);
    pub const GRAY47: Color = Color::from_rgb(120, 120, 120);
    pub const GRAY48: Color = Color::from_rgb(122, 122, 122);
    pub const GRAY49: Color = Color::from_rgb(125, 125, 125);
    pub const GRAY5: Color = Color::from_rgb(13, 13, 13);
    pub const GRAY50: Color = Color::from_rgb(127, 127, 127);
    pub const GRAY51: Color = Color::from_rgb(130, 130, 130);
    pub const GRAY52: Color = Color::from_rgb(133, 133, 133);
    pub const GRAY53: Color = Color::from_rgb(135, 135, 135);
    pub const GRAY54: Color = Color::from_rgb(138, 138, 138);
    pub const GRAY55: Color = Color::from_rgb(140, 140, 140);
    pub const GRAY56: Color = Color::from_rgb(143, 143, 143);
    pub const GRAY57: Color = Color::from_rgb(145, 145, 145);
    pub const GRAY58: Color = Color::from_rgb(148, 148, 148);
    pub const GRAY59: Color = Color::from_rgb(150, 150, 150);
    pub const GRAY6: Color = Color::from_rgb(15, 15, 15);
    pub const GRAY60: Color = Color::from_rgb(153, 153, 153);
    pub const GRAY61: Color = Color::from_rgb(156, 156, 156);
    pub const GRAY62: Color = Color::from_rgb(158, 158, 158);
    pub const GRAY63: Color = Color::from_rgb(161, 161, 161);
    pub const GRAY64: Color = Color::from_rgb(163, 163, 163);
    pub const GRAY65: Color = Color::from_rgb(166, 166, 166);
    pub const GRAY66: Color = Color::from_rgb(168, 168, 168);
    pub const GRAY67: Color = Color::from_rgb(171, 171, 171);
    pub const GRAY68: Color = Color::from_rgb(173, 173, 173);
    pub const GRAY69: Color = Color::from_rgb(176, 176, 176);
    pub const GRAY7: Color = Color::from_rgb(18, 18, 18);
    pub const GRAY70: Color = Color::from_rgb(179, 179, 179);
    pub const GRAY71: Color = Color::from_rgb(181, 181, 181);
    pub const GRAY72: Color = Color::from_rgb(184, 184, 184);
    pub const GRAY73: Color = Color::from_rgb(186, 186, 186);
    pub const GRAY74: Color = Color::from_rgb(189, 189, 189);
    pub const GRAY75: Color = Color::from_rgb(191, 191, 191);
    pub const GRAY76: Color = Color::from_rgb(194, 194, 194);
    pub const GRAY77: Color = Color::from_rgb(196, 196, 196);
    pub const GRAY78: Color = Color::from_rgb(199, 199, 199);
    pub const GRAY79: Color = Color::from_rgb(201, 201, 201);
    pub const GRAY8: Color = Color::from_rgb(20, 20, 20);
    pub const GRAY80: Color = Color::from_rgb(204, 204, 204);
    pub const GRAY81: Color = Color::from_rgb(207, 207, 207);
    pub const GRAY82: Color = Color::from_rgb(209, 209, 209);
    pub const GRAY83: Color = Color::from_rgb(212, 212, 212);
    pub const GRAY84: Color = Color::from_rgb(214, 214, 214);
    pub const GRAY85: Color = Color::from_rgb(217, 217, 217);
    pub const GRAY86: Color = Color::from_rgb(219, 219, 219);
    pub const GRAY87: Color = Color::from_rgb(222, 222, 222);
    pub const GRAY88: Color = Color::from_rgb(224, 224, 224);
    pub const GRAY89: Color = Color::from_rgb(227, 227, 227);
    pub const GRAY9: Color = Color::from_rgb(23, 23, 23);
    pub const GRAY90: Color = Color::from_rgb(229, 229, 229);
    pub const GRAY91: Color = Color::from_rgb(232, 232, 232);
    pub const GRAY92: Color = Color::from_rgb(235, 235, 235);
    pub const GRAY93: Color = Color::from_rgb(237, 237, 237);
    pub const GRAY94: Color = Color::from_rgb(240, 240, 240);
    pub const GRAY95: Color = Color::from_rgb(242, 242, 242);
    pub const GRAY96: Color = Color::from_rgb(245, 245, 245);
    pub const GRAY97: Color = Color::from_rgb(247, 247, 247);
    pub const GRAY98: Color = Color::from_rgb(250, 250, 250);
    pub const GRAY99: Color = Color::from_rgb(252, 252, 252);
    pub const GREEN: Color = Color::from_rgb(0, 255, 0);
    pub const GREEN_YELLOW: Color = Color::from_rgb(173, 255, 47);
    pub const GREEN1: Color = Color::from_rgb(0, 255, 0);
    pub const GREEN2: Color = Color::from_rgb(0, 238, 0);
    pub const GREEN3: Color = Color::from_rgb(0, 205, 0);
    pub const GREEN4: Color = Color::from_rgb(0, 139, 0);
    pub const GREY: Color = Color::from_rgb(190, 190, 190);
    pub const GREY0: Color = Color::from_rgb(0, 0, 0);
    pub const GREY1: Color = Color::from_rgb(3, 3, 3);
    pub const GREY10: Color = Color::from_rgb(26, 26, 26);
    pub const GREY100: Color = Color::from_rgb(255, 255, 255);
    pub const GREY11: Color = Color::from_rgb(28, 28, 28);
    pub const GREY12: Color = Color::from_rgb(31, 31, 31);
    pub const GREY13: Color = Color::from_rgb(33, 33, 33);
    pub const GREY14: Color = Color::from_rgb(36, 36, 36);
    pub const GREY15: Color = Color::from_rgb(38, 38, 38);
    pub const GREY16: Color = Color::from_rgb(41, 41, 41);
    pub const GREY17: Color = Color::from_rgb(43, 43, 43);
    pub const GREY18: Color = Color::from_rgb(46, 46, 46);
    pub const GREY19: Color = Color::from_rgb(48, 48, 48);
    pub const GREY2: Color = Color::from_rgb(5, 5, 5);
    pub const GREY20: Color = Color::from_rgb(51, 51, 51);
    pub const GREY21: Color = Color::from_rgb(54, 54, 54);
    pub const GREY22: Color = Color::from_rgb(56, 56, 56);
    pub const GREY23: Color = Color::from_rgb(59, 59, 59);
    pub const GREY24: Color = Color::from_rgb(61, 61, 61);
    pub const GREY25: Color = Color::from_rgb(64, 64, 64);
    pub const GREY26: Color = Color::from_rgb(66, 66, 66);
    pub const GREY27: Color = Color::from_rgb(69, 69, 69);
    pub const GREY28: Color = Color::from_rgb(71, 71, 71);
    pub const GREY29: Color = Color::from_rgb(74, 74, 74);
    pub const GREY3: Color = Color::from_rgb(8, 8, 8);
    pub const GREY30: Color = Color::from_rgb(77, 77, 77);
    pub const GREY31: Color = Color::from_rgb(79, 79, 79);
    pub const GREY32: Color = Color::from_rgb(82, 82, 82);
    pub const GREY33: Color = Color::from_rgb(84, 84, 84);
    pub const GREY34: Color = Color::from_rgb(87, 87, 87);
    pub const GREY35: Color = Color::from_rgb(89, 89, 89);
    pub const GREY36: Color = Color::from_rgb(92, 92, 92);
    pub const GREY37: Color = Color::from_rgb(94, 94, 94);
    pub const GREY38: Color = Color::from_rgb(97, 97, 97);
    pub const GREY39: Color = Color::from_rgb(99, 99, 99);
    pub const GREY4: Color = Color::from_rgb(10, 10, 10);
    pub const GREY40: Color = Color::from_rgb(102, 102, 102);
    pub const GREY41: Color = Color::from_rgb(105, 105, 105);
    pub const GREY42: Color = Color::from_rgb(107, 107, 107);
    pub const GREY43: Color = Color::from_rgb(110, 110, 110);
    pub const GREY44: Color = Color::from_rgb(112, 112, 112);
    pub const GREY45: Color = Color::from_rgb(115, 115, 115);
    pub const GREY46: Color = Color::from_rgb(117, 117, 117);
    pub const GREY47: Color = Color::from_rgb(120, 120, 120);
    pub const GREY48: Color = Color::from_rgb(122, 122, 122);
    pub const GREY49: Color = Color::from_rgb(125, 125, 125);
    pub const GREY5: Color = Color::from_rgb(13, 13, 13);
    pub const GREY50: Color = Color::from_rgb(127, 127, 127);
    pub const GREY51: Color = Color::from_rgb(130, 130, 130);
    pub const GREY52: Color = Color::from_rgb(133, 133, 133);
    pub const GREY53: Color = Color::from_rgb(135, 135, 135);
    pub const GREY54: Color = Color::from_rgb(138, 138, 138);
    pub const GREY55: Color = Color::from_rgb(140, 140, 140);
    pub const GREY56: Color = Color::from_rgb(143, 143, 143);
    pub const GREY57: Color = Color::from_rgb(145, 145, 145);
    pub const GREY58: Color = Color::from_rgb(148, 148, 148);
    pub const GREY59: Color = Color::from_rgb(150, 150, 150);
    pub const GREY6: Color = Color::from_rgb(15, 15, 15);
    pub const GREY60: Color = Color::from_rgb(153, 153, 153);
    pub const GREY61: Color = Color::from_rgb(156, 156, 156);
    pub const GREY62: Color = Color::from_rgb(158, 158, 158);
    pub const GREY63: Color = Color::from_rgb(161, 161, 161);
    pub const GREY64: Color = Color::from_rgb(163, 163, 163);
    pub const GREY65: Color = Color::from_rgb(166, 166, 166);
    pub const GREY66: Color = Color::from_rgb(168, 168, 168);
    pub const GREY67: Color = Color::from_rgb(171, 171, 171);
    pub const GREY68: Color = Color::from_rgb(173, 173, 173);
    pub const GREY69: Color = Color::from_rgb(176, 176, 176);
    pub const GREY7: Color = Color::from_rgb(18, 18, 18);
    pub const GREY70: Color = Color::from_rgb(179, 179, 179);
    pub const GREY71: Color = Color::from_rgb(181, 181, 181);
    pub const GREY72: Color = Color::from_rgb(184, 184, 184);
    pub const GREY73: Color = Color::from_rgb(186, 186, 186);
    pub const GREY74: Color = Color::from_rgb(189, 189, 189);
    pub const GREY75: Color = Color::from_rgb(191, 191, 191);
    pub const GREY76: Color = Color::from_rgb(194, 194, 194);
    pub const GREY77: Color = Color::from_rgb(196, 196, 196);
    pub const GREY78: Color = Color::from_rgb(199, 199, 199);
    pub const GREY79: Color = Color::from_rgb(201, 201, 201);
    pub const GREY8: Color = Color::from_rgb(20, 20, 20);
    pub const GREY80: Color = Color::from_rgb(204, 204, 204);
    pub const GREY81: Color = Color::from_rgb(207, 207, 207);
    pub const GREY82: Color = Color::from_rgb(209, 209, 209);
    pub const GREY83: Color = Color::from_rgb(212, 212, 212);
    pub const GREY84: Color = Color::from_rgb(214, 214, 214);
    pub const GREY85: Color = Color::from_rgb(217, 217, 217);
    pub const GREY86: Color = Color::from_rgb(219, 219, 219);
    pub const GREY87: Color = Color::from_rgb(222, 222, 222);
    pub const GREY88: Color = Color::from_rgb(224, 224, 224);
    pub const GREY89: Color = Color::from_rgb(227, 227, 227);
    pub const GREY9: Color = Color::from_rgb(23, 23, 23);
    pub const GREY90: Color = Color::from_rgb(229, 229, 229);
    pub const GREY91: Color = Color::from_rgb(232, 232, 232);
    pub const GREY92: Color = Color::from_rgb(235, 235, 235);
    pub const GREY93: Color = Color::from_rgb(237, 237, 237);
    pub const GREY94: Color = Color::from_rgb(240, 240, 240);
    pub const GREY95: Color = Color::from_rgb(242, 242, 242);
    pub const GREY96: Color = Color::from_rgb(245, 245, 245);
    pub const GREY97: Color = Color::from_rgb(247, 247, 247);
    pub const GREY98: Color = Color::from_rgb(250, 250, 250);
    pub const GREY99: Color = Color::from_rgb(252, 252, 252);

    // h
    pub const HONEYDEW: Color = Color::from_rgb(240, 255, 240);
    pub const HONEYDEW1: Color = Color::from_rgb(240, 255, 240);
    pub const HONEYDEW2: Color = Color::from_rgb(224, 238, 224);
    pub const HONEYDEW3: Color = Color::from_rgb(193, 205, 193);
    pub const HONEYDEW4: Color = Color::from_rgb(131, 139, 131);
    pub const HOT_PINK: Color = Color::from_rgb(255, 105, 180);
    pub const HOT_PINK1: Color = Color::from_rgb(255, 110, 180);
    pub const HOT_PINK2: Color = Color::from_rgb(238, 106, 167);
    pub const HOT_PINK3: Color = Color::from_rgb(205, 96, 144);
    pub const HOT_PINK4: Color = Color::from_rgb(139, 58, 98);

    // i
    pub const INDIAN_RED: Color = Color::from_rgb(205, 92, 92);
    pub const INDIAN_RED1: Color = Color::from_rgb(255, 106, 106);
    pub const INDIAN_RED2: Color = Color::from_rgb(238, 99, 99);
    pub const INDIAN_RED3: Color = Color::from_rgb(205, 85, 85);
    pub const INDIAN_RED4: Color = Color::from_rgb(139, 58, 58);
    pub const INDIGO: Color = Color::from_rgb(75, 0, 130);
    pub const IVORY: Color = Color::from_rgb(255, 255, 240);
    pub const IVORY1: Color = Color::from_rgb(255, 255, 240);
    pub const IVORY2: Color = Color::from_rgb(238, 238, 224);
    pub const IVORY3: Color = Color::from_rgb(205, 205, 193);
    pub const IVORY4: Color = Color::from_rgb(139, 139, 131);

    // k
    pub const KHAKI: Color = Color::from_rgb(240, 230, 140);
    pub const KHAKI1: Color = Color::from_rgb(255, 246, 143);
    pub const KHAKI2: Color = Color::from_rgb(238, 230, 133);
    pub const KHAKI3: Color = Color::from_rgb(205, 198, 115);
    pub const KHAKI4: Color = Color::from_rgb(139, 134, 78);

    // l
    pub const LAVENDER: Color = Color::from_rgb(230, 230, 250);
    pub const LAVENDER_BLUSH: Color = Color::from_rgb(255, 240, 245);
    pub const LAVENDER_BLUSH1: Color = Color::from_rgb(255, 240, 245);
    pub const LAVENDER_BLUSH2: Color = Color::from_rgb(238, 224, 229);
    pub const LAVENDER_BLUSH3: Color = Color::from_rgb(205, 193, 197);
    pub const LAVENDER_BLUSH4: Color = Color::from_rgb(139, 131, 134);
    pub const LAWN_GREEN: Color = Color::from_rgb(124, 252, 0);
    pub const LEMON_CHIFFON: Color = Color::from_rgb(255, 250, 205);
    pub const LEMON_CHIFFON1: Color = Color::from_rgb(255, 250, 205);
    pub const LEMON_CHIFFON2: Color = Color::from_rgb(238, 233, 191);
    pub const LEMON_CHIFFON3: Color = Color::from_rgb(205, 201, 165);
    pub const LEMON_CHIFFON4: Color = Color::from_rgb(139, 137, 112);
    pub const LIGHT_BLUE: Color = Color::from_rgb(173, 216, 230);
    pub const LIGHT_BLUE1: Color = Color::from_rgb(191, 239, 255);
    pub const LIGHT_BLUE2: Color = Color::from_rgb(178, 223, 238);
    pub const LIGHT_BLUE3: Color = Color::from_rgb(154, 192, 205);
    pub const LIGHT_BLUE4: Color = Color::from_rgb(104, 131, 139);
    pub const LIGHT_CORAL: Color = Color::from_rgb(240, 128, 128);
    pub const LIGHT_CYAN: Color = Color::from_rgb(224, 255, 255);
    pub const LIGHT_CYAN1: Color = Color::from_rgb(224, 255, 255);
    pub const LIGHT_CYAN2: Color = Color::from_rgb(209, 238, 238);
    pub const LIGHT_CYAN3: Color = Color::from_rgb(180, 205, 205);
    pub const LIGHT_CYAN4: Color = Color::from_rgb(122, 139, 139);
    pub const LIGHT_GOLDEN_ROD_YELLOW: Color = Color::from_rgb(250, 250, 210);
    pub const LIGHT_GOLDENROD: Color = Color::from_rgb(238, 221, 130);
    pub const LIGHT_GOLDENROD1: Color = Color::from_rgb(255, 236, 139);
    pub const LIGHT_GOLDENROD2: Color = Color::from_rgb(238, 220, 130);
    pub const LIGHT_GOLDENROD3: Color = Color::from_rgb(205, 190, 112);
    pub const LIGHT_GOLDENROD4: Color = Color::from_rgb(139, 129, 76);
    pub const LIGHT_GRAY: Color = Color::from_rgb(211, 211, 211);
    pub const LIGHT_GREEN: Color = Color::from_rgb(144, 238, 144);
    pub const LIGHT_GREY: Color = Color::from_rgb(211, 211, 211);
    pub const LIGHT_PINK: Color = Color::from_rgb(255, 182, 193);
    pub const LIGHT_PINK1: Color = Color::from_rgb(255, 174, 185);
    pub const LIGHT_PINK2: Color = Color::from_rgb(238, 162, 173);
    pub const LIGHT_PINK3: Color = Color::from_rgb(205, 140, 149);
    pub const LIGHT_PINK4: Color = Color::from_rgb(139, 95, 101);
    pub const LIGHT_SALMON: Color = Color::from_rgb(255, 160, 122);
    pub const LIGHT_SALMON1: Color = Color::from_rgb(255, 160, 122);
    pub const LIGHT_SALMON2: Color = Color::from_rgb(238, 149, 114);
    pub const LIGHT_SALMON3: Color = Color::from_rgb(205, 129, 98);
    pub const LIGHT_SALMON4: Color = Color::from_rgb(139, 87, 66);
    pub const LIGHT_SEA_GREEN: Color = Color::from_rgb(32, 178, 170);
    pub const LIGHT_SKY_BLUE: Color = Color::from_rgb(135, 206, 250);
    pub const LIGHT_SKY_BLUE1: Color = Color::from_rgb(176, 226, 255);
    pub const LIGHT_SKY_BLUE2: Color = Color::from_rgb(164, 211, 238);
    pub const LIGHT_SKY_BLUE3: Color = Color::from_rgb(141, 182, 205);
    pub const LIGHT_SKY_BLUE4: Color = Color::from_rgb(96, 123, 139);
    pub const LIGHT_SLATE_BLUE: Color = Color::from_rgb(132, 112, 255);
    pub const LIGHT_SLATE_GRAY: Color = Color::from_rgb(119, 136, 153);
    pub const LIGHT_SLATE_GREY: Color = Color::from_rgb(119, 136, 153);
    pub const LIGHT_STEEL_BLUE: Color = Color::from_rgb(176, 196, 222);
    pub const LIGHT_STEEL_BLUE1: Color = Color::from_rgb(202, 225, 255);
    pub const LIGHT_STEEL_BLUE2: Color = Color::from_rgb(188, 210, 238);
    pub const LIGHT_STEEL_BLUE3: Color = Color::from_rgb(162, 181, 205);
    pub const LIGHT_STEEL_BLUE4: Color = Color::from_rgb(110, 123, 139);
    pub const LIGHT_YELLOW: Color = Color::from_rgb(255, 255, 224);
    pub const LIGHT_YELLOW1: Color = Color::from_rgb(255, 255, 224);
    pub const LIGHT_YELLOW2: Color = Color::from_rgb(238, 238, 209);
    pub const LIGHT_YELLOW3: Color = Color::from_rgb(205, 205, 180);
    pub const LIGHT_YELLOW4: Color = Color::from_rgb(139, 139, 122);
    pub const LIME: Color = Color::from_rgb(0, 255, 0);
    pub const LIME_GREEN: Color = Color::from_rgb(50, 205, 50);
    pub const LINEN: Color = Color::from_rgb(250, 240, 230);

    // m
    pub const MAGENTA: Color = Color::from_rgb(255, 0, 255);
    pub const MAGENTA1: Color = Color::from_rgb(255, 0, 255);
    pub const MAGENTA2: Color = Color::from_rgb(238, 0, 238);
    pub const MAGENTA3: Color = Color::from_rgb(205, 0, 205);
    pub const MAGENTA4: Color = Color::from_rgb(139, 0, 139);
    pub const MAROON: Color = Color::from_rgb(176, 48, 96);
    pub const MAROON1: Color = Color::from_rgb(255, 52, 179);
    pub const MAROON2: Color = Color::from_rgb(238, 48, 167);
    pub const MAROON3: Color = Color::from_rgb(205, 41, 144);
    pub const MAROON4: Color = Color::from_rgb(139, 28, 98);
    pub const MEDIUM_AQUAMARINE: Color = Color::from_rgb(102, 205, 170);
    pub const MEDIUM_BLUE: Color = Color::from_rgb(0, 0, 205);
    pub const MEDIUM_ORCHID: Color = Color::from_rgb(186, 85, 211);
    pub const MEDIUM_ORCHID1: Color = Color::from_rgb(224, 102, 255);
    pub const MEDIUM_ORCHID2: Color = Color::from_rgb(209, 95, 238);
    pub const MEDIUM_ORCHID3: Color = Color::from_rgb(180, 82, 205);
    pub const MEDIUM_ORCHID4: Color = Color::from_rgb(122, 55, 139);
    pub const MEDIUM_PURPLE: Color = Color::from_rgb(147, 112, 219);
    pub const MEDIUM_PURPLE1: Color = Color::from_rgb(171, 130, 255);
    pub const MEDIUM_PURPLE2: Color = Color::from_rgb(159, 121, 238);
    pub const MEDIUM_PURPLE3: Color = Color::from_rgb(137, 104, 205);
    pub const MEDIUM_PURPLE4: Color = Color::from_rgb(93, 71, 139);
    pub const MEDIUM_SEA_GREEN: Color = Color::from_rgb(60, 179, 113);
    pub const MEDIUM_SLATE_BLUE: Color = Color::from_rgb(123, 104, 238);
    pub const MEDIUM_SPRING_GREEN: Color = Color::from_rgb(0, 250, 154);
    pub const MEDIUM_TURQUOISE: Color = Color::from_rgb(72, 209, 204);
    pub const MEDIUM_VIOLET_RED: Color = Color::from_rgb(199, 21, 133);
    pub const MIDNIGHT_BLUE: Color = Color::from_rgb(25, 25, 112);
    pub const MINT_CREAM: Color = Color::from_rgb(245, 255, 250);
    pub const MISTY_ROSE: Color = Color::from_rgb(255, 228, 225);
    pub const MISTY_ROSE1: Color = Color::from_rgb(255, 228, 225);
    pub const MISTY_ROSE2: Color = Color::from_rgb(238, 213, 210);
    pub const MISTY_ROSE3: Color = Color::from_rgb(205, 183, 181);
    pub const MISTY_ROSE4: Color = Color::from_rgb(139, 125, 123);
    pub const MOCCASIN: Color = Color::from_rgb(255, 228, 181);

    // n
    pub const NAVAJO_WHITE: Color = Color::from_rgb(255, 222, 173);
    pub const NAVAJO_WHITE1: Color = Color::from_rgb(255, 222, 173);
    pub const NAVAJO_WHITE2: Color = Color::from_rgb(238, 207, 161);
    pub const NAVAJO_WHITE3: Color = Color::from_rgb(205, 179, 139);
    pub const NAVAJO_WHITE4: Color = Color::from_rgb(139, 121, 94);
    pub const NAVY: Color = Color::from_rgb(0, 0, 128);
    pub const NAVY_BLUE: Color = Color::from_rgb(0, 0, 128);

    // o
    pub const OLD_LACE: Color = Color::from_rgb(253, 245, 230);
    pub const OLIVE: Color = Color::from_rgb(128, 128, 0);
    pub const OLIVE_DRAB: Color = Color::from_rgb(107, 142, 35);
    pub const OLIVE_DRAB1: Color = Color::from_rgb(192, 255, 62);
    pub const OLIVE_DRAB2: Color = Color::from_rgb(179, 238, 58);
    pub const OLIVE_DRAB3: Color = Color::from_rgb(154, 205, 50);
    pub const OLIVE_DRAB4: Color = Color::from_rgb(105, 139, 34);
    pub const ORANGE: Color = Color::from_rgb(255, 165, 0);
    pub const ORANGE_RED: Color = Color::from_rgb(255, 69, 0);
    pub const ORANGE_RED1: Color = Color::from_rgb(255, 69, 0);
    pub const ORANGE_RED2: Color = Color::from_rgb(238, 64, 0);
    pub const ORANGE_RED3: Color = Color::from_rgb(205, 55, 0);
    pub const ORANGE_RED4: Color = Color::from_rgb(139, 37, 0);
    pub const ORANGE1: Color = Color::from_rgb(255, 165, 0);
    pub const ORANGE2: Color = Color::from_rgb(238, 154, 0);
    pub const ORANGE3: Color = Color::from_rgb(205, 133, 0);
    pub const ORANGE4: Color = Color::from_rgb(139, 90, 0);
    pub const ORCHID: Color = Color::from_rgb(218, 112, 214);
    pub const ORCHID1: Color = Color::from_rgb(255, 131, 250);
    pub const ORCHID2: Color = Color::from_rgb(238, 122, 233);
    pub const ORCHID3: Color = Color::from_rgb(205, 105, 201);
    pub const ORCHID4: Color = Color::from_rgb(139, 71, 137);

    // p
    pub const PALE_GOLDENROD: Color = Color::from_rgb(238, 232, 170);
    pub const PALE_GREEN: Color = Color::from_rgb(152, 251, 152);
    pub const PALE_GREEN1: Color = Color::from_rgb(154, 255, 154);
    pub const PALE_GREEN2: Color = Color::from_rgb(144, 238, 144);
    pub const PALE_GREEN3: Color = Color::from_rgb(124, 205, 124);
    pub const PALE_GREEN4: Color = Color::from_rgb(84, 139, 84);
    pub const PALE_TURQUOISE: Color = Color::from_rgb(175, 238, 238);
    pub const PALE_TURQUOISE1: Color = Color::from_rgb(187, 255, 255);
    pub const PALE_TURQUOISE2: Color = Color::from_rgb(174, 238, 238);
    pub const PALE_TURQUOISE3: Color = Color::from_rgb(150, 205, 205);
    pub const PALE_TURQUOISE4: Color = Color::from_rgb(102, 139, 139);
    pub const PALE_VIOLET_RED: Color = Color::from_rgb(219, 112, 147);
    pub const PALE_VIOLET_RED1: Color = Color::from_rgb(255, 130, 171);
    pub const PALE_VIOLET_RED2: Color = Color::from_rgb(238, 121, 159);
    pub const PALE_VIOLET_RED3: Color = Color::from_rgb(205, 104, 137);
    pub const PALE_VIOLET_RED4: Color = Color::from_rgb(139, 71, 93);
    pub const PAPAYA_WHIP: Color = Color::from_rgb(255, 239, 213);
    pub const PEACH_PUFF: Color = Color::from_rgb(255, 218, 185);
    pub const PEACH_PUFF1: Color = Color::from_rgb(255, 218, 185);
    pub const PEACH_PUFF2: Color = Color::from_rgb(238, 203, 173);
    pub const PEACH_PUFF3: Color = Color::from_rgb(205, 175, 149);
    pub const PEACH_PUFF4: Color = Color::from_rgb(139, 119, 101);
    pub const PERU: Color = Color::from_rgb(205, 133, 63);
    pub const PINK: Color = Color::from_rgb(255, 192, 203);
    pub const PINK1: Color = Color::from_rgb(255, 181, 197);
    pub const PINK2: Color = Color::from_rgb(238, 169, 184);
    pub const PINK3: Color = Color::from_rgb(205, 145, 158);
    pub const PINK4: Color = Color::from_rgb(139, 99, 108);
    pub const PLUM: Color = Color::from_rgb(221, 160, 221);
    pub const PLUM1: Color = Color::from_rgb(255, 187, 255);
    pub const PLUM2: Color = Color::from_rgb(238, 174, 238);
    pub const PLUM3: Color = Color::from_rgb(205, 150, 205);
    pub const PLUM4: Color = Color::from_rgb(139, 102, 139);
    pub const POWDER_BLUE: Color = Color::from_rgb(176, 224, 230);
    pub const PURPLE: Color = Color::from_rgb(160, 32, 240);
    pub const PURPLE1: Color = Color::from_rgb(155, 48, 255);
    pub const PURPLE2: Color = Color::from_rgb(145, 44, 238);
    pub const PURPLE3: Color = Color::from_rgb(125, 38, 205);
    pub const PURPLE4: Color = Color::from_rgb(85, 26, 139);

    // r
    pub const RED: Color = Color::from_rgb(255, 0, 0);
    pub const RED1: Color = Color::from_rgb(255, 0, 0);
    pub const RED2: Color = Color::from_rgb(238, 0, 0);
    pub const RED3: Color = Color::from_rgb(205, 0, 0);
    pub const RED4: Color = Color::from_rgb(139, 0, 0);
    pub const ROSY_BROWN: Color = Color::from_rgb(188, 143, 143);
    pub const ROSY_BROWN1: Color = Color::from_rgb(255, 193, 193);
    pub const ROSY_BROWN2: Color = Color::from_rgb(238, 180, 180);
    pub const ROSY_BROWN3: Color = Color::from_rgb(205, 155, 155);
    pub const ROSY_BROWN4: Color = Color::from_rgb(139, 105, 105);
    pub const ROYAL_BLUE: Color = Color::from_rgb(65, 105, 225);
    pub const ROYAL_BLUE1: Color = Color::from_rgb(72, 118, 255);
    pub const ROYAL_BLUE2: Color = Color::from_rgb(67, 110, 238);
    pub const ROYAL_BLUE3: Color = Color::from_rgb(58, 95, 205);
    pub const ROYAL_BLUE4: Color = Color::from_rgb(39, 64, 139);

    // s
    pub const SADDLE_BROWN: Color = Color::from_rgb(139, 69, 19);
    pub const SALMON: Color = Color::from_rgb(250, 128, 114);
    pub const SALMON1: Color = Color::from_rgb(255, 140, 105);
    pub const SALMON2: Color = Color::from_rgb(238, 130, 98);
    pub const SALMON3: Color = Color::from_rgb(205, 112, 84);
    pub const SALMON4: Color = Color::from_rgb(139, 76, 57);
    pub const SANDY_BROWN: Color = Color::from_rgb(244, 164, 96);
    pub const SEA_GREEN: Color = Color::from_rgb(46, 139, 87);
    pub const SEA_GREEN1: Color = Color::from_rgb(84, 255, 159);
    pub const SEA_GREEN2: Color = Color::from_rgb(78, 238, 148);
    pub const SEA_GREEN3: Color = Color::from_rgb(67, 205, 128);
    pub const SEA_GREEN4: Color = Color::from_rgb(46, 139, 87);
    pub const SEASHELL: Color = Color::from_rgb(255, 245, 238);
    pub const SEASHELL1: Color = Color::from_rgb(255, 245, 238);
    pub const SEASHELL2: Color = Color::from_rgb(238, 229, 222);
    pub const SEASHELL3: Color = Color::from_rgb(205, 197, 191);
    pub const SEASHELL4: Color = Color::from_rgb(139, 134, 130);
    pub const SIENNA: Color = Color::from_rgb(160, 82, 45);
    pub const SIENNA1: Color = Color::from_rgb(255, 130, 71);
    pub const SIENNA2: Color = Color::from_rgb(238, 121, 66);
    pub const SIENNA3: Color = Color::from_rgb(205, 104, 57);
    pub const SIENNA4: Color = Color::from_rgb(139, 71, 38);
    pub const SILVER: Color = Color::from_rgb(192, 192, 192);
    pub const SKY_BLUE: Color = Color::from_rgb(135, 206, 235);
    pub const SKY_BLUE1: Color = Color::from_rgb(135, 206, 255);
    pub const SKY_BLUE2: Color = Color::from_rgb(126, 192, 238);
    pub const SKY_BLUE3: Color = Color::from_rgb(108, 166, 205);
    pub const SKY_BLUE4: Color = Color::from_rgb(74, 112, 139);
    pub const SLATE_BLUE: Color = Color::from_rgb(106, 90, 205);
    pub const SLATE_BLUE1: Color = Color::from_rgb(131, 111, 255);
    pub const SLATE_BLUE2: Color = Color::from_rgb(122, 103, 238);
    pub const SLATE_BLUE3: Color = Color::from_rgb(105, 89, 205);
    pub const SLATE_BLUE4: Color = Color::from_rgb(71, 60, 139);
    pub const SLATE_GRAY: Color = Color::from_rgb(112, 128, 144);
    pub const SLATE_GRAY1: Color = Color::from_rgb(198, 226, 255);
    pub const SLATE_GRAY2: Color = Color::from_rgb(185, 211, 238);
    pub const SLATE_GRAY3: Color = Color::from_rgb(159, 182, 205);
    pub const SLATE_GRAY4: Color = Color::from_rgb(108, 123, 139);
    pub const SLATE_GREY: Color = Color::from_rgb(112, 128, 144);
    pub const SNOW: Color = Color::from_rgb(255, 250, 250);
    pub const SNOW1: Color = Color::from_rgb(255, 250, 250);
    pub const SNOW2: Color = Color::from_rgb(238, 233, 233);
    pub const SNOW3: Color = Color::from_rgb(205, 201, 201);
    pub const SNOW4: Color = Color::from_rgb(139, 137, 137);
    pub const SPRING_GREEN: Color = Color::from_rgb(0, 255, 127);
    pub const SPRING_GREEN1: Color = Color::from_rgb(0, 255, 127);
    pub const SPRING_GREEN2: Color = Color::from_rgb(0, 238, 118);
    pub const SPRING_GREEN3: Color = Color::from_rgb(0, 205, 102);
    pub const SPRING_GREEN4: Color = Color::from_rgb(0, 139, 69);
    pub const STEEL_BLUE: Color = Color::from_rgb(70, 130, 180);
    pub const STEEL_BLUE1: Color = Color::from_rgb(99, 184, 255);
    pub const STEEL_BLUE2: Color = Color::from_rgb(92, 172, 238);
    pub const STEEL_BLUE3: Color = Color::from_rgb(79, 148, 205);
    pub const STEEL_BLUE4: Color = Color::from_rgb(54, 100, 139);

    // t
    pub const TAN: Color = Color::from_rgb(210, 180, 140);
    pub const TAN1: Color = Color::from_rgb(255, 165, 79);
    pub const TAN2: Color = Color::from_rgb(238, 154, 73);
    pub const TAN3: Color = Color::from_rgb(205, 133, 63);
    pub const TAN4: Color = Color::from_rgb(139, 90, 43);
    pub const TEAL: Color = Color::from_rgb(0, 128, 128);
    pub const THISTLE: Color = Color::from_rgb(216, 191, 216);
    pub const THISTLE1: Color = Color::from_rgb(255, 225, 255);
    pub const THISTLE2: Color = Color::from_rgb(238, 210, 238);
    pub const THISTLE3: Color = Color::from_rgb(205, 181, 205);
    pub const THISTLE4: Color = Color::from_rgb(139, 123, 139);
    pub const TOMATO: Color = Color::from_rgb(255, 99, 71);
    pub const TOMATO1: Color = Color::from_rgb(255, 99, 71);
    pub const TOMATO2: Color = Color::from_rgb(238, 92, 66);
    pub const TOMATO3: Color = Color::from_rgb(205, 79, 57);
    pub const TOMATO4: Color = Color::from_rgb(139, 54, 38);
    pub const TURQUOISE: Color = Color::from_rgb(64, 224, 208);
    pub const TURQUOISE1: Color = Color::from_rgb(0, 245, 255);
    pub const TURQUOISE2: Color = Color::from_rgb(0, 229, 238);
    pub const TURQUOISE3: Color = Color::from_rgb(0, 197, 205);
    pub const TURQUOISE4: Color = Color::from_rgb(0, 134, 139);

    // v
    pub const VIOLET: Color = Color::from_rgb(238, 130, 238);
    pub const VIOLET_RED: Color = Color::from_rgb(208, 32, 144);
    pub const VIOLET_RED1: Color = Color::from_rgb(255, 62, 150);
    pub const VIOLET_RED2: Color = Color::from_rgb(238, 58, 140);
    pub const VIOLET_RED3: Color = Color::from_rgb(205, 50, 120);
    pub const VIOLET_RED4: Color = Color::from_rgb(139, 34, 82);

    // w
    pub const WHEAT: Color = Color::from_rgb(245, 222, 179);
    pub const WHEAT1: Color = Color::from_rgb(255, 231, 186);
    pub const WHEAT2: Color = Color::from_rgb(238, 216, 174);
    pub const WHEAT3: Color = Color::from_rgb(205, 186, 150);
    pub const WHEAT4: Color = Color::from_rgb(139, 126, 102);
    pub const WHITE: Color = Color::from_rgb(255, 255, 255);
    pub const WHITE_SMOKE: Color = Color::from_rgb(245, 245, 245);

    // y
    pub const YELLOW: Color = Color::from_rgb(255, 255, 0);
    pub const YELLOW_GREEN: Color = Color::from_rgb(154, 205, 50);
    pub const YELLOW1: Color = Color::from_rgb(255, 255, 0);
    pub const YELLOW2: Color = Color::from_rgb(238, 238, 0);
    pub const YELLOW3: Color = Color::from_rgb(205, 205, 0);
    pub const YELLOW4: Color = Color::from_rgb(139, 139, 0);
}

// ============================================================================
// Palette table
// ============================================================================

/// All predefined colors paired with their names, in palette order
pub static PALETTE: &[(&str, Color)] = &[
    // a
    ("alice-blue", consts::ALICE_BLUE),
    ("antique-white", consts::ANTIQUE_WHITE),
    ("antique-white1", consts::ANTIQUE_WHITE1),
    ("antique-white2", consts::ANTIQUE_WHITE2),
    ("antique-white3", consts::ANTIQUE_WHITE3),
    ("antique-white4", consts::ANTIQUE_WHITE4),
    ("aqua", consts::AQUA),
    ("aquamarine", consts::AQUAMARINE),
    ("aquamarine1", consts::AQUAMARINE1),
    ("aquamarine2", consts::AQUAMARINE2),
    ("aquamarine3", consts::AQUAMARINE3),
    ("aquamarine4", consts::AQUAMARINE4),
    ("azure", consts::AZURE),
    ("azure1", consts::AZURE1),
    ("azure2", consts::AZURE2),
    ("azure3", consts::AZURE3),
    ("azure4", consts::AZURE4),
    // b
    ("beige", consts::BEIGE),
    ("bisque", consts::BISQUE),
    ("bisque1", consts::BISQUE1),
    ("bisque2", consts::BISQUE2),
    ("bisque3", consts::BISQUE3),
    ("bisque4", consts::BISQUE4),
    ("black", consts::BLACK),
    ("blanched-almond", consts::BLANCHED_ALMOND),
    ("blue", consts::BLUE),
    ("blue-violet", consts::BLUE_VIOLET),
    ("blue1", consts::BLUE1),
    ("blue2", consts::BLUE2),
    ("blue3", consts::BLUE3),
    ("blue4", consts::BLUE4),
    ("brown", consts::BROWN),
    ("brown1", consts::BROWN1),
    ("brown2", consts::BROWN2),
    ("brown3", consts::BROWN3),
    ("brown4", consts::BROWN4),
    ("burly-wood", consts::BURLY_WOOD),
    ("burly-wood1", consts::BURLY_WOOD1),
    ("burly-wood2", consts::BURLY_WOOD2),
    ("burly-wood3", consts::BURLY_WOOD3),
    ("burly-wood4", consts::BURLY_WOOD4),
    // c
    ("cadet-blue", consts::CADET_BLUE),
    ("cadet-blue1", consts::CADET_BLUE1),
    ("cadet-blue2", consts::CADET_BLUE2),
    ("cadet-blue3", consts::CADET_BLUE3),
    ("cadet-blue4", consts::CADET_BLUE4),
    ("chartreuse", consts::CHARTREUSE),
    ("chartreuse1", consts::CHARTREUSE1),
    ("chartreuse2", consts::CHARTREUSE2),
    ("chartreuse3", consts::CHARTREUSE3),
    ("chartreuse4", consts::CHARTREUSE4),
    ("chocolate", consts::CHOCOLATE),
    ("chocolate1", consts::CHOCOLATE1),
    ("chocolate2", consts::CHOCOLATE2),
    ("chocolate3", consts::CHOCOLATE3),
    ("chocolate4", consts::CHOCOLATE4),
    ("coral", consts::CORAL),
    ("coral1", consts::CORAL1),
    ("coral2", consts::CORAL2),
    ("coral3", consts::CORAL3),
    ("coral4", consts::CORAL4),
    ("corn-flower-blue", consts::CORN_FLOWER_BLUE),
    ("corn-silk", consts::CORN_SILK),
    ("corn-silk1", consts::CORN_SILK1),
    ("corn-silk2", consts::CORN_SILK2),
    ("corn-silk3", consts::CORN_SILK3),
    ("corn-silk4", consts::CORN_SILK4),
    ("crimson", consts::CRIMSON),
    ("cyan", consts::CYAN),
    ("cyan1", consts::CYAN1),
    ("cyan2", consts::CYAN2),
    ("cyan3", consts::CYAN3),
    ("cyan4", consts::CYAN4),
    // d
    ("dark-blue", consts::DARK_BLUE),
    ("dark-cyan", consts::DARK_CYAN),
    ("dark-goldenrod", consts::DARK_GOLDENROD),
    ("dark-goldenrod1", consts::DARK_GOLDENROD1),
    ("dark-goldenrod2", consts::DARK_GOLDENROD2),
    ("dark-goldenrod3", consts::DARK_GOLDENROD3),
    ("dark-goldenrod4", consts::DARK_GOLDENROD4),
    ("dark-gray", consts::DARK_GRAY),
    ("dark-green", consts::DARK_GREEN),
    ("dark-grey", consts::DARK_GREY),
    ("dark-khaki", consts::DARK_KHAKI),
    ("dark-magenta", consts::DARK_MAGENTA),
    ("dark-olive-green", consts::DARK_OLIVE_GREEN),
    ("dark-olive-green1", consts::DARK_OLIVE_GREEN1),
    ("dark-olive-green2", consts::DARK_OLIVE_GREEN2),
    ("dark-olive-green3", consts::DARK_OLIVE_GREEN3),
    ("dark-olive-green4", consts::DARK_OLIVE_GREEN4),
    ("dark-orange", consts::DARK_ORANGE),
    ("dark-orange1", consts::DARK_ORANGE1),
    ("dark-orange2", consts::DARK_ORANGE2),
    ("dark-orange3", consts::DARK_ORANGE3),
    ("dark-orange4", consts::DARK_ORANGE4),
    ("dark-orchid", consts::DARK_ORCHID),
    ("dark-orchid1", consts::DARK_ORCHID1),
    ("dark-orchid2", consts::DARK_ORCHID2),
    ("dark-orchid3", consts::DARK_ORCHID3),
    ("dark-orchid4", consts::DARK_ORCHID4),
    ("dark-red", consts::DARK_RED),
    ("dark-salmon", consts::DARK_SALMON),
    ("dark-sea-green", consts::DARK_SEA_GREEN),
    ("dark-sea-green1", consts::DARK_SEA_GREEN1),
    ("dark-sea-green2", consts::DARK_SEA_GREEN2),
    ("dark-sea-green3", consts::DARK_SEA_GREEN3),
    ("dark-sea-green4", consts::DARK_SEA_GREEN4),
    ("dark-slate-blue", consts::DARK_SLATE_BLUE),
    ("dark-slate-gray", consts::DARK_SLATE_GRAY),
    ("dark-slate-gray1", consts::DARK_SLATE_GRAY1),
    ("dark-slate-gray2", consts::DARK_SLATE_GRAY2),
    ("dark-slate-gray3", consts::DARK_SLATE_GRAY3),
    ("dark-slate-gray4", consts::DARK_SLATE_GRAY4),
    ("dark-slate-grey", consts::DARK_SLATE_GREY),
    ("dark-turquoise", consts::DARK_TURQUOISE),
    ("dark-violet", consts::DARK_VIOLET),
    ("deep-pink", consts::DEEP_PINK),
    ("deep-pink1", consts::DEEP_PINK1),
    ("deep-pink2", consts::DEEP_PINK2),
    ("deep-pink3", consts::DEEP_PINK3),
    ("deep-pink4", consts::DEEP_PINK4),
    ("deep-sky-blue", consts::DEEP_SKY_BLUE),
    ("deep-sky-blue1", consts::DEEP_SKY_BLUE1),
    ("deep-sky-blue2", consts::DEEP_SKY_BLUE2),
    ("deep-sky-blue3", consts::DEEP_SKY_BLUE3),
    ("deep-sky-blue4", consts::DEEP_SKY_BLUE4),
    ("dim-gray", consts::DIM_GRAY),
    ("dim-grey", consts::DIM_GREY),
    ("dodger-blue", consts::DODGER_BLUE),
    ("dodger-blue1", consts::DODGER_BLUE1),
    ("dodger-blue2", consts::DODGER_BLUE2),
    ("dodger-blue3", consts::DODGER_BLUE3),
    ("dodger-blue4", consts::DODGER_BLUE4),
    // f
    ("firebrick", consts::FIREBRICK),
    ("firebrick1", consts::FIREBRICK1),
    ("firebrick2", consts::FIREBRICK2),
    ("firebrick3", consts::FIREBRICK3),
    ("firebrick4", consts::FIREBRICK4),
    ("floral-white", consts::FLORAL_WHITE),
    ("forest-green", consts::FOREST_GREEN),
    ("fuchsia", consts::FUCHSIA),
    // g
    ("gainsboro", consts::GAINSBORO),
    ("ghost-white", consts::GHOST_WHITE),
    ("gold", consts::GOLD),
    ("gold1", consts::GOLD1),
    ("gold2", consts::GOLD2),
    ("gold3", consts::GOLD3),
    ("gold4", consts::GOLD4),
    ("goldenrod", consts::GOLDENROD),
    ("goldenrod1", consts::GOLDENROD1),
    ("goldenrod2", consts::GOLDENROD2),
    ("goldenrod3", consts::GOLDENROD3),
    ("goldenrod4", consts::GOLDENROD4),
    ("gray", consts::GRAY),
    ("gray0", consts::GRAY0),
    ("gray1", consts::GRAY1),
    ("gray10", consts::GRAY10),
    ("gray100", consts::GRAY100),
    ("gray11", consts::GRAY11),
    ("gray12", consts::GRAY12),
    ("gray13", consts::GRAY13),
    ("gray14", consts::GRAY14),
    ("gray15", consts::GRAY15),
    ("gray16", consts::GRAY16),
    ("gray17", consts::GRAY17),
    ("gray18", consts::GRAY18),
    ("gray19", consts::GRAY19),
    ("gray2", consts::GRAY2),
    ("gray20", consts::GRAY20),
    ("gray21", consts::GRAY21),
    ("gray22", consts::GRAY22),
    ("gray23", consts::GRAY23),
    ("gray24", consts::GRAY24),
    ("gray25", consts::GRAY25),
    ("gray26", consts::GRAY26),
    ("gray27", consts::GRAY27),
    ("gray28", consts::GRAY28),
    ("gray29", consts::GRAY29),
    ("gray3", consts::GRAY3),
    ("gray30", consts::GRAY30),
    ("gray31", consts::GRAY31),
    ("gray32", consts::GRAY32),
    ("gray33", consts::GRAY33),
    ("gray34", consts::GRAY34),
    ("gray35", consts::GRAY35),
    ("gray36", consts::GRAY36),
    ("gray37", consts::GRAY37),
    ("gray38", consts::GRAY38),
    ("gray39", consts::GRAY39),
    ("gray4", consts::GRAY4),
    ("gray40", consts::GRAY40),
    ("gray41", consts::GRAY41),
    ("gray42", consts::GRAY42),
    ("gray43", consts::GRAY43),
    ("gray44", consts::GRAY44),
    ("gray45", consts::GRAY45),
    ("gray46", consts::GRAY46),
    ("gray47", consts::GRAY47),
    ("gray48", consts::GRAY48),
    ("gray49", consts::GRAY49),
    ("gray5", consts::GRAY5),
    ("gray50", consts::GRAY50),
    ("gray51", consts::GRAY51),
    ("gray52", consts::GRAY52),
    ("gray53", consts::GRAY53),
    ("gray54", consts::GRAY54),
    ("gray55", consts::GRAY55),
    ("gray56", consts::GRAY56),
    ("gray57", consts::GRAY57),
    ("gray58", consts::GRAY58),
    ("gray59", consts::GRAY59),
    ("gray6", consts::GRAY6),
    ("gray60", consts::GRAY60),
    ("gray61", consts::GRAY61),
    ("gray62", consts::GRAY62),
    ("gray63", consts::GRAY63),
    ("gray64", consts::GRAY64),
    ("gray65", consts::GRAY65),
    ("gray66", consts::GRAY66),
    ("gray67", consts::GRAY67),
    ("gray68", consts::GRAY68),
    ("gray69", consts::GRAY69),
    ("gray7", consts::GRAY7),
    ("gray70", consts::GRAY70),
    ("gray71", consts::GRAY71),
    ("gray72", consts::GRAY72),
    ("gray73", consts::GRAY73),
    ("gray74", consts::GRAY74),
    ("gray75", consts::GRAY75),
    ("gray76", consts::GRAY76),
    ("gray77", consts::GRAY77),
    ("gray78", consts::GRAY78),
    ("gray79", consts::GRAY79),
    ("gray8", consts::GRAY8),
    ("gray80", consts::GRAY80),
    ("gray81", consts::GRAY81),
    ("gray82", consts::GRAY82),
    ("gray83", consts::GRAY83),
    ("gray84", consts::GRAY84),
    ("gray85", consts::GRAY85),
    ("gray86", consts::GRAY86),
    ("gray87", consts::GRAY87),
    ("gray88", consts::GRAY88),
    ("gray89", consts::GRAY89),
    ("gray9", consts::GRAY9),
    ("gray90", consts::GRAY90),
    ("gray91", consts::GRAY91),
    ("gray92", consts::GRAY92),
    ("gray93", consts::GRAY93),
    ("gray94", consts::GRAY94),
    ("gray95", consts::GRAY95),
    ("gray96", consts::GRAY96),
    ("gray97", consts::GRAY97),
    ("gray98", consts::GRAY98),
    ("gray99", consts::GRAY99),
    ("green", consts::GREEN),
    ("green-yellow", consts::GREEN_YELLOW),
    ("green1", consts::GREEN1),
    ("green2", consts::GREEN2),
    ("green3", consts::GREEN3),
    ("green4", consts::GREEN4),
    ("grey", consts::GREY),
    ("grey0", consts::GREY0),
    ("grey1", consts::GREY1),
    ("grey10", consts::GREY10),
    ("grey100", consts::GREY100),
    ("grey11", consts::GREY11),
    ("grey12", consts::GREY12),
    ("grey13", consts::GREY13),
    ("grey14", consts::GREY14),
    ("grey15", consts::GREY15),
    ("grey16", consts::GREY16),
    ("grey17", consts::GREY17),
    ("grey18", consts::GREY18),
    ("grey19", consts::GREY19),
    ("grey2", consts::GREY2),
    ("grey20", consts::GREY20),
    ("grey21", consts::GREY21),
    ("grey22", consts::GREY22),
    ("grey23", consts::GREY23),
    ("grey24", consts::GREY24),
    ("grey25", consts::GREY25),
    ("grey26", consts::GREY26),
    ("grey27", consts::GREY27),
    ("grey28", consts::GREY28),
    ("grey29", consts::GREY29),
    ("grey3", consts::GREY3),
    ("grey30", consts::GREY30),
    ("grey31", consts::GREY31),
    ("grey32", consts::GREY32),
    ("grey33", consts::GREY33),
    ("grey34", consts::GREY34),
    ("grey35", consts::GREY35),
    ("grey36", consts::GREY36),
    ("grey37", consts::GREY37),
    ("grey38", consts::GREY38),
    ("grey39", consts::GREY39),
    ("grey4", consts::GREY4),
    ("grey40", consts::GREY40),
    ("grey41", consts::GREY41),
    ("grey42", consts::GREY42),
    ("grey43", consts::GREY43),
    ("grey44", consts::GREY44),
    ("grey45", consts::GREY45),
    ("grey46", consts::GREY46),
    ("grey47", consts::GREY47),
    ("grey48", consts::GREY48),
    ("grey49", consts::GREY49),
    ("grey5", consts::GREY5),
    ("grey50", consts::GREY50),
    ("grey51", consts::GREY51),
    ("grey52", consts::GREY52),
    ("grey53", consts::GREY53),
    ("grey54", consts::GREY54),
    ("grey55", consts::GREY55),
    ("grey56", consts::GREY56),
    ("grey57", consts::GREY57),
    ("grey58", consts::GREY58),
    ("grey59", consts::GREY59),
    ("grey6", consts::GREY6),
    ("grey60", consts::GREY60),
    ("grey61", consts::GREY61),
    ("grey62", consts::GREY62),
    ("grey63", consts::GREY63),
    ("grey64", consts::GREY64),
    ("grey65", consts::GREY65),
    ("grey66", consts::GREY66),
    ("grey67", consts::GREY67),
    ("grey68", consts::GREY68),
    ("grey69", consts::GREY69),
    ("grey7", consts::GREY7),
    ("grey70", consts::GREY70),
    ("grey71", consts::GREY71),
    ("grey72", consts::GREY72),
    ("grey73", consts::GREY73),
    ("grey74", consts::GREY74),
    ("grey75", consts::GREY75),
    ("grey76", consts::GREY76),
    ("grey77", consts::GREY77),
    ("grey78", consts::GREY78),
    ("grey79", consts::GREY79),
    ("grey8", consts::GREY8),
    ("grey80", consts::GREY80),
    ("grey81", consts::GREY81),
    ("grey82", consts::GREY82),
    ("grey83", consts::GREY83),
    ("grey84", consts::GREY84),
    ("grey85", consts::GREY85),
    ("grey86", consts::GREY86),
    ("grey87", consts::GREY87),
    ("grey88", consts::GREY88),
    ("grey89", consts::GREY89),
    ("grey9", consts::GREY9),
    ("grey90", consts::GREY90),
    ("grey91", consts::GREY91),
    ("grey92", consts::GREY92),
    ("grey93", consts::GREY93),
    ("grey94", consts::GREY94),
    ("grey95", consts::GREY95),
    ("grey96", consts::GREY96),
    ("grey97", consts::GREY97),
    ("grey98", consts::GREY98),
    ("grey99", consts::GREY99),
    // h
    ("honeydew", consts::HONEYDEW),
    ("honeydew1", consts::HONEYDEW1),
    ("honeydew2", consts::HONEYDEW2),
    ("honeydew3", consts::HONEYDEW3),
    ("honeydew4", consts::HONEYDEW4),
    ("hot-pink", consts::HOT_PINK),
    ("hot-pink1", consts::HOT_PINK1),
    ("hot-pink2", consts::HOT_PINK2),
    ("hot-pink3", consts::HOT_PINK3),
    ("hot-pink4", consts::HOT_PINK4),
    // i
    ("indian-red", consts::INDIAN_RED),
    ("indian-red1", consts::INDIAN_RED1),
    ("indian-red2", consts::INDIAN_RED2),
    ("indian-red3", consts::INDIAN_RED3),
    ("indian-red4", consts::INDIAN_RED4),
    ("indigo", consts::INDIGO),
    ("ivory", consts::IVORY),
    ("ivory1", consts::IVORY1),
    ("ivory2", consts::IVORY2),
    ("ivory3", consts::IVORY3),
    ("ivory4", consts::IVORY4),
    // k
    ("khaki", consts::KHAKI),
    ("khaki1", consts::KHAKI1),
    ("khaki2", consts::KHAKI2),
    ("khaki3", consts::KHAKI3),
    ("khaki4", consts::KHAKI4),
    // l
    ("lavender", consts::LAVENDER),
    ("lavender-blush", consts::LAVENDER_BLUSH),
    ("lavender-blush1", consts::LAVENDER_BLUSH1),
    ("lavender-blush2", consts::LAVENDER_BLUSH2),
    ("lavender-blush3", consts::LAVENDER_BLUSH3),
    ("lavender-blush4", consts::LAVENDER_BLUSH4),
    ("lawn-green", consts::LAWN_GREEN),
    ("lemon-chiffon", consts::LEMON_CHIFFON),
    ("lemon-chiffon1", consts::LEMON_CHIFFON1),
    ("lemon-chiffon2", consts::LEMON_CHIFFON2),
    ("lemon-chiffon3", consts::LEMON_CHIFFON3),
    ("lemon-chiffon4", consts::LEMON_CHIFFON4),
    ("light-blue", consts::LIGHT_BLUE),
    ("light-blue1", consts::LIGHT_BLUE1),
    ("light-blue2", consts::LIGHT_BLUE2),
    ("light-blue3", consts::LIGHT_BLUE3),
    ("light-blue4", consts::LIGHT_BLUE4),
    ("light-coral", consts::LIGHT_CORAL),
    ("light-cyan", consts::LIGHT_CYAN),
    ("light-cyan1", consts::LIGHT_CYAN1),
    ("light-cyan2", consts::LIGHT_CYAN2),
    ("light-cyan3", consts::LIGHT_CYAN3),
    ("light-cyan4", consts::LIGHT_CYAN4),
    ("light-golden-rod-yellow", consts::LIGHT_GOLDEN_ROD_YELLOW),
    ("light-goldenrod", consts::LIGHT_GOLDENROD),
    ("light-goldenrod1", consts::LIGHT_GOLDENROD1),
    ("light-goldenrod2", consts::LIGHT_GOLDENROD2),
    ("light-goldenrod3", consts::LIGHT_GOLDENROD3),
    ("light-goldenrod4", consts::LIGHT_GOLDENROD4),
    ("light-gray", consts::LIGHT_GRAY),
    ("light-green", consts::LIGHT_GREEN),
    ("light-grey", consts::LIGHT_GREY),
    ("light-pink", consts::LIGHT_PINK),
    ("light-pink1", consts::LIGHT_PINK1),
    ("light-pink2", consts::LIGHT_PINK2),
    ("light-pink3", consts::LIGHT_PINK3),
    ("light-pink4", consts::LIGHT_PINK4),
    ("light-salmon", consts::LIGHT_SALMON),
    ("light-salmon1", consts::LIGHT_SALMON1),
    ("light-salmon2", consts::LIGHT_SALMON2),
    ("light-salmon3", consts::LIGHT_SALMON3),
    ("light-salmon4", consts::LIGHT_SALMON4),
    ("light-sea-green", consts::LIGHT_SEA_GREEN),
    ("light-sky-blue", consts::LIGHT_SKY_BLUE),
    ("light-sky-blue1", consts::LIGHT_SKY_BLUE1),
    ("light-sky-blue2", consts::LIGHT_SKY_BLUE2),
    ("light-sky-blue3", consts::LIGHT_SKY_BLUE3),
    ("light-sky-blue4", consts::LIGHT_SKY_BLUE4),
    ("light-slate-blue", consts::LIGHT_SLATE_BLUE),
    ("light-slate-gray", consts::LIGHT_SLATE_GRAY),
    ("light-slate-grey", consts::LIGHT_SLATE_GREY),
    ("light-steel-blue", consts::LIGHT_STEEL_BLUE),
    ("light-steel-blue1", consts::LIGHT_STEEL_BLUE1),
    ("light-steel-blue2", consts::LIGHT_STEEL_BLUE2),
    ("light-steel-blue3", consts::LIGHT_STEEL_BLUE3),
    ("light-steel-blue4", consts::LIGHT_STEEL_BLUE4),
    ("light-yellow", consts::LIGHT_YELLOW),
    ("light-yellow1", consts::LIGHT_YELLOW1),
    ("light-yellow2", consts::LIGHT_YELLOW2),
    ("light-yellow3", consts::LIGHT_YELLOW3),
    ("light-yellow4", consts::LIGHT_YELLOW4),
    ("lime", consts::LIME),
    ("lime-green", consts::LIME_GREEN),
    ("linen", consts::LINEN),
    // m
    ("magenta", consts::MAGENTA),
    ("magenta1", consts::MAGENTA1),
    ("magenta2", consts::MAGENTA2),
    ("magenta3", consts::MAGENTA3),
    ("magenta4", consts::MAGENTA4),
    ("maroon", consts::MAROON),
    ("maroon1", consts::MAROON1),
    ("maroon2", consts::MAROON2),
    ("maroon3", consts::MAROON3),
    ("maroon4", consts::MAROON4),
    ("medium-aquamarine", consts::MEDIUM_AQUAMARINE),
    ("medium-blue", consts::MEDIUM_BLUE),
    ("medium-orchid", consts::MEDIUM_ORCHID),
    ("medium-orchid1", consts::MEDIUM_ORCHID1),
    ("medium-orchid2", consts::MEDIUM_ORCHID2),
    ("medium-orchid3", consts::MEDIUM_ORCHID3),
    ("medium-orchid4", consts::MEDIUM_ORCHID4),
    ("medium-purple", consts::MEDIUM_PURPLE),
    ("medium-purple1", consts::MEDIUM_PURPLE1),
    ("medium-purple2", consts::MEDIUM_PURPLE2),
    ("medium-purple3", consts::MEDIUM_PURPLE3),
    ("medium-purple4", consts::MEDIUM_PURPLE4),
    ("medium-sea-green", consts::MEDIUM_SEA_GREEN),
    ("medium-slate-blue", consts::MEDIUM_SLATE_BLUE),
    ("medium-spring-green", consts::MEDIUM_SPRING_GREEN),
    ("medium-turquoise", consts::MEDIUM_TURQUOISE),
    ("medium-violet-red", consts::MEDIUM_VIOLET_RED),
    ("midnight-blue", consts::MIDNIGHT_BLUE),
    ("mint-cream", consts::MINT_CREAM),
    ("misty-rose", consts::MISTY_ROSE),
    ("misty-rose1", consts::MISTY_ROSE1),
    ("misty-rose2", consts::MISTY_ROSE2),
    ("misty-rose3", consts::MISTY_ROSE3),
    ("misty-rose4", consts::MISTY_ROSE4),
    ("moccasin", consts::MOCCASIN),
    // n
    ("navajo-white", consts::NAVAJO_WHITE),
    ("navajo-white1", consts::NAVAJO_WHITE1),
    ("navajo-white2", consts::NAVAJO_WHITE2),
    ("navajo-white3", consts::NAVAJO_WHITE3),
    ("navajo-white4", consts::NAVAJO_WHITE4),
    ("navy", consts::NAVY),
    ("navy-blue", consts::NAVY_BLUE),
    // o
    ("old-lace", consts::OLD_LACE),
    ("olive", consts::OLIVE),
    ("olive-drab", consts::OLIVE_DRAB),
    ("olive-drab1", consts::OLIVE_DRAB1),
    ("olive-drab2", consts::OLIVE_DRAB2),
    ("olive-drab3", consts::OLIVE_DRAB3),
    ("olive-drab4", consts::OLIVE_DRAB4),
    ("orange", consts::ORANGE),
    ("orange-red", consts::ORANGE_RED),
    ("orange-red1", consts::ORANGE_RED1),
    ("orange-red2", consts::ORANGE_RED2),
    ("orange-red3", consts::ORANGE_RED3),
    ("orange-red4", consts::ORANGE_RED4),
    ("orange1", consts::ORANGE1),
    ("orange2", consts::ORANGE2),
    ("orange3", consts::ORANGE3),
    ("orange4", consts::ORANGE4),
    ("orchid", consts::ORCHID),
    ("orchid1", consts::ORCHID1),
    ("orchid2", consts::ORCHID2),
    ("orchid3", consts::ORCHID3),
    ("orchid4", consts::ORCHID4),
    // p
    ("pale-goldenrod", consts::PALE_GOLDENROD),
    ("pale-green", consts::PALE_GREEN),
    ("pale-green1", consts::PALE_GREEN1),
    ("pale-green2", consts::PALE_GREEN2),
    ("pale-green3", consts::PALE_GREEN3),
    ("pale-green4", consts::PALE_GREEN4),
    ("pale-turquoise", consts::PALE_TURQUOISE),
    ("pale-turquoise1", consts::PALE_TURQUOISE1),
    ("pale-turquoise2", consts::PALE_TURQUOISE2),
    ("pale-turquoise3", consts::PALE_TURQUOISE3),
    ("pale-turquoise4", consts::PALE_TURQUOISE4),
    ("pale-violet-red", consts::PALE_VIOLET_RED),
    ("pale-violet-red1", consts::PALE_VIOLET_RED1),
    ("pale-violet-red2", consts::PALE_VIOLET_RED2),
    ("pale-violet-red3", consts::PALE_VIOLET_RED3),
    ("pale-violet-red4", consts::PALE_VIOLET_RED4),
    ("papaya-whip", consts::PAPAYA_WHIP),
    ("peach-puff", consts::PEACH_PUFF),
    ("peach-puff1", consts::PEACH_PUFF1),
    ("peach-puff2", consts::PEACH_PUFF2),
    ("peach-puff3", consts::PEACH_PUFF3),
    ("peach-puff4", consts::PEACH_PUFF4),
    ("peru", consts::PERU),
    ("pink", consts::PINK),
    ("pink1", consts::PINK1),
    ("pink2", consts::PINK2),
    ("pink3", consts::PINK3),
    ("pink4", consts::PINK4),
    ("plum", consts::PLUM),
    ("plum1", consts::PLUM1),
    ("plum2", consts::PLUM2),
    ("plum3", consts::PLUM3),
    ("plum4", consts::PLUM4),
    ("powder-blue", consts::POWDER_BLUE),
    ("purple", consts::PURPLE),
    ("purple1", consts::PURPLE1),
    ("purple2", consts::PURPLE2),
    ("purple3", consts::PURPLE3),
    ("purple4", consts::PURPLE4),
    // r
    ("red", consts::RED),
    ("red1", consts::RED1),
    ("red2", consts::RED2),
    ("red3", consts::RED3),
    ("red4", consts::RED4),
    ("rosy-brown", consts::ROSY_BROWN),
    ("rosy-brown1", consts::ROSY_BROWN1),
    ("rosy-brown2", consts::ROSY_BROWN2),
    ("rosy-brown3", consts::ROSY_BROWN3),
    ("rosy-brown4", consts::ROSY_BROWN4),
    ("royal-blue", consts::ROYAL_BLUE),
    ("royal-blue1", consts::ROYAL_BLUE1),
    ("royal-blue2", consts::ROYAL_BLUE2),
    ("royal-blue3", consts::ROYAL_BLUE3),
    ("royal-blue4", consts::ROYAL_BLUE4),
    // s
    ("saddle-brown", consts::SADDLE_BROWN),
    ("salmon", consts::SALMON),
    ("salmon1", consts::SALMON1),
    ("salmon2", consts::SALMON2),
    ("salmon3", consts::SALMON3),
    ("salmon4", consts::SALMON4),
    ("sandy-brown", consts::SANDY_BROWN),
    ("sea-green", consts::SEA_GREEN),
    ("sea-green1", consts::SEA_GREEN1),
    ("sea-green2", consts::SEA_GREEN2),
    ("sea-green3", consts::SEA_GREEN3),
    ("sea-green4", consts::SEA_GREEN4),
    ("seashell", consts::SEASHELL),
    ("seashell1", consts::SEASHELL1),
    ("seashell2", consts::SEASHELL2),
    ("seashell3", consts::SEASHELL3),
    ("seashell4", consts::SEASHELL4),
    ("sienna", consts::SIENNA),
    ("sienna1", consts::SIENNA1),
    ("sienna2", consts::SIENNA2),
    ("sienna3", consts::SIENNA3),
    ("sienna4", consts::SIENNA4),
    ("silver", consts::SILVER),
    ("sky-blue", consts::SKY_BLUE),
    ("sky-blue1", consts::SKY_BLUE1),
    ("sky-blue2", consts::SKY_BLUE2),
    ("sky-blue3", consts::SKY_BLUE3),
    ("sky-blue4", consts::SKY_BLUE4),
    ("slate-blue", consts::SLATE_BLUE),
    ("slate-blue1", consts::SLATE_BLUE1),
    ("slate-blue2", consts::SLATE_BLUE2),
    ("slate-blue3", consts::SLATE_BLUE3),
    ("slate-blue4", consts::SLATE_BLUE4),
    ("slate-gray", consts::SLATE_GRAY),
    ("slate-gray1", consts::SLATE_GRAY1),
    ("slate-gray2", consts::SLATE_GRAY2),
    ("slate-gray3", consts::SLATE_GRAY3),
    ("slate-gray4", consts::SLATE_GRAY4),
    ("slate-grey", consts::SLATE_GREY),
    ("snow", consts::SNOW),
    ("snow1", consts::SNOW1),
    ("snow2", consts::SNOW2),
    ("snow3", consts::SNOW3),
    ("snow4", consts::SNOW4),
    ("spring-green", consts::SPRING_GREEN),
    ("spring-green1", consts::SPRING_GREEN1),
    ("spring-green2", consts::SPRING_GREEN2),
    ("spring-green3", consts::SPRING_GREEN3),
    ("spring-green4", consts::SPRING_GREEN4),
    ("steel-blue", consts::STEEL_BLUE),
    ("steel-blue1", consts::STEEL_BLUE1),
    ("steel-blue2", consts::STEEL_BLUE2),
    ("steel-blue3", consts::STEEL_BLUE3),
    ("steel-blue4", consts::STEEL_BLUE4),
    // t
    ("tan", consts::TAN),
    ("tan1", consts::TAN1),
    ("tan2", consts::TAN2),
    ("tan3", consts::TAN3),
    ("tan4", consts::TAN4),
    ("teal", consts::TEAL),
    ("thistle", consts::THISTLE),
    ("thistle1", consts::THISTLE1),
    ("thistle2", consts::THISTLE2),
    ("thistle3", consts::THISTLE3),
    ("thistle4", consts::THISTLE4),
    ("tomato", consts::TOMATO),
    ("tomato1", consts::TOMATO1),
    ("tomato2", consts::TOMATO2),
    ("tomato3", consts::TOMATO3),
    ("tomato4", consts::TOMATO4),
    ("turquoise", consts::TURQUOISE),
    ("turquoise1", consts::TURQUOISE1),
    ("turquoise2", consts::TURQUOISE2),
    ("turquoise3", consts::TURQUOISE3),
    ("turquoise4", consts::TURQUOISE4),
    // v
    ("violet", consts::VIOLET),
    ("violet-red", consts::VIOLET_RED),
    ("violet-red1", consts::VIOLET_RED1),
    ("violet-red2", consts::VIOLET_RED2),
    ("violet-red3", consts::VIOLET_RED3),
    ("violet-red4", consts::VIOLET_RED4),
    // w
    ("wheat", consts::WHEAT),
    ("wheat1", consts::WHEAT1),
    ("wheat2", consts::WHEAT2),
    ("wheat3", consts::WHEAT3),
    ("wheat4", consts::WHEAT4),
    ("white", consts::WHITE),
    ("white-smoke", consts::WHITE_SMOKE),
    // y
    ("yellow", consts::YELLOW),
    ("yellow-green", consts::YELLOW_GREEN),
    ("yellow1", consts::YELLOW1),
    ("yellow2", consts::YELLOW2),
    ("yellow3", consts::YELLOW3),
    ("yellow4", consts::YELLOW4),
];

/// Derive the constant identifier for a palette name
/// (`"light-blue"` -> `"LIGHT_BLUE"`)
pub fn constant_ident(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '-' => '_',
            c => c.to_ascii_uppercase(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_count() {
        assert_eq!(PALETTE.len(), COLOR_COUNT);
    }

    #[test]
    fn test_names_sorted_and_unique() {
        for pair in PALETTE.windows(2) {
            assert!(
                pair[0].0 < pair[1].0,
                "palette entries '{}' and '{}' are out of order",
                pair[0].0,
                pair[1].0
            );
        }
    }

    #[test]
    fn test_name_charset() {
        for (name, _) in PALETTE {
            assert!(
                name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "palette name '{}' is not a lowercase hyphen-separated name",
                name
            );
        }
    }

    #[test]
    fn test_constant_ident() {
        assert_eq!(constant_ident("red"), "RED");
        assert_eq!(constant_ident("light-blue"), "LIGHT_BLUE");
        assert_eq!(constant_ident("antique-white1"), "ANTIQUE_WHITE1");
    }

    #[test]
    fn test_known_entries() {
        assert_eq!(consts::RED, Color::from_rgb(255, 0, 0));
        assert_eq!(consts::BLACK, Color::from_rgb(0, 0, 0));
        assert_eq!(consts::WHITE, Color::from_rgb(255, 255, 255));
        assert_eq!(consts::LIGHT_BLUE, Color::from_rgb(173, 216, 230));
    }
}
