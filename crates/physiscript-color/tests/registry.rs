//! Cross-module checks for the palette, registry and color formatting

use physiscript_color::{consts, Color, ColorRegistry, COLOR_COUNT, PALETTE};

#[test]
fn every_name_renders_a_six_digit_html_code() {
    let registry = ColorRegistry::new();

    for (name, _) in registry.iter() {
        let color = registry.get(name).unwrap();
        let html = color.html(false);
        assert_eq!(html.len(), 7, "bad HTML code '{html}' for '{name}'");
        assert!(html.starts_with('#'));
        assert!(
            html[1..]
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase() && c.is_ascii_hexdigit()),
            "bad HTML code '{html}' for '{name}'"
        );
    }
}

#[test]
fn names_is_restartable() {
    let registry = ColorRegistry::new();

    let first: Vec<&str> = registry.names().collect();
    let second: Vec<&str> = registry.names().collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), COLOR_COUNT);
}

#[test]
fn registry_matches_palette_order() {
    let registry = ColorRegistry::new();

    for ((name, color), &(expected_name, expected_color)) in registry.iter().zip(PALETTE) {
        assert_eq!(name, expected_name);
        assert_eq!(color, expected_color);
    }
}

#[test]
fn opaque_alpha_renders_as_trailing_ff() {
    let color = Color::create(10, 20, 30, 255).unwrap();
    let html = color.html(true);
    assert_eq!(html.len(), 9);
    assert!(html.ends_with("FF"));
}

#[test]
fn create_round_trips_to_rgb() {
    let color = Color::create(255, 0, 0, 255).unwrap();
    assert_eq!(color.rgb(), (255, 0, 0));
    assert_eq!(color.html(false), "#FF0000");

    let color = Color::create(7, 93, 201, 64).unwrap();
    assert_eq!(color.rgb(), (7, 93, 201));
}

#[test]
fn constant_access_matches_name_lookup() {
    let registry = ColorRegistry::new();

    assert_eq!(registry.get("red").unwrap(), consts::RED);
    assert_eq!(registry.get("light-blue").unwrap(), consts::LIGHT_BLUE);
    assert_eq!(registry.get("gray100").unwrap(), consts::GRAY100);
    assert_eq!(
        registry.get("medium-spring-green").unwrap(),
        consts::MEDIUM_SPRING_GREEN
    );
}

// Construction equivalences ported from the original physiscript test
// suite: name, HTML, hex, byte and integer forms of the same color all
// agree.
#[test]
fn construction_paths_agree() {
    let registry = ColorRegistry::new();

    assert_eq!(registry.resolve("red").unwrap(), Color::from_rgb(255, 0, 0));
    assert_eq!(
        registry.resolve("#3C54FF").unwrap(),
        Color::from_rgb(0x3C, 0x54, 0xFF)
    );
    assert_eq!(
        registry.resolve("#EE98FE80").unwrap(),
        Color::new(0xEE, 0x98, 0xFE, 0x80)
    );
    assert_eq!(
        registry.resolve("0x404040").unwrap(),
        Color::from_rgb(0x40, 0x40, 0x40)
    );
    assert_eq!(
        registry.resolve("0x33225599").unwrap(),
        Color::new(0x33, 0x22, 0x55, 0x99)
    );
    assert_eq!(
        Color::from_bytes(&[255, 255, 255]).unwrap(),
        Color::from_normalized(1.0, 1.0, 1.0, 1.0).unwrap()
    );
    assert_eq!(
        Color::from_bytes(&[0, 128, 0, 200]).unwrap(),
        Color::new(0, 128, 0, 200)
    );
    assert_eq!(
        Color::from_u32(0x4566FFFF),
        Color::new(0x45, 0x66, 0xFF, 0xFF)
    );
    assert_eq!(
        Color::from_normalized(0.0, 1.0, 0.5, 1.0).unwrap(),
        Color::new(0, 255, 128, 255)
    );
}
