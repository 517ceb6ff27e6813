// Bundled pixel-art palettes, in the same hex notation the loader accepts.
// Entry order is part of each palette: earlier colors win distance ties.

pub struct NamedPalette {
    pub name: &'static str,
    pub colors: &'static [&'static str]
}

// https://lospec.com/palette-list/sweetie-16
pub const SWEETIE_16: NamedPalette = NamedPalette {
    name: "sweetie-16",
    colors: &[
        "#1a1c2c", "#5d275d", "#b13e53", "#ef7d57",
        "#ffcd75", "#a7f070", "#38b764", "#257179",
        "#29366f", "#3b5dc9", "#41a6f6", "#73eff7",
        "#f4f4f4", "#94b0c2", "#566c86", "#333c57"
    ]
};

// https://lospec.com/palette-list/endesga-16
pub const ENDESGA_16: NamedPalette = NamedPalette {
    name: "endesga-16",
    colors: &[
        "#e4a672", "#b86f50", "#743f39", "#3f2832",
        "#9e2835", "#e53b44", "#fb922b", "#ffe762",
        "#63c64d", "#327345", "#193d3f", "#4f6781",
        "#afbfd2", "#ffffff", "#2ce8f4", "#0484d1"
    ]
};

// https://lospec.com/palette-list/ice-cream-gb
pub const ICE_CREAM_GB: NamedPalette = NamedPalette {
    name: "ice-cream-gb",
    colors: &["#7c3f58", "#eb6b6f", "#f9a875", "#fff6d3"]
};

// https://lospec.com/palette-list/indecision
pub const INDECISION: NamedPalette = NamedPalette {
    name: "indecision",
    colors: &[
        "#fff4e0", "#8fcccb", "#449489", "#285763",
        "#2f2b5c", "#4b3b9c", "#457cd6", "#f2b63d",
        "#d46e33", "#e34262", "#94353d", "#57253b",
        "#9c656c", "#d1b48c", "#b4ba47", "#6d8c32",
        "#2c1b2e"
    ]
};

// https://lospec.com/palette-list/island-joy-16
pub const ISLAND_JOY_16: NamedPalette = NamedPalette {
    name: "island-joy-16",
    colors: &[
        "#ffffff", "#6df7c1", "#11adc1", "#606c81",
        "#393457", "#1e8875", "#5bb361", "#a1e55a",
        "#f7e476", "#f99252", "#cb4d68", "#6a3771",
        "#c92464", "#f48cb6", "#f7b69e", "#9b9c82"
    ]
};

// https://lospec.com/palette-list/nintendo-entertainment-system
pub const NES: NamedPalette = NamedPalette {
    name: "nes",
    colors: &[
        "#000000", "#fcfcfc", "#f8f8f8", "#bcbcbc",
        "#7c7c7c", "#a4e4fc", "#3cbcfc", "#0078f8",
        "#0000fc", "#b8b8f8", "#6888fc", "#0058f8",
        "#0000bc", "#d8b8f8", "#9878f8", "#6844fc",
        "#4428bc", "#f8b8f8", "#f878f8", "#d800cc",
        "#940084", "#f8a4c0", "#f85898", "#e40058",
        "#a80020", "#f0d0b0", "#f87858", "#f83800",
        "#a81000", "#fce0a8", "#fca044", "#e45c10",
        "#881400", "#f8d878", "#f8b800", "#ac7c00",
        "#503000", "#d8f878", "#b8f818", "#00b800",
        "#007800", "#b8f8b8", "#58d854", "#00a800",
        "#006800", "#b8f8d8", "#58f898", "#00a844",
        "#005800", "#00fcfc", "#00e8d8", "#008888",
        "#004058", "#f8d8f8", "#787878"
    ]
};

// https://lospec.com/palette-list/nintendo-super-gameboy
pub const SUPER_GAMEBOY: NamedPalette = NamedPalette {
    name: "nintendo-super-gameboy",
    colors: &["#331e50", "#a63725", "#d68e49", "#f7e7c6"]
};

pub const STONE_BRICK: NamedPalette = NamedPalette {
    name: "stone-brick",
    colors: &["#605C52", "#2C2A25"]
};

pub const ALL: [&NamedPalette; 8] = [
    &SWEETIE_16,
    &ENDESGA_16,
    &ICE_CREAM_GB,
    &INDECISION,
    &ISLAND_JOY_16,
    &NES,
    &SUPER_GAMEBOY,
    &STONE_BRICK
];

pub fn by_name(name: &str) -> Option<&'static NamedPalette> {
    ALL.into_iter().find(|palette| palette.name == name)
}

#[cfg(test)]
mod tests {
    use crate::RgbPalette;
    use super::*;

    #[test]
    fn test_every_builtin_parses() {
        for named in ALL {
            let palette = RgbPalette::from_hex(named.colors)
                .unwrap_or_else(|error| panic!("{}: {}", named.name, error));

            assert!(!palette.is_empty(), "{} is empty", named.name);
            assert_eq!(named.colors.len(), palette.len());
        }
    }

    #[test]
    fn test_builtin_names_are_unique() {
        for (i, a) in ALL.iter().enumerate() {
            for b in &ALL[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn test_by_name_finds_default_palette() {
        let found = by_name("sweetie-16").unwrap();

        assert_eq!(16, found.colors.len());
        assert_eq!("#1a1c2c", found.colors[0]);
    }

    #[test]
    fn test_by_name_misses_unknown_palette() {
        assert!(by_name("vaporwave-9000").is_none());
    }
}
