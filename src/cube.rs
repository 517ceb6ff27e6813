use palette::Srgb;
use crate::RawColor;

// ====================
// PUBLIC CONSTANTS
// ====================

pub const CUBE_SIDE: u8 = 16;

pub const CUBE_POINTS: usize =
    CUBE_SIDE as usize * CUBE_SIDE as usize * CUBE_SIDE as usize;

pub const GRID_SIDE: u32 = 64;

// ====================
// PUBLIC STRUCTS
// ====================

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Quantized {
    r: u8,
    g: u8,
    b: u8
}

impl Quantized {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        debug_assert!(r < CUBE_SIDE && g < CUBE_SIDE && b < CUBE_SIDE);
        Quantized { r, g, b }
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

    /* The linear index is the single value shared by the cube enumeration
       and the pixel mapping. Red varies fastest, blue slowest. */
    pub fn index(&self) -> usize {
        self.r as usize
            + CUBE_SIDE as usize * self.g as usize
            + CUBE_SIDE as usize * CUBE_SIDE as usize * self.b as usize
    }

    // Maps the 4-bit range onto the 8-bit scale. The step is 16, not 17,
    // so 15 widens to 240; existing lookup images depend on this exact value.
    pub fn widen(&self) -> RawColor {
        const STEP: u8 = 16;
        Srgb::new(self.r * STEP, self.g * STEP, self.b * STEP)
    }

    pub fn pixel(&self) -> (u32, u32) {
        pixel_position(self.index())
    }
}

// ====================
// PUBLIC FUNCTIONS
// ====================

pub fn points() -> impl Iterator<Item = Quantized> {
    (0..CUBE_SIDE).flat_map(|b| {
        (0..CUBE_SIDE).flat_map(move |g| {
            (0..CUBE_SIDE).map(move |r| Quantized::new(r, g, b))
        })
    })
}

// 64 x 64 = 4096, so the cube packs into the grid with no gaps and no
// collisions.
pub fn pixel_position(index: usize) -> (u32, u32) {
    debug_assert!(index < CUBE_POINTS);

    let side = GRID_SIDE as usize;
    ((index % side) as u32, (index / side) as u32)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use super::*;

    #[test]
    fn test_cube_has_4096_points() {
        assert_eq!(CUBE_POINTS, points().count());
    }

    #[test]
    fn test_enumeration_is_restartable() {
        let first: Vec<Quantized> = points().collect();
        let second: Vec<Quantized> = points().collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_enumeration_varies_red_fastest() {
        let start: Vec<Quantized> = points().take(17).collect();

        assert_eq!(Quantized::new(0, 0, 0), start[0]);
        assert_eq!(Quantized::new(1, 0, 0), start[1]);
        assert_eq!(Quantized::new(15, 0, 0), start[15]);
        assert_eq!(Quantized::new(0, 1, 0), start[16]);
    }

    #[test]
    fn test_enumeration_varies_blue_slowest() {
        assert_eq!(Some(Quantized::new(0, 0, 1)), points().nth(256));
        assert_eq!(Some(Quantized::new(15, 15, 15)), points().last());
    }

    #[test]
    fn test_index_matches_enumeration_position() {
        for (position, point) in points().enumerate() {
            assert_eq!(position, point.index());
        }
    }

    #[test]
    fn test_widen_scales_by_16() {
        assert_eq!(Srgb::new(0u8, 0, 0), Quantized::new(0, 0, 0).widen());
        assert_eq!(Srgb::new(240u8, 240, 240), Quantized::new(15, 15, 15).widen());
        assert_eq!(Srgb::new(16u8, 128, 224), Quantized::new(1, 8, 14).widen());
    }

    #[test]
    fn test_pixel_position_corners() {
        assert_eq!((0, 0), pixel_position(0));
        assert_eq!((63, 0), pixel_position(63));
        assert_eq!((0, 1), pixel_position(64));
        assert_eq!((63, 63), pixel_position(4095));
    }

    #[test]
    fn test_pixel_position_is_bijective() {
        let positions: HashSet<(u32, u32)> = (0..CUBE_POINTS)
            .map(pixel_position)
            .collect();

        assert_eq!(CUBE_POINTS, positions.len());
        assert!(positions.iter().all(|&(x, y)| x < GRID_SIDE && y < GRID_SIDE));
    }

    #[test]
    fn test_point_pixel_goes_through_linear_index() {
        let point = Quantized::new(3, 2, 1);

        assert_eq!(3 + 2 * 16 + 256, point.index());
        assert_eq!(pixel_position(point.index()), point.pixel());
    }
}
