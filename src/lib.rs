pub mod cube;
pub mod palettes;

mod config;
mod hex;

#[cfg(feature = "image")]
mod encode;

use std::path::{Path, PathBuf};
use boolvec::BoolVec;
use palette::Srgb;
use thiserror::Error;

pub use crate::cube::Quantized;
pub use crate::hex::parse_color;

pub type RawColor = Srgb<u8>;

// ====================
// PUBLIC TRAITS
// ====================

pub trait ColorMatch {
    fn nearest(&self, color: RawColor) -> Option<usize>;
}

// ====================
// PUBLIC STRUCTS
// ====================

#[derive(Debug, Error)]
pub enum LutError {
    #[error("palette contains no colors")]
    EmptyPalette,

    #[error("malformed color {0:?}: expected 3 or 6 hex digits")]
    MalformedColor(String),

    #[error("could not read palette file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error
    },

    #[error("palette file {} is not a JSON color list", path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RgbPalette {
    colors: Vec<RawColor>
}

impl RgbPalette {
    pub fn new(colors: Vec<RawColor>) -> Self {
        RgbPalette { colors }
    }

    pub fn from_hex<S: AsRef<str>>(specs: &[S]) -> Result<Self, LutError> {
        let colors = specs.iter()
            .map(|spec| hex::parse_color(spec.as_ref()))
            .collect::<Result<_, _>>()?;

        Ok(RgbPalette { colors })
    }

    pub fn from_file(path: &Path) -> Result<Self, LutError> {
        let specs = config::read_specs(path)?;
        RgbPalette::from_hex(&specs)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn color(&self, index: usize) -> RawColor {
        self.colors[index]
    }

    pub fn colors(&self) -> &[RawColor] {
        &self.colors
    }

    /* For every entry, the index of the nearest other entry. A single-color
       palette maps its only entry to itself. */
    pub fn second_choices(&self) -> Vec<usize> {
        (0..self.colors.len())
            .map(|current| {
                let mut closest = 0;
                let mut closest_distance = u32::MAX;

                for (other, &candidate) in self.colors.iter().enumerate() {
                    if other == current {
                        continue;
                    }

                    let distance = distance_squared(self.colors[current], candidate);
                    if distance < closest_distance {
                        closest_distance = distance;
                        closest = other;
                    }
                }

                closest
            })
            .collect()
    }
}

impl ColorMatch for RgbPalette {
    fn nearest(&self, color: RawColor) -> Option<usize> {
        let mut best_index = None;
        let mut best_distance = u32::MAX;

        for (index, &candidate) in self.colors.iter().enumerate() {
            let distance = distance_squared(color, candidate);

            /* Strict comparison: of several entries at the minimum distance,
               the earliest in palette order wins. */
            if distance < best_distance {
                best_distance = distance;
                best_index = Some(index);
            }
        }

        best_index
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ColorLut {
    palette: RgbPalette,
    assignments: Vec<usize>
}

impl ColorLut {
    pub fn build(palette: RgbPalette) -> Result<Self, LutError> {
        if palette.is_empty() {
            return Err(LutError::EmptyPalette);
        }

        let mut assignments = vec![0; cube::CUBE_POINTS];
        let mut covered = BoolVec::filled_with(cube::CUBE_POINTS, false);

        for point in cube::points() {
            let index = point.index();
            let choice = palette.nearest(point.widen()).ok_or(LutError::EmptyPalette)?;

            assignments[index] = choice;
            covered.set(index, true);
        }

        // A gap here means the enumeration and the index mapping diverged.
        debug_assert!((0..cube::CUBE_POINTS).all(|index| covered.get(index).unwrap()));

        tracing::debug!(
            colors = palette.len(),
            points = cube::CUBE_POINTS,
            "assigned a palette color to every cube point"
        );

        Ok(ColorLut { palette, assignments })
    }

    pub fn palette(&self) -> &RgbPalette {
        &self.palette
    }

    pub fn index_at(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < cube::GRID_SIDE && y < cube::GRID_SIDE);
        self.assignments[(y * cube::GRID_SIDE + x) as usize]
    }

    pub fn color_at(&self, x: u32, y: u32) -> RawColor {
        self.palette.color(self.index_at(x, y))
    }

    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, RawColor)> + '_ {
        self.assignments.iter().enumerate().map(|(index, &choice)| {
            let (x, y) = cube::pixel_position(index);
            (x, y, self.palette.color(choice))
        })
    }

    /* The companion table for dithered shading: every assignment remapped to
       the nearest other palette entry of the color that won. */
    pub fn dither_companion(&self) -> ColorLut {
        let second_choices = self.palette.second_choices();
        let assignments = self.assignments.iter()
            .map(|&choice| second_choices[choice])
            .collect();

        ColorLut {
            palette: self.palette.clone(),
            assignments
        }
    }
}

// ====================
// PRIVATE FUNCTIONS
// ====================

fn distance_squared(color1: RawColor, color2: RawColor) -> u32 {

    // u8 squared -> u16 needed, u16 x 3 -> u32 needed
    // Ex: 255^2 * 3 = 195075
    component_distance_squared(color1.red, color2.red)
        + component_distance_squared(color1.green, color2.green)
        + component_distance_squared(color1.blue, color2.blue)

}

fn component_distance_squared(component1: u8, component2: u8) -> u32 {
    let distance = component1.abs_diff(component2) as u32;
    distance * distance
}
