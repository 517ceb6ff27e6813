use image::imageops::colorops::ColorMap;
use image::{Rgb, RgbImage};
use palette::Srgb;
use crate::{cube, ColorLut, ColorMatch, RawColor, RgbPalette};

fn convert_color(color: RawColor) -> Rgb<u8> {
    Rgb([color.red, color.green, color.blue])
}

impl ColorLut {
    pub fn to_image(&self) -> RgbImage {
        let mut image = RgbImage::new(cube::GRID_SIDE, cube::GRID_SIDE);

        for (x, y, color) in self.pixels() {
            image.put_pixel(x, y, convert_color(color));
        }

        image
    }
}

/* Lets a palette drive image's own indexing and dithering operations, the
   same way the lookup table drives a shader. */
impl ColorMap for RgbPalette {
    type Color = Rgb<u8>;

    fn index_of(&self, color: &Self::Color) -> usize {
        // ColorMap has no failure channel; an empty palette degenerates to 0
        self.nearest(Srgb::new(color.0[0], color.0[1], color.0[2]))
            .unwrap_or(0)
    }

    fn map_color(&self, color: &mut Self::Color) {
        if let Some(index) = self.nearest(Srgb::new(color.0[0], color.0[1], color.0[2])) {
            *color = convert_color(self.color(index));
        }
    }

    fn lookup(&self, index: usize) -> Option<Self::Color> {
        self.colors().get(index).map(|&color| convert_color(color))
    }

    fn has_lookup(&self) -> bool {
        true
    }
}
