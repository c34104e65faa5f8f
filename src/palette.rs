// The 256-color reference palette shown down the left side of the window.
// Visual: a grid of swatches; clicking one changes the brush color.

use image::Rgba;

use crate::types::Color;

pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Plan 9's palette: a 4x4x4 RGB cube, each entry spread over 4 brightness levels.
    /// Index 0 is black and index 255 is white.
    pub fn plan9() -> Self {
        let mut colors = vec![Rgba([0, 0, 0, 255]); 256];
        let mut i = 0usize;
        for r in 0..4i32 {
            for v in 0..4i32 {
                let mut j = v - r;
                for g in 0..4i32 {
                    for b in 0..4i32 {
                        let den = r.max(g).max(b);
                        let c = if den == 0 {
                            let k = (0x11 * v) as u8;
                            Rgba([k, k, k, 255])
                        } else {
                            let num = 17 * (4 * den + v);
                            Rgba([
                                (r * num / den) as u8,
                                (g * num / den) as u8,
                                (b * num / den) as u8,
                                255,
                            ])
                        };
                        colors[i + (j & 0x0F) as usize] = c;
                        j += 1;
                    }
                }
                i += 16;
            }
        }
        Self { colors }
    }

    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.colors.iter().copied()
    }
}
