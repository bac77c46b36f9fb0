/// A fill colour, expressed in the RGB or grayscale colour space
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Colour {
    /// DeviceRGB colour; r, g, b range from 0.0 to 1.0
    RGB { r: f32, g: f32, b: f32 },
    /// DeviceGray colour; g ranges from 0.0 to 1.0
    Grey { g: f32 },
}

impl Colour {
    /// Create a new colour in the RGB space. r, g, and b range from 0.0 to 1.0
    pub fn new_rgb(r: f32, g: f32, b: f32) -> Colour {
        Colour::RGB { r, g, b }
    }

    /// Create a new colour in the RGB space. r, g, and b range from 0 to 255
    pub fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour::RGB {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Create a new colour in the RGB space from a packed `0xRRGGBB` value,
    /// matching the hex notation the original mockups use
    pub const fn new_rgb_hex(rgb: u32) -> Colour {
        Colour::RGB {
            r: ((rgb >> 16) & 0xff) as f32 / 255.0,
            g: ((rgb >> 8) & 0xff) as f32 / 255.0,
            b: (rgb & 0xff) as f32 / 255.0,
        }
    }

    /// Create a new colour in the Gray space, g ranges from 0.0 to 1.0
    pub fn new_grey(g: f32) -> Colour {
        Colour::Grey { g }
    }
}

/// The fixed palette of the menu, plus a couple of generic constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::Grey { g: 0.0 };
    pub const WHITE: Colour = Colour::Grey { g: 1.0 };

    /// Header banner, dividers, and the footer flourish
    pub const TERRACOTTA: Colour = Colour::new_rgb_hex(0xd84315);
    /// Decorative stripe and placeholder borders
    pub const CREAM: Colour = Colour::new_rgb_hex(0xfbe9e7);
    /// Body text
    pub const INK: Colour = Colour::new_rgb_hex(0x212121);
    /// Descriptions and the footer contact line
    pub const SLATE: Colour = Colour::new_rgb_hex(0x424242);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colours_unpack_channels() {
        let c = Colour::new_rgb_hex(0xd84315);
        match c {
            Colour::RGB { r, g, b } => {
                assert!((r - 216.0 / 255.0).abs() < 1e-6);
                assert!((g - 67.0 / 255.0).abs() < 1e-6);
                assert!((b - 21.0 / 255.0).abs() < 1e-6);
            }
            _ => panic!("expected an RGB colour"),
        }
    }

    #[test]
    fn constructors_agree_on_the_same_colour() {
        assert_eq!(
            Colour::new_rgb_bytes(216, 67, 21),
            Colour::new_rgb_hex(0xd84315)
        );
        assert_eq!(
            Colour::new_rgb(1.0, 1.0, 1.0),
            Colour::RGB {
                r: 1.0,
                g: 1.0,
                b: 1.0
            }
        );
        assert_eq!(Colour::new_grey(0.0), colours::BLACK);
    }
}
