use rand::distr::Distribution;
use rand::Rng;
use crate::core::Rgb;

/// Inclusive per-channel ranges a randomized color is drawn from.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ColorBand {
    /// One brightness shared by all three channels.
    Gray { brightness: (u8, u8) },
    Rgb { r: (u8, u8), g: (u8, u8), b: (u8, u8) },
}

#[cfg(test)]
impl ColorBand {
    pub(crate) fn contains(&self, color: Rgb) -> bool {
        let within = |(lo, hi): (u8, u8), v: u8| v >= lo && v <= hi;
        match *self {
            ColorBand::Gray { brightness } => {
                color.r == color.g && color.g == color.b && within(brightness, color.r)
            }
            ColorBand::Rgb { r, g, b } => {
                within(r, color.r) && within(g, color.g) && within(b, color.b)
            }
        }
    }
}

impl Distribution<Rgb> for ColorBand {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Rgb {
        match *self {
            ColorBand::Gray { brightness: (lo, hi) } => {
                let v = rng.random_range(lo..=hi);
                Rgb::new(v, v, v)
            }
            ColorBand::Rgb { r, g, b } => Rgb::new(
                rng.random_range(r.0..=r.1),
                rng.random_range(g.0..=g.1),
                rng.random_range(b.0..=b.1),
            ),
        }
    }
}
