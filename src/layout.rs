//! Canvas sizing: map a byte count onto a near-square 32-bit pixel grid.

use crate::header::BYTES_PER_PIXEL;

const PIXEL: u64 = BYTES_PER_PIXEL as u64;
/// Widths are kept a multiple of this many pixels.
pub const WIDTH_ALIGN: u64 = 4;

/// Pixel grid dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    pub width: u64,
    pub height: u64,
}

impl Canvas {
    /// Smallest near-square canvas, width aligned to 4 pixels, able to hold
    /// `n` bytes.
    ///
    /// Guarantees `pixels_size() >= n` for every `n`, and is a pure function
    /// of `n`.
    pub fn for_payload(n: u64) -> Self {
        // n == 0 never occurs through the pipeline (framing alone is 16 bytes)
        // but one pixel keeps the divisions below well defined.
        let pixels = n.div_ceil(PIXEL).max(1);
        let side = ((pixels as f64).sqrt() as u64).max(1);

        let width = pixels.div_ceil(side * WIDTH_ALIGN) * WIDTH_ALIGN;
        let height = pixels.div_ceil(width);
        Self { width, height }
    }

    /// Bytes of pixel data: `4 * width * height`.
    pub fn pixels_size(&self) -> u64 {
        PIXEL * self.width * self.height
    }

    /// Zero bytes needed after `used` bytes to fill the pixel region.
    pub fn padding_for(&self, used: u64) -> u64 {
        self.pixels_size() - used
    }
}

/// Width and height for `n` bytes of framing plus payload.
pub fn calculate_size(n: u64) -> (u64, u64) {
    let canvas = Canvas::for_payload(n);
    (canvas.width, canvas.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_covers_the_payload() {
        for n in [0u64, 1, 4, 16, 26, 1000, 4097, 1_000_000, 123_456_789] {
            let (w, h) = calculate_size(n);
            assert!(4 * w * h >= n, "n={n} -> {w}x{h}");
            assert_eq!(w % 4, 0, "n={n} width not aligned");
            assert!(h >= 1);
        }
    }

    #[test]
    fn deterministic() {
        for n in [1u64, 16, 1000, 1_000_000] {
            assert_eq!(calculate_size(n), calculate_size(n));
        }
    }

    #[test]
    fn small_payloads() {
        // ceil(26/4) = 7 pixels, side 2, width ceil(7/8)*4 = 4, height 2
        assert_eq!(calculate_size(26), (4, 2));
        assert_eq!(calculate_size(16), (4, 1));
        assert_eq!(calculate_size(1), (4, 1));
    }

    #[test]
    fn roughly_square() {
        let (w, h) = calculate_size(1_000_000);
        assert_eq!((w, h), (500, 500));
    }

    #[test]
    fn padding_fills_region() {
        let canvas = Canvas::for_payload(26);
        assert_eq!(canvas.padding_for(26), 6);
    }
}
