//! Byte layouts accepted by display surfaces.

pub const BYTES_PER_PIXEL: usize = 4;

/// Channel order of a 4-byte-per-pixel surface. Alpha is always opaque.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum PixelFormat {
    /// R, G, B, A. What `pixels`/wgpu expects.
    #[default]
    Rgba8,
    /// B, G, R, A. 32bpp ARGB bitmaps on little-endian hosts.
    Bgra8,
}

impl PixelFormat {
    /// Writes one opaque pixel into a 4-byte slot.
    #[inline]
    pub fn write_pixel(self, r: u8, g: u8, b: u8, dst: &mut [u8]) {
        match self {
            Self::Rgba8 => {
                dst[0] = r;
                dst[1] = g;
                dst[2] = b;
            }
            Self::Bgra8 => {
                dst[0] = b;
                dst[1] = g;
                dst[2] = r;
            }
        }
        dst[3] = 255;
    }
}
