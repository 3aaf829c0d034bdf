#![cfg_attr(docsrs, feature(doc_cfg))]
//! Platform HAL pixel format codes and the preview format name table.

use core::fmt;

use cpnc::values::{
    PIXEL_FORMAT_BAYER_RGGB, PIXEL_FORMAT_RGB565, PIXEL_FORMAT_RGBA8888, PIXEL_FORMAT_YUV420P,
    PIXEL_FORMAT_YUV420SP, PIXEL_FORMAT_YUV422I, PIXEL_FORMAT_YUV422SP,
};

/// Code returned for format names missing from the table.
pub const UNKNOWN_FORMAT_CODE: i32 = -1;

/// Platform pixel formats as exchanged with the camera HAL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HalPixelFormat {
    Rgba8888,
    Rgbx8888,
    Rgb888,
    Rgb565,
    Bgra8888,
    /// NV16.
    YCbCr422Sp,
    /// NV21, the default preview format.
    YCrCb420Sp,
    /// YUY2.
    YCbCr422I,
    Raw16,
    Blob,
    ImplementationDefined,
    Yv12,
    /// Code not present in the table above.
    Unknown(i32),
}

/// `(name, format)` pairs mapping preview format names to platform codes.
const FORMAT_NAMES: &[(&str, HalPixelFormat)] = &[
    (PIXEL_FORMAT_YUV422SP, HalPixelFormat::YCbCr422Sp),
    (PIXEL_FORMAT_YUV420SP, HalPixelFormat::YCrCb420Sp),
    (PIXEL_FORMAT_YUV422I, HalPixelFormat::YCbCr422I),
    (PIXEL_FORMAT_YUV420P, HalPixelFormat::Yv12),
    (PIXEL_FORMAT_RGB565, HalPixelFormat::Rgb565),
    (PIXEL_FORMAT_RGBA8888, HalPixelFormat::Rgba8888),
    (PIXEL_FORMAT_BAYER_RGGB, HalPixelFormat::Raw16),
];

impl HalPixelFormat {
    /// Format assumed when a preview format name is absent.
    pub const DEFAULT_PREVIEW: HalPixelFormat = HalPixelFormat::YCrCb420Sp;

    /// Convert a raw HAL code into a [`HalPixelFormat`].
    pub const fn from_code(code: i32) -> HalPixelFormat {
        match code {
            0x01 => HalPixelFormat::Rgba8888,
            0x02 => HalPixelFormat::Rgbx8888,
            0x03 => HalPixelFormat::Rgb888,
            0x04 => HalPixelFormat::Rgb565,
            0x05 => HalPixelFormat::Bgra8888,
            0x10 => HalPixelFormat::YCbCr422Sp,
            0x11 => HalPixelFormat::YCrCb420Sp,
            0x14 => HalPixelFormat::YCbCr422I,
            0x20 => HalPixelFormat::Raw16,
            0x21 => HalPixelFormat::Blob,
            0x22 => HalPixelFormat::ImplementationDefined,
            0x3231_5659 => HalPixelFormat::Yv12,
            other => HalPixelFormat::Unknown(other),
        }
    }

    /// Return the HAL code associated with the pixel format.
    pub const fn code(self) -> i32 {
        match self {
            HalPixelFormat::Rgba8888 => 0x01,
            HalPixelFormat::Rgbx8888 => 0x02,
            HalPixelFormat::Rgb888 => 0x03,
            HalPixelFormat::Rgb565 => 0x04,
            HalPixelFormat::Bgra8888 => 0x05,
            HalPixelFormat::YCbCr422Sp => 0x10,
            HalPixelFormat::YCrCb420Sp => 0x11,
            HalPixelFormat::YCbCr422I => 0x14,
            HalPixelFormat::Raw16 => 0x20,
            HalPixelFormat::Blob => 0x21,
            HalPixelFormat::ImplementationDefined => 0x22,
            HalPixelFormat::Yv12 => 0x3231_5659,
            HalPixelFormat::Unknown(code) => code,
        }
    }

    /// Look up a preview format name such as `"yuv420sp"`.
    ///
    /// Names are matched exactly; there is no case folding or trimming.
    pub fn from_format_name(name: &str) -> Option<HalPixelFormat> {
        FORMAT_NAMES
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, format)| *format)
    }

    /// Preview format name for formats that have one.
    pub fn format_name(self) -> Option<&'static str> {
        FORMAT_NAMES
            .iter()
            .find(|(_, format)| *format == self)
            .map(|(name, _)| *name)
    }

    /// Bytes per pixel for packed single-plane formats.
    pub const fn bytes_per_pixel(self) -> Option<usize> {
        match self {
            HalPixelFormat::Rgba8888 | HalPixelFormat::Rgbx8888 | HalPixelFormat::Bgra8888 => {
                Some(4)
            }
            HalPixelFormat::Rgb888 => Some(3),
            HalPixelFormat::Rgb565 | HalPixelFormat::YCbCr422I | HalPixelFormat::Raw16 => Some(2),
            _ => None,
        }
    }

    /// Whether the format stores luma and chroma in separate planes.
    pub const fn is_planar(self) -> bool {
        matches!(
            self,
            HalPixelFormat::YCbCr422Sp | HalPixelFormat::YCrCb420Sp | HalPixelFormat::Yv12
        )
    }
}

impl fmt::Display for HalPixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HalPixelFormat::Rgba8888 => f.write_str("RGBA_8888"),
            HalPixelFormat::Rgbx8888 => f.write_str("RGBX_8888"),
            HalPixelFormat::Rgb888 => f.write_str("RGB_888"),
            HalPixelFormat::Rgb565 => f.write_str("RGB_565"),
            HalPixelFormat::Bgra8888 => f.write_str("BGRA_8888"),
            HalPixelFormat::YCbCr422Sp => f.write_str("YCbCr_422_SP"),
            HalPixelFormat::YCrCb420Sp => f.write_str("YCrCb_420_SP"),
            HalPixelFormat::YCbCr422I => f.write_str("YCbCr_422_I"),
            HalPixelFormat::Raw16 => f.write_str("RAW16"),
            HalPixelFormat::Blob => f.write_str("BLOB"),
            HalPixelFormat::ImplementationDefined => f.write_str("IMPLEMENTATION_DEFINED"),
            HalPixelFormat::Yv12 => f.write_str("YV12"),
            HalPixelFormat::Unknown(code) => write!(f, "Unknown(0x{code:08X})"),
        }
    }
}
