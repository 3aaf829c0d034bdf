#![cfg_attr(docsrs, feature(doc_cfg))]
//! Camera parameter facade that re-exports the workspace crates.
//!
//! ```rust
//! use camparams::{keys, CameraParameters, HalPixelFormat, Size};
//!
//! let mut params = CameraParameters::new();
//! params.set_preview_size(1280, 720);
//! params.set(keys::SUPPORTED_PREVIEW_FORMATS, "yuv420sp,yuv420p");
//! params.set(keys::PREVIEW_FPS_RANGE, "15000,30000");
//!
//! let flattened = params.flatten();
//! let restored: CameraParameters = flattened.parse().unwrap();
//! assert_eq!(restored.preview_size(), Size::new(1280, 720));
//! assert_eq!(restored.preview_fps_range(), (15000, 30000));
//! assert_eq!(
//!     restored.supported_preview_formats(),
//!     vec![HalPixelFormat::YCrCb420Sp.code(), HalPixelFormat::Yv12.code()]
//! );
//! ```

pub use camparams_core::{
    parse_pair, parse_sizes_list, strconv, CameraParameters, PairError, ParamError, Size,
    ENTRY_SEPARATOR, FIELD_SEPARATOR,
};
pub use cpnc::{keys, mtk, values};
pub use halfmt::{HalPixelFormat, UNKNOWN_FORMAT_CODE};
