//! Camera Parameter Naming Convention (CPNC) constants.
//!
//! Key names and value strings exchanged between camera clients and the
//! hardware layer inside flattened parameter strings. The items carry no
//! behavior; `camparams-core` reads and writes them through
//! `CameraParameters`.

pub mod keys;
pub mod mtk;
pub mod values;

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_flat_safe(items: &[&str]) {
        for item in items {
            assert!(!item.is_empty());
            assert!(
                !item.contains('=') && !item.contains(';'),
                "{item} contains a reserved delimiter"
            );
        }
    }

    #[test]
    fn standard_keys_are_flatten_safe() {
        assert_flat_safe(&[
            keys::PREVIEW_SIZE,
            keys::SUPPORTED_PREVIEW_SIZES,
            keys::PREVIEW_FORMAT,
            keys::SUPPORTED_PREVIEW_FORMATS,
            keys::PREVIEW_FPS_RANGE,
            keys::PICTURE_SIZE,
            keys::VIDEO_SIZE,
            keys::PREFERRED_PREVIEW_SIZE_FOR_VIDEO,
            keys::FOCUS_AREAS,
            keys::LIGHTFX,
        ]);
    }

    #[test]
    fn vendor_keys_are_flatten_safe() {
        assert_flat_safe(&[
            mtk::PROPERTY_KEY_CLIENT_APPMODE,
            mtk::KEY_FB_SMOOTH_LEVEL,
            mtk::KEY_CAPTURE_MODE,
            mtk::KEY_PREVIEW_INT_FORMAT,
            mtk::KEY_ENG_FOCUS_FULLSCAN_FRAME_INTERVAL_MAX,
            mtk::KEY_HSVR_PRV_SIZE,
            mtk::KEY_FIX_EXPOSURE_TIME,
        ]);
    }

    #[test]
    fn supported_lists_follow_values_suffix() {
        assert_eq!(
            keys::SUPPORTED_PREVIEW_SIZES,
            format!("{}-values", keys::PREVIEW_SIZE)
        );
        assert_eq!(
            keys::SUPPORTED_PICTURE_FORMATS,
            format!("{}-values", keys::PICTURE_FORMAT)
        );
        assert_eq!(
            mtk::KEY_SUPPORTED_CAPTURE_MODES,
            format!("{}-values", mtk::KEY_CAPTURE_MODE)
        );
    }
}
