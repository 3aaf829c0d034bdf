//! Standard parameter keys.

// Preview.
/// Preview frame dimensions, `"{width}x{height}"`.
pub const PREVIEW_SIZE: &str = "preview-size";
/// Comma separated list of supported preview sizes.
pub const SUPPORTED_PREVIEW_SIZES: &str = "preview-size-values";
/// Preview pixel format name, for example `yuv420sp`.
pub const PREVIEW_FORMAT: &str = "preview-format";
/// Comma separated list of supported preview format names.
pub const SUPPORTED_PREVIEW_FORMATS: &str = "preview-format-values";
/// Preview frame rate in frames per second.
pub const PREVIEW_FRAME_RATE: &str = "preview-frame-rate";
pub const SUPPORTED_PREVIEW_FRAME_RATES: &str = "preview-frame-rate-values";
/// Preview fps range `"min,max"`, scaled by 1000.
pub const PREVIEW_FPS_RANGE: &str = "preview-fps-range";
pub const SUPPORTED_PREVIEW_FPS_RANGE: &str = "preview-fps-range-values";

// Still capture.
/// Still capture dimensions, `"{width}x{height}"`.
pub const PICTURE_SIZE: &str = "picture-size";
pub const SUPPORTED_PICTURE_SIZES: &str = "picture-size-values";
pub const PICTURE_FORMAT: &str = "picture-format";
pub const SUPPORTED_PICTURE_FORMATS: &str = "picture-format-values";
pub const JPEG_THUMBNAIL_WIDTH: &str = "jpeg-thumbnail-width";
pub const JPEG_THUMBNAIL_HEIGHT: &str = "jpeg-thumbnail-height";
pub const SUPPORTED_JPEG_THUMBNAIL_SIZES: &str = "jpeg-thumbnail-size-values";
pub const JPEG_THUMBNAIL_QUALITY: &str = "jpeg-thumbnail-quality";
/// JPEG quality, 1 to 100.
pub const JPEG_QUALITY: &str = "jpeg-quality";
/// Clockwise rotation applied to captured pictures, in degrees.
pub const ROTATION: &str = "rotation";

// GPS tags written into captured pictures.
pub const GPS_LATITUDE: &str = "gps-latitude";
pub const GPS_LONGITUDE: &str = "gps-longitude";
pub const GPS_ALTITUDE: &str = "gps-altitude";
/// UTC seconds since the epoch.
pub const GPS_TIMESTAMP: &str = "gps-timestamp";
pub const GPS_PROCESSING_METHOD: &str = "gps-processing-method";

// 3A and image processing.
pub const WHITE_BALANCE: &str = "whitebalance";
pub const SUPPORTED_WHITE_BALANCE: &str = "whitebalance-values";
pub const EFFECT: &str = "effect";
pub const SUPPORTED_EFFECTS: &str = "effect-values";
pub const ANTIBANDING: &str = "antibanding";
pub const SUPPORTED_ANTIBANDING: &str = "antibanding-values";
pub const SCENE_MODE: &str = "scene-mode";
pub const SUPPORTED_SCENE_MODES: &str = "scene-mode-values";
pub const FLASH_MODE: &str = "flash-mode";
pub const SUPPORTED_FLASH_MODES: &str = "flash-mode-values";
pub const FOCUS_MODE: &str = "focus-mode";
pub const SUPPORTED_FOCUS_MODES: &str = "focus-mode-values";
pub const MAX_NUM_FOCUS_AREAS: &str = "max-num-focus-areas";
/// Focus areas as `(left,top,right,bottom,weight)` tuples.
pub const FOCUS_AREAS: &str = "focus-areas";
pub const FOCAL_LENGTH: &str = "focal-length";
pub const HORIZONTAL_VIEW_ANGLE: &str = "horizontal-view-angle";
pub const VERTICAL_VIEW_ANGLE: &str = "vertical-view-angle";
pub const EXPOSURE_COMPENSATION: &str = "exposure-compensation";
pub const MAX_EXPOSURE_COMPENSATION: &str = "max-exposure-compensation";
pub const MIN_EXPOSURE_COMPENSATION: &str = "min-exposure-compensation";
pub const EXPOSURE_COMPENSATION_STEP: &str = "exposure-compensation-step";
pub const AUTO_EXPOSURE_LOCK: &str = "auto-exposure-lock";
pub const AUTO_EXPOSURE_LOCK_SUPPORTED: &str = "auto-exposure-lock-supported";
pub const AUTO_WHITEBALANCE_LOCK: &str = "auto-whitebalance-lock";
pub const AUTO_WHITEBALANCE_LOCK_SUPPORTED: &str = "auto-whitebalance-lock-supported";
pub const MAX_NUM_METERING_AREAS: &str = "max-num-metering-areas";
pub const METERING_AREAS: &str = "metering-areas";

// Zoom.
pub const ZOOM: &str = "zoom";
pub const MAX_ZOOM: &str = "max-zoom";
/// Zoom ratios scaled by 100, one per zoom step.
pub const ZOOM_RATIOS: &str = "zoom-ratios";
pub const ZOOM_SUPPORTED: &str = "zoom-supported";
pub const SMOOTH_ZOOM_SUPPORTED: &str = "smooth-zoom-supported";
pub const FOCUS_DISTANCES: &str = "focus-distances";

// Video.
pub const VIDEO_FRAME_FORMAT: &str = "video-frame-format";
/// Recording dimensions, `"{width}x{height}"`.
pub const VIDEO_SIZE: &str = "video-size";
pub const SUPPORTED_VIDEO_SIZES: &str = "video-size-values";
/// Preview size the driver prefers while recording. Read-only.
pub const PREFERRED_PREVIEW_SIZE_FOR_VIDEO: &str = "preferred-preview-size-for-video";
pub const MAX_NUM_DETECTED_FACES_HW: &str = "max-num-detected-faces-hw";
pub const MAX_NUM_DETECTED_FACES_SW: &str = "max-num-detected-faces-sw";
/// Hint that the client is about to record video.
pub const RECORDING_HINT: &str = "recording-hint";
pub const VIDEO_SNAPSHOT_SUPPORTED: &str = "video-snapshot-supported";
pub const VIDEO_STABILIZATION: &str = "video-stabilization";
pub const VIDEO_STABILIZATION_SUPPORTED: &str = "video-stabilization-supported";
pub const LIGHTFX: &str = "light-fx";
