//! Value strings for the standard keys.

/// Boolean `true` as stored in parameter values.
pub const TRUE: &str = "true";
/// Boolean `false` as stored in parameter values.
pub const FALSE: &str = "false";
/// Focus distance reported for infinity focus.
pub const FOCUS_DISTANCE_INFINITY: &str = "Infinity";

// Values for `keys::WHITE_BALANCE`.
pub const WHITE_BALANCE_AUTO: &str = "auto";
pub const WHITE_BALANCE_INCANDESCENT: &str = "incandescent";
pub const WHITE_BALANCE_FLUORESCENT: &str = "fluorescent";
pub const WHITE_BALANCE_WARM_FLUORESCENT: &str = "warm-fluorescent";
pub const WHITE_BALANCE_DAYLIGHT: &str = "daylight";
pub const WHITE_BALANCE_CLOUDY_DAYLIGHT: &str = "cloudy-daylight";
pub const WHITE_BALANCE_TWILIGHT: &str = "twilight";
pub const WHITE_BALANCE_SHADE: &str = "shade";

// Values for `keys::EFFECT`.
pub const EFFECT_NONE: &str = "none";
pub const EFFECT_MONO: &str = "mono";
pub const EFFECT_NEGATIVE: &str = "negative";
pub const EFFECT_SOLARIZE: &str = "solarize";
pub const EFFECT_SEPIA: &str = "sepia";
pub const EFFECT_POSTERIZE: &str = "posterize";
pub const EFFECT_WHITEBOARD: &str = "whiteboard";
pub const EFFECT_BLACKBOARD: &str = "blackboard";
pub const EFFECT_AQUA: &str = "aqua";

// Values for `keys::ANTIBANDING`.
pub const ANTIBANDING_AUTO: &str = "auto";
pub const ANTIBANDING_50HZ: &str = "50hz";
pub const ANTIBANDING_60HZ: &str = "60hz";
pub const ANTIBANDING_OFF: &str = "off";

// Values for `keys::FLASH_MODE`.
pub const FLASH_MODE_OFF: &str = "off";
pub const FLASH_MODE_AUTO: &str = "auto";
pub const FLASH_MODE_ON: &str = "on";
pub const FLASH_MODE_RED_EYE: &str = "red-eye";
pub const FLASH_MODE_TORCH: &str = "torch";

// Values for `keys::SCENE_MODE`.
pub const SCENE_MODE_AUTO: &str = "auto";
pub const SCENE_MODE_ACTION: &str = "action";
pub const SCENE_MODE_PORTRAIT: &str = "portrait";
pub const SCENE_MODE_LANDSCAPE: &str = "landscape";
pub const SCENE_MODE_NIGHT: &str = "night";
pub const SCENE_MODE_NIGHT_PORTRAIT: &str = "night-portrait";
pub const SCENE_MODE_THEATRE: &str = "theatre";
pub const SCENE_MODE_BEACH: &str = "beach";
pub const SCENE_MODE_SNOW: &str = "snow";
pub const SCENE_MODE_SUNSET: &str = "sunset";
pub const SCENE_MODE_STEADYPHOTO: &str = "steadyphoto";
pub const SCENE_MODE_FIREWORKS: &str = "fireworks";
pub const SCENE_MODE_SPORTS: &str = "sports";
pub const SCENE_MODE_PARTY: &str = "party";
pub const SCENE_MODE_CANDLELIGHT: &str = "candlelight";
pub const SCENE_MODE_BARCODE: &str = "barcode";
pub const SCENE_MODE_HDR: &str = "hdr";

// Values for `keys::LIGHTFX`.
pub const LIGHTFX_LOWLIGHT: &str = "low-light";
pub const LIGHTFX_HDR: &str = "high-dynamic-range";

// Values for `keys::FOCUS_MODE`.
pub const FOCUS_MODE_AUTO: &str = "auto";
pub const FOCUS_MODE_INFINITY: &str = "infinity";
pub const FOCUS_MODE_MACRO: &str = "macro";
pub const FOCUS_MODE_FIXED: &str = "fixed";
pub const FOCUS_MODE_EDOF: &str = "edof";
pub const FOCUS_MODE_CONTINUOUS_VIDEO: &str = "continuous-video";
pub const FOCUS_MODE_CONTINUOUS_PICTURE: &str = "continuous-picture";

// Pixel format names for `keys::PREVIEW_FORMAT`, `keys::PICTURE_FORMAT` and
// `keys::VIDEO_FRAME_FORMAT`.
/// YV12 planar layout.
pub const PIXEL_FORMAT_YUV420P: &str = "yuv420p";
/// NV21, the default preview format.
pub const PIXEL_FORMAT_YUV420SP: &str = "yuv420sp";
/// YUY2 interleaved.
pub const PIXEL_FORMAT_YUV422I: &str = "yuv422i-yuyv";
/// NV16.
pub const PIXEL_FORMAT_YUV422SP: &str = "yuv422sp";
pub const PIXEL_FORMAT_RGB565: &str = "rgb565";
pub const PIXEL_FORMAT_RGBA8888: &str = "rgba8888";
pub const PIXEL_FORMAT_JPEG: &str = "jpeg";
/// Raw sensor data.
pub const PIXEL_FORMAT_BAYER_RGGB: &str = "bayer-rggb";
/// Opaque format chosen by the HAL.
pub const PIXEL_FORMAT_ANDROID_OPAQUE: &str = "android-opaque";
