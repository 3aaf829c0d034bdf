//! Vendor extension keys and values.

// Client application mode.
/// System property naming the client application mode.
pub const PROPERTY_KEY_CLIENT_APPMODE: &str = "client.appmode";
pub const APP_MODE_NAME_DEFAULT: &str = "Default";
pub const APP_MODE_NAME_MTK_ENG: &str = "MtkEng";
pub const APP_MODE_NAME_MTK_ATV: &str = "MtkAtv";
pub const APP_MODE_NAME_MTK_S3D: &str = "MtkS3d";
pub const APP_MODE_NAME_MTK_VT: &str = "MtkVt";
pub const APP_MODE_NAME_MTK_PHOTO: &str = "MtkPhoto";
pub const APP_MODE_NAME_MTK_VIDEO: &str = "MtkVideo";
pub const APP_MODE_NAME_MTK_ZSD: &str = "MtkZsd";

// Extra scene mode.
pub const SCENE_MODE_NORMAL: &str = "normal";

// Face beauty.
pub const KEY_FB_SMOOTH_LEVEL: &str = "fb-smooth-level";
pub const KEY_FB_SMOOTH_LEVEL_MIN: &str = "fb-smooth-level-min";
pub const KEY_FB_SMOOTH_LEVEL_MAX: &str = "fb-smooth-level-max";
pub const KEY_FB_SKIN_COLOR: &str = "fb-skin-color";
pub const KEY_FB_SKIN_COLOR_MIN: &str = "fb-skin-color-min";
pub const KEY_FB_SKIN_COLOR_MAX: &str = "fb-skin-color-max";
pub const KEY_FB_SHARP: &str = "fb-sharp";
pub const KEY_FB_SHARP_MIN: &str = "fb-sharp-min";
pub const KEY_FB_SHARP_MAX: &str = "fb-sharp-max";
pub const KEY_FB_ENLARGE_EYE: &str = "fb-enlarge-eye";
pub const KEY_FB_ENLARGE_EYE_MIN: &str = "fb-enlarge-eye-min";
pub const KEY_FB_ENLARGE_EYE_MAX: &str = "fb-enlarge-eye-max";
pub const KEY_FB_SLIM_FACE: &str = "fb-slim-face";
pub const KEY_FB_SLIM_FACE_MIN: &str = "fb-slim-face-min";
pub const KEY_FB_SLIM_FACE_MAX: &str = "fb-slim-face-max";
pub const KEY_FB_EXTREME_BEAUTY: &str = "fb-extreme-beauty";
pub const KEY_FACE_BEAUTY: &str = "face-beauty";

// Exposure, ISO and image tuning.
pub const KEY_EXPOSURE: &str = "exposure";
pub const KEY_EXPOSURE_METER: &str = "exposure-meter";
pub const KEY_ISO_SPEED: &str = "iso-speed";
pub const KEY_AE_MODE: &str = "ae-mode";
pub const KEY_FOCUS_METER: &str = "focus-meter";
pub const KEY_EDGE: &str = "edge";
pub const KEY_HUE: &str = "hue";
pub const KEY_SATURATION: &str = "saturation";
pub const KEY_BRIGHTNESS: &str = "brightness";
pub const KEY_CONTRAST: &str = "contrast";
pub const KEY_AF_LAMP_MODE: &str = "aflamp-mode";
pub const KEY_STEREO_3D_PREVIEW_SIZE: &str = "stereo3d-preview-size";
pub const KEY_STEREO_3D_PICTURE_SIZE: &str = "stereo3d-picture-size";
pub const KEY_STEREO_3D_TYPE: &str = "stereo3d-type";
pub const KEY_STEREO_3D_MODE: &str = "stereo3d-mode";
pub const KEY_STEREO_3D_IMAGE_FORMAT: &str = "stereo3d-image-format";

// Zero shutter delay, fps and capture.
pub const KEY_ZSD_MODE: &str = "zsd-mode";
pub const KEY_SUPPORTED_ZSD_MODE: &str = "zsd-supported";
pub const KEY_FPS_MODE: &str = "fps-mode";
pub const KEY_FOCUS_DRAW: &str = "af-draw";
pub const KEY_CAPTURE_MODE: &str = "cap-mode";
pub const KEY_SUPPORTED_CAPTURE_MODES: &str = "cap-mode-values";
/// File name for captured pictures.
pub const KEY_CAPTURE_PATH: &str = "capfname";
pub const KEY_BURST_SHOT_NUM: &str = "burst-num";
pub const KEY_MATV_PREVIEW_DELAY: &str = "tv-delay";
pub const KEY_PANORAMA_IDX: &str = "pano-idx";
pub const KEY_PANORAMA_DIR: &str = "pano-dir";

// Values for `KEY_EXPOSURE_METER`.
pub const EXPOSURE_METER_SPOT: &str = "spot";
pub const EXPOSURE_METER_CENTER: &str = "center";
pub const EXPOSURE_METER_AVERAGE: &str = "average";

// Values for `KEY_ISO_SPEED`.
pub const ISO_SPEED_AUTO: &str = "auto";
pub const ISO_SPEED_100: &str = "100";
pub const ISO_SPEED_200: &str = "200";
pub const ISO_SPEED_400: &str = "400";
pub const ISO_SPEED_800: &str = "800";
pub const ISO_SPEED_1600: &str = "1600";

// Values for `KEY_FOCUS_METER`.
pub const FOCUS_METER_SPOT: &str = "spot";
pub const FOCUS_METER_MULTI: &str = "multi";

pub const KEY_AWB2PASS: &str = "awb-2pass";

// Camera mode and its values.
pub const KEY_CAMERA_MODE: &str = "mtk-cam-mode";
pub const CAMERA_MODE_NORMAL: i32 = 0;
pub const CAMERA_MODE_MTK_PRV: i32 = 1;
pub const CAMERA_MODE_MTK_VDO: i32 = 2;
pub const CAMERA_MODE_MTK_VT: i32 = 3;

// Values for `KEY_FPS_MODE`.
pub const FPS_MODE_NORMAL: i32 = 0;
pub const FPS_MODE_FIX: i32 = 1;

// Values for `KEY_CAPTURE_MODE`.
pub const CAPTURE_MODE_PANORAMA_SHOT: &str = "panoramashot";
pub const CAPTURE_MODE_BURST_SHOT: &str = "burstshot";
pub const CAPTURE_MODE_NORMAL: &str = "normal";
pub const CAPTURE_MODE_BEST_SHOT: &str = "bestshot";
pub const CAPTURE_MODE_EV_BRACKET_SHOT: &str = "evbracketshot";
pub const CAPTURE_MODE_SMILE_SHOT: &str = "smileshot";
pub const CAPTURE_MODE_MAV_SHOT: &str = "mav";
pub const CAPTURE_MODE_AUTO_PANORAMA_SHOT: &str = "autorama";
pub const CAPTURE_MODE_MOTION_TRACK_SHOT: &str = "motiontrack";
pub const CAPTURE_MODE_HDR_SHOT: &str = "hdr";
pub const CAPTURE_MODE_ASD_SHOT: &str = "asd";
pub const CAPTURE_MODE_ZSD_SHOT: &str = "zsd";
pub const CAPTURE_MODE_PANO_3D: &str = "pano_3d";
pub const CAPTURE_MODE_SINGLE_3D: &str = "single_3d";
pub const CAPTURE_MODE_FACE_BEAUTY: &str = "face_beauty";
pub const CAPTURE_MODE_CONTINUOUS_SHOT: &str = "continuousshot";
pub const CAPTURE_MODE_MULTI_MOTION: &str = "multi_motion";
pub const CAPTURE_MODE_GESTURE_SHOT: &str = "gestureshot";

// Values for `KEY_PANORAMA_DIR`.
pub const PANORAMA_DIR_RIGHT: &str = "right";
pub const PANORAMA_DIR_LEFT: &str = "left";
pub const PANORAMA_DIR_TOP: &str = "top";
pub const PANORAMA_DIR_DOWN: &str = "down";

// Generic switches.
pub const ENABLE: i32 = 1;
pub const DISABLE: i32 = 0;

// Levels for `KEY_EDGE`, `KEY_HUE`, `KEY_SATURATION`, `KEY_BRIGHTNESS` and `KEY_CONTRAST`.
pub const HIGH: &str = "high";
pub const MIDDLE: &str = "middle";
pub const LOW: &str = "low";

// Preview internal format and vendor pixel format names.
/// Pixel format used inside the preview pipeline.
pub const KEY_PREVIEW_INT_FORMAT: &str = "prv-int-fmt";
pub const PIXEL_FORMAT_BAYER8: &str = "bayer8";
pub const PIXEL_FORMAT_BAYER10: &str = "bayer10";
pub const PIXEL_FORMAT_YV12_GPU: &str = "yv12-gpu";
pub const PIXEL_FORMAT_YUV420I: &str = "yuv420i-yyuvyy-3plane";
pub const PIXEL_FORMAT_YUV422I_UYVY: &str = "yuv422i-uyvy";
pub const PIXEL_FORMAT_YUV422I_VYUY: &str = "yuv422i-vyuy";
pub const PIXEL_FORMAT_YUV422I_YVYU: &str = "yuv422i-yvyu";

// ISP, AF and effects.
pub const KEY_BRIGHTNESS_VALUE: &str = "brightness_value";
pub const KEY_ISP_MODE: &str = "isp-mode";
pub const KEY_AF_X: &str = "af-x";
pub const KEY_AF_Y: &str = "af-y";
pub const EFFECT_SEPIA_BLUE: &str = "sepiablue";
pub const EFFECT_SEPIA_GREEN: &str = "sepiagreen";

/// Switch values predating `values::TRUE`/`values::FALSE`.
pub const ON: &str = "on";
pub const OFF: &str = "off";
pub const WHITE_BALANCE_TUNGSTEN: &str = "tungsten";
pub const ISO_SPEED_ENG: &str = "iso-speed-eng";
pub const KEY_RAW_SAVE_MODE: &str = "rawsave-mode";
/// File name for raw dumps.
pub const KEY_RAW_PATH: &str = "rawfname";
pub const KEY_FAST_CONTINUOUS_SHOT: &str = "fast-continuous-shot";
pub const KEY_CSHOT_INDICATOR: &str = "cshot-indicator";

// AF engineering mode.
pub const KEY_FOCUS_ENG_MODE: &str = "afeng-mode";
pub const KEY_FOCUS_ENG_STEP: &str = "afeng-pos";
pub const KEY_FOCUS_ENG_MAX_STEP: &str = "afeng-max-focus-step";
pub const KEY_FOCUS_ENG_MIN_STEP: &str = "afeng-min-focus-step";
pub const KEY_FOCUS_ENG_BEST_STEP: &str = "afeng-best-focus-step";
pub const KEY_RAW_DUMP_FLAG: &str = "afeng_raw_dump_flag";
pub const KEY_PREVIEW_DUMP_RESOLUTION: &str = "preview-dump-resolution";
pub const PREVIEW_DUMP_RESOLUTION_NORMAL: i32 = 0;
pub const PREVIEW_DUMP_RESOLUTION_CROP: i32 = 1;

pub const KEY_MAX_NUM_DETECTED_OBJECT: &str = "max-num-ot";
pub const KEY_VIDEO_HDR: &str = "video-hdr";

// Engineering mode.
pub const KEY_ENG_AE_ENABLE: &str = "eng-ae-enable";
pub const KEY_ENG_PREVIEW_SHUTTER_SPEED: &str = "eng-preview-shutter-speed";
pub const KEY_ENG_PREVIEW_SENSOR_GAIN: &str = "eng-preview-sensor-gain";
pub const KEY_ENG_PREVIEW_ISP_GAIN: &str = "eng-preview-isp-gain";
pub const KEY_ENG_PREVIEW_AE_INDEX: &str = "eng-preview-ae-index";
pub const KEY_ENG_CAPTURE_SENSOR_GAIN: &str = "eng-capture-sensor-gain";
pub const KEY_ENG_CAPTURE_ISP_GAIN: &str = "eng-capture-isp-gain";
pub const KEY_ENG_CAPTURE_SHUTTER_SPEED: &str = "eng-capture-shutter-speed";
pub const KEY_ENG_CAPTURE_ISO: &str = "eng-capture-iso";
pub const KEY_ENG_FLASH_DUTY_VALUE: &str = "eng-flash-duty-value";
pub const KEY_ENG_FLASH_DUTY_MIN: &str = "eng-flash-duty-min";
pub const KEY_ENG_FLASH_DUTY_MAX: &str = "eng-flash-duty-max";
pub const KEY_ENG_ZSD_ENABLE: &str = "eng-zsd-enable";
pub const KEY_SENSOR_TYPE: &str = "sensor-type";
pub const KEY_ENG_PREVIEW_FPS: &str = "eng-preview-fps";
pub const KEY_ENG_MSG: &str = "eng-msg";
/// Sentinel meaning "use the driver default".
pub const KEY_ENG_FLASH_DUTY_DEFAULT_VALUE: i32 = -1;
pub const KEY_ENG_FLASH_STEP_DEFAULT_VALUE: i32 = -1;
pub const KEY_ENG_FLASH_STEP_MIN: &str = "eng-flash-step-min";
pub const KEY_ENG_FLASH_STEP_MAX: &str = "eng-flash-step-max";
pub const KEY_ENG_FOCUS_FULLSCAN_FRAME_INTERVAL: &str = "eng-focus-fullscan-frame-interval";
pub const KEY_ENG_FOCUS_FULLSCAN_FRAME_INTERVAL_MAX: &str = "eng-focus-fullscan-frame-interval-max";
pub const KEY_ENG_FOCUS_FULLSCAN_FRAME_INTERVAL_MIN: &str = "eng-focus-fullscan-frame-interval-min";
pub const KEY_ENG_FOCUS_FULLSCAN_FRAME_INTERVAL_MAX_DEFAULT: i32 = 65535;
pub const KEY_ENG_FOCUS_FULLSCAN_FRAME_INTERVAL_MIN_DEFAULT: i32 = 0;
pub const KEY_ENG_PREVIEW_FRAME_INTERVAL_IN_US: &str = "eng-preview-frame-interval-in-us";
pub const KEY_ENG_PARAMETER1: &str = "key-eng-parameter1";
pub const KEY_ENG_PARAMETER2: &str = "key-eng-parameter2";
pub const KEY_ENG_PARAMETER3: &str = "key-eng-parameter3";
pub const KEY_ENG_SAVE_SHADING_TABLE: &str = "eng-save-shading-table";
pub const KEY_ENG_SHADING_TABLE: &str = "eng-shading-table";
pub const KEY_ENG_SHADING_TABLE_AUTO: i32 = 0;
pub const KEY_ENG_SHADING_TABLE_LOW: i32 = 1;
pub const KEY_ENG_SHADING_TABLE_MIDDLE: i32 = 2;
pub const KEY_ENG_SHADING_TABLE_HIGH: i32 = 3;
pub const KEY_ENG_SHADING_TABLE_TSF: i32 = 4;

// Engineering mode EV calibration.
pub const KEY_ENG_EV_CALBRATION_OFFSET_VALUE: &str = "eng-ev-cal-offset";

// High speed video recording.
pub const KEY_HSVR_PRV_SIZE: &str = "hsvr-prv-size";
pub const KEY_SUPPORTED_HSVR_PRV_SIZE: &str = "hsvr-prv-size-values";
pub const KEY_HSVR_PRV_FPS: &str = "hsvr-prv-fps";
pub const KEY_SUPPORTED_HSVR_PRV_FPS: &str = "hsvr-prv-fps-values";

pub const KEY_DXOEIS_ONOFF: &str = "dxo-eis";
pub const KEY_FIX_EXPOSURE_TIME: &str = "fix-exposure-time";
