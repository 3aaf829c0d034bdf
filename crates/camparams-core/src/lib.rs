//! Camera parameter container: an ordered string map with a flattened text
//! form and typed accessors.
//!
//! ```
//! use camparams_core::{CameraParameters, Size};
//!
//! let mut params: CameraParameters = "preview-size=640x480;preview-format=yuv420sp"
//!     .parse()
//!     .unwrap();
//! assert_eq!(params.preview_size(), Size::new(640, 480));
//! params.set_preview_frame_rate(30);
//! assert_eq!(
//!     params.flatten(),
//!     "preview-size=640x480;preview-format=yuv420sp;preview-frame-rate=30"
//! );
//! ```

pub mod checked;
pub mod sizes;
pub mod strconv;

use std::convert::Infallible;
use std::fmt;
use std::io;
use std::str::FromStr;

use cpnc::keys;
use halfmt::{HalPixelFormat, UNKNOWN_FORMAT_CODE};
use indexmap::IndexMap;
use tracing::{debug, warn};

pub use checked::ParamError;
pub use sizes::{parse_pair, parse_sizes_list, PairError, Size};

/// Separates a key from its value in the flattened form.
pub const FIELD_SEPARATOR: char = '=';
/// Separates entries in the flattened form.
pub const ENTRY_SEPARATOR: char = ';';

/// Separator inside list-valued parameters such as `preview-format-values`.
const ENTRY_LIST_SEPARATOR: char = ',';

/// Longest `set_float` rendering before switching to exponent notation.
const MAX_FLOAT_WIDTH: usize = 15;

/// Ordered `key -> value` parameter map exchanged with the camera driver.
///
/// Iteration and flatten order is insertion order. Equality compares the
/// mappings only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        into = "IndexMap<String, String>",
        from = "IndexMap<String, String>"
    )
)]
pub struct CameraParameters {
    map: IndexMap<String, String>,
}

fn has_separator(text: &str) -> bool {
    text.contains([FIELD_SEPARATOR, ENTRY_SEPARATOR])
}

impl CameraParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialize all entries as `k1=v1;k2=v2;...` without a trailing `;`.
    pub fn flatten(&self) -> String {
        let mut flattened = String::new();
        for (idx, (key, value)) in self.map.iter().enumerate() {
            if idx > 0 {
                flattened.push(ENTRY_SEPARATOR);
            }
            flattened.push_str(key);
            flattened.push(FIELD_SEPARATOR);
            flattened.push_str(value);
        }
        flattened
    }

    /// Replace the contents with the entries of a flattened string.
    ///
    /// Scanning stops at the first point where no further `=` exists. A final
    /// entry without a trailing `;` takes the rest of the text as its value.
    /// Later duplicates of a key overwrite earlier ones.
    pub fn unflatten(&mut self, params: &str) {
        self.map.clear();
        let mut rest = params;
        while let Some(eq) = rest.find(FIELD_SEPARATOR) {
            let key = &rest[..eq];
            let tail = &rest[eq + 1..];
            match tail.find(ENTRY_SEPARATOR) {
                Some(semi) => {
                    self.put(key, &tail[..semi]);
                    rest = &tail[semi + 1..];
                }
                None => {
                    self.put(key, tail);
                    break;
                }
            }
        }
        debug!(entries = self.map.len(), "unflattened parameters");
    }

    fn put(&mut self, key: &str, value: &str) {
        self.map.insert(key.to_string(), value.to_string());
    }

    /// Insert or overwrite `key`.
    ///
    /// Keys or values containing `=` or `;` are dropped without touching the
    /// map.
    pub fn set(&mut self, key: &str, value: &str) {
        if has_separator(key) {
            debug!(key, "dropping parameter key with reserved character");
            return;
        }
        if has_separator(value) {
            debug!(key, value, "dropping parameter value with reserved character");
            return;
        }
        self.put(key, value);
    }

    /// [`set`](Self::set) for callers holding optional strings; a missing key
    /// or value is a no-op.
    pub fn set_opt(&mut self, key: Option<&str>, value: Option<&str>) {
        if let (Some(key), Some(value)) = (key, value) {
            self.set(key, value);
        }
    }

    pub fn set_int(&mut self, key: &str, value: i32) {
        self.set(key, &value.to_string());
    }

    /// Store a float using its shortest round-trip decimal form.
    pub fn set_float(&mut self, key: &str, value: f32) {
        self.set(key, &format_float(value));
    }

    /// Stored value for `key`. An empty value reads as absent.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.map
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Integer value with C `strtol` base detection, or `-1` when absent.
    ///
    /// Trailing garbage is ignored and text without leading digits reads as
    /// `0`.
    pub fn get_int(&self, key: &str) -> i32 {
        match self.get(key) {
            Some(value) => strconv::parse_int(value, 0).0,
            None => -1,
        }
    }

    /// Float value parsed like C `strtof`, or `-1.0` when absent.
    pub fn get_float(&self, key: &str) -> f32 {
        match self.get(key) {
            Some(value) => strconv::parse_float(value).0,
            None => -1.0,
        }
    }

    pub fn remove(&mut self, key: &str) {
        self.map.shift_remove(key);
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn set_size(&mut self, key: &str, width: i32, height: i32) {
        self.set(key, &Size::new(width, height).to_string());
    }

    /// `WxH` size stored under any key, [`Size::UNSET`] when absent or
    /// malformed.
    pub fn size_for(&self, key: &str) -> Size {
        self.pair_for(key, 'x').into()
    }

    /// Two integers separated by `delim`, `(-1, -1)` when absent or
    /// malformed.
    pub fn pair_for(&self, key: &str, delim: char) -> (i32, i32) {
        let Some(text) = self.get(key) else {
            return (-1, -1);
        };
        match parse_pair(text, delim) {
            Ok((first, second, _)) => (first, second),
            Err(_) => (-1, -1),
        }
    }

    /// `WxH,WxH,...` list stored under any key.
    pub fn sizes_for(&self, key: &str) -> Vec<Size> {
        self.get(key).map(parse_sizes_list).unwrap_or_default()
    }

    pub fn set_preview_size(&mut self, width: i32, height: i32) {
        self.set_size(keys::PREVIEW_SIZE, width, height);
    }

    /// Current preview size, [`Size::UNSET`] when absent or malformed.
    pub fn preview_size(&self) -> Size {
        self.size_for(keys::PREVIEW_SIZE)
    }

    /// Preview size the driver recommends while recording.
    pub fn preferred_preview_size_for_video(&self) -> Size {
        self.size_for(keys::PREFERRED_PREVIEW_SIZE_FOR_VIDEO)
    }

    pub fn supported_preview_sizes(&self) -> Vec<Size> {
        self.sizes_for(keys::SUPPORTED_PREVIEW_SIZES)
    }

    pub fn set_video_size(&mut self, width: i32, height: i32) {
        self.set_size(keys::VIDEO_SIZE, width, height);
    }

    pub fn video_size(&self) -> Size {
        self.size_for(keys::VIDEO_SIZE)
    }

    pub fn supported_video_sizes(&self) -> Vec<Size> {
        self.sizes_for(keys::SUPPORTED_VIDEO_SIZES)
    }

    pub fn set_picture_size(&mut self, width: i32, height: i32) {
        self.set_size(keys::PICTURE_SIZE, width, height);
    }

    pub fn picture_size(&self) -> Size {
        self.size_for(keys::PICTURE_SIZE)
    }

    pub fn supported_picture_sizes(&self) -> Vec<Size> {
        self.sizes_for(keys::SUPPORTED_PICTURE_SIZES)
    }

    pub fn set_preview_frame_rate(&mut self, fps: i32) {
        self.set_int(keys::PREVIEW_FRAME_RATE, fps);
    }

    pub fn preview_frame_rate(&self) -> i32 {
        self.get_int(keys::PREVIEW_FRAME_RATE)
    }

    /// `(min, max)` preview fps range, `(-1, -1)` when absent or malformed.
    pub fn preview_fps_range(&self) -> (i32, i32) {
        self.pair_for(keys::PREVIEW_FPS_RANGE, ',')
    }

    pub fn set_preview_format(&mut self, format: &str) {
        self.set(keys::PREVIEW_FORMAT, format);
    }

    pub fn preview_format(&self) -> Option<&str> {
        self.get(keys::PREVIEW_FORMAT)
    }

    pub fn set_picture_format(&mut self, format: &str) {
        self.set(keys::PICTURE_FORMAT, format);
    }

    pub fn picture_format(&self) -> Option<&str> {
        self.get(keys::PICTURE_FORMAT)
    }

    /// HAL codes of the supported preview formats.
    ///
    /// Names missing from the format table are skipped.
    pub fn supported_preview_formats(&self) -> Vec<i32> {
        self.preview_formats_for(keys::SUPPORTED_PREVIEW_FORMATS)
    }

    /// HAL codes of a comma separated format name list stored under `key`.
    ///
    /// Empty and unknown names are skipped; an absent key logs a warning.
    pub fn preview_formats_for(&self, key: &str) -> Vec<i32> {
        let Some(list) = self.get(key) else {
            warn!(key, "no preview formats listed");
            return Vec::new();
        };
        list.split(ENTRY_LIST_SEPARATOR)
            .filter(|name| !name.is_empty())
            .map(|name| Self::preview_format_to_enum(Some(name)))
            .filter(|code| *code != UNKNOWN_FORMAT_CODE)
            .collect()
    }

    /// Map a preview format name to its HAL code.
    ///
    /// `None` maps to the default NV21 code; unknown names map to `-1`.
    pub fn preview_format_to_enum(format: Option<&str>) -> i32 {
        match format {
            None => HalPixelFormat::DEFAULT_PREVIEW.code(),
            Some(name) => HalPixelFormat::from_format_name(name)
                .map_or(UNKNOWN_FORMAT_CODE, HalPixelFormat::code),
        }
    }

    /// Human readable listing of every entry, also emitted at debug level.
    pub fn dump(&self) -> String {
        debug!(size = self.map.len(), "dump");
        let mut text = format!("CameraParameters::dump: mMap.size = {}\n", self.map.len());
        for (key, value) in &self.map {
            debug!(key = %key, value = %value, "parameter");
            text.push_str(&format!("\t{key}: {value}\n"));
        }
        text
    }

    /// Write the [`dump`](Self::dump) listing to `out`.
    pub fn write_dump<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(self.dump().as_bytes())
    }
}

fn format_float(value: f32) -> String {
    if value.is_nan() {
        return "nan".into();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.into();
    }
    let plain = value.to_string();
    if plain.len() <= MAX_FLOAT_WIDTH {
        plain
    } else {
        format!("{value:e}")
    }
}

impl fmt::Display for CameraParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.flatten())
    }
}

impl FromStr for CameraParameters {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut params = CameraParameters::new();
        params.unflatten(s);
        Ok(params)
    }
}

impl<K: AsRef<str>, V: AsRef<str>> Extend<(K, V)> for CameraParameters {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key.as_ref(), value.as_ref());
        }
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for CameraParameters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = CameraParameters::new();
        params.extend(iter);
        params
    }
}

impl From<IndexMap<String, String>> for CameraParameters {
    fn from(map: IndexMap<String, String>) -> Self {
        map.into_iter().collect()
    }
}

impl From<CameraParameters> for IndexMap<String, String> {
    fn from(params: CameraParameters) -> Self {
        params.map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CameraParameters {
        let mut params = CameraParameters::new();
        params.set_preview_size(640, 480);
        params.set_preview_format("yuv420sp");
        params.set_int("jpeg-quality", 90);
        params.set("whitebalance", "auto");
        params
    }

    #[test]
    fn empty_store_flattens_to_empty_string() {
        let params = CameraParameters::new();
        assert_eq!(params.flatten(), "");
        assert!(params.is_empty());
    }

    #[test]
    fn flatten_uses_insertion_order_without_trailing_separator() {
        assert_eq!(
            sample().flatten(),
            "preview-size=640x480;preview-format=yuv420sp;jpeg-quality=90;whitebalance=auto"
        );
    }

    #[test]
    fn unflatten_roundtrips_flatten() {
        let params = sample();
        let mut copy = CameraParameters::new();
        copy.unflatten(&params.flatten());
        assert_eq!(copy, params);
        assert_eq!(copy.flatten(), params.flatten());
    }

    #[test]
    fn random_stores_roundtrip() {
        const ALPHABET: &[u8] = b"abcxyz0123456789-_.,: ";
        let random_text = |len: usize| -> String {
            (0..len)
                .map(|_| ALPHABET[fastrand::usize(..ALPHABET.len())] as char)
                .collect()
        };
        for _ in 0..128 {
            let mut params = CameraParameters::new();
            for _ in 0..fastrand::usize(..12) {
                let key = random_text(fastrand::usize(1..10));
                let value = random_text(fastrand::usize(..10));
                params.set(&key, &value);
            }
            let copy: CameraParameters = params.flatten().parse().unwrap();
            assert_eq!(copy, params, "flattened: {}", params.flatten());
        }
    }

    #[test]
    fn set_overwrites_in_place() {
        let mut params = sample();
        params.set("preview-format", "rgb565");
        assert_eq!(params.len(), 4);
        assert_eq!(params.preview_format(), Some("rgb565"));
        assert!(params
            .flatten()
            .starts_with("preview-size=640x480;preview-format=rgb565;"));
    }

    #[test]
    fn set_rejects_reserved_characters() {
        let mut params = sample();
        let before = params.clone();
        params.set("a=b", "x");
        params.set("a;b", "x");
        params.set("a", "x;y");
        params.set("a", "x=y");
        params.set_opt(None, Some("x"));
        params.set_opt(Some("a"), None);
        assert_eq!(params, before);
        assert_eq!(params.flatten(), before.flatten());
    }

    #[test]
    fn set_opt_forwards_present_values() {
        let mut params = CameraParameters::new();
        params.set_opt(Some("zoom"), Some("3"));
        assert_eq!(params.get_int("zoom"), 3);
    }

    #[test]
    fn parse_example_string() {
        let mut params = CameraParameters::new();
        params.unflatten("preview-size=640x480;preview-format=yuv420sp");
        assert_eq!(params.preview_size(), Size::new(640, 480));
        assert_eq!(params.preview_format(), Some("yuv420sp"));
    }

    #[test]
    fn unflatten_clears_previous_entries() {
        let mut params = sample();
        params.unflatten("zoom=2");
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("preview-size"), None);
    }

    #[test]
    fn unflatten_duplicate_keys_overwrite() {
        let params: CameraParameters = "a=1;b=2;a=3".parse().unwrap();
        assert_eq!(params.len(), 2);
        assert_eq!(params.get("a"), Some("3"));
        assert_eq!(params.flatten(), "a=3;b=2");
    }

    #[test]
    fn unflatten_degrades_on_malformed_text() {
        let params: CameraParameters = "a=1;junk;b=2;c".parse().unwrap();
        assert_eq!(params.get("a"), Some("1"));
        // `junk;b` is everything between the previous `;` and the next `=`.
        assert_eq!(params.get("junk;b"), Some("2"));
        assert_eq!(params.len(), 2);

        let params: CameraParameters = "no separators here".parse().unwrap();
        assert!(params.is_empty());

        let params: CameraParameters = "a=1;".parse().unwrap();
        assert_eq!(params.flatten(), "a=1");

        let params: CameraParameters = "a=x=y".parse().unwrap();
        assert_eq!(params.get("a"), Some("x=y"));
    }

    #[test]
    fn empty_value_reads_as_absent() {
        let mut params = CameraParameters::new();
        params.set("flash-mode", "");
        assert!(params.contains_key("flash-mode"));
        assert_eq!(params.get("flash-mode"), None);
        assert_eq!(params.get_int("flash-mode"), -1);
        assert_eq!(params.flatten(), "flash-mode=");
    }

    #[test]
    fn missing_keys_yield_sentinels() {
        let params = CameraParameters::new();
        assert_eq!(params.get("missing-key"), None);
        assert_eq!(params.get_int("missing-key"), -1);
        assert_eq!(params.get_float("missing-key"), -1.0);
        assert_eq!(params.preview_size(), Size::UNSET);
        assert_eq!(params.video_size(), Size::UNSET);
        assert_eq!(params.picture_size(), Size::UNSET);
        assert_eq!(params.preferred_preview_size_for_video(), Size::UNSET);
        assert_eq!(params.preview_fps_range(), (-1, -1));
        assert_eq!(params.preview_frame_rate(), -1);
        assert!(params.supported_preview_sizes().is_empty());
        assert!(params.supported_preview_formats().is_empty());
    }

    #[test]
    fn get_int_is_lenient() {
        let params: CameraParameters = "hex=0x1A;oct=010;neg=  -7abc;text=abc;big=4294967297"
            .parse()
            .unwrap();
        assert_eq!(params.get_int("hex"), 26);
        assert_eq!(params.get_int("oct"), 8);
        assert_eq!(params.get_int("neg"), -7);
        assert_eq!(params.get_int("text"), 0);
        assert_eq!(params.get_int("big"), 1);
    }

    #[test]
    fn get_float_reads_hex_values() {
        let params: CameraParameters = "f=0x10;g=0x1p3;h=-0x.8".parse().unwrap();
        assert_eq!(params.get_float("f"), 16.0);
        assert_eq!(params.get_float("g"), 8.0);
        assert_eq!(params.get_float("h"), -0.5);
    }

    #[test]
    fn set_int_and_float_formatting() {
        let mut params = CameraParameters::new();
        params.set_int("exposure-compensation", -2);
        params.set_float("focal-length", 3.5);
        params.set_float("zero", 0.0);
        params.set_float("huge", 3.0e38);
        params.set_float("inf", f32::INFINITY);
        assert_eq!(params.get("exposure-compensation"), Some("-2"));
        assert_eq!(params.get("focal-length"), Some("3.5"));
        assert_eq!(params.get("zero"), Some("0"));
        assert_eq!(params.get("huge"), Some("3e38"));
        assert_eq!(params.get("inf"), Some("inf"));
        assert_eq!(params.get_float("focal-length"), 3.5);
        assert_eq!(params.get_float("huge"), 3.0e38);
        assert_eq!(params.get_float("inf"), f32::INFINITY);
    }

    #[test]
    fn set_float_roundtrips_through_get_float() {
        for _ in 0..256 {
            let value = f32::from_bits(fastrand::u32(..));
            if !value.is_finite() {
                continue;
            }
            let mut params = CameraParameters::new();
            params.set_float("v", value);
            let text = params.get("v").unwrap().to_string();
            assert!(text.len() <= MAX_FLOAT_WIDTH, "{text}");
            assert_eq!(params.get_float("v"), value, "{text}");
        }
    }

    #[test]
    fn size_accessors_roundtrip() {
        let mut params = CameraParameters::new();
        params.set_preview_size(1280, 720);
        params.set_video_size(1920, 1080);
        params.set_picture_size(4000, 3000);
        assert_eq!(params.preview_size(), Size::new(1280, 720));
        assert_eq!(params.video_size(), Size::new(1920, 1080));
        assert_eq!(params.picture_size(), Size::new(4000, 3000));
        assert_eq!(params.get("picture-size"), Some("4000x3000"));
    }

    #[test]
    fn malformed_size_reads_as_unset() {
        let params: CameraParameters = "preview-size=640*480;video-size=1280x"
            .parse()
            .unwrap();
        assert_eq!(params.preview_size(), Size::UNSET);
        assert_eq!(params.video_size(), Size::new(1280, 0));
    }

    #[test]
    fn preferred_preview_size_is_read_only_key() {
        let params: CameraParameters = "preferred-preview-size-for-video=960x540"
            .parse()
            .unwrap();
        assert_eq!(params.preferred_preview_size_for_video(), Size::new(960, 540));
    }

    #[test]
    fn supported_size_lists() {
        let params: CameraParameters = concat!(
            "preview-size-values=320x240,640x480,invalid;",
            "video-size-values=1920x1080,1280x720;",
            "picture-size-values=4000x3000"
        )
        .parse()
        .unwrap();
        assert_eq!(
            params.supported_preview_sizes(),
            vec![Size::new(320, 240), Size::new(640, 480)]
        );
        assert_eq!(
            params.supported_video_sizes(),
            vec![Size::new(1920, 1080), Size::new(1280, 720)]
        );
        assert_eq!(params.supported_picture_sizes(), vec![Size::new(4000, 3000)]);
    }

    #[test]
    fn frame_rate_and_fps_range() {
        let mut params: CameraParameters = "preview-fps-range=15000,30000".parse().unwrap();
        params.set_preview_frame_rate(30);
        assert_eq!(params.preview_frame_rate(), 30);
        assert_eq!(params.preview_fps_range(), (15000, 30000));

        params.set("preview-fps-range", "15000-30000");
        assert_eq!(params.preview_fps_range(), (-1, -1));
    }

    #[test]
    fn picture_format_accessors() {
        let mut params = CameraParameters::new();
        params.set_picture_format("jpeg");
        assert_eq!(params.picture_format(), Some("jpeg"));
        assert_eq!(params.preview_format(), None);
    }

    #[test]
    fn supported_preview_formats_skip_unknown_names() {
        let params: CameraParameters = "preview-format-values=yuv420sp,bogus,rgb565"
            .parse()
            .unwrap();
        assert_eq!(params.supported_preview_formats(), vec![0x11, 0x04]);

        let params: CameraParameters = "preview-format-values=,yuv420p,,".parse().unwrap();
        assert_eq!(params.supported_preview_formats(), vec![0x3231_5659]);
    }

    #[test]
    fn keyed_helpers_match_typed_accessors() {
        let params: CameraParameters = concat!(
            "preview-size=640x480;preview-format-values=yuv420sp,bogus;",
            "custom-size=32x16;custom-formats=rgb565,,rgba8888;custom-range=1,2"
        )
        .parse()
        .unwrap();
        assert_eq!(params.size_for("preview-size"), params.preview_size());
        assert_eq!(params.size_for("custom-size"), Size::new(32, 16));
        assert_eq!(params.pair_for("custom-range", ','), (1, 2));
        assert_eq!(params.pair_for("custom-size", ','), (-1, -1));
        assert_eq!(
            params.preview_formats_for("preview-format-values"),
            params.supported_preview_formats()
        );
        assert_eq!(params.preview_formats_for("custom-formats"), vec![0x04, 0x01]);
        assert!(params.preview_formats_for("absent").is_empty());
        assert!(params.sizes_for("absent").is_empty());
    }

    #[test]
    fn preview_format_lookup_sentinels_differ() {
        let default = CameraParameters::preview_format_to_enum(None);
        let unknown = CameraParameters::preview_format_to_enum(Some("totally-unknown"));
        assert_eq!(default, HalPixelFormat::YCrCb420Sp.code());
        assert_eq!(unknown, -1);
        assert_ne!(default, unknown);
        assert_eq!(
            CameraParameters::preview_format_to_enum(Some("bayer-rggb")),
            HalPixelFormat::Raw16.code()
        );
    }

    #[test]
    fn remove_keeps_order_of_remaining_entries() {
        let mut params = sample();
        params.remove("preview-format");
        params.remove("not-there");
        assert_eq!(
            params.flatten(),
            "preview-size=640x480;jpeg-quality=90;whitebalance=auto"
        );
    }

    #[test]
    fn dump_lists_every_entry() {
        let mut params = CameraParameters::new();
        params.set("zoom", "2");
        params.set("effect", "mono");
        let expected = "CameraParameters::dump: mMap.size = 2\n\tzoom: 2\n\teffect: mono\n";
        assert_eq!(params.dump(), expected);
        let mut out = Vec::new();
        params.write_dump(&mut out).expect("write dump");
        assert_eq!(out, expected.as_bytes());
    }

    #[test]
    fn collect_routes_through_set() {
        let params: CameraParameters = [("a", "1"), ("bad=key", "2"), ("a", "3")]
            .into_iter()
            .collect();
        assert_eq!(params.flatten(), "a=3");
        assert_eq!(params.to_string(), "a=3");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_json_uses_a_plain_object() {
        let params = sample();
        let json = serde_json::to_string(&params).expect("serialize");
        assert_eq!(
            json,
            r#"{"preview-size":"640x480","preview-format":"yuv420sp","jpeg-quality":"90","whitebalance":"auto"}"#
        );
        let back: CameraParameters =
            serde_json::from_str(r#"{"a":"1","b;":"2"}"#).expect("deserialize");
        assert_eq!(back.flatten(), "a=1");
    }
}
