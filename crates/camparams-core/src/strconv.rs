//! Lenient numeric prefix parsing with C `strtol`/`strtof` semantics.
//!
//! Both scanners return the parsed value together with the number of bytes
//! consumed. A consumed length of zero means no number was found, in which
//! case the value is zero.

/// Whitespace skipped before a number (the C `isspace` set).
fn is_c_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

fn skip_space(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && is_c_space(bytes[pos]) {
        pos += 1;
    }
    pos
}

fn skip_sign(bytes: &[u8], pos: usize) -> (bool, usize) {
    match bytes.get(pos) {
        Some(b'-') => (true, pos + 1),
        Some(b'+') => (false, pos + 1),
        _ => (false, pos),
    }
}

fn digit_value(byte: u8) -> Option<u32> {
    (byte as char).to_digit(36)
}

/// Parse the longest integer prefix of `text`.
///
/// `base` is either 0 (auto-detect `0x` hex, leading-zero octal, decimal) or
/// a radix in `2..=36`. Out of range magnitudes saturate to `i64::MIN` /
/// `i64::MAX`.
pub fn parse_long(text: &str, base: u32) -> (i64, usize) {
    let bytes = text.as_bytes();
    let start = skip_space(bytes, 0);
    let (negative, mut pos) = skip_sign(bytes, start);

    let has_hex_prefix = bytes.get(pos) == Some(&b'0')
        && matches!(bytes.get(pos + 1), Some(b'x') | Some(b'X'))
        && bytes
            .get(pos + 2)
            .is_some_and(|b| b.is_ascii_hexdigit());

    let radix = match base {
        0 if has_hex_prefix => 16,
        0 if bytes.get(pos) == Some(&b'0') => 8,
        0 => 10,
        16 => 16,
        2..=36 => base,
        _ => return (0, 0),
    };
    if radix == 16 && has_hex_prefix {
        pos += 2;
    }

    let digits_start = pos;
    let mut magnitude: u64 = 0;
    let mut overflow = false;
    while let Some(digit) = bytes
        .get(pos)
        .and_then(|b| digit_value(*b))
        .filter(|d| *d < radix)
    {
        match magnitude
            .checked_mul(u64::from(radix))
            .and_then(|m| m.checked_add(u64::from(digit)))
        {
            Some(next) => magnitude = next,
            None => overflow = true,
        }
        pos += 1;
    }
    if pos == digits_start {
        return (0, 0);
    }

    let value = if negative {
        if overflow || magnitude > i64::MAX as u64 + 1 {
            i64::MIN
        } else {
            (magnitude as i64).wrapping_neg()
        }
    } else if overflow || magnitude > i64::MAX as u64 {
        i64::MAX
    } else {
        magnitude as i64
    };
    (value, pos)
}

/// [`parse_long`] narrowed to `i32` the way a C `long` to `int` cast does.
pub fn parse_int(text: &str, base: u32) -> (i32, usize) {
    let (value, used) = parse_long(text, base);
    (value as i32, used)
}

fn strip_prefix_ignore_case(bytes: &[u8], pos: usize, word: &str) -> Option<usize> {
    let end = pos + word.len();
    let candidate = bytes.get(pos..end)?;
    candidate
        .eq_ignore_ascii_case(word.as_bytes())
        .then_some(end)
}

/// Parse the longest floating point prefix of `text`.
///
/// Accepts decimal mantissas with an optional exponent, hexadecimal
/// mantissas (`0x1.8p3`) with an optional binary exponent, and `inf`,
/// `infinity` and `nan` in any case.
pub fn parse_float(text: &str) -> (f32, usize) {
    let bytes = text.as_bytes();
    let start = skip_space(bytes, 0);
    let (negative, pos) = skip_sign(bytes, start);
    let signed = |value: f32| if negative { -value } else { value };

    if let Some(end) = strip_prefix_ignore_case(bytes, pos, "infinity")
        .or_else(|| strip_prefix_ignore_case(bytes, pos, "inf"))
    {
        return (signed(f32::INFINITY), end);
    }
    if let Some(mut end) = strip_prefix_ignore_case(bytes, pos, "nan") {
        // Optional `(n-char-sequence)` payload.
        if bytes.get(end) == Some(&b'(') {
            let payload = bytes[end + 1..]
                .iter()
                .position(|b| !(b.is_ascii_alphanumeric() || *b == b'_'));
            if let Some(len) = payload {
                if bytes.get(end + 1 + len) == Some(&b')') {
                    end += len + 2;
                }
            }
        }
        return (signed(f32::NAN), end);
    }

    if let Some((value, end)) = parse_hex_float(bytes, pos) {
        return (signed(value), end);
    }

    let mut end = pos;
    let int_digits = count_digits(bytes, end);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(bytes, end + 1);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return (0.0, 0);
    }
    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let (_, exp_start) = skip_sign(bytes, end + 1);
        let exp_digits = count_digits(bytes, exp_start);
        if exp_digits > 0 {
            end = exp_start + exp_digits;
        }
    }

    let value = text[pos..end].parse::<f32>().unwrap_or(0.0);
    (signed(value), end)
}

/// Hexadecimal float starting at `pos`: `0x`, hex digits with an optional
/// `.fraction`, then an optional `p[+-]digits` power of two. `None` when no
/// hex digit follows the prefix.
fn parse_hex_float(bytes: &[u8], pos: usize) -> Option<(f32, usize)> {
    if bytes.get(pos) != Some(&b'0') || !matches!(bytes.get(pos + 1), Some(b'x') | Some(b'X')) {
        return None;
    }
    let int_start = pos + 2;
    let int_digits = count_hex_digits(bytes, int_start);
    let mut end = int_start + int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_hex_digits(bytes, end + 1);
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    let mut mantissa = 0f64;
    let mut exponent: i32 = 0;
    for byte in &bytes[int_start..end] {
        mantissa = mantissa * 16.0 + f64::from(digit_value(*byte).unwrap_or(0));
    }
    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        for byte in &bytes[frac_start..frac_start + frac_digits] {
            mantissa = mantissa * 16.0 + f64::from(digit_value(*byte).unwrap_or(0));
            exponent = exponent.saturating_sub(4);
        }
        end = frac_start + frac_digits;
    }

    if matches!(bytes.get(end), Some(b'p') | Some(b'P')) {
        let (negative, exp_start) = skip_sign(bytes, end + 1);
        let exp_digits = count_digits(bytes, exp_start);
        if exp_digits > 0 {
            let power = bytes[exp_start..exp_start + exp_digits]
                .iter()
                .fold(0i32, |acc, b| {
                    acc.saturating_mul(10).saturating_add(i32::from(b - b'0'))
                });
            exponent = if negative {
                exponent.saturating_sub(power)
            } else {
                exponent.saturating_add(power)
            };
            end = exp_start + exp_digits;
        }
    }

    // Two steps keep large mantissas with very negative exponents finite.
    let exponent = exponent.clamp(-4000, 4000);
    let half = exponent / 2;
    let value = mantissa * 2f64.powi(half) * 2f64.powi(exponent - half);
    Some((value as f32, end))
}

fn count_hex_digits(bytes: &[u8], pos: usize) -> usize {
    bytes.get(pos..).map_or(0, |rest| {
        rest.iter().take_while(|b| b.is_ascii_hexdigit()).count()
    })
}

fn count_digits(bytes: &[u8], pos: usize) -> usize {
    bytes
        .get(pos..)
        .map_or(0, |rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
}
