//! Punycode (RFC 3492) applied per domain label, IDNA style.
//!
//! Only labels that contain non-ASCII characters are encoded; they get the
//! `xn--` ACE prefix. Decoding converts every `xn--` label back and leaves
//! the rest alone.

use crate::{CodecError, Scheme, TransformOptions};

const BASE: u32 = 36;
const TMIN: u32 = 1;
const TMAX: u32 = 26;
const SKEW: u32 = 38;
const DAMP: u32 = 700;
const INITIAL_BIAS: u32 = 72;
const INITIAL_N: u32 = 128;
const ACE_PREFIX: &str = "xn--";

pub(crate) fn punycode_encode(text: &str, _: &TransformOptions) -> Result<String, CodecError> {
    let labels = text
        .split('.')
        .map(|label| {
            if label.is_ascii() {
                Ok(label.to_owned())
            } else {
                encode_label(label)
                    .map(|encoded| format!("{ACE_PREFIX}{encoded}"))
                    .ok_or_else(|| CodecError::malformed(Scheme::Punycode, "label overflow"))
            }
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(labels.join("."))
}

pub(crate) fn punycode_decode(text: &str, _: &TransformOptions) -> Result<String, CodecError> {
    let labels = text
        .split('.')
        .map(|label| match label.get(..ACE_PREFIX.len()) {
            Some(prefix) if prefix.eq_ignore_ascii_case(ACE_PREFIX) => {
                decode_label(&label[ACE_PREFIX.len()..])
                    .map_err(|reason| CodecError::malformed(Scheme::Punycode, reason))
            }
            _ => Ok(label.to_owned()),
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(labels.join("."))
}

fn adapt(mut delta: u32, num_points: u32, first_time: bool) -> u32 {
    delta = if first_time { delta / DAMP } else { delta / 2 };
    delta += delta / num_points;
    let mut k = 0;
    while delta > ((BASE - TMIN) * TMAX) / 2 {
        delta /= BASE - TMIN;
        k += BASE;
    }
    k + (BASE - TMIN + 1) * delta / (delta + SKEW)
}

fn threshold(k: u32, bias: u32) -> u32 {
    if k <= bias {
        TMIN
    } else if k >= bias + TMAX {
        TMAX
    } else {
        k - bias
    }
}

fn encode_digit(d: u32) -> Option<char> {
    match d {
        0..=25 => char::from_u32(u32::from(b'a') + d),
        26..=35 => char::from_u32(u32::from(b'0') + d - 26),
        _ => None,
    }
}

fn decode_digit(byte: u8) -> Option<u32> {
    match byte {
        b'0'..=b'9' => Some(u32::from(byte - b'0') + 26),
        b'A'..=b'Z' => Some(u32::from(byte - b'A')),
        b'a'..=b'z' => Some(u32::from(byte - b'a')),
        _ => None,
    }
}

/// Encodes one label. `None` on arithmetic overflow.
fn encode_label(input: &str) -> Option<String> {
    let code_points: Vec<u32> = input.chars().map(u32::from).collect();
    let mut output: String = input.chars().filter(char::is_ascii).collect();
    let basic = u32::try_from(output.len()).ok()?;
    let total = u32::try_from(code_points.len()).ok()?;
    if basic > 0 {
        output.push('-');
    }

    let mut n = INITIAL_N;
    let mut delta: u32 = 0;
    let mut bias = INITIAL_BIAS;
    let mut handled = basic;

    while handled < total {
        let m = code_points.iter().copied().filter(|&c| c >= n).min()?;
        delta = delta.checked_add((m - n).checked_mul(handled + 1)?)?;
        n = m;
        for &c in &code_points {
            if c < n {
                delta = delta.checked_add(1)?;
            }
            if c == n {
                let mut q = delta;
                let mut k = BASE;
                loop {
                    let t = threshold(k, bias);
                    if q < t {
                        break;
                    }
                    output.push(encode_digit(t + (q - t) % (BASE - t))?);
                    q = (q - t) / (BASE - t);
                    k += BASE;
                }
                output.push(encode_digit(q)?);
                bias = adapt(delta, handled + 1, handled == basic);
                delta = 0;
                handled += 1;
            }
        }
        delta = delta.checked_add(1)?;
        n = n.checked_add(1)?;
    }
    Some(output)
}

/// Decodes one label (without its ACE prefix).
fn decode_label(input: &str) -> Result<String, &'static str> {
    let (basic, extended) = match input.rfind('-') {
        Some(pos) => (&input[..pos], &input[pos + 1..]),
        None => ("", input),
    };
    if !basic.is_ascii() {
        return Err("basic code points must be ASCII");
    }

    let mut output: Vec<char> = basic.chars().collect();
    let mut n = INITIAL_N;
    let mut i: u32 = 0;
    let mut bias = INITIAL_BIAS;
    let mut digits = extended.bytes().peekable();

    while digits.peek().is_some() {
        let old_i = i;
        let mut w: u32 = 1;
        let mut k = BASE;
        loop {
            let byte = digits.next().ok_or("truncated digit sequence")?;
            let digit = decode_digit(byte).ok_or("invalid digit")?;
            i = digit
                .checked_mul(w)
                .and_then(|step| i.checked_add(step))
                .ok_or("overflow")?;
            let t = threshold(k, bias);
            if digit < t {
                break;
            }
            w = w.checked_mul(BASE - t).ok_or("overflow")?;
            k += BASE;
        }
        let len = u32::try_from(output.len() + 1).map_err(|_| "label too long")?;
        bias = adapt(i - old_i, len, old_i == 0);
        n = n.checked_add(i / len).ok_or("overflow")?;
        i %= len;
        let c = char::from_u32(n).ok_or("invalid code point")?;
        let at = usize::try_from(i).map_err(|_| "overflow")?;
        output.insert(at, c);
        i += 1;
    }
    Ok(output.into_iter().collect())
}
