//! # 零宽字符隐写核心
//!
//! 载荷格式：
//!
//! ```text
//! BOUNDARY (ZERO|ONE){8,} SEP (ZERO|ONE){8,} SEP ... BOUNDARY
//! ```
//!
//! 每个字节按高位在前写成 `ZERO`/`ONE` 序列并以 `SEP` 结束，整个序列首尾各有一个
//! `BOUNDARY`。载荷插入在载体文本第一个空格之前，没有空格时追加到末尾。

use crate::constants::{ALPHABET, BITS_PER_BYTE, SPLICE_ANCHOR, Symbol};
use crate::error::{CodecError, Result};
use tracing::{debug, warn};

/// 将秘密消息隐藏到载体文本中。
///
/// 每个字符取其第一个 UTF-16 码元作为数值。大于 `0xFF` 的数值不会被截断，
/// 会写出超过 8 位的段，解码时这些段会被丢弃。需要在编码阶段拒绝这类字符时请使用
/// [`encode_strict`]；需要无损隐藏任意字节时请使用 [`encode_bytes`]。
pub fn encode(carrier: &str, secret: &str) -> String {
    let payload = build_payload(secret.chars().map(code_unit));
    splice(carrier, &payload)
}

/// 与 [`encode`] 输出完全相同，但会拒绝空消息以及无法放入单个字节的字符。
///
/// # Errors
///
/// * [`CodecError::EmptySecret`] - 消息为空。
/// * [`CodecError::WideCodePoint`] - 第一个超出 U+00FF 的字符及其位置。
pub fn encode_strict(carrier: &str, secret: &str) -> Result<String> {
    if secret.is_empty() {
        return Err(CodecError::EmptySecret);
    }

    if let Some((index, ch)) = secret
        .chars()
        .enumerate()
        .find(|&(_, ch)| u32::from(ch) > u32::from(u8::MAX))
    {
        return Err(CodecError::WideCodePoint { ch, index });
    }

    Ok(encode(carrier, secret))
}

/// 将任意字节序列无损地隐藏到载体文本中，每个字节恰好对应一个 8 位的段。
pub fn encode_bytes(carrier: &str, secret: &[u8]) -> String {
    let payload = build_payload(secret.iter().map(|&byte| u32::from(byte)));
    splice(carrier, &payload)
}

/// 取字符的第一个 UTF-16 码元。辅助平面字符因此得到其高位代理项。
fn code_unit(ch: char) -> u32 {
    let mut buf = [0u16; 2];
    u32::from(ch.encode_utf16(&mut buf)[0])
}

fn build_payload(values: impl Iterator<Item = u32>) -> String {
    let mut payload = String::new();
    payload.push(ALPHABET.boundary);

    for value in values {
        // 左侧补零到 8 位，更宽的数值保持原宽度
        let width = (u32::BITS - value.leading_zeros()).max(BITS_PER_BYTE as u32);
        for shift in (0..width).rev() {
            payload.push(if (value >> shift) & 1 == 1 {
                ALPHABET.one
            } else {
                ALPHABET.zero
            });
        }
        payload.push(ALPHABET.sep);
    }

    payload.push(ALPHABET.boundary);
    payload
}

fn splice(carrier: &str, payload: &str) -> String {
    let offset = carrier.find(SPLICE_ANCHOR).unwrap_or(carrier.len());
    debug!(
        offset,
        carrier_len = carrier.len(),
        payload_symbols = payload.chars().count(),
        "splicing hidden payload into carrier"
    );

    let mut stego = String::with_capacity(carrier.len() + payload.len());
    stego.push_str(&carrier[..offset]);
    stego.push_str(payload);
    stego.push_str(&carrier[offset..]);
    stego
}

/// 一个未能还原为字节的段：位数不是 8。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedSegment {
    /// 段在载荷中的序号 (忽略空段后从 0 开始计数)。
    pub index: usize,
    /// 段中提取到的位，以 `'0'`/`'1'` 表示。
    pub bits: String,
}

/// 从隐写文本中提取出的消息。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HiddenMessage {
    bytes: Vec<u8>,
    malformed: Vec<MalformedSegment>,
}

impl HiddenMessage {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// 被丢弃的段，按出现顺序排列。
    pub fn malformed(&self) -> &[MalformedSegment] {
        &self.malformed
    }

    pub fn is_lossless(&self) -> bool {
        self.malformed.is_empty()
    }

    /// 每个字节按同值码位解释为字符 (Latin-1)。
    pub fn to_latin1_string(&self) -> String {
        self.bytes.iter().map(|&byte| char::from(byte)).collect()
    }

    pub fn to_utf8_lossy(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }
}

/// 解码结果：找到了边界对，或者文本中没有隐藏消息。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    Found(HiddenMessage),
    NotFound,
}

impl Decoded {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn found(&self) -> Option<&HiddenMessage> {
        match self {
            Self::Found(message) => Some(message),
            Self::NotFound => None,
        }
    }

    pub fn into_bytes(self) -> Option<Vec<u8>> {
        match self {
            Self::Found(message) => Some(message.into_bytes()),
            Self::NotFound => None,
        }
    }
}

/// 从文本中提取隐藏消息。
///
/// 取第一个与最后一个 `BOUNDARY` 之间的内容，按 `SEP` 切分并忽略空段。
/// 每段只保留 `ZERO`/`ONE`，恰好 8 位的段还原为一个字节，其余的段被丢弃并记录在
/// [`HiddenMessage::malformed`] 中。该函数不会因任何输入而失败。
pub fn decode(stego: &str) -> Decoded {
    let boundary = ALPHABET.boundary;
    let (Some(start), Some(end)) = (stego.find(boundary), stego.rfind(boundary)) else {
        return Decoded::NotFound;
    };
    if start == end {
        return Decoded::NotFound;
    }
    debug!(start, end, "found payload boundaries");

    let body = &stego[start + boundary.len_utf8()..end];
    let mut message = HiddenMessage::default();

    for (index, segment) in body
        .split(ALPHABET.sep)
        .filter(|segment| !segment.is_empty())
        .enumerate()
    {
        let bits: String = segment
            .chars()
            .filter_map(|ch| match Symbol::classify(ch) {
                Some(Symbol::Zero) => Some('0'),
                Some(Symbol::One) => Some('1'),
                _ => None,
            })
            .collect();

        if bits.len() == BITS_PER_BYTE {
            let byte = bits
                .bytes()
                .fold(0u8, |acc, bit| (acc << 1) | (bit - b'0'));
            message.bytes.push(byte);
        } else {
            warn!(index, bit_len = bits.len(), "dropping malformed segment");
            message.malformed.push(MalformedSegment { index, bits });
        }
    }

    Decoded::Found(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols(bits: &str) -> String {
        bits.chars()
            .map(|bit| if bit == '1' { ALPHABET.one } else { ALPHABET.zero })
            .collect()
    }

    #[test]
    fn payload_lands_before_first_space() {
        let stego = encode("Hello world again", "HI");
        let payload = build_payload("HI".chars().map(code_unit));
        assert_eq!(stego, format!("Hello{payload} world again"));
    }

    #[test]
    fn payload_appended_without_space() {
        let stego = encode("Hello", "x");
        assert!(stego.starts_with("Hello"));
        assert!(stego.ends_with(ALPHABET.boundary));
        assert_eq!(encode("", "x"), build_payload("x".chars().map(code_unit)));
    }

    #[test]
    fn leading_space_puts_payload_first() {
        let stego = encode(" tail", "a");
        assert!(stego.starts_with(ALPHABET.boundary));
        assert!(stego.ends_with(" tail"));
    }

    #[test]
    fn byte_layout_is_msb_first() {
        // 'A' = 0x41 = 01000001
        let expected = format!(
            "{b}{bits}{sep}{b}",
            b = ALPHABET.boundary,
            bits = symbols("01000001"),
            sep = ALPHABET.sep
        );
        assert_eq!(encode("", "A"), expected);
    }

    #[test]
    fn nul_character_is_padded_to_eight_bits() {
        let stego = encode("", "\0");
        assert_eq!(stego.chars().filter(|&c| c == ALPHABET.zero).count(), 8);
        assert_eq!(decode(&stego).into_bytes(), Some(vec![0]));
    }

    #[test]
    fn wide_code_point_is_not_truncated() {
        // U+0100 = 100000000, 9 bits
        let stego = encode("", "\u{100}");
        let expected = format!(
            "{b}{bits}{sep}{b}",
            b = ALPHABET.boundary,
            bits = symbols("100000000"),
            sep = ALPHABET.sep
        );
        assert_eq!(stego, expected);
    }

    #[test]
    fn astral_character_uses_high_surrogate() {
        // U+1F600 -> D83D
        assert_eq!(code_unit('\u{1F600}'), 0xD83D);
        let decoded = decode(&encode("", "a\u{1F600}b"));
        let message = decoded.found().expect("boundary pair present");
        assert_eq!(message.as_bytes(), b"ab");
        assert_eq!(message.malformed().len(), 1);
        assert_eq!(message.malformed()[0].index, 1);
        assert_eq!(message.malformed()[0].bits.len(), 16);
    }

    #[test]
    fn wide_segment_is_reported_and_dropped() {
        let decoded = decode(&encode("carrier text", "a\u{100}b"));
        let message = decoded.found().expect("boundary pair present");
        assert_eq!(message.as_bytes(), b"ab");
        assert!(!message.is_lossless());
        assert_eq!(
            message.malformed(),
            &[MalformedSegment {
                index: 1,
                bits: "100000000".to_string()
            }]
        );
    }

    #[test]
    fn stray_characters_inside_segment_are_ignored() {
        let b = ALPHABET.boundary;
        let sep = ALPHABET.sep;
        let stego = format!("{b}{}x{}{sep}{b}", symbols("0100"), symbols("0001"));
        assert_eq!(decode(&stego).into_bytes(), Some(b"A".to_vec()));
    }

    #[test]
    fn missing_trailing_separator_still_decodes() {
        let b = ALPHABET.boundary;
        let stego = format!("{b}{}{b}", symbols("01000010"));
        assert_eq!(decode(&stego).into_bytes(), Some(b"B".to_vec()));
    }

    #[test]
    fn no_boundary_is_not_found() {
        assert_eq!(decode("plain text"), Decoded::NotFound);
        assert_eq!(decode(""), Decoded::NotFound);
    }

    #[test]
    fn single_boundary_is_not_found() {
        let stego = format!("a{}b", ALPHABET.boundary);
        assert_eq!(decode(&stego), Decoded::NotFound);
    }

    #[test]
    fn empty_payload_is_found_but_empty() {
        let decoded = decode(&encode("text", ""));
        let message = decoded.found().expect("boundary pair present");
        assert!(message.as_bytes().is_empty());
        assert!(message.is_lossless());
    }

    #[test]
    fn strict_rejects_empty_and_wide() {
        assert_eq!(encode_strict("c", ""), Err(CodecError::EmptySecret));
        assert_eq!(
            encode_strict("c", "ok\u{263A}"),
            Err(CodecError::WideCodePoint {
                ch: '\u{263A}',
                index: 2
            })
        );
        assert_eq!(encode_strict("a b", "\u{FF}y"), Ok(encode("a b", "\u{FF}y")));
    }

    #[test]
    fn bytes_roundtrip_is_lossless_for_utf8() {
        let secret = "héllo ☺ 世界";
        let stego = encode_bytes("cover text", secret.as_bytes());
        let decoded = decode(&stego);
        let message = decoded.found().expect("boundary pair present");
        assert!(message.is_lossless());
        assert_eq!(message.to_utf8_lossy(), secret);
    }

    #[test]
    fn latin1_view_maps_bytes_to_chars() {
        let message = HiddenMessage {
            bytes: vec![0x48, 0xE9],
            malformed: Vec::new(),
        };
        assert_eq!(message.to_latin1_string(), "H\u{E9}");
    }
}
