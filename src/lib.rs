//! # zwc_hide 库
//!
//! 本库包含零宽字符隐写工具的核心逻辑：把任意消息编码为不可见的 Unicode 字符并插入到
//! 普通文本中，再从文本中无损地提取出来。

pub mod analysis;
pub mod cli;
pub mod constants;
pub mod error;
pub mod handler;
pub mod steganography;

pub use analysis::{Analysis, analyze, reveal};
pub use constants::{ALPHABET, Alphabet, Symbol};
pub use error::CodecError;
pub use steganography::{
    Decoded, HiddenMessage, MalformedSegment, decode, encode, encode_bytes, encode_strict,
};
