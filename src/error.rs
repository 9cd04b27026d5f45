//! # 错误类型
//!
//! 只有严格模式的编码 (`encode_strict`) 会失败；解码、分析与显示对任意输入都不会出错。

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// 秘密消息为空，没有可隐藏的内容。
    #[error("The secret message is empty.")]
    EmptySecret,

    /// 秘密消息中的字符超出单字节范围 (U+0000..=U+00FF)，解码时将无法还原。
    #[error(
        "Character {ch:?} (U+{:04X}) at index {index} does not fit in a single byte.",
        u32::from(*.ch)
    )]
    WideCodePoint { ch: char, index: usize },
}

pub type Result<T> = std::result::Result<T, CodecError>;
