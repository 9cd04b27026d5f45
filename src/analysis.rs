//! # 隐藏内容分析
//!
//! 只读地统计文本中的零宽字符，或把它们替换成可见标签以便人工检查。

use crate::constants::{BITS_PER_BYTE, Symbol};
use serde::Serialize;
use std::fmt;

/// 文本中零宽字符的统计结果。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub zero: usize,
    pub one: usize,
    pub sep: usize,
    pub boundary: usize,
    /// 四种零宽字符的总数。
    pub total_hidden: usize,
    /// 估计可完整还原的字节数：`(zero + one) / 8`。
    pub hidden_bytes: usize,
    /// 去掉全部零宽字符后剩余的字符数 (按 Unicode 标量值计)。
    pub visible_length: usize,
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "zero: {}, one: {}, sep: {}, boundary: {}, totalHidden: {}, hiddenBytes: {}, visibleLength: {}",
            self.zero,
            self.one,
            self.sep,
            self.boundary,
            self.total_hidden,
            self.hidden_bytes,
            self.visible_length
        )
    }
}

/// 统计文本中各零宽字符的数量。
pub fn analyze(text: &str) -> Analysis {
    let mut analysis = text
        .chars()
        .fold(Analysis::default(), |mut acc, ch| {
            match Symbol::classify(ch) {
                Some(Symbol::Zero) => acc.zero += 1,
                Some(Symbol::One) => acc.one += 1,
                Some(Symbol::Sep) => acc.sep += 1,
                Some(Symbol::Boundary) => acc.boundary += 1,
                None => acc.visible_length += 1,
            }
            acc
        });

    analysis.total_hidden = analysis.zero + analysis.one + analysis.sep + analysis.boundary;
    analysis.hidden_bytes = (analysis.zero + analysis.one) / BITS_PER_BYTE;
    analysis
}

/// 将每个零宽字符替换为对应的可见标签 (`[0]`, `[1]`, `[SEP]`, `[BND]`)。
pub fn reveal(text: &str) -> String {
    let mut revealed = String::with_capacity(text.len());
    for ch in text.chars() {
        match Symbol::classify(ch) {
            Some(symbol) => revealed.push_str(symbol.tag()),
            None => revealed.push(ch),
        }
    }
    revealed
}
