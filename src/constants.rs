/// 零宽字符表：四个互不相同、不可见的 Unicode 码位，各自承担固定的角色。
///
/// 编码与解码共用同一个 [`ALPHABET`]，任何地方都不应重复书写这些字面量。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    /// 二进制位 0 (U+200B ZERO WIDTH SPACE)。
    pub zero: char,
    /// 二进制位 1 (U+200C ZERO WIDTH NON-JOINER)。
    pub one: char,
    /// 字节分隔符 (U+200D ZERO WIDTH JOINER)，出现在每个字节的位序列之后。
    pub sep: char,
    /// 载荷边界 (U+FEFF BYTE ORDER MARK)，整个隐藏载荷的首尾各一个。
    pub boundary: char,
}

impl Alphabet {
    /// 判断字符是否属于该字符表。
    pub const fn contains(&self, ch: char) -> bool {
        ch == self.zero || ch == self.one || ch == self.sep || ch == self.boundary
    }
}

/// 唯一的零宽字符表。
pub const ALPHABET: Alphabet = Alphabet {
    zero: '\u{200B}',
    one: '\u{200C}',
    sep: '\u{200D}',
    boundary: '\u{FEFF}',
};

/// 隐藏载荷插入在载体文本中第一个该字符之前；
/// 若载体中不存在该字符，则追加到末尾。
pub const SPLICE_ANCHOR: char = ' ';

/// 每个字节段的位数。解码时只有恰好包含这么多位的段才会被还原。
pub const BITS_PER_BYTE: usize = 8;

/// `reveal` 使用的可见标签，顺序与 ZERO, ONE, SEP, BOUNDARY 一致。
pub const ZERO_TAG: &str = "[0]";
pub const ONE_TAG: &str = "[1]";
pub const SEP_TAG: &str = "[SEP]";
pub const BOUNDARY_TAG: &str = "[BND]";

/// 零宽字符表中的一个符号。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Zero,
    One,
    Sep,
    Boundary,
}

impl Symbol {
    /// 将字符归类为某个符号；不属于字符表的字符返回 `None`。
    pub const fn classify(ch: char) -> Option<Self> {
        if ch == ALPHABET.zero {
            Some(Self::Zero)
        } else if ch == ALPHABET.one {
            Some(Self::One)
        } else if ch == ALPHABET.sep {
            Some(Self::Sep)
        } else if ch == ALPHABET.boundary {
            Some(Self::Boundary)
        } else {
            None
        }
    }

    pub const fn as_char(self) -> char {
        match self {
            Self::Zero => ALPHABET.zero,
            Self::One => ALPHABET.one,
            Self::Sep => ALPHABET.sep,
            Self::Boundary => ALPHABET.boundary,
        }
    }

    pub const fn tag(self) -> &'static str {
        match self {
            Self::Zero => ZERO_TAG,
            Self::One => ONE_TAG,
            Self::Sep => SEP_TAG,
            Self::Boundary => BOUNDARY_TAG,
        }
    }
}
