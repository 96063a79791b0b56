//! Source code span tracking.
//! 源码范围跟踪。

use serde::Serialize;
use std::fmt;

/// A half-open byte range in source code.
/// 源码中的半开字节区间。
///
/// Diagnostics are keyed on 1-based lines; the span is what ties a token
/// or diagnostic back to the exact source text.
/// 诊断以行号（从 1 开始）为键；span 负责把 token 或诊断对应回
/// 具体的源码文本。
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Span {
    /// Start byte offset. / 起始字节偏移。
    pub start: u32,
    /// End byte offset (exclusive). / 结束字节偏移（不包含）。
    pub end: u32,
}

impl Span {
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    pub fn from_usize(start: usize, end: usize) -> Self {
        Span {
            start: start as u32,
            end: end as u32,
        }
    }

    /// Create a span that covers both `self` and `other`.
    /// 创建一个覆盖 `self` 和 `other` 的范围。
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: std::cmp::min(self.start, other.start),
            end: std::cmp::max(self.end, other.end),
        }
    }

    /// Returns the byte range for this span.
    /// 返回此范围对应的字节区间。
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
