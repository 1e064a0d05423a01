//! # 计数模块
//!
//! 单个文件的生产者/消费者流水线。
//!
//! ## 组成
//! - `line_source`: 打开文件并逐行发送到行通道（生产者）
//! - `tally`: 从行通道和错误通道累计词/字符/行数（消费者）
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 使用
//! - 使用 `crossbeam-channel` 传递行和错误

pub mod line_source;
pub mod tally;

pub use line_source::read_lines;
pub use tally::{accumulate, Tally};

/// 需要输出的计数项
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountOptions {
    /// 输出词数 (-w)
    pub words: bool,
    /// 输出字符数 (-c)
    pub chars: bool,
    /// 输出行数 (-l)
    pub lines: bool,
}
