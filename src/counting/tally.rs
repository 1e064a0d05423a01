//! # 计数累加器（消费者）
//!
//! 同时等待行通道和错误通道，生成单个文件的最终计数结果。
//!
//! ## 计数规则
//! - 行数：每收到一行加 1
//! - 字符数：行的字节长度 + 1（被去掉的行终止符）
//! - 词数：按空白字符分割后的非空词个数
//!
//! ## 错误处理
//! 行通道是同步（零容量）通道，生产者发送错误之前，已发送的每一行都已被
//! 本模块接收并计数；行通道关闭后还会再检查一次错误通道，错误不会丢失。
//! 收到错误的文件只输出错误，不输出部分计数。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 调用
//! - 使用 `counting/line_source.rs` 定义的 `Line`

use super::line_source::Line;
use super::CountOptions;
use crate::error::WcError;

use crossbeam_channel::{select, Receiver};
use std::path::{Path, PathBuf};

/// 单个文件的计数结果
#[derive(Debug)]
pub struct Tally {
    /// 文件路径
    pub file: PathBuf,
    /// 字符数
    pub chars: usize,
    /// 词数
    pub words: usize,
    /// 行数
    pub lines: usize,
    /// 处理失败时的错误
    pub error: Option<WcError>,
}

impl Tally {
    /// 创建空结果
    pub fn new(file: &Path) -> Self {
        Self {
            file: file.to_path_buf(),
            chars: 0,
            words: 0,
            lines: 0,
            error: None,
        }
    }

    /// 计入一行
    pub fn record(&mut self, line: &[u8]) {
        self.lines += 1;
        self.chars += line.len() + 1;
        self.words += String::from_utf8_lossy(line).split_whitespace().count();
    }

    /// 按 词数、字符数、行数 的固定顺序格式化输出行（不含换行符）
    pub fn render(&self, options: &CountOptions) -> String {
        let mut out = String::new();
        if options.words {
            out.push_str(&format!("{} ", self.words));
        }
        if options.chars {
            out.push_str(&format!("{} ", self.chars));
        }
        if options.lines {
            out.push_str(&format!("{} ", self.lines));
        }
        out.push_str(&self.file.display().to_string());
        out
    }
}

/// 消费两个通道直到行序列结束或收到错误
pub fn accumulate(file: &Path, lines: Receiver<Line>, errors: Receiver<WcError>) -> Tally {
    let mut tally = Tally::new(file);
    let mut errors_open = true;

    loop {
        if !errors_open {
            match lines.recv() {
                Ok(line) => tally.record(&line),
                Err(_) => break,
            }
            continue;
        }

        select! {
            recv(errors) -> msg => match msg {
                Ok(err) => {
                    tally.error = Some(err);
                    return tally;
                }
                // 错误通道已关闭且为空，之后只等行通道
                Err(_) => errors_open = false,
            },
            recv(lines) -> msg => match msg {
                Ok(line) => tally.record(&line),
                Err(_) => break,
            },
        }
    }

    // 行通道关闭时错误可能仍在通道中
    if let Ok(err) = errors.try_recv() {
        tally.error = Some(err);
    }
    tally
}
