//! # 行来源（生产者）
//!
//! 打开文件，按文件顺序把每一行发送到行通道；出错时向错误通道发送一个错误。
//!
//! ## 约定
//! - 行以 `\n` 分隔，发送时去掉行尾的 `\n`（以及紧邻的 `\r`）
//! - 单行最长 [`MAX_LINE_BYTES`] 字节，超出视为扫描错误，不做截断
//! - 两个通道的发送端在函数返回时被释放，消费者据此得知序列结束
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 在独立线程中调用
//! - 使用 `crossbeam-channel` 发送端

use crate::error::WcError;

use crossbeam_channel::Sender;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

/// 行缓冲区上限 (1 MiB)
pub const MAX_LINE_BYTES: usize = 1024 * 1024;

/// 读取缓冲区大小
const READ_BUFFER_SIZE: usize = 64 * 1024;

/// 一行原始字节（不含行终止符）
pub type Line = Vec<u8>;

/// 打开文件并逐行发送
///
/// 打开失败时只发送一个错误、不发送任何行。文件句柄和两个发送端
/// 在所有返回路径上都会被释放。
pub fn read_lines(path: &Path, lines: Sender<Line>, errors: Sender<WcError>) {
    let file = match open(path) {
        Ok(file) => file,
        Err(e) => {
            let _ = errors.send(e);
            return;
        }
    };

    let reader = BufReader::with_capacity(READ_BUFFER_SIZE, file);
    if let Err(e) = produce(reader, path, &lines) {
        let _ = errors.send(e);
    }
}

/// 打开文件，目录也视为打开失败
fn open(path: &Path) -> Result<File, WcError> {
    let open_failed = |source| WcError::OpenFailed {
        path: path.display().to_string(),
        source,
    };

    let file = File::open(path).map_err(open_failed)?;
    let metadata = file.metadata().map_err(open_failed)?;
    if metadata.is_dir() {
        return Err(open_failed(io::Error::other("is a directory")));
    }
    Ok(file)
}

/// 从任意 `BufRead` 逐行读取并发送
///
/// 消费者提前退出（通道断开）时静默停止。
pub fn produce<R: BufRead>(
    mut reader: R,
    path: &Path,
    lines: &Sender<Line>,
) -> Result<(), WcError> {
    let mut line_number = 0;

    loop {
        let mut buf = Vec::new();
        // 多留两个字节给 "\r\n"
        let limit = (MAX_LINE_BYTES + 2) as u64;
        let read = reader
            .by_ref()
            .take(limit)
            .read_until(b'\n', &mut buf)
            .map_err(|source| WcError::ReadFailed {
                path: path.display().to_string(),
                source,
            })?;

        if read == 0 {
            return Ok(());
        }
        line_number += 1;

        strip_terminator(&mut buf);
        if buf.len() > MAX_LINE_BYTES {
            return Err(WcError::LineTooLong {
                path: path.display().to_string(),
                line: line_number,
                limit: MAX_LINE_BYTES,
            });
        }

        if lines.send(buf).is_err() {
            return Ok(());
        }
    }
}

/// 去掉行尾的 `\n` 和其前的 `\r`
fn strip_terminator(buf: &mut Vec<u8>) {
    if buf.last() == Some(&b'\n') {
        buf.pop();
    }
    if buf.last() == Some(&b'\r') {
        buf.pop();
    }
}
