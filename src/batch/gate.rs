//! # 并发闸门
//!
//! 计数信号量，限制同时处理的文件数。
//!
//! ## 功能
//! - 容量为 N 的令牌通道：`acquire` 放入一个令牌，通道满时阻塞
//! - `Permit` 析构时取出一个令牌，提前返回或 panic 时同样归还
//! - `Permit` 可移入工作线程，名额随线程结束而释放
//! - 不保证公平性，唤醒顺序由调度器决定
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 使用
//! - 使用 `crossbeam-channel` 有界通道

use crossbeam_channel::{bounded, Receiver, Sender};

/// 并发闸门
pub struct Gate {
    /// 放入令牌（占用名额）
    tokens_tx: Sender<()>,
    /// 取出令牌（归还名额）
    tokens_rx: Receiver<()>,
}

/// 持有的一个名额
pub struct Permit<'a> {
    gate: &'a Gate,
}

impl Gate {
    /// 创建容量为 `capacity` 的闸门（至少为 1）
    pub fn new(capacity: usize) -> Self {
        let (tokens_tx, tokens_rx) = bounded(capacity.max(1));
        Self {
            tokens_tx,
            tokens_rx,
        }
    }

    /// 获取一个名额，没有空闲名额时阻塞
    pub fn acquire(&self) -> Permit<'_> {
        // 闸门同时持有两端，通道不会断开
        let _ = self.tokens_tx.send(());
        Permit { gate: self }
    }
}

impl Drop for Permit<'_> {
    fn drop(&mut self) {
        let _ = self.gate.tokens_rx.try_recv();
    }
}
