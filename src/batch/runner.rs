//! # 批量执行器
//!
//! 为每个文件启动一个工作线程，经并发闸门限流，等待全部完成后返回。
//!
//! ## 功能
//! - 先获取闸门名额再启动工作线程，存活的工作线程数不超过闸门容量
//! - 每个文件一个工作线程，完成顺序不确定
//! - 每个工作线程内部：生产者线程读取行，当前线程累计计数
//! - 单个文件失败不影响其他文件
//! - 汇总成功/失败统计
//!
//! ## 依赖关系
//! - 被 `commands/word_count.rs` 调用
//! - 使用 `batch/gate.rs` 限制并发
//! - 使用 `counting/` 的生产者和累加器

use super::gate::Gate;
use crate::counting::{self, Tally};
use crate::error::{Result, WcError};

use crossbeam_channel::{bounded, unbounded};
use std::path::{Path, PathBuf};
use std::thread;

/// 单个文件处理结果
#[derive(Debug)]
pub enum ProcessResult {
    /// 处理成功
    Success,
    /// 处理失败
    Failed(String, String), // (文件路径, 错误信息)
}

impl From<&Tally> for ProcessResult {
    fn from(tally: &Tally) -> Self {
        match &tally.error {
            None => ProcessResult::Success,
            Some(e) => ProcessResult::Failed(tally.file.display().to_string(), e.to_string()),
        }
    }
}

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct BatchResult {
    /// 成功数量
    pub success: usize,
    /// 失败数量
    pub failed: usize,
    /// 失败详情
    pub failures: Vec<(String, String)>,
}

impl BatchResult {
    /// 合并处理结果
    pub fn merge(&mut self, result: ProcessResult) {
        match result {
            ProcessResult::Success => self.success += 1,
            ProcessResult::Failed(path, err) => {
                self.failed += 1;
                self.failures.push((path, err));
            }
        }
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.success + self.failed
    }
}

/// 批量执行器
pub struct BatchRunner {
    /// 并行作业数（0 = 每个文件一个名额）
    jobs: usize,
}

impl BatchRunner {
    /// 创建新的批量执行器
    pub fn new(jobs: usize) -> Self {
        Self { jobs }
    }

    /// 并行处理文件列表
    ///
    /// 每个文件完成后立即调用 `report`（在工作线程中，仍持有闸门名额）。
    /// 所有工作线程结束后才返回。文件列表为空时返回 [`WcError::NoInputFiles`]。
    pub fn run<F>(&self, files: &[PathBuf], report: F) -> Result<BatchResult>
    where
        F: Fn(&Tally) + Sync,
    {
        if files.is_empty() {
            return Err(WcError::NoInputFiles);
        }

        let capacity = if self.jobs == 0 { files.len() } else { self.jobs };
        let gate = Gate::new(capacity);
        let (result_tx, result_rx) = unbounded();

        // 作用域结束即所有工作线程已完成
        thread::scope(|s| {
            for file in files {
                // 在启动线程之前阻塞等待名额
                let permit = gate.acquire();
                let result_tx = result_tx.clone();
                let report = &report;
                // 不保留句柄，结束的线程立即回收
                s.spawn(move || {
                    let _permit = permit;
                    let tally = process_file(file);
                    report(&tally);
                    let _ = result_tx.send(ProcessResult::from(&tally));
                });
            }
        });
        drop(result_tx);

        // 汇总结果
        let mut batch_result = BatchResult::default();
        for result in result_rx {
            batch_result.merge(result);
        }

        Ok(batch_result)
    }
}

/// 处理单个文件：启动生产者，在当前线程累计计数
///
/// 调用方须持有闸门名额。
pub fn process_file(file: &Path) -> Tally {
    let (line_tx, line_rx) = bounded(0);
    let (err_tx, err_rx) = bounded(1);

    thread::scope(|s| {
        s.spawn(move || counting::read_lines(file, line_tx, err_tx));
        counting::accumulate(file, line_rx, err_rx)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counting::CountOptions;
    use std::fs;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    fn write_file(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn run_collect(files: &[PathBuf], jobs: usize) -> (BatchResult, Vec<String>, Vec<String>) {
        let printed = Mutex::new(Vec::new());
        let errors = Mutex::new(Vec::new());
        let options = CountOptions {
            words: true,
            chars: true,
            lines: true,
        };

        let result = BatchRunner::new(jobs)
            .run(files, |tally| match &tally.error {
                None => printed.lock().unwrap().push(tally.render(&options)),
                Some(e) => errors.lock().unwrap().push(e.to_string()),
            })
            .unwrap();

        let mut printed = printed.into_inner().unwrap();
        printed.sort();
        (result, printed, errors.into_inner().unwrap())
    }

    #[test]
    fn test_hello_world_scenario() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_file(dir.path(), "hello.txt", b"hello world\nfoo\n");

        let (result, printed, errors) = run_collect(&[file.clone()], 0);

        assert_eq!(result.success, 1);
        assert!(errors.is_empty());
        assert_eq!(printed, vec![format!("3 16 2 {}", file.display())]);
    }

    #[test]
    fn test_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_file(dir.path(), "empty.txt", b"");

        let (_, printed, _) = run_collect(&[file.clone()], 0);

        assert_eq!(printed, vec![format!("0 0 0 {}", file.display())]);
    }

    #[test]
    fn test_missing_file_does_not_affect_siblings() {
        let dir = tempfile::tempdir().unwrap();
        let good = write_file(dir.path(), "good.txt", b"a b c\n");
        let missing = dir.path().join("missing.txt");

        let (result, printed, errors) = run_collect(&[missing.clone(), good.clone()], 0);

        assert_eq!(result.total(), 2);
        assert_eq!(result.success, 1);
        assert_eq!(result.failed, 1);
        assert_eq!(result.failures[0].0, missing.display().to_string());
        assert_eq!(printed, vec![format!("3 6 1 {}", good.display())]);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("missing.txt"));
    }

    #[test]
    fn test_oversized_line_discards_partial_counts() {
        let dir = tempfile::tempdir().unwrap();
        let mut content = b"fine\n".to_vec();
        content.extend(vec![b'x'; counting::line_source::MAX_LINE_BYTES + 10]);
        let big = write_file(dir.path(), "big.txt", &content);

        let (result, printed, errors) = run_collect(&[big], 0);

        assert_eq!(result.failed, 1);
        assert!(printed.is_empty());
        assert!(errors[0].contains("exceeds the maximum line length"));
    }

    #[test]
    fn test_all_workers_complete_with_small_gate() {
        let dir = tempfile::tempdir().unwrap();
        let mut files: Vec<PathBuf> = (0..10)
            .map(|i| write_file(dir.path(), &format!("f{}.txt", i), b"one\ntwo three\n"))
            .collect();
        files.push(dir.path().join("absent.txt"));

        let (result, printed, errors) = run_collect(&files, 2);

        assert_eq!(result.total(), 11);
        assert_eq!(result.success, 10);
        assert_eq!(printed.len(), 10);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_workers_never_exceed_gate() {
        let dir = tempfile::tempdir().unwrap();
        let files: Vec<PathBuf> = (0..12)
            .map(|i| write_file(dir.path(), &format!("g{}.txt", i), b"x y
"))
            .collect();
        let active = AtomicUsize::new(0);
        let peak = AtomicUsize::new(0);

        // 报告在工作线程中执行，此时仍持有名额
        let result = BatchRunner::new(2)
            .run(&files, |_| {
                let now = active.fetch_add(1, Ordering::SeqCst) + 1;
                peak.fetch_max(now, Ordering::SeqCst);
                thread::sleep(Duration::from_millis(10));
                active.fetch_sub(1, Ordering::SeqCst);
            })
            .unwrap();

        assert_eq!(result.success, 12);
        assert!(peak.load(Ordering::SeqCst) <= 2);
        assert_eq!(active.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_many_missing_files_with_small_gate() {
        let dir = tempfile::tempdir().unwrap();
        let files: Vec<PathBuf> = (0..5000)
            .map(|i| dir.path().join(format!("missing-{}.txt", i)))
            .collect();

        let result = BatchRunner::new(2).run(&files, |_| {}).unwrap();

        assert_eq!(result.total(), 5000);
        assert_eq!(result.failed, 5000);
    }

    #[test]
    fn test_idempotent_counts() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_file(dir.path(), "same.txt", b"the quick\nbrown fox\r\njumps");

        let (_, first, _) = run_collect(&[file.clone()], 1);
        let (_, second, _) = run_collect(&[file], 1);

        assert_eq!(first, second);
    }

    #[test]
    fn test_no_files_is_usage_error() {
        let result = BatchRunner::new(0).run(&[], |_| {});
        assert!(matches!(result, Err(WcError::NoInputFiles)));
    }
}
