//! # word-count 命令实现
//!
//! 为每个文件输出所选计数项和文件名；失败的文件输出错误信息。
//!
//! ## 依赖关系
//! - 使用 `cli/word_count.rs` 定义的参数
//! - 使用 `batch/` 并发处理文件
//! - 使用 `utils/output.rs` 输出

use crate::batch::BatchRunner;
use crate::cli::word_count::WordCountArgs;
use crate::error::Result;
use crate::utils::output;

/// 执行 word-count 命令
pub fn execute(args: WordCountArgs) -> Result<()> {
    let options = args.count_options();

    let result = BatchRunner::new(args.jobs).run(&args.files, |tally| match &tally.error {
        None => output::print_counts(&tally.render(&options)),
        Some(e) => output::print_error(&e.to_string()),
    })?;

    if args.summary {
        if result.failed > 0 {
            output::print_warning(&format!(
                "{} of {} files failed",
                result.failed,
                result.total()
            ));
            for (path, _) in &result.failures {
                output::print_warning(&format!("  {}", path));
            }
        }
        output::print_done(&format!("Counted {} files", result.success));
    }

    Ok(())
}
