//! # wordcount - 并发文本计数工具
//!
//! 统计一个或多个文件的词数、字符数和行数，多个文件并发处理。
//!
//! ## 子命令
//! - `word-count` - 按 `-w`/`-c`/`-l` 输出计数
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/     (并发闸门与工作线程)
//!   │     └── counting/  (行来源与计数累加器)
//!   ├── utils/      (输出工具)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod counting;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;

/// 用法错误退出码（与 clap 一致）
const USAGE_EXIT_CODE: i32 = 2;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        if e.is_usage() {
            std::process::exit(USAGE_EXIT_CODE);
        }
        std::process::exit(1);
    }
}
