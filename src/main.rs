use clap::Parser;
use tracing_subscriber::EnvFilter;

use zwc_hide::{
    cli::{Cli, Commands},
    handler::{handle_analyze, handle_decode, handle_demo, handle_encode, handle_reveal},
};

/// 程序的主入口点
///
/// 负责初始化日志、解析命令行参数，并根据指定的子命令
/// 将执行分派到相应的处理函数
fn main() -> anyhow::Result<()> {
    // 日志输出到 stderr，日志级别由 RUST_LOG 控制，默认为 warn
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // 解析命令行参数
    let cli = Cli::parse();

    // 根据子命令调用相应的处理函数
    match cli.command {
        Commands::Encode(args) => handle_encode(args),
        Commands::Decode(args) => handle_decode(args),
        Commands::Analyze(args) => handle_analyze(args),
        Commands::Reveal(args) => handle_reveal(args),
        Commands::Demo => handle_demo(),
    }
}
