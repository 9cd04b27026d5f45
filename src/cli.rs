//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use clap::{Args, Parser};
use std::path::PathBuf;

/// 一款基于零宽字符的文本隐写工具，用于在普通文本中隐藏或恢复消息。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款基于零宽字符的文本隐写工具。消息被编码为不可见的 Unicode 字符 (U+200B, U+200C, U+200D, U+FEFF)，插入到载体文本第一个空格之前。"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令。
#[derive(Parser, Debug)]
pub enum Commands {
    /// 将秘密消息隐藏到载体文本中。
    Encode(EncodeArgs),

    /// 从隐写文本中提取隐藏的消息。
    Decode(DecodeArgs),

    /// 统计文本中的零宽字符。
    Analyze(AnalyzeArgs),

    /// 将文本中的零宽字符替换为可见标签。
    Reveal(RevealArgs),

    /// 运行演示。
    Demo,
}

/// 待处理文本的来源：命令行参数 (多个单词以空格连接) 或文件。
#[derive(Args, Debug, Clone)]
pub struct TextSource {
    /// 要处理的文本。
    #[arg(required_unless_present = "file", num_args = 1..)]
    pub text: Vec<String>,

    /// 从文件读取要处理的文本。
    #[arg(short, long, conflicts_with = "text")]
    pub file: Option<PathBuf>,
}

/// 'encode' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct EncodeArgs {
    /// 载体文本 (可以为空字符串)。
    pub carrier: String,

    /// 要隐藏的消息，多个单词以空格连接。
    #[arg(required_unless_present = "secret_file", num_args = 1..)]
    pub secret: Vec<String>,

    /// 从文件读取要隐藏的消息。
    #[arg(long, conflicts_with = "secret")]
    pub secret_file: Option<PathBuf>,

    /// 拒绝空消息以及超出单字节范围的字符。
    #[arg(long, conflicts_with = "bytes")]
    pub strict: bool,

    /// 按 UTF-8 字节隐藏消息，可无损保存任意字符。
    #[arg(long)]
    pub bytes: bool,

    /// 将隐写文本保存到此路径，而不是打印到终端。
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 允许覆盖已存在的输出文件。
    #[arg(long)]
    pub force: bool,
}

/// 'decode' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct DecodeArgs {
    #[command(flatten)]
    pub source: TextSource,

    /// 将恢复的消息以原始字节保存到此路径。
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 允许覆盖已存在的输出文件。
    #[arg(long)]
    pub force: bool,

    /// 按 UTF-8 解释恢复的字节 (配合 `encode --bytes` 使用)。
    #[arg(long)]
    pub utf8: bool,
}

/// 'analyze' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub source: TextSource,

    /// 以 JSON 格式输出统计结果。
    #[arg(long)]
    pub json: bool,
}

/// 'reveal' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct RevealArgs {
    #[command(flatten)]
    pub source: TextSource,
}
