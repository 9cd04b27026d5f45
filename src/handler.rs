//! # 命令处理逻辑模块
//!
//! 包含处理各子命令的高级业务逻辑。
//! 本模块负责协调文件 I/O、调用核心隐写算法以及向用户报告结果。

use crate::analysis::{analyze, reveal};
use crate::cli::{AnalyzeArgs, DecodeArgs, EncodeArgs, RevealArgs, TextSource};
use crate::steganography::{Decoded, decode, encode, encode_bytes, encode_strict};
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::Path;

/// 演示使用的载体文本。
const DEMO_CARRIER: &str = "This is a completely normal sentence.";
/// 演示使用的秘密消息。
const DEMO_SECRET: &str = "HIDDEN";

/// 未找到隐藏消息时打印的提示。
pub const NOT_FOUND_MESSAGE: &str = "(no hidden message found)";

/// 读取命令行文本或文件内容。多个命令行单词以单个空格连接。
fn read_source(source: &TextSource) -> Result<String> {
    match &source.file {
        Some(path) => fs::read_to_string(path).with_context(|| {
            format!(
                "Unable to read text file: {}",
                path.to_string_lossy().red().bold()
            )
        }),
        None => Ok(source.text.join(" ")),
    }
}

/// 在未指定 `--force` 时拒绝覆盖已存在的文件。
fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !path.exists(),
        "Output file already exists: {} \nUse --force to overwrite it.",
        path.to_string_lossy().red().bold()
    );
    Ok(())
}

/// 处理 'Encode' 命令的执行逻辑。
///
/// 读取秘密消息，按所选模式 (默认、`--strict` 或 `--bytes`) 将其隐藏到载体文本中。
/// 指定了输出路径时写入文件，否则打印隐写文本、统计结果与可视化结构。
///
/// # Arguments
///
/// * `args` - 包含载体、消息与输出选项的 `EncodeArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取消息文件。
/// * 严格模式下消息为空或包含超出单字节范围的字符。
/// * 输出文件已存在且未指定 `--force`，或无法写入输出文件。
pub fn handle_encode(args: EncodeArgs) -> Result<()> {
    let secret = match &args.secret_file {
        Some(path) => fs::read_to_string(path).with_context(|| {
            format!(
                "Unable to read secret file: {}",
                path.to_string_lossy().red().bold()
            )
        })?,
        None => args.secret.join(" "),
    };

    if let Some(output) = &args.output {
        ensure_writable(output, args.force)?;
    }

    let stego = if args.strict {
        encode_strict(&args.carrier, &secret)
            .context("The secret cannot be hidden losslessly in strict mode.")?
    } else if args.bytes {
        encode_bytes(&args.carrier, secret.as_bytes())
    } else {
        let stego = encode(&args.carrier, &secret);
        if let Some(ch) = secret.chars().find(|&ch| u32::from(ch) > u32::from(u8::MAX)) {
            eprintln!(
                "{} character {} does not fit in a single byte and will be lost on decode. \nUse --bytes to hide it losslessly.",
                "warning:".yellow().bold(),
                format!("{ch:?}").yellow()
            );
        }
        stego
    };

    match &args.output {
        Some(output) => {
            fs::write(output, &stego).with_context(|| {
                format!(
                    "Unable to write to target text file: {}",
                    output.to_string_lossy().red().bold()
                )
            })?;

            println!(
                "The message has been successfully hidden and saved: {}",
                output.to_string_lossy().green().bold()
            );
        }
        None => {
            println!("\n=== ENCODED ===");
            println!("{stego}");
            println!("\n=== ANALYSIS ===");
            println!("{}", analyze(&stego));
            println!("\n=== REVEALED (debug) ===");
            println!("{}", reveal(&stego));
        }
    }

    Ok(())
}

/// 处理 'Decode' 命令的执行逻辑。
///
/// 从文本中提取隐藏消息。未找到时打印明确的提示且不创建输出文件；
/// 被丢弃的段会逐一给出警告。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取输入文件。
/// * 输出文件已存在且未指定 `--force`，或无法写入输出文件。
pub fn handle_decode(args: DecodeArgs) -> Result<()> {
    let text = read_source(&args.source)?;

    if let Some(output) = &args.output {
        ensure_writable(output, args.force)?;
    }

    let message = match decode(&text) {
        Decoded::Found(message) => message,
        Decoded::NotFound => {
            println!("\n=== DECODED ===");
            println!("{}", NOT_FOUND_MESSAGE.yellow());
            return Ok(());
        }
    };

    for segment in message.malformed() {
        eprintln!(
            "{} segment {} has {} bits instead of 8 and was dropped.",
            "warning:".yellow().bold(),
            segment.index.to_string().red().bold(),
            segment.bits.len().to_string().red().bold()
        );
    }

    match &args.output {
        Some(output) => {
            fs::write(output, message.as_bytes()).with_context(|| {
                format!(
                    "Unable to write to target text file: {}",
                    output.to_string_lossy().red().bold()
                )
            })?;

            println!(
                "The message has been successfully recovered and saved: {}",
                output.to_string_lossy().green().bold()
            );
        }
        None => {
            let rendered = if args.utf8 {
                message.to_utf8_lossy()
            } else {
                message.to_latin1_string()
            };
            println!("\n=== DECODED ===");
            if rendered.is_empty() {
                println!("{}", NOT_FOUND_MESSAGE.yellow());
            } else {
                println!("{rendered}");
            }
        }
    }

    Ok(())
}

/// 处理 'Analyze' 命令的执行逻辑。
///
/// # Errors
///
/// 无法读取输入文件或无法序列化统计结果时返回错误。
pub fn handle_analyze(args: AnalyzeArgs) -> Result<()> {
    let text = read_source(&args.source)?;
    let analysis = analyze(&text);

    if args.json {
        let json = serde_json::to_string_pretty(&analysis)
            .context("Failed to serialize the analysis as JSON.")?;
        println!("{json}");
    } else {
        println!("\n=== ANALYSIS ===");
        println!("{analysis}");
    }

    Ok(())
}

/// 处理 'Reveal' 命令的执行逻辑。
///
/// # Errors
///
/// 无法读取输入文件时返回错误。
pub fn handle_reveal(args: RevealArgs) -> Result<()> {
    let text = read_source(&args.source)?;
    println!("{}", reveal(&text));
    Ok(())
}

/// 处理 'Demo' 命令：对一段固定文本完整演示编码、显示、分析与解码。
pub fn handle_demo() -> Result<()> {
    println!("\n=== ZERO-WIDTH STEGANOGRAPHY DEMO ===\n");
    println!("Carrier text: {}", DEMO_CARRIER.green());
    println!("Secret message: {}", DEMO_SECRET.red().bold());

    let encoded = encode(DEMO_CARRIER, DEMO_SECRET);
    println!("\nEncoded (looks identical):");
    println!("{encoded}");

    println!("\nRevealed structure:");
    println!("{}", reveal(&encoded));

    println!("\nAnalysis: {}", analyze(&encoded));

    let decoded = decode(&encoded)
        .found()
        .map(|message| message.to_latin1_string())
        .context("The demo payload could not be recovered.")?;
    anyhow::ensure!(
        decoded == DEMO_SECRET,
        "The demo payload was recovered incorrectly: {}",
        decoded.red().bold()
    );
    println!("\nDecoded secret: {}", decoded.green().bold());

    println!("\n=== THE TEXT LOOKS NORMAL BUT CONTAINS SECRETS ===");
    Ok(())
}
