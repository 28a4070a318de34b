//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use crate::codec::Mode;
use clap::Parser;
use std::path::PathBuf;

/// 一款基于 LSB (最低有效位) 隐写术的命令行工具，用于在图像中隐藏文本消息或文件的完整性哈希。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款基于 LSB (最低有效位) 隐写术的命令行工具，用于在图像中隐藏文本消息或文件的完整性哈希。输出图像始终为 PNG。"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令。
#[derive(Parser, Debug)]
pub enum Commands {
    /// 在图像中隐藏一段消息，或另一个文件的 SHA-256 哈希。
    Encode(EncodeArgs),

    /// 从经过隐写的图像中恢复隐藏的消息或哈希。
    Decode(DecodeArgs),

    /// 将文件的哈希与图像中隐藏的哈希进行比对。
    Verify(VerifyArgs),

    /// 显示图像可容纳的最大消息长度。
    Capacity(CapacityArgs),
}

/// 'encode' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct EncodeArgs {
    /// 作为载体的输入图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 编码模式：normal (隐藏消息) 或 integrity (隐藏文件哈希)。
    #[arg(short, long, default_value = "normal")]
    pub mode: Mode,

    /// normal 模式下要隐藏的消息文本。
    #[arg(long)]
    pub message: Option<String>,

    /// integrity 模式下要计算哈希的文件路径。
    #[arg(short, long)]
    pub target: Option<PathBuf>,

    /// 结果图像的输出路径。默认为输入图像同目录下的 `stego_<名称>.png`。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 目标文件已存在时强制覆盖。
    #[arg(short, long)]
    pub force: bool,
}

/// 'decode' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct DecodeArgs {
    /// 已隐藏数据的图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 以 JSON 格式输出结果。
    #[arg(long)]
    pub json: bool,
}

/// 'verify' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct VerifyArgs {
    /// 以 integrity 模式编码过的图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 需要校验完整性的文件路径。
    #[arg(short, long)]
    pub target: PathBuf,
}

/// 'capacity' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct CapacityArgs {
    /// 需要计算容量的图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,
}
