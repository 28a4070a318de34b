//! # 命令处理逻辑模块
//!
//! 包含处理各子命令的高级业务逻辑。
//! 本模块负责协调文件 I/O、调用编解码核心以及向用户报告结果。

use crate::cli::{CapacityArgs, DecodeArgs, EncodeArgs, VerifyArgs};
use crate::codec::{self, Mode};
use crate::digest::{self, Payload};
use crate::error::StegoError;
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// 完整性校验的结论。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// 文件哈希与图像中隐藏的哈希一致。
    Safe,
    /// 文件哈希不一致，文件可能已损坏或被修改。
    Tampered,
}

/// 处理 'Encode' 命令的执行逻辑。
///
/// 读取载体图像，按模式构造负载 (消息或目标文件的哈希)，嵌入后以 PNG 格式写入目标路径。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径和模式的 `EncodeArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 目标文件已存在且未指定 `--force`。
/// * 无法读取输入图像或目标文件。
/// * 所选模式缺少必需的输入。
/// * 图像容量不足以容纳负载。
/// * 无法写入到目标图像文件。
///
/// 成功时返回实际写入的路径。
pub fn handle_encode(args: EncodeArgs) -> Result<PathBuf> {
    let dest = args
        .dest
        .clone()
        .unwrap_or_else(|| default_path(&args.image, "stego_", "png"));
    ensure_writable(&dest, args.force)?;

    let picture = fs::read(&args.image).with_context(|| {
        format!(
            "Unable to read image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let target = match (&args.mode, &args.target) {
        (Mode::Integrity, Some(path)) => Some(File::open(path).with_context(|| {
            format!(
                "Unable to open target file: {}",
                path.to_string_lossy().red().bold()
            )
        })?),
        _ => None,
    };

    let stego =
        codec::encode_image_bytes(&picture, args.mode, args.message.as_deref(), target)
            .map_err(report)?;

    fs::write(&dest, stego).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The {} has been successfully hidden and saved: {}",
        match args.mode {
            Mode::Normal => "message",
            Mode::Integrity => "file hash",
        },
        dest.to_string_lossy().green().bold()
    );

    Ok(dest)
}

/// 处理 'Decode' 命令的执行逻辑。
///
/// # Errors
///
/// 如果无法读取图像文件，或图像中没有有效的隐藏数据，将返回错误。
pub fn handle_decode(args: DecodeArgs) -> Result<Payload> {
    let picture = read_image(&args.image)?;
    let payload = codec::decode_image_bytes(&picture).map_err(report)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("Type: {}", payload.kind().green().bold());
        println!("Content: {}", payload.content());
    }

    Ok(payload)
}

/// 处理 'Verify' 命令的执行逻辑。
///
/// 从图像中恢复哈希，计算目标文件的哈希并比对。
///
/// # Errors
///
/// 图像中隐藏的是普通消息而非哈希，或者任一文件无法读取时返回错误。
pub fn handle_verify(args: VerifyArgs) -> Result<Verdict> {
    let picture = read_image(&args.image)?;

    let hidden = match codec::decode_image_bytes(&picture).map_err(report)? {
        Payload::Digest(hex) => hex,
        Payload::Message(_) => anyhow::bail!(
            "This image does not contain a hidden hash: {}",
            args.image.to_string_lossy().red().bold()
        ),
    };

    let file = File::open(&args.target).with_context(|| {
        format!(
            "Unable to open target file: {}",
            args.target.to_string_lossy().red().bold()
        )
    })?;
    let actual = digest::sha256_hex(file).with_context(|| {
        format!(
            "Unable to read target file: {}",
            args.target.to_string_lossy().red().bold()
        )
    })?;

    let verdict = if actual == hidden {
        println!(
            "File Integrity: {}\nThe file's hash matches the one hidden in the image.",
            "SAFE".green().bold()
        );
        Verdict::Safe
    } else {
        println!(
            "File Integrity: {}\nThe file's hash does NOT match. The file may be corrupted or modified.",
            "TAMPERED".red().bold()
        );
        Verdict::Tampered
    };

    Ok(verdict)
}

/// 处理 'Capacity' 命令，返回可容纳的最大消息字节数。
pub fn handle_capacity(args: CapacityArgs) -> Result<u64> {
    let picture = read_image(&args.image)?;
    let image = codec::load_rgb(&picture).map_err(report)?;

    let bits = codec::capacity_bits(&image);
    let bytes = codec::max_message_bytes(&image);
    println!(
        "{}x{} image: {} bits, up to {} message bytes",
        image.width(),
        image.height(),
        bits,
        bytes.to_string().green().bold()
    );

    Ok(bytes)
}

fn read_image(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| {
        format!(
            "Unable to read image file: {}",
            path.to_string_lossy().red().bold()
        )
    })
}

fn ensure_writable(dest: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !dest.exists(),
        "Output file already exists: {}. \nUse --force to overwrite it.",
        dest.to_string_lossy().red().bold()
    );
    Ok(())
}

/// 在输入文件同目录下生成 `<prefix><stem>.<ext>`。
fn default_path(input: &Path, prefix: &str, ext: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    input.with_file_name(format!("{prefix}{stem}.{ext}"))
}

/// 将核心错误转换为面向用户的错误。内部错误只记录日志，不向用户暴露细节。
fn report(err: StegoError) -> anyhow::Error {
    if err.is_internal() {
        log::error!("{:?}", anyhow::Error::from(err));
        anyhow::anyhow!("An unexpected internal error occurred")
    } else {
        err.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_sits_next_to_input() {
        let path = default_path(Path::new("/tmp/pics/cat.jpg"), "stego_", "png");
        assert_eq!(path, PathBuf::from("/tmp/pics/stego_cat.png"));
    }

    #[test]
    fn internal_errors_are_reported_generically() {
        let err = report(StegoError::Internal("secret path /etc/shadow".into()));
        assert_eq!(format!("{err:#}"), "An unexpected internal error occurred");
    }

    #[test]
    fn taxonomy_errors_keep_their_message() {
        let err = report(StegoError::MissingInput("message is required for normal mode"));
        assert!(err.to_string().contains("message is required"));
    }
}
