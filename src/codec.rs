//! # 编解码门面模块
//!
//! 组合帧化、像素编解码与摘要标记，提供一次性的 `encode` 与 `decode` 操作。
//! 两个操作之间不共享任何状态，每次调用独占自己的图像缓冲区。

use crate::constants::HEADER_BITS;
use crate::digest::{self, Payload};
use crate::error::StegoError;
use crate::framing;
use crate::steganography;
use image::{ImageFormat, RgbImage};
use std::fmt;
use std::io::{Cursor, Read};
use std::str::FromStr;

/// 编码模式。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// 隐藏一段文本消息。
    #[default]
    Normal,
    /// 隐藏另一个文件内容的 SHA-256 摘要。
    Integrity,
}

impl FromStr for Mode {
    type Err = StegoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(Mode::Normal),
            "integrity" => Ok(Mode::Integrity),
            other => Err(StegoError::InvalidMode(other.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Normal => "normal",
            Mode::Integrity => "integrity",
        })
    }
}

/// 根据模式构造负载。普通模式需要非空消息，完整性模式需要待摘要的输入流。
pub fn build_payload<R: Read>(
    mode: Mode,
    message: Option<&str>,
    target: Option<R>,
) -> Result<Payload, StegoError> {
    match mode {
        Mode::Normal => match message {
            Some(text) if !text.is_empty() => Ok(Payload::Message(text.to_string())),
            _ => Err(StegoError::MissingInput("message is required for normal mode")),
        },
        Mode::Integrity => {
            let reader = target.ok_or(StegoError::MissingInput(
                "target file is required for integrity mode",
            ))?;
            digest::tag_as_hash(reader)
        }
    }
}

/// 将负载嵌入图像，返回新的图像。失败时原图像不会被写入任何比特。
pub fn encode(image: RgbImage, payload: &Payload) -> Result<RgbImage, StegoError> {
    let bits = framing::frame(&payload.to_bytes())?;
    log::debug!(
        "embedding {} bits ({} header) into {}x{} image",
        bits.len(),
        HEADER_BITS,
        image.width(),
        image.height()
    );
    steganography::embed(image, &bits)
}

/// 从图像中恢复负载。
pub fn decode(image: &RgbImage) -> Result<Payload, StegoError> {
    let header = steganography::extract_header(image);
    let msg_len = framing::unframe_header(&header)?;

    if msg_len == 0 || u64::from(msg_len) > steganography::capacity(image) {
        return Err(StegoError::InvalidStegoImage(msg_len));
    }

    let bits = steganography::extract_payload(image, msg_len as usize);
    let bytes = framing::bits_to_bytes(&bits);
    log::debug!("recovered {} payload bytes", bytes.len());
    Ok(digest::classify(&bytes))
}

/// 将字节解码为 RGB 图像。带透明通道的图像会丢弃 alpha。
pub fn load_rgb(bytes: &[u8]) -> Result<RgbImage, StegoError> {
    image::load_from_memory(bytes)
        .map(|img| img.to_rgb8())
        .map_err(StegoError::InvalidImage)
}

/// 编码入口：输入任意可解码的图像字节与模式相关的输入，输出 PNG 字节。
///
/// 先解码载体图像，再构造负载，因此无效图像不会触发对目标流的读取。
pub fn encode_image_bytes<R: Read>(
    image: &[u8],
    mode: Mode,
    message: Option<&str>,
    target: Option<R>,
) -> Result<Vec<u8>, StegoError> {
    let cover = load_rgb(image)?;
    let payload = build_payload(mode, message, target)?;
    log::info!(
        "encoding {} payload into {}x{} image",
        payload.kind(),
        cover.width(),
        cover.height()
    );
    to_png(&encode(cover, &payload)?)
}

/// 将图像编码为 PNG 字节。
///
/// 只能输出无损格式，否则最低有效位会被破坏。
pub fn to_png(stego: &RgbImage) -> Result<Vec<u8>, StegoError> {
    let mut png = Cursor::new(Vec::new());
    stego
        .write_to(&mut png, ImageFormat::Png)
        .map_err(StegoError::internal)?;
    Ok(png.into_inner())
}

/// 解码入口。
pub fn decode_image_bytes(image: &[u8]) -> Result<Payload, StegoError> {
    decode(&load_rgb(image)?)
}

/// 图像容量 (bits)。
pub fn capacity_bits(image: &RgbImage) -> u64 {
    steganography::capacity(image)
}

/// 该图像能容纳的最长消息字节数。
pub fn max_message_bytes(image: &RgbImage) -> u64 {
    capacity_bits(image).saturating_sub(HEADER_BITS as u64) / 8
}
