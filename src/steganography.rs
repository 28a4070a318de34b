//! # 像素编解码模块
//!
//! 按固定顺序遍历图像的颜色通道，每个通道的最低有效位写入或读取 1 bit。
//!
//! 遍历顺序是协议的一部分：外层 x (0..width)，内层 y (0..height)，最内层通道 R, G, B。
//! 这**不是**按行扫描。编码与解码都必须通过 [`address`] 定位通道。

use crate::constants::{CHANNELS_PER_PIXEL, HEADER_BITS};
use crate::error::StegoError;
use image::RgbImage;

/// 一个比特在图像中的位置。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelAddr {
    pub x: u32,
    pub y: u32,
    pub channel: usize,
}

/// 将扁平的比特序号映射到 (x, y, 通道)。
///
/// `height` 为图像高度，必须大于 0。
pub fn address(index: usize, height: u32) -> ChannelAddr {
    let pixel = index / CHANNELS_PER_PIXEL;
    let column_len = height as usize;
    ChannelAddr {
        x: (pixel / column_len) as u32,
        y: (pixel % column_len) as u32,
        channel: index % CHANNELS_PER_PIXEL,
    }
}

/// 图像可承载的比特数：每个颜色通道 1 bit。
pub fn capacity(image: &RgbImage) -> u64 {
    u64::from(image.width()) * u64::from(image.height()) * CHANNELS_PER_PIXEL as u64
}

/// 将比特流依次写入各通道的最低有效位，返回修改后的图像。
///
/// 容量检查在修改任何像素之前完成。写完最后一个比特即停止，其余像素保持不变。
pub fn embed(mut image: RgbImage, bits: &[bool]) -> Result<RgbImage, StegoError> {
    let available = capacity(&image);
    let required = bits.len() as u64;
    if required > available {
        return Err(StegoError::Capacity {
            required,
            available,
        });
    }

    let height = image.height();
    for (index, &bit) in bits.iter().enumerate() {
        let addr = address(index, height);
        let value = &mut image.get_pixel_mut(addr.x, addr.y).0[addr.channel];
        *value = (*value & 0xFE) | u8::from(bit);
    }

    Ok(image)
}

/// 读取遍历顺序中前 32 个通道的最低有效位。
///
/// 图像容量不足 32 bit 时返回实际可读的比特，由 [`crate::framing::unframe_header`] 报错。
pub fn extract_header(image: &RgbImage) -> Vec<bool> {
    read_bits(image, 0, HEADER_BITS)
}

/// 读取偏移 `[32, 32 + n_bits)` 处的比特，跳过头部区域。
///
/// 区域超出图像末尾时只返回可读的部分。
pub fn extract_payload(image: &RgbImage, n_bits: usize) -> Vec<bool> {
    read_bits(image, HEADER_BITS, n_bits)
}

fn read_bits(image: &RgbImage, start: usize, len: usize) -> Vec<bool> {
    let limit = usize::try_from(capacity(image)).unwrap_or(usize::MAX);
    let end = start.saturating_add(len).min(limit);
    let height = image.height();

    (start..end)
        .map(|index| {
            let addr = address(index, height);
            image.get_pixel(addr.x, addr.y).0[addr.channel] & 1 == 1
        })
        .collect()
}
