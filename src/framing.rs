//! # 比特帧化模块
//!
//! 将字节负载转换为自定界的比特流：32 位大端长度头部，后跟负载比特 (每字节高位在前)。

use crate::constants::HEADER_BITS;
use crate::error::StegoError;

/// 在负载前加上长度头部，返回完整的比特流。
///
/// 头部的值是负载的**比特数**，而非字节数。
///
/// # Errors
///
/// 负载比特数超出 `u32` 范围时返回 [`StegoError::PayloadTooLong`]。
pub fn frame(payload: &[u8]) -> Result<Vec<bool>, StegoError> {
    let payload_bits = payload
        .len()
        .checked_mul(8)
        .and_then(|bits| u32::try_from(bits).ok())
        .ok_or(StegoError::PayloadTooLong(payload.len()))?;

    let mut bits = Vec::with_capacity(HEADER_BITS + payload.len() * 8);
    bits.extend((0..HEADER_BITS).rev().map(|i| (payload_bits >> i) & 1 == 1));
    bits.extend(bytes_to_bits(payload));
    Ok(bits)
}

/// 将恰好 32 个比特解释为大端无符号整数。多于 32 个时只使用前 32 个。
pub fn unframe_header(bits: &[bool]) -> Result<u32, StegoError> {
    if bits.len() < HEADER_BITS {
        return Err(StegoError::Framing {
            available: bits.len(),
        });
    }

    Ok(bits[..HEADER_BITS]
        .iter()
        .fold(0u32, |acc, &bit| (acc << 1) | u32::from(bit)))
}

/// 每 8 个比特组成一个字节，高位在前。末尾不足 8 位的部分被丢弃。
pub fn bits_to_bytes(bits: &[bool]) -> Vec<u8> {
    bits.chunks_exact(8)
        .map(|chunk| chunk.iter().fold(0u8, |acc, &bit| (acc << 1) | u8::from(bit)))
        .collect()
}

fn bytes_to_bits(bytes: &[u8]) -> impl Iterator<Item = bool> + '_ {
    bytes
        .iter()
        .flat_map(|&byte| (0..8).rev().map(move |i| (byte >> i) & 1 == 1))
}
