//! # 错误类型模块
//!
//! 定义编解码核心向调用方暴露的全部错误种类。

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StegoError {
    /// 输入字节无法解码为受支持的光栅图像。
    #[error("Invalid or corrupted image file provided")]
    InvalidImage(#[source] image::ImageError),

    /// 帧化后的比特数超过图像可用的通道容量，在修改任何像素之前检测。
    #[error("Message is too large for the provided image. Required: {required} bits, Available: {available} bits")]
    Capacity { required: u64, available: u64 },

    /// 所选模式需要的输入 (消息文本或目标文件) 缺失。
    #[error("Missing required input: {0}")]
    MissingInput(&'static str),

    #[error("Invalid mode specified: '{0}' (expected 'normal' or 'integrity')")]
    InvalidMode(String),

    /// 读取长度头部时可用比特不足 32 个。
    #[error("Could not extract message length, only {available} bits available. Invalid stego image")]
    Framing { available: usize },

    /// 负载的比特数无法用 32 位头部表示。
    #[error("Payload of {0} bytes cannot be described by a 32-bit length header")]
    PayloadTooLong(usize),

    /// 头部给出的长度为零或超过图像容量。
    #[error("No valid hidden message found (header length {0})")]
    InvalidStegoImage(u32),

    /// 其他意外故障。显示文本不包含内部细节，细节只能通过 `source()` 获得。
    #[error("An unexpected internal error occurred")]
    Internal(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl StegoError {
    /// 是否属于通用内部错误，而非调用方可处理的错误分类。
    pub fn is_internal(&self) -> bool {
        matches!(self, StegoError::Internal(_))
    }

    pub(crate) fn internal<E>(source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        StegoError::Internal(source.into())
    }
}
