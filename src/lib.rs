//! # stegmark 库
//!
//! 本库包含 LSB 隐写工具的核心逻辑：比特帧化、像素编解码、摘要标记及其组合。

// 声明库包含的所有模块。

pub mod cli;
pub mod codec;
pub mod constants;
pub mod digest;
pub mod error;
pub mod framing;
pub mod handler;
pub mod steganography;
