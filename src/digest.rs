//! # 摘要标记模块
//!
//! 计算任意字节流的 SHA-256 摘要，并定义负载的两种形态：普通消息与带标记的哈希。
//! 标记 (`HASH:`) 写在负载字节内部，解码时据此分类。

use crate::constants::{DIGEST_CHUNK_SIZE, HASH_TAG};
use crate::error::StegoError;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::io::{ErrorKind, Read};

/// 隐藏在图像中的负载。
///
/// 序列化为 `{"type": "message" | "hash", "content": "..."}`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "content")]
pub enum Payload {
    #[serde(rename = "message")]
    Message(String),
    /// 小写十六进制的 SHA-256 摘要，不含标记。
    #[serde(rename = "hash")]
    Digest(String),
}

impl Payload {
    /// 嵌入图像的原始字节。哈希负载带有 `HASH:` 前缀。
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            Payload::Message(text) => text.as_bytes().to_vec(),
            Payload::Digest(hex) => format!("{HASH_TAG}{hex}").into_bytes(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Payload::Message(_) => "message",
            Payload::Digest(_) => "hash",
        }
    }

    pub fn content(&self) -> &str {
        match self {
            Payload::Message(text) | Payload::Digest(text) => text,
        }
    }
}

/// 分块读取 `reader` 直到结束，返回小写十六进制的 SHA-256 摘要。
///
/// 内存占用与输入大小无关。
pub fn sha256_hex<R: Read>(mut reader: R) -> std::io::Result<String> {
    let mut hasher = Sha256::new();
    let mut buf = [0u8; DIGEST_CHUNK_SIZE];

    loop {
        match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => hasher.update(&buf[..n]),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }

    Ok(hex::encode(hasher.finalize()))
}

/// 计算内容摘要并包装为哈希负载。
///
/// # Errors
///
/// 读取失败属于意外故障，返回 [`StegoError::Internal`]。
pub fn tag_as_hash<R: Read>(reader: R) -> Result<Payload, StegoError> {
    let hex = sha256_hex(reader).map_err(StegoError::internal)?;
    log::debug!("computed content digest {hex}");
    Ok(Payload::Digest(hex))
}

/// 根据前缀将恢复的字节分类为哈希或消息。
///
/// 非 UTF-8 字节按有损方式解码。
pub fn classify(payload: &[u8]) -> Payload {
    match payload.strip_prefix(HASH_TAG.as_bytes()) {
        Some(rest) => Payload::Digest(String::from_utf8_lossy(rest).into_owned()),
        None => Payload::Message(String::from_utf8_lossy(payload).into_owned()),
    }
}
