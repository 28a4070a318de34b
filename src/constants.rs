/// 长度头部占用的比特数。
/// 头部是一个大端 `u32`，值为其后负载的比特数。
pub const HEADER_BITS: usize = 32;

/// 每个像素参与隐写的颜色通道数 (R, G, B)。
/// 每个通道的最低有效位存储 1 bit，因此图像容量为 `width * height * 3` bits。
pub const CHANNELS_PER_PIXEL: usize = 3;

/// 完整性模式下负载的前缀，用于区分哈希与普通消息。
pub const HASH_TAG: &str = "HASH:";

/// 计算文件摘要时每次读取的字节数。
pub const DIGEST_CHUNK_SIZE: usize = 4096;
