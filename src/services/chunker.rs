//! 载荷分片服务 - 业务能力层
//!
//! 只负责"把长文本切成固定宽度的显示片段"能力

/// 紧凑显示宽度
pub const COMPACT_CHUNK_WIDTH: usize = 28;

/// 默认显示宽度
pub const DEFAULT_CHUNK_WIDTH: usize = 40;

/// 将文本按固定宽度分片
///
/// 按字符边界切分（按码点计数，不会切开多字节字符），最后一片可以更短。
/// 空文本返回空列表。纯函数，无状态，无错误路径。
///
/// # 参数
/// - `text`: 待分片的文本
/// - `width`: 每片的最大字符数
pub fn chunk(text: &str, width: usize) -> Vec<String> {
    if text.is_empty() || width == 0 {
        return Vec::new();
    }

    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(width)
        .map(|piece| piece.iter().collect())
        .collect()
}
