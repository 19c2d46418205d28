//! 扫描处理上下文
//!
//! 封装"我正在处理这一批里的第几个输入"这一信息

use std::fmt::Display;

/// 扫描处理上下文
///
/// 包含处理单个扫描输入所需的全部上下文信息
#[derive(Debug, Clone)]
pub struct ScanCtx {
    /// 输入在批次中的索引（从1开始，仅用于日志显示）
    pub input_index: usize,

    /// 输入标识（通常是文件名）
    pub file_name: String,
}

impl ScanCtx {
    /// 创建新的扫描上下文
    pub fn new(input_index: usize, file_name: String) -> Self {
        Self {
            input_index,
            file_name,
        }
    }
}

impl Display for ScanCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[输入#{} 文件#{}]", self.input_index, self.file_name)
    }
}
