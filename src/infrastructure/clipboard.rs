//! 剪贴板协作方 - 基础设施层

use crate::error::AppResult;

/// 剪贴板写入能力
///
/// 写入失败不是致命错误：调用方以临时通知的形式向用户提示，
/// 不弹出错误对话框。
pub trait Clipboard {
    /// 将文本写入剪贴板
    fn copy(&self, text: &str) -> AppResult<()>;
}
