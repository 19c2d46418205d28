//! 二维码解码协作方 - 基础设施层
//!
//! 解码本身不属于本系统的职责范围，这里只定义解码能力的接口。
//! 真实部署时由宿主注入实际的二维码解码器。

use anyhow::Result;

use crate::models::Frame;

/// 二维码解码能力
///
/// 职责：
/// - 对单个像素帧做一次解码尝试
/// - 对输入保持纯函数语义，调用之间不保留状态
/// - 可被多个并发任务同时调用（每次调用操作独立的输入数据）
pub trait QrDecode: Send + Sync {
    /// 对一帧做一次解码尝试
    ///
    /// # 返回
    /// - `Ok(Some(payload))`：帧中找到二维码，返回载荷文本
    /// - `Ok(None)`：帧中没有二维码
    /// - `Err(_)`：帧数据无法处理（图像损坏等）
    fn decode(&self, frame: &Frame) -> Result<Option<String>>;
}

/// 文本回放解码器
///
/// 将帧字节按 UTF-8 文本解读，用于回放离线采集的载荷文件
/// （CLI 驱动和测试）。真实的二维码解码器通过同一个接口注入。
pub struct TextFrameDecoder;

impl QrDecode for TextFrameDecoder {
    fn decode(&self, frame: &Frame) -> Result<Option<String>> {
        if frame.is_empty() {
            return Ok(None);
        }

        let text = std::str::from_utf8(&frame.data)?;
        let trimmed = text.trim();

        if trimmed.is_empty() {
            Ok(None)
        } else {
            Ok(Some(trimmed.to_string()))
        }
    }
}
