//! 像素帧
//!
//! 解码器的统一输入单位：摄像头抓取的一帧、上传的一张图片、
//! 或文档渲染出的一页，最终都是一块像素数据。

/// 像素帧
///
/// 只携带原始字节和尺寸，不关心像素格式，格式约定由解码协作方决定。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// 原始像素数据
    pub data: Vec<u8>,
    /// 宽度（像素）
    pub width: u32,
    /// 高度（像素）
    pub height: u32,
}

impl Frame {
    /// 创建新的像素帧
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            data,
            width,
            height,
        }
    }

    /// 从文本构造回放帧
    ///
    /// 用于离线回放已解码的载荷文本（测试与 CLI 驱动）：
    /// 帧字节即 UTF-8 文本，尺寸记为 0x0。
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            data: text.into_bytes(),
            width: 0,
            height: 0,
        }
    }

    /// 帧是否不含任何像素数据
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
