//! 文档页面协作方 - 基础设施层
//!
//! PDF 渲染不属于本系统的职责范围，这里只定义按页渲染的能力接口。

use crate::error::AppResult;
use crate::models::Frame;

/// 多页文档的页面渲染能力
///
/// 职责：
/// - 报告总页数
/// - 将指定页渲染为像素帧
/// - 页码从 1 开始
pub trait DocumentSource: Send + Sync {
    /// 文档总页数
    fn page_count(&self) -> usize;

    /// 渲染指定页
    ///
    /// # 参数
    /// - `page_number`: 页码（从 1 开始）
    /// - `scale`: 渲染倍率（2x 可提高小尺寸二维码的识别率）
    fn render_page(&self, page_number: usize, scale: f32) -> AppResult<Frame>;
}
