//! 渲染协作方 - 基础设施层
//!
//! 展示层（DOM、终端等）通过本接口接收扫描结果。所有绘制操作
//! 都是"先清空再绘制"的幂等语义。

use crate::models::Category;

/// 结果展示能力
pub trait RenderSink: Send {
    /// 更新状态文本
    fn set_status(&mut self, message: &str);

    /// 绘制一枚分类徽章（先清空再绘制）
    fn render_badge(&mut self, category: Category);

    /// 绘制分片后的载荷文本（先清空再绘制）
    fn render_payload(&mut self, chunks: &[String]);

    /// 显示一条临时通知
    fn show_toast(&mut self, message: &str);
}

/// 终端展示实现
///
/// CLI 驱动使用：把状态、徽章和载荷分片打印到日志。
#[derive(Debug, Default)]
pub struct TerminalRenderSink;

impl RenderSink for TerminalRenderSink {
    fn set_status(&mut self, message: &str) {
        tracing::info!("状态: {}", message);
    }

    fn render_badge(&mut self, category: Category) {
        tracing::info!("🏷️ 检测到二维码 ({})", category.label());
    }

    fn render_payload(&mut self, chunks: &[String]) {
        for chunk in chunks {
            tracing::info!("  {}", chunk);
        }
    }

    fn show_toast(&mut self, message: &str) {
        tracing::info!("💬 {}", message);
    }
}
