//! 结果展示服务 - 业务能力层
//!
//! 只负责"把一条载荷呈现给用户"能力：状态文本、分类徽章、
//! 分片后的载荷文本，以及复制到剪贴板。不关心载荷从哪来。

use anyhow::Result;
use tracing::{debug, warn};

use crate::infrastructure::{Clipboard, RenderSink};
use crate::services::chunker;
use crate::services::classifier::PayloadClassifier;

/// 结果展示服务
pub struct ResultPresenter {
    classifier: PayloadClassifier,
    chunk_width: usize,
}

impl ResultPresenter {
    /// 创建新的结果展示服务
    pub fn new(chunk_width: usize) -> Result<Self> {
        Ok(Self {
            classifier: PayloadClassifier::new()?,
            chunk_width,
        })
    }

    /// 呈现一条解码结果
    ///
    /// 依次更新状态、绘制分类徽章、绘制分片载荷。
    /// 空载荷只清空状态，不绘制任何内容。
    pub fn present(&self, sink: &mut dyn RenderSink, payload: &str) {
        if payload.is_empty() {
            return;
        }

        let category = self.classifier.classify(payload);
        debug!("载荷分类: {} (长度 {} 字符)", category, payload.chars().count());

        sink.set_status("检测到二维码");
        sink.render_badge(category);
        sink.render_payload(&chunker::chunk(payload, self.chunk_width));
    }

    /// 将载荷复制到剪贴板
    ///
    /// 复制失败不是致命错误，只以临时通知提示用户。
    pub fn copy_to_clipboard(
        &self,
        clipboard: &dyn Clipboard,
        sink: &mut dyn RenderSink,
        payload: &str,
    ) {
        if payload.is_empty() {
            return;
        }

        match clipboard.copy(payload) {
            Ok(()) => {
                sink.show_toast("二维码内容已复制！");
            }
            Err(e) => {
                warn!("复制到剪贴板失败: {}", e);
                sink.show_toast("复制二维码内容失败。");
            }
        }
    }
}
