//! 单个输入的扫描流程 - 流程层
//!
//! 核心职责：定义"一个扫描输入"的完整处理流程
//!
//! 流程顺序：
//! 1. 图片输入：对唯一的一帧做一次解码尝试
//! 2. 文档输入：按页序逐页渲染并解码，首次命中即停止
//! 3. 全部落空：该输入记为未命中（不是错误）

use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, info};

use crate::config::Config;
use crate::infrastructure::{DocumentSource, QrDecode};
use crate::models::{Frame, ScanInput, ScanResult, ScanSource};
use crate::workflow::scan_ctx::ScanCtx;

/// 单个输入的扫描流程
///
/// - 编排一个输入从像素到载荷的完整路径
/// - 不持有任何稀缺资源
/// - 只依赖解码能力（infrastructure）
pub struct InputFlow {
    decoder: Arc<dyn QrDecode>,
    page_scan_limit: usize,
    render_scale: f32,
    verbose_logging: bool,
}

impl InputFlow {
    /// 创建新的输入扫描流程
    pub fn new(decoder: Arc<dyn QrDecode>, config: &Config) -> Self {
        Self {
            decoder,
            page_scan_limit: config.page_scan_limit,
            render_scale: config.render_scale,
            verbose_logging: config.verbose_logging,
        }
    }

    /// 处理一个扫描输入
    ///
    /// # 返回
    /// - `Ok(Some(result))`：找到二维码
    /// - `Ok(None)`：整个输入中没有二维码（未命中）
    /// - `Err(_)`：解码或渲染协作方报错（由编排层记为未命中）
    pub async fn run(&self, input: &ScanInput, ctx: &ScanCtx) -> Result<Option<ScanResult>> {
        match &input.source {
            ScanSource::Image(frame) => self.scan_image(frame, ctx),
            ScanSource::Document(doc) => self.scan_document(doc.as_ref(), ctx),
        }
    }

    /// 扫描单张图片：只有一帧，只做一次解码尝试
    fn scan_image(&self, frame: &Frame, ctx: &ScanCtx) -> Result<Option<ScanResult>> {
        let payload = self.try_decode(frame, ctx)?;

        Ok(payload.map(|p| ScanResult::new(ctx.file_name.clone(), p)))
    }

    /// 扫描多页文档：按页序逐页解码，首次命中即停止
    ///
    /// 页内迭代是顺序的（渲染成本占主导），不同输入之间才并发。
    fn scan_document(
        &self,
        doc: &dyn DocumentSource,
        ctx: &ScanCtx,
    ) -> Result<Option<ScanResult>> {
        let page_count = doc.page_count();
        let scan_limit = if self.page_scan_limit == 0 {
            page_count
        } else {
            page_count.min(self.page_scan_limit)
        };

        if scan_limit < page_count {
            info!(
                "[输入 {}] ⚠️ 文档共 {} 页，超出扫描上限，只扫描前 {} 页",
                ctx.input_index, page_count, scan_limit
            );
        }

        for page_number in 1..=scan_limit {
            if self.verbose_logging {
                debug!(
                    "[输入 {}] 正在扫描第 {}/{} 页",
                    ctx.input_index, page_number, page_count
                );
            }

            let frame = doc.render_page(page_number, self.render_scale)?;

            if let Some(payload) = self.try_decode(&frame, ctx)? {
                info!(
                    "[输入 {}] ✓ 在第 {} 页找到二维码",
                    ctx.input_index, page_number
                );
                return Ok(Some(ScanResult::new(ctx.file_name.clone(), payload)));
            }
        }

        Ok(None)
    }

    /// 对一帧做一次解码尝试，空载荷视为未命中
    fn try_decode(&self, frame: &Frame, ctx: &ScanCtx) -> Result<Option<String>> {
        match self.decoder.decode(frame)? {
            Some(payload) if !payload.is_empty() => {
                debug!(
                    "[输入 {}] 解码成功，载荷预览: {}",
                    ctx.input_index,
                    crate::utils::logging::truncate_text(&payload, 80)
                );
                Ok(Some(payload))
            }
            _ => Ok(None),
        }
    }
}
