//! 批量扫描器 - 编排层
//!
//! ## 职责
//!
//! 本模块负责把一批扫描输入分发为并发任务并汇总结果。
//!
//! ## 核心功能
//!
//! 1. **并发分发**：每个输入一个任务，全部立即派发
//! 2. **并发控制**：使用 Semaphore 限制同时解码的数量
//! 3. **屏障汇合**：等待全部任务完成后才产出汇总
//! 4. **顺序稳定**：结果按提交顺序排列，与完成顺序无关
//! 5. **错误隔离**：单个输入出错只记为未命中，不影响其余输入
//!
//! ## 设计特点
//!
//! - **无共享可变状态**：任务之间只共享可重入的解码协作方
//! - **向下委托**：委托 InputFlow 处理单个输入

use futures::future::join_all;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::infrastructure::QrDecode;
use crate::models::{BatchSummary, ScanInput, ScanResult};
use crate::workflow::{InputFlow, ScanCtx};

/// 批量扫描器
pub struct BatchScanner {
    decoder: Arc<dyn QrDecode>,
    config: Config,
}

impl BatchScanner {
    /// 创建新的批量扫描器
    pub fn new(decoder: Arc<dyn QrDecode>, config: Config) -> Self {
        Self { decoder, config }
    }

    /// 扫描一批输入
    ///
    /// 所有任务并发执行；汇总中的 `results` 按提交顺序排列。
    /// 本函数不会失败：协作方的错误被限制在单个输入的边界内。
    pub async fn scan_batch(&self, inputs: Vec<ScanInput>) -> BatchSummary {
        let total_inputs = inputs.len();
        if total_inputs == 0 {
            return BatchSummary::default();
        }

        info!(
            "📦 开始批量扫描: {} 个输入, 最大并发 {}",
            total_inputs, self.config.max_concurrent_scans
        );

        let semaphore = Arc::new(Semaphore::new(self.config.max_concurrent_scans.max(1)));
        let mut task_meta = Vec::with_capacity(total_inputs);
        let mut handles = Vec::with_capacity(total_inputs);

        // 全部任务立即派发，许可在任务内部获取
        for (index, input) in inputs.into_iter().enumerate() {
            let input_index = index + 1;
            let ctx = ScanCtx::new(input_index, input.file_name.clone());
            let flow = InputFlow::new(Arc::clone(&self.decoder), &self.config);
            let semaphore = Arc::clone(&semaphore);

            debug!(
                "[输入 {}] 派发扫描任务 (类型: {})",
                input_index,
                input.kind().label()
            );

            task_meta.push(ctx.clone());
            handles.push(tokio::spawn(async move {
                let _permit = semaphore.acquire_owned().await.ok()?;

                match flow.run(&input, &ctx).await {
                    Ok(result) => result,
                    Err(e) => {
                        error!("[输入 {}] ❌ 处理过程中发生错误: {}", ctx.input_index, e);
                        None
                    }
                }
            }));
        }

        // 屏障：等待全部任务完成（无论成败），再按提交顺序重组
        let outcomes = join_all(handles).await;

        let mut results: Vec<ScanResult> = Vec::new();
        for (ctx, outcome) in task_meta.iter().zip(outcomes) {
            match outcome {
                Ok(Some(result)) => {
                    results.push(result);
                }
                Ok(None) => {
                    info!("[输入 {}] 未找到二维码: {}", ctx.input_index, ctx.file_name);
                }
                Err(e) => {
                    error!("[输入 {}] 任务执行失败: {}", ctx.input_index, e);
                }
            }
        }

        let summary = BatchSummary {
            total_inputs,
            results,
        };

        info!(
            "✓ 批量扫描完成: 命中 {}/{}",
            summary.found(),
            summary.total_inputs
        );

        summary
    }
}
