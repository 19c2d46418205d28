//! 批量扫描应用 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责批量扫描的生命周期和资源管理。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：装配解码器、批量扫描器和展示/报告服务
//! 2. **批量加载**：扫描并加载输入目录下的所有采集文件
//! 3. **批量执行**：委托 BatchScanner 并发处理
//! 4. **结果呈现**：逐条渲染分类徽章和分片载荷
//! 5. **报告输出**：把汇总写成 JSON 报告
//!
//! ## 设计特点
//!
//! - **顶层编排**：不处理单个输入的细节
//! - **向下委托**：委托 batch_scanner 和 workflow 层

use anyhow::Result;
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::Config;
use crate::infrastructure::{QrDecode, RenderSink, TerminalRenderSink, TextFrameDecoder};
use crate::models::{load_all_capture_files, BatchSummary, ScanInput};
use crate::orchestrator::batch_scanner::BatchScanner;
use crate::services::{PayloadClassifier, ReportWriter, ResultPresenter};
use crate::utils::logging;

/// 应用主结构
pub struct App {
    config: Config,
    scanner: BatchScanner,
    presenter: ResultPresenter,
    classifier: PayloadClassifier,
    report_writer: ReportWriter,
}

impl App {
    /// 初始化应用（离线回放模式）
    ///
    /// 使用文本回放解码器处理采集文件；
    /// 嵌入真实解码器时请使用 [`App::with_decoder`]。
    pub async fn initialize(config: Config) -> Result<Self> {
        Self::with_decoder(config, Arc::new(TextFrameDecoder)).await
    }

    /// 使用指定的解码协作方初始化应用
    pub async fn with_decoder(config: Config, decoder: Arc<dyn QrDecode>) -> Result<Self> {
        logging::log_startup(&config);

        let scanner = BatchScanner::new(decoder, config.clone());
        let presenter = ResultPresenter::new(config.chunk_width)?;
        let classifier = PayloadClassifier::new()?;
        let report_writer = ReportWriter::new(config.report_file.clone());

        Ok(Self {
            config,
            scanner,
            presenter,
            classifier,
            report_writer,
        })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<()> {
        // 加载所有待扫描的输入
        let inputs = self.load_inputs().await?;

        if inputs.is_empty() {
            warn!("⚠️ 没有找到待扫描的采集文件，程序结束");
            return Ok(());
        }

        logging::log_inputs_loaded(inputs.len(), self.config.max_concurrent_scans);

        // 批量扫描
        let summary = self.scanner.scan_batch(inputs).await;

        // 逐条呈现结果
        self.render_results(&summary);

        // 输出报告和最终统计
        self.report_writer.write(&summary, &self.classifier)?;
        logging::print_final_stats(&summary, &self.config);

        Ok(())
    }

    /// 加载输入
    async fn load_inputs(&self) -> Result<Vec<ScanInput>> {
        info!("\n📁 正在扫描待处理的采集文件...");
        load_all_capture_files(&self.config.input_folder).await
    }

    /// 逐条呈现扫描结果
    fn render_results(&self, summary: &BatchSummary) {
        let mut sink = TerminalRenderSink;

        for result in &summary.results {
            sink.set_status(&format!("—— {} ——", result.source_id));
            self.presenter.present(&mut sink, &result.payload);
        }
    }
}
