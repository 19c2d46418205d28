//! 报告写入服务 - 业务能力层
//!
//! 只负责"把批量扫描汇总写成 JSON 报告"能力，不关心扫描流程

use anyhow::{Context, Result};
use serde_json::json;
use tracing::debug;

use crate::models::BatchSummary;
use crate::services::classifier::PayloadClassifier;

/// 报告写入服务
pub struct ReportWriter {
    report_file_path: String,
}

impl ReportWriter {
    /// 创建新的报告写入服务
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            report_file_path: path.into(),
        }
    }

    /// 写入批量扫描报告
    ///
    /// 每条结果附带即时推导的类别（类别不缓存在结果上）。
    pub fn write(&self, summary: &BatchSummary, classifier: &PayloadClassifier) -> Result<()> {
        let results: Vec<_> = summary
            .results
            .iter()
            .map(|r| {
                json!({
                    "source_id": r.source_id,
                    "payload": r.payload,
                    "category": classifier.classify(&r.payload),
                })
            })
            .collect();

        let report = json!({
            "generated_at": chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            "total_inputs": summary.total_inputs,
            "found": summary.found(),
            "missed": summary.missed(),
            "results": results,
        });

        let content = serde_json::to_string_pretty(&report).context("报告序列化失败")?;

        std::fs::write(&self.report_file_path, content)
            .with_context(|| format!("无法写入报告文件: {}", self.report_file_path))?;

        debug!("报告已写入: {}", self.report_file_path);
        Ok(())
    }
}
