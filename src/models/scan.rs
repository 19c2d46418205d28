//! 扫描数据模型
//!
//! 一次批量扫描中流转的数据单位：
//! - `ScanInput`：一个待扫描的输入（单张图片或多页文档）
//! - `ScanResult`：一次成功的解码结果，产生后不再修改
//! - `BatchSummary`：整个批次的汇总

use serde::Serialize;

use crate::infrastructure::DocumentSource;
use crate::models::frame::Frame;

/// 输入类型标签
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanKind {
    /// 单张静态图片
    Image,
    /// 有序多页文档
    Document,
}

impl ScanKind {
    /// 获取类型的显示名称
    pub fn label(self) -> &'static str {
        match self {
            ScanKind::Image => "图片",
            ScanKind::Document => "文档",
        }
    }
}

/// 扫描输入的数据来源
pub enum ScanSource {
    /// 单张图片的像素帧
    Image(Frame),
    /// 多页文档（通过文档协作方按页渲染）
    Document(Box<dyn DocumentSource>),
}

impl std::fmt::Debug for ScanSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScanSource::Image(frame) => f
                .debug_tuple("Image")
                .field(&format_args!("{}x{}", frame.width, frame.height))
                .finish(),
            ScanSource::Document(doc) => f
                .debug_tuple("Document")
                .field(&format_args!("{} 页", doc.page_count()))
                .finish(),
        }
    }
}

/// 一个待扫描的输入单位
#[derive(Debug)]
pub struct ScanInput {
    /// 输入标识（通常是文件名）
    pub file_name: String,
    /// 数据来源
    pub source: ScanSource,
}

impl ScanInput {
    /// 从单张图片创建扫描输入
    pub fn from_image(file_name: impl Into<String>, frame: Frame) -> Self {
        Self {
            file_name: file_name.into(),
            source: ScanSource::Image(frame),
        }
    }

    /// 从多页文档创建扫描输入
    pub fn from_document(file_name: impl Into<String>, doc: Box<dyn DocumentSource>) -> Self {
        Self {
            file_name: file_name.into(),
            source: ScanSource::Document(doc),
        }
    }

    /// 获取输入类型标签
    pub fn kind(&self) -> ScanKind {
        match self.source {
            ScanSource::Image(_) => ScanKind::Image,
            ScanSource::Document(_) => ScanKind::Document,
        }
    }
}

/// 一次成功的解码结果
///
/// 由编排层在首次成功解码时创建，载荷之后不再修改。
/// 类别是纯推导视图，需要时重新计算，不缓存在结果上。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanResult {
    /// 来源输入的标识
    pub source_id: String,
    /// 解码出的载荷文本
    pub payload: String,
}

impl ScanResult {
    /// 创建新的扫描结果
    pub fn new(source_id: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            source_id: source_id.into(),
            payload: payload.into(),
        }
    }
}

/// 批量扫描汇总
///
/// `results` 按输入提交顺序排列，与任务完成顺序无关。
#[derive(Debug, Default, Serialize)]
pub struct BatchSummary {
    /// 本批次处理的输入总数
    pub total_inputs: usize,
    /// 成功解码的结果列表（按提交顺序）
    pub results: Vec<ScanResult>,
}

impl BatchSummary {
    /// 成功解码的输入数量
    pub fn found(&self) -> usize {
        self.results.len()
    }

    /// 未找到二维码的输入数量
    pub fn missed(&self) -> usize {
        self.total_inputs - self.results.len()
    }
}
