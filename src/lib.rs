//! # QR Scan Reader
//!
//! 一个用于二维码载荷分类与批量扫描的 Rust 库
//!
//! ## 架构设计
//!
//! 本系统采用严格的四层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 定义与外部协作方的接缝，只暴露能力
//! - `QrDecode` - 二维码解码能力（每帧一次解码尝试）
//! - `CameraDevice` / `CameraStream` - 摄像头视频流（稀缺资源）
//! - `DocumentSource` - 多页文档按页渲染能力
//! - `RenderSink` / `Clipboard` - 展示与剪贴板能力
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，每个服务一个能力
//! - `PayloadClassifier` - 载荷分类能力（有序规则，先命中生效）
//! - `chunker` - 载荷分片能力
//! - `ResultPresenter` - 结果呈现与复制能力
//! - `PreferenceStore` - 界面偏好标志读写能力
//! - `ReportWriter` - JSON 报告输出能力
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一个输入"的完整处理流程
//! - `ScanCtx` - 上下文封装（第几个输入 + 文件名）
//! - `InputFlow` - 单个输入的扫描流程（图片单帧 / 文档逐页短路）
//! - `CameraFlow` - 摄像头单次扫描状态机（协作式轮询 + 可取消）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_scanner` - 批量扫描器，并发分发与屏障汇合
//! - `orchestrator/batch_processor` - 应用生命周期与报告输出
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod infrastructure;

pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use infrastructure::{
    CameraDevice, CameraStream, Clipboard, DocumentSource, QrDecode, RenderSink,
    TerminalRenderSink, TextFrameDecoder,
};
pub use models::{BatchSummary, Category, Frame, ScanInput, ScanKind, ScanResult, ScanSource};
pub use orchestrator::{App, BatchScanner};
pub use services::{
    chunk, validate_pix, PayloadClassifier, PreferenceStore, Preferences, ResultPresenter, Theme,
};
pub use workflow::{CameraFlow, InputFlow, ScanCtx, ScanState, StopHandle};
