//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责批量处理和流程调度，是整个系统的"指挥中心"。
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 批量扫描应用
//! - 管理应用生命周期（初始化、运行、报告）
//! - 批量加载采集文件（Vec<ScanInput>）
//! - 呈现结果并输出 JSON 报告
//!
//! ### `batch_scanner` - 批量扫描器
//! - 每个输入派发一个并发任务（Semaphore 控制并发量）
//! - 屏障汇合：等待全部任务完成
//! - 按提交顺序重组结果，与完成顺序无关
//! - 单个输入的错误只记为未命中
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (应用生命周期)
//!     ↓
//! batch_scanner (处理 Vec<ScanInput>)
//!     ↓
//! workflow::InputFlow (处理单个 ScanInput)
//!     ↓
//! services (能力层：classify / chunk / present / report)
//!     ↓
//! infrastructure (协作方接缝：decode / camera / document / render / clipboard)
//! ```
//!
//! ## 设计原则
//!
//! 1. **单一职责**：batch_processor 管生命周期，batch_scanner 管并发
//! 2. **向下依赖**：编排层 → workflow → services → infrastructure
//! 3. **无业务逻辑**：只做调度和统计，不做具体分类判断

pub mod batch_processor;
pub mod batch_scanner;

// 重新导出主要类型
pub use batch_processor::App;
pub use batch_scanner::BatchScanner;
