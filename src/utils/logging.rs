use tracing::info;
use tracing_subscriber::EnvFilter;

/// 日志工具模块
///
/// 提供日志初始化和批量扫描过程的格式化输出
use crate::config::Config;
use crate::models::BatchSummary;

/// 初始化全局日志订阅器
///
/// 默认 info 级别，可通过 RUST_LOG 环境变量覆盖。
/// 重复调用无副作用（测试中会多次初始化）。
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 批量二维码扫描模式");
    info!("📊 最大并发数: {}", config.max_concurrent_scans);
    info!("📁 输入目录: {}", config.input_folder);
    info!("{}", "=".repeat(60));
}

/// 记录输入加载信息
pub fn log_inputs_loaded(total: usize, max_concurrent: usize) {
    info!("✓ 找到 {} 个待扫描的输入", total);
    info!("📋 最多同时解码 {} 个\n", max_concurrent);
}

/// 打印最终统计信息
pub fn print_final_stats(summary: &BatchSummary, config: &Config) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部扫描完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 命中: {}/{}", summary.found(), summary.total_inputs);
    info!("❌ 未命中: {}", summary.missed());
    info!("{}", "=".repeat(60));
    info!("\n报告已保存至: {}", config.report_file);
}

/// 截断长文本用于日志显示
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
