/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 同时处理的扫描输入数量
    pub max_concurrent_scans: usize,
    /// 待扫描载荷文件存放目录
    pub input_folder: String,
    /// 批量扫描报告输出文件（JSON）
    pub report_file: String,
    /// 单个文档最多扫描的页数（0 表示不限制）
    pub page_scan_limit: usize,
    /// 文档页面渲染倍率（放大以提高小尺寸二维码的识别率）
    pub render_scale: f32,
    /// 载荷分片显示宽度
    pub chunk_width: usize,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_concurrent_scans: 8,
            input_folder: "captures".to_string(),
            report_file: "scan_report.json".to_string(),
            page_scan_limit: 50,
            render_scale: 2.0,
            chunk_width: 40,
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            max_concurrent_scans: std::env::var("MAX_CONCURRENT_SCANS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.max_concurrent_scans),
            input_folder: std::env::var("INPUT_FOLDER").unwrap_or(default.input_folder),
            report_file: std::env::var("REPORT_FILE").unwrap_or(default.report_file),
            page_scan_limit: std::env::var("PAGE_SCAN_LIMIT").ok().and_then(|v| v.parse().ok()).unwrap_or(default.page_scan_limit),
            render_scale: std::env::var("RENDER_SCALE").ok().and_then(|v| v.parse().ok()).unwrap_or(default.render_scale),
            chunk_width: std::env::var("CHUNK_WIDTH").ok().and_then(|v| v.parse().ok()).unwrap_or(default.chunk_width),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }
}
