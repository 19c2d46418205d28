use std::fmt;

/// 应用程序错误类型
#[derive(Debug)]
pub enum AppError {
    /// 摄像头相关错误
    Camera(CameraError),
    /// 文档渲染相关错误
    Document(DocumentError),
    /// 剪贴板相关错误
    Clipboard(ClipboardError),
    /// 文件操作错误
    File(FileError),
    /// 其他错误（用于包装第三方库错误）
    Other(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Camera(e) => write!(f, "摄像头错误: {}", e),
            AppError::Document(e) => write!(f, "文档错误: {}", e),
            AppError::Clipboard(e) => write!(f, "剪贴板错误: {}", e),
            AppError::File(e) => write!(f, "文件错误: {}", e),
            AppError::Other(msg) => write!(f, "错误: {}", msg),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Camera(e) => Some(e),
            AppError::Document(e) => Some(e),
            AppError::Clipboard(e) => Some(e),
            AppError::File(e) => Some(e),
            AppError::Other(_) => None,
        }
    }
}

/// 摄像头相关错误
#[derive(Debug)]
pub enum CameraError {
    /// 获取摄像头视频流失败（权限被拒绝、无可用设备等）
    AcquisitionFailed {
        device: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 抓取视频帧失败
    FrameGrabFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 视频流已被释放
    StreamReleased,
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraError::AcquisitionFailed { device, source } => {
                write!(f, "无法获取摄像头视频流 (设备: {}): {}", device, source)
            }
            CameraError::FrameGrabFailed { source } => {
                write!(f, "抓取视频帧失败: {}", source)
            }
            CameraError::StreamReleased => {
                write!(f, "视频流已被释放")
            }
        }
    }
}

impl std::error::Error for CameraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CameraError::AcquisitionFailed { source, .. }
            | CameraError::FrameGrabFailed { source } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            CameraError::StreamReleased => None,
        }
    }
}

/// 文档渲染相关错误
#[derive(Debug)]
pub enum DocumentError {
    /// 页码超出范围（页码从 1 开始）
    PageOutOfRange {
        page_number: usize,
        page_count: usize,
    },
    /// 渲染页面失败（文档损坏、无法解析等）
    RenderFailed {
        page_number: usize,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentError::PageOutOfRange {
                page_number,
                page_count,
            } => {
                write!(f, "页码 {} 超出范围 [1, {}]", page_number, page_count)
            }
            DocumentError::RenderFailed {
                page_number,
                source,
            } => {
                write!(f, "渲染第 {} 页失败: {}", page_number, source)
            }
        }
    }
}

impl std::error::Error for DocumentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DocumentError::RenderFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            DocumentError::PageOutOfRange { .. } => None,
        }
    }
}

/// 剪贴板相关错误
#[derive(Debug)]
pub enum ClipboardError {
    /// 写入剪贴板失败
    CopyFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardError::CopyFailed { source } => {
                write!(f, "写入剪贴板失败: {}", source)
            }
        }
    }
}

impl std::error::Error for ClipboardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClipboardError::CopyFailed { source } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
        }
    }
}

/// 文件操作错误
#[derive(Debug)]
pub enum FileError {
    /// 读取文件失败
    ReadFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 写入文件失败
    WriteFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// TOML 解析失败
    TomlParseFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 目录不存在
    DirectoryNotFound {
        path: String,
    },
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileError::ReadFailed { path, source } => {
                write!(f, "读取文件失败 ({}): {}", path, source)
            }
            FileError::WriteFailed { path, source } => {
                write!(f, "写入文件失败 ({}): {}", path, source)
            }
            FileError::TomlParseFailed { path, source } => {
                write!(f, "TOML解析失败 ({}): {}", path, source)
            }
            FileError::DirectoryNotFound { path } => write!(f, "目录不存在: {}", path),
        }
    }
}

impl std::error::Error for FileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileError::ReadFailed { source, .. }
            | FileError::WriteFailed { source, .. }
            | FileError::TomlParseFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            _ => None,
        }
    }
}

// ========== 从常见错误类型转换 ==========
// 注意：不需要手动实现 From<AppError> for anyhow::Error，
// 因为 anyhow 已经为所有实现了 std::error::Error 的类型提供了自动实现

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: String::new(),
            source: Box::new(err),
        })
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Other(format!("JSON序列化失败: {}", err))
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::File(FileError::TomlParseFailed {
            path: String::new(), // TOML错误通常不包含路径信息
            source: Box::new(err),
        })
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建摄像头获取失败错误
    pub fn camera_acquisition_failed(
        device: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Camera(CameraError::AcquisitionFailed {
            device: device.into(),
            source: Box::new(source),
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
