//! 偏好设置服务 - 业务能力层
//!
//! 只负责"读写两个界面偏好标志"能力：主题（明/暗）和
//! 同意提示是否已确认。核心扫描逻辑不依赖这些设置。

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// 界面主题
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// 明亮主题
    Light,
    /// 暗色主题
    Dark,
}

/// 持久化的偏好标志
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// 界面主题
    pub theme: Theme,
    /// 用户是否已确认同意提示
    pub consent_accepted: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            consent_accepted: false,
        }
    }
}

impl Preferences {
    /// 切换主题并返回新值
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = match self.theme {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
        self.theme
    }
}

/// 偏好设置存储
///
/// 职责：
/// - 将偏好标志读写到一个小 TOML 文件
/// - 文件不存在时返回默认值
/// - 不出现任何扫描相关类型
pub struct PreferenceStore {
    file_path: String,
}

impl PreferenceStore {
    /// 创建新的偏好设置存储
    pub fn new() -> Self {
        Self {
            file_path: "preferences.toml".to_string(),
        }
    }

    /// 使用自定义文件路径创建
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            file_path: path.into(),
        }
    }

    /// 读取偏好设置
    ///
    /// 文件不存在时返回默认值，内容损坏时报错。
    pub fn load(&self) -> Result<Preferences> {
        if !Path::new(&self.file_path).exists() {
            debug!("偏好文件不存在，使用默认值: {}", self.file_path);
            return Ok(Preferences::default());
        }

        let content = fs::read_to_string(&self.file_path)
            .with_context(|| format!("无法读取偏好文件: {}", self.file_path))?;

        let prefs: Preferences = toml::from_str(&content)
            .with_context(|| format!("无法解析偏好文件: {}", self.file_path))?;

        Ok(prefs)
    }

    /// 保存偏好设置
    pub fn save(&self, prefs: &Preferences) -> Result<()> {
        let content = toml::to_string(prefs).context("偏好设置序列化失败")?;

        fs::write(&self.file_path, content)
            .with_context(|| format!("无法写入偏好文件: {}", self.file_path))?;

        debug!("偏好设置已保存: {}", self.file_path);
        Ok(())
    }
}

impl Default for PreferenceStore {
    fn default() -> Self {
        Self::new()
    }
}
