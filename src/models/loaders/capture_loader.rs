use crate::models::{Frame, ScanInput};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

/// 从载荷采集文件加载数据并转换为 ScanInput 对象
///
/// 采集文件是一个纯文本文件，内容为一条已解码的二维码载荷，
/// 由文本回放解码器（TextFrameDecoder）按帧回放。
pub async fn load_capture_file(capture_path: &Path) -> Result<ScanInput> {
    let content = fs::read_to_string(capture_path)
        .await
        .with_context(|| format!("无法读取采集文件: {}", capture_path.display()))?;

    let file_name = capture_path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    Ok(ScanInput::from_image(file_name, Frame::from_text(content)))
}

/// 从文件夹中加载所有采集文件并转换为 ScanInput 对象列表
///
/// 返回顺序即提交顺序，批量扫描结果按此顺序排列。
pub async fn load_all_capture_files(folder_path: &str) -> Result<Vec<ScanInput>> {
    let folder = PathBuf::from(folder_path);

    if !folder.exists() {
        anyhow::bail!("文件夹不存在: {}", folder_path);
    }

    let mut inputs = Vec::new();
    let mut entries = fs::read_dir(&folder)
        .await
        .with_context(|| format!("无法读取文件夹: {}", folder_path))?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("txt") {
            tracing::info!(
                "正在加载: {}",
                path.file_name().unwrap_or_default().to_string_lossy()
            );

            match load_capture_file(&path).await {
                Ok(input) => {
                    inputs.push(input);
                }
                Err(e) => {
                    tracing::warn!("加载文件失败 {}: {}", path.display(), e);
                }
            }
        }
    }

    // 目录遍历顺序不稳定，按文件名排序保证批次顺序可复现
    inputs.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    Ok(inputs)
}
