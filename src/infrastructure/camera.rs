//! 摄像头协作方 - 基础设施层
//!
//! 摄像头驱动不属于本系统的职责范围，这里只定义获取视频流和
//! 逐帧抓取的能力接口。视频流是稀缺资源：同一时刻只由单次扫描
//! 流程独占持有，所有退出路径都必须释放。

use crate::error::AppResult;
use crate::models::Frame;

/// 摄像头设备
///
/// 职责：
/// - 描述一个可用的视频输入设备
/// - 暴露"打开视频流"的能力
pub trait CameraDevice {
    /// 设备显示名称（用于日志和错误信息）
    fn label(&self) -> String;

    /// 打开视频流
    ///
    /// 获取失败（权限被拒绝、设备不存在）返回错误，
    /// 由调用方决定如何向用户呈现。
    fn open(&self) -> AppResult<Box<dyn CameraStream>>;
}

/// 已打开的摄像头视频流
///
/// 职责：
/// - 逐帧提供像素数据
/// - `release()` 停止所有轨道；重复调用无副作用
pub trait CameraStream: Send {
    /// 抓取下一帧
    fn next_frame(&mut self) -> AppResult<Frame>;

    /// 释放视频流（停止所有轨道）
    fn release(&mut self);
}
