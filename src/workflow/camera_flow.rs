//! 摄像头单次扫描流程 - 流程层
//!
//! 核心职责：定义"从摄像头读一个二维码"的完整状态机
//!
//! 状态流转：
//! 1. Idle → Starting：收到启动命令，获取视频流
//! 2. Starting → Scanning：视频流就绪，进入逐帧轮询
//! 3. Scanning → Found：某帧解码成功，呈现结果并自动停止
//! 4. 任意状态 → Error：获取视频流失败，提示用户，不自动重试
//! 5. 任意时刻 → Stopped：停止命令释放视频流，可重新启动
//!
//! 轮询是协作式的：每次解码尝试完成后才调度下一次尝试，尝试之间
//! 让出执行权。停止命令只翻转扫描标志，轮询循环在调度下一次尝试
//! 前检查标志，因此最多再完成一次已开始的解码尝试，不做强制抢占。

use anyhow::Result;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

use crate::infrastructure::{CameraDevice, CameraStream, QrDecode, RenderSink};
use crate::services::ResultPresenter;

/// 单次扫描状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// 空闲，未启动
    Idle,
    /// 正在获取视频流
    Starting,
    /// 逐帧轮询中
    Scanning,
    /// 已找到二维码
    Found,
    /// 已停止（视频流已释放，可重新启动）
    Stopped,
    /// 获取视频流失败（需要用户显式重启）
    Error,
}

/// 停止句柄
///
/// 允许另一个任务在轮询进行中请求停止。
#[derive(Clone)]
pub struct StopHandle {
    scanning: Arc<AtomicBool>,
}

impl StopHandle {
    /// 请求停止扫描
    ///
    /// 轮询循环在调度下一次解码尝试前检查该标志。
    pub fn request_stop(&self) {
        self.scanning.store(false, Ordering::SeqCst);
    }
}

/// 摄像头单次扫描流程
///
/// - 独占持有视频流资源，所有退出路径都释放
/// - 每个界面各自构造一个实例，不依赖任何全局状态
/// - 找到的载荷保存在实例上，供后续复制操作使用
pub struct CameraFlow {
    decoder: Arc<dyn QrDecode>,
    presenter: ResultPresenter,
    state: ScanState,
    scanning: Arc<AtomicBool>,
    stream: Option<Box<dyn CameraStream>>,
    last_payload: Option<String>,
}

impl CameraFlow {
    /// 创建新的摄像头扫描流程
    pub fn new(decoder: Arc<dyn QrDecode>, chunk_width: usize) -> Result<Self> {
        Ok(Self {
            decoder,
            presenter: ResultPresenter::new(chunk_width)?,
            state: ScanState::Idle,
            scanning: Arc::new(AtomicBool::new(false)),
            stream: None,
            last_payload: None,
        })
    }

    /// 当前状态
    pub fn state(&self) -> ScanState {
        self.state
    }

    /// 最近一次找到的载荷
    pub fn last_payload(&self) -> Option<&str> {
        self.last_payload.as_deref()
    }

    /// 获取停止句柄
    pub fn stop_handle(&self) -> StopHandle {
        StopHandle {
            scanning: Arc::clone(&self.scanning),
        }
    }

    /// 启动单次扫描并轮询到结束
    ///
    /// # 返回
    /// - `Ok(Some(payload))`：找到二维码，已呈现并自动停止
    /// - `Ok(None)`：被停止命令取消，或已在扫描中
    /// - `Err(_)`：获取视频流失败或视频流中断（状态转为 Error）
    pub async fn start(
        &mut self,
        device: &dyn CameraDevice,
        sink: &mut dyn RenderSink,
    ) -> Result<Option<String>> {
        if self.scanning.load(Ordering::SeqCst) {
            return Ok(None);
        }
        self.scanning.store(true, Ordering::SeqCst);
        self.state = ScanState::Starting;
        sink.set_status("正在启动摄像头...");

        let stream = match device.open() {
            Ok(stream) => stream,
            Err(e) => {
                self.scanning.store(false, Ordering::SeqCst);
                self.state = ScanState::Error;
                sink.set_status("无法访问摄像头。");
                return Err(e.into());
            }
        };

        info!("✓ 摄像头视频流就绪: {}", device.label());
        self.stream = Some(stream);
        self.state = ScanState::Scanning;
        sink.set_status("正在识别二维码...");

        self.scan_loop(sink).await
    }

    /// 逐帧轮询循环
    async fn scan_loop(&mut self, sink: &mut dyn RenderSink) -> Result<Option<String>> {
        loop {
            // 停止命令在这里生效：调度下一次尝试前检查标志
            if !self.scanning.load(Ordering::SeqCst) {
                self.stop();
                sink.set_status("已停止");
                return Ok(None);
            }

            let frame = match self.stream.as_mut() {
                Some(stream) => match stream.next_frame() {
                    Ok(frame) => frame,
                    Err(e) => {
                        self.stop();
                        self.state = ScanState::Error;
                        sink.set_status("视频流中断。");
                        return Err(e.into());
                    }
                },
                // 视频流已被释放，按停止处理
                None => {
                    self.stop();
                    sink.set_status("已停止");
                    return Ok(None);
                }
            };

            match self.decoder.decode(&frame) {
                Ok(Some(payload)) if !payload.is_empty() => {
                    self.state = ScanState::Found;
                    self.last_payload = Some(payload.clone());
                    self.presenter.present(sink, &payload);

                    // 找到结果后自动停止并释放视频流
                    self.stop();
                    return Ok(Some(payload));
                }
                Ok(_) => {}
                Err(e) => {
                    // 单帧解码失败不终止轮询
                    warn!("解码尝试失败，继续下一帧: {}", e);
                }
            }

            // 让出执行权，下一帧在新的调度周期里处理
            tokio::task::yield_now().await;
        }
    }

    /// 停止扫描并释放视频流
    ///
    /// 所有退出路径（显式停止、找到结果、出错）都经过这里；
    /// 重复调用无副作用，视频流只会被释放一次。
    pub fn stop(&mut self) {
        self.scanning.store(false, Ordering::SeqCst);

        if let Some(mut stream) = self.stream.take() {
            stream.release();
            info!("✓ 摄像头视频流已释放");
        }

        // 找到结果后也转入 Stopped；Error 状态保留给用户显式重启
        if self.state != ScanState::Error {
            self.state = ScanState::Stopped;
        }
    }

    /// 重置为空闲状态（保持视频流已释放的约束）
    pub fn reset(&mut self) {
        self.stop();
        self.state = ScanState::Idle;
        self.last_payload = None;
    }
}
