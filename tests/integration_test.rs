//! 扫描流水线集成测试
//!
//! 全部协作方（解码器、文档、摄像头、展示、剪贴板）都用
//! 测试替身实现，不依赖任何外部资源。

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use qr_scan_reader::error::{AppError, AppResult, ClipboardError};
use qr_scan_reader::utils::logging;
use qr_scan_reader::{
    App, BatchScanner, CameraDevice, CameraFlow, CameraStream, Category, Clipboard, Config,
    DocumentSource, Frame, QrDecode, RenderSink, ResultPresenter, ScanCtx, ScanInput, ScanKind,
    ScanState, TextFrameDecoder,
};
use qr_scan_reader::{InputFlow, PayloadClassifier};

// ========== 测试替身 ==========

/// 统计解码调用次数的解码器
struct CountingDecoder {
    calls: Arc<AtomicUsize>,
}

impl QrDecode for CountingDecoder {
    fn decode(&self, frame: &Frame) -> anyhow::Result<Option<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        TextFrameDecoder.decode(frame)
    }
}

/// 遇到特定载荷就报错的解码器（模拟损坏的图像）
struct ExplodingDecoder;

impl QrDecode for ExplodingDecoder {
    fn decode(&self, frame: &Frame) -> anyhow::Result<Option<String>> {
        let text = std::str::from_utf8(&frame.data)?;
        if text.trim() == "BOOM" {
            anyhow::bail!("帧数据损坏");
        }
        TextFrameDecoder.decode(frame)
    }
}

/// 固定页面内容的文档替身
struct FixturePages {
    pages: Vec<String>,
    rendered: Arc<AtomicUsize>,
    render_delay: Option<Duration>,
}

impl FixturePages {
    fn new(pages: Vec<&str>, rendered: Arc<AtomicUsize>) -> Self {
        Self {
            pages: pages.into_iter().map(String::from).collect(),
            rendered,
            render_delay: None,
        }
    }

    fn with_delay(mut self, delay: Duration) -> Self {
        self.render_delay = Some(delay);
        self
    }
}

impl DocumentSource for FixturePages {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn render_page(&self, page_number: usize, _scale: f32) -> AppResult<Frame> {
        if let Some(delay) = self.render_delay {
            std::thread::sleep(delay);
        }
        self.rendered.fetch_add(1, Ordering::SeqCst);

        match self.pages.get(page_number - 1) {
            Some(text) => Ok(Frame::from_text(text.clone())),
            None => Err(AppError::Document(
                qr_scan_reader::error::DocumentError::PageOutOfRange {
                    page_number,
                    page_count: self.pages.len(),
                },
            )),
        }
    }
}

/// 摄像头替身：按顺序提供预设帧，之后持续提供空帧
struct FixtureCamera {
    frames: Vec<String>,
    released: Arc<AtomicUsize>,
    fail_open: bool,
}

impl CameraDevice for FixtureCamera {
    fn label(&self) -> String {
        "测试摄像头".to_string()
    }

    fn open(&self) -> AppResult<Box<dyn CameraStream>> {
        if self.fail_open {
            return Err(AppError::camera_acquisition_failed(
                self.label(),
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "权限被拒绝"),
            ));
        }

        Ok(Box::new(FixtureStream {
            frames: self.frames.iter().cloned().collect(),
            released: Arc::clone(&self.released),
        }))
    }
}

struct FixtureStream {
    frames: VecDeque<String>,
    released: Arc<AtomicUsize>,
}

impl CameraStream for FixtureStream {
    fn next_frame(&mut self) -> AppResult<Frame> {
        match self.frames.pop_front() {
            Some(text) => Ok(Frame::from_text(text)),
            None => Ok(Frame::from_text("")),
        }
    }

    fn release(&mut self) {
        self.released.fetch_add(1, Ordering::SeqCst);
    }
}

/// 记录所有绘制调用的展示替身
#[derive(Default)]
struct RecordingSink {
    statuses: Vec<String>,
    badges: Vec<Category>,
    payload_chunks: Vec<Vec<String>>,
    toasts: Vec<String>,
}

impl RenderSink for RecordingSink {
    fn set_status(&mut self, message: &str) {
        self.statuses.push(message.to_string());
    }

    fn render_badge(&mut self, category: Category) {
        self.badges.push(category);
    }

    fn render_payload(&mut self, chunks: &[String]) {
        self.payload_chunks.push(chunks.to_vec());
    }

    fn show_toast(&mut self, message: &str) {
        self.toasts.push(message.to_string());
    }
}

/// 剪贴板替身
struct FixtureClipboard {
    copied: Mutex<Vec<String>>,
    fail: bool,
}

impl FixtureClipboard {
    fn working() -> Self {
        Self {
            copied: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    fn broken() -> Self {
        Self {
            copied: Mutex::new(Vec::new()),
            fail: true,
        }
    }
}

impl Clipboard for FixtureClipboard {
    fn copy(&self, text: &str) -> AppResult<()> {
        if self.fail {
            return Err(AppError::Clipboard(ClipboardError::CopyFailed {
                source: Box::new(std::io::Error::other("剪贴板不可用")),
            }));
        }
        self.copied.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

fn test_config() -> Config {
    Config {
        max_concurrent_scans: 4,
        ..Config::default()
    }
}

// ========== 批量扫描 ==========

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_batch_results_follow_submission_order() {
    logging::init();

    let rendered = Arc::new(AtomicUsize::new(0));
    // 输入 A：3 页文档，第 3 页才命中，每页渲染都比输入 B 慢
    let doc = FixturePages::new(
        vec!["", "", "https://wa.me/5511999999999"],
        Arc::clone(&rendered),
    )
    .with_delay(Duration::from_millis(30));

    let inputs = vec![
        ScanInput::from_document("a.pdf", Box::new(doc)),
        ScanInput::from_image("b.png", Frame::from_text("hello world")),
    ];

    // 两种输入类型各走各的扫描路径
    assert_eq!(inputs[0].kind(), ScanKind::Document);
    assert_eq!(inputs[1].kind(), ScanKind::Image);

    let scanner = BatchScanner::new(Arc::new(TextFrameDecoder), test_config());
    let summary = scanner.scan_batch(inputs).await;

    assert_eq!(summary.total_inputs, 2);
    assert_eq!(summary.found(), 2);
    // B 先完成，但结果顺序必须跟提交顺序一致
    assert_eq!(summary.results[0].source_id, "a.pdf");
    assert_eq!(summary.results[0].payload, "https://wa.me/5511999999999");
    assert_eq!(summary.results[1].source_id, "b.png");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_batch_survives_single_input_failure() {
    logging::init();

    let inputs = vec![
        ScanInput::from_image("ok1.png", Frame::from_text("tel:+5511999999999")),
        ScanInput::from_image("bad.png", Frame::from_text("BOOM")),
        ScanInput::from_image("ok2.png", Frame::from_text("geo:-23.55,-46.63")),
    ];

    let scanner = BatchScanner::new(Arc::new(ExplodingDecoder), test_config());
    let summary = scanner.scan_batch(inputs).await;

    // 单个输入出错不影响批次，总数仍是原始输入数
    assert_eq!(summary.total_inputs, 3);
    assert_eq!(summary.found(), 2);
    assert_eq!(summary.missed(), 1);
    assert_eq!(summary.results[0].source_id, "ok1.png");
    assert_eq!(summary.results[1].source_id, "ok2.png");
}

#[tokio::test]
async fn test_batch_empty_inputs() {
    let scanner = BatchScanner::new(Arc::new(TextFrameDecoder), test_config());
    let summary = scanner.scan_batch(Vec::new()).await;

    assert_eq!(summary.total_inputs, 0);
    assert_eq!(summary.found(), 0);
}

// ========== 单个输入流程 ==========

#[tokio::test]
async fn test_document_short_circuits_after_first_hit() {
    let rendered = Arc::new(AtomicUsize::new(0));
    let decode_calls = Arc::new(AtomicUsize::new(0));

    // 5 页文档，第 2 页命中
    let doc = FixturePages::new(
        vec!["", "https://example.com", "", "", ""],
        Arc::clone(&rendered),
    );
    let input = ScanInput::from_document("doc.pdf", Box::new(doc));

    let decoder = Arc::new(CountingDecoder {
        calls: Arc::clone(&decode_calls),
    });
    let flow = InputFlow::new(decoder, &test_config());
    let ctx = ScanCtx::new(1, "doc.pdf".to_string());

    let result = flow.run(&input, &ctx).await.expect("扫描不应失败");

    assert_eq!(result.unwrap().payload, "https://example.com");
    // 第 3-5 页既不渲染也不解码
    assert_eq!(rendered.load(Ordering::SeqCst), 2);
    assert_eq!(decode_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_document_page_scan_limit() {
    let rendered = Arc::new(AtomicUsize::new(0));

    // 5 页文档，命中页在上限之外
    let doc = FixturePages::new(
        vec!["", "", "", "https://example.com", ""],
        Arc::clone(&rendered),
    );
    let input = ScanInput::from_document("long.pdf", Box::new(doc));

    let config = Config {
        page_scan_limit: 2,
        ..test_config()
    };
    let flow = InputFlow::new(Arc::new(TextFrameDecoder), &config);
    let ctx = ScanCtx::new(1, "long.pdf".to_string());

    let result = flow.run(&input, &ctx).await.expect("扫描不应失败");

    assert!(result.is_none(), "超出页数上限应视为未命中");
    assert_eq!(rendered.load(Ordering::SeqCst), 2);
}

// ========== 摄像头单次扫描 ==========

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_camera_stop_releases_stream_exactly_once() {
    logging::init();

    let released = Arc::new(AtomicUsize::new(0));
    let released_in_task = Arc::clone(&released);

    let mut flow = CameraFlow::new(Arc::new(TextFrameDecoder), 40).expect("创建扫描流程失败");
    let stop_handle = flow.stop_handle();

    let task = tokio::spawn(async move {
        let device = FixtureCamera {
            frames: Vec::new(), // 永远没有可解码的帧
            released: released_in_task,
            fail_open: false,
        };
        let mut sink = RecordingSink::default();
        let result = flow.start(&device, &mut sink).await;
        (flow, result)
    });

    // 扫描进行中发出停止命令
    tokio::time::sleep(Duration::from_millis(50)).await;
    stop_handle.request_stop();

    let (mut flow, result) = task.await.expect("扫描任务不应崩溃");

    assert!(matches!(result, Ok(None)), "被取消的扫描应返回 None");
    assert_eq!(flow.state(), ScanState::Stopped);
    assert_eq!(released.load(Ordering::SeqCst), 1, "视频流只释放一次");

    // 重复停止无副作用
    flow.stop();
    assert_eq!(released.load(Ordering::SeqCst), 1);
    assert_eq!(flow.state(), ScanState::Stopped);
}

#[tokio::test]
async fn test_camera_found_presents_and_auto_stops() {
    let released = Arc::new(AtomicUsize::new(0));
    let device = FixtureCamera {
        frames: vec![
            String::new(),
            String::new(),
            "00020126580014BR.GOV.BCB.PIX0136chave".to_string(),
        ],
        released: Arc::clone(&released),
        fail_open: false,
    };

    let mut flow = CameraFlow::new(Arc::new(TextFrameDecoder), 40).expect("创建扫描流程失败");
    let mut sink = RecordingSink::default();

    let payload = flow
        .start(&device, &mut sink)
        .await
        .expect("扫描不应失败")
        .expect("第 3 帧应命中");

    assert_eq!(payload, "00020126580014BR.GOV.BCB.PIX0136chave");
    assert_eq!(flow.state(), ScanState::Stopped);
    assert_eq!(flow.last_payload(), Some(payload.as_str()));
    assert_eq!(released.load(Ordering::SeqCst), 1);

    // 找到结果后已呈现：一枚 Pix 徽章 + 分片载荷
    assert_eq!(sink.badges, vec![Category::Pix]);
    assert_eq!(sink.payload_chunks.len(), 1);
    assert!(!sink.payload_chunks[0].is_empty());
}

#[test]
fn test_camera_acquisition_failure_enters_error_state() {
    tokio_test::block_on(async {
        let released = Arc::new(AtomicUsize::new(0));
        let device = FixtureCamera {
            frames: Vec::new(),
            released: Arc::clone(&released),
            fail_open: true,
        };

        let mut flow =
            CameraFlow::new(Arc::new(TextFrameDecoder), 40).expect("创建扫描流程失败");
        let mut sink = RecordingSink::default();

        let result = flow.start(&device, &mut sink).await;

        assert!(result.is_err(), "获取视频流失败应报错");
        assert_eq!(flow.state(), ScanState::Error);
        assert_eq!(released.load(Ordering::SeqCst), 0, "没有获取到的流无需释放");
        assert!(sink
            .statuses
            .iter()
            .any(|s| s.contains("无法访问摄像头")));

        // 错误状态不自动重试，但允许用户显式重启
        let working_device = FixtureCamera {
            frames: vec!["hello".to_string()],
            released: Arc::clone(&released),
            fail_open: false,
        };
        let payload = flow
            .start(&working_device, &mut sink)
            .await
            .expect("重启后扫描不应失败");
        assert_eq!(payload.as_deref(), Some("hello"));
    });
}

// ========== 结果呈现与剪贴板 ==========

#[test]
fn test_copy_to_clipboard_success_and_failure() {
    let presenter = ResultPresenter::new(40).expect("创建展示服务失败");

    let clipboard = FixtureClipboard::working();
    let mut sink = RecordingSink::default();
    presenter.copy_to_clipboard(&clipboard, &mut sink, "https://example.com");

    assert_eq!(
        clipboard.copied.lock().unwrap().as_slice(),
        ["https://example.com"]
    );
    assert!(sink.toasts[0].contains("已复制"));

    // 复制失败只出临时通知，不是错误
    let broken = FixtureClipboard::broken();
    presenter.copy_to_clipboard(&broken, &mut sink, "https://example.com");
    assert!(sink.toasts[1].contains("失败"));
}

// ========== 端到端（采集文件 → 报告） ==========

#[tokio::test]
async fn test_app_scans_capture_folder_and_writes_report() {
    logging::init();

    let dir = std::env::temp_dir().join("qr_scan_reader_e2e_test");
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("创建测试目录失败");

    std::fs::write(dir.join("01_pix.txt"), "00020126580014BR.GOV.BCB.PIX0136x").unwrap();
    std::fs::write(dir.join("02_wa.txt"), "https://wa.me/5511999999999").unwrap();
    std::fs::write(dir.join("03_empty.txt"), "   ").unwrap();

    let report_path = dir.join("report.json");
    let config = Config {
        input_folder: dir.to_string_lossy().to_string(),
        report_file: report_path.to_string_lossy().to_string(),
        ..test_config()
    };

    App::initialize(config)
        .await
        .expect("初始化应用失败")
        .run()
        .await
        .expect("运行应用失败");

    let report: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report_path).unwrap()).unwrap();

    assert_eq!(report["total_inputs"], 3);
    assert_eq!(report["found"], 2);
    assert_eq!(report["missed"], 1);
    assert_eq!(report["results"][0]["source_id"], "01_pix.txt");
    assert_eq!(report["results"][0]["category"], "Pix");
    assert_eq!(report["results"][1]["category"], "WhatsApp");

    let _ = std::fs::remove_dir_all(&dir);
}

// ========== 分类即时推导 ==========

#[test]
fn test_category_is_derived_on_demand() {
    let classifier = PayloadClassifier::new().expect("规则编译失败");
    let result = qr_scan_reader::ScanResult::new("x.png", "https://youtu.be/abc");

    // 结果上不缓存类别，每次从载荷现算
    assert_eq!(classifier.classify(&result.payload), Category::YouTube);
    assert_eq!(classifier.classify(&result.payload), Category::YouTube);
}
