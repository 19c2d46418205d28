//! 载荷分类服务 - 业务能力层
//!
//! 只负责"判断载荷属于哪一类"能力，不关心流程
//!
//! 规则按固定顺序匹配，先命中者生效。顺序是刻意设计的：
//! 特定站点规则（WhatsApp / YouTube 等）必须排在通用 URL 规则
//! 之前，否则 `https://wa.me/...` 会被识别为普通网址。
//! 宽松规则（如纯数字的电话号码）也按原始顺序保留，不做"修正"。

use anyhow::Result;
use regex::Regex;

use crate::models::Category;

/// Pix 载荷的 EMV 商户二维码魔数前缀
const PIX_MAGIC_PREFIX: &str = "000201";

/// 载荷分类服务
///
/// 职责：
/// - 将一条载荷文本映射为一个语义类别
/// - 对任意字符串全定义，永不失败
/// - 不持有任何可变状态，可跨任务共享
pub struct PayloadClassifier {
    rules: Vec<(Regex, Category)>,
}

impl PayloadClassifier {
    /// 创建新的分类服务（一次性编译全部规则）
    pub fn new() -> Result<Self> {
        // 顺序即优先级，不要调整
        let rules = vec![
            // WhatsApp
            (Regex::new(r"^https?://wa\.me/")?, Category::WhatsApp),
            (
                Regex::new(r"^https?://api\.whatsapp\.com/")?,
                Category::WhatsApp,
            ),
            // YouTube
            (
                Regex::new(r"^https?://(www\.)?youtube\.com/")?,
                Category::YouTube,
            ),
            (Regex::new(r"^https?://youtu\.be/")?, Category::YouTube),
            // Instagram
            (
                Regex::new(r"^https?://(www\.)?instagram\.com/")?,
                Category::Instagram,
            ),
            // Twitter/X
            (
                Regex::new(r"^https?://(www\.)?(twitter\.com|x\.com)/")?,
                Category::TwitterX,
            ),
            // Facebook
            (
                Regex::new(r"^https?://(www\.)?facebook\.com/")?,
                Category::Facebook,
            ),
            // LinkedIn
            (
                Regex::new(r"^https?://(www\.)?linkedin\.com/")?,
                Category::LinkedIn,
            ),
            // 通用网址（必须排在所有特定站点规则之后）
            (Regex::new(r"^https?://")?, Category::Url),
            (Regex::new(r"^www\.")?, Category::Url),
            // 电子邮件
            (Regex::new(r"^mailto:")?, Category::Email),
            (Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")?, Category::Email),
            // 电话（宽松规则：纯数字文本也会命中，按原始设计保留）
            (Regex::new(r"^tel:")?, Category::Phone),
            (Regex::new(r"^\+?[\d\s\-()]+$")?, Category::Phone),
            // 短信
            (Regex::new(r"^sms:")?, Category::Sms),
            // WiFi 配置
            (Regex::new(r"^WIFI:")?, Category::WiFi),
            // Pix 收款码
            (
                Regex::new(&format!("^{}", PIX_MAGIC_PREFIX))?,
                Category::Pix,
            ),
            // 地理位置
            (Regex::new(r"^geo:")?, Category::Location),
            // 日历事件
            (Regex::new(r"^BEGIN:VCALENDAR")?, Category::Event),
            // 联系人名片
            (Regex::new(r"^BEGIN:VCARD")?, Category::Contact),
        ];

        Ok(Self { rules })
    }

    /// 对载荷文本分类
    ///
    /// # 返回
    /// 空载荷返回 `Unknown`；无规则命中返回 `Text`；
    /// 对任意输入都恰好返回一个类别。
    pub fn classify(&self, payload: &str) -> Category {
        if payload.is_empty() {
            return Category::Unknown;
        }

        for (rule, category) in &self.rules {
            if rule.is_match(payload) {
                return *category;
            }
        }

        Category::Text
    }
}

/// 校验载荷是否为 Pix 收款码
///
/// 仅在 Pix 专用场景使用的简化判断：去除首尾空白后
/// 以 `000201` 开头即视为有效。
pub fn validate_pix(payload: &str) -> bool {
    payload.trim().starts_with(PIX_MAGIC_PREFIX)
}
