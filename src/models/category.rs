//! 载荷类别
//!
//! 二维码载荷文本的语义分类标签。类别永远由载荷文本即时推导，
//! 不会缓存在扫描结果上。

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// 载荷类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// 通用网址
    Url,
    /// 电子邮件地址
    Email,
    /// 电话号码
    Phone,
    /// 短信链接
    Sms,
    /// WiFi 配置
    WiFi,
    /// Pix 收款码（巴西即时支付，EMV 商户二维码）
    Pix,
    /// WhatsApp 链接
    WhatsApp,
    /// YouTube 链接
    YouTube,
    /// Instagram 链接
    Instagram,
    /// Twitter/X 链接
    TwitterX,
    /// Facebook 链接
    Facebook,
    /// LinkedIn 链接
    LinkedIn,
    /// 地理位置
    Location,
    /// 日历事件（VCALENDAR）
    Event,
    /// 联系人名片（VCARD）
    Contact,
    /// 纯文本
    Text,
    /// 未知（空载荷）
    Unknown,
}

impl Category {
    /// 获取类别的显示标签
    pub fn label(self) -> &'static str {
        match self {
            Category::Url => "URL",
            Category::Email => "Email",
            Category::Phone => "Phone",
            Category::Sms => "SMS",
            Category::WiFi => "WiFi",
            Category::Pix => "Pix",
            Category::WhatsApp => "WhatsApp",
            Category::YouTube => "YouTube",
            Category::Instagram => "Instagram",
            Category::TwitterX => "Twitter/X",
            Category::Facebook => "Facebook",
            Category::LinkedIn => "LinkedIn",
            Category::Location => "Location",
            Category::Event => "Event",
            Category::Contact => "Contact",
            Category::Text => "Text",
            Category::Unknown => "Unknown",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
