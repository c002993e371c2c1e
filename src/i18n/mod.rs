//! i18n - Internationalization Module
//!
//! Provides simple translation functions using HashMap-based lookups.

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English (US)
    #[default]
    EnUS,
    /// Chinese (Simplified)
    ZhCN,
}

impl Locale {
    /// Pick a locale from a language tag such as `zh-CN` or `en_US.UTF-8`
    pub fn from_tag(tag: &str) -> Self {
        if tag.to_ascii_lowercase().starts_with("zh") {
            Locale::ZhCN
        } else {
            Locale::EnUS
        }
    }

    /// Detect the user's locale, falling back to English
    pub fn from_system() -> Self {
        let user = locale_config::Locale::user_default();
        let locale = user
            .tags()
            .next()
            .map(|(_, tag)| Self::from_tag(&tag.to_string()))
            .unwrap_or_default();
        tracing::debug!("Detected locale {:?} from {}", locale, user);
        locale
    }
}

/// Translation resources
static TRANSLATIONS: OnceLock<HashMap<&'static str, (&'static str, &'static str)>> =
    OnceLock::new();

/// Initialize translations (key -> (en, zh))
fn init_translations() -> HashMap<&'static str, (&'static str, &'static str)> {
    let mut map = HashMap::new();

    // App
    map.insert("app-title", ("DFC Data Table", "DFC 数据表"));

    // Table
    map.insert("table-no-data", ("No data available.", "暂无数据。"));

    // Demo columns
    map.insert("col-item", ("Item", "项目"));
    map.insert("col-quantity", ("Quantity", "数量"));
    map.insert("col-price", ("Unit Price", "单价"));
    map.insert("col-change", ("Change", "变化"));
    map.insert("col-amount", ("Amount", "金额"));
    map.insert("footer-total", ("Total", "合计"));

    map
}

/// Get translations
fn translations() -> &'static HashMap<&'static str, (&'static str, &'static str)> {
    TRANSLATIONS.get_or_init(init_translations)
}

/// Translate a key
pub fn t(locale: Locale, key: &str) -> Cow<'static, str> {
    if let Some(&(en, zh)) = translations().get(key) {
        match locale {
            Locale::EnUS => Cow::Borrowed(en),
            Locale::ZhCN => Cow::Borrowed(zh),
        }
    } else {
        // Fallback: return the key itself
        Cow::Owned(key.to_string())
    }
}
