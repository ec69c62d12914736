//! 本地存储键名

/// 当前语言
pub const LANG_KEY: &str = "ws_lang";
/// 本人编辑模式开关（值为 "1" 时开启）
pub const OWNER_KEY: &str = "ws_owner_mode";
/// “最近在忙”中文内容
pub const FOCUS_ZH_KEY: &str = "ws_focus_zh";
/// “最近在忙”英文内容
pub const FOCUS_EN_KEY: &str = "ws_focus_en";

/// 开关类键的开启值
pub const FLAG_ON: &str = "1";
