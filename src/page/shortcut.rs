//! 键盘快捷键
//! Esc 关闭弹窗；Ctrl/Cmd + . 切换编辑模式；Ctrl/Cmd + S 保存（仅编辑模式）

/// 键盘事件
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyInput {
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
}

impl KeyInput {
    pub fn plain(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }

    pub fn with_ctrl(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ctrl: true,
            meta: false,
        }
    }

    pub fn with_meta(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ctrl: false,
            meta: true,
        }
    }

    fn has_command_modifier(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// 快捷键动作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    CloseModals,
    ToggleOwner,
    Save,
}

impl ShortcutAction {
    pub fn from_key(input: &KeyInput) -> Option<Self> {
        if input.key == "Escape" {
            return Some(ShortcutAction::CloseModals);
        }
        if !input.has_command_modifier() {
            return None;
        }
        match input.key.to_lowercase().as_str() {
            "." => Some(ShortcutAction::ToggleOwner),
            "s" => Some(ShortcutAction::Save),
            _ => None,
        }
    }
}
