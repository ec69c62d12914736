//! 页面模块：语言、弹窗、滚动高亮、快捷键、本人编辑模式与页面状态
pub mod lang;
pub mod modal;
pub mod owner;
pub mod scroll;
pub mod shortcut;
pub mod state;

// 导出核心接口
pub use self::lang::{Lang, LangText};
pub use self::modal::{ModalKind, ModalState};
pub use self::owner::{
    is_owner_mode, paste_as_text, set_owner_mode, FocusBox, FocusContent, OwnerView, SavedFocus,
    ToolbarLabels, SAVED_TOAST,
};
pub use self::scroll::{active_section, is_in_page_link, scroll_target, ScrollSpy, SectionOffset};
pub use self::shortcut::{KeyInput, ShortcutAction};
pub use self::state::{HostCommand, KeyOutcome, PageInit, PageState};
