//! 页面状态
//! 语言、编辑模式、弹窗集中在一个显式状态对象里，渲染函数只读它；
//! 存储只在 load / apply_lang / set_owner_mode / save_focus 这几个边界读写

use crate::config::SiteConfig;
use crate::error::{PfResult, PortfolioError};
use crate::page::lang::Lang;
use crate::page::modal::{ModalKind, ModalState};
use crate::page::owner::{self, FocusBox, FocusContent, OwnerView, SavedFocus};
use crate::page::shortcut::{KeyInput, ShortcutAction};
use crate::sanitizer::Sanitizer;
use crate::storage::{KeyValueStore, LANG_KEY};
use crate::utils::PageQuery;

/// 宿主需要执行的动作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCommand {
    /// 无需处理
    None,
    /// 重新渲染弹窗
    RenderModals,
    /// 重新渲染编辑区 / 工具栏
    RenderOwner(OwnerView),
    /// 收集编辑区当前内容并调用 `PageState::save_focus`
    CollectAndSave,
}

/// 键盘事件处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyOutcome {
    pub command: HostCommand,
    /// 是否阻止浏览器默认行为（Ctrl+S 另存为）
    pub prevent_default: bool,
}

/// 页面初始化结果
#[derive(Debug, Clone, PartialEq)]
pub struct PageInit {
    pub state: PageState,
    /// 需要写回编辑区的已保存内容
    pub focus: FocusContent,
    /// 初次进入时需要滚动到的锚点
    pub initial_hash: Option<String>,
}

/// 页面状态
#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    pub lang: Lang,
    pub owner_mode: bool,
    pub modals: ModalState,
}

impl PageState {
    /// 页面加载：解析语言与编辑模式，写回语言，按 view 打开弹窗，读取编辑区内容
    pub fn load(
        config: &SiteConfig,
        query: &PageQuery,
        store: &mut impl KeyValueStore,
        sanitizer: &Sanitizer,
    ) -> PageInit {
        let lang = Lang::resolve(query, &*store, config.default_lang);
        let owner_mode = owner::is_owner_mode(query, &*store);

        let mut state = Self {
            lang,
            owner_mode,
            modals: ModalState::default(),
        };
        state.apply_lang(store, lang);
        state.modals.open_from_view(query.view.as_deref());

        let focus = FocusBox::new(config, sanitizer).load(&*store);
        debug!("页面状态加载完成：语言{}，编辑模式{}", state.lang, state.owner_mode);

        PageInit {
            state,
            focus,
            initial_hash: query.hash.clone(),
        }
    }

    /// 切换到指定语言并记住选择
    pub fn apply_lang(&mut self, store: &mut impl KeyValueStore, lang: Lang) {
        self.lang = lang;
        store.set_item(LANG_KEY, lang.as_str());
    }

    /// 语言切换按钮
    pub fn toggle_lang(&mut self, store: &mut impl KeyValueStore) -> Lang {
        let next = self.lang.toggled();
        self.apply_lang(store, next);
        debug!("语言切换为：{}", next);
        next
    }

    pub fn set_owner_mode(&mut self, store: &mut impl KeyValueStore, on: bool) -> OwnerView {
        self.owner_mode = on;
        owner::set_owner_mode(store, on);
        self.owner_view()
    }

    pub fn owner_view(&self) -> OwnerView {
        OwnerView::new(self.owner_mode)
    }

    pub fn open_modal(&mut self, kind: ModalKind) {
        self.modals.open(kind);
    }

    pub fn close_modal(&mut self, kind: ModalKind) {
        self.modals.close(kind);
    }

    /// 保存编辑区；非编辑模式下拒绝
    pub fn save_focus(
        &self,
        config: &SiteConfig,
        sanitizer: &Sanitizer,
        store: &mut impl KeyValueStore,
        zh_dirty: &str,
        en_dirty: &str,
    ) -> PfResult<SavedFocus> {
        if !self.owner_mode {
            return Err(PortfolioError::InvalidInput("未开启编辑模式，拒绝保存".to_string()));
        }
        FocusBox::new(config, sanitizer).save(store, zh_dirty, en_dirty)
    }

    /// 分发键盘快捷键
    pub fn handle_key(&mut self, store: &mut impl KeyValueStore, input: &KeyInput) -> KeyOutcome {
        let ignored = KeyOutcome {
            command: HostCommand::None,
            prevent_default: false,
        };

        match ShortcutAction::from_key(input) {
            Some(ShortcutAction::CloseModals) => {
                self.modals.close_all();
                KeyOutcome {
                    command: HostCommand::RenderModals,
                    prevent_default: false,
                }
            }
            Some(ShortcutAction::ToggleOwner) => {
                let view = self.set_owner_mode(store, !self.owner_mode);
                KeyOutcome {
                    command: HostCommand::RenderOwner(view),
                    prevent_default: false,
                }
            }
            Some(ShortcutAction::Save) if self.owner_mode => KeyOutcome {
                command: HostCommand::CollectAndSave,
                prevent_default: true,
            },
            Some(ShortcutAction::Save) | None => ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigManager;
    use crate::storage::{MemoryStore, FOCUS_ZH_KEY, OWNER_KEY};

    #[test]
    fn test_load_from_query_and_store() {
        let config = ConfigManager::get_default();
        let sanitizer = Sanitizer::new();
        let mut store = MemoryStore::from([(FOCUS_ZH_KEY, "<p class=a>忙</p>")]);
        let query = PageQuery::from_url("https://me.example/?lang=en&view=detail#notes").unwrap();

        let init = PageState::load(&config, &query, &mut store, &sanitizer);
        assert_eq!(init.state.lang, Lang::En);
        assert!(!init.state.owner_mode);
        assert!(init.state.modals.is_open(ModalKind::Detail));
        assert!(init.state.modals.body_scroll_locked());
        assert_eq!(init.initial_hash.as_deref(), Some("#notes"));
        assert_eq!(init.focus.zh.as_deref(), Some("<p>忙</p>"));
        assert_eq!(init.focus.en, None);
        // 加载时写回当前语言
        assert_eq!(store.get_item(LANG_KEY).as_deref(), Some("en"));
    }

    #[test]
    fn test_toggle_lang_persists() {
        let config = ConfigManager::get_default();
        let sanitizer = Sanitizer::new();
        let mut store = MemoryStore::new();
        let mut state =
            PageState::load(&config, &PageQuery::default(), &mut store, &sanitizer).state;

        assert_eq!(state.lang, Lang::Zh);
        assert_eq!(state.toggle_lang(&mut store), Lang::En);
        assert_eq!(store.get_item(LANG_KEY).as_deref(), Some("en"));
        assert_eq!(state.toggle_lang(&mut store), Lang::Zh);
    }

    #[test]
    fn test_shortcuts() {
        let config = ConfigManager::get_default();
        let sanitizer = Sanitizer::new();
        let mut store = MemoryStore::new();
        let mut state =
            PageState::load(&config, &PageQuery::default(), &mut store, &sanitizer).state;
        state.open_modal(ModalKind::Professional);

        // 非编辑模式下 Ctrl+S 不拦截
        let outcome = state.handle_key(&mut store, &KeyInput::with_ctrl("s"));
        assert_eq!(outcome.command, HostCommand::None);
        assert!(!outcome.prevent_default);

        let outcome = state.handle_key(&mut store, &KeyInput::with_meta("."));
        assert_eq!(outcome.command, HostCommand::RenderOwner(OwnerView::new(true)));
        assert_eq!(store.get_item(OWNER_KEY).as_deref(), Some("1"));

        let outcome = state.handle_key(&mut store, &KeyInput::with_ctrl("S"));
        assert_eq!(outcome.command, HostCommand::CollectAndSave);
        assert!(outcome.prevent_default);

        let outcome = state.handle_key(&mut store, &KeyInput::plain("Escape"));
        assert_eq!(outcome.command, HostCommand::RenderModals);
        assert!(!state.modals.body_scroll_locked());

        state.handle_key(&mut store, &KeyInput::with_ctrl("."));
        assert!(!state.owner_mode);
        assert_eq!(store.get_item(OWNER_KEY), None);
    }

    #[test]
    fn test_save_focus_requires_owner_mode() {
        let config = ConfigManager::get_default();
        let sanitizer = Sanitizer::new();
        let mut store = MemoryStore::new();
        let query = PageQuery::from_query_str("owner=1");
        let mut state = PageState::load(&config, &query, &mut store, &sanitizer).state;
        assert!(state.owner_mode);

        let saved = state
            .save_focus(&config, &sanitizer, &mut store, "<h3>在忙</h3>", "<h3>Busy</h3>")
            .unwrap();
        assert_eq!(saved.en, "<h3>Busy</h3>");

        state.set_owner_mode(&mut store, false);
        assert!(state
            .save_focus(&config, &sanitizer, &mut store, "x", "y")
            .is_err());
    }
}
