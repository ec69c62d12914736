//! 弹窗状态
//! 两个弹窗可独立开关；任一弹窗打开时锁定页面滚动

/// 弹窗种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalKind {
    /// 详细信息
    Detail,
    /// 专业信息
    Professional,
}

impl ModalKind {
    pub const ALL: [ModalKind; 2] = [ModalKind::Detail, ModalKind::Professional];

    /// 由查询参数 view 取值确定弹窗
    pub fn from_view(view: &str) -> Option<Self> {
        match view {
            "detail" => Some(ModalKind::Detail),
            "pro" | "professional" => Some(ModalKind::Professional),
            _ => None,
        }
    }

    /// 弹窗元素 id
    pub fn element_id(&self) -> &'static str {
        match self {
            ModalKind::Detail => "detailModal",
            ModalKind::Professional => "professionalModal",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalState {
    detail_open: bool,
    professional_open: bool,
}

impl ModalState {
    fn slot(&mut self, kind: ModalKind) -> &mut bool {
        match kind {
            ModalKind::Detail => &mut self.detail_open,
            ModalKind::Professional => &mut self.professional_open,
        }
    }

    pub fn open(&mut self, kind: ModalKind) {
        *self.slot(kind) = true;
        debug!("打开弹窗：{}", kind.element_id());
    }

    pub fn close(&mut self, kind: ModalKind) {
        *self.slot(kind) = false;
        debug!("关闭弹窗：{}", kind.element_id());
    }

    /// Esc：关闭全部弹窗
    pub fn close_all(&mut self) {
        self.detail_open = false;
        self.professional_open = false;
    }

    /// 按查询参数 view 打开弹窗，未知取值忽略
    pub fn open_from_view(&mut self, view: Option<&str>) -> Option<ModalKind> {
        let kind = view.and_then(ModalKind::from_view)?;
        self.open(kind);
        Some(kind)
    }

    pub fn is_open(&self, kind: ModalKind) -> bool {
        match kind {
            ModalKind::Detail => self.detail_open,
            ModalKind::Professional => self.professional_open,
        }
    }

    /// 页面滚动是否被锁定
    pub fn body_scroll_locked(&self) -> bool {
        self.detail_open || self.professional_open
    }
}
