//! 导航状态定义

use super::Page;

/// 导航项 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItemId {
    Home,
    Lessons,
    Modules,
    About,
}

impl NavItemId {
    /// 导航项对应的页面
    pub fn page(self) -> Page {
        match self {
            Self::Home => Page::Home,
            Self::Lessons => Page::Lessons,
            Self::Modules => Page::Modules,
            Self::About => Page::About,
        }
    }
}

/// 导航项
#[derive(Debug, Clone)]
pub struct NavItem {
    pub id: NavItemId,
    pub label: &'static str,
    pub icon: &'static str,
}

/// 导航状态
pub struct NavigationState {
    /// 导航项列表
    pub items: Vec<NavItem>,
    /// 当前选中的索引
    pub selected: usize,
}

impl NavigationState {
    pub fn new() -> Self {
        Self {
            items: vec![
                NavItem {
                    id: NavItemId::Home,
                    label: "Home",
                    icon: "⌂",
                },
                NavItem {
                    id: NavItemId::Lessons,
                    label: "Lessons",
                    icon: "✎",
                },
                NavItem {
                    id: NavItemId::Modules,
                    label: "Modules",
                    icon: "▤",
                },
                NavItem {
                    id: NavItemId::About,
                    label: "About",
                    icon: "?",
                },
            ],
            selected: 0,
        }
    }

    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn select_next(&mut self) {
        if self.selected < self.items.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.items.len().saturating_sub(1);
    }

    /// 获取当前选中的导航项 ID
    pub fn current_id(&self) -> Option<NavItemId> {
        self.items.get(self.selected).map(|item| item.id)
    }

    /// 让高亮跟随页面（NotFound 不在导航中，保持原样）
    pub fn sync_with(&mut self, page: &Page) {
        if let Some(index) = self.items.iter().position(|item| item.id.page() == *page) {
            self.selected = index;
        }
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}
