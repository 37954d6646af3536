//! 页面路由定义

/// 页面枚举
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Page {
    /// 首页
    #[default]
    Home,
    /// 课程列表（生成、编辑）
    Lessons,
    /// 模块列表
    Modules,
    /// 关于
    About,
    /// 未知路径
    NotFound { path: String },
}

impl Page {
    /// Route a path to its page. Anything unknown is `NotFound`.
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim();
        let normalized = trimmed.trim_end_matches('/');
        match normalized {
            "" => Self::Home,
            "/lessons" => Self::Lessons,
            "/modules" => Self::Modules,
            "/about" => Self::About,
            _ => Self::NotFound {
                path: trimmed.to_string(),
            },
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Self::Home => "/",
            Self::Lessons => "/lessons",
            Self::Modules => "/modules",
            Self::About => "/about",
            Self::NotFound { path } => path,
        }
    }

    /// 获取页面标题
    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Lessons => "Lessons",
            Self::Modules => "Modules",
            Self::About => "About",
            Self::NotFound { .. } => "Not Found",
        }
    }
}
