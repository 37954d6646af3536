//! 应用主消息枚举

use super::{ContentMessage, ModalMessage, NavigationMessage};
use crate::backend::BackendEvent;

/// 应用主消息
#[derive(Debug)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 切换焦点面板（左右切换）
    ToggleFocus,

    /// 导航相关消息
    Navigation(NavigationMessage),

    /// 内容面板相关消息
    Content(ContentMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 后台任务完成
    Backend(BackendEvent),

    /// 返回上一页
    GoBack,

    /// 重新拉取当前页面的数据
    Refresh,

    /// 显示帮助
    ShowHelp,

    /// 定时器（清理过期通知）
    Tick,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
