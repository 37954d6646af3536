//! 内容面板消息
//!
//! 课程页与模块页中的列表操作

/// 内容面板消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentMessage {
    // ========== 列表导航 ==========
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项
    SelectLast,
    /// 确认（课程页：编辑；模块页：展开/折叠）
    Confirm,

    // ========== 课程操作 ==========
    /// 打开生成课程表单
    Generate,
    /// 编辑当前选中的课程
    Edit,
    /// 用当前课程创建模块
    AddToModule,
}
