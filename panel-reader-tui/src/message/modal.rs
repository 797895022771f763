//! 弹窗消息

/// 弹窗消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalMessage {
    /// 打开搜索输入框
    OpenSearch,
    /// 输入字符
    Input(char),
    /// 删除最后一个字符
    Backspace,
    /// 提交（搜索框中提交查询）
    Submit,
    /// 关闭弹窗
    Close,
}
