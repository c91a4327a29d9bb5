use anyhow::Result;
use serde_json::{Map, Value};

/// 文档 id
pub type DocumentId = u64;

/// 宿主环境提供的内容访问接口。
///
/// 摘要管线对宿主只读：任何方法返回 `Err` 或 `Ok(None)` 都按「没有内容」
/// 处理，继续走回退链，不向调用方抛错。
pub trait ContentProvider {
    /// 当前上下文中的文档 id；不在任何文档上下文中时为 None
    fn current_document_id(&self) -> Option<DocumentId>;

    /// 文档标题
    fn title(&self, id: DocumentId) -> Result<Option<String>>;

    /// 文档的摘要字段（作者手填的简介）
    fn short_description(&self, id: DocumentId) -> Result<Option<String>>;

    /// 文档正文，短代码已由宿主解析或移除
    fn body(&self, id: DocumentId) -> Result<Option<String>>;

    /// 文档的全部自定义字段，键到标量或嵌套结构的映射
    fn structured_fields(&self, id: DocumentId) -> Result<Option<Map<String, Value>>>;

    /// 把视频链接转为可嵌入的播放器标记（oEmbed 一类的服务）
    fn embed_video(&self, url: &str) -> Result<Option<String>>;

    /// 当前文档的固定链接
    fn permalink(&self) -> Option<String>;

    /// 当前页面的 URL，宿主可按页面类型（首页、搜索页、分类页等）覆盖
    fn page_url(&self) -> Option<String> {
        self.permalink()
    }
}
