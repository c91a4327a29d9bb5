//! cexcerpt：配置驱动的摘要提取引擎。
//!
//! 从文档的标题、摘要字段、自定义字段或正文中按优先级取出候选文本，
//! 按字符或单词截断，可选地换成嵌入视频、追加阅读全文链接并包裹容器元素。
//! 全部行为由一组带默认值的扁平参数控制，内容由宿主通过
//! [`ContentProvider`] 提供。

pub mod config;
pub mod content;
pub mod excerpt;
pub mod markup;
pub mod provider;
pub mod video;

pub use config::{
    ClassList, ConfigError, ContentKeys, ExcerptArgs, FalsyReturn, Length, TextOr,
};
pub use content::truncate::Units;
pub use excerpt::{ExcerptValue, get_excerpt};
pub use provider::{ContentProvider, DocumentId};
