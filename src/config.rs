use serde::Deserialize;
use thiserror::Error;

/// 默认摘要长度（`length` 非法时回退为该值的三分之一，历史行为，保持不变）
pub const DEFAULT_LENGTH: usize = 150;

/// 单次调用的摘要参数。
///
/// 每次调用都在默认值之上覆盖调用方给出的字段：程序内用
/// `ExcerptArgs { length: .., ..Default::default() }`，配置片段用
/// [`ExcerptArgs::from_toml_str`] / [`ExcerptArgs::from_json_str`]，
/// 未出现的键一律取默认值。参数在调用期间只读，调用之间不共享任何状态。
#[derive(Debug, Clone, Deserialize)]
pub struct ExcerptArgs {
    /// 最大长度；null 表示不截断
    #[serde(default = "default_length")]
    pub length: Length,

    /// 长度单位：`chars` 或 `words`，其余值回退为默认单位
    #[serde(default = "default_units")]
    pub units: String,

    /// 要搜索的自定义字段键名（单个或多个）；null 则直接取正文
    #[serde(default)]
    pub content: ContentKeys,

    /// 用标题作为摘要来源，优先于其它所有来源
    #[serde(default)]
    pub use_title: bool,

    /// 自定义字段命中多条时取第几条（从 0 起）
    #[serde(default)]
    pub match_index: usize,

    /// 截断后追加的结尾符；false 或空串则不追加
    #[serde(default = "default_end")]
    pub end: TextOr,

    /// 是否去除摘要中的标签
    #[serde(default = "default_true")]
    pub striptags: bool,

    /// 阅读全文链接：false 不显示，true 用默认文案，字符串为自定义文案
    #[serde(default)]
    pub readmore: TextOr,

    /// 阅读全文链接的额外 class
    #[serde(default)]
    pub readmore_class: ClassList,

    /// 阅读全文链接的 id
    #[serde(default)]
    pub readmore_id: TextOr,

    /// 包裹摘要的标签名，如 `span`；false 不包裹
    #[serde(default)]
    pub container: TextOr,

    /// 包裹元素的 class
    #[serde(default)]
    pub container_class: ClassList,

    /// 包裹元素的 id
    #[serde(default)]
    pub container_id: TextOr,

    /// 在内容中探测视频链接，命中时用嵌入播放器替代文字摘要
    #[serde(default)]
    pub embed_video: bool,

    /// 追加到嵌入播放器 src 属性末尾的参数片段
    #[serde(default)]
    pub video_parameters: TextOr,

    /// true 直接输出到标准输出，false 作为返回值返回
    #[serde(default = "default_true")]
    pub echo: bool,

    /// 指定文档 id；null 取当前上下文
    #[serde(default)]
    pub page_id: Option<u64>,

    /// 无内容可返回时的返回形态
    #[serde(default)]
    pub falsy_return: FalsyReturn,
}

impl Default for ExcerptArgs {
    fn default() -> Self {
        Self {
            length: default_length(),
            units: default_units(),
            content: ContentKeys::default(),
            use_title: false,
            match_index: 0,
            end: default_end(),
            striptags: true,
            readmore: TextOr::default(),
            readmore_class: ClassList::default(),
            readmore_id: TextOr::default(),
            container: TextOr::default(),
            container_class: ClassList::default(),
            container_id: TextOr::default(),
            embed_video: false,
            video_parameters: TextOr::default(),
            echo: true,
            page_id: None,
            falsy_return: FalsyReturn::default(),
        }
    }
}

impl ExcerptArgs {
    /// 从 TOML 片段加载参数，缺失的键取默认值
    pub fn from_toml_str(fragment: &str) -> Result<Self, ConfigError> {
        let args: ExcerptArgs = toml::from_str(fragment)?;
        Ok(args)
    }

    /// 从 JSON 片段加载参数，缺失的键取默认值
    pub fn from_json_str(fragment: &str) -> Result<Self, ConfigError> {
        let args: ExcerptArgs = serde_json::from_str(fragment)?;
        Ok(args)
    }

    /// 从已解析的 JSON 值加载参数
    pub fn from_json_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        let args: ExcerptArgs = serde_json::from_value(value)?;
        Ok(args)
    }
}

/// 配置片段解析失败
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("解析 TOML 摘要配置失败：{0}")]
    Toml(#[from] toml::de::Error),

    #[error("解析 JSON 摘要配置失败：{0}")]
    Json(#[from] serde_json::Error),
}

/// `length` 选项：整数、null 或任意非法值
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Length {
    /// null：不截断
    Unlimited,
    Max(u32),
    /// 非正整数值，截断时回退为默认长度的三分之一
    Invalid(serde_json::Value),
}

impl Length {
    /// 解析出实际截断长度；None 表示不截断
    pub fn resolve(&self) -> Option<usize> {
        match self {
            Length::Unlimited => None,
            Length::Max(n) if *n >= 1 => Some(*n as usize),
            _ => Some(DEFAULT_LENGTH / 3),
        }
    }
}

/// 形如「字符串或 false」的选项
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TextOr {
    Flag(bool),
    Text(String),
}

impl TextOr {
    /// 取出非空文本；false、true 或空串均视为未设置
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TextOr::Text(s) if !s.is_empty() => Some(s),
            _ => None,
        }
    }
}

impl Default for TextOr {
    fn default() -> Self {
        TextOr::Flag(false)
    }
}

/// class 选项：单个字符串、字符串列表或 false
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ClassList {
    Flag(bool),
    One(String),
    Many(Vec<String>),
}

impl ClassList {
    /// 渲染为 class 属性值，列表用单个空格连接，未设置时为空串
    pub fn render(&self) -> String {
        match self {
            ClassList::Flag(_) => String::new(),
            ClassList::One(s) => s.clone(),
            ClassList::Many(items) => items.join(" "),
        }
    }
}

impl Default for ClassList {
    fn default() -> Self {
        ClassList::Flag(false)
    }
}

/// `content` 选项：单个键名、键名列表或 null
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ContentKeys {
    /// null：不搜索自定义字段
    Unset,
    One(String),
    Many(Vec<String>),
}

impl ContentKeys {
    /// 取出待搜索的键名列表；未设置时为 None
    pub fn needles(&self) -> Option<Vec<&str>> {
        match self {
            ContentKeys::Unset => None,
            ContentKeys::One(key) => Some(vec![key.as_str()]),
            ContentKeys::Many(keys) => Some(keys.iter().map(String::as_str).collect()),
        }
    }
}

impl Default for ContentKeys {
    fn default() -> Self {
        ContentKeys::Unset
    }
}

/// 无内容可返回时的返回形态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FalsyReturn {
    Bool,
    Null,
    #[default]
    EmptyString,
}

// 默认值函数
fn default_length() -> Length {
    Length::Max(DEFAULT_LENGTH as u32)
}
fn default_units() -> String {
    "chars".into()
}
fn default_end() -> TextOr {
    TextOr::Text("...".into())
}
fn default_true() -> bool {
    true
}
