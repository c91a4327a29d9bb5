use crate::config::{ClassList, ExcerptArgs, TextOr};
use crate::provider::ContentProvider;

/// 构建阅读全文链接；readmore 未启用时返回 None。
///
/// id 与 class 属性始终输出，未设置时为空串；class 固定以 `readmore ` 开头，
/// 链接指向宿主给出的当前页面 URL。
pub fn build_readmore(provider: &dyn ContentProvider, args: &ExcerptArgs) -> Option<String> {
    let label = match &args.readmore {
        TextOr::Flag(true) => "Read More",
        TextOr::Text(s) if !s.is_empty() => s.as_str(),
        _ => return None,
    };

    let id = args.readmore_id.as_text().unwrap_or("");
    let class = args.readmore_class.render();
    let href = provider.page_url().unwrap_or_default();

    Some(format!(
        "<a id=\"{id}\" class=\"readmore {class}\" href=\"{href}\">{label}</a>"
    ))
}

/// 用指定标签包裹摘要；id 与 class 属性始终输出，未设置时为空串
pub fn wrap_excerpt(text: &str, tag: &str, class_cfg: &ClassList, id_cfg: &TextOr) -> String {
    let id = id_cfg.as_text().unwrap_or("");
    let class = class_cfg.render();
    format!("<{tag} id=\"{id}\" class=\"{class}\">{text}</{tag}>")
}
