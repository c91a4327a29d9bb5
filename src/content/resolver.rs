use crate::config::ExcerptArgs;
use crate::content::{html, search};
use crate::provider::ContentProvider;
use serde_json::Value;

/// 按优先级确定摘要的候选文本，None 表示没有可用内容。
///
/// 优先级：标题（独占分支）→ 摘要字段 → 自定义字段搜索 → 正文。
/// 宿主读取失败与空值同样处理，继续沿回退链向下。
pub(crate) fn resolve_content(
    provider: &dyn ContentProvider,
    args: &ExcerptArgs,
) -> Option<String> {
    let doc_id = args.page_id.or_else(|| provider.current_document_id());

    let candidate = if args.use_title {
        // 标题分支独占：即使标题为空也不再回退到其它来源
        doc_id
            .and_then(|id| fetch(provider.title(id), "标题"))
            .map(|t| html::strip_replacement_chars(&html::decode_entities(&t)))
    } else {
        let mut found = doc_id
            .and_then(|id| fetch(provider.short_description(id), "摘要字段"))
            .filter(|s| !s.is_empty());

        if found.is_none() {
            if let Some(needles) = args.content.needles() {
                let fields =
                    doc_id.and_then(|id| fetch(provider.structured_fields(id), "自定义字段"));
                if let Some(fields) = fields {
                    match search::search_one(&needles, &fields, args.match_index) {
                        Some(Value::String(s)) => {
                            tracing::debug!("摘要来源：自定义字段");
                            found = Some(s.clone());
                        }
                        // 命中非文本值时整条链落空，不回退正文
                        Some(_) => {
                            tracing::debug!("自定义字段命中非文本值，本次无摘要");
                            return None;
                        }
                        None => {}
                    }
                }
            }
        }

        if found.is_none() {
            found = doc_id
                .and_then(|id| fetch(provider.body(id), "正文"))
                .filter(|s| !s.is_empty());
        }
        found
    };

    match candidate {
        Some(text) if !text.is_empty() => {
            if args.striptags {
                Some(html::strip_tags(&text))
            } else {
                Some(text)
            }
        }
        _ => None,
    }
}

/// 宿主读取失败按无内容处理
fn fetch<T>(result: anyhow::Result<Option<T>>, what: &str) -> Option<T> {
    match result {
        Ok(value) => value,
        Err(err) => {
            tracing::debug!("读取{what}失败，按无内容处理：{err}");
            None
        }
    }
}
