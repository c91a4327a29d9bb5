use crate::config::TextOr;
use crate::provider::ContentProvider;
use regex::Regex;
use std::sync::LazyLock;

static VIDEO_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)https?://(www\.)?(youtube|vimeo)\.\S+").unwrap());

static SRC_ATTR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"src=(['"])?([^'"\s>]*)"#).unwrap());

/// 在文本里探测视频链接并换成嵌入播放器。
///
/// 取第一个命中 youtube/vimeo 的链接交给宿主的嵌入服务；没有命中、
/// 嵌入失败或返回空时都返回 None，由调用方走文字摘要分支。
pub fn detect_and_embed(
    provider: &dyn ContentProvider,
    text: Option<&str>,
    video_parameters: &TextOr,
) -> Option<String> {
    let text = text?;
    let url = VIDEO_URL_RE.find(text)?.as_str();

    let markup = match provider.embed_video(url) {
        Ok(Some(markup)) if !markup.is_empty() => markup,
        Ok(_) => return None,
        Err(err) => {
            tracing::debug!("视频嵌入服务失败，回退为文字摘要：{err}");
            return None;
        }
    };

    match video_parameters.as_text() {
        Some(extra) => Some(add_video_parameters(&markup, extra)),
        None => Some(markup),
    }
}

/// 把参数片段接在嵌入标记第一个 src 属性值之后、闭合引号之前。
///
/// 约定是字符串替换而非解析标记：匹配 `src=` + 可选引号 + 一段
/// 非引号非空白非 `>` 的字符，片段插在捕获值末尾。
fn add_video_parameters(markup: &str, extra: &str) -> String {
    SRC_ATTR_RE
        .replace(markup, |caps: &regex::Captures| {
            let quote = caps.get(1).map_or("", |m| m.as_str());
            let src = &caps[2];
            format!("src={quote}{src}{extra}")
        })
        .into_owned()
}
