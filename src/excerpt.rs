use crate::config::{ExcerptArgs, FalsyReturn};
use crate::content::resolver;
use crate::content::truncate::{self, Units};
use crate::markup;
use crate::provider::ContentProvider;
use crate::video;

/// 一次摘要计算的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExcerptValue {
    /// 计算出的摘要文本或嵌入标记
    Text(String),
    /// 没有内容，且 falsy_return 不是 null
    False,
    /// 没有内容且 falsy_return 为 null；echo 模式输出完毕后也返回 Null
    Null,
}

impl ExcerptValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ExcerptValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_falsy(&self) -> bool {
        !matches!(self, ExcerptValue::Text(_))
    }
}

/// 计算摘要。
///
/// `args` 是调用方在默认值之上覆盖后的完整参数，整体随调用传入，
/// 调用之间不共享任何可变状态，可在多线程宿主里并发调用。
pub fn get_excerpt(provider: &dyn ContentProvider, args: &ExcerptArgs) -> ExcerptValue {
    let candidate = resolver::resolve_content(provider, args);

    // 先试视频：命中时播放器整体替代文字摘要，不再截断
    let excerpt = if args.embed_video {
        match video::detect_and_embed(provider, candidate.as_deref(), &args.video_parameters) {
            Some(embed) => {
                tracing::debug!("摘要命中视频链接，使用嵌入标记");
                Some(embed)
            }
            None => truncate_branch(candidate.as_deref(), args),
        }
    } else {
        truncate_branch(candidate.as_deref(), args)
    };

    // 阅读全文链接：没有摘要也照样追加，链接可以单独成为输出
    let mut output = excerpt.unwrap_or_default();
    if let Some(link) = markup::build_readmore(provider, args) {
        output.push_str(&link);
    }

    if output.is_empty() {
        return match args.falsy_return {
            FalsyReturn::Null => ExcerptValue::Null,
            _ => ExcerptValue::False,
        };
    }

    if let Some(tag) = args.container.as_text() {
        output = markup::wrap_excerpt(&output, tag, &args.container_class, &args.container_id);
    }

    if args.echo {
        print!("{output}");
        ExcerptValue::Null
    } else {
        ExcerptValue::Text(output)
    }
}

fn truncate_branch(candidate: Option<&str>, args: &ExcerptArgs) -> Option<String> {
    let units = Units::resolve(&args.units);
    truncate::truncate(units, candidate, &args.length, &args.end)
}
