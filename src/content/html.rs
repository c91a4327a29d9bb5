/// 去除 HTML 标签，保留纯文本
pub fn strip_tags(html: &str) -> String {
    let mut result = String::with_capacity(html.len());
    let mut in_tag = false;

    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(ch),
            _ => {}
        }
    }

    result
}

/// 将 HTML 实体解码为文本，未知实体原样保留
pub fn decode_entities(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut entity = String::new();
    let mut in_entity = false;

    for ch in text.chars() {
        match ch {
            '&' => {
                // 上一个 & 没有闭合，原样吐回
                if in_entity {
                    result.push_str(&entity);
                }
                in_entity = true;
                entity.clear();
                entity.push(ch);
            }
            ';' if in_entity => {
                in_entity = false;
                entity.push(ch);
                match entity.as_str() {
                    "&amp;" => result.push('&'),
                    "&lt;" => result.push('<'),
                    "&gt;" => result.push('>'),
                    "&quot;" => result.push('"'),
                    "&#39;" | "&apos;" => result.push('\''),
                    "&nbsp;" => result.push(' '),
                    _ => match decode_numeric(&entity) {
                        Some(decoded) => result.push(decoded),
                        None => result.push_str(&entity),
                    },
                }
            }
            _ if in_entity => entity.push(ch),
            _ => result.push(ch),
        }
    }

    if in_entity {
        result.push_str(&entity);
    }

    result
}

/// 解析 `&#8217;` 与 `&#x2019;` 形式的数字实体
fn decode_numeric(entity: &str) -> Option<char> {
    let body = entity.strip_prefix("&#")?.strip_suffix(';')?;
    let code = match body.strip_prefix(['x', 'X']) {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => body.parse::<u32>().ok()?,
    };
    char::from_u32(code)
}

/// 去掉标题里残留的 U+FFFD 替换字符
pub fn strip_replacement_chars(text: &str) -> String {
    text.replace('\u{FFFD}', "")
}
