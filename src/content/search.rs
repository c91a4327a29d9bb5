use serde_json::{Map, Value};

/// 深度优先搜索嵌套字段映射，按先序返回所有命中的非空值。
///
/// 键名等于任一 needle 且值非空即命中；命中后仍继续下钻嵌套映射
/// （包括列表里的映射），父级排在子级之前，同级按遍历顺序排列。
pub fn search_all<'a>(needles: &[&str], haystack: &'a Map<String, Value>) -> Vec<&'a Value> {
    let mut matches = Vec::new();
    collect(needles, haystack, &mut matches);
    matches
}

/// 搜索并取第 `index` 条命中；没有命中或越界时返回 None。
///
/// 返回 None 与「命中了一个空集合」是两回事：空值在遍历时就不会命中。
pub fn search_one<'a>(
    needles: &[&str],
    haystack: &'a Map<String, Value>,
    index: usize,
) -> Option<&'a Value> {
    search_all(needles, haystack).get(index).copied()
}

fn collect<'a>(needles: &[&str], map: &'a Map<String, Value>, out: &mut Vec<&'a Value>) {
    for (key, value) in map {
        if needles.iter().any(|n| *n == key) && !is_empty_value(value) {
            out.push(value);
        }
        descend(needles, value, out);
    }
}

fn descend<'a>(needles: &[&str], value: &'a Value, out: &mut Vec<&'a Value>) {
    match value {
        Value::Object(inner) => collect(needles, inner, out),
        Value::Array(items) => {
            for item in items {
                descend(needles, item, out);
            }
        }
        _ => {}
    }
}

/// 空值不参与命中：null、false、0、空串、空列表、空映射
fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}
