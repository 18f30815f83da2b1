use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// 将已解码的 HTML 文本解析为 DOM
pub fn html_to_dom(text: &str) -> RcDom {
    parse_document(RcDom::default(), Default::default()).one(text)
}

/// 查找指定路径的 DOM 节点
///
/// `node_names` 是从外到内的元素名路径，例如 `["html", "head", "meta"]`；
/// 路径为空时不返回任何节点。
pub fn find_nodes(node: &Handle, node_names: &[&str]) -> Vec<Handle> {
    let mut found_nodes = Vec::new();
    let Some((&node_name, rest)) = node_names.split_first() else {
        return found_nodes;
    };

    let matches = match node.data {
        NodeData::Element { ref name, .. } => &*name.local == node_name,
        _ => false,
    };

    if matches && rest.is_empty() {
        found_nodes.push(node.clone());
    } else if matches {
        for child_node in node.children.borrow().iter() {
            found_nodes.append(&mut find_nodes(child_node, rest));
        }
        return found_nodes;
    }

    for child_node in node.children.borrow().iter() {
        found_nodes.append(&mut find_nodes(child_node, node_names));
    }

    found_nodes
}

/// 获取节点属性值
pub fn get_node_attr(node: &Handle, attr_name: &str) -> Option<String> {
    match &node.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|attr| &*attr.name.local == attr_name)
            .map(|attr| attr.value.to_string()),
        _ => None,
    }
}
