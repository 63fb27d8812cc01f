use grove_stream::{Stream, TreeStream};
use xot::{Node, Xot};

/// The element children of `node`, in document order.
pub(crate) fn child_elements(xot: &Xot, node: Node) -> Stream<'_, Node> {
    Stream::from_iter_fn(move || {
        xot.children(node)
            .filter(move |child| xot.is_element(*child))
    })
}

/// `root` and all elements below it, in document order.
pub(crate) fn elements(xot: &Xot, root: Node) -> TreeStream<'_, Node> {
    TreeStream::with_root(root, move |node: &Node| child_elements(xot, *node))
}

pub(crate) fn local_name(xot: &Xot, node: Node) -> &str {
    xot.node_name(node)
        .map(|name| xot.local_name_str(name))
        .unwrap_or_default()
}
