//! Arena-allocated DOM for parsed HTML documents.
//!
//! Nodes live in a single vector and reference each other by index, which
//! keeps traversal cheap and lets selector matching walk parents and
//! siblings without reference counting.

use html5ever::{LocalName, Namespace, QualName};

/// Index of a node in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Payload of a DOM node.
#[derive(Debug, Clone)]
pub enum NodeData {
    /// Document root.
    Document,
    /// Element with name and attributes.
    Element {
        name: QualName,
        attrs: Vec<Attribute>,
        /// Pre-extracted id attribute for fast matching.
        id: Option<String>,
        /// Pre-extracted class list for fast matching.
        classes: Vec<String>,
    },
    /// Text content.
    Text(String),
    /// Comment (kept only because the parser produces them).
    Comment(String),
    /// Document type declaration.
    Doctype { name: String },
}

/// HTML attribute.
#[derive(Debug, Clone)]
pub struct Attribute {
    pub name: QualName,
    pub value: String,
}

/// A node plus its tree links.
#[derive(Debug)]
pub struct Node {
    pub data: NodeData,
    pub parent: Option<NodeId>,
    pub first_child: Option<NodeId>,
    pub last_child: Option<NodeId>,
    pub prev_sibling: Option<NodeId>,
    pub next_sibling: Option<NodeId>,
}

impl Node {
    fn new(data: NodeData) -> Self {
        Self {
            data,
            parent: None,
            first_child: None,
            last_child: None,
            prev_sibling: None,
            next_sibling: None,
        }
    }
}

/// Arena-backed DOM tree.
pub struct Dom {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Dom {
    /// Create an empty DOM containing only the document root.
    pub fn new() -> Self {
        let root_node = Node::new(NodeData::Document);
        Self {
            nodes: vec![root_node],
            root: NodeId(0),
        }
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// The document root.
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn get_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    /// Create an element node, pre-extracting id and class for matching.
    pub fn create_element(&mut self, name: QualName, attrs: Vec<Attribute>) -> NodeId {
        let mut id = None;
        let mut classes = Vec::new();
        for attr in &attrs {
            match attr.name.local.as_ref() {
                "id" => id = Some(attr.value.clone()),
                "class" => {
                    classes = attr.value.split_whitespace().map(str::to_string).collect();
                }
                _ => {}
            }
        }
        self.alloc(Node::new(NodeData::Element {
            name,
            attrs,
            id,
            classes,
        }))
    }

    pub fn create_text(&mut self, text: String) -> NodeId {
        self.alloc(Node::new(NodeData::Text(text)))
    }

    pub fn create_comment(&mut self, text: String) -> NodeId {
        self.alloc(Node::new(NodeData::Comment(text)))
    }

    pub fn create_doctype(&mut self, name: String) -> NodeId {
        self.alloc(Node::new(NodeData::Doctype { name }))
    }

    /// Append `child` as the last child of `parent`.
    pub fn append(&mut self, parent: NodeId, child: NodeId) {
        let last = self.get(parent).last_child;

        {
            let node = self.get_mut(child);
            node.parent = Some(parent);
            node.prev_sibling = last;
            node.next_sibling = None;
        }

        if let Some(last) = last {
            self.get_mut(last).next_sibling = Some(child);
        }

        let parent_node = self.get_mut(parent);
        if parent_node.first_child.is_none() {
            parent_node.first_child = Some(child);
        }
        parent_node.last_child = Some(child);
    }

    /// Insert `new_node` immediately before `sibling`.
    pub fn insert_before(&mut self, sibling: NodeId, new_node: NodeId) {
        let (parent, prev) = {
            let node = self.get(sibling);
            (node.parent, node.prev_sibling)
        };

        {
            let node = self.get_mut(new_node);
            node.parent = parent;
            node.prev_sibling = prev;
            node.next_sibling = Some(sibling);
        }

        self.get_mut(sibling).prev_sibling = Some(new_node);

        if let Some(prev) = prev {
            self.get_mut(prev).next_sibling = Some(new_node);
        } else if let Some(parent) = parent {
            self.get_mut(parent).first_child = Some(new_node);
        }
    }

    /// Append text, merging into a trailing text node if one exists.
    pub fn append_text(&mut self, parent: NodeId, text: &str) {
        if let Some(last) = self.get(parent).last_child
            && let NodeData::Text(existing) = &mut self.get_mut(last).data
        {
            existing.push_str(text);
            return;
        }
        let text_node = self.create_text(text.to_string());
        self.append(parent, text_node);
    }

    /// Unlink a node from its parent and siblings.
    pub fn detach(&mut self, id: NodeId) {
        let (parent, prev, next) = {
            let node = self.get(id);
            (node.parent, node.prev_sibling, node.next_sibling)
        };

        match prev {
            Some(prev) => self.get_mut(prev).next_sibling = next,
            None => {
                if let Some(parent) = parent {
                    self.get_mut(parent).first_child = next;
                }
            }
        }
        match next {
            Some(next) => self.get_mut(next).prev_sibling = prev,
            None => {
                if let Some(parent) = parent {
                    self.get_mut(parent).last_child = prev;
                }
            }
        }

        let node = self.get_mut(id);
        node.parent = None;
        node.prev_sibling = None;
        node.next_sibling = None;
    }

    /// Iterate over the children of a node.
    pub fn children(&self, parent: NodeId) -> Children<'_> {
        Children {
            dom: self,
            current: self.get(parent).first_child,
        }
    }

    /// Iterate over every element node in document order.
    pub fn elements(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.descendants(self.root)
            .filter(|&id| self.is_element(id))
    }

    /// Depth-first traversal of the subtree rooted at `start`.
    pub fn descendants(&self, start: NodeId) -> Descendants<'_> {
        Descendants {
            dom: self,
            stack: vec![start],
        }
    }
}

impl Default for Dom {
    fn default() -> Self {
        Self::new()
    }
}

/// Element accessors used by selector matching.
impl Dom {
    /// Element tag name, if the node is an element.
    pub fn element_name(&self, id: NodeId) -> Option<&LocalName> {
        match &self.get(id).data {
            NodeData::Element { name, .. } => Some(&name.local),
            _ => None,
        }
    }

    pub fn element_namespace(&self, id: NodeId) -> Option<&Namespace> {
        match &self.get(id).data {
            NodeData::Element { name, .. } => Some(&name.ns),
            _ => None,
        }
    }

    /// Value of the element's id attribute.
    pub fn element_id(&self, id: NodeId) -> Option<&str> {
        match &self.get(id).data {
            NodeData::Element { id, .. } => id.as_deref(),
            _ => None,
        }
    }

    /// The element's class list.
    pub fn element_classes(&self, id: NodeId) -> &[String] {
        match &self.get(id).data {
            NodeData::Element { classes, .. } => classes,
            _ => &[],
        }
    }

    /// Look up an attribute value by local name.
    pub fn attr(&self, id: NodeId, attr_name: &str) -> Option<&str> {
        match &self.get(id).data {
            NodeData::Element { attrs, .. } => attrs
                .iter()
                .find(|a| a.name.local.as_ref() == attr_name)
                .map(|a| a.value.as_str()),
            _ => None,
        }
    }

    pub fn is_element(&self, id: NodeId) -> bool {
        matches!(self.get(id).data, NodeData::Element { .. })
    }

    /// Text content of a text node.
    pub fn text(&self, id: NodeId) -> Option<&str> {
        match &self.get(id).data {
            NodeData::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

/// Iterator over the children of a node.
pub struct Children<'a> {
    dom: &'a Dom,
    current: Option<NodeId>,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.dom.get(id).next_sibling;
        Some(id)
    }
}

/// Depth-first iterator over a subtree.
pub struct Descendants<'a> {
    dom: &'a Dom,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let children: Vec<NodeId> = self.dom.children(id).collect();
        self.stack.extend(children.into_iter().rev());
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use html5ever::{ns, LocalName};

    use super::*;

    fn qname(local: &str) -> QualName {
        QualName::new(None, ns!(html), LocalName::from(local))
    }

    #[test]
    fn create_and_append_elements() {
        let mut dom = Dom::new();

        let div = dom.create_element(
            qname("div"),
            vec![Attribute {
                name: qname("id"),
                value: "main".to_string(),
            }],
        );
        dom.append(dom.root(), div);

        assert_eq!(dom.element_name(div).unwrap().as_ref(), "div");
        assert_eq!(dom.element_id(div), Some("main"));
        assert_eq!(dom.get(div).parent, Some(dom.root()));
    }

    #[test]
    fn children_in_order() {
        let mut dom = Dom::new();

        let parent = dom.create_element(qname("div"), vec![]);
        let first = dom.create_element(qname("p"), vec![]);
        let second = dom.create_element(qname("p"), vec![]);

        dom.append(dom.root(), parent);
        dom.append(parent, first);
        dom.append(parent, second);

        let children: Vec<_> = dom.children(parent).collect();
        assert_eq!(children, vec![first, second]);
        assert_eq!(dom.get(second).prev_sibling, Some(first));
    }

    #[test]
    fn class_extraction() {
        let mut dom = Dom::new();

        let p = dom.create_element(
            qname("p"),
            vec![Attribute {
                name: qname("class"),
                value: "intro highlight".to_string(),
            }],
        );
        dom.append(dom.root(), p);

        assert_eq!(dom.element_classes(p), ["intro", "highlight"]);
    }

    #[test]
    fn text_merging() {
        let mut dom = Dom::new();

        let p = dom.create_element(qname("p"), vec![]);
        dom.append(dom.root(), p);
        dom.append_text(p, "Hello, ");
        dom.append_text(p, "World!");

        let children: Vec<_> = dom.children(p).collect();
        assert_eq!(children.len(), 1);
        assert_eq!(dom.text(children[0]), Some("Hello, World!"));
    }

    #[test]
    fn detach_middle_child() {
        let mut dom = Dom::new();

        let parent = dom.create_element(qname("ul"), vec![]);
        let a = dom.create_element(qname("li"), vec![]);
        let b = dom.create_element(qname("li"), vec![]);
        let c = dom.create_element(qname("li"), vec![]);
        dom.append(dom.root(), parent);
        dom.append(parent, a);
        dom.append(parent, b);
        dom.append(parent, c);

        dom.detach(b);

        let children: Vec<_> = dom.children(parent).collect();
        assert_eq!(children, vec![a, c]);
        assert_eq!(dom.get(b).parent, None);
    }

    #[test]
    fn elements_document_order() {
        let mut dom = Dom::new();

        let html = dom.create_element(qname("html"), vec![]);
        let body = dom.create_element(qname("body"), vec![]);
        let h1 = dom.create_element(qname("h1"), vec![]);
        dom.append(dom.root(), html);
        dom.append(html, body);
        dom.append(body, h1);
        dom.append_text(h1, "title");

        let elements: Vec<_> = dom.elements().collect();
        assert_eq!(elements, vec![html, body, h1]);
    }
}
