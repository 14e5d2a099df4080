use std::borrow::Cow;

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::name::ResolveResult;
use quick_xml::{NsReader, Writer};

use super::XmlError;

/// A single attribute on an [`Element`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Qualified name as written, e.g. `rdf:ID`.
    pub name: String,
    /// Namespace URI the prefix resolved to, if any.
    pub namespace: Option<String>,
    /// Local part of the name.
    pub local: String,
    /// Unescaped value.
    pub value: String,
}

/// A child of an [`Element`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    Element(Element),
    Text(String),
}

/// An XML element with its attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Qualified name as written, e.g. `owl:Class`.
    pub name: String,
    /// Namespace URI the element name resolved to, if any.
    pub namespace: Option<String>,
    /// Local part of the name.
    pub local: String,
    /// Attributes in document order.
    pub attributes: Vec<Attribute>,
    /// Child elements and non-whitespace text in document order.
    pub children: Vec<XmlNode>,
}

impl Element {
    /// Creates an empty element for building output trees.
    ///
    /// Built elements carry no resolved namespace; only the qualified name is
    /// used when writing.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let local = local_part(&name).to_string();
        Self {
            name,
            namespace: None,
            local,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Adds an attribute, returning the element.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Adds a text child, returning the element.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(XmlNode::Text(text.into()));
        self
    }

    /// Adds a child element, returning the element.
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(XmlNode::Element(child));
        self
    }

    /// Sets an attribute, replacing an existing one with the same qualified name.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(existing) = self.attributes.iter_mut().find(|a| a.name == name) {
            existing.value = value;
            return;
        }
        let local = local_part(&name).to_string();
        self.attributes.push(Attribute {
            name,
            namespace: None,
            local,
            value,
        });
    }

    /// Appends a child element and returns a mutable reference to it.
    pub fn push_child(&mut self, child: Element) -> &mut Element {
        self.children.push(XmlNode::Element(child));
        match self.children.last_mut() {
            Some(XmlNode::Element(el)) => el,
            _ => unreachable!("just pushed an element"),
        }
    }

    /// Returns true if this element has the given namespace and local name.
    pub fn is(&self, namespace: &str, local: &str) -> bool {
        self.local == local && self.namespace.as_deref() == Some(namespace)
    }

    /// Iterates over direct child elements.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|c| match c {
            XmlNode::Element(el) => Some(el),
            XmlNode::Text(_) => None,
        })
    }

    /// Collects all descendants (not including `self`) matching the name,
    /// depth first, in document order.
    pub fn descendants(&self, namespace: &str, local: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_descendants(namespace, local, &mut found);
        found
    }

    fn collect_descendants<'a>(&'a self, namespace: &str, local: &str, out: &mut Vec<&'a Element>) {
        for child in self.child_elements() {
            if child.is(namespace, local) {
                out.push(child);
            }
            child.collect_descendants(namespace, local, out);
        }
    }

    /// Returns the first descendant matching the name, in document order.
    pub fn find_descendant(&self, namespace: &str, local: &str) -> Option<&Element> {
        for child in self.child_elements() {
            if child.is(namespace, local) {
                return Some(child);
            }
            if let Some(found) = child.find_descendant(namespace, local) {
                return Some(found);
            }
        }
        None
    }

    /// Value of an unprefixed attribute.
    pub fn attr(&self, local: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.namespace.is_none() && a.local == local)
            .map(|a| a.value.as_str())
    }

    /// Value of a namespaced attribute.
    pub fn attr_ns(&self, namespace: &str, local: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.local == local && a.namespace.as_deref() == Some(namespace))
            .map(|a| a.value.as_str())
    }

    /// Concatenated direct text content, or `None` if there is none.
    pub fn text(&self) -> Option<String> {
        let mut text = String::new();
        let mut any = false;
        for child in &self.children {
            if let XmlNode::Text(t) = child {
                text.push_str(t);
                any = true;
            }
        }
        any.then_some(text)
    }

    /// Parses a document into its root element.
    pub fn parse(xml: &str) -> Result<Element, XmlError> {
        let mut reader = NsReader::from_str(xml);
        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            let (resolved, event) = reader.read_resolved_event()?;
            let namespace = owned_namespace(resolved)?;

            match event {
                Event::Start(start) => {
                    stack.push(open_element(&reader, namespace, &start)?);
                }
                Event::Empty(start) => {
                    let element = open_element(&reader, namespace, &start)?;
                    attach(&mut stack, &mut root, element)?;
                }
                Event::End(end) => {
                    let mut element = stack.pop().ok_or_else(|| {
                        XmlError::UnexpectedEnd(String::from_utf8_lossy(end.name().as_ref()).into_owned())
                    })?;
                    drop_indentation(&mut element);
                    attach(&mut stack, &mut root, element)?;
                }
                Event::Text(text) => {
                    let text = text.unescape()?;
                    push_text(&mut stack, text);
                }
                Event::CData(data) => {
                    let text = std::str::from_utf8(&data)?;
                    push_text(&mut stack, Cow::Borrowed(text));
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(open) = stack.pop() {
            return Err(XmlError::Unclosed(open.name));
        }
        root.ok_or(XmlError::MissingRoot)
    }

    /// Serializes this element and its subtree without indentation or
    /// declaration.
    pub fn to_xml_string(&self) -> Result<String, XmlError> {
        let mut writer = Writer::new(Vec::new());
        self.write_to(&mut writer)?;
        Ok(String::from_utf8(writer.into_inner()).map_err(|e| e.utf8_error())?)
    }

    /// Serializes this element as a complete document: the declaration line,
    /// an optional comment banner line, then the indented tree.
    pub fn to_document(&self, declaration: &str, banner: Option<&str>) -> Result<String, XmlError> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
        self.write_to(&mut writer)?;
        let body = String::from_utf8(writer.into_inner()).map_err(|e| e.utf8_error())?;

        let mut out = String::with_capacity(body.len() + 128);
        out.push_str(declaration);
        out.push('\n');
        if let Some(banner) = banner {
            out.push_str("<!--");
            out.push_str(banner);
            out.push_str("-->\n");
        }
        out.push_str(&body);
        out.push('\n');
        Ok(out)
    }

    fn write_to<W: std::io::Write>(&self, writer: &mut Writer<W>) -> Result<(), XmlError> {
        let mut start = BytesStart::new(self.name.as_str());
        for attr in &self.attributes {
            start.push_attribute((attr.name.as_str(), attr.value.as_str()));
        }

        if self.children.is_empty() {
            writer.write_event(Event::Empty(start))?;
            return Ok(());
        }

        writer.write_event(Event::Start(start))?;
        for child in &self.children {
            match child {
                XmlNode::Element(el) => el.write_to(writer)?,
                XmlNode::Text(text) => writer.write_event(Event::Text(BytesText::new(text)))?,
            }
        }
        writer.write_event(Event::End(BytesEnd::new(self.name.as_str())))?;
        Ok(())
    }
}

fn local_part(name: &str) -> &str {
    name.rsplit_once(':').map_or(name, |(_, local)| local)
}

fn owned_namespace(resolved: ResolveResult<'_>) -> Result<Option<String>, XmlError> {
    match resolved {
        ResolveResult::Bound(ns) => Ok(Some(std::str::from_utf8(ns.as_ref())?.to_string())),
        _ => Ok(None),
    }
}

fn open_element(
    reader: &NsReader<&[u8]>,
    namespace: Option<String>,
    start: &BytesStart<'_>,
) -> Result<Element, XmlError> {
    let name = std::str::from_utf8(start.name().as_ref())?.to_string();
    let local = std::str::from_utf8(start.local_name().as_ref())?.to_string();

    let mut attributes = Vec::new();
    for attr in start.attributes() {
        let attr = attr?;
        let (resolved, attr_local) = reader.resolve_attribute(attr.key);
        attributes.push(Attribute {
            name: std::str::from_utf8(attr.key.as_ref())?.to_string(),
            namespace: owned_namespace(resolved)?,
            local: std::str::from_utf8(attr_local.as_ref())?.to_string(),
            value: attr.unescape_value()?.into_owned(),
        });
    }

    Ok(Element {
        name,
        namespace,
        local,
        attributes,
        children: Vec::new(),
    })
}

fn attach(stack: &mut [Element], root: &mut Option<Element>, element: Element) -> Result<(), XmlError> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(XmlNode::Element(element));
        return Ok(());
    }
    if root.is_some() {
        return Err(XmlError::MultipleRoots(element.name));
    }
    *root = Some(element);
    Ok(())
}

fn push_text(stack: &mut [Element], text: Cow<'_, str>) {
    if let Some(parent) = stack.last_mut() {
        // Adjacent text runs (e.g. split around CDATA) are merged.
        if let Some(XmlNode::Text(existing)) = parent.children.last_mut() {
            existing.push_str(&text);
            return;
        }
        parent.children.push(XmlNode::Text(text.into_owned()));
    }
}

/// Removes whitespace-only text between child elements.
///
/// Whitespace is content only in elements without child elements, e.g.
/// `<rdfs:label>   </rdfs:label>`.
fn drop_indentation(element: &mut Element) {
    if element.child_elements().next().is_none() {
        return;
    }
    element.children.retain(|child| match child {
        XmlNode::Text(text) => !text.trim().is_empty(),
        XmlNode::Element(_) => true,
    });
}
