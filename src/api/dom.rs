//! DOM mounting of display lists
//!
//! Materializes a [`DisplayList`] under the container element. Every mount
//! clears the container first and replaces the event closures of that
//! container's previous render, so repeated pushes never accumulate nodes or
//! listeners. Closures of other containers are left alone.

use crate::card_layout::{DisplayList, NodeEvent, RenderElement, RenderNode};
use crate::error::VizError;
use crate::interaction::{report_click, InteractionSink};
use crate::models::Row;
use crate::theme::Theme;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, Node};

type EventClosure = Closure<dyn FnMut(Event)>;

thread_local! {
    // Closures of the current render, keyed by container id
    static HANDLERS: RefCell<HashMap<String, Vec<EventClosure>>> =
        RefCell::new(HashMap::new());
}

/// The page's document
pub fn document() -> Result<Document, VizError> {
    web_sys::window()
        .ok_or_else(|| VizError::Dom("no global window".to_string()))?
        .document()
        .ok_or_else(|| VizError::Dom("window has no document".to_string()))
}

/// Find the container by id, creating it under `<body>` if absent
pub fn ensure_container(document: &Document, id: &str) -> Result<Element, VizError> {
    if let Some(existing) = document.get_element_by_id(id) {
        return Ok(existing);
    }

    log::debug!("Creating container #{}", id);
    let container = document
        .create_element("div")
        .map_err(|e| VizError::dom("create container", e))?;
    container.set_id(id);

    let body = document
        .body()
        .ok_or_else(|| VizError::Dom("document has no body".to_string()))?;
    body.append_child(&container)
        .map_err(|e| VizError::dom("append container", e))?;

    Ok(container)
}

/// Write the theme's CSS variables onto the document root
pub fn apply_theme(document: &Document, theme: &Theme) -> Result<(), VizError> {
    let root: HtmlElement = document
        .document_element()
        .ok_or_else(|| VizError::Dom("document has no root element".to_string()))?
        .dyn_into()
        .map_err(|_| VizError::Dom("document root is not an HTML element".to_string()))?;

    let style = root.style();
    for (name, value) in theme.variables() {
        style
            .set_property(name, value)
            .map_err(|e| VizError::dom(name, e))?;
    }

    log::debug!(
        "Applied theme: {} columns, shadow {}",
        theme.columns,
        theme.card_shadow
    );
    Ok(())
}

/// Mounts display lists for one payload's rows
pub struct DomMounter {
    document: Document,
    rows: Rc<[Row]>,
    sink: Rc<dyn InteractionSink>,
}

impl DomMounter {
    pub fn new(document: Document, rows: Rc<[Row]>, sink: Rc<dyn InteractionSink>) -> Self {
        Self {
            document,
            rows,
            sink,
        }
    }

    /// Replace the container's content with `list`
    pub fn mount(&self, container: &Element, list: &DisplayList) -> Result<(), VizError> {
        container.set_inner_html("");

        if let Some(theme) = &list.theme {
            apply_theme(&self.document, theme)?;
        }

        let mut handlers = Vec::new();
        let root = self.create_node(&list.root, &mut handlers)?;
        container
            .append_child(&root)
            .map_err(|e| VizError::dom("append root", e))?;

        // Old nodes of this container are gone, drop their closures
        HANDLERS.with(|slot| {
            slot.borrow_mut().insert(container.id(), handlers);
        });
        Ok(())
    }

    fn create_node(
        &self,
        node: &RenderNode,
        handlers: &mut Vec<EventClosure>,
    ) -> Result<Node, VizError> {
        match node {
            RenderNode::Text { text } => Ok(self.document.create_text_node(text).into()),
            RenderNode::Element(element) => {
                self.create_element(element, handlers).map(Node::from)
            }
        }
    }

    fn create_element(
        &self,
        template: &RenderElement,
        handlers: &mut Vec<EventClosure>,
    ) -> Result<Element, VizError> {
        let element = self
            .document
            .create_element(&template.tag)
            .map_err(|e| VizError::dom(&template.tag, e))?;

        if !template.classes.is_empty() {
            element.set_class_name(&template.classes.join(" "));
        }
        for (name, value) in &template.attributes {
            element
                .set_attribute(name, value)
                .map_err(|e| VizError::dom(name, e))?;
        }
        if let Some(text) = &template.text {
            element.set_text_content(Some(text));
        }

        for child in &template.children {
            let node = self.create_node(child, handlers)?;
            element
                .append_child(&node)
                .map_err(|e| VizError::dom("append child", e))?;
        }

        for event in &template.events {
            self.bind_event(&element, event, handlers)?;
        }

        Ok(element)
    }

    fn bind_event(
        &self,
        element: &Element,
        event: &NodeEvent,
        handlers: &mut Vec<EventClosure>,
    ) -> Result<(), VizError> {
        let (event_name, closure) = match event {
            NodeEvent::Click { index } => {
                let index = *index;
                let rows = Rc::clone(&self.rows);
                let sink = Rc::clone(&self.sink);
                let closure = Closure::wrap(Box::new(move |_event: Event| {
                    if let Err(err) = report_click(sink.as_ref(), &rows, index) {
                        log::error!("Failed to report click on card {}: {}", index, err);
                    }
                }) as Box<dyn FnMut(Event)>);
                ("click", closure)
            }
            NodeEvent::ImageFallback { src } => {
                let image = element.clone();
                let src = src.clone();
                let closure = Closure::wrap(Box::new(move |_event: Event| {
                    // the fallback itself failing must not loop
                    if image.get_attribute("src").as_deref() == Some(src.as_str()) {
                        return;
                    }
                    log::warn!("Creative image failed to load, using fallback");
                    if let Err(err) = image.set_attribute("src", &src) {
                        log::error!("Failed to set fallback image: {:?}", err);
                    }
                }) as Box<dyn FnMut(Event)>);
                ("error", closure)
            }
        };

        element
            .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref())
            .map_err(|e| VizError::dom(event_name, e))?;
        handlers.push(closure);
        Ok(())
    }
}
