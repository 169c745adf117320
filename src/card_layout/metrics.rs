//! Metric tiles of a card

use super::display_list::{RenderElement, RenderNode};
use crate::format::format_value;
use crate::models::{FieldBindings, MetricDescriptor, Row, StyleConfig, METRICS};

/// Build the metrics section, or `None` when no metric resolved
pub fn build_metrics(
    row: &Row,
    fields: &FieldBindings,
    style: &StyleConfig,
) -> Option<RenderElement> {
    let mut section = RenderElement::new("div")
        .class("metrics-section")
        .class(style.metrics_layout.css_class());

    for metric in &METRICS {
        // zero is a real value here, only null / missing is skipped
        if let Some(value) = fields.resolve_present(row, metric.field) {
            section.push_child(metric_tile(metric, format_value(Some(value), metric.format)));
        }
    }

    if section.children.is_empty() {
        None
    } else {
        Some(section)
    }
}

fn metric_tile(metric: &MetricDescriptor, formatted: String) -> RenderElement {
    let label = RenderElement::new("div")
        .class("metric-label")
        .child(RenderElement::new("span").class("metric-icon").text(metric.icon))
        .child(RenderNode::text(format!(" {}", metric.label)));

    RenderElement::new("div")
        .class("metric-card")
        .child(label)
        .child(RenderElement::new("div").class("metric-value").text(formatted))
}
