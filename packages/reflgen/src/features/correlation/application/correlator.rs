//! Correlator
//!
//! Matches the head of a file's marker queue against class/struct
//! declarations, then matches property markers against the class's direct
//! field children. Correlation is positional: markers and declarations share
//! the same textual order, so the queue is consumed front to back and a
//! marker that does not match stays at the head for a later declaration.

use tracing::debug;

use crate::features::annotation::MarkerQueue;
use crate::features::correlation::domain::{ClassMetadata, PropertyMetadata};
use crate::features::parsing::{DeclKind, Declaration};

#[derive(Debug, Clone, Copy, Default)]
pub struct Correlator;

impl Correlator {
    pub fn new() -> Self {
        Self
    }

    /// Correlate one class/struct declaration.
    ///
    /// Returns `None` (consuming nothing) unless the queue head is a class
    /// marker naming this declaration.
    pub fn correlate(
        &self,
        class_node: &Declaration,
        qualified_name: &str,
        queue: &mut MarkerQueue,
    ) -> Option<ClassMetadata> {
        if !class_node.kind.is_record() || class_node.name.is_empty() {
            return None;
        }

        // property markers above the declaration were left by members of an
        // earlier body that are neither fields nor methods
        let orphans = queue.discard_properties_before(class_node.line());
        if orphans > 0 {
            debug!(class = %class_node.name, discarded = orphans, "dropped orphan property markers");
        }

        let head = queue.peek()?;
        let marker_name = head.class_name()?;
        if marker_name != class_node.name {
            debug!(
                class = %class_node.name,
                marker = marker_name,
                marker_line = head.line,
                "class marker names another declaration"
            );
            return None;
        }

        let stale = queue.discard_before(class_node.line());
        if stale > 0 {
            debug!(class = %class_node.name, discarded = stale, "dropped stale markers before class");
        }
        // after the advance the head must still be this class's marker
        if queue.peek()?.class_name() != Some(class_node.name.as_str()) {
            return None;
        }
        let marker = queue.pop()?;

        let mut metadata = ClassMetadata::new(&class_node.name, qualified_name, marker.line);
        for child in class_node.children() {
            match child.kind {
                DeclKind::Field => {
                    if let Some(property) = self.match_field(child, queue) {
                        metadata.properties.push(property);
                    }
                }
                DeclKind::Method => self.visit_method(child, queue),
                _ => {}
            }
        }
        Some(metadata)
    }

    /// Consume a property marker sitting on the line right before `field`.
    ///
    /// Property markers whose target line lies before the field can never
    /// match a later member and are dropped first.
    pub fn match_field(&self, field: &Declaration, queue: &mut MarkerQueue) -> Option<PropertyMetadata> {
        while queue
            .peek()
            .is_some_and(|m| m.is_property() && m.line + 1 < field.line())
        {
            if let Some(orphan) = queue.pop() {
                debug!(line = orphan.line, "property marker without a field, ignored");
            }
        }

        let head = queue.peek()?;
        if !head.is_property() || !field.location.directly_follows(head.line) {
            return None;
        }
        queue.pop();
        Some(PropertyMetadata::new(&field.name, field.type_spelling()))
    }

    /// Methods carry no metadata; a property marker placed on one is an orphan
    fn visit_method(&self, method: &Declaration, queue: &mut MarkerQueue) {
        let annotates_method = queue
            .peek()
            .is_some_and(|m| m.is_property() && method.location.directly_follows(m.line));
        if annotates_method {
            queue.pop();
            debug!(method = %method.name, "property marker on a method, ignored");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::annotation::Marker;
    use crate::shared::models::SourceLocation;
    use pretty_assertions::assert_eq;

    fn at(line: u32) -> SourceLocation {
        SourceLocation::new("src/widget.h", line)
    }

    fn field(name: &str, ty: &str, line: u32) -> Declaration {
        Declaration::new(DeclKind::Field, name, at(line)).with_type(ty)
    }

    fn class(name: &str, line: u32, children: Vec<Declaration>) -> Declaration {
        Declaration::new(DeclKind::Class, name, at(line)).with_children(children)
    }

    /// class Widget {        // 1
    /// MARK_CLASS()          // 2
    /// MARK_PROPERTY()       // 3
    /// int health;           // 4
    /// float speed;          // 5
    /// };
    fn widget() -> (Declaration, MarkerQueue) {
        let node = class(
            "Widget",
            1,
            vec![field("health", "int", 4), field("speed", "float", 5)],
        );
        let queue = MarkerQueue::new(vec![Marker::class(2, "Widget"), Marker::property(3)]);
        (node, queue)
    }

    #[test]
    fn test_widget_round_trip() {
        let (node, mut queue) = widget();
        let meta = Correlator::new().correlate(&node, "Widget", &mut queue).unwrap();

        assert_eq!(
            meta,
            ClassMetadata::new("Widget", "Widget", 2)
                .with_property(PropertyMetadata::new("health", "int"))
        );
        assert!(queue.is_exhausted());
    }

    #[test]
    fn test_property_order_preserved_across_unannotated_fields() {
        let node = class(
            "Stats",
            1,
            vec![
                field("p1", "int", 4),
                field("plain", "int", 5),
                field("p2", "float", 7),
                field("other", "bool", 8),
                field("p3", "double", 10),
            ],
        );
        let mut queue = MarkerQueue::new(vec![
            Marker::class(2, "Stats"),
            Marker::property(3),
            Marker::property(6),
            Marker::property(9),
        ]);

        let meta = Correlator::new().correlate(&node, "Stats", &mut queue).unwrap();
        assert_eq!(meta.property_names(), vec!["p1", "p2", "p3"]);
    }

    #[test]
    fn test_name_mismatch_consumes_nothing() {
        let node = class("Gadget", 1, vec![field("x", "int", 4)]);
        let mut queue = MarkerQueue::new(vec![Marker::class(2, "Widget"), Marker::property(3)]);

        assert!(Correlator::new().correlate(&node, "Gadget", &mut queue).is_none());
        assert_eq!(queue.remaining().len(), 2);
    }

    #[test]
    fn test_marker_retried_against_later_class() {
        let first = class("Helper", 1, vec![]);
        let second = class("Widget", 5, vec![field("hp", "int", 8)]);
        let mut queue = MarkerQueue::new(vec![Marker::class(6, "Widget"), Marker::property(7)]);
        let correlator = Correlator::new();

        assert!(correlator.correlate(&first, "Helper", &mut queue).is_none());
        let meta = correlator.correlate(&second, "Widget", &mut queue).unwrap();
        assert_eq!(meta.property_names(), vec!["hp"]);
    }

    #[test]
    fn test_head_not_class_marker_is_not_reflectable() {
        let node = class("Widget", 3, vec![]);
        let mut queue = MarkerQueue::new(vec![Marker::property(4), Marker::class(5, "Widget")]);

        assert!(Correlator::new().correlate(&node, "Widget", &mut queue).is_none());
        assert_eq!(queue.peek(), Some(&Marker::property(4)));
    }

    #[test]
    fn test_unresolved_class_name_never_matches() {
        let anonymous = Declaration::new(DeclKind::Struct, "", at(1));
        let named = class("Widget", 1, vec![]);
        let mut queue = MarkerQueue::new(vec![Marker::class(2, "")]);
        let correlator = Correlator::new();

        assert!(correlator.correlate(&anonymous, "", &mut queue).is_none());
        assert!(correlator.correlate(&named, "Widget", &mut queue).is_none());
        assert_eq!(queue.remaining().len(), 1);
    }

    #[test]
    fn test_stale_marker_before_class_is_discarded() {
        // marker at line 1 names Widget but the declaration starts at line 3;
        // the real marker for this declaration follows inside its body
        let node = class("Widget", 3, vec![field("x", "int", 6)]);
        let mut queue = MarkerQueue::new(vec![
            Marker::class(1, "Widget"),
            Marker::class(4, "Widget"),
            Marker::property(5),
        ]);

        let meta = Correlator::new().correlate(&node, "Widget", &mut queue).unwrap();
        assert_eq!(meta.marker_line, 4);
        assert_eq!(meta.property_names(), vec!["x"]);
    }

    #[test]
    fn test_stale_marker_exhausting_queue() {
        let node = class("Widget", 10, vec![]);
        let mut queue = MarkerQueue::new(vec![Marker::class(2, "Widget")]);

        assert!(Correlator::new().correlate(&node, "Widget", &mut queue).is_none());
        assert!(queue.is_exhausted());
    }

    #[test]
    fn test_property_marker_on_method_is_orphan() {
        let node = class(
            "Widget",
            1,
            vec![
                Declaration::new(DeclKind::Method, "Tick", at(4)),
                field("hp", "int", 6),
            ],
        );
        let mut queue = MarkerQueue::new(vec![
            Marker::class(2, "Widget"),
            Marker::property(3),
            Marker::property(5),
        ]);

        let meta = Correlator::new().correlate(&node, "Widget", &mut queue).unwrap();
        assert_eq!(meta.property_names(), vec!["hp"]);
        assert!(queue.is_exhausted());
    }

    #[test]
    fn test_orphan_on_non_field_member_does_not_block_next_class() {
        // struct A {            // 1
        // MARK_CLASS()          // 2
        // MARK_PROPERTY()       // 3
        // static int count;     // 4  (not a field)
        // };
        // struct B {            // 6
        // MARK_CLASS()          // 7
        // MARK_PROPERTY()       // 8
        // int y;                // 9
        // };
        let a = Declaration::new(DeclKind::Struct, "A", at(1)).with_children(vec![
            Declaration::new(DeclKind::Other("static_member".into()), "count", at(4)),
        ]);
        let b = Declaration::new(DeclKind::Struct, "B", at(6)).with_children(vec![field("y", "int", 9)]);
        let mut queue = MarkerQueue::new(vec![
            Marker::class(2, "A"),
            Marker::property(3),
            Marker::class(7, "B"),
            Marker::property(8),
        ]);
        let correlator = Correlator::new();

        let meta_a = correlator.correlate(&a, "A", &mut queue).unwrap();
        assert!(meta_a.properties.is_empty());
        assert_eq!(queue.peek(), Some(&Marker::property(3)));

        let meta_b = correlator.correlate(&b, "B", &mut queue).unwrap();
        assert_eq!(meta_b.marker_line, 7);
        assert_eq!(meta_b.property_names(), vec!["y"]);
        assert!(queue.is_exhausted());
    }

    #[test]
    fn test_property_marker_with_gap_does_not_match() {
        let node = class("Widget", 1, vec![field("hp", "int", 5)]);
        let mut queue = MarkerQueue::new(vec![Marker::class(2, "Widget"), Marker::property(3)]);

        let meta = Correlator::new().correlate(&node, "Widget", &mut queue).unwrap();
        assert!(meta.properties.is_empty());
    }

    #[test]
    fn test_nested_class_fields_are_not_collected() {
        let inner = Declaration::new(DeclKind::Struct, "Inner", at(4))
            .with_children(vec![field("deep", "int", 6)]);
        let node = class("Outer", 1, vec![inner]);
        let mut queue = MarkerQueue::new(vec![Marker::class(2, "Outer"), Marker::property(5)]);

        let meta = Correlator::new().correlate(&node, "Outer", &mut queue).unwrap();
        assert!(meta.properties.is_empty());
        // the nested declaration's marker is left for the walker's visit
        assert_eq!(queue.peek(), Some(&Marker::property(5)));
    }
}
