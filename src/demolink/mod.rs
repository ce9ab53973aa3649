//! The DemoLink widget feature.
//!
//! A demo link is an inline widget with a display text, an optional
//! file-extension badge, and a URL, stored in the model as a `demoLink`
//! element with up to two typed children. This module holds the model
//! vocabulary, the selection locator, the child reconciler, the editing
//! command, and the converters between the model and HTML markup.

mod command;
mod converters;
mod locate;
mod reconcile;
mod schema;

pub use command::{DemoLinkCommand, FieldMap};
pub use converters::{document_from_html, document_to_html, downcast_node, upcast_nodes};
pub use locate::find_element;
pub use reconcile::reconcile_child;
pub use schema::{
    ChildKind, Field, ATTR_CLASS, ATTR_URL, DEMO_LINK, DEMO_LINK_FILE_EXTENSION, DEMO_LINK_TEXT,
    MARKER_CLASS,
};
