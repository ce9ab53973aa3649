//! UI components for DemoLink
//!
//! This module contains the toolbar, the popover link form, and the
//! document editor pane.

mod editor_pane;
mod link_form;
mod toolbar;

pub use editor_pane::EditorPane;
pub use link_form::{LinkForm, LinkFormResult};
pub use toolbar::{Toolbar, ToolbarAction};
