pub mod app_editor;
pub mod dom_node;
pub mod editor_tools;
pub mod state;
