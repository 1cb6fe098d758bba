pub static PROP_EDITABLE: &'static str = "contenteditable";
pub static PROP_PLACEHOLDER: &'static str = "placeholder";
pub static PROP_TITLE: &'static str = "title";
pub static PROP_NAME: &'static str = "name";
pub static PROP_TYPE: &'static str = "type";
pub static PROP_VALUE: &'static str = "value";
pub static PROP_DISABLED: &'static str = "disabled";

pub static TAG_DIV: &'static str = "div";
pub static TAG_SPAN: &'static str = "span";
pub static TAG_INPUT: &'static str = "input";
pub static TAG_BUTTON: &'static str = "button";

// elements of the server-rendered page template
pub static ID_TITLE: &'static str = "title";
pub static ID_AUTHOR: &'static str = "author";
pub static ID_LINK_INPUT: &'static str = "link-input";
pub static ID_LINK_INPUT_BLOCK: &'static str = "link-input-block";
pub static ID_CONTENT: &'static str = "content_payload";

pub static MSG_ERROR: &'static str = "Error (see logs)";
