pub static ROOT_API: &'static str = "api";
pub static API_CREATE_ACCOUNT: &'static str = "createAccount";
pub static API_GET_ACCOUNT: &'static str = "getAccountInfo";
pub static API_EDIT_ACCOUNT: &'static str = "editAccountInfo";
pub static API_GET_PAGE: &'static str = "getPage";
pub static API_GET_PAGES: &'static str = "getPages";
pub static API_CREATE_PAGE: &'static str = "createPage";
pub static API_EDIT_PAGE: &'static str = "editPage";
pub static API_DELETE_PAGE: &'static str = "deletePage";
pub static API_ADD_VIEW: &'static str = "addView";

pub static ROUTE_AUTH: &'static str = "auth";
pub static ROUTE_ACCOUNT: &'static str = "account";

pub static STORAGE_TOKEN_KEY: &'static str = "token_";
pub static DEFAULT_SHORT_NAME: &'static str = "Anonymous";

pub const PAGES_LIMIT: usize = 10;
pub const CARD_COLOR_COUNT: usize = 3;
pub const SCROLL_THRESHOLD: i32 = 100;

pub const TOKEN_MIN_LEN: usize = 10;
pub const TITLE_MAX: usize = 256;
pub const AUTHOR_NAME_MAX: usize = 128;
pub const AUTHOR_URL_MAX: usize = 512;

pub const DELETE_CONFIRM_WORDS: [&str; 4] = ["delete", "удалить", "del", "удали"];
