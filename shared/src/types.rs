use serde::{Deserialize, Serialize};

use crate::constants::{AUTHOR_NAME_MAX, AUTHOR_URL_MAX, TITLE_MAX};
use crate::error::ApiError;
use crate::node::ContentNode;
use crate::utils::truncate_chars;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Account {
    pub access_token: String,
    pub author_name: String,
    #[serde(default)]
    pub author_url: String,
    #[serde(default)]
    pub short_name: String,
    #[serde(default)]
    pub page_count: u64,
    #[serde(default)]
    pub views: u64,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct AccountEdited {
    #[serde(default)]
    pub short_name: String,
    pub author_name: String,
    #[serde(default)]
    pub author_url: String,
}

impl Account {
    pub fn apply(&mut self, edited: AccountEdited) {
        self.short_name = edited.short_name;
        self.author_name = edited.author_name;
        self.author_url = edited.author_url;
    }
}

/// Server omits falsy fields, everything except `path` and `title` may be absent.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Page {
    pub path: String,
    pub title: String,
    #[serde(default)]
    pub created: String,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub can_edit: bool,
    #[serde(default)]
    pub author_name: String,
    #[serde(default)]
    pub author_url: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<ContentNode>>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq)]
pub struct DeleteResult {
    #[serde(default)]
    pub ok: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct PageForm {
    pub title: String,
    pub author_name: String,
    pub author_url: String,
    pub content: String,
}

impl PageForm {
    pub fn from_editor(title: &str, author_name: &str, author_url: &str, content: &[ContentNode]) -> Result<Self, ApiError> {
        let content = serde_json::to_string(content).map_err(|err| ApiError::Encode(err.to_string()))?;
        Ok(Self {
            title: truncate_chars(title, TITLE_MAX),
            author_name: truncate_chars(author_name, AUTHOR_NAME_MAX),
            author_url: truncate_chars(author_url, AUTHOR_URL_MAX),
            content,
        })
    }
}

#[derive(Debug, Serialize, Clone, Default, PartialEq)]
pub struct ProfileForm {
    pub author_name: String,
    pub author_url: String,
}

impl ProfileForm {
    pub fn new(author_name: &str, author_url: &str) -> Self {
        Self {
            author_name: truncate_chars(author_name, AUTHOR_NAME_MAX),
            author_url: truncate_chars(author_url, AUTHOR_URL_MAX),
        }
    }
}
