use serde::{Deserialize, Serialize};

use super::story::Story;

/// One page of search results from the HN search API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPage {
    pub hits: Vec<Story>,
    pub page: u32,
    #[serde(rename = "nbPages", default)]
    pub nb_pages: u32,
}
