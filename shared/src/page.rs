use serde::{Deserialize, Serialize};

/// Static pages produced by the bundler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Index,
    Dashboard,
    Login,
    Resume,
    Analyze,
    Features,
}

impl Page {
    pub fn file_name(&self) -> &'static str {
        match self {
            Page::Index => "index.html",
            Page::Dashboard => "dashboard.html",
            Page::Login => "login.html",
            Page::Resume => "resume.html",
            Page::Analyze => "analyze.html",
            Page::Features => "features.html",
        }
    }
}
