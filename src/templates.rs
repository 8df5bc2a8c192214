use std::path::Path;

use minijinja::{Environment, path_loader};
use serde::Serialize;

use crate::search::SearchState;
use crate::trials::SearchResults;

pub const INDEX_TEMPLATE: &str = "index.html";

/// Parsed page templates, built once at startup and shared by the handlers.
pub struct Templates {
    env: Environment<'static>,
}

#[derive(Serialize)]
struct PageContext<'a> {
    search: Option<SearchView<'a>>,
}

/// What the template gets to see of a search. Pagination accessors are
/// flattened into plain values since templates cannot call methods.
#[derive(Serialize)]
struct SearchView<'a> {
    search_key: &'a str,
    next_page: u32,
    total_pages: u32,
    current_page: u32,
    previous_page: u32,
    is_last_page: bool,
    results: Option<&'a SearchResults>,
}

impl<'a> From<&'a SearchState> for SearchView<'a> {
    fn from(state: &'a SearchState) -> Self {
        SearchView {
            search_key: state.search_key(),
            next_page: state.next_page(),
            total_pages: state.total_pages(),
            current_page: state.current_page(),
            previous_page: state.previous_page(),
            is_last_page: state.is_last_page(),
            results: state.results(),
        }
    }
}

impl Templates {
    /// Templates compiled into the binary.
    pub fn embedded() -> Result<Templates, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template(INDEX_TEMPLATE, include_str!("../templates/index.html"))?;
        Ok(Templates { env })
    }

    /// Templates read from `dir` on first use, handy while editing them.
    pub fn from_dir(dir: impl AsRef<Path>) -> Templates {
        let mut env = Environment::new();
        env.set_loader(path_loader(dir.as_ref()));
        Templates { env }
    }

    pub fn render_index(&self, search: Option<&SearchState>) -> Result<String, minijinja::Error> {
        let ctx = PageContext {
            search: search.map(SearchView::from),
        };
        self.env.get_template(INDEX_TEMPLATE)?.render(ctx)
    }
}
