use serde::Deserialize;

/// Address parameters for the page: `?slug=...&q=...`.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct PageQuery {
    /// Post selected for the detail view.
    pub slug: Option<String>,

    /// Sidebar search input.
    pub q: Option<String>,
}

impl PageQuery {
    /// Retorna el slug si no esta vacio.
    pub fn slug(&self) -> Option<&str> {
        self.slug.as_deref().filter(|s| !s.is_empty())
    }

    /// Retorna el termino de busqueda si no esta vacio.
    pub fn search_term(&self) -> Option<&str> {
        self.q.as_deref().filter(|s| !s.is_empty())
    }
}

/// Query parameters para `/api/posts`.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct SearchQuery {
    /// Termino de busqueda opcional.
    pub q: Option<String>,
}
