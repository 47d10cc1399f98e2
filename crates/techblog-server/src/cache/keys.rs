//! Cache key generation.

use std::fmt;

/// Operacion cacheada.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryOperation {
    /// `list_posts(search_term)`
    ListPosts,
    /// `get_post(slug)`
    GetPost,
}

impl QueryOperation {
    /// Nombre estable de la operacion (para logs y metricas).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ListPosts => "list_posts",
            Self::GetPost => "get_post",
        }
    }
}

/// Key unica para el cache de queries: (operacion, argumento).
///
/// El argumento NO se normaliza: cada termino de busqueda distinto y cada
/// slug distinto tienen su propia entry. Los slugs son case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    operation: QueryOperation,
    argument: Option<String>,
}

impl CacheKey {
    /// Key para `list_posts`. `None` significa "sin filtro".
    ///
    /// # Examples
    ///
    /// ```
    /// use techblog_server::cache::CacheKey;
    ///
    /// let key = CacheKey::list_posts(Some("Raft"));
    /// assert_eq!(key.to_string(), "list_posts(Raft)");
    /// assert_ne!(key, CacheKey::list_posts(Some("raft")));
    /// ```
    pub fn list_posts(search_term: Option<&str>) -> Self {
        Self {
            operation: QueryOperation::ListPosts,
            argument: search_term.map(String::from),
        }
    }

    /// Key para `get_post`.
    pub fn get_post(slug: &str) -> Self {
        Self {
            operation: QueryOperation::GetPost,
            argument: Some(slug.to_string()),
        }
    }

    /// Retorna la operacion.
    pub fn operation(&self) -> QueryOperation {
        self.operation
    }

    /// Retorna el argumento.
    pub fn argument(&self) -> Option<&str> {
        self.argument.as_deref()
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({})",
            self.operation.as_str(),
            self.argument.as_deref().unwrap_or_default()
        )
    }
}
