// ============================================================================
// ROUTES - Tabla de rutas (todas cuelgan del layout principal en "/")
// ============================================================================

use crate::config::CONFIG;

/// Nombre del layout padre
pub const LAYOUT_NAME: &str = "mainLayout";

/// Páginas disponibles dentro del layout principal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Customer,
    Rider,
    Boss,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Customer, Page::Rider, Page::Boss];

    /// Ruta canónica (sin base)
    pub fn path(&self) -> &'static str {
        match self {
            Page::Customer => "/customer",
            Page::Rider => "/",
            Page::Boss => "/boss",
        }
    }

    /// Nombre de la ruta canónica
    pub fn name(&self) -> &'static str {
        match self {
            Page::Customer => "customer",
            Page::Rider => "home",
            Page::Boss => "boss",
        }
    }

    /// Texto del enlace en la navegación
    pub fn title(&self) -> &'static str {
        match self {
            Page::Customer => "Cliente",
            Page::Rider => "Repartidor",
            Page::Boss => "Jefe",
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct RouteRecord {
    pub path: &'static str,
    pub name: &'static str,
    pub page: Page,
}

/// Hijos del layout. "" es la ruta índice ("/"), "/rider" es alias de la misma página.
pub static ROUTES: [RouteRecord; 4] = [
    RouteRecord { path: "/customer", name: "customer", page: Page::Customer },
    RouteRecord { path: "", name: "home", page: Page::Rider },
    RouteRecord { path: "/rider", name: "rider", page: Page::Rider },
    RouteRecord { path: "/boss", name: "boss", page: Page::Boss },
];

/// Resolver un path del navegador usando la base configurada
pub fn resolve(path: &str) -> Option<&'static RouteRecord> {
    resolve_with_base(path, &CONFIG.base_url)
}

/// Quita base, query, fragmento y "/" final; después match exacto
pub fn resolve_with_base(path: &str, base: &str) -> Option<&'static RouteRecord> {
    let relative = normalize_path(strip_base(path, base));
    ROUTES.iter().find(|record| normalize_path(record.path) == relative)
}

/// Buscar una ruta por nombre
pub fn find_by_name(name: &str) -> Option<&'static RouteRecord> {
    ROUTES.iter().find(|record| record.name == name)
}

/// Path completo (con base) para un enlace
pub fn href(page: Page) -> String {
    href_with_base(page, &CONFIG.base_url)
}

pub fn href_with_base(page: Page, base: &str) -> String {
    let base = base.trim_end_matches('/');
    match page.path() {
        "/" => format!("{}/", base),
        path => format!("{}{}", base, path),
    }
}

fn strip_base<'a>(path: &'a str, base: &str) -> &'a str {
    let base = base.trim_end_matches('/');
    if base.is_empty() {
        return path;
    }
    match path.strip_prefix(base) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') || rest.starts_with('?') || rest.starts_with('#') => rest,
        _ => path,
    }
}

fn normalize_path(path: &str) -> &str {
    let end = path.find(|c: char| c == '?' || c == '#').unwrap_or(path.len());
    path[..end].trim_end_matches('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_declared_path_resolves() {
        let cases = [
            ("/", Page::Rider, "home"),
            ("/customer", Page::Customer, "customer"),
            ("/rider", Page::Rider, "rider"),
            ("/boss", Page::Boss, "boss"),
        ];
        for (path, page, name) in cases {
            let record = resolve_with_base(path, "/").expect(path);
            assert_eq!(record.page, page, "{}", path);
            assert_eq!(record.name, name, "{}", path);
        }
    }

    #[test]
    fn test_empty_path_is_home() {
        assert_eq!(resolve_with_base("", "/").map(|r| r.page), Some(Page::Rider));
    }

    #[test]
    fn test_trailing_slash_query_and_fragment_are_ignored() {
        assert_eq!(resolve_with_base("/boss/", "/").map(|r| r.page), Some(Page::Boss));
        assert_eq!(resolve_with_base("/customer?from=nav", "/").map(|r| r.page), Some(Page::Customer));
        assert_eq!(resolve_with_base("/rider#map", "/").map(|r| r.page), Some(Page::Rider));
        assert_eq!(resolve_with_base("/?x=1", "/").map(|r| r.page), Some(Page::Rider));
    }

    #[test]
    fn test_unknown_paths_do_not_resolve() {
        assert!(resolve_with_base("/admin", "/").is_none());
        assert!(resolve_with_base("/customer/42", "/").is_none());
        assert!(resolve_with_base("/bossy", "/").is_none());
    }

    #[test]
    fn test_base_path_is_stripped() {
        assert_eq!(resolve_with_base("/app/boss", "/app/").map(|r| r.page), Some(Page::Boss));
        assert_eq!(resolve_with_base("/app/", "/app/").map(|r| r.page), Some(Page::Rider));
        assert_eq!(resolve_with_base("/app", "/app/").map(|r| r.page), Some(Page::Rider));
        assert!(resolve_with_base("/application/boss", "/app/").is_none());
    }

    #[test]
    fn test_href_round_trips_through_resolve() {
        for base in ["/", "/app/"] {
            for page in Page::ALL {
                let link = href_with_base(page, base);
                assert_eq!(resolve_with_base(&link, base).map(|r| r.page), Some(page), "{}", link);
            }
        }
        assert_eq!(href_with_base(Page::Rider, "/"), "/");
        assert_eq!(href_with_base(Page::Customer, "/app/"), "/app/customer");
    }

    #[test]
    fn test_find_by_name() {
        assert_eq!(find_by_name("home").map(|r| r.path), Some(""));
        assert_eq!(find_by_name("boss").map(|r| r.page), Some(Page::Boss));
        assert!(find_by_name(LAYOUT_NAME).is_none());
    }
}
