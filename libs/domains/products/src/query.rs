use crate::models::Product;

/// Listing query picked from the optional `code` and `name` filters.
///
/// Every variant excludes deleted products. Filters are case-insensitive
/// substring matches and combine with AND.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductQuery {
    CodeAndName { code: String, name: String },
    Code { code: String },
    Name { name: String },
    Active,
}

impl ProductQuery {
    pub fn select(code: Option<String>, name: Option<String>) -> Self {
        match (code, name) {
            (Some(code), Some(name)) => ProductQuery::CodeAndName { code, name },
            (Some(code), None) => ProductQuery::Code { code },
            (None, Some(name)) => ProductQuery::Name { name },
            (None, None) => ProductQuery::Active,
        }
    }

    pub fn code(&self) -> Option<&str> {
        match self {
            ProductQuery::CodeAndName { code, .. } | ProductQuery::Code { code } => Some(code),
            _ => None,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            ProductQuery::CodeAndName { name, .. } | ProductQuery::Name { name } => Some(name),
            _ => None,
        }
    }

    /// In-process evaluation, used by the in-memory repository
    pub fn matches(&self, product: &Product) -> bool {
        !product.deleted
            && self
                .code()
                .is_none_or(|code| contains_ignore_case(&product.code, code))
            && self
                .name()
                .is_none_or(|name| contains_ignore_case(&product.name, name))
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, NewProduct};

    fn product(code: &str, name: &str) -> Product {
        Product::new(NewProduct {
            code: code.to_string(),
            name: name.to_string(),
            description: None,
            price: 10.0,
            quantity: 1,
            category: Category::Fitness,
            image: None,
            rating: None,
        })
    }

    #[test]
    fn test_select() {
        assert_eq!(
            ProductQuery::select(Some("ab".into()), Some("cd".into())),
            ProductQuery::CodeAndName {
                code: "ab".into(),
                name: "cd".into()
            }
        );
        assert_eq!(
            ProductQuery::select(Some("ab".into()), None),
            ProductQuery::Code { code: "ab".into() }
        );
        assert_eq!(
            ProductQuery::select(None, Some("cd".into())),
            ProductQuery::Name { name: "cd".into() }
        );
        assert_eq!(ProductQuery::select(None, None), ProductQuery::Active);
    }

    #[test]
    fn test_matches_is_case_insensitive_and() {
        let query = ProductQuery::select(Some("ab".into()), Some("cd".into()));

        assert!(query.matches(&product("xxABx", "yyCdy")));
        assert!(!query.matches(&product("xxABx", "nothing")));
        assert!(!query.matches(&product("nothing", "yyCdy")));
    }

    #[test]
    fn test_matches_excludes_deleted() {
        let mut deleted = product("ab", "cd");
        deleted.mark_deleted();

        assert!(ProductQuery::Active.matches(&product("ab", "cd")));
        assert!(!ProductQuery::Active.matches(&deleted));
        assert!(!ProductQuery::Code { code: "ab".into() }.matches(&deleted));
    }
}
