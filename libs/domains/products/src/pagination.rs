//! Page requests, sort orders and the page envelope returned by listings.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Upper bound for a client-supplied page size
pub const MAX_PAGE_SIZE: u64 = 2000;

/// Largest row offset the database accepts, `OFFSET` being a signed bigint
pub const MAX_OFFSET: u64 = i64::MAX as u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    fn parse(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("asc") {
            Some(Direction::Asc)
        } else if value.eq_ignore_ascii_case("desc") {
            Some(Direction::Desc)
        } else {
            None
        }
    }
}

/// One sort term: a JSON property name and a direction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SortOrder {
    pub property: String,
    pub direction: Direction,
}

impl SortOrder {
    pub fn asc(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            direction: Direction::Asc,
        }
    }

    pub fn desc(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            direction: Direction::Desc,
        }
    }

    /// Parses one `sort` query value: `prop[,prop...][,asc|desc]`.
    ///
    /// A trailing direction applies to every property of the value; blank
    /// segments are skipped.
    ///
    /// ```
    /// use domain_products::pagination::SortOrder;
    ///
    /// assert_eq!(
    ///     SortOrder::parse("price,name,desc"),
    ///     vec![SortOrder::desc("price"), SortOrder::desc("name")]
    /// );
    /// ```
    pub fn parse(value: &str) -> Vec<SortOrder> {
        let mut parts: Vec<&str> = value
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();

        let direction = match parts.last().and_then(|last| Direction::parse(last)) {
            Some(direction) => {
                parts.pop();
                direction
            }
            None => Direction::Asc,
        };

        parts
            .into_iter()
            .map(|property| SortOrder {
                property: property.to_string(),
                direction,
            })
            .collect()
    }
}

/// Zero-based page request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub size: u64,
    pub sort: Vec<SortOrder>,
}

impl PageRequest {
    /// `size` is at least 1.
    pub fn new(page: u64, size: u64) -> Self {
        Self {
            page,
            size: size.max(1),
            sort: Vec::new(),
        }
    }

    pub fn with_sort(mut self, sort: Vec<SortOrder>) -> Self {
        self.sort = sort;
        self
    }

    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.size)
    }

    /// `None` when `page * size` overflows or passes [`MAX_OFFSET`]; such a
    /// page is necessarily empty.
    pub fn checked_offset(&self) -> Option<u64> {
        self.page
            .checked_mul(self.size)
            .filter(|offset| *offset <= MAX_OFFSET)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }
}

/// Keeps only the sort terms whose property is in `allowed`.
///
/// - `None` gives page 0 of [`DEFAULT_PAGE_SIZE`], unsorted.
/// - An empty allow-list drops the sort entirely.
/// - Page and size are always preserved, and the relative order of the kept
///   terms is unchanged.
pub fn normalize(request: Option<PageRequest>, allowed: &[&str]) -> PageRequest {
    let Some(mut request) = request else {
        return PageRequest::default();
    };

    let before = request.sort.len();
    request
        .sort
        .retain(|order| allowed.contains(&order.property.as_str()));

    if request.sort.len() != before {
        tracing::debug!(
            dropped = before - request.sort.len(),
            "Ignoring sort terms on unsupported properties"
        );
    }

    request
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub size: u64,
    /// Zero-based page number
    pub number: u64,
    pub total_elements: u64,
    pub total_pages: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Link {
    pub href: String,
}

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into() }
    }
}

/// HAL-style navigation links of a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PageLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<Link>,
    #[serde(rename = "self")]
    pub self_link: Link,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<Link>,
}

/// One page of results with its position in the whole result set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: PageMetadata,
    #[serde(rename = "_links", default, skip_serializing_if = "Option::is_none")]
    pub links: Option<PageLinks>,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: u64) -> Self {
        Self {
            content,
            page: PageMetadata {
                size: request.size,
                number: request.page,
                total_elements,
                total_pages: total_elements.div_ceil(request.size),
            },
            links: None,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page: self.page,
            links: self.links,
        }
    }

    /// Attaches navigation links, `href(n)` being the URL of page `n`.
    ///
    /// `self` is always present, `prev`/`next` when such a page exists, and
    /// `first`/`last` only when there is somewhere to navigate to.
    pub fn with_links(mut self, href: impl Fn(u64) -> String) -> Self {
        let number = self.page.number;
        let has_prev = number > 0;
        let has_next = number.saturating_add(1) < self.page.total_pages;
        let navigable = has_prev || has_next;
        let last = self.page.total_pages.saturating_sub(1);

        self.links = Some(PageLinks {
            first: navigable.then(|| Link::new(href(0))),
            prev: has_prev.then(|| Link::new(href(number - 1))),
            self_link: Link::new(href(number)),
            next: has_next.then(|| Link::new(href(number + 1))),
            last: navigable.then(|| Link::new(href(last))),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALLOWED: &[&str] = &["id", "code", "name"];

    #[test]
    fn test_normalize_none() {
        let request = normalize(None, ALLOWED);
        assert_eq!(request.page, 0);
        assert_eq!(request.size, DEFAULT_PAGE_SIZE);
        assert!(request.sort.is_empty());
    }

    #[test]
    fn test_normalize_empty_allow_list_drops_sort() {
        let request = PageRequest::new(2, 25).with_sort(vec![SortOrder::asc("code")]);
        let normalized = normalize(Some(request), &[]);

        assert_eq!(normalized.page, 2);
        assert_eq!(normalized.size, 25);
        assert!(normalized.sort.is_empty());
    }

    #[test]
    fn test_normalize_allowed_sort_unchanged() {
        let request = PageRequest::new(1, 5)
            .with_sort(vec![SortOrder::desc("name"), SortOrder::asc("id")]);
        assert_eq!(normalize(Some(request.clone()), ALLOWED), request);
    }

    #[test]
    fn test_normalize_filters_forbidden_terms_in_order() {
        let request = PageRequest::new(3, 7).with_sort(vec![
            SortOrder::desc("name"),
            SortOrder::asc("deleted"),
            SortOrder::asc("code"),
        ]);

        let normalized = normalize(Some(request), ALLOWED);
        assert_eq!(normalized.page, 3);
        assert_eq!(normalized.size, 7);
        assert_eq!(
            normalized.sort,
            vec![SortOrder::desc("name"), SortOrder::asc("code")]
        );
    }

    #[test]
    fn test_normalize_may_yield_empty_sort() {
        let request = PageRequest::default().with_sort(vec![SortOrder::asc("deleted")]);
        assert!(normalize(Some(request), ALLOWED).sort.is_empty());
    }

    #[test]
    fn test_parse_sort() {
        assert_eq!(SortOrder::parse("name"), vec![SortOrder::asc("name")]);
        assert_eq!(SortOrder::parse("price,DESC"), vec![SortOrder::desc("price")]);
        assert_eq!(
            SortOrder::parse(" code , name ,asc"),
            vec![SortOrder::asc("code"), SortOrder::asc("name")]
        );
        assert!(SortOrder::parse("desc").is_empty());
        assert!(SortOrder::parse(",,").is_empty());
    }

    #[test]
    fn test_page_request_size_is_at_least_one() {
        assert_eq!(PageRequest::new(0, 0).size, 1);
        assert_eq!(PageRequest::new(4, 10).offset(), 40);
    }

    #[test]
    fn test_page_metadata() {
        let page = Page::new(vec![1, 2, 3], &PageRequest::new(0, 3), 7);
        assert_eq!(page.page.total_pages, 3);
        assert_eq!(page.page.total_elements, 7);

        let empty: Page<i32> = Page::new(vec![], &PageRequest::default(), 0);
        assert_eq!(empty.page.total_pages, 0);
    }

    #[test]
    fn test_checked_offset() {
        assert_eq!(PageRequest::new(3, 10).checked_offset(), Some(30));
        assert_eq!(PageRequest::new(u64::MAX / 10, 2000).checked_offset(), None);
        assert_eq!(PageRequest::new(MAX_OFFSET, 2).checked_offset(), None);
        assert_eq!(PageRequest::new(MAX_OFFSET, 1).checked_offset(), Some(MAX_OFFSET));
    }

    #[test]
    fn test_links_in_the_middle() {
        let page: Page<i32> =
            Page::new(vec![], &PageRequest::new(1, 10), 30).with_links(|n| format!("/?page={}", n));
        let links = page.links.unwrap();

        assert_eq!(links.first, Some(Link::new("/?page=0")));
        assert_eq!(links.prev, Some(Link::new("/?page=0")));
        assert_eq!(links.self_link, Link::new("/?page=1"));
        assert_eq!(links.next, Some(Link::new("/?page=2")));
        assert_eq!(links.last, Some(Link::new("/?page=2")));
    }

    #[test]
    fn test_links_single_page_only_self() {
        let page: Page<i32> =
            Page::new(vec![1], &PageRequest::default(), 1).with_links(|n| format!("/?page={}", n));

        let json = serde_json::to_value(page).unwrap();
        assert_eq!(json["_links"], serde_json::json!({"self": {"href": "/?page=0"}}));
    }

    #[test]
    fn test_links_past_the_end() {
        let page: Page<i32> =
            Page::new(vec![], &PageRequest::new(u64::MAX, 10), 5).with_links(|n| n.to_string());
        let links = page.links.unwrap();

        assert_eq!(links.next, None);
        assert_eq!(links.last, Some(Link::new("0")));
    }

    #[test]
    fn test_page_json_envelope() {
        let page = Page::new(vec!["a"], &PageRequest::new(1, 1), 2).map(str::to_uppercase);
        let json = serde_json::to_value(page).unwrap();

        assert_eq!(json["content"][0], "A");
        assert_eq!(json["page"]["number"], 1);
        assert_eq!(json["page"]["totalElements"], 2);
        assert_eq!(json["page"]["totalPages"], 2);
    }
}
