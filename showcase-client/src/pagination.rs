//! Cursor-based feed navigation
//!
//! Derives the next/previous navigation target from the current query string
//! and the cursor pair reported by the page's fetch. Pure string work; the
//! resulting URL change is expected to trigger a re-fetch elsewhere.

use url::form_urlencoded;

use showcase_api_types::PageInfo;

/// Query parameter holding the backward cursor
pub const START_CURSOR_PARAM: &str = "startcursor";

/// Query parameter holding the forward cursor
pub const END_CURSOR_PARAM: &str = "endcursor";

/// Navigation direction through the feed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// The current page's cursor pair and availability flags
#[derive(Debug, Clone, Default)]
pub struct PageCursors {
    pub start_cursor: Option<String>,
    pub end_cursor: Option<String>,
    pub has_previous_page: bool,
    pub has_next_page: bool,
}

impl From<&PageInfo> for PageCursors {
    fn from(info: &PageInfo) -> Self {
        Self {
            start_cursor: info.start_cursor.clone(),
            end_cursor: info.end_cursor.clone(),
            has_previous_page: info.has_previous_page,
            has_next_page: info.has_next_page,
        }
    }
}

impl From<PageInfo> for PageCursors {
    fn from(info: PageInfo) -> Self {
        Self::from(&info)
    }
}

impl PageCursors {
    /// Whether navigation in `direction` would change the query string
    pub fn can_navigate(&self, direction: Direction) -> bool {
        match direction {
            Direction::Previous => self.has_previous_page && self.start_cursor.is_some(),
            Direction::Next => self.has_next_page && self.end_cursor.is_some(),
        }
    }

    /// Rewrite `query` for a navigation in `direction`
    ///
    /// Moving forward removes `startcursor` and sets `endcursor` to the
    /// current end cursor; moving backward does the opposite. Every other
    /// parameter is preserved in order. When the direction is unavailable the
    /// query string comes back unchanged.
    ///
    /// Invariant: after a successful navigation exactly one of
    /// {`startcursor`, `endcursor`} is present.
    pub fn navigate_query(&self, query: &str, direction: Direction) -> String {
        let (removed, set, cursor) = match direction {
            Direction::Previous if self.can_navigate(direction) => {
                match &self.start_cursor {
                    Some(cursor) => (END_CURSOR_PARAM, START_CURSOR_PARAM, cursor),
                    None => return query.to_string(),
                }
            }
            Direction::Next if self.can_navigate(direction) => match &self.end_cursor {
                Some(cursor) => (START_CURSOR_PARAM, END_CURSOR_PARAM, cursor),
                None => return query.to_string(),
            },
            _ => return query.to_string(),
        };

        let pairs = form_urlencoded::parse(query.trim_start_matches('?').as_bytes()).into_owned();

        // Replace the set parameter in place when present, append otherwise;
        // the opposite cursor parameter is dropped entirely.
        let mut replaced = false;
        let mut out: Vec<(String, String)> = Vec::new();
        for (key, value) in pairs {
            if key == removed {
                continue;
            }
            if key == set {
                if !replaced {
                    out.push((key, cursor.clone()));
                    replaced = true;
                }
                continue;
            }
            out.push((key, value));
        }
        if !replaced {
            out.push((set.to_string(), cursor.clone()));
        }

        let mut serializer = form_urlencoded::Serializer::new(String::new());
        serializer.extend_pairs(out);
        serializer.finish()
    }

    /// Full navigation target: `path` plus the rewritten query string
    pub fn navigate(&self, path: &str, query: &str, direction: Direction) -> String {
        let next = self.navigate_query(query, direction);
        if next.is_empty() {
            path.to_string()
        } else {
            format!("{}?{}", path, next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursors() -> PageCursors {
        PageCursors {
            start_cursor: Some("c1".to_string()),
            end_cursor: Some("c2".to_string()),
            has_previous_page: true,
            has_next_page: true,
        }
    }

    #[test]
    fn test_next_replaces_start_cursor_with_end_cursor() {
        let next = cursors().navigate_query("category=design&startcursor=c1", Direction::Next);
        assert_eq!(next, "category=design&endcursor=c2");
    }

    #[test]
    fn test_previous_replaces_end_cursor_with_start_cursor() {
        let previous =
            cursors().navigate_query("category=design&endcursor=c2", Direction::Previous);
        assert_eq!(previous, "category=design&startcursor=c1");
    }

    #[test]
    fn test_unavailable_direction_is_a_no_op() {
        let mut page = cursors();
        page.has_previous_page = false;

        let query = "category=design&startcursor=c1";
        assert_eq!(page.navigate_query(query, Direction::Previous), query);
    }

    #[test]
    fn test_missing_cursor_is_a_no_op() {
        let mut page = cursors();
        page.end_cursor = None;

        let query = "startcursor=c1";
        assert_eq!(page.navigate_query(query, Direction::Next), query);
    }

    #[test]
    fn test_exactly_one_cursor_param_after_navigation() {
        let next = cursors().navigate_query("startcursor=c0&endcursor=c9&category=ai", Direction::Next);
        assert_eq!(next.matches(END_CURSOR_PARAM).count(), 1);
        assert!(!next.contains(START_CURSOR_PARAM));
    }

    #[test]
    fn test_set_replaces_in_place() {
        let next = cursors().navigate_query("endcursor=c0&category=ai", Direction::Next);
        assert_eq!(next, "endcursor=c2&category=ai");
    }

    #[test]
    fn test_navigate_builds_full_target() {
        let target = cursors().navigate("/", "category=design&startcursor=c1", Direction::Next);
        assert_eq!(target, "/?category=design&endcursor=c2");
    }

    #[test]
    fn test_navigate_on_empty_query_appends_cursor_only() {
        let target = cursors().navigate("/projects", "", Direction::Next);
        assert_eq!(target, "/projects?endcursor=c2");
    }

    #[test]
    fn test_no_op_keeps_path_without_query() {
        let page = PageCursors::default();
        assert_eq!(page.navigate("/projects", "", Direction::Next), "/projects");
    }

    #[test]
    fn test_from_page_info() {
        let info = PageInfo {
            has_next_page: true,
            has_previous_page: false,
            start_cursor: Some("a".to_string()),
            end_cursor: Some("b".to_string()),
        };
        let page = PageCursors::from(&info);
        assert!(page.can_navigate(Direction::Next));
        assert!(!page.can_navigate(Direction::Previous));
    }
}
