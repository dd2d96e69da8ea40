use crate::types::SortOrder;
use serde::{Deserialize, Serialize};

pub const LIMIT_DEFAULT: i64 = 100;
pub const LIMIT_MIN: i64 = 10;
pub const LIMIT_MAX: i64 = 100;

/// Parameters for paging through a group's member roster.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::Parser))]
#[serde(rename_all = "camelCase")]
pub struct MemberListParams {
    /// The order in which entries are returned. Defaults to ascending.
    #[cfg_attr(feature = "cli", clap(long, value_enum, default_value_t))]
    #[serde(default)]
    pub sort_order: SortOrder,

    /// The maximum number of entries per page. Must be between 10
    /// and 100. Defaults to 100.
    #[cfg_attr(feature = "cli", clap(long))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,

    /// The continuation token returned by the previous page. Absent for the
    /// first page.
    #[cfg_attr(feature = "cli", clap(long))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

impl MemberListParams {
    /// The same parameters aimed at the page following `cursor`, which is
    /// forwarded verbatim.
    pub fn with_cursor(&self, cursor: impl Into<String>) -> Self {
        Self {
            cursor: Some(cursor.into()),
            ..self.clone()
        }
    }

    /// The same parameters aimed back at the first page.
    pub fn without_cursor(&self) -> Self {
        Self {
            cursor: None,
            ..self.clone()
        }
    }

    pub fn validate(&self) -> Result<i64, String> {
        let limit = self.limit.unwrap_or(LIMIT_DEFAULT);

        if limit < LIMIT_MIN {
            Err(format!(
                "Limit must be greater than or equal to {LIMIT_MIN}"
            ))
        } else if limit > LIMIT_MAX {
            Err(format!("Limit must be less than or equal to {LIMIT_MAX}"))
        } else {
            Ok(limit)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn first_page_query_shape() {
        let params = MemberListParams::default();
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({ "sortOrder": "Asc" })
        );
    }

    #[test]
    fn next_page_query_shape() {
        let params = MemberListParams {
            limit: Some(100),
            ..Default::default()
        }
        .with_cursor("eyJrZXkiOjJ9");
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({ "sortOrder": "Asc", "limit": 100, "cursor": "eyJrZXkiOjJ9" })
        );
    }

    #[test]
    fn with_cursor_keeps_the_other_parameters() {
        let base = MemberListParams {
            sort_order: SortOrder::Desc,
            limit: Some(25),
            ..Default::default()
        };

        let next = base.with_cursor("c");
        assert_eq!(next.sort_order, SortOrder::Desc);
        assert_eq!(next.limit, Some(25));
        assert_eq!(next.cursor.as_deref(), Some("c"));

        assert_eq!(next.without_cursor().cursor, None);
    }

    #[rstest]
    #[case(None, Ok(100))]
    #[case(Some(10), Ok(10))]
    #[case(Some(100), Ok(100))]
    #[case(Some(9), Err(()))]
    #[case(Some(101), Err(()))]
    fn limit_bounds(#[case] limit: Option<i64>, #[case] expected: Result<i64, ()>) {
        let params = MemberListParams {
            limit,
            ..Default::default()
        };
        assert_eq!(params.validate().map_err(|_| ()), expected);
    }
}
