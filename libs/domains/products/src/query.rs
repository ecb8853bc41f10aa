//! List parameter parsing.
//!
//! [`ListProductsParams`] carries raw, untrusted strings exactly as the client
//! sent them. [`ProductQuery`] is the validated form handed to repositories.

use serde::Deserialize;
use strum::{Display, EnumString};
use utoipa::IntoParams;

use crate::error::{ProductError, ProductResult};
use crate::models::Product;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Raw list parameters.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListProductsParams {
    /// Page number, starting at 1 (default 1)
    pub page: Option<String>,
    /// Items per page (default 10)
    pub page_size: Option<String>,
    /// Case-sensitive substring match on name
    pub name: Option<String>,
    /// Case-sensitive substring match on type
    #[serde(rename = "type")]
    pub product_type: Option<String>,
    /// Inclusive lower price bound; ignored unless greater than zero
    pub price_min: Option<String>,
    /// Inclusive upper price bound; ignored unless greater than zero
    pub price_max: Option<String>,
    /// Column to sort by (default id)
    pub sort_by: Option<String>,
    /// `desc` for descending; anything else is ascending
    pub sort_order: Option<String>,
}

/// Sortable product columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum SortField {
    #[default]
    Id,
    Name,
    #[strum(serialize = "type")]
    Type,
    Price,
    Description,
    ImagePath,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Only the exact string `desc` selects descending order.
    pub fn from_param(raw: &str) -> Self {
        if raw == "desc" {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        }
    }
}

/// Filters shared by the count and the page query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub name: Option<String>,
    pub product_type: Option<String>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
}

impl ProductFilter {
    /// In-process equivalent of the SQL predicate, used by the in-memory repository.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(name) = &self.name {
            if !like_contains(&product.name, name) {
                return false;
            }
        }
        if let Some(product_type) = &self.product_type {
            if !like_contains(&product.product_type, product_type) {
                return false;
            }
        }
        if let Some(min) = self.price_min {
            if product.price < min {
                return false;
            }
        }
        if let Some(max) = self.price_max {
            if product.price > max {
                return false;
            }
        }
        true
    }
}

/// `haystack LIKE '%pattern%'` with PostgreSQL rules: `%` matches any run,
/// `_` one character, and `\` escapes the next character.
fn like_contains(haystack: &str, pattern: &str) -> bool {
    let text: Vec<char> = haystack.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();
    (0..=text.len()).any(|start| like_prefix(&text[start..], &pattern))
}

/// Whether `pattern` matches some prefix of `text`.
fn like_prefix(text: &[char], pattern: &[char]) -> bool {
    match pattern.split_first() {
        None => true,
        Some(('%', rest)) => (0..=text.len()).any(|skip| like_prefix(&text[skip..], rest)),
        Some(('_', rest)) => !text.is_empty() && like_prefix(&text[1..], rest),
        Some(('\\', [escaped, rest @ ..])) => {
            text.first() == Some(escaped) && like_prefix(&text[1..], rest)
        }
        Some((c, rest)) => text.first() == Some(c) && like_prefix(&text[1..], rest),
    }
}

/// Validated list request.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductQuery {
    pub page: u64,
    pub page_size: u64,
    pub filter: ProductFilter,
    pub sort_by: SortField,
    pub sort_order: SortOrder,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            filter: ProductFilter::default(),
            sort_by: SortField::default(),
            sort_order: SortOrder::default(),
        }
    }
}

impl ProductQuery {
    /// Rows to skip: `(page - 1) * page_size`.
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.page_size)
    }
}

impl TryFrom<ListProductsParams> for ProductQuery {
    type Error = ProductError;

    fn try_from(params: ListProductsParams) -> ProductResult<Self> {
        let page = parse_positive(params.page.as_deref(), DEFAULT_PAGE, "Invalid page number")?;
        let page_size = parse_positive(
            params.page_size.as_deref(),
            DEFAULT_PAGE_SIZE,
            "Invalid pageSize number",
        )?;

        // offset must stay representable for the database driver
        (page - 1)
            .checked_mul(page_size)
            .filter(|offset| *offset <= i64::MAX as u64)
            .ok_or_else(|| ProductError::InvalidQuery("Invalid page number".to_string()))?;

        let price_min = parse_price(params.price_min.as_deref(), "Invalid price_min value")?;
        let price_max = parse_price(params.price_max.as_deref(), "Invalid price_max value")?;

        let sort_by = match non_empty(params.sort_by.as_deref()) {
            None => SortField::default(),
            Some(raw) => raw
                .parse()
                .map_err(|_| ProductError::InvalidQuery("Invalid sort_by value".to_string()))?,
        };
        let sort_order = non_empty(params.sort_order.as_deref())
            .map(SortOrder::from_param)
            .unwrap_or_default();

        Ok(Self {
            page,
            page_size,
            filter: ProductFilter {
                name: non_empty(params.name.as_deref()).map(str::to_string),
                product_type: non_empty(params.product_type.as_deref()).map(str::to_string),
                price_min: price_min.filter(|p| *p > 0.0),
                price_max: price_max.filter(|p| *p > 0.0),
            },
            sort_by,
            sort_order,
        })
    }
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.filter(|value| !value.is_empty())
}

fn parse_positive(raw: Option<&str>, default: u64, message: &str) -> ProductResult<u64> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    match raw.parse::<i64>() {
        Ok(value) if value > 0 => Ok(value as u64),
        _ => Err(ProductError::InvalidQuery(message.to_string())),
    }
}

fn parse_price(raw: Option<&str>, message: &str) -> ProductResult<Option<f64>> {
    match non_empty(raw) {
        None => Ok(None),
        Some(raw) => raw
            .parse::<f64>()
            .map(Some)
            .map_err(|_| ProductError::InvalidQuery(message.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> ListProductsParams {
        let mut params = ListProductsParams::default();
        for (key, value) in pairs {
            let value = Some(value.to_string());
            match *key {
                "page" => params.page = value,
                "page_size" => params.page_size = value,
                "name" => params.name = value,
                "type" => params.product_type = value,
                "price_min" => params.price_min = value,
                "price_max" => params.price_max = value,
                "sort_by" => params.sort_by = value,
                "sort_order" => params.sort_order = value,
                other => panic!("unknown key {other}"),
            }
        }
        params
    }

    fn query(pairs: &[(&str, &str)]) -> ProductResult<ProductQuery> {
        ProductQuery::try_from(params(pairs))
    }

    #[test]
    fn test_like_contains_follows_sql_wildcards() {
        assert!(like_contains("Red Mug", "Mug"));
        assert!(!like_contains("Red Mug", "mug"));
        assert!(like_contains("Red Mug", "R%g"));
        assert!(like_contains("Red Mug", "M_g"));
        assert!(!like_contains("Red Mug", "M_x"));
        assert!(like_contains("Red Mug", ""));
        assert!(like_contains("50% off", "50\\%"));
        assert!(!like_contains("500 off", "50\\%"));
        assert!(like_contains("a_b", "a\\_b"));
        assert!(!like_contains("axb", "a\\_b"));
    }

    fn message(err: ProductError) -> String {
        match err {
            ProductError::InvalidQuery(msg) => msg,
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_defaults() {
        let q = query(&[]).unwrap();
        assert_eq!(q, ProductQuery::default());
        assert_eq!(q.offset(), 0);
    }

    #[test]
    fn test_empty_sort_values_fall_back_to_defaults() {
        let q = query(&[("sort_by", ""), ("sort_order", "")]).unwrap();
        assert_eq!(q.sort_by, SortField::Id);
        assert_eq!(q.sort_order, SortOrder::Asc);
    }

    #[test]
    fn test_offset_is_page_minus_one_times_size() {
        let q = query(&[("page", "3"), ("page_size", "25")]).unwrap();
        assert_eq!(q.offset(), 50);
    }

    #[test]
    fn test_invalid_page_values() {
        for page in ["0", "-1", "abc", "", "1.5"] {
            assert_eq!(message(query(&[("page", page)]).unwrap_err()), "Invalid page number");
        }
    }

    #[test]
    fn test_invalid_page_size_values() {
        for size in ["0", "-10", "ten"] {
            assert_eq!(
                message(query(&[("page_size", size)]).unwrap_err()),
                "Invalid pageSize number"
            );
        }
    }

    #[test]
    fn test_overflowing_offset_is_rejected() {
        let err = query(&[("page", &i64::MAX.to_string()), ("page_size", "1000")]).unwrap_err();
        assert_eq!(message(err), "Invalid page number");
    }

    #[test]
    fn test_invalid_prices() {
        assert_eq!(
            message(query(&[("price_min", "cheap")]).unwrap_err()),
            "Invalid price_min value"
        );
        assert_eq!(
            message(query(&[("price_max", "1,5")]).unwrap_err()),
            "Invalid price_max value"
        );
    }

    #[test]
    fn test_zero_and_negative_price_bounds_are_ignored() {
        let q = query(&[("price_min", "0"), ("price_max", "-5")]).unwrap();
        assert_eq!(q.filter.price_min, None);
        assert_eq!(q.filter.price_max, None);

        let q = query(&[("price_min", "10"), ("price_max", "20.5")]).unwrap();
        assert_eq!(q.filter.price_min, Some(10.0));
        assert_eq!(q.filter.price_max, Some(20.5));
    }

    #[test]
    fn test_sort_order_only_desc_is_descending() {
        assert_eq!(query(&[("sort_order", "desc")]).unwrap().sort_order, SortOrder::Desc);
        assert_eq!(query(&[("sort_order", "DESC")]).unwrap().sort_order, SortOrder::Asc);
        assert_eq!(query(&[("sort_order", "sideways")]).unwrap().sort_order, SortOrder::Asc);
    }

    #[test]
    fn test_sort_by_accepts_columns_and_rejects_others() {
        assert_eq!(query(&[("sort_by", "type")]).unwrap().sort_by, SortField::Type);
        assert_eq!(query(&[("sort_by", "image_path")]).unwrap().sort_by, SortField::ImagePath);
        assert_eq!(
            message(query(&[("sort_by", "price; DROP TABLE products")]).unwrap_err()),
            "Invalid sort_by value"
        );
    }

    #[test]
    fn test_empty_text_filters_are_dropped() {
        let q = query(&[("name", ""), ("type", "Book")]).unwrap();
        assert_eq!(q.filter.name, None);
        assert_eq!(q.filter.product_type.as_deref(), Some("Book"));
    }

    #[test]
    fn test_filter_matches_is_case_sensitive_substring() {
        let product = crate::models::ProductInput {
            name: "Red Mug".into(),
            product_type: "Grocery".into(),
            price: 15.0,
            ..Default::default()
        }
        .into_product(1);

        let filter = |name: &str| ProductFilter {
            name: Some(name.to_string()),
            ..Default::default()
        };
        assert!(filter("Mug").matches(&product));
        assert!(!filter("mug").matches(&product));

        let priced = ProductFilter {
            price_min: Some(10.0),
            price_max: Some(15.0),
            ..Default::default()
        };
        assert!(priced.matches(&product));
    }
}
