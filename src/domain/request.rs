use crate::domain::validation::ConfigurationError;
use crate::domain::value::{Color, CountryCode, Currency, FaxNumber, SortDirection, Speed};

/// Default preview width in pixels (an A4 page at 72 dpi).
pub const DEFAULT_PREVIEW_SIZE: u32 = 595;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Ordered set of list filters, encoded as `filter/name1:value1;name2:value2`.
///
/// Insertion order is preserved; inserting an existing name replaces its value in place.
pub struct Filters(Vec<(String, String)>);

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a filter, builder style.
    pub fn with(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.insert(name, value);
        self
    }

    /// Add or replace a filter.
    pub fn insert(&mut self, name: impl Into<String>, value: impl ToString) {
        let name = name.into();
        let value = value.to_string();
        match self.0.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = value,
            None => self.0.push((name, value)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for Filters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut filters = Self::new();
        for (name, value) in iter {
            filters.insert(name, value);
        }
        filters
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Pagination, sorting and filtering for list endpoints.
pub struct ListOptions {
    /// Maximum number of results; `0` means no limit.
    pub limit: u32,
    /// Page to return when `limit` is set (1-based).
    pub page: u32,
    /// Sort field; `None` uses the resource default (`date`, or `id` for contacts).
    pub sort: Option<String>,
    pub sort_type: SortDirection,
    pub filters: Filters,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            limit: 0,
            page: 1,
            sort: None,
            sort_type: SortDirection::Desc,
            filters: Filters::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Options for `document/send` and `letter/send`.
pub struct SendOptions {
    pub speed: Speed,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Options for `document/upload`.
pub struct UploadOptions {
    /// Send the document right after upload.
    pub send: bool,
    pub speed: Speed,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Options for the PNG preview endpoints.
pub struct PreviewOptions {
    /// Page to render (1-based).
    pub page: u32,
    /// Width of the rendered preview in pixels.
    pub size: u32,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            page: 1,
            size: DEFAULT_PREVIEW_SIZE,
        }
    }
}

#[derive(Debug, Clone)]
/// Country list for `send/speed`.
///
/// Invariant: at least one country.
pub struct SpeedLookup {
    countries: Vec<CountryCode>,
}

impl SpeedLookup {
    /// Path segment name (`countries`).
    pub const FIELD: &'static str = "countries";

    pub fn one(country: CountryCode) -> Self {
        Self {
            countries: vec![country],
        }
    }

    pub fn new(countries: Vec<CountryCode>) -> Result<Self, ConfigurationError> {
        if countries.is_empty() {
            return Err(ConfigurationError::Empty { field: Self::FIELD });
        }
        Ok(Self { countries })
    }

    pub fn countries(&self) -> &[CountryCode] {
        &self.countries
    }
}

#[derive(Debug, Clone)]
/// Parameters for the fax price calculator.
pub struct FaxCalculation {
    pub number: FaxNumber,
    /// Pages per document.
    pub pages: u32,
    pub documents: u32,
    pub currency: Currency,
}

impl FaxCalculation {
    /// One single-page document priced in CHF.
    pub fn new(number: FaxNumber) -> Self {
        Self {
            number,
            pages: 1,
            documents: 1,
            currency: Currency::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Parameters for the postal price calculator.
pub struct PostCalculation {
    pub country: CountryCode,
    pub speed: Speed,
    pub color: Color,
    pub documents: u32,
    pub pages_normal: u32,
    /// Pages printed on ESR (Swiss payment slip) paper.
    pub pages_esr: u32,
    pub plan: u32,
    pub currency: Currency,
}

impl Default for PostCalculation {
    fn default() -> Self {
        Self {
            country: CountryCode::switzerland(),
            speed: Speed::Priority,
            color: Color::Color,
            documents: 1,
            pages_normal: 1,
            pages_esr: 0,
            plan: 1,
            currency: Currency::default(),
        }
    }
}
