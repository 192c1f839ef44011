use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use url::form_urlencoded;

use crate::domain::{
    CountryCode, FaxCalculation, Filters, ListOptions, PostCalculation, PreviewOptions,
    SpeedLookup,
};

/// Characters escaped in caller-supplied segments. `:`, `;` and `/` are left alone since the
/// service reads them as filter syntax.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

fn escape_segment(input: &str) -> String {
    utf8_percent_encode(input, SEGMENT).to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Document,
    Letter,
    Send,
    Queue,
    Contact,
}

impl Resource {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Document => "document",
            Self::Letter => "letter",
            Self::Send => "send",
            Self::Queue => "queue",
            Self::Contact => "contact",
        }
    }

    pub fn default_sort(self) -> &'static str {
        match self {
            Self::Contact => "id",
            _ => "date",
        }
    }
}

pub fn list_path(resource: Resource, options: &ListOptions) -> String {
    let sort = options
        .sort
        .as_deref()
        .unwrap_or_else(|| resource.default_sort());
    format!(
        "{}/list/limit/{}/page/{}/sort/{}/sorttype/{}{}",
        resource.as_str(),
        options.limit,
        options.page,
        escape_segment(sort),
        options.sort_type.as_str(),
        encode_filters(&options.filters),
    )
}

/// `/filter/a:1;b:2`, or an empty string when there are no filters.
pub fn encode_filters(filters: &Filters) -> String {
    if filters.is_empty() {
        return String::new();
    }
    let sets = filters
        .iter()
        .map(|(name, value)| format!("{}:{}", escape_segment(name), escape_segment(value)))
        .collect::<Vec<_>>()
        .join(";");
    format!("/filter/{sets}")
}

pub fn action_path(resource: Resource, action: &str) -> String {
    format!("{}/{action}", resource.as_str())
}

pub fn id_path(resource: Resource, action: &str, id: u64) -> String {
    format!("{}/{action}/id/{id}", resource.as_str())
}

pub fn preview_path(resource: Resource, id: u64, options: &PreviewOptions) -> String {
    format!(
        "{}/page/{}/size/{}",
        id_path(resource, "preview", id),
        options.page,
        options.size
    )
}

pub fn speed_path(lookup: &SpeedLookup) -> String {
    let countries = lookup
        .countries()
        .iter()
        .map(CountryCode::as_str)
        .collect::<Vec<_>>()
        .join(",");
    format!("send/speed/{}/{countries}", SpeedLookup::FIELD)
}

pub fn fax_calculator_path(calculation: &FaxCalculation) -> String {
    let number: String =
        form_urlencoded::byte_serialize(calculation.number.e164().as_bytes()).collect();
    format!(
        "calculator/fax/number/{number}/pages/{}/documents/{}/currency/{}",
        calculation.pages,
        calculation.documents,
        calculation.currency.as_str()
    )
}

pub fn post_calculator_path(calculation: &PostCalculation) -> String {
    format!(
        "calculator/get/country/{}/print/{}/speed/{}/plan/{}/documents/{}/currency/{}/pages_normal/{}/pages_esr/{}",
        calculation.country.as_str(),
        calculation.color.code(),
        calculation.speed.code(),
        calculation.plan,
        calculation.documents,
        calculation.currency.as_str(),
        calculation.pages_normal,
        calculation.pages_esr,
    )
}

pub fn account_path(action: &str) -> String {
    format!("account/{action}")
}
