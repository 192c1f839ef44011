//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{
    DEFAULT_PREVIEW_SIZE, FaxCalculation, Filters, ListOptions, PostCalculation, PreviewOptions,
    SendOptions, SpeedLookup, UploadOptions,
};
pub use response::{BinaryKind, ServiceResponse};
pub use validation::ConfigurationError;
pub use value::{
    Color, CountryCode, Currency, Environment, FaxNumber, PostEncoding, SortDirection, Speed, Token,
};

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn token_rejects_empty_and_trims() {
        assert!(matches!(
            Token::new("   "),
            Err(ConfigurationError::Empty {
                field: Token::FIELD
            })
        ));
        assert_eq!(Token::new(" abc ").unwrap().as_str(), "abc");
    }

    #[test]
    fn token_debug_is_redacted() {
        let token = Token::new("secret-value").unwrap();
        assert!(!format!("{token:?}").contains("secret-value"));
    }

    #[test]
    fn environment_resolves_legacy_modes() {
        assert_eq!(Environment::from_mode(1).unwrap(), Environment::Production);
        assert_eq!(Environment::from_mode(2).unwrap(), Environment::Staging);
        assert!(matches!(
            Environment::from_mode(3),
            Err(ConfigurationError::UnknownEnvironment { .. })
        ));
    }

    #[test]
    fn environment_parses_names() {
        assert_eq!(
            "Production".parse::<Environment>().unwrap(),
            Environment::Production
        );
        assert_eq!(" stage ".parse::<Environment>().unwrap(), Environment::Staging);
        assert!(matches!(
            "qa".parse::<Environment>(),
            Err(ConfigurationError::UnknownEnvironment { input }) if input == "qa"
        ));
    }

    #[test]
    fn environment_base_urls() {
        assert_eq!(Environment::default().base_url(), "https://api.pingen.com");
        assert_eq!(
            Environment::Staging.base_url(),
            "https://stage-api.pingen.com"
        );
    }

    #[test]
    fn wire_codes_match_service_constants() {
        assert_eq!(Speed::default().code(), 1);
        assert_eq!(Speed::Economy.code(), 2);
        assert_eq!(Color::default().code(), 1);
        assert_eq!(Color::BlackAndWhite.code(), 0);
        assert_eq!(SortDirection::default().as_str(), "desc");
    }

    #[test]
    fn country_code_is_normalized_and_validated() {
        assert_eq!(CountryCode::new(" de ").unwrap().as_str(), "DE");
        assert!(matches!(
            CountryCode::new("CHE"),
            Err(ConfigurationError::InvalidCountryCode { .. })
        ));
        assert!(matches!(
            CountryCode::new(""),
            Err(ConfigurationError::Empty { .. })
        ));
    }

    #[test]
    fn currency_is_normalized_and_validated() {
        assert_eq!(Currency::new("eur").unwrap().as_str(), "EUR");
        assert_eq!(Currency::default().as_str(), "CHF");
        assert!(Currency::new("E1R").is_err());
    }

    #[test]
    fn fax_number_parses_to_e164() {
        let number = FaxNumber::parse(" +41 44 668 18 00 ").unwrap();
        assert_eq!(number.e164(), "+41446681800");
        assert!(matches!(
            FaxNumber::parse("not a number"),
            Err(ConfigurationError::InvalidFaxNumber { .. })
        ));
    }

    #[test]
    fn filters_keep_insertion_order_and_replace_in_place() {
        let filters = Filters::new().with("b", 2).with("a", "1").with("b", "3");
        let pairs: Vec<_> = filters.iter().collect();
        assert_eq!(pairs, vec![("b", "3"), ("a", "1")]);
        assert_eq!(filters.len(), 2);
    }

    #[test]
    fn list_options_defaults() {
        let options = ListOptions::default();
        assert_eq!(options.limit, 0);
        assert_eq!(options.page, 1);
        assert_eq!(options.sort, None);
        assert_eq!(options.sort_type, SortDirection::Desc);
        assert!(options.filters.is_empty());
    }

    #[test]
    fn speed_lookup_requires_countries() {
        assert!(matches!(
            SpeedLookup::new(Vec::new()),
            Err(ConfigurationError::Empty {
                field: SpeedLookup::FIELD
            })
        ));
        let lookup = SpeedLookup::one(CountryCode::new("CH").unwrap());
        assert_eq!(lookup.countries().len(), 1);
    }

    #[test]
    fn calculator_defaults() {
        let post = PostCalculation::default();
        assert_eq!(post.country.as_str(), "CH");
        assert_eq!(post.pages_esr, 0);
        assert_eq!(post.plan, 1);

        let fax = FaxCalculation::new(FaxNumber::parse("+41446681800").unwrap());
        assert_eq!((fax.pages, fax.documents), (1, 1));
        assert_eq!(fax.currency.as_str(), "CHF");
        assert_eq!(PreviewOptions::default().size, DEFAULT_PREVIEW_SIZE);
    }

    #[test]
    fn service_response_accessors() {
        let json = json!({"id": 7});
        let response = ServiceResponse::Json(json.as_object().unwrap().clone());
        assert_eq!(response.get("id"), Some(&json!(7)));
        assert_eq!(response.binary_kind(), None);

        let binary = ServiceResponse::Binary {
            kind: BinaryKind::Pdf,
            bytes: b"%PDF-1.4".to_vec(),
        };
        assert_eq!(binary.binary_kind(), Some(BinaryKind::Pdf));
        assert_eq!(binary.get("id"), None);
        assert_eq!(binary.into_bytes().unwrap(), b"%PDF-1.4".to_vec());
    }
}
