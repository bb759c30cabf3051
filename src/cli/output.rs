pub use slor_core::format::OutputFormat;
use clap::builder::{PossibleValue, PossibleValuesParser, TypedValueParser};

// clap cannot derive or implement ValueEnum for a type from another crate
// (orphan rule), so the same variant/name mapping is exposed as a value parser.
const VARIANTS: &[OutputFormat] = &[
    OutputFormat::Human,
    OutputFormat::Json,
    OutputFormat::Records,
];

fn to_possible_value(format: &OutputFormat) -> PossibleValue {
    match format {
        OutputFormat::Human => PossibleValue::new("human"),
        OutputFormat::Json => PossibleValue::new("json"),
        OutputFormat::Records => PossibleValue::new("records"),
    }
}

/// Value parser for `--format`, equivalent to clap's `value_enum` handling.
pub fn output_format_parser() -> impl TypedValueParser<Value = OutputFormat> {
    PossibleValuesParser::new(VARIANTS.iter().map(to_possible_value)).map(|s| {
        *VARIANTS
            .iter()
            .find(|v| to_possible_value(v).matches(&s, false))
            .expect("value validated by PossibleValuesParser")
    })
}
