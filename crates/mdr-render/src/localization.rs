//! Caption labels for rendered documents.

/// Localized labels used in figure and listing captions and in the LaTeX
/// preamble.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Localization {
    /// Label prefixing numbered figure captions.
    pub figure: String,
    /// Label prefixing numbered listing captions.
    pub listing: String,
    /// Label prefixing table captions.
    pub table: String,
}

impl Default for Localization {
    fn default() -> Self {
        Self {
            figure: "Figure".to_owned(),
            listing: "Listing".to_owned(),
            table: "Table".to_owned(),
        }
    }
}
