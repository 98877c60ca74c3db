//! Formatting helpers for Excel export

use rust_xlsxwriter::*;

use crate::table::Highlight;

pub fn create_header_format() -> Format {
    Format::new()
        .set_bold()
        .set_border(FormatBorder::Thin)
}

pub fn create_highlight_format(highlight: Highlight) -> Format {
    Format::new().set_background_color(Color::RGB(highlight.rgb()))
}

/// One format per highlight, built once per sheet
pub struct HighlightFormats {
    positive: Format,
    pending: Format,
    neutral: Format,
}

impl HighlightFormats {
    pub fn new() -> Self {
        Self {
            positive: create_highlight_format(Highlight::Positive),
            pending: create_highlight_format(Highlight::Pending),
            neutral: create_highlight_format(Highlight::Neutral),
        }
    }

    pub fn get(&self, highlight: Highlight) -> &Format {
        match highlight {
            Highlight::Positive => &self.positive,
            Highlight::Pending => &self.pending,
            Highlight::Neutral => &self.neutral,
        }
    }
}
