#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod generator;
pub mod html;
pub mod pdf;

pub use generator::PdfReportGenerator;
pub use html::{REPORT_TITLE, render_html};
pub use pdf::{PdfConverter, RendererConfig, WkHtmlToPdf};
