pub mod config;
pub mod core;
pub mod markup;
pub mod reading;

pub use crate::core::converter::convert;
pub use crate::core::{
    classify, segment, CodePointSpan, ReadingSegment, ScriptClass, Token, TokenKind,
};
pub use crate::markup::{decode, encode, strip_annotations, strip_readings_only, words};
pub use crate::reading::{annotate, NoReadings, ReadingDictionary, ReadingSource};
