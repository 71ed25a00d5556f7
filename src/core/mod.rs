//! 분류/분할 핵심 모듈

pub mod converter;
pub mod lexicon;
pub mod script;
pub mod segmenter;
pub mod token;

pub use converter::{convert, load_dictionaries, Converter};
pub use lexicon::Lexicon;
pub use script::classify;
pub use segmenter::{segment, Segmenter};
pub use token::{CodePointSpan, ReadingSegment, ScriptClass, Token, TokenKind};
