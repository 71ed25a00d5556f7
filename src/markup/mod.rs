//! 주석 마크업 인코딩/디코딩 모듈

mod decoder;
mod encoder;
mod strip;
pub mod validator;

pub use decoder::{decode, words, DecodeReport, Decoder};
pub use encoder::encode;
pub use strip::{strip_annotations, strip_code_fence, strip_readings_only};
pub use validator::{
    has_nested_spans, is_well_formed, same_structure, validate_round_trip, RoundTripError,
};
