//! Double Metaphone phonetic encoding.
//!
//! Maps a word to a primary and a secondary code that approximate its
//! pronunciation, so that "Smith" and "Schmidt" share a code. The encoder
//! is a pure function of the input bytes: ASCII plus the UTF-8 forms of
//! "Ç" and "Ñ".

mod codes;
mod encoder;
pub mod normalize;
mod rules;
mod scan;
pub mod settings;


pub use codes::{double_metaphone, Codes};
pub use encoder::Encoder;
pub use normalize::{normalize, Word};
pub use scan::{for_each_step, steps, Step, Steps};
