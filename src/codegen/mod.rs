pub mod c;
pub mod translate_error;

pub use c::{Indent, TranslateOptions, Translation, Translator};
pub use translate_error::TranslateError;
