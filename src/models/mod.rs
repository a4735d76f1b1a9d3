pub mod translation;

pub use translation::{
    CreateTranslationRequest, CreateTranslationResponse, NewTranslation, Translation,
    TranslationRow,
};
