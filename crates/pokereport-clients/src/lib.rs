#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod http;
pub mod pokeapi;
pub mod translate;

pub use pokeapi::PokeApiClient;
pub use translate::{
    CloudTranslator, HttpTranslationClient, TranslateTextRequest, TranslateTextResponse,
    Translation, TranslationClient,
};
