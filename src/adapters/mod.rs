// Adapters layer: concrete implementations for external systems (E-utilities http, local storage).

pub mod http;
pub mod storage;

pub use http::EutilsClient;
pub use storage::LocalStorage;
