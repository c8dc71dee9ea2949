//! Derive macros for `sale_catalog`.

mod document;

use proc_macro::TokenStream;

/// Derive macro implementing `sale_catalog::Document` for a struct.
///
/// ```ignore
/// #[derive(Clone, Serialize, Deserialize, Document)]
/// #[document(collection = "Sales")]
/// struct Sale {
///     #[serde(rename = "_id")]
///     id: String,
///     // ...
/// }
/// ```
///
/// Without `collection`, the struct name with an `s` suffix is used.
/// The id field is the one marked `#[document(id)]`, or the field named `id`.
#[proc_macro_derive(Document, attributes(document))]
pub fn derive_document(input: TokenStream) -> TokenStream {
    document::derive_document(input)
}
