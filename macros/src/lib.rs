use proc_macro::TokenStream;

mod pat;

#[proc_macro]
pub fn match_enum(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as pat::EnumMatch);
    pat::expand_match(input).into()
}
