use const_random::const_random;
use convert_case::{Case, Casing};
use proc_macro2::{Span, TokenStream};
use quote::{ToTokens, format_ident, quote};
use syn::{parse::Parse, punctuated::Punctuated, spanned::Spanned, visit::Visit, *};

#[derive(Default)]
struct EnumPat {
    root_ident: Option<syn::PatIdent>,
    is_wildcard: bool,
    wildcard_ident: Option<syn::PatIdent>,
    variants: Vec<Type>,
    payload_pats: Vec<Pat>,
    root_idents: Vec<Option<syn::PatIdent>>,

    err: Option<syn::Error>,
}

impl EnumPat {
    fn check_ty(&mut self, ty: &Type) -> bool {
        if self.variants.iter().any(|d| d == ty) {
            self.err = Some(syn::Error::new_spanned(
                ty,
                "the same variant type appears more than once in this pattern",
            ));
            return false;
        }
        true
    }

    fn push_ty(&mut self, ty: Type, payload: Pat) {
        let root_ident = self.root_ident.take();
        self.variants.push(ty);
        self.payload_pats.push(payload);
        self.root_idents.push(root_ident);
    }
}

fn path_ty(qself: &Option<QSelf>, path: &Path) -> Type {
    Type::Path(syn::TypePath {
        qself: qself.clone(),
        path: path.clone(),
    })
}

/// Maps the positional sub-patterns of `Variant(p0, p1, ..)` onto the payload.
///
/// No pattern (or a lone `..`) ignores the payload, a single pattern binds all
/// of it, and several patterns destructure the payload tuple.
fn payload_pat(elems: &Punctuated<Pat, Token![,]>) -> Pat {
    match elems.iter().collect::<Vec<_>>().as_slice() {
        [] | [Pat::Rest(_)] => parse_quote!(_),
        [single] => (*single).clone(),
        _ => Pat::Tuple(syn::PatTuple {
            attrs: Vec::new(),
            paren_token: Default::default(),
            elems: elems.clone(),
        }),
    }
}

impl Visit<'_> for EnumPat {
    fn visit_pat(&mut self, i: &'_ syn::Pat) {
        match i {
            Pat::Ident(pi) => {
                if pi.subpat.is_none() {
                    if pi.ident.to_string().is_case(Case::Pascal) {
                        let ty = Type::Path(syn::TypePath {
                            qself: None,
                            path: syn::Path::from(pi.ident.clone()),
                        });
                        if self.check_ty(&ty) {
                            self.push_ty(ty, parse_quote!(_));
                        }
                    } else if self.root_ident.is_none() {
                        self.is_wildcard = true;
                        self.wildcard_ident = Some(pi.clone());
                    }
                    return;
                }

                let mut pat_ident = pi.clone();
                pat_ident.subpat = None;
                self.root_ident = Some(pat_ident);
                visit::visit_pat(self, i);
            }

            Pat::TupleStruct(syn::PatTupleStruct {
                qself, path, elems, ..
            }) => {
                let ty = path_ty(qself, path);
                if self.check_ty(&ty) {
                    self.push_ty(ty, payload_pat(elems));
                }
            }

            Pat::Path(syn::PatPath { qself, path, .. }) => {
                let ty = path_ty(qself, path);
                if self.check_ty(&ty) {
                    self.push_ty(ty, parse_quote!(_));
                }
            }

            Pat::Struct(_) => {
                self.err = Some(syn::Error::new_spanned(
                    i,
                    "variant payloads are positional; write `Variant(..)` instead",
                ))
            }

            Pat::Paren(_) => visit::visit_pat(self, i),
            Pat::Or(_) => {
                if let Some(pi) = self.root_ident.take() {
                    self.err = Some(syn::Error::new_spanned(
                        pi,
                        "root ident bindings on different variant types are not supported",
                    ));
                    return;
                }
                visit::visit_pat(self, i)
            }

            Pat::Wild(_) | Pat::Rest(_) => {
                self.is_wildcard = true;
                self.wildcard_ident = self.root_ident.take();
            }

            _ => {
                self.err = Some(syn::Error::new_spanned(
                    i,
                    format_args!("pattern `{}` is not supported", i.to_token_stream()),
                ))
            }
        }
    }
}

pub struct EnumArm {
    span: Span,
    pat: EnumPat,
    guard: Option<Box<Expr>>,
    expr: Box<Expr>,
}

impl Parse for EnumArm {
    fn parse(input: syn::parse::ParseStream<'_>) -> syn::Result<Self> {
        let syn::Arm {
            attrs,
            pat,
            guard,
            body,
            ..
        } = input.parse()?;

        if let Some(first) = attrs.first() {
            return Err(syn::Error::new_spanned(
                first,
                "custom attributes are not supported on match arms",
            ));
        }

        let mut branches = EnumPat::default();
        branches.visit_pat(&pat);

        if let Some(err) = branches.err.take() {
            return Err(err);
        }

        if branches.is_wildcard && !branches.variants.is_empty() {
            return Err(syn::Error::new_spanned(
                &pat,
                "a wildcard cannot be combined with variant patterns",
            ));
        }

        if branches.variants.is_empty() && !branches.is_wildcard {
            return Err(syn::Error::new_spanned(
                &pat,
                "cannot infer variant types; please specify at least one variant type in the pattern",
            ));
        }

        Ok(EnumArm {
            span: pat.span(),
            pat: branches,
            guard: guard.map(|g| g.1),
            expr: body,
        })
    }
}

pub struct EnumMatch {
    expr: Box<Expr>,
    attrs: Vec<syn::Attribute>,
    arms: Vec<EnumArm>,
}

impl Parse for EnumMatch {
    fn parse(input: syn::parse::ParseStream<'_>) -> syn::Result<Self> {
        let expr = Box::new(Expr::parse_without_eager_brace(input)?);

        let content;
        syn::braced!(content in input);

        let attrs = syn::Attribute::parse_inner(&content)?;

        let mut arms = Vec::new();
        while !content.is_empty() {
            arms.push(content.parse()?);
        }

        Ok(EnumMatch { expr, attrs, arms })
    }
}

/// Checks that the arms end in exactly one unguarded wildcard arm.
///
/// Dispatch over an enumeration is open, so the wildcard is the only thing
/// that handles variants no arm names.
fn split_wildcard(arms: &[EnumArm]) -> syn::Result<(&EnumArm, &[EnumArm])> {
    let Some((wildcard, arms)) = arms.split_last() else {
        return Err(syn::Error::new(
            Span::call_site(),
            "missing a wildcard arm; write `_ => ..` to handle unlisted variants",
        ));
    };

    if let Some(early) = arms.iter().find(|arm| arm.pat.is_wildcard) {
        return Err(syn::Error::new(
            early.span,
            "the wildcard arm must be the last arm",
        ));
    }

    if !wildcard.pat.is_wildcard {
        return Err(syn::Error::new(
            wildcard.span,
            "missing a wildcard arm after this one; write `_ => ..` to handle unlisted variants",
        ));
    }

    if let Some(guard) = &wildcard.guard {
        return Err(syn::Error::new_spanned(
            guard,
            "the wildcard arm cannot have a guard",
        ));
    }

    Ok((wildcard, arms))
}

pub fn expand_body(
    attrs: &[syn::Attribute],
    arms: &[EnumArm],
    wildcard: &EnumArm,
    base_ident: &Ident,
) -> TokenStream {
    let body = Lifetime::new(
        &format!("'__enum_match_body{}", const_random!(u32)),
        Span::call_site(),
    );
    let variant_ident = format_ident!("__enum_match_variant{}", const_random!(u32));
    let (body, variant_ident) = (&body, &variant_ident);

    let branches = arms.iter().flat_map(|arm| {
        let EnumArm {
            pat, guard, expr, ..
        } = arm;
        let EnumPat {
            variants,
            payload_pats,
            root_idents,
            ..
        } = pat;

        let guard = guard.as_ref().map(|guard| quote!(if #guard));
        let iter = variants.iter().zip(payload_pats).zip(root_idents);
        iter.map(move |((variant, payload), root)| {
            let root = root
                .as_ref()
                .map(|root| quote!(let #root = #variant_ident;));
            quote! {
                if let ::core::option::Option::Some(#variant_ident) = #base_ident.get::<#variant>() {
                    #root
                    match ::adt_enum::Variant::payload(#variant_ident) {
                        #payload #guard => break #body { #expr },
                        #[allow(unreachable_patterns)]
                        _ => {}
                    }
                }
            }
        })
    });

    let fallback = wildcard
        .pat
        .wildcard_ident
        .as_ref()
        .map(|ident| quote!(let #ident = #base_ident;));
    let default = &wildcard.expr;

    quote! {#body: {
        #(#attrs)*
        #(#branches)*
        #fallback
        #default
    }}
}

pub fn expand_match(data: EnumMatch) -> TokenStream {
    let EnumMatch { expr, attrs, arms } = data;
    let base_ident = format_ident!("__enum_match_base{}", const_random!(u32));

    let (wildcard, arms) = match split_wildcard(&arms) {
        Ok(split) => split,
        Err(err) => return err.to_compile_error(),
    };

    let body = expand_body(&attrs, arms, wildcard, &base_ident);
    quote! {{
        #[allow(unused_imports)]
        use ::adt_enum::Enumeration as _;
        let #base_ident = &(#expr);
        #body
    }}
}
