//! Implementation of #[derive(Tagged)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{parse_macro_input, parse_quote, Data, DeriveInput, Index, Member};

use crate::attrs::FieldAttrs;

pub fn derive_tagged_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let type_name = name.unraw().to_string();

    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        Data::Enum(_) | Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Tagged can only be derived for structs",
            ));
        }
    };

    let mut descriptors = Vec::new();
    let mut zero_checks = Vec::new();

    for (index, field) in fields.iter().enumerate() {
        let attrs = FieldAttrs::from_field(field)?;
        if attrs.skip {
            continue;
        }

        // Tuple fields are named by position.
        let (member, field_name) = match &field.ident {
            Some(ident) => (Member::Named(ident.clone()), ident.unraw().to_string()),
            None => (Member::Unnamed(Index::from(index)), index.to_string()),
        };
        let tags = attrs.tag_string();

        descriptors.push(quote! {
            ::yamltags::Field::new(#field_name, #tags, &mut self.#member)
        });
        zero_checks.push(quote! {
            ::yamltags::TagValue::is_zero(&self.#member)
        });
    }

    let mut generics = input.generics.clone();
    for param in generics.type_params_mut() {
        param.bounds.push(parse_quote!(::yamltags::TagValue));
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::yamltags::Tagged for #name #ty_generics #where_clause {
            fn type_name(&self) -> &'static str {
                #type_name
            }

            fn fields(&mut self) -> ::std::vec::Vec<::yamltags::Field<'_>> {
                ::std::vec![#(#descriptors),*]
            }
        }

        impl #impl_generics ::yamltags::TagValue for #name #ty_generics #where_clause {
            fn kind(&self) -> ::yamltags::ValueKind {
                ::yamltags::ValueKind::Struct
            }

            fn is_zero(&self) -> bool {
                true #(&& #zero_checks)*
            }

            fn as_tagged(&mut self) -> ::std::option::Option<&mut dyn ::yamltags::Tagged> {
                ::std::option::Option::Some(self)
            }
        }
    })
}
