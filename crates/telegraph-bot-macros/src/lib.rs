use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, GenericArgument, PathArguments, Type, parse_macro_input};

/// How a request field holds an upload.
enum FileField {
    Required,
    Optional,
}

/// Generates `_input_files()` listing every `InputFile` / `Option<InputFile>`
/// field together with its wire name.
///
/// The commit pipeline uses the list to decide between a JSON body and a
/// `multipart/form-data` upload.
#[proc_macro_derive(InputFiles)]
pub fn derive_input_files(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = input.ident;

    let fields = match input.data {
        Data::Struct(data) => match data.fields {
            Fields::Named(fields) => fields.named,
            _ => return quote! {}.into(),
        },
        _ => return quote! {}.into(),
    };

    let pushes: Vec<_> = fields
        .iter()
        .filter_map(|field| {
            let ident = field.ident.as_ref()?;
            let wire_name = ident.to_string();
            match classify(&field.ty)? {
                FileField::Required => Some(quote! {
                    files.push((#wire_name, &self.#ident));
                }),
                FileField::Optional => Some(quote! {
                    if let Some(file) = &self.#ident {
                        files.push((#wire_name, file));
                    }
                }),
            }
        })
        .collect();

    let body = if pushes.is_empty() {
        quote! { Vec::new() }
    } else {
        quote! {
            let mut files = Vec::new();
            #(#pushes)*
            files
        }
    };

    quote! {
        impl #name {
            pub fn _input_files(&self) -> Vec<(&'static str, &crate::api::types::InputFile)> {
                #body
            }
        }
    }
    .into()
}

fn classify(ty: &Type) -> Option<FileField> {
    if is_type_named(ty, "InputFile") {
        return Some(FileField::Required);
    }
    match option_inner(ty) {
        Some(inner) if is_type_named(inner, "InputFile") => Some(FileField::Optional),
        _ => None,
    }
}

fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let segment = type_path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }
    match &segment.arguments {
        PathArguments::AngleBracketed(args) => args.args.iter().find_map(|arg| match arg {
            GenericArgument::Type(inner) => Some(inner),
            _ => None,
        }),
        _ => None,
    }
}

fn is_type_named(ty: &Type, name: &str) -> bool {
    match ty {
        Type::Path(type_path) => type_path
            .path
            .segments
            .last()
            .map(|seg| seg.ident == name)
            .unwrap_or(false),
        Type::Group(group) => is_type_named(&group.elem, name),
        _ => false,
    }
}
