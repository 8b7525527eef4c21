//! Parsing of `#[yamltags(...)]` field attributes.

use syn::{Expr, ExprLit, ExprUnary, Lit, UnOp};

/// Constraints declared on one field.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    pub required: bool,
    pub default: Option<String>,
    pub one_of: Option<String>,
    pub skip: bool,
}

impl FieldAttrs {
    /// Collect every `#[yamltags(...)]` attribute on `field`.
    pub fn from_field(field: &syn::Field) -> syn::Result<Self> {
        let mut out = Self::default();

        for attr in &field.attrs {
            if !attr.path().is_ident("yamltags") {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("required") {
                    if out.required {
                        return Err(meta.error("duplicate `required`"));
                    }
                    out.required = true;
                } else if meta.path.is_ident("default") {
                    let expr: Expr = meta.value()?.parse()?;
                    let literal = literal_string(&expr)?;
                    if literal.contains(',') {
                        return Err(syn::Error::new_spanned(
                            &expr,
                            "default literal cannot contain `,`",
                        ));
                    }
                    if out.default.replace(literal).is_some() {
                        return Err(meta.error("duplicate `default`"));
                    }
                } else if meta.path.is_ident("one_of") || meta.path.is_ident("oneOf") {
                    let group: syn::LitStr = meta.value()?.parse()?;
                    let name = group.value();
                    if name.is_empty() || name.contains([',', '=']) {
                        return Err(syn::Error::new_spanned(
                            &group,
                            "one_of group must be non-empty and cannot contain `,` or `=`",
                        ));
                    }
                    if out.one_of.replace(name).is_some() {
                        return Err(meta.error("duplicate `one_of`"));
                    }
                } else if meta.path.is_ident("skip") {
                    out.skip = true;
                } else {
                    return Err(meta.error(
                        "unknown yamltags attribute; expected `required`, `default`, `one_of`, or `skip`",
                    ));
                }
                Ok(())
            })?;
        }

        if out.skip && (out.required || out.default.is_some() || out.one_of.is_some()) {
            return Err(syn::Error::new_spanned(
                field,
                "`skip` cannot be combined with other yamltags attributes",
            ));
        }

        Ok(out)
    }

    /// The runtime annotation string, e.g. `required,oneOf=set1`.
    pub fn tag_string(&self) -> String {
        let mut parts = Vec::new();
        if self.required {
            parts.push("required".to_string());
        }
        if let Some(literal) = &self.default {
            parts.push(format!("default={literal}"));
        }
        if let Some(group) = &self.one_of {
            parts.push(format!("oneOf={group}"));
        }
        parts.join(",")
    }
}

/// Render a `default = ...` value as the literal text the runtime parses.
fn literal_string(expr: &Expr) -> syn::Result<String> {
    match expr {
        Expr::Lit(ExprLit { lit, .. }) => match lit {
            Lit::Str(s) => Ok(s.value()),
            Lit::Int(i) => Ok(i.base10_digits().to_string()),
            Lit::Float(f) => Ok(f.base10_digits().to_string()),
            Lit::Bool(b) => Ok(b.value.to_string()),
            Lit::Char(c) => Ok(c.value().to_string()),
            other => Err(syn::Error::new_spanned(
                other,
                "default must be a string, integer, float, bool, or char literal",
            )),
        },
        // `default = -1`
        Expr::Unary(ExprUnary {
            op: UnOp::Neg(_),
            expr: inner,
            ..
        }) => match inner.as_ref() {
            Expr::Lit(ExprLit {
                lit: Lit::Int(i), ..
            }) => Ok(format!("-{}", i.base10_digits())),
            Expr::Lit(ExprLit {
                lit: Lit::Float(f), ..
            }) => Ok(format!("-{}", f.base10_digits())),
            _ => Err(syn::Error::new_spanned(expr, "expected a numeric literal")),
        },
        _ => Err(syn::Error::new_spanned(expr, "expected a literal")),
    }
}
