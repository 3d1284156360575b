mod structures;

use proc_macro::TokenStream;
use quote::quote;
use structures::ErrorKindTarget;
use syn::parse_macro_input;

/// Derives `symdiff_error::ErrorKind` for the given struct.
///
/// The information of the error can be customized using the `error` attribute by adding the
/// corresponding tags to it:
/// ```
/// use symdiff_attrs::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(message = "cannot divide by zero", labels = ["", "this divisor is zero"])]
/// pub struct Foo;
/// ```
///
/// The following tags are available:
///
/// | Tag         | Description                                                                   |
/// | ----------- | ----------------------------------------------------------------------------- |
/// | `message`   | The message displayed at the top of the error when it is displayed.           |
/// | `labels`    | The label texts, one per span of the error, in order. Empty labels are blank. |
/// | `help`      | Optional help text for the error, describing what the user can do to fix it.  |
///
/// Each tag accepts an expression; `message` and `help` should evaluate to something that
/// implements [`ToString`], and `labels` to something iterable over such values. For structs with
/// named fields, the expression is evaluated with the members of the struct in scope, so they can
/// be used in the expression (tuple structs are not supported).
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    let name = &target.name;
    quote! {
        impl symdiff_error::ErrorKind for #name {
            fn as_any(&self) -> &dyn std::any::Any {
                self
            }
            #target
        }
    }.into()
}
