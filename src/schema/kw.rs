//! Definitions of custom keywords of the schema description.

syn::custom_keyword!(entity);
syn::custom_keyword!(enumeration);
syn::custom_keyword!(select);
syn::custom_keyword!(list);
syn::custom_keyword!(set);
syn::custom_keyword!(bag);
syn::custom_keyword!(array);
