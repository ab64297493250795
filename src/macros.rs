//! Macros for code generation in book field types.
//!
//! Every book field stores the text it was set to and, once validated, the
//! [`BookTag`](crate::tag::BookTag) that text denotes. The macro here
//! generates that wrapper and its [`BookField`](crate::fields::BookField)
//! implementation, so the five field types only differ in name.

/// Macro to generate a book field wrapper type.
///
/// The generated type starts out empty and unvalidated; `set()` stores new
/// text and drops any earlier validation result.
///
/// # Example
///
/// ```ignore
/// define_book_field!(
///     /// The book title.
///     Title,
///     "title"
/// );
/// ```
#[macro_export]
macro_rules! define_book_field {
    ($(#[$meta:meta])* $name:ident, $tag:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        pub struct $name {
            raw: String,
            value: Option<$crate::tag::BookTag>,
        }

        impl $name {
            /// The field text as last set, whitespace-normalized.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.raw
            }
        }

        impl $crate::fields::BookField for $name {
            const TAG: &'static str = $tag;

            fn set(&mut self, raw: &str) {
                self.raw = raw.split_whitespace().collect::<Vec<_>>().join(" ");
                self.value = None;
            }

            fn validate(&mut self) -> $crate::error::Result<()> {
                self.value = None;
                self.value = Some($crate::fields::validate_field(Self::TAG, &self.raw)?);
                Ok(())
            }

            fn as_str(&self) -> &str {
                &self.raw
            }

            fn value(&self) -> Option<&$crate::tag::BookTag> {
                self.value.as_ref()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.raw)
            }
        }
    };
}
