pub mod available;
pub mod defaults;
pub mod resolver;
pub mod tag;

pub use available::AvailableLanguageSet;
pub use defaults::{DEFAULT_LANGUAGE_KEY, DefaultLanguageMap};
pub use resolver::{LanguageResolver, Resolution, ResolutionTier, ResolveOutcome, resolve_language};
pub use tag::LanguageTag;
