pub mod config;
pub mod error;
pub mod events;
pub mod language;
pub mod role;

pub use error::{ConfigError, DefaultMapError, LanguageTagError, LivePolitenessError};
pub use language::{
    AvailableLanguageSet, DefaultLanguageMap, LanguageResolver, LanguageTag, ResolutionTier,
    resolve_language,
};
pub use role::{CanonicalRole, CanonicalState, RoleNormalizer, RoleSourceValue};
