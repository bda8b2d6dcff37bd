pub mod canonical;
pub mod live;
pub mod normalizer;
pub mod platform;
pub mod vocabulary;

pub use canonical::{CanonicalRole, CanonicalState};
pub use live::AriaLivePoliteness;
pub use normalizer::{RoleNormalizer, RoleOutcome, RoleSourceValue};
pub use platform::{PlatformRoleLookup, PlatformRoleTable, msaa_role_table};
pub use vocabulary::{Landmark, VocabularyTable, aria_vocabulary, landmark_label};
