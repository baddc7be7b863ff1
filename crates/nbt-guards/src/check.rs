use nbt_core::{Strictness, TagCompound, ValidationConfig, Verdict};

/// A rule over one named field of an item tag.
///
/// `check` receives the compound that holds the field, not the field itself.
/// It must not assume the field is present or well typed: absent or
/// malformed-but-harmless data is `Pass`, a rule violation is `Fail`, and
/// content that cannot come from legitimate play is `Critical`.
pub trait NbtCheck: Send + Sync {
    fn name(&self) -> &str;

    fn aliases(&self) -> &[&str] {
        &[]
    }

    /// Lowest strictness at which this check runs.
    fn tolerance(&self) -> Strictness;

    fn check(
        &self,
        tag: &dyn TagCompound,
        item_name: &str,
        config: &dyn ValidationConfig,
    ) -> Verdict;
}
