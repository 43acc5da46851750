/// Options controlling range satisfaction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SatisfyOptions {
    /// Compare pre-release candidates by plain ordering instead of
    /// rejecting them unless the range targets their numeric tuple.
    pub include_prerelease: bool,
}

impl SatisfyOptions {
    pub fn include_prerelease() -> Self {
        SatisfyOptions {
            include_prerelease: true,
        }
    }
}
