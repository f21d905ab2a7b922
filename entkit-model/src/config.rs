/// Layout options for JSON export.
#[derive(Debug, Clone, Default)]
pub struct EncodeConfig {
    /// Indent nested members instead of emitting a single line.
    pub pretty: bool,
}

impl EncodeConfig {
    /// Compact single-line output, the canonical form.
    #[must_use]
    pub const fn compact() -> Self {
        Self { pretty: false }
    }

    /// Indented output for humans.
    #[must_use]
    pub const fn pretty() -> Self {
        Self { pretty: true }
    }
}
