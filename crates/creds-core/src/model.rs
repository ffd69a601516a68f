use serde::{Deserialize, Serialize};

/// One vendor/username/password triple from the default-credentials dataset.
///
/// Records are kept exactly as parsed: no deduplication, no trimming,
/// source order preserved through persistence and reload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    /// Product or vendor the credentials ship with
    pub product_vendor: String,

    /// Factory-default account name
    pub username: String,

    /// Factory-default password
    pub password: String,
}

impl Credential {
    /// Create a record from the three CSV cells, in column order
    #[must_use]
    pub fn new(
        product_vendor: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            product_vendor: product_vendor.into(),
            username: username.into(),
            password: password.into(),
        }
    }
}
