//! Shareholder data model.
//!
//! A shareholder is identified by a store-assigned [`ShareholderId`] and
//! carries a running `shares` total plus the ordered list of transactions
//! applied to it. The relationship `shares == baseline + sum(transactions)`
//! is maintained by [`Shareholder::apply_transaction`] but is not enforced:
//! a [`ShareholderPatch`] may replace either side independently.

use std::fmt;

/// Length of the canonical hexadecimal identifier form.
pub const SHAREHOLDER_ID_LEN: usize = 24;

/// Validation errors raised by shareholder constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareholderValidationError {
    InvalidId,
    EmptyName,
    SharesOverflow { shares: i64, amount: i64 },
}

impl fmt::Display for ShareholderValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId => write!(
                f,
                "shareholder id must be {SHAREHOLDER_ID_LEN} hexadecimal characters"
            ),
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::SharesOverflow { shares, amount } => {
                write!(f, "applying {amount} to {shares} shares overflows")
            }
        }
    }
}

impl std::error::Error for ShareholderValidationError {}

/// Store-assigned shareholder identifier in its canonical string form.
///
/// Clients treat the value as opaque; internally it is the lowercase hex
/// rendering of a document-store object id.
///
/// # Examples
/// ```
/// use shareholders::domain::ShareholderId;
///
/// let id = ShareholderId::new("65A1F0C2E4B0A1B2C3D4E5F6").expect("valid id");
/// assert_eq!(id.as_ref(), "65a1f0c2e4b0a1b2c3d4e5f6");
/// assert!(ShareholderId::new("not-an-id").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShareholderId(String);

impl ShareholderId {
    /// Validate and construct an identifier, normalising to lowercase.
    pub fn new(id: impl AsRef<str>) -> Result<Self, ShareholderValidationError> {
        let raw = id.as_ref();
        if raw.len() != SHAREHOLDER_ID_LEN || !raw.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ShareholderValidationError::InvalidId);
        }
        Ok(Self(raw.to_ascii_lowercase()))
    }
}

impl AsRef<str> for ShareholderId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ShareholderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<ShareholderId> for String {
    fn from(value: ShareholderId) -> Self {
        value.0
    }
}

/// Non-empty shareholder name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareholderName(String);

impl ShareholderName {
    /// Validate and construct a name supplied by a client.
    pub fn new(name: impl Into<String>) -> Result<Self, ShareholderValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ShareholderValidationError::EmptyName);
        }
        Ok(Self(name))
    }

    /// Wrap a name read back from the store as-is.
    ///
    /// Records written by earlier clients may hold an empty name; they must
    /// still load.
    pub(crate) fn from_stored(name: String) -> Self {
        Self(name)
    }
}

impl AsRef<str> for ShareholderName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ShareholderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Shareholder fields supplied on creation, before the store assigns an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShareholder {
    pub name: ShareholderName,
    pub shares: i64,
    pub transactions: Vec<i64>,
}

/// Persisted shareholder record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shareholder {
    id: ShareholderId,
    name: ShareholderName,
    shares: i64,
    transactions: Vec<i64>,
}

impl Shareholder {
    /// Attach a store-assigned identifier to creation fields.
    pub fn new(id: ShareholderId, fields: NewShareholder) -> Self {
        let NewShareholder {
            name,
            shares,
            transactions,
        } = fields;
        Self {
            id,
            name,
            shares,
            transactions,
        }
    }

    pub fn id(&self) -> &ShareholderId {
        &self.id
    }

    pub fn name(&self) -> &ShareholderName {
        &self.name
    }

    pub fn shares(&self) -> i64 {
        self.shares
    }

    pub fn transactions(&self) -> &[i64] {
        &self.transactions
    }

    /// Append `amount` to the transaction log and adjust the running total.
    ///
    /// The record is left untouched when the new total would overflow.
    ///
    /// # Examples
    /// ```
    /// use shareholders::domain::{NewShareholder, Shareholder, ShareholderId, ShareholderName};
    ///
    /// let mut alice = Shareholder::new(
    ///     ShareholderId::new("65a1f0c2e4b0a1b2c3d4e5f6").expect("id"),
    ///     NewShareholder {
    ///         name: ShareholderName::new("Alice").expect("name"),
    ///         shares: 100,
    ///         transactions: vec![100],
    ///     },
    /// );
    /// alice.apply_transaction(-20).expect("no overflow");
    /// assert_eq!(alice.shares(), 80);
    /// assert_eq!(alice.transactions(), &[100, -20]);
    /// ```
    pub fn apply_transaction(&mut self, amount: i64) -> Result<(), ShareholderValidationError> {
        let shares = self.shares.checked_add(amount).ok_or(
            ShareholderValidationError::SharesOverflow {
                shares: self.shares,
                amount,
            },
        )?;
        self.shares = shares;
        self.transactions.push(amount);
        Ok(())
    }

    /// Overwrite every field present in `patch`.
    pub fn apply_patch(&mut self, patch: &ShareholderPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(shares) = patch.shares {
            self.shares = shares;
        }
        if let Some(transactions) = &patch.transactions {
            self.transactions = transactions.clone();
        }
    }
}

/// Partial update: `Some` marks a field as present and replaces it, `None`
/// leaves it untouched.
///
/// Clearing a field is not expressible; absent and JSON `null` inputs both
/// map to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShareholderPatch {
    pub name: Option<ShareholderName>,
    pub shares: Option<i64>,
    pub transactions: Option<Vec<i64>>,
}

impl ShareholderPatch {
    /// True when no field is present.
    pub fn is_empty(&self) -> bool {
        self.present_fields().is_empty()
    }

    /// Names of the fields this patch sets, in declaration order.
    pub fn present_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::with_capacity(3);
        if self.name.is_some() {
            fields.push("name");
        }
        if self.shares.is_some() {
            fields.push("shares");
        }
        if self.transactions.is_some() {
            fields.push("transactions");
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn alice() -> Shareholder {
        Shareholder::new(
            ShareholderId::new("65a1f0c2e4b0a1b2c3d4e5f6").expect("valid id"),
            NewShareholder {
                name: ShareholderName::new("Alice").expect("valid name"),
                shares: 100,
                transactions: vec![100],
            },
        )
    }

    #[rstest]
    #[case("")]
    #[case("65a1f0c2e4b0a1b2c3d4e5f")]
    #[case("65a1f0c2e4b0a1b2c3d4e5f6a")]
    #[case("zza1f0c2e4b0a1b2c3d4e5f6")]
    #[case(" 5a1f0c2e4b0a1b2c3d4e5f6")]
    fn id_rejects_non_canonical_input(#[case] raw: &str) {
        assert_eq!(
            ShareholderId::new(raw),
            Err(ShareholderValidationError::InvalidId)
        );
    }

    #[test]
    fn name_rejects_empty_input() {
        assert_eq!(
            ShareholderName::new(""),
            Err(ShareholderValidationError::EmptyName)
        );
    }

    #[rstest]
    #[case(" ")]
    #[case("\t\n")]
    fn name_keeps_whitespace_only_input(#[case] raw: &str) {
        let name = ShareholderName::new(raw).expect("non-empty name");
        assert_eq!(name.as_ref(), raw);
    }

    #[test]
    fn stored_names_skip_validation() {
        assert_eq!(ShareholderName::from_stored(String::new()).as_ref(), "");
    }

    #[rstest]
    fn apply_transaction_updates_total_and_log(mut alice: Shareholder) {
        alice.apply_transaction(-20).expect("in range");
        alice.apply_transaction(5).expect("in range");

        assert_eq!(alice.shares(), 85);
        assert_eq!(alice.transactions(), &[100, -20, 5]);
    }

    #[rstest]
    fn apply_transaction_rejects_overflow_without_mutation(mut alice: Shareholder) {
        let err = alice
            .apply_transaction(i64::MAX)
            .expect_err("overflow rejected");

        assert_eq!(
            err,
            ShareholderValidationError::SharesOverflow {
                shares: 100,
                amount: i64::MAX
            }
        );
        assert_eq!(alice.shares(), 100);
        assert_eq!(alice.transactions(), &[100]);
    }

    #[rstest]
    fn apply_patch_only_touches_present_fields(mut alice: Shareholder) {
        let patch = ShareholderPatch {
            shares: Some(7),
            ..ShareholderPatch::default()
        };

        alice.apply_patch(&patch);

        assert_eq!(alice.name().as_ref(), "Alice");
        assert_eq!(alice.shares(), 7);
        assert_eq!(alice.transactions(), &[100]);
    }

    #[rstest]
    fn apply_patch_can_break_running_total(mut alice: Shareholder) {
        let patch = ShareholderPatch {
            transactions: Some(vec![1, 2, 3]),
            ..ShareholderPatch::default()
        };

        alice.apply_patch(&patch);

        let total: i64 = alice.transactions().iter().sum();
        assert_ne!(alice.shares(), total);
    }

    #[test]
    fn empty_patch_reports_no_fields() {
        let patch = ShareholderPatch::default();
        assert!(patch.is_empty());
        assert!(patch.present_fields().is_empty());
    }

    #[test]
    fn present_fields_lists_set_fields_in_order() {
        let patch = ShareholderPatch {
            name: Some(ShareholderName::new("Bob").expect("valid name")),
            transactions: Some(Vec::new()),
            ..ShareholderPatch::default()
        };
        assert!(!patch.is_empty());
        assert_eq!(patch.present_fields(), vec!["name", "transactions"]);
    }
}
