use std::collections::BTreeMap;

use shared_types::{Address, PublicKey};

/// Address to most recently observed generator key.
///
/// Iteration is in ascending address order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatorKeyMap {
    keys: BTreeMap<Address, PublicKey>,
}

impl ValidatorKeyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an observation, replacing any earlier one for the address.
    pub fn observe(&mut self, address: Address, key: PublicKey) {
        self.keys.insert(address, key);
    }

    pub fn get(&self, address: &Address) -> Option<&PublicKey> {
        self.keys.get(address)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Address, &PublicKey)> {
        self.keys.iter()
    }
}

impl FromIterator<(Address, PublicKey)> for ValidatorKeyMap {
    fn from_iter<I: IntoIterator<Item = (Address, PublicKey)>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().collect(),
        }
    }
}
