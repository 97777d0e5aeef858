//! # Snapshot Fixtures
//!
//! Generates mainnet-shaped v3 snapshots from a seed. The logical content
//! (accounts, votes, legacy holdings, round weights, blocks) depends only on
//! the generation seed; `store_shuffled` additionally permutes every input
//! sequence whose order the v3 node never guaranteed, so two stores built
//! from one fixture hold the same state in different source orders.

use mg_01_snapshot_reader::domain::records::{AccountRecord, KeysRecord};
use mg_01_snapshot_reader::test_utils::{
    account_record, delegate_record, unlock, vote, SnapshotBuilder,
};
use mg_01_snapshot_reader::InMemorySnapshotStore;
use mg_03_module_transformers::domain::params::ROUND_LENGTH;
use migrator_runtime::MigratorConfig;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use shared_types::{
    address_from_public_key, Address, Amount, LegacyAddress, PublicKey, ADDRESS_LEGACY_RESERVE,
};

/// Snapshot height used by every generated fixture: the last block of round 20.
pub const SNAPSHOT_HEIGHT: u32 = ROUND_LENGTH * 20;

/// Round whose weights seed the initial validator set at [`SNAPSHOT_HEIGHT`].
pub const WEIGHTS_ROUND: u32 = 18;

/// How many of each kind of account a fixture holds.
#[derive(Debug, Clone)]
pub struct FixtureShape {
    pub validators: usize,
    /// Validators flagged as banned; they come first in generation order.
    pub banned: usize,
    pub stakers: usize,
    /// Stakers that also carry multisignature keys.
    pub multisig: usize,
    pub legacy_accounts: usize,
    /// Balance of an existing reserve account, if the snapshot has one.
    pub reserve_balance: Option<u64>,
    /// Whether round weights are recorded at all.
    pub with_weights: bool,
}

impl Default for FixtureShape {
    fn default() -> Self {
        Self {
            validators: 12,
            banned: 1,
            stakers: 40,
            multisig: 5,
            legacy_accounts: 6,
            reserve_balance: None,
            with_weights: true,
        }
    }
}

/// A generated snapshot.
#[derive(Debug, Clone)]
pub struct SnapshotFixture {
    pub generator_keys: Vec<PublicKey>,
    pub accounts: Vec<AccountRecord>,
    pub legacy: Vec<(LegacyAddress, u64)>,
    pub weights: Vec<(Address, u64)>,
    pub previous_height: u32,
}

fn random_bytes<const N: usize>(rng: &mut StdRng) -> [u8; N] {
    let mut bytes = [0u8; N];
    rng.fill(&mut bytes[..]);
    bytes
}

impl SnapshotFixture {
    pub fn generate(seed: u64, shape: &FixtureShape) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);

        let generator_keys: Vec<PublicKey> = (0..shape.validators)
            .map(|_| random_bytes(&mut rng))
            .collect();
        let validator_addresses: Vec<Address> =
            generator_keys.iter().map(address_from_public_key).collect();

        let mut accounts = Vec::new();
        let mut weights = Vec::new();
        for (i, address) in validator_addresses.iter().enumerate() {
            let mut record =
                delegate_record(*address, rng.gen_range(1_000..1_000_000), &format!("validator_{i}"));
            record.sequence.nonce = rng.gen_range(0..500);
            record.dpos.delegate.is_banned = i < shape.banned;
            record.dpos.delegate.last_forged_height = SNAPSHOT_HEIGHT - i as u32;
            record.dpos.sent_votes = vec![vote(*address, rng.gen_range(10..10_000))];
            accounts.push(record);
            weights.push((*address, rng.gen_range(1_000..100_000_000)));
        }

        let window = (2 * shape.validators).max(10) as u32;
        let previous_height = SNAPSHOT_HEIGHT - window;

        for i in 0..shape.stakers {
            let mut record = account_record(random_bytes(&mut rng), rng.gen_range(0..50_000));
            record.sequence.nonce = rng.gen_range(0..500);
            if !validator_addresses.is_empty() {
                let targets = rng.gen_range(1..=validator_addresses.len().min(3));
                record.dpos.sent_votes = validator_addresses
                    .choose_multiple(&mut rng, targets)
                    .map(|validator| vote(*validator, rng.gen_range(1..5_000)))
                    .collect();
                let unlocks = rng.gen_range(0..=2);
                record.dpos.unlocking = (0..unlocks)
                    .map(|_| {
                        let validator = validator_addresses[rng.gen_range(0..validator_addresses.len())];
                        unlock(
                            validator,
                            rng.gen_range(1..5_000),
                            rng.gen_range(previous_height..=SNAPSHOT_HEIGHT),
                        )
                    })
                    .collect();
            }
            if i < shape.multisig {
                record.keys = KeysRecord {
                    number_of_signatures: 2,
                    mandatory_keys: (0..2).map(|_| random_bytes::<32>(&mut rng).to_vec()).collect(),
                    optional_keys: (0..2).map(|_| random_bytes::<32>(&mut rng).to_vec()).collect(),
                };
            }
            accounts.push(record);
        }

        if let Some(balance) = shape.reserve_balance {
            accounts.push(account_record(ADDRESS_LEGACY_RESERVE, balance));
        }

        let legacy = (0..shape.legacy_accounts)
            .map(|_| (random_bytes(&mut rng), rng.gen_range(1..1_000_000)))
            .collect();

        if !shape.with_weights {
            weights.clear();
        }

        Self {
            generator_keys,
            accounts,
            legacy,
            weights,
            previous_height,
        }
    }

    /// Store holding the fixture in generation order.
    pub fn store(&self) -> InMemorySnapshotStore {
        self.build(self.accounts.clone(), self.weights.clone())
    }

    /// Store holding the same state with every unordered sequence permuted.
    ///
    /// The legacy record is left alone: its order is canonical and is
    /// republished verbatim.
    pub fn store_shuffled(&self, order_seed: u64) -> InMemorySnapshotStore {
        let mut rng = StdRng::seed_from_u64(order_seed);
        let mut accounts = self.accounts.clone();
        accounts.shuffle(&mut rng);
        for account in &mut accounts {
            account.keys.mandatory_keys.shuffle(&mut rng);
            account.keys.optional_keys.shuffle(&mut rng);
            account.dpos.sent_votes.shuffle(&mut rng);
            account.dpos.unlocking.shuffle(&mut rng);
        }
        let mut weights = self.weights.clone();
        weights.shuffle(&mut rng);
        self.build(accounts, weights)
    }

    fn build(&self, accounts: Vec<AccountRecord>, weights: Vec<(Address, u64)>) -> InMemorySnapshotStore {
        let mut builder = SnapshotBuilder::new();
        for account in accounts {
            builder = builder.with_account(account);
        }
        for (address, balance) in &self.legacy {
            builder = builder.with_legacy_account(*address, *balance);
        }
        if !weights.is_empty() {
            builder = builder.with_vote_weights(WEIGHTS_ROUND, &weights);
        }

        // Every validator forges inside the window; every third block also
        // carries a transaction from the next validator in line.
        let count = self.generator_keys.len();
        for height in (self.previous_height - 2)..=SNAPSHOT_HEIGHT {
            if count == 0 {
                builder = builder.with_block(height, [0x5a; 32], &[]);
                continue;
            }
            let generator = self.generator_keys[height as usize % count];
            let senders = if height % 3 == 0 {
                vec![self.generator_keys[(height as usize + 1) % count]]
            } else {
                Vec::new()
            };
            builder = builder.with_block(height, generator, &senders);
        }
        builder.build()
    }

    /// Configuration migrating this fixture with mainchain constants.
    pub fn config(&self) -> MigratorConfig {
        let mut config = MigratorConfig::default();
        config.snapshot.snapshot_height = SNAPSHOT_HEIGHT;
        config.snapshot.previous_snapshot_height = self.previous_height;
        config
    }

    /// Supply the migrated chain must report: every balance, every vote and
    /// unlock, and every legacy holding.
    pub fn expected_supply(&self) -> Amount {
        let accounts: Amount = self
            .accounts
            .iter()
            .map(|account| {
                let votes: Amount = account.dpos.sent_votes.iter().map(|v| Amount::from(v.amount)).sum();
                let unlocks: Amount = account.dpos.unlocking.iter().map(|u| Amount::from(u.amount)).sum();
                Amount::from(account.token.balance) + votes + unlocks
            })
            .sum();
        accounts + self.legacy_sum()
    }

    pub fn legacy_sum(&self) -> Amount {
        self.legacy.iter().map(|(_, balance)| Amount::from(*balance)).sum()
    }

    /// Validator addresses eligible for the initial set, in byte order.
    pub fn eligible_validators(&self) -> Vec<Address> {
        let mut eligible: Vec<Address> = self
            .accounts
            .iter()
            .filter(|a| !a.dpos.delegate.username.is_empty() && !a.dpos.delegate.is_banned)
            .filter_map(|a| Address::try_from(a.address.as_slice()).ok())
            .filter(|address| self.weights.iter().any(|(w, _)| w == address))
            .collect();
        eligible.sort_unstable();
        eligible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_is_seeded() {
        let shape = FixtureShape::default();
        let a = SnapshotFixture::generate(7, &shape);
        let b = SnapshotFixture::generate(7, &shape);
        assert_eq!(a.accounts, b.accounts);
        assert_eq!(a.legacy, b.legacy);
        assert_ne!(a.accounts, SnapshotFixture::generate(8, &shape).accounts);
    }

    #[test]
    fn test_shape_counts() {
        let shape = FixtureShape {
            reserve_balance: Some(100),
            ..Default::default()
        };
        let fixture = SnapshotFixture::generate(1, &shape);
        assert_eq!(fixture.accounts.len(), shape.validators + shape.stakers + 1);
        assert_eq!(fixture.legacy.len(), shape.legacy_accounts);
        assert_eq!(fixture.eligible_validators().len(), shape.validators - shape.banned);
    }

    #[test]
    fn test_window_covers_every_generator() {
        let fixture = SnapshotFixture::generate(3, &FixtureShape::default());
        let window = (SNAPSHOT_HEIGHT - fixture.previous_height) as usize;
        assert!(window >= fixture.generator_keys.len());
    }
}
