//! # Pipeline Scenarios
//!
//! Whole-pipeline runs over generated snapshots with a known shape.
//!
//! ## Flow Tested
//!
//! 1. **Snapshot Reader (1) → Validator Keys (2)**: blocks of the window
//!    resolve every forging validator's generator key
//! 2. **Snapshot Reader (1) → Module Transformers (3)**: accounts, legacy
//!    holdings and round weights become the five module stores
//! 3. **Module Transformers (3) → Genesis Assembler (4)**: stores are ordered
//!    and sealed into a block linked to the snapshot block

#[cfg(test)]
mod tests {
    use mg_01_snapshot_reader::test_utils::{block_id_for, FIXTURE_BLOCK_TIME};
    use mg_03_module_transformers::domain::params::INVALID_ED25519_KEY;
    use migrator_runtime::genesis::write_genesis_block;
    use migrator_runtime::{MigrationOutcome, MigrationPipeline};
    use serde_json::Value;
    use shared_types::{
        address_from_public_key, lisk32_from_address, MigrationError, ADDRESS_LEGACY_RESERVE,
    };
    use tempfile::TempDir;

    use crate::fixtures::{FixtureShape, SnapshotFixture, SNAPSHOT_HEIGHT};

    // =========================================================================
    // TEST FIXTURES
    // =========================================================================

    fn run(fixture: &SnapshotFixture) -> MigrationOutcome {
        MigrationPipeline::new(fixture.store(), &fixture.config())
            .unwrap()
            .run()
            .unwrap()
    }

    fn asset<'a>(outcome: &'a MigrationOutcome, module: &str) -> &'a Value {
        &outcome
            .block
            .assets
            .iter()
            .find(|asset| asset.module == module)
            .unwrap_or_else(|| panic!("no {module} asset"))
            .data
    }

    fn user<'a>(token: &'a Value, address: &str) -> &'a Value {
        token["userSubstore"]
            .as_array()
            .unwrap()
            .iter()
            .find(|entry| entry["address"] == address)
            .unwrap_or_else(|| panic!("no user entry for {address}"))
    }

    fn amount(value: &Value) -> u128 {
        value.as_str().unwrap().parse().unwrap()
    }

    // =========================================================================
    // GENESIS BLOCK
    // =========================================================================

    #[test]
    fn test_genesis_block_continues_snapshot_chain() {
        let fixture = SnapshotFixture::generate(11, &FixtureShape::default());
        let outcome = run(&fixture);

        let header = &outcome.block.header;
        assert_eq!(header.height, SNAPSHOT_HEIGHT + 1);
        assert_eq!(header.previous_block_id, block_id_for(SNAPSHOT_HEIGHT));
        assert_eq!(
            header.timestamp,
            SNAPSHOT_HEIGHT * FIXTURE_BLOCK_TIME + FIXTURE_BLOCK_TIME
        );
        assert!(header.signature.is_empty());
        assert!(header.generator_address.is_empty());
    }

    #[test]
    fn test_modules_in_collation_order() {
        let outcome = run(&SnapshotFixture::generate(12, &FixtureShape::default()));
        let modules: Vec<&str> = outcome
            .block
            .assets
            .iter()
            .map(|asset| asset.module.as_str())
            .collect();
        assert_eq!(modules, ["auth", "interoperability", "legacy", "pos", "token"]);

        for asset in &outcome.block.assets {
            assert_eq!(
                asset.schema["$id"],
                format!("/{}/module/genesis", asset.module)
            );
        }
    }

    // =========================================================================
    // TOKEN SUPPLY
    // =========================================================================

    #[test]
    fn test_total_supply_matches_snapshot_holdings() {
        let fixture = SnapshotFixture::generate(13, &FixtureShape::default());
        let outcome = run(&fixture);
        assert_eq!(outcome.summary.total_supply, fixture.expected_supply());

        let token = asset(&outcome, "token");
        let user_sum: u128 = token["userSubstore"]
            .as_array()
            .unwrap()
            .iter()
            .map(|entry| {
                let locked: u128 = entry["lockedBalances"]
                    .as_array()
                    .unwrap()
                    .iter()
                    .map(|lock| amount(&lock["amount"]))
                    .sum();
                amount(&entry["availableBalance"]) + locked
            })
            .sum();
        let supply = amount(&token["supplySubstore"][0]["totalSupply"]);
        assert_eq!(user_sum, supply);
        assert_eq!(supply, fixture.expected_supply());
    }

    #[test]
    fn test_reserve_absorbs_legacy_holdings() {
        let mut fixture = SnapshotFixture::generate(
            14,
            &FixtureShape {
                legacy_accounts: 0,
                reserve_balance: Some(100),
                ..Default::default()
            },
        );
        fixture.legacy = vec![([0x0a; 8], 50), ([0x0b; 8], 25)];
        let outcome = run(&fixture);

        let reserve = user(
            asset(&outcome, "token"),
            &lisk32_from_address(&ADDRESS_LEGACY_RESERVE),
        );
        assert_eq!(reserve["availableBalance"], "100");
        assert_eq!(reserve["lockedBalances"][0]["module"], "legacy");
        assert_eq!(reserve["lockedBalances"][0]["amount"], "75");
        assert_eq!(outcome.summary.legacy_reserve, 75);

        let legacy = asset(&outcome, "legacy")["accounts"].as_array().unwrap();
        assert_eq!(legacy.len(), 2);
        assert_eq!(legacy[0]["address"], "0a0a0a0a0a0a0a0a");
        assert_eq!(legacy[1]["balance"], "25");
    }

    #[test]
    fn test_reserve_entry_without_reserve_account_or_legacy() {
        let outcome = run(&SnapshotFixture::generate(
            15,
            &FixtureShape {
                legacy_accounts: 0,
                ..Default::default()
            },
        ));
        let reserve = user(
            asset(&outcome, "token"),
            &lisk32_from_address(&ADDRESS_LEGACY_RESERVE),
        );
        assert_eq!(reserve["availableBalance"], "0");
        assert!(reserve["lockedBalances"].as_array().unwrap().is_empty());
    }

    // =========================================================================
    // VALIDATORS
    // =========================================================================

    #[test]
    fn test_initial_validator_set_is_capped_and_excludes_banned() {
        let fixture = SnapshotFixture::generate(
            16,
            &FixtureShape {
                validators: 110,
                banned: 3,
                stakers: 20,
                ..Default::default()
            },
        );
        let outcome = run(&fixture);

        let expected: Vec<String> = fixture
            .eligible_validators()
            .iter()
            .take(101)
            .map(lisk32_from_address)
            .collect();
        let selected: Vec<String> = asset(&outcome, "pos")["genesisData"]["initValidators"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap().to_string())
            .collect();
        assert_eq!(selected.len(), 101);
        assert_eq!(selected, expected);

        // Banned validators keep their validator entry.
        assert_eq!(outcome.summary.validators, 110);
        let validators = asset(&outcome, "pos")["validators"].as_array().unwrap();
        assert_eq!(validators.iter().filter(|v| v["isBanned"] == true).count(), 3);
    }

    #[test]
    fn test_every_forging_validator_gets_its_generator_key() {
        let fixture = SnapshotFixture::generate(17, &FixtureShape::default());
        let outcome = run(&fixture);
        let validators = asset(&outcome, "pos")["validators"].as_array().unwrap();

        for key in &fixture.generator_keys {
            let address = lisk32_from_address(&address_from_public_key(key));
            let entry = validators
                .iter()
                .find(|v| v["address"] == address.as_str())
                .unwrap();
            assert_eq!(entry["generatorKey"], hex_of(key));
        }
        assert!(validators
            .iter()
            .all(|v| v["generatorKey"] != hex_of(&INVALID_ED25519_KEY)));
    }

    #[test]
    fn test_missing_round_weights_produce_no_block() {
        let fixture = SnapshotFixture::generate(
            18,
            &FixtureShape {
                with_weights: false,
                ..Default::default()
            },
        );
        let result = MigrationPipeline::new(fixture.store(), &fixture.config())
            .unwrap()
            .run();
        match result {
            Err(MigrationError::MissingHistoricalData(reason)) => {
                assert!(reason.contains("round 18"), "{reason}")
            }
            other => panic!("Expected MissingHistoricalData, got {other:?}"),
        }
    }

    #[test]
    fn test_window_must_end_after_it_starts() {
        let fixture = SnapshotFixture::generate(19, &FixtureShape::default());
        let mut config = fixture.config();
        config.snapshot.previous_snapshot_height = SNAPSHOT_HEIGHT;
        let result = MigrationPipeline::new(fixture.store(), &config).unwrap().run();
        assert!(matches!(result, Err(MigrationError::InvalidRange(_))));
    }

    // =========================================================================
    // OUTPUT
    // =========================================================================

    #[test]
    fn test_written_block_matches_digest_file() {
        let dir = TempDir::new().unwrap();
        let outcome = run(&SnapshotFixture::generate(20, &FixtureShape::default()));
        let files = write_genesis_block(&outcome.block, dir.path()).unwrap();

        let written = std::fs::read_to_string(&files.digest_path).unwrap();
        assert_eq!(written, format!("{}  genesis_block.json\n", files.digest));

        let block: Value =
            serde_json::from_slice(&std::fs::read(&files.block_path).unwrap()).unwrap();
        assert_eq!(block["header"]["height"], SNAPSHOT_HEIGHT + 1);
        assert_eq!(block["assets"].as_array().unwrap().len(), 5);
    }

    fn hex_of(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{b:02x}")).collect()
    }
}
