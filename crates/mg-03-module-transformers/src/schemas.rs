//! # Genesis Store Schemas
//!
//! Schemas published next to each module's genesis data. Field numbers are
//! the binary codec positions the v4 node decodes the store with.

use serde_json::{json, Value};

pub fn auth_schema() -> Value {
    json!({
        "$id": "/auth/module/genesis",
        "type": "object",
        "required": ["authDataSubstore"],
        "properties": {
            "authDataSubstore": {
                "type": "array",
                "fieldNumber": 1,
                "items": {
                    "type": "object",
                    "required": ["storeKey", "storeValue"],
                    "properties": {
                        "storeKey": { "dataType": "bytes", "format": "lisk32", "fieldNumber": 1 },
                        "storeValue": {
                            "type": "object",
                            "fieldNumber": 2,
                            "required": ["nonce", "numberOfSignatures", "mandatoryKeys", "optionalKeys"],
                            "properties": {
                                "nonce": { "dataType": "uint64", "fieldNumber": 1 },
                                "numberOfSignatures": { "dataType": "uint32", "fieldNumber": 2 },
                                "mandatoryKeys": {
                                    "type": "array",
                                    "fieldNumber": 3,
                                    "items": { "dataType": "bytes", "minLength": 32, "maxLength": 32 }
                                },
                                "optionalKeys": {
                                    "type": "array",
                                    "fieldNumber": 4,
                                    "items": { "dataType": "bytes", "minLength": 32, "maxLength": 32 }
                                }
                            }
                        }
                    }
                }
            }
        }
    })
}

pub fn token_schema() -> Value {
    json!({
        "$id": "/token/module/genesis",
        "type": "object",
        "required": ["userSubstore", "supplySubstore", "escrowSubstore", "supportedTokensSubstore"],
        "properties": {
            "userSubstore": {
                "type": "array",
                "fieldNumber": 1,
                "items": {
                    "type": "object",
                    "required": ["address", "tokenID", "availableBalance", "lockedBalances"],
                    "properties": {
                        "address": { "dataType": "bytes", "format": "lisk32", "fieldNumber": 1 },
                        "tokenID": { "dataType": "bytes", "minLength": 8, "maxLength": 8, "fieldNumber": 2 },
                        "availableBalance": { "dataType": "uint64", "fieldNumber": 3 },
                        "lockedBalances": {
                            "type": "array",
                            "fieldNumber": 4,
                            "items": {
                                "type": "object",
                                "required": ["module", "amount"],
                                "properties": {
                                    "module": { "dataType": "string", "minLength": 1, "maxLength": 32, "fieldNumber": 1 },
                                    "amount": { "dataType": "uint64", "fieldNumber": 2 }
                                }
                            }
                        }
                    }
                }
            },
            "supplySubstore": {
                "type": "array",
                "fieldNumber": 2,
                "items": {
                    "type": "object",
                    "required": ["tokenID", "totalSupply"],
                    "properties": {
                        "tokenID": { "dataType": "bytes", "minLength": 8, "maxLength": 8, "fieldNumber": 1 },
                        "totalSupply": { "dataType": "uint64", "fieldNumber": 2 }
                    }
                }
            },
            "escrowSubstore": {
                "type": "array",
                "fieldNumber": 3,
                "items": {
                    "type": "object",
                    "required": ["escrowChainID", "tokenID", "amount"],
                    "properties": {
                        "escrowChainID": { "dataType": "bytes", "minLength": 4, "maxLength": 4, "fieldNumber": 1 },
                        "tokenID": { "dataType": "bytes", "minLength": 8, "maxLength": 8, "fieldNumber": 2 },
                        "amount": { "dataType": "uint64", "fieldNumber": 3 }
                    }
                }
            },
            "supportedTokensSubstore": {
                "type": "array",
                "fieldNumber": 4,
                "items": {
                    "type": "object",
                    "required": ["chainID", "supportedTokenIDs"],
                    "properties": {
                        "chainID": { "dataType": "bytes", "minLength": 4, "maxLength": 4, "fieldNumber": 1 },
                        "supportedTokenIDs": {
                            "type": "array",
                            "fieldNumber": 2,
                            "items": { "dataType": "bytes", "minLength": 8, "maxLength": 8 }
                        }
                    }
                }
            }
        }
    })
}

fn sharing_coefficients_schema(field_number: u32) -> Value {
    json!({
        "type": "array",
        "fieldNumber": field_number,
        "items": {
            "type": "object",
            "required": ["tokenID", "coefficient"],
            "properties": {
                "tokenID": { "dataType": "bytes", "minLength": 8, "maxLength": 8, "fieldNumber": 1 },
                "coefficient": { "dataType": "bytes", "maxLength": 24, "fieldNumber": 2 }
            }
        }
    })
}

pub fn pos_schema() -> Value {
    json!({
        "$id": "/pos/module/genesis",
        "type": "object",
        "required": ["validators", "stakers", "genesisData"],
        "properties": {
            "validators": {
                "type": "array",
                "fieldNumber": 1,
                "items": {
                    "type": "object",
                    "required": [
                        "address", "name", "blsKey", "proofOfPossession", "generatorKey",
                        "lastGeneratedHeight", "isBanned", "reportMisbehaviorHeights",
                        "consecutiveMissedBlocks", "commission", "lastCommissionIncreaseHeight",
                        "sharingCoefficients"
                    ],
                    "properties": {
                        "address": { "dataType": "bytes", "format": "lisk32", "fieldNumber": 1 },
                        "name": { "dataType": "string", "fieldNumber": 2 },
                        "blsKey": { "dataType": "bytes", "minLength": 48, "maxLength": 48, "fieldNumber": 3 },
                        "proofOfPossession": { "dataType": "bytes", "minLength": 96, "maxLength": 96, "fieldNumber": 4 },
                        "generatorKey": { "dataType": "bytes", "minLength": 32, "maxLength": 32, "fieldNumber": 5 },
                        "lastGeneratedHeight": { "dataType": "uint32", "fieldNumber": 6 },
                        "isBanned": { "dataType": "boolean", "fieldNumber": 7 },
                        "reportMisbehaviorHeights": {
                            "type": "array",
                            "fieldNumber": 8,
                            "items": { "dataType": "uint32" }
                        },
                        "consecutiveMissedBlocks": { "dataType": "uint32", "fieldNumber": 9 },
                        "commission": { "dataType": "uint32", "fieldNumber": 10 },
                        "lastCommissionIncreaseHeight": { "dataType": "uint32", "fieldNumber": 11 },
                        "sharingCoefficients": sharing_coefficients_schema(12)
                    }
                }
            },
            "stakers": {
                "type": "array",
                "fieldNumber": 2,
                "items": {
                    "type": "object",
                    "required": ["address", "stakes", "pendingUnlocks"],
                    "properties": {
                        "address": { "dataType": "bytes", "format": "lisk32", "fieldNumber": 1 },
                        "stakes": {
                            "type": "array",
                            "fieldNumber": 2,
                            "items": {
                                "type": "object",
                                "required": ["validatorAddress", "amount", "sharingCoefficients"],
                                "properties": {
                                    "validatorAddress": { "dataType": "bytes", "format": "lisk32", "fieldNumber": 1 },
                                    "amount": { "dataType": "uint64", "fieldNumber": 2 },
                                    "sharingCoefficients": sharing_coefficients_schema(3)
                                }
                            }
                        },
                        "pendingUnlocks": {
                            "type": "array",
                            "fieldNumber": 3,
                            "items": {
                                "type": "object",
                                "required": ["validatorAddress", "amount", "unstakeHeight"],
                                "properties": {
                                    "validatorAddress": { "dataType": "bytes", "format": "lisk32", "fieldNumber": 1 },
                                    "amount": { "dataType": "uint64", "fieldNumber": 2 },
                                    "unstakeHeight": { "dataType": "uint32", "fieldNumber": 3 }
                                }
                            }
                        }
                    }
                }
            },
            "genesisData": {
                "type": "object",
                "fieldNumber": 3,
                "required": ["initRounds", "initValidators"],
                "properties": {
                    "initRounds": { "dataType": "uint32", "fieldNumber": 1 },
                    "initValidators": {
                        "type": "array",
                        "fieldNumber": 2,
                        "items": { "dataType": "bytes", "format": "lisk32" }
                    }
                }
            }
        }
    })
}

pub fn legacy_schema() -> Value {
    json!({
        "$id": "/legacy/module/genesis",
        "type": "object",
        "required": ["accounts"],
        "properties": {
            "accounts": {
                "type": "array",
                "fieldNumber": 1,
                "items": {
                    "type": "object",
                    "required": ["address", "balance"],
                    "properties": {
                        "address": { "dataType": "bytes", "minLength": 8, "maxLength": 8, "fieldNumber": 1 },
                        "balance": { "dataType": "uint64", "fieldNumber": 2 }
                    }
                }
            }
        }
    })
}

pub fn interoperability_schema() -> Value {
    json!({
        "$id": "/interoperability/module/genesis",
        "type": "object",
        "required": [
            "ownChainName", "ownChainNonce", "chainInfos",
            "terminatedStateAccounts", "terminatedOutboxAccounts"
        ],
        "properties": {
            "ownChainName": { "dataType": "string", "maxLength": 32, "fieldNumber": 1 },
            "ownChainNonce": { "dataType": "uint64", "fieldNumber": 2 },
            "chainInfos": { "type": "array", "fieldNumber": 3, "items": { "type": "object" } },
            "terminatedStateAccounts": { "type": "array", "fieldNumber": 4, "items": { "type": "object" } },
            "terminatedOutboxAccounts": { "type": "array", "fieldNumber": 5, "items": { "type": "object" } }
        }
    })
}
