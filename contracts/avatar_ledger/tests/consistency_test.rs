#[test]
fn test_contract_constants_match_allocation() {
    use avatar_ledger::storage;

    assert_eq!(storage::DEV_RESERVED_LIMIT, 6, "ERRO: alocação de dev difere da planejada");
    assert_eq!(storage::TEAM_RESERVED_LIMIT, 494, "ERRO: alocação do time difere da planejada");
    assert!(storage::MAX_BASE_URI_LEN >= 100, "ERRO: base URI IPFS típica não caberia");
}
