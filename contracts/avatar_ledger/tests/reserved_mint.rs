#![cfg(test)]
#![cfg(not(tarpaulin_include))]
mod setup;
use avatar_ledger::AvatarError;
use setup::TestEnv;

#[test]
fn test_mint_reserved_to_dev() {
    let t = TestEnv::new();

    t.client.mint_reserved(&t.admin, &t.dev, &1);

    assert_eq!(t.client.balance(&t.dev), 1);
    assert_eq!(t.client.dev_reserved_supply(), 1);
    assert_eq!(t.client.team_reserved_supply(), 0);
    assert_eq!(t.client.total_minted(), 1);
}

#[test]
fn test_mint_reserved_to_team() {
    let t = TestEnv::new();

    t.client.mint_reserved(&t.admin, &t.team, &1);

    assert_eq!(t.client.balance(&t.team), 1);
    assert_eq!(t.client.team_reserved_supply(), 1);
    assert_eq!(t.client.dev_reserved_supply(), 0);
}

#[test]
fn test_mint_reserved_rejects_other_recipient() {
    let t = TestEnv::new();
    let buyer = t.user();

    let res = t.client.try_mint_reserved(&t.admin, &buyer, &1);

    assert_eq!(res, Err(Ok(AvatarError::InvalidRecipient)));
    assert_eq!(t.client.total_minted(), 0);
}

#[test]
fn test_mint_reserved_requires_admin() {
    let t = TestEnv::new();

    let res = t.client.try_mint_reserved(&t.minter, &t.dev, &1);

    assert_eq!(res, Err(Ok(AvatarError::Unauthorized)));
}

#[test]
fn test_mint_reserved_rejects_zero() {
    let t = TestEnv::new();

    let res = t.client.try_mint_reserved(&t.admin, &t.dev, &0);

    assert_eq!(res, Err(Ok(AvatarError::InvalidAmount)));
}

#[test]
fn test_dev_cap_exceeded_leaves_supply_unchanged() {
    let t = TestEnv::new();

    t.client.mint_reserved(&t.admin, &t.dev, &6);
    let res = t.client.try_mint_reserved(&t.admin, &t.dev, &1);

    assert_eq!(res, Err(Ok(AvatarError::DevCapExceeded)));
    assert_eq!(t.client.dev_reserved_supply(), 6);
    assert_eq!(t.client.total_minted(), 6);
    assert_eq!(t.client.balance(&t.dev), 6);
}

#[test]
fn test_team_cap_exceeded() {
    let t = TestEnv::new();

    for _ in 0..9 {
        t.client.mint_reserved(&t.admin, &t.team, &50);
    }
    t.client.mint_reserved(&t.admin, &t.team, &44);

    let res = t.client.try_mint_reserved(&t.admin, &t.team, &1);
    assert_eq!(res, Err(Ok(AvatarError::TeamCapExceeded)));
    assert_eq!(t.client.team_reserved_supply(), 494);
}

#[test]
fn test_buckets_are_independent() {
    let t = TestEnv::new();

    t.client.mint_reserved(&t.admin, &t.dev, &6);
    t.client.mint_reserved(&t.admin, &t.team, &10);

    assert_eq!(t.client.dev_reserved_supply(), 6);
    assert_eq!(t.client.team_reserved_supply(), 10);
    assert_eq!(t.client.total_minted(), 16);
    // ids continuam sequenciais entre buckets
    assert_eq!(t.client.owner_of(&6), t.dev);
    assert_eq!(t.client.owner_of(&7), t.team);
}

#[test]
fn test_single_call_over_cap_fails_atomically() {
    let t = TestEnv::new();

    t.client.mint_reserved(&t.admin, &t.dev, &4);
    let res = t.client.try_mint_reserved(&t.admin, &t.dev, &3);

    assert_eq!(res, Err(Ok(AvatarError::DevCapExceeded)));
    assert_eq!(t.client.dev_reserved_supply(), 4);
    assert_eq!(t.client.try_owner_of(&5), Err(Ok(AvatarError::TokenNotFound)));
}
