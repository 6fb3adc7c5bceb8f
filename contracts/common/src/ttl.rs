use soroban_sdk::{Env, IntoVal, Val};

/// Ledgers closed per day at a ~5 second close time.
pub const DAY_IN_LEDGERS: u32 = 17_280;

pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Keeps the contract instance (and everything in instance storage) alive
/// for another week once it drops below the threshold.
pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/// Extends a persistent entry. The entry must exist.
pub fn extend_persistent<K>(env: &Env, key: &K)
where
    K: IntoVal<Env, Val>,
{
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

#[cfg(test)]
mod test {
    use super::*;
    use soroban_sdk::testutils::storage::{Instance as _, Persistent as _};
    use soroban_sdk::{contract, contractimpl, symbol_short};

    #[contract]
    pub struct Dummy;

    #[contractimpl]
    impl Dummy {
        pub fn version() -> u32 {
            1
        }
    }

    #[test]
    fn test_thresholds_leave_a_day_of_slack() {
        assert_eq!(INSTANCE_BUMP_AMOUNT - INSTANCE_LIFETIME_THRESHOLD, DAY_IN_LEDGERS);
        assert_eq!(
            PERSISTENT_BUMP_AMOUNT - PERSISTENT_LIFETIME_THRESHOLD,
            DAY_IN_LEDGERS
        );
    }

    #[test]
    fn test_extend_persistent_entry() {
        let env = Env::default();
        let contract_id = env.register(Dummy, ());
        let key = symbol_short!("KEY");

        env.as_contract(&contract_id, || {
            env.storage().persistent().set(&key, &true);
            extend_persistent(&env, &key);
            assert_eq!(env.storage().persistent().get_ttl(&key), PERSISTENT_BUMP_AMOUNT);

            extend_instance(&env);
            assert_eq!(env.storage().instance().get_ttl(), INSTANCE_BUMP_AMOUNT);
        });
    }
}
