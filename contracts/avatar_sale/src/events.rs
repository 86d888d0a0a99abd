use soroban_sdk::{symbol_short, Address, Env};

//
// EVENTOS DA VENDA
//

// Compra liquidada: (quantidade, custo pago)
pub fn emit_purchase(env: &Env, buyer: &Address, wallet: &Address, quantity: u32, cost: i128) {
    env.events().publish(
        (symbol_short!("purchase"), buyer, wallet),
        (quantity, cost),
    );
}

// Venda configurada
pub fn emit_initialized(env: &Env, ledger: &Address, cap: u32, max_per_address: u32) {
    env.events().publish(
        (symbol_short!("sale_init"), ledger),
        (cap, max_per_address),
    );
}
