use eddsa::{OrderMessage, Signature, generate_key_pair};
use num_bigint::BigUint;

fn main() {
    let key_pair = generate_key_pair("0xE20cF871f1646d8651ee9dC95AAB1d93160b3467Abc!12345");
    println!("publicKeyX: {}", key_pair.public_key_x());
    println!("publicKeyY: {}", key_pair.public_key_y());

    let order = OrderMessage {
        exchange_id: 1,
        order_id: 0,
        account_id: 14,
        dual_auth_public_key_x: key_pair.public_key().x.to_biguint(),
        dual_auth_public_key_y: key_pair.public_key().y.to_biguint(),
        token_s: 1,
        token_b: 3,
        amount_s: BigUint::from(10u32).pow(20),
        amount_b: BigUint::from(2u32) * BigUint::from(10u32).pow(20),
        all_or_none: false,
        valid_since: 1562889050,
        valid_until: 1562924050,
        max_fee_bips: 20,
        buy: true,
    };

    let signed = order
        .sign(&key_pair.secret_key_decimal())
        .expect("sign order");
    println!("Rx: {}", signed.signature.rx());
    println!("Ry: {}", signed.signature.ry());
    println!("S:  {}", signed.signature.s_decimal());

    let packed = signed.signature.pack().expect("pack signature");
    let hex: String = packed.iter().map(|b| format!("{b:02x}")).collect();
    println!("packed: {hex}");

    let sig_bytes = bincode::serialize(&signed.signature).expect("serialize sig");
    let sig2: Signature = bincode::deserialize(&sig_bytes).expect("deserialize sig");

    let ok = order.verify(&sig2, key_pair.public_key());
    assert!(ok);

    let from_packed = Signature::unpack(&packed).expect("unpack signature");
    assert!(order.verify(&from_packed, key_pair.public_key()));
}
